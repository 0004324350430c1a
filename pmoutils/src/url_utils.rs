use std::path::PathBuf;

use url::Url;

/// Indique si la chaîne commence par un schéma d'URL (`[a-z]+://`).
///
/// # Exemples
///
/// ```
/// use pmoutils::has_url_scheme;
///
/// assert!(has_url_scheme("https://example.com/a.mp3"));
/// assert!(!has_url_scheme("/music/a.mp3"));
/// ```
pub fn has_url_scheme(s: &str) -> bool {
    match s.find("://") {
        Some(0) | None => false,
        Some(idx) => s[..idx].bytes().all(|b| b.is_ascii_lowercase()),
    }
}

/// Construit une URL à partir d'un chemin local ou d'une URL existante.
///
/// - Une chaîne qui possède déjà un schéma est renvoyée telle quelle.
/// - Un chemin absolu devient une URL `file://` (avec encodage des caractères).
/// - Un chemin relatif ne peut pas être exprimé en URL `file` : il est renvoyé tel quel.
///   Relu depuis une playlist, il n'a pas de schéma `file` et sera donc vu comme un flux.
///
/// # Exemples
///
/// ```
/// use pmoutils::make_url;
///
/// # #[cfg(unix)]
/// assert_eq!(make_url("/music/My Song.mp3"), "file:///music/My%20Song.mp3");
/// assert_eq!(make_url("relative/song.mp3"), "relative/song.mp3");
/// ```
pub fn make_url(path_or_url: &str) -> String {
    if has_url_scheme(path_or_url) {
        return path_or_url.to_string();
    }

    match Url::from_file_path(path_or_url) {
        Ok(url) => url.to_string(),
        Err(()) => path_or_url.to_string(),
    }
}

/// Retourne le chemin local désigné par une URL `file://`.
///
/// Renvoie `None` pour les autres schémas, ou si l'URL ne peut pas être
/// convertie en chemin sur cette plateforme (hôte distant, par exemple).
pub fn to_local_path(url: &Url) -> Option<PathBuf> {
    if url.scheme() != "file" {
        return None;
    }
    url.to_file_path().ok()
}
