/// Utilitaires pour la conversion entre chemins locaux et URLs.
///
/// Les adaptateurs de playlists (XSPF, ...) stockent les emplacements des
/// morceaux sous forme d'URL. Ce module fournit les conversions dans les deux
/// sens.
///
/// # Fonctions principales
///
/// - [`make_url`] : Convertit un chemin local en URL `file://` (les URLs passent telles quelles)
/// - [`to_local_path`] : Retrouve le chemin local d'une URL `file://`
///
/// # Examples
///
/// ```
/// use pmoutils::make_url;
///
/// assert_eq!(make_url("http://radio.example/stream"), "http://radio.example/stream");
/// ```
mod url_utils;

pub use url_utils::{has_url_scheme, make_url, to_local_path};

use std::path::Path;

/// Indique si un fichier existe sur le disque.
///
/// Les erreurs d'accès (permissions, lien cassé) sont traitées comme une
/// absence de fichier.
///
/// # Exemples
///
/// ```
/// use pmoutils::file_exists;
/// use std::path::Path;
///
/// assert!(!file_exists(Path::new("/this/path/does/not/exist.mp3")));
/// ```
pub fn file_exists(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
