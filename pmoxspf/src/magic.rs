//! Détection rapide du format XSPF

/// `true` si le tampon contient à la fois `<playlist` et `<trackList`.
///
/// Simple recherche de sous-chaînes sur le début d'un fichier : des faux
/// positifs sont possibles, un chargement complet reste nécessaire pour
/// confirmer.
///
/// ```
/// assert!(pmoxspf::try_magic(b"<playlist version=\"1\"><trackList>"));
/// assert!(!pmoxspf::try_magic(b"#EXTM3U\n"));
/// ```
pub fn try_magic(data: &[u8]) -> bool {
    contains(data, b"<playlist") && contains(data, b"<trackList")
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
