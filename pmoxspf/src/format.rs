//! Interface commune aux adaptateurs de formats de playlists

use crate::{Result, TrackRecord};
use std::io::{BufRead, Write};
use std::path::Path;

/// Trait pour tout adaptateur de format de playlist (XSPF, M3U, PLS, ...)
///
/// Le répertoire de la playlist est transmis pour permettre la résolution de
/// chemins relatifs ; un format qui n'en a pas besoin l'ignore.
pub trait PlaylistParser {
    /// Nom lisible du format
    fn name(&self) -> &'static str;

    /// Extensions de fichier reconnues (sans le point)
    fn file_extensions(&self) -> &'static [&'static str];

    /// Type MIME du format
    fn mime_type(&self) -> &'static str;

    /// Test rapide sur le début d'un fichier : `true` si ce format mérite d'être essayé
    fn try_magic(&self, data: &[u8]) -> bool;

    /// Charge les morceaux valides d'une playlist
    fn load(&self, input: &mut dyn BufRead, playlist_dir: &Path) -> Vec<TrackRecord>;

    /// Écrit une playlist
    fn save(&self, tracks: &[TrackRecord], output: &mut dyn Write, playlist_dir: &Path)
    -> Result<()>;
}
