//! TrackRecord : une entrée de playlist en mémoire

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Nature de l'emplacement d'un morceau
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackKind {
    /// Fichier présent sur le système de fichiers local
    LocalFile,
    /// Flux distant (radio, HTTP, ...)
    Stream,
}

/// Emplacement d'un morceau : chemin local ou URL de flux
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackLocation {
    LocalFile(PathBuf),
    Stream(String),
}

impl TrackLocation {
    pub fn kind(&self) -> TrackKind {
        match self {
            TrackLocation::LocalFile(_) => TrackKind::LocalFile,
            TrackLocation::Stream(_) => TrackKind::Stream,
        }
    }

    /// Représentation textuelle brute (chemin ou URL), avant conversion en URL
    pub fn as_string(&self) -> String {
        match self {
            TrackLocation::LocalFile(path) => path.to_string_lossy().into_owned(),
            TrackLocation::Stream(url) => url.clone(),
        }
    }
}

/// Un morceau d'une playlist
///
/// Construit à neuf pour chaque élément `<track>` lu, ou fourni complet par
/// l'appelant à l'écriture. Les champs texte absents sont des chaînes vides,
/// une durée inconnue vaut `None`.
///
/// # Exemples
///
/// ```
/// use pmoxspf::TrackRecord;
/// use std::time::Duration;
///
/// let track = TrackRecord::stream("http://radio.example/live")
///     .with_title("Live")
///     .with_duration(Duration::from_secs(180));
///
/// assert!(track.is_valid());
/// assert_eq!(track.duration_secs(), Some(180));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub location: Option<TrackLocation>,
    pub title: String,
    pub artist: String,
    pub album: String,
    pub duration: Option<Duration>,
    /// Pochette (chemin local ou URL), utilisée uniquement à l'écriture
    pub artwork: Option<String>,
}

impl TrackRecord {
    /// Crée un morceau vide (invalide tant qu'aucun emplacement n'est défini)
    pub fn new() -> Self {
        Self::default()
    }

    /// Crée un morceau pointant vers un flux distant
    pub fn stream(url: impl Into<String>) -> Self {
        Self {
            location: Some(TrackLocation::Stream(url.into())),
            ..Self::default()
        }
    }

    /// Crée un morceau directement depuis un fichier local
    ///
    /// Aucune lecture de tags n'est faite ici : les champs texte restent vides
    /// et la durée est inconnue.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self {
            location: Some(TrackLocation::LocalFile(path.as_ref().to_path_buf())),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn with_artwork(mut self, artwork: impl Into<String>) -> Self {
        self.artwork = Some(artwork.into());
        self
    }

    /// Type d'emplacement, s'il est connu
    pub fn kind(&self) -> Option<TrackKind> {
        self.location.as_ref().map(TrackLocation::kind)
    }

    /// Durée en secondes entières
    pub fn duration_secs(&self) -> Option<u64> {
        self.duration.map(|d| d.as_secs())
    }

    /// Un morceau est valide s'il possède un emplacement exploitable
    pub fn is_valid(&self) -> bool {
        match &self.location {
            Some(TrackLocation::LocalFile(path)) => !path.as_os_str().is_empty(),
            Some(TrackLocation::Stream(url)) => !url.is_empty(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track_is_invalid() {
        let track = TrackRecord::new().with_title("Orphan");
        assert!(!track.is_valid());
        assert_eq!(track.kind(), None);
    }

    #[test]
    fn test_empty_locations_are_invalid() {
        assert!(!TrackRecord::stream("").is_valid());
        assert!(!TrackRecord::from_file("").is_valid());
    }

    #[test]
    fn test_kind_follows_location() {
        assert_eq!(
            TrackRecord::from_file("/music/a.flac").kind(),
            Some(TrackKind::LocalFile)
        );
        assert_eq!(
            TrackRecord::stream("http://host/live").kind(),
            Some(TrackKind::Stream)
        );
    }

    #[test]
    fn test_duration_secs_truncates() {
        let track = TrackRecord::new().with_duration(Duration::from_millis(2999));
        assert_eq!(track.duration_secs(), Some(2));
    }
}
