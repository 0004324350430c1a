//! Accès à la bibliothèque de morceaux
//!
//! Un fichier local référencé par une playlist peut déjà être catalogué, avec
//! des métadonnées plus riches que celles du XSPF. Le lecteur interroge la
//! bibliothèque via [`TrackLibrary`] et préfère le morceau qu'elle renvoie.

use crate::TrackRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Résolution d'un chemin local vers un morceau déjà connu
pub trait TrackLibrary {
    /// Retourne le morceau catalogué pour ce chemin, s'il existe
    fn resolve(&self, path: &Path) -> Option<TrackRecord>;
}

impl<T: TrackLibrary + ?Sized> TrackLibrary for &T {
    fn resolve(&self, path: &Path) -> Option<TrackRecord> {
        (**self).resolve(path)
    }
}

impl<T: TrackLibrary + ?Sized> TrackLibrary for Box<T> {
    fn resolve(&self, path: &Path) -> Option<TrackRecord> {
        (**self).resolve(path)
    }
}

/// Bibliothèque vide : aucun chemin n'est jamais résolu
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLibrary;

impl TrackLibrary for NoLibrary {
    fn resolve(&self, _path: &Path) -> Option<TrackRecord> {
        None
    }
}

/// Bibliothèque en mémoire indexée par chemin
#[derive(Debug, Clone, Default)]
pub struct MemoryLibrary {
    tracks: HashMap<PathBuf, TrackRecord>,
}

impl MemoryLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute (ou remplace) le morceau associé à un chemin
    pub fn insert(&mut self, path: impl Into<PathBuf>, track: TrackRecord) -> Option<TrackRecord> {
        self.tracks.insert(path.into(), track)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

impl TrackLibrary for MemoryLibrary {
    fn resolve(&self, path: &Path) -> Option<TrackRecord> {
        self.tracks.get(path).cloned()
    }
}

impl FromIterator<(PathBuf, TrackRecord)> for MemoryLibrary {
    fn from_iter<I: IntoIterator<Item = (PathBuf, TrackRecord)>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}
