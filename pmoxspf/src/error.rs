//! Types d'erreurs pour pmoxspf

/// Erreurs de lecture/écriture de playlists XSPF
///
/// Le chargement d'une playlist ne produit jamais d'erreur de format : seules
/// les erreurs d'entrée/sortie et de configuration remontent à l'appelant.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML writer error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),
}

/// Type Result spécialisé pour pmoxspf
pub type Result<T> = std::result::Result<T, Error>;
