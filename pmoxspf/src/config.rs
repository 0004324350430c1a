//! Configuration de l'adaptateur XSPF
//!
//! Les valeurs par défaut sont des constantes, reprises dans le fichier
//! `pmoxspf.yaml` livré avec la crate ([`XspfConfig::embedded`]). Un fichier
//! YAML fourni par l'application peut en surcharger tout ou partie.
//!
//! ```
//! use pmoxspf::XspfConfig;
//!
//! let config = XspfConfig::from_yaml_str("writer:\n  indent: ~\n")?;
//! assert_eq!(config.writer.indent, None);
//! assert!(config.writer.write_declaration);
//! # Ok::<(), pmoxspf::Error>(())
//! ```

use crate::Result;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

// Configuration par défaut intégrée
const DEFAULT_CONFIG: &str = include_str!("pmoxspf.yaml");

const DEFAULT_INDENT: usize = 2;
const DEFAULT_BUNDLED_RESOURCE_PREFIX: &str = ":";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct XspfConfig {
    #[serde(default)]
    pub writer: WriterConfig,
}

/// Options d'écriture des documents XSPF
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Largeur d'indentation ; `None` écrit le document sur une ligne
    pub indent: Option<usize>,
    pub write_declaration: bool,
    /// Les pochettes dont le chemin commence par ce préfixe ne sont pas exportées
    pub bundled_resource_prefix: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: Some(DEFAULT_INDENT),
            write_declaration: true,
            bundled_resource_prefix: DEFAULT_BUNDLED_RESOURCE_PREFIX.to_string(),
        }
    }
}

impl XspfConfig {
    /// Configuration livrée avec la crate (`pmoxspf.yaml`)
    pub fn embedded() -> Result<Self> {
        Self::from_yaml_str(DEFAULT_CONFIG)
    }

    /// Parse une configuration YAML ; les clés absentes prennent leur valeur par défaut
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Charge la configuration depuis un fichier YAML
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading XSPF configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }
}
