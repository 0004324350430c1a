//! XspfParser : point d'entrée de l'adaptateur XSPF

use crate::{
    NoLibrary, PlaylistParser, Result, TrackLibrary, TrackRecord, XspfConfig, magic,
};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};
use tracing::debug;

/// Espace de noms XML des documents XSPF
pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";

/// Lecteur/écrivain de playlists XSPF
///
/// La bibliothèque `L` est consultée à la lecture : un fichier local déjà
/// catalogué est repris tel quel plutôt que reconstruit depuis le XML.
///
/// # Exemples
///
/// ```
/// use pmoxspf::{TrackRecord, XspfParser};
/// use std::path::Path;
///
/// let parser = XspfParser::new();
/// let tracks = vec![TrackRecord::stream("http://radio.example/live").with_title("Live")];
///
/// let mut xml = Vec::new();
/// parser.save(&tracks, &mut xml, Path::new("."))?;
///
/// let loaded = parser.load(xml.as_slice(), Path::new("."));
/// assert_eq!(loaded, tracks);
/// # Ok::<(), pmoxspf::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct XspfParser<L = NoLibrary> {
    pub(crate) library: L,
    pub(crate) config: XspfConfig,
}

impl XspfParser<NoLibrary> {
    /// Parser sans bibliothèque, configuration par défaut
    pub fn new() -> Self {
        Self::with_library(NoLibrary)
    }
}

impl Default for XspfParser<NoLibrary> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: TrackLibrary> XspfParser<L> {
    pub fn with_library(library: L) -> Self {
        Self::with_config(library, XspfConfig::default())
    }

    pub fn with_config(library: L, config: XspfConfig) -> Self {
        Self { library, config }
    }

    pub fn library(&self) -> &L {
        &self.library
    }

    pub fn config(&self) -> &XspfConfig {
        &self.config
    }

    /// Charge une playlist depuis un fichier
    ///
    /// Seule l'ouverture du fichier peut échouer ; le contenu est lu au mieux.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Vec<TrackRecord>> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let tracks = self.load(BufReader::new(file), playlist_dir(path));
        debug!("Loaded {} tracks from {}", tracks.len(), path.display());
        Ok(tracks)
    }

    /// Écrit une playlist dans un fichier (créé ou écrasé)
    pub fn save_file(&self, tracks: &[TrackRecord], path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.save(tracks, &mut writer, playlist_dir(path))?;
        writer.flush()?;
        debug!("Saved {} tracks to {}", tracks.len(), path.display());
        Ok(())
    }
}

fn playlist_dir(path: &Path) -> &Path {
    path.parent().unwrap_or(Path::new(""))
}

impl<L: TrackLibrary> PlaylistParser for XspfParser<L> {
    fn name(&self) -> &'static str {
        "XSPF"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["xspf"]
    }

    fn mime_type(&self) -> &'static str {
        "application/xspf+xml"
    }

    fn try_magic(&self, data: &[u8]) -> bool {
        magic::try_magic(data)
    }

    fn load(&self, input: &mut dyn BufRead, playlist_dir: &Path) -> Vec<TrackRecord> {
        XspfParser::load(self, input, playlist_dir)
    }

    fn save(
        &self,
        tracks: &[TrackRecord],
        output: &mut dyn Write,
        playlist_dir: &Path,
    ) -> Result<()> {
        XspfParser::save(self, tracks, output, playlist_dir)
    }
}
