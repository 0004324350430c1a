//! # pmoxspf - Lecture et écriture de playlists XSPF
//!
//! Cette crate convertit entre les documents XSPF (XML Shareable Playlist
//! Format) et une liste ordonnée de [`TrackRecord`] :
//! - Lecture tolérante : structure absente, fichiers manquants ou durées
//!   illisibles ne produisent jamais d'erreur
//! - Résolution des fichiers locaux via une bibliothèque ([`TrackLibrary`])
//! - Écriture configurable (indentation, pochettes embarquées)
//! - Détection rapide du format ([`try_magic`])
//!
//! # Format
//!
//! ```xml
//! <playlist version="1" xmlns="http://xspf.org/ns/0/">
//!   <trackList>
//!     <track>
//!       <location>file:///music/song.flac</location>
//!       <title>Song</title>
//!       <creator>Artist</creator>
//!       <album>Album</album>
//!       <duration>180000</duration>
//!       <image>file:///music/cover.jpg</image>
//!     </track>
//!   </trackList>
//! </playlist>
//! ```
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use pmoxspf::{MemoryLibrary, XspfParser};
//!
//! # fn main() -> pmoxspf::Result<()> {
//! let library = MemoryLibrary::new();
//! let parser = XspfParser::with_library(&library);
//!
//! let tracks = parser.load_file("/music/favorites.xspf")?;
//! for track in &tracks {
//!     println!("{} - {}", track.artist, track.title);
//! }
//!
//! parser.save_file(&tracks, "/music/favorites-copy.xspf")?;
//! # Ok(())
//! # }
//! ```

mod config;
mod cursor;
mod error;
mod format;
mod library;
mod magic;
mod parser;
mod reader;
mod track;
mod writer;

// Réexports publics
pub use config::{WriterConfig, XspfConfig};
pub use error::{Error, Result};
pub use format::PlaylistParser;
pub use library::{MemoryLibrary, NoLibrary, TrackLibrary};
pub use magic::try_magic;
pub use parser::{XSPF_NAMESPACE, XspfParser};
pub use track::{TrackKind, TrackLocation, TrackRecord};
