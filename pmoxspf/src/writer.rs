//! Écriture d'un document XSPF

use crate::{Result, TrackRecord, XspfParser, parser::XSPF_NAMESPACE};
use pmoutils::make_url;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use std::io::Write;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, trace};

impl<L> XspfParser<L> {
    /// Écrit les morceaux sous forme de document XSPF.
    ///
    /// Chaque morceau est écrit tel quel, sans validation. Seules les erreurs
    /// du flux de sortie sont remontées.
    ///
    /// `playlist_dir` n'est pas utilisé par ce format.
    pub fn save(
        &self,
        tracks: &[TrackRecord],
        output: impl Write,
        _playlist_dir: &Path,
    ) -> Result<()> {
        let config = &self.config.writer;
        let mut writer = match config.indent {
            Some(width) if width > 0 => Writer::new_with_indent(output, b' ', width),
            _ => Writer::new(output),
        };

        if config.write_declaration {
            writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        }

        let playlist = BytesStart::new("playlist")
            .with_attributes([("version", "1"), ("xmlns", XSPF_NAMESPACE)]);
        writer.write_event(Event::Start(playlist))?;
        writer.write_event(Event::Start(BytesStart::new("trackList")))?;

        for track in tracks {
            self.write_track(&mut writer, track)?;
        }

        writer.write_event(Event::End(BytesEnd::new("trackList")))?;
        writer.write_event(Event::End(BytesEnd::new("playlist")))?;

        debug!("Wrote {} XSPF tracks", tracks.len());
        Ok(())
    }

    fn write_track<W: Write>(&self, writer: &mut Writer<W>, track: &TrackRecord) -> Result<()> {
        trace!("Writing track {:?}", track.location);
        writer.write_event(Event::Start(BytesStart::new("track")))?;

        let location = track
            .location
            .as_ref()
            .map(|location| make_url(&location.as_string()))
            .unwrap_or_default();
        write_text_element(writer, "location", &location)?;
        write_text_element(writer, "title", &track.title)?;

        if !track.artist.is_empty() {
            write_text_element(writer, "creator", &track.artist)?;
        }
        if !track.album.is_empty() {
            write_text_element(writer, "album", &track.album)?;
        }
        if let Some(duration) = track.duration {
            write_text_element(writer, "duration", &duration_millis(duration))?;
        }
        if let Some(art) = self.exported_artwork(track) {
            write_text_element(writer, "image", &make_url(art))?;
        }

        writer.write_event(Event::End(BytesEnd::new("track")))?;
        Ok(())
    }

    /// Pochette à exporter : ni vide, ni ressource embarquée dans l'application
    fn exported_artwork<'t>(&self, track: &'t TrackRecord) -> Option<&'t str> {
        let prefix = self.config.writer.bundled_resource_prefix.as_str();
        track
            .artwork
            .as_deref()
            .filter(|art| !art.is_empty())
            .filter(|art| prefix.is_empty() || !art.starts_with(prefix))
    }
}

/// Durée en millisecondes, éventuellement fractionnaire
fn duration_millis(duration: Duration) -> String {
    (duration.as_nanos() as f64 / 1e6).to_string()
}

fn write_text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<()> {
    if text.is_empty() {
        writer.write_event(Event::Empty(BytesStart::new(name)))?;
    } else {
        writer.write_event(Event::Start(BytesStart::new(name)))?;
        writer.write_event(Event::Text(BytesText::new(text)))?;
        writer.write_event(Event::End(BytesEnd::new(name)))?;
    }
    Ok(())
}
