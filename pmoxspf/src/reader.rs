//! Lecture d'un document XSPF

use crate::cursor::{Token, TokenCursor};
use crate::{TrackLibrary, TrackLocation, TrackRecord, XspfParser};
use std::io::BufRead;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, trace, warn};
use url::Url;

impl<L: TrackLibrary> XspfParser<L> {
    /// Charge les morceaux d'un document XSPF.
    ///
    /// Ne renvoie jamais d'erreur : un document sans `<playlist>` ou sans
    /// `<trackList>` donne une liste vide, les morceaux invalides (fichier
    /// local introuvable, pas d'emplacement) sont ignorés et un document
    /// tronqué est lu jusqu'où c'est possible.
    ///
    /// `playlist_dir` n'est pas utilisé par ce format.
    pub fn load(&self, input: impl BufRead, _playlist_dir: &Path) -> Vec<TrackRecord> {
        let mut cursor = TokenCursor::new(input);
        let mut tracks = Vec::new();

        if !cursor.parse_until_element("playlist") || !cursor.parse_until_element("trackList") {
            debug!("No XSPF playlist/trackList element found, nothing to load");
            return tracks;
        }

        while !cursor.at_end() && cursor.parse_until_element("track") {
            let track = self.parse_track(&mut cursor);
            if track.is_valid() {
                trace!("Loaded track {:?}", track.location);
                tracks.push(track);
            } else {
                trace!("Dropping invalid track");
            }
        }

        debug!("Loaded {} XSPF tracks", tracks.len());
        tracks
    }

    /// Lit un élément `<track>` dont la balise ouvrante vient d'être consommée.
    ///
    /// Un emplacement `file://` termine la lecture immédiatement : le reste
    /// de l'élément est laissé au curseur, que la recherche du `<track>`
    /// suivant saute.
    fn parse_track<R: BufRead>(&self, cursor: &mut TokenCursor<R>) -> TrackRecord {
        let mut track = TrackRecord::new();

        while let Some(token) = cursor.next_token() {
            match token {
                Token::Start(name) => match name.as_str() {
                    "location" => {
                        let text = cursor.read_element_text();
                        let text = text.trim();
                        match Url::parse(text) {
                            Ok(url) if url.scheme() == "file" => {
                                return self.resolve_local_file(&url);
                            }
                            _ if text.is_empty() => {}
                            _ => track.location = Some(TrackLocation::Stream(text.to_string())),
                        }
                    }
                    "title" => track.title = cursor.read_element_text(),
                    "creator" => track.artist = cursor.read_element_text(),
                    "album" => track.album = cursor.read_element_text(),
                    "duration" => track.duration = parse_duration(&cursor.read_element_text()),
                    // Reconnus mais pas encore exploités
                    "image" | "info" => {
                        cursor.read_element_text();
                    }
                    _ => {}
                },
                Token::End(name) if name == "track" => return track,
                _ => {}
            }
        }

        // Pas de </track> : on garde ce qui a été lu.
        warn!("XSPF document ended inside a <track> element");
        track
    }

    fn resolve_local_file(&self, url: &Url) -> TrackRecord {
        let Some(path) = pmoutils::to_local_path(url) else {
            warn!("Cannot convert {} to a local path, skipping track", url);
            return TrackRecord::new();
        };

        if !pmoutils::file_exists(&path) {
            warn!("Playlist references missing file {}, skipping track", path.display());
            return TrackRecord::new();
        }

        if let Some(known) = self.library.resolve(&path).filter(TrackRecord::is_valid) {
            trace!("Using library track for {}", path.display());
            return known;
        }

        TrackRecord::from_file(path)
    }
}

/// Durée XSPF (millisecondes) vers secondes entières, tronquées
///
/// Les millisecondes fractionnaires (`183456.5`) sont acceptées et tronquées.
fn parse_duration(text: &str) -> Option<Duration> {
    let text = text.trim();
    let ms = match text.parse::<u64>() {
        Ok(ms) => ms,
        Err(_) => {
            let ms = text.parse::<f64>().ok()?;
            if !ms.is_finite() || ms < 0.0 {
                return None;
            }
            ms as u64
        }
    };
    Some(Duration::from_secs(ms / 1000))
}
