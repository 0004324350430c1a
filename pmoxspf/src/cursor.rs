//! Curseur de lecture XML en mode « pull »
//!
//! Surcouche minimale de `quick_xml::Reader` : avance jeton par jeton, expose
//! le nom local des balises et lit le texte d'un élément. Le curseur ne
//! revient jamais en arrière. Une erreur XML ou d'entrée/sortie est
//! journalisée puis traitée comme une fin de flux.

use std::io::BufRead;

use quick_xml::escape::resolve_predefined_entity;
use quick_xml::{Error as XmlError, Reader, events::Event};
use tracing::warn;

/// Jeton XML vu par le lecteur de playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Balise ouvrante (nom local, sans préfixe d'espace de noms)
    Start(String),
    /// Balise fermante (nom local)
    End(String),
    /// Texte, commentaire, déclaration, ...
    Other,
}

pub struct TokenCursor<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    finished: bool,
}

impl<R: BufRead> TokenCursor<R> {
    pub fn new(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        let config = reader.config_mut();
        // Le texte des éléments est rendu tel quel ; <a/> donne Start + End.
        config.trim_text(false);
        config.expand_empty_elements = true;

        Self {
            reader,
            buf: Vec::new(),
            finished: false,
        }
    }

    /// `true` une fois la fin du document (ou une erreur) atteinte
    pub fn at_end(&self) -> bool {
        self.finished
    }

    /// Avance d'un jeton. Renvoie `None` en fin de flux.
    pub fn next_token(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        self.buf.clear();
        match self.reader.read_event_into(&mut self.buf) {
            Ok(Event::Start(e)) => Some(Token::Start(
                String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
            )),
            Ok(Event::End(e)) => Some(Token::End(
                String::from_utf8_lossy(e.local_name().as_ref()).into_owned(),
            )),
            Ok(Event::Eof) => {
                self.finished = true;
                None
            }
            Ok(_) => Some(Token::Other),
            Err(e) => {
                self.stop(&e);
                None
            }
        }
    }

    /// Avance jusqu'à la prochaine balise ouvrante `name`.
    ///
    /// Renvoie `false` si la fin du flux est atteinte avant.
    pub fn parse_until_element(&mut self, name: &str) -> bool {
        while let Some(token) = self.next_token() {
            if matches!(&token, Token::Start(n) if n == name) {
                return true;
            }
        }
        false
    }

    /// Lit le contenu texte de l'élément qui vient d'être ouvert.
    ///
    /// À appeler juste après un [`Token::Start`]. Le curseur est laissé après
    /// la balise fermante correspondante. Les références de caractères et les
    /// entités prédéfinies sont résolues ; les sous-éléments sont ignorés.
    pub fn read_element_text(&mut self) -> String {
        let mut text = String::new();
        if let Err(e) = self.collect_text(&mut text) {
            self.stop(&e);
        }
        text
    }

    fn collect_text(&mut self, text: &mut String) -> Result<(), XmlError> {
        let mut depth = 0usize;

        while !self.finished {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(_) => depth += 1,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(());
                    }
                    depth -= 1;
                }
                Event::Text(e) if depth == 0 => {
                    text.push_str(&e.decode().map_err(XmlError::Encoding)?);
                }
                Event::CData(e) if depth == 0 => {
                    text.push_str(&e.decode().map_err(XmlError::Encoding)?);
                }
                Event::GeneralRef(e) if depth == 0 => {
                    if let Some(ch) = e.resolve_char_ref()? {
                        text.push(ch);
                    } else {
                        let name = e.decode().map_err(XmlError::Encoding)?;
                        match resolve_predefined_entity(&name) {
                            Some(value) => text.push_str(value),
                            None => {
                                text.push('&');
                                text.push_str(&name);
                                text.push(';');
                            }
                        }
                    }
                }
                Event::Eof => self.finished = true,
                _ => {}
            }
        }

        Ok(())
    }

    fn stop(&mut self, error: &XmlError) {
        warn!(
            "XML error at byte {}, stopping: {}",
            self.reader.buffer_position(),
            error
        );
        self.finished = true;
    }
}
