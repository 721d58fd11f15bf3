//! Fonts available to a [Document](crate::Document).
//!
//! Two kinds of fonts are supported:
//!
//! - [`EmbeddedFont`]: a TrueType / OpenType face loaded from disk and embedded
//!   whole in the generated PDF
//! - [`StandardFont`]: one of the base-14 Helvetica faces, referenced by name and
//!   never embedded
//!
//! Typically, fonts are referred to throughout user applications by their [Id]
//! within the document itself.

mod embedded;
mod standard;

pub use embedded::*;
pub use standard::*;

use crate::refs::{ObjectReferences, RefType};
use crate::{BadgeError, Pt};
use id_arena::Id;
use owned_ttf_parser::OwnedFace;
use pdf_writer::{Name, Pdf};
use std::fmt::Write as _;
use std::path::Path;

/// A font that text on a page can be set in
pub enum Font {
    Embedded(EmbeddedFont),
    Standard(StandardFont),
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, BadgeError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(Font::Embedded(EmbeddedFont::new(face)))
    }

    /// Read and parse a font file from disk
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Font, BadgeError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| BadgeError::FontFile {
            path: path.to_path_buf(),
            source,
        })?;
        Font::load(bytes)
    }

    /// Obtain a human-readable name of the font
    pub fn name(&self) -> String {
        match self {
            Font::Embedded(font) => font.name().unwrap_or_else(|| "embedded font".to_string()),
            Font::Standard(font) => font.base_font().to_string(),
        }
    }

    /// Advance width of a single character at the given size
    pub fn advance(&self, ch: char, size: Pt) -> Pt {
        let units = match self {
            Font::Embedded(font) => font.advance(ch),
            Font::Standard(font) => font.advance(ch) as f32,
        };
        size * (units / 1000.0)
    }

    /// Encode text as the hex string operand of a `Tj` operator
    pub(crate) fn encode_hex(&self, text: &str) -> String {
        let mut hex = String::with_capacity(text.len() * 4);
        for ch in text.chars() {
            // writing to a String cannot fail
            let _ = match self {
                Font::Embedded(font) => write!(hex, "{:04x}", font.glyph_id(ch)),
                Font::Standard(_) => write!(hex, "{:02x}", win_ansi(ch).unwrap_or(b'?')),
            };
        }
        hex
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        let font_index = id.index();
        match self {
            Font::Embedded(font) => font.write(refs, font_index, writer),
            Font::Standard(font) => {
                let font_id = refs.gen(RefType::Font(font_index));
                writer
                    .type1_font(font_id)
                    .base_font(Name(font.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Font {
        Font::Standard(font)
    }
}
