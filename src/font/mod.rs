//! Fonts that text can be measured and drawn with.
//!
//! Each [`TemplateStyle`](crate::TemplateStyle) is bound to one of the built-in
//! [`StandardFont`]s, which can optionally be replaced by a [`TrueTypeFont`]
//! loaded from disk. Layout only ever sees the [`FontMetrics`] trait.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use pdf_writer::{Name, Pdf};
use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;

/// Measures the rendered width of strings
pub trait FontMetrics {
    /// Width of `text` set on a single line at `size`, in points
    fn width_of_text(&self, text: &str, size: Pt) -> Pt;
}

/// Where the font for a style comes from
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    Standard(StandardFont),
    TrueTypeFile(PathBuf),
    TrueTypeBytes(Vec<u8>),
}

/// A font that has been resolved and can be added to a [`Document`](crate::Document)
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Resolve a font source. Failure here is fatal for a render: nothing is
    /// laid out without a font.
    pub fn embed(source: FontSource) -> Result<Font, PDFError> {
        let font = match source {
            FontSource::Standard(font) => Font::Standard(font),
            FontSource::TrueTypeFile(path) => {
                Font::TrueType(TrueTypeFont::open(&path).map_err(|e| match e {
                    PDFError::Io(io) => PDFError::FontUnavailable {
                        name: path.display().to_string(),
                        reason: io.to_string(),
                    },
                    e => e,
                })?)
            }
            FontSource::TrueTypeBytes(bytes) => Font::TrueType(TrueTypeFont::load(bytes)?),
        };
        log::debug!("embedded font {}", font.name());
        Ok(font)
    }

    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.base_font().to_string(),
            Font::TrueType(font) => font.name(),
        }
    }

    /// Write `text` as a PDF string operand for this font, returning how many
    /// characters couldn't be represented and were substituted
    pub(crate) fn write_string<W: Write>(&self, text: &str, out: &mut W) -> std::io::Result<usize> {
        match self {
            Font::Standard(_) => {
                let (bytes, substituted) = StandardFont::encode(text);
                write!(out, "<")?;
                for b in bytes {
                    write!(out, "{b:02x}")?;
                }
                write!(out, ">")?;
                Ok(substituted)
            }
            Font::TrueType(font) => {
                font.encode_hex(text, out)?;
                Ok(0)
            }
        }
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeSet<char>,
        writer: &mut Pdf,
    ) {
        match self {
            Font::Standard(font) => {
                let id = refs.gen(RefType::Font(font_index));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_font().as_bytes()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::TrueType(font) => font.write(refs, font_index, used, writer),
        }
    }
}

impl FontMetrics for Font {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.width_of_text(text, size),
            Font::TrueType(font) => font.width_of_text(text, size),
        }
    }
}
