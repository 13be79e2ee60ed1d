use super::FontMetrics;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use crate::PDFError;
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

/// A TrueType or OpenType face used in place of a built-in font. The whole
/// face is embedded (compressed) in the generated PDF, but only the widths of
/// glyphs the document actually draws are written out.
pub struct TrueTypeFont {
    face: OwnedFace,
}

impl TrueTypeFont {
    /// Parse a font from raw bytes. Faces without a character map can't be
    /// used to lay out text and are rejected.
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, PDFError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        let font = TrueTypeFont { face };
        if font.face().tables().cmap.is_none() {
            return Err(PDFError::FontUnavailable {
                name: font.name(),
                reason: "font has no cmap table".to_string(),
            });
        }
        Ok(font)
    }

    /// Read and parse a font file
    pub fn open<P: AsRef<Path>>(path: P) -> Result<TrueTypeFont, PDFError> {
        let bytes = std::fs::read(path.as_ref())?;
        log::debug!(
            "loaded {} bytes of font data from {}",
            bytes.len(),
            path.as_ref().display()
        );
        TrueTypeFont::load(bytes)
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// The PostScript name of the face, falling back to its full name
    pub fn name(&self) -> String {
        let names = self.face().names();
        [
            owned_ttf_parser::name_id::POST_SCRIPT_NAME,
            owned_ttf_parser::name_id::FULL_NAME,
        ]
        .into_iter()
        .find_map(|id| {
            names
                .into_iter()
                .find(|name| name.name_id == id && name.is_unicode())
                .and_then(|name| name.to_string())
        })
        .map(|name| name.replace(' ', ""))
        .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    fn scaling(&self) -> f32 {
        1000.0 / self.face().units_per_em() as f32
    }

    /// Glyph to draw for a character: the character's own glyph, else the
    /// replacement character, else `?`, else `.notdef`
    pub fn glyph_id(&self, ch: char) -> u16 {
        ['\u{FFFD}', '?']
            .into_iter()
            .fold(self.face().glyph_index(ch), |found, fallback| {
                found.or_else(|| self.face().glyph_index(fallback))
            })
            .map(|gid| gid.0)
            .unwrap_or(0)
    }

    fn advance(&self, gid: u16) -> u16 {
        self.face().glyph_hor_advance(GlyphId(gid)).unwrap_or_default()
    }

    /// Write text as a hex string of 2-byte glyph ids (Identity-H encoding)
    pub(crate) fn encode_hex<W: Write>(&self, text: &str, out: &mut W) -> std::io::Result<()> {
        write!(out, "<")?;
        for ch in text.chars() {
            write!(out, "{:04x}", self.glyph_id(ch))?;
        }
        write!(out, ">")
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        used: &BTreeSet<char>,
        writer: &mut Pdf,
    ) {
        let glyphs: BTreeMap<u16, char> = used.iter().map(|&ch| (self.glyph_id(ch), ch)).collect();
        let base_font = self.name();

        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, &base_font, &glyphs, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, &glyphs, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, base_font, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let scaling = self.scaling();

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(self.advance(0) as f32 * scaling);

        let mut widths = cid_font.widths();
        let advances = glyphs
            .keys()
            .map(|&gid| (gid, self.advance(gid) as f32 * scaling));
        for (start, run) in width_runs(advances) {
            widths.consecutive(start, run);
        }
        widths.finish();

        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        base_font: &str,
        writer: &mut Pdf,
    ) -> Ref {
        let face = self.face();
        let scaling = self.scaling();

        let data = miniz_oxide::deflate::compress_to_vec_zlib(
            self.face.as_slice(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        let data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(data_id, data.as_slice())
            .filter(Filter::FlateDecode)
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let bbox = face.global_bounding_box();
        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect::new(
            bbox.x_min as f32 * scaling,
            bbox.y_min as f32 * scaling,
            bbox.x_max as f32 * scaling,
            bbox.y_max as f32 * scaling,
        ));
        descriptor.italic_angle(0.0);
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.cap_height(
            face.capital_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(face.ascender() as f32 * scaling),
        );
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        glyphs: &BTreeMap<u16, char>,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut cmap = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let entries: Vec<(&u16, &char)> = glyphs.iter().filter(|(gid, _)| **gid != 0).collect();
        for block in entries.chunks(100) {
            cmap.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|u| format!("{u:04x}"))
                    .collect();
                cmap.push_str(&format!("<{gid:04x}> <{units}>\n"));
            }
            cmap.push_str("endbfchar\n");
        }
        cmap.push_str("endcmap\nCMapName currentdict /CMap defineresource pop\nend\nend\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            cmap.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }
}

/// Groups ascending `(glyph id, width)` pairs into runs of consecutive glyph
/// ids, each written as one `W` array entry.
fn width_runs<I: IntoIterator<Item = (u16, f32)>>(advances: I) -> Vec<(u16, Vec<f32>)> {
    let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
    for (gid, width) in advances {
        match runs.last_mut() {
            Some((start, ws)) if *start as usize + ws.len() == gid as usize => ws.push(width),
            _ => runs.push((gid, vec![width])),
        }
    }
    runs
}

impl FontMetrics for TrueTypeFont {
    fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .map(|ch| self.advance(self.glyph_id(ch)) as u32)
            .sum();
        size * (units as f32 / self.face().units_per_em() as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_are_rejected() {
        let err = TrueTypeFont::load(b"definitely not a font".to_vec())
            .err()
            .expect("garbage doesn't parse");
        assert!(matches!(err, PDFError::FaceParsingError(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TrueTypeFont::open("/nonexistent/fonts/Missing.ttf")
            .err()
            .expect("file doesn't exist");
        assert!(matches!(err, PDFError::Io(_)));
    }

    const DEJAVU_SERIF: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fonts/DejaVuSerif.ttf");

    #[test]
    fn consecutive_glyphs_share_a_width_run() {
        let runs = width_runs([(3, 500.0), (4, 510.0), (5, 520.0), (9, 600.0), (11, 610.0)]);
        assert_eq!(
            runs,
            vec![
                (3, vec![500.0, 510.0, 520.0]),
                (9, vec![600.0]),
                (11, vec![610.0]),
            ]
        );
        assert!(width_runs(std::iter::empty()).is_empty());
    }

    #[test]
    fn real_face_is_named_and_measured() {
        let font = TrueTypeFont::open(DEJAVU_SERIF).expect("fixture parses");
        assert_eq!(font.name(), "DejaVuSerif");
        assert_ne!(font.glyph_id('é'), 0);

        let narrow = font.width_of_text("iii", Pt(11.0));
        let wide = font.width_of_text("WWW", Pt(11.0));
        assert!(narrow > Pt(0.0));
        assert!(wide > narrow);
        assert_eq!(font.width_of_text("ab", Pt(22.0)), font.width_of_text("ab", Pt(11.0)) * 2.0);
    }

    #[test]
    fn glyph_ids_are_hex_encoded() {
        let font = TrueTypeFont::open(DEJAVU_SERIF).expect("fixture parses");
        let mut out = Vec::new();
        font.encode_hex("A", &mut out).expect("writes to a vec");
        assert_eq!(
            String::from_utf8(out).expect("ascii"),
            format!("<{:04x}>", font.glyph_id('A'))
        );
    }
}
