use crate::{
    font::Font,
    info::Info,
    layout::PageSink,
    page::{Page, SpanFont, SpanLayout},
    pagesize::{self, PageSize},
    refs::{ObjectReferences, RefType},
    units::Pt,
    PDFError,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::collections::BTreeSet;
use std::io::Write;

#[derive(Default)]
/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write] or [Document::save]
pub struct Document {
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub fonts: Arena<Font>,
}

impl Document {
    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Add a font to the document. Fonts are shared by every page and referred
    /// to by the returned id.
    pub fn add_font(&mut self, font: Font) -> Id<Font> {
        self.fonts.alloc(font)
    }

    /// Every character drawn with each font, so only what is used gets written
    fn used_chars(&self) -> Vec<BTreeSet<char>> {
        let mut used = vec![BTreeSet::new(); self.fonts.len()];
        for span in self.pages.iter().flat_map(|page| page.contents.iter()) {
            used[span.font.id.index()].extend(span.text.chars());
        }
        used
    }

    /// Write the entire document to the writer. The whole document is rendered
    /// in memory first.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), PDFError> {
        let used = self.used_chars();
        let Document { info, pages, fonts } = self;

        let mut refs = ObjectReferences::new();
        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();
        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in fonts.iter() {
            font.write(&mut refs, id.index(), &used[id.index()], &mut writer);
        }

        let mut substituted = 0;
        for (page_index, page) in pages.iter().enumerate() {
            substituted += page.write(&mut refs, page_index, &fonts, &mut writer)?;
        }
        if substituted > 0 {
            log::warn!("{substituted} characters couldn't be encoded and were replaced with '?'");
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    /// Render the document to bytes
    pub fn save(self) -> Result<Vec<u8>, PDFError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        log::debug!("saved document ({} bytes)", bytes.len());
        Ok(bytes)
    }
}

impl PageSink for Document {
    type FontRef = Id<Font>;

    fn add_page(&mut self, size: PageSize, margin: Pt) {
        Document::add_page(self, Page::new(size, margin));
    }

    /// Draws on the last page, starting a bare Letter page if there is none yet
    fn draw_text(&mut self, text: &str, at: (Pt, Pt), font: Id<Font>, size: Pt) {
        if self.pages.is_empty() {
            Document::add_page(self, Page::new(pagesize::LETTER, Pt(0.0)));
        }
        if let Some(page) = self.pages.last_mut() {
            page.add_span(SpanLayout {
                text: text.to_string(),
                font: SpanFont { id: font, size },
                coords: at,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;

    #[test]
    fn sink_draws_on_latest_page() {
        let mut doc = Document::default();
        let font = doc.add_font(Font::Standard(StandardFont::TimesRoman));
        PageSink::add_page(&mut doc, pagesize::LETTER, Pt(50.0));
        doc.draw_text("one", (Pt(50.0), Pt(742.0)), font, Pt(11.0));
        PageSink::add_page(&mut doc, pagesize::LETTER, Pt(50.0));
        doc.draw_text("two", (Pt(50.0), Pt(742.0)), font, Pt(11.0));

        assert_eq!(doc.pages.len(), 2);
        assert_eq!(doc.pages[0].contents[0].text, "one");
        assert_eq!(doc.pages[1].contents[0].text, "two");
        assert_eq!(doc.pages[1].content_box.y2, Pt(742.0));
    }

    #[test]
    fn saved_bytes_are_a_pdf() {
        let mut doc = Document::default();
        let font = doc.add_font(Font::Standard(StandardFont::Helvetica));
        PageSink::add_page(&mut doc, pagesize::LETTER, Pt(50.0));
        doc.draw_text("Jane Doe", (Pt(50.0), Pt(742.0)), font, Pt(11.0));

        let bytes = doc.save().expect("can save");
        assert!(bytes.starts_with(b"%PDF-"));
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/BaseFont /Helvetica"));
        assert!(text.contains("/WinAnsiEncoding"));
    }
}
