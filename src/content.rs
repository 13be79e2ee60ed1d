//! Content stream rendering for pages.

use crate::font::Font;
use crate::page::{SpanFont, SpanLayout};
use id_arena::Arena;
use std::io::Write;

/// Renders the spans of a page to PDF content stream operators. Text is
/// always drawn in black. Returns the stream along with the number of
/// characters the fonts couldn't represent.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    spans: &[SpanLayout],
    fonts: &Arena<Font>,
) -> Result<(Vec<u8>, usize), std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let mut substituted = 0;

    let Some(first) = spans.first() else {
        return Ok((content, substituted));
    };

    write!(content, "q\n")?;
    write!(content, "0 g\n")?;

    let mut current_font: SpanFont = first.font;
    write!(
        content,
        "/F{} {} Tf\n",
        current_font.id.index(),
        current_font.size
    )?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write!(
                content,
                "/F{} {} Tf\n",
                current_font.id.index(),
                current_font.size
            )?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", span.coords.0, span.coords.1)?;
        substituted += fonts[current_font.id].write_string(&span.text, &mut content)?;
        write!(content, " Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok((content, substituted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::StandardFont;
    use crate::units::Pt;

    #[test]
    fn empty_pages_have_empty_streams() {
        let fonts: Arena<Font> = Arena::new();
        let (content, substituted) = render_contents(&[], &fonts).expect("can render");
        assert!(content.is_empty());
        assert_eq!(substituted, 0);
    }

    #[test]
    fn spans_become_positioned_text() {
        let mut fonts: Arena<Font> = Arena::new();
        let id = fonts.alloc(Font::Standard(StandardFont::Helvetica));
        let font = SpanFont { id, size: Pt(11.0) };
        let spans = vec![
            SpanLayout {
                text: "Jane Doe".into(),
                font,
                coords: (Pt(50.0), Pt(742.0)),
            },
            SpanLayout {
                text: "Engineer \u{263A}".into(),
                font,
                coords: (Pt(50.0), Pt(727.0)),
            },
        ];

        let (content, substituted) = render_contents(&spans, &fonts).expect("can render");
        let content = String::from_utf8(content).expect("content is ascii");
        assert_eq!(substituted, 1);
        assert_eq!(content.matches(" Tf\n").count(), 1);
        assert!(content.contains("/F0 11 Tf\n"));
        assert!(content.contains("50 742 Td\n<4a616e6520446f65> Tj\n"));
        assert!(content.contains("50 727 Td\n"));
    }
}
