use crate::font::FontMetrics;
use crate::units::Pt;

/// Greedily wraps one paragraph into lines narrower than `max_width`.
///
/// Words are separated by runs of ASCII whitespace and re-joined with single
/// spaces. Other spacing characters such as U+00A0 (no-break space) stay
/// inside their word, so the words they join are never broken apart. A word is appended to the current line as long as the line with
/// the word added measures strictly less than `max_width`; otherwise the
/// current line is closed and the word starts the next one. A word that is
/// wider than `max_width` on its own still gets its own line, unsplit.
///
/// A paragraph with no words produces no lines.
pub fn wrap_words<M: FontMetrics + ?Sized>(
    paragraph: &str,
    max_width: Pt,
    font: &M,
    size: Pt,
) -> Vec<String> {
    let mut words = paragraph.split_ascii_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current = first.to_string();
    for word in words {
        let candidate = format!("{current} {word}");
        if font.width_of_text(&candidate, size) < max_width {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    lines.push(current);

    lines
}
