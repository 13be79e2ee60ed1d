use super::wrap::wrap_words;
use crate::font::FontMetrics;
use crate::pagesize::{self, PageSize};
use crate::units::Pt;

/// The geometry text is flowed into
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParams {
    pub page_size: PageSize,
    /// Applied to all four sides of every page
    pub margin: Pt,
    pub font_size: Pt,
    /// Extra space between wrapped lines, on top of the font size
    pub line_spacing: Pt,
}

impl Default for FlowParams {
    fn default() -> Self {
        FlowParams {
            page_size: pagesize::LETTER,
            margin: Pt(50.0),
            font_size: Pt(11.0),
            line_spacing: Pt(4.0),
        }
    }
}

impl FlowParams {
    /// Widest a line may be: the page width less both margins
    pub fn max_width(&self) -> Pt {
        self.page_size.0 - self.margin * 2.0
    }

    /// Baseline of the first line on a page
    pub fn top(&self) -> Pt {
        self.page_size.1 - self.margin
    }

    /// A line is never started below this
    pub fn bottom(&self) -> Pt {
        self.margin
    }

    /// How far the cursor drops after a line of text
    pub fn line_advance(&self) -> Pt {
        self.font_size + self.line_spacing
    }

    /// How far the cursor drops for an empty paragraph, without the
    /// extra line spacing of [`FlowParams::line_advance`].
    pub fn blank_advance(&self) -> Pt {
        self.font_size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: Pt,
    /// Baseline
    pub y: Pt,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LaidOutPage {
    pub lines: Vec<PlacedLine>,
}

/// The running state of a layout. Each step consumes the state and returns
/// the next one, so a whole document is a fold over its lines.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub current_page: usize,
    pub cursor_y: Pt,
    pub pages: Vec<LaidOutPage>,
}

impl LayoutState {
    /// A single empty page with the cursor at the top margin
    pub fn new(params: &FlowParams) -> LayoutState {
        LayoutState {
            current_page: 0,
            cursor_y: params.top(),
            pages: vec![LaidOutPage::default()],
        }
    }

    /// Leave a gap for an empty paragraph. Never starts a page on its own.
    pub fn skip_blank_line(mut self, params: &FlowParams) -> LayoutState {
        self.cursor_y -= params.blank_advance();
        self
    }

    /// Place a line at the cursor, first moving to a fresh page if the cursor
    /// has dropped below the bottom margin
    pub fn place_line(mut self, text: String, params: &FlowParams) -> LayoutState {
        if self.cursor_y < params.bottom() {
            self.pages.push(LaidOutPage::default());
            self.current_page = self.pages.len() - 1;
            self.cursor_y = params.top();
            log::debug!("starting page {}", self.current_page + 1);
        }

        self.pages[self.current_page].lines.push(PlacedLine {
            text,
            x: params.margin,
            y: self.cursor_y,
        });
        self.cursor_y -= params.line_advance();
        self
    }

    pub fn finish(self) -> Vec<LaidOutPage> {
        self.pages
    }
}

/// Lays out plain text, left-aligned and word-wrapped, over as many pages as
/// it needs.
///
/// The text is split into paragraphs on line breaks (`\n`, `\r\n` or `\r`).
/// Empty or whitespace-only paragraphs advance the cursor by the font size
/// and draw nothing; every other paragraph is wrapped with [`wrap_words`] and
/// its lines are placed one after another. There is always at least one page,
/// even for empty text.
pub fn layout_text<M: FontMetrics + ?Sized>(
    text: &str,
    params: &FlowParams,
    font: &M,
) -> Vec<LaidOutPage> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let max_width = params.max_width();

    let state = text
        .split('\n')
        .fold(LayoutState::new(params), |state, paragraph| {
            if paragraph.trim().is_empty() {
                return state.skip_blank_line(params);
            }
            wrap_words(paragraph, max_width, font, params.font_size)
                .into_iter()
                .fold(state, |state, line| state.place_line(line, params))
        });

    let pages = state.finish();
    log::debug!(
        "laid out {} lines over {} pages",
        pages.iter().map(|p| p.lines.len()).sum::<usize>(),
        pages.len()
    );
    pages
}

/// Something laid out pages can be drawn into
pub trait PageSink {
    /// How the sink refers to the font lines are drawn with
    type FontRef: Copy;

    /// Start a new page; subsequent text is drawn on it
    fn add_page(&mut self, size: PageSize, margin: Pt);

    /// Draw a line of text with its baseline origin at `at`
    fn draw_text(&mut self, text: &str, at: (Pt, Pt), font: Self::FontRef, size: Pt);
}

/// Draw laid out pages into a sink, in order
pub fn replay<S: PageSink + ?Sized>(
    pages: &[LaidOutPage],
    params: &FlowParams,
    sink: &mut S,
    font: S::FontRef,
) {
    for page in pages {
        sink.add_page(params.page_size, params.margin);
        for line in page.lines.iter() {
            sink.draw_text(&line.text, (line.x, line.y), font, params.font_size);
        }
    }
}
