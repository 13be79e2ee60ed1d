//! Text flow: greedy word wrapping and pagination.
//!
//! [`layout_text`] turns a block of plain text into [`LaidOutPage`]s without
//! touching a document; [`replay`] then draws those pages into any
//! [`PageSink`], such as a [`Document`](crate::Document).
//!
//! # Example
//!
//! ```
//! use resume_pdf::font::StandardFont;
//! use resume_pdf::layout::{layout_text, FlowParams};
//!
//! let params = FlowParams::default();
//! let pages = layout_text("Jane Doe\n\nSoftware engineer", &params, &StandardFont::Helvetica);
//! assert_eq!(pages.len(), 1);
//! assert_eq!(pages[0].lines.len(), 2);
//! ```

mod flow;
mod wrap;

pub use flow::*;
pub use wrap::*;
