//! Lays out generated resume text into paginated PDF documents.
//!
//! Text is word-wrapped against real font metrics, paginated on a fixed page
//! size and written with the font that belongs to the chosen
//! [`TemplateStyle`].
//!
//! ```
//! use resume_pdf::{export_resume, LayoutConfig, TemplateStyle};
//!
//! let style = TemplateStyle::from_name(Some("classic"));
//! let resume = export_resume(7, "Jane Doe\n\nSoftware engineer", style, &LayoutConfig::default())
//!     .expect("can render");
//! assert_eq!(resume.filename, "resume_7.pdf");
//! ```

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod export;
pub use export::*;

/// Fonts and their metrics
pub mod font;
pub use font::{Font, FontMetrics, FontSource};

mod info;
pub use info::*;

/// Word wrapping and pagination
pub mod layout;

mod page;
pub use page::*;

/// Named paper sizes
pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

mod style;
pub use style::*;

mod units;
pub use units::*;

/// Re-export PDF-writer functionality
pub use pdf_writer;
