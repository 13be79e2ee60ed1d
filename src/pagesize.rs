//! Pre-defined page sizes for the paper formats a resume is printed on.
//!
//! All sizes are (width, height) in portrait orientation.

use crate::units::*;
use serde::Deserialize;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(14.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));
pub const A5: PageSize = (Pt(148.0 * 72.0 / 25.4), Pt(210.0 * 72.0 / 25.4));

/// Paper format selectable from configuration
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    Letter,
    Legal,
    A4,
    A5,
}

impl Paper {
    pub fn size(self) -> PageSize {
        match self {
            Paper::Letter => LETTER,
            Paper::Legal => LEGAL,
            Paper::A4 => A4,
            Paper::A5 => A5,
        }
    }
}
