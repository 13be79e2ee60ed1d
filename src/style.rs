use crate::font::StandardFont;
use serde::Deserialize;
use std::fmt;

/// The visual template a resume is rendered with. Each style is bound to
/// exactly one font family.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// Sans-serif (Helvetica)
    #[default]
    Modern,
    /// Serif (Times-Roman)
    Classic,
    /// Monospace (Courier)
    Minimalist,
}

impl TemplateStyle {
    pub const ALL: [TemplateStyle; 3] = [
        TemplateStyle::Modern,
        TemplateStyle::Classic,
        TemplateStyle::Minimalist,
    ];

    /// Resolve a style from its (optional) name. Anything that isn't one of
    /// `modern`, `classic` or `minimalist` is treated as `modern`. Names are
    /// matched exactly, without case folding or trimming.
    pub fn from_name(name: Option<&str>) -> TemplateStyle {
        match name {
            Some("classic") => TemplateStyle::Classic,
            Some("minimalist") => TemplateStyle::Minimalist,
            Some("modern") | None => TemplateStyle::Modern,
            Some(other) => {
                log::debug!("unknown template style {other:?}, using modern");
                TemplateStyle::Modern
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateStyle::Modern => "modern",
            TemplateStyle::Classic => "classic",
            TemplateStyle::Minimalist => "minimalist",
        }
    }

    /// The built-in font used for this style when no override is configured
    pub fn standard_font(self) -> StandardFont {
        match self {
            TemplateStyle::Modern => StandardFont::Helvetica,
            TemplateStyle::Classic => StandardFont::TimesRoman,
            TemplateStyle::Minimalist => StandardFont::Courier,
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
