use crate::font::FontSource;
use crate::info::Info;
use crate::layout::FlowParams;
use crate::pagesize::Paper;
use crate::style::TemplateStyle;
use crate::units::Pt;
use crate::PDFError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// TrueType files to use instead of a style's built-in font
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontOverrides {
    pub modern: Option<PathBuf>,
    pub classic: Option<PathBuf>,
    pub minimalist: Option<PathBuf>,
}

impl FontOverrides {
    pub fn get(&self, style: TemplateStyle) -> Option<&Path> {
        match style {
            TemplateStyle::Modern => self.modern.as_deref(),
            TemplateStyle::Classic => self.classic.as_deref(),
            TemplateStyle::Minimalist => self.minimalist.as_deref(),
        }
    }
}

/// Everything about how a resume is rendered apart from its text and style.
///
/// Every field has a default, so an empty TOML document is a valid config:
///
/// ```toml
/// paper = "a4"
/// margin = 56.0
/// font_size = 10.5
///
/// [fonts]
/// classic = "/usr/share/fonts/truetype/crimson/CrimsonPro-Regular.ttf"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    pub paper: Paper,
    pub margin: Pt,
    pub font_size: Pt,
    /// Added to the font size between wrapped lines
    pub line_spacing: Pt,
    pub fonts: FontOverrides,
    /// Document title; when neither this nor `author` is set no info block is written
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let flow = FlowParams::default();
        LayoutConfig {
            paper: Paper::default(),
            margin: flow.margin,
            font_size: flow.font_size,
            line_spacing: flow.line_spacing,
            fonts: FontOverrides::default(),
            title: None,
            author: None,
        }
    }
}

impl LayoutConfig {
    pub fn from_toml_str(source: &str) -> Result<LayoutConfig, PDFError> {
        Ok(toml::from_str(source)?)
    }

    /// Read a TOML config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LayoutConfig, PDFError> {
        let source = std::fs::read_to_string(path.as_ref())?;
        let config = LayoutConfig::from_toml_str(&source)?;
        log::debug!("loaded layout config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn flow_params(&self) -> FlowParams {
        FlowParams {
            page_size: self.paper.size(),
            margin: self.margin,
            font_size: self.font_size,
            line_spacing: self.line_spacing,
        }
    }

    /// The font a style renders with: its override if one is configured,
    /// otherwise its built-in font
    pub fn font_source(&self, style: TemplateStyle) -> FontSource {
        match self.fonts.get(style) {
            Some(path) => FontSource::TrueTypeFile(path.to_path_buf()),
            None => FontSource::Standard(style.standard_font()),
        }
    }

    /// Document info for the configured title and author, stamped with the
    /// current time
    pub fn info(&self) -> Option<Info> {
        if self.title.is_none() && self.author.is_none() {
            return None;
        }
        let mut info = Info::new();
        if let Some(title) = &self.title {
            info.title(title);
        }
        if let Some(author) = &self.author {
            info.author(author);
        }
        info.created_now();
        Some(info)
    }
}
