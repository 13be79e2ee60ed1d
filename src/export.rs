use crate::config::LayoutConfig;
use crate::document::Document;
use crate::font::Font;
use crate::layout::{layout_text, replay};
use crate::style::TemplateStyle;
use crate::PDFError;
use std::fmt::Display;

/// Media type of the rendered document
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// A rendered resume, ready to be sent as a file download
#[derive(Debug, Clone, PartialEq)]
pub struct ExportedResume {
    /// `resume_<id>.pdf`
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedResume {
    /// Value for a `Content-Disposition` header offering the file as a download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// The download filename for the resume with the given id
pub fn attachment_filename<I: Display>(id: I) -> String {
    format!("resume_{id}.pdf")
}

/// Render resume text to PDF bytes.
///
/// The style's font is embedded first; if that fails nothing is laid out and
/// the error is returned. The text is then flowed over as many pages as it
/// needs (see [`layout_text`]) and the finished document is serialised.
pub fn render_resume(
    text: &str,
    style: TemplateStyle,
    config: &LayoutConfig,
) -> Result<Vec<u8>, PDFError> {
    let font = Font::embed(config.font_source(style))?;

    let mut doc = Document::default();
    if let Some(info) = config.info() {
        doc.set_info(info);
    }
    let font = doc.add_font(font);

    let params = config.flow_params();
    let pages = layout_text(text, &params, &doc.fonts[font]);
    replay(&pages, &params, &mut doc, font);

    doc.save()
}

/// Render a resume and package it for download as `resume_<id>.pdf`
pub fn export_resume<I: Display>(
    id: I,
    text: &str,
    style: TemplateStyle,
    config: &LayoutConfig,
) -> Result<ExportedResume, PDFError> {
    let filename = attachment_filename(id);
    let bytes = render_resume(text, style, config).map_err(|e| {
        log::error!("failed to render {filename}: {e}");
        e
    })?;
    log::info!("rendered {filename} ({style}, {} bytes)", bytes.len());

    Ok(ExportedResume {
        filename,
        content_type: PDF_CONTENT_TYPE,
        bytes,
    })
}
