use resume_pdf::{
    attachment_filename, export_resume, render_resume, FontOverrides, LayoutConfig, PDFError,
    TemplateStyle,
};
use std::path::PathBuf;

fn page_count(bytes: &[u8]) -> usize {
    lopdf::Document::load_mem(bytes)
        .expect("output parses as a PDF")
        .get_pages()
        .len()
}

fn dejavu_serif() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fonts/DejaVuSerif.ttf")
}

fn long_text() -> String {
    (0..10)
        .map(|i| format!("SECTION {i}\n{}", lipsum::lipsum(120)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[test]
fn empty_text_is_a_single_blank_page() {
    let bytes = render_resume("", TemplateStyle::Modern, &LayoutConfig::default())
        .expect("empty text renders");
    assert_eq!(page_count(&bytes), 1);
}

#[test]
fn short_resume_is_one_page() {
    let bytes = render_resume(
        "Jane Doe\n\nSoftware Engineer\nRust, Go, SQL",
        TemplateStyle::Classic,
        &LayoutConfig::default(),
    )
    .expect("renders");
    assert_eq!(page_count(&bytes), 1);
    assert!(String::from_utf8_lossy(&bytes).contains("/BaseFont /Times-Roman"));
}

#[test]
fn long_resume_spans_pages() {
    let bytes = render_resume(&long_text(), TemplateStyle::Minimalist, &LayoutConfig::default())
        .expect("renders");
    assert!(page_count(&bytes) > 1);
    assert!(String::from_utf8_lossy(&bytes).contains("/BaseFont /Courier"));
}

#[test]
fn smaller_paper_needs_more_pages() {
    let text = long_text();
    let letter = LayoutConfig::default();
    let a5 = LayoutConfig::from_toml_str("paper = \"a5\"").expect("config parses");

    let on_letter = page_count(&render_resume(&text, TemplateStyle::Modern, &letter).expect("renders"));
    let on_a5 = page_count(&render_resume(&text, TemplateStyle::Modern, &a5).expect("renders"));
    assert!(on_a5 > on_letter);
}

#[test]
fn renders_are_byte_identical_without_info() {
    let text = long_text();
    let config = LayoutConfig::default();
    for style in TemplateStyle::ALL {
        let first = render_resume(&text, style, &config).expect("renders");
        let second = render_resume(&text, style, &config).expect("renders");
        assert_eq!(first, second, "{style}");
    }
}

#[test]
fn document_info_is_written_when_configured() {
    let config = LayoutConfig {
        title: Some("Jane Doe".into()),
        author: Some("Jane Doe".into()),
        ..LayoutConfig::default()
    };
    let bytes = render_resume("Jane Doe", TemplateStyle::Modern, &config).expect("renders");
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Title (Jane Doe)"));
    assert!(pdf.contains("/CreationDate"));
}

#[test]
fn missing_font_override_fails_the_whole_render() {
    let config = LayoutConfig {
        fonts: FontOverrides {
            classic: Some(PathBuf::from("/nonexistent/fonts/Serif.ttf")),
            ..FontOverrides::default()
        },
        ..LayoutConfig::default()
    };

    let err = render_resume("Jane Doe", TemplateStyle::Classic, &config)
        .expect_err("font is missing");
    assert!(matches!(err, PDFError::FontUnavailable { .. }));

    // other styles are unaffected
    render_resume("Jane Doe", TemplateStyle::Modern, &config).expect("modern still renders");
}

#[test]
fn truetype_override_is_embedded_and_extractable() {
    let config = LayoutConfig::from_toml_str(&format!(
        "[fonts]\nclassic = {:?}\n",
        dejavu_serif().display().to_string()
    ))
    .expect("config parses");

    let bytes = render_resume(
        "Jane Doe\n\nCafé manager, Zürich",
        TemplateStyle::Classic,
        &config,
    )
    .expect("renders with an embedded font");
    let pdf = String::from_utf8_lossy(&bytes);
    assert!(pdf.contains("/Identity-H"));
    assert!(pdf.contains("/CIDFontType2"));
    assert!(pdf.contains("/BaseFont /DejaVuSerif"));
    assert!(!pdf.contains("/Times-Roman"));

    let doc = lopdf::Document::load_mem(&bytes).expect("output parses as a PDF");
    assert_eq!(doc.get_pages().len(), 1);
    let text = doc.extract_text(&[1]).expect("text extracts");
    assert!(text.contains("Jane Doe"), "{text:?}");
    assert!(text.contains("Café manager, Zürich"), "{text:?}");

    let long = render_resume(&long_text(), TemplateStyle::Classic, &config).expect("renders");
    assert!(page_count(&long) > 1);
}

#[test]
fn export_names_the_attachment() {
    let exported = export_resume(
        "65a0f3",
        "Jane Doe",
        TemplateStyle::from_name(Some("minimalist")),
        &LayoutConfig::default(),
    )
    .expect("exports");
    assert_eq!(exported.filename, attachment_filename("65a0f3"));
    assert_eq!(exported.filename, "resume_65a0f3.pdf");
    assert_eq!(exported.content_type, "application/pdf");
    assert_eq!(page_count(&exported.bytes), 1);
}
