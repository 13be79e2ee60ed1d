//! Render a resume to `resume_<id>.pdf` in the current directory.
//!
//! ```text
//! cargo run --example resume -- [text-file] [style] [config.toml]
//! ```
//!
//! Without a text file, a generated resume of filler text is used.

use resume_pdf::{export_resume, LayoutConfig, TemplateStyle};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let text = match args.first() {
        Some(path) => std::fs::read_to_string(path).expect("can read resume text"),
        None => format!(
            "JANE DOE\nSoftware Engineer\n\nSUMMARY\n{}\n\nEXPERIENCE\n{}\n\n{}",
            lipsum::lipsum(60),
            lipsum::lipsum(400),
            lipsum::lipsum(400),
        ),
    };
    let style = TemplateStyle::from_name(args.get(1).map(String::as_str));
    let config = match args.get(2) {
        Some(path) => LayoutConfig::load(path).expect("can load config"),
        None => LayoutConfig::default(),
    };

    let resume = export_resume("demo", &text, style, &config).expect("can render resume");
    std::fs::write(&resume.filename, &resume.bytes).expect("can write pdf");
    println!("wrote {} ({} bytes)", resume.filename, resume.bytes.len());
}
