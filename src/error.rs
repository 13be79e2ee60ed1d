use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a font override
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font `{name}` is unavailable: {reason}")]
    /// The font selected for a style could not be embedded in the document
    FontUnavailable { name: String, reason: String },

    #[error(transparent)]
    /// The layout configuration could not be parsed
    Config(#[from] toml::de::Error),
}
