use std::path::PathBuf;
use thiserror::Error;

/// The main error type for page-to-alto operations.
///
/// Configuration and precondition errors are raised before any output is
/// built; data errors abort at the point of failure, naming the offending
/// element. Warnings (border fallback, uncontained regions) go through `log`
/// instead and never abort a conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse PAGE-XML from {path}: {message}")]
    PageParse { path: PathBuf, message: String },

    #[error("Converting to ALTO-XML v{0} is not supported")]
    UnsupportedVersion(String),

    #[error("Invalid value '{value}' for {option}")]
    InvalidOption { option: &'static str, value: String },

    #[error(
        "Line '{line_id}' has TextEquiv but no words, so it cannot be converted \
         to ALTO without losing information. Use --no-check-words to override"
    )]
    WordsMissing { line_id: String },

    #[error("The PAGE-XML to transform contains neither Border nor PrintSpace")]
    BorderMissing,

    #[error("Cannot handle PAGE-XML {kind}Region '{region_id}'")]
    UnmappedRegionKind { region_id: String, kind: String },

    #[error("PAGE element '{element_id}' has no TextEquivs and fallback strategy is to raise")]
    NoTextEquiv { element_id: String },

    #[error("PAGE element '{element_id}' has no TextEquiv with index {index}")]
    TextEquivIndexMissing { element_id: String, index: u32 },
}
