use std::path::Path;
use thiserror::Error;

/// Content produced by an extractor.
///
/// Antiword hands back raw bytes on stdout; the XML and PDF extractors
/// produce strings. Both end up written to disk as UTF-8 bytes.
#[derive(Debug)]
pub enum Extracted {
    Text(String),
    Bytes(Vec<u8>),
}

impl Extracted {
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Extracted::Text(text) => text.into_bytes(),
            Extracted::Bytes(bytes) => bytes,
        }
    }
}

/// Recoverable extraction failures. These never escape the converter:
/// they are written into the target file as an error description.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no extractor for extension `{0}`")]
    UnsupportedFormat(String),
    #[error("{0}")]
    Extraction(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ExtractError {
    /// Stable type name, embedded in the error body written to the file.
    pub fn kind(&self) -> &'static str {
        match self {
            ExtractError::UnsupportedFormat(_) => "UnsupportedFormat",
            ExtractError::Extraction(_) => "ExtractionFailed",
            ExtractError::Io(_) => "IoError",
        }
    }
}

/// Trait for extracting plain text from a document file
pub trait TextExtractor {
    /// Extract the file's text content
    fn extract(&self) -> Result<Extracted, ExtractError>;

    /// Get the file path
    fn path(&self) -> &Path;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracted_text_into_bytes() {
        let extracted = Extracted::Text("hé".to_string());
        assert_eq!(extracted.into_bytes(), "hé".as_bytes());
    }

    #[test]
    fn test_extracted_bytes_passthrough() {
        let raw = vec![0xe2, 0x82, 0xac];
        let extracted = Extracted::Bytes(raw.clone());
        assert_eq!(extracted.into_bytes(), raw);
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            ExtractError::UnsupportedFormat("xyz".into()).kind(),
            "UnsupportedFormat"
        );
        assert_eq!(
            ExtractError::Extraction("broken".into()).kind(),
            "ExtractionFailed"
        );
        let io = ExtractError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert_eq!(io.kind(), "IoError");
    }
}
