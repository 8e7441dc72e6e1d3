use crate::extractor::{ExtractError, Extracted, TextExtractor};
use std::path::Path;

/// Plain text file handler (txt, md, log)
///
/// Reads the file and re-encodes it as UTF-8; stray non-UTF-8 bytes are
/// replaced rather than rejected.
pub struct TextFile {
    path: std::path::PathBuf,
}

impl TextFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for TextFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        let bytes = std::fs::read(&self.path)?;
        match String::from_utf8(bytes) {
            Ok(text) => Ok(Extracted::Text(text)),
            Err(err) => Ok(Extracted::Text(
                String::from_utf8_lossy(err.as_bytes()).into_owned(),
            )),
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
