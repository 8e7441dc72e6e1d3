use crate::extractor::{ExtractError, Extracted, TextExtractor};
use std::path::Path;
use tracing::debug;

/// PDF file handler
pub struct PdfFile {
    path: std::path::PathBuf,
}

impl PdfFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for PdfFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        use lopdf::Document;

        let doc = Document::load(&self.path)
            .map_err(|e| ExtractError::Extraction(format!("failed to load PDF: {e}")))?;

        let mut text_content = String::new();

        // Extract text from all pages
        for page_num in doc.get_pages().keys() {
            if let Ok(page_text) = doc.extract_text(&[*page_num]) {
                text_content.push_str(&page_text);
                text_content.push('\n');
            }
        }

        if text_content.trim().is_empty() {
            // Fallback: try pdf-extract if lopdf doesn't extract text
            debug!(path = %self.path.display(), "lopdf found no text, trying pdf-extract");
            match pdf_extract::extract_text(&self.path) {
                Ok(text) => Ok(Extracted::Text(text.trim().to_string())),
                Err(_) => Ok(Extracted::Text(String::new())),
            }
        } else {
            Ok(Extracted::Text(text_content.trim().to_string()))
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
