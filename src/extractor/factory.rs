use crate::config::AntiwordConfig;
use crate::extractor::types::{CsvFile, DocFile, DocxFile, PdfFile, PptxFile, TextFile, XlsxFile};
use crate::extractor::TextExtractor;
use std::path::PathBuf;

/// Factory for creating TextExtractor instances based on file extension
pub struct ExtractorFactory;

impl ExtractorFactory {
    /// Create a TextExtractor for the given extension, or `None` when
    /// the format is not supported.
    ///
    /// The legacy Word extractor needs the antiword settings; everything
    /// else only needs the path.
    pub fn create(
        path: PathBuf,
        extension: Option<&str>,
        antiword: &AntiwordConfig,
    ) -> Option<Box<dyn TextExtractor>> {
        let ext_lower = extension.map(|s| s.to_lowercase());

        match ext_lower.as_deref() {
            Some("txt") | Some("md") | Some("log") => Some(Box::new(TextFile::new(path))),
            Some("csv") => Some(Box::new(CsvFile::new(path))),
            Some("pdf") => Some(Box::new(PdfFile::new(path))),
            Some("doc") => Some(Box::new(DocFile::new(path, antiword.clone()))),
            Some("docx") => Some(Box::new(DocxFile::new(path))),
            Some("pptx") => Some(Box::new(PptxFile::new(path))),
            Some("xlsx") => Some(Box::new(XlsxFile::new(path))),
            _ => None,
        }
    }
}
