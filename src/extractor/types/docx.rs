use crate::extractor::{ExtractError, Extracted, TextExtractor};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// DOCX (Word) file handler
///
/// DOCX files are ZIP archives; the main document content lives in
/// word/document.xml.
pub struct DocxFile {
    path: std::path::PathBuf,
}

impl DocxFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for DocxFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| ExtractError::Extraction(format!("not a ZIP archive: {e}")))?;

        let document = archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractError::Extraction(format!("missing word/document.xml: {e}")))?;

        let mut reader = Reader::from_reader(BufReader::new(document));
        reader.config_mut().trim_text(true);

        let mut content = String::with_capacity(8192);
        let mut buf = Vec::with_capacity(1024);

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Text(e)) => {
                    if let Ok(text) = e.unescape() {
                        content.push_str(&text);
                        content.push(' ');
                    }
                }
                // Paragraph boundaries become line breaks
                Ok(Event::End(e)) if e.local_name().as_ref() == b"p" => {
                    content.push('\n');
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractError::Extraction(format!(
                        "malformed document XML: {e}"
                    )))
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(Extracted::Text(content.trim().to_string()))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use zip::write::FileOptions;
    use zip::ZipWriter;

    fn create_test_docx(document_xml: &str) -> (tempfile::TempPath, std::path::PathBuf) {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();

        let file = std::fs::File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("[Content_Types].xml", FileOptions::default())
            .unwrap();
        zip.write_all(b"<Types/>").unwrap();
        zip.start_file("word/document.xml", FileOptions::default())
            .unwrap();
        zip.write_all(document_xml.as_bytes()).unwrap();
        zip.finish().unwrap();

        (temp_file.into_temp_path(), path)
    }

    #[test]
    fn test_docx_file_extraction() {
        let xml = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    <w:p><w:r><w:t>Hello from Word</w:t></w:r></w:p>
    <w:p><w:r><w:t>Second paragraph</w:t></w:r></w:p>
  </w:body>
</w:document>"#;
        let (_temp_path, docx_path) = create_test_docx(xml);

        let docx_file = DocxFile::new(docx_path.clone());
        let text = match docx_file.extract().unwrap() {
            Extracted::Text(t) => t,
            Extracted::Bytes(_) => panic!("expected text"),
        };
        assert!(text.contains("Hello from Word"));
        assert!(text.contains("Second paragraph"));
        assert_eq!(docx_file.path(), docx_path);
    }

    #[test]
    fn test_docx_file_not_a_zip() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        std::fs::write(&path, "not zipped at all").unwrap();

        let docx_file = DocxFile::new(path);
        let err = docx_file.extract().unwrap_err();
        assert_eq!(err.kind(), "ExtractionFailed");
    }

    #[test]
    fn test_docx_file_missing_document_xml() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        let file = std::fs::File::create(&path).unwrap();
        let mut zip = ZipWriter::new(file);
        zip.start_file("unrelated.txt", FileOptions::default())
            .unwrap();
        zip.write_all(b"filler").unwrap();
        zip.finish().unwrap();

        let docx_file = DocxFile::new(path);
        let err = docx_file.extract().unwrap_err();
        assert!(err.to_string().contains("word/document.xml"));
    }
}
