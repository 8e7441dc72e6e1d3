use crate::extractor::{ExtractError, Extracted, TextExtractor};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// XLSX (Excel) file handler
///
/// Cell text is stored in the shared string table at
/// xl/sharedStrings.xml; workbooks without one (numbers only) yield
/// empty output.
pub struct XlsxFile {
    path: std::path::PathBuf,
}

impl XlsxFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for XlsxFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| ExtractError::Extraction(format!("not a ZIP archive: {e}")))?;

        let shared_strings = match archive.by_name("xl/sharedStrings.xml") {
            Ok(entry) => entry,
            Err(_) => return Ok(Extracted::Text(String::new())),
        };

        let mut reader = Reader::from_reader(BufReader::new(shared_strings));
        reader.config_mut().trim_text(true);

        let mut content = String::with_capacity(8192);
        let mut buf = Vec::with_capacity(512);
        let mut in_si = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) if e.local_name().as_ref() == b"si" => {
                    in_si = true;
                }
                Ok(Event::End(e)) if e.local_name().as_ref() == b"si" => {
                    in_si = false;
                    content.push('\n');
                }
                Ok(Event::Text(e)) if in_si => {
                    if let Ok(text) = e.unescape() {
                        content.push_str(&text);
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(ExtractError::Extraction(format!(
                        "malformed shared string table: {e}"
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
