use crate::extractor::{ExtractError, Extracted, TextExtractor};
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use zip::ZipArchive;

/// PPTX (PowerPoint) file handler
///
/// Slides are stored in ppt/slides/slide1.xml, slide2.xml, and so on;
/// probing by name avoids iterating the whole archive.
pub struct PptxFile {
    path: std::path::PathBuf,
}

impl PptxFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for PptxFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        let file = File::open(&self.path)?;
        let mut archive = ZipArchive::new(file)
            .map_err(|e| ExtractError::Extraction(format!("not a ZIP archive: {e}")))?;

        let mut content = String::with_capacity(8192);
        let mut slide_num = 1;

        loop {
            let slide_name = format!("ppt/slides/slide{}.xml", slide_num);
            let slide = match archive.by_name(&slide_name) {
                Ok(slide) => slide,
                // No more slides
                Err(_) => break,
            };

            let mut reader = Reader::from_reader(BufReader::new(slide));
            reader.config_mut().trim_text(true);

            let mut buf = Vec::with_capacity(512);
            loop {
                match reader.read_event_into(&mut buf) {
                    Ok(Event::Text(e)) => {
                        if let Ok(text) = e.unescape() {
                            content.push_str(&text);
                            content.push(' ');
                        }
                    }
                    Ok(Event::Eof) => break,
                    Err(e) => {
                        return Err(ExtractError::Extraction(format!(
                            "malformed slide XML in {slide_name}: {e}"
                        )))
                    }
                    _ => {}
                }
                buf.clear();
            }
            content.push('\n');
            slide_num += 1;
        }

        if slide_num == 1 {
            return Err(ExtractError::Extraction(
                "no slides found in presentation".to_string(),
            ));
        }

        Ok(Extracted::Text(content.trim().to_string()))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}
