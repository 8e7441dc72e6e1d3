use crate::config::AntiwordConfig;
use crate::extractor::{ExtractError, Extracted, TextExtractor};
use cfb::CompoundFile;
use encoding_rs::WINDOWS_1252;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::process::Command;
use tracing::debug;

/// DOC (legacy Word binary) file handler
///
/// Primary path is the antiword tool; its resource directory and locale
/// travel as child-process environment variables, so the parent
/// environment is never touched. When antiword is not installed, a
/// native parse of the OLE compound document's WordDocument stream is
/// attempted instead.
pub struct DocFile {
    path: std::path::PathBuf,
    settings: AntiwordConfig,
}

impl DocFile {
    pub fn new(path: std::path::PathBuf, settings: AntiwordConfig) -> Self {
        Self { path, settings }
    }

    fn extract_with_antiword(&self) -> Result<Extracted, ExtractError> {
        let output = Command::new("antiword")
            .arg(&self.path)
            .env("ANTIWORDHOME", &self.settings.home)
            .env("LC_ALL", &self.settings.locale)
            .output()?;

        if output.status.success() {
            Ok(Extracted::Bytes(output.stdout))
        } else {
            Err(ExtractError::Extraction(format!(
                "antiword exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )))
        }
    }

    /// Pull text straight out of the WordDocument stream.
    ///
    /// The FIB stores the text boundaries at fixed offsets: fcMin at
    /// 0x18 and fcMac at 0x1C. The region between them is either
    /// UTF-16LE or an 8-bit codepage, most commonly Windows-1252.
    fn extract_compound(&self) -> Result<Extracted, ExtractError> {
        let file = File::open(&self.path)?;
        let mut compound = CompoundFile::open(file)
            .map_err(|e| ExtractError::Extraction(format!("not an OLE compound document: {e}")))?;

        let mut stream = compound
            .open_stream("/WordDocument")
            .map_err(|e| ExtractError::Extraction(format!("no WordDocument stream: {e}")))?;
        let mut data = Vec::new();
        stream.read_to_end(&mut data)?;

        if data.len() < 1472 {
            return Err(ExtractError::Extraction(
                "WordDocument stream too short for a FIB".to_string(),
            ));
        }

        let fc_min = read_u32_le(&data, 0x18) as usize;
        let fc_mac = read_u32_le(&data, 0x1C) as usize;
        if fc_min == 0 || fc_mac <= fc_min || fc_mac > data.len() {
            return Err(ExtractError::Extraction(
                "text boundaries in FIB are out of range".to_string(),
            ));
        }

        let region = &data[fc_min..fc_mac];

        // Latin text stored as UTF-16 is half NULs; use that to pick
        // the decode order.
        let nul_ratio = region.iter().filter(|b| **b == 0).count() as f64 / region.len() as f64;
        let decoded = if nul_ratio > 0.2 {
            decode_utf16le(region)
                .filter(|t| is_readable_text(t))
                .or_else(|| decode_windows1252(region).filter(|t| is_readable_text(t)))
        } else {
            decode_windows1252(region)
                .filter(|t| is_readable_text(t))
                .or_else(|| decode_utf16le(region).filter(|t| is_readable_text(t)))
        };

        match decoded {
            Some(text) => Ok(Extracted::Text(clean_extracted_text(&text))),
            None => Err(ExtractError::Extraction(
                "no readable text in WordDocument stream".to_string(),
            )),
        }
    }
}

impl TextExtractor for DocFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        match self.extract_with_antiword() {
            Err(ExtractError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "antiword not installed, parsing compound document");
                self.extract_compound()
            }
            result => result,
        }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

/// Decode UTF-16LE bytes to string
fn decode_utf16le(bytes: &[u8]) -> Option<String> {
    if bytes.len() < 2 {
        return None;
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    String::from_utf16(&units).ok()
}

/// Decode Windows-1252 encoded bytes
fn decode_windows1252(bytes: &[u8]) -> Option<String> {
    let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
    if had_errors {
        None
    } else {
        Some(decoded.into_owned())
    }
}

/// Word's paragraph mark is a bare CR; other control characters are
/// artifacts of the binary format.
fn clean_extracted_text(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\r' { '\n' } else { c })
        .filter(|c| !c.is_control() || matches!(*c, '\n' | '\t'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn is_readable_text(text: &str) -> bool {
    if text.len() < 10 {
        return false;
    }
    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let readable = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || c.is_ascii_punctuation())
        .count();
    (readable as f64 / total as f64) > 0.5
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    if offset + 4 > data.len() {
        return 0;
    }
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}
