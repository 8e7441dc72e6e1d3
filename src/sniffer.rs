use anyhow::{Context, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Bytes read from the head of a file for type detection
const HEADER_LEN: usize = 8192;

/// Detect the MIME type of the file at `path`.
///
/// Magic-byte detection via the `infer` crate, with a printable-text
/// heuristic for content that carries no signature. I/O failures are
/// fatal to the conversion attempt and propagate.
pub fn sniff(path: &Path) -> Result<String> {
    let mut file = File::open(path)
        .with_context(|| format!("Failed to open file for sniffing: {}", path.display()))?;

    let mut buffer = [0u8; HEADER_LEN];
    let bytes_read = file
        .read(&mut buffer)
        .with_context(|| format!("Failed to read file header: {}", path.display()))?;

    Ok(sniff_buffer(&buffer[..bytes_read]).to_string())
}

/// Detect the MIME type of a header buffer
pub fn sniff_buffer(buffer: &[u8]) -> &'static str {
    if buffer.is_empty() {
        // Empty files are considered text
        return "text/plain";
    }

    if let Some(file_type) = infer::get(buffer) {
        return file_type.mime_type();
    }

    // No magic bytes matched - check if it's text
    if is_likely_text(buffer) {
        "text/plain"
    } else {
        "application/octet-stream"
    }
}

/// Check if a buffer appears to be printable text
fn is_likely_text(buffer: &[u8]) -> bool {
    if buffer.contains(&0) {
        return false;
    }

    let text = match std::str::from_utf8(buffer) {
        Ok(text) => text,
        // A multi-byte character may be cut off at the header boundary
        Err(e) if buffer.len() == HEADER_LEN && buffer.len() - e.valid_up_to() < 4 => {
            match std::str::from_utf8(&buffer[..e.valid_up_to()]) {
                Ok(text) => text,
                Err(_) => return false,
            }
        }
        Err(_) => return false,
    };

    let total = text.chars().count();
    if total == 0 {
        return false;
    }
    let printable = text
        .chars()
        .filter(|c| !c.is_control() || matches!(*c, '\n' | '\r' | '\t'))
        .count();

    (printable as f64 / total as f64) > 0.95
}
