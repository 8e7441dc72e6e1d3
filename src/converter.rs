use crate::config::Config;
use crate::extractor::{ExtractError, ExtractorFactory};
use crate::sniffer;
use crate::utils;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Converts a document file to plain text in place.
///
/// The file is renamed to carry a `.txt` suffix when it lacks one, then
/// its content is replaced by extracted plain text. Downstream pipeline
/// stages assume source and target location are the same, hence the
/// in-place overwrite.
pub struct Converter {
    config: Config,
}

impl Converter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Convert the file at `path` to UTF-8 plain text.
    ///
    /// Returns `Ok(true)` when the file ends up holding valid text
    /// (extracted, or already plain text, or passthrough when conversion
    /// is disabled) and `Ok(false)` when extraction failed — the file
    /// then holds a description of the failure instead of content.
    /// Filesystem and sniffing errors are fatal and propagate.
    pub fn convert(&self, path: &Path) -> Result<bool> {
        if !self.config.conversion.enabled {
            // passthrough
            return Ok(true);
        }

        let mimetype = sniffer::sniff(path)?;
        debug!(path = %path.display(), %mimetype, "detected media type");

        // always add a .txt extension if it is missing
        let mut filepath = path.to_path_buf();
        if !utils::has_txt_extension(&filepath) {
            let renamed = utils::append_txt_extension(&filepath);
            fs::rename(&filepath, &renamed).with_context(|| {
                format!(
                    "Failed to rename {} to {}",
                    filepath.display(),
                    renamed.display()
                )
            })?;
            filepath = renamed;
        }

        if mimetype == "text/plain" {
            // already plaintext, we're done
            return Ok(true);
        }

        // dispatch on the extension the file had before the forced rename
        let extension = utils::inner_extension(&filepath);
        let result = match ExtractorFactory::create(
            filepath.clone(),
            extension.as_deref(),
            &self.config.antiword,
        ) {
            Some(extractor) => extractor.extract(),
            None => Err(ExtractError::UnsupportedFormat(
                extension.unwrap_or_else(|| "(none)".to_string()),
            )),
        };

        let (success, content) = match result {
            Ok(extracted) => (true, extracted.into_bytes()),
            Err(error) => {
                warn!(path = %filepath.display(), %error, "extraction failed");
                (
                    false,
                    format!("Unexpected {}: {}", error.kind(), error).into_bytes(),
                )
            }
        };

        fs::write(&filepath, &content)
            .with_context(|| format!("Failed to write {}", filepath.display()))?;

        Ok(success)
    }
}
