use crate::extractor::{ExtractError, Extracted, TextExtractor};
use std::path::Path;

/// CSV file handler
///
/// Fields are joined with commas and records with newlines, so quoting
/// and embedded separators from the source are normalized away.
pub struct CsvFile {
    path: std::path::PathBuf,
}

impl CsvFile {
    pub fn new(path: std::path::PathBuf) -> Self {
        Self { path }
    }
}

impl TextExtractor for CsvFile {
    fn extract(&self) -> Result<Extracted, ExtractError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| ExtractError::Extraction(format!("failed to open CSV: {e}")))?;

        let mut lines = Vec::new();
        for result in rdr.records() {
            let record =
                result.map_err(|e| ExtractError::Extraction(format!("malformed CSV: {e}")))?;
            lines.push(record.iter().collect::<Vec<_>>().join(","));
        }

        Ok(Extracted::Text(lines.join("\n")))
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_file_extraction() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        std::fs::write(&path, "name,age,city\nJohn,30,Paris\nJane,25,London").unwrap();

        let csv_file = CsvFile::new(path.clone());
        let text = match csv_file.extract().unwrap() {
            Extracted::Text(t) => t,
            Extracted::Bytes(_) => panic!("expected text"),
        };
        assert_eq!(text, "name,age,city\nJohn,30,Paris\nJane,25,London");
        assert_eq!(csv_file.path(), path);
    }

    #[test]
    fn test_csv_file_quoted_fields_normalized() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        std::fs::write(&path, "a,\"b c\",d\n1,2,3").unwrap();

        let csv_file = CsvFile::new(path);
        let text = match csv_file.extract().unwrap() {
            Extracted::Text(t) => t,
            Extracted::Bytes(_) => panic!("expected text"),
        };
        assert_eq!(text, "a,b c,d\n1,2,3");
    }
}
