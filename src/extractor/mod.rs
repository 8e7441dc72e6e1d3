pub mod factory;
pub mod r#trait;
pub mod types;

pub use factory::ExtractorFactory;
pub use r#trait::{ExtractError, Extracted, TextExtractor};
pub use types::{CsvFile, DocFile, DocxFile, PdfFile, PptxFile, TextFile, XlsxFile};
