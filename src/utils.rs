use std::path::{Path, PathBuf};

/// Get file extension from path (without the dot)
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// True when the path already carries a `.txt` extension, in any case
pub fn has_txt_extension(path: &Path) -> bool {
    get_extension(path).as_deref() == Some("txt")
}

/// Append `.txt` to the full file name, keeping whatever extension it had
pub fn append_txt_extension(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".txt");
    PathBuf::from(name)
}

/// Extension the file had before the trailing `.txt` suffix.
///
/// `report.doc.txt` yields `doc`, `notes.txt` yields `None`.
pub fn inner_extension(path: &Path) -> Option<String> {
    get_extension(&path.with_extension(""))
}
