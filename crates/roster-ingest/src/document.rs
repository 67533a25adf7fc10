//! Order-document text loading.

use std::path::Path;

use crate::error::{IngestError, Result};

/// Read a document as plain text.
///
/// Word documents are exported to text upstream; this loads the export
/// with line endings normalized to `\n` so paragraph splitting sees
/// consistent blank lines.
pub fn read_document(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(raw.replace("\r\n", "\n").replace('\r', "\n"))
}
