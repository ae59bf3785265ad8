/// Saving a generated report to disk.
use super::REPORT_MIME;
use crate::error::ExportError;
use std::path::Path;
use tracing::info;

/// Write the report text to `path`, replacing any existing file.
pub fn write_report(path: &Path, text: &str) -> Result<(), ExportError> {
    std::fs::write(path, text).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        mime = REPORT_MIME,
        "Report saved to {} ({} bytes)",
        path.display(),
        text.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn writes_exact_bytes() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(crate::report::REPORT_FILE_NAME);
        write_report(&path, "line one\nline two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "line one\nline two");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("no_such_dir").join("report.txt");
        let err = write_report(&path, "x").unwrap_err();
        assert!(err.to_string().contains("report.txt"));
    }
}
