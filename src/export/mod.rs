//! Calendar export.
//!
//! The exporter only reads the catalog. The produced [`CalendarFile`] is
//! what the UI offers as a download.

pub mod ics;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::fs;

pub use ics::{clock_value, export_ics, ExportSettings, TimeConvention, DEFAULT_PRODUCT_ID};

/// File name offered for the exported calendar
pub const EXPORT_FILE_NAME: &str = "sikkim_events.ics";

/// MIME type of the exported calendar
pub const EXPORT_MIME_TYPE: &str = "text/calendar;charset=utf-8";

/// A downloadable calendar document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarFile {
    body: String,
}

impl CalendarFile {
    pub fn new(body: String) -> Self {
        Self { body }
    }

    pub fn file_name(&self) -> &'static str {
        EXPORT_FILE_NAME
    }

    pub fn mime_type(&self) -> &'static str {
        EXPORT_MIME_TYPE
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Write the file into `dir`, creating it if needed
    pub async fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;

        let path = dir.join(self.file_name());
        fs::write(&path, &self.body)
            .await
            .with_context(|| format!("Failed to write calendar: {}", path.display()))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_to_creates_file() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("exports");
        let file = CalendarFile::new("BEGIN:VCALENDAR\nEND:VCALENDAR".to_string());

        let path = file.write_to(&dir).await.unwrap();

        assert_eq!(path, dir.join("sikkim_events.ics"));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "BEGIN:VCALENDAR\nEND:VCALENDAR"
        );
    }

    #[test]
    fn test_download_metadata() {
        let file = CalendarFile::new(String::new());
        assert_eq!(file.file_name(), "sikkim_events.ics");
        assert_eq!(file.mime_type(), "text/calendar;charset=utf-8");
    }
}
