use super::charts::LOG_TARGET;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use std::fs;

/// The timestamped files written at the end of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFiles {
    pub json: Utf8PathBuf,
    pub html: Utf8PathBuf,
}

impl OutputFiles {
    /// File paths for a run started at `generated_at`.
    #[must_use]
    pub fn for_run(output_dir: &Utf8Path, generated_at: DateTime<Utc>) -> Self {
        let stamp = generated_at.format("%Y%m%d_%H%M%S");
        Self {
            json: output_dir.join(format!("dashboard_data_{stamp}.json")),
            html: output_dir.join(format!("dashboard_{stamp}.html")),
        }
    }

    /// Write the JSON snapshot followed by the HTML dashboard.
    pub fn write(&self, json: &str, html: &str) -> Result<()> {
        fs::write(&self.json, json).with_context(|| format!("writing '{}'", self.json))?;
        log::info!(target: LOG_TARGET, "Wrote '{}'", self.json);

        fs::write(&self.html, html).with_context(|| format!("writing '{}'", self.html))?;
        log::info!(target: LOG_TARGET, "Wrote '{}'", self.html);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_file_names_are_timestamped() {
        let at = Utc.with_ymd_and_hms(2025, 7, 4, 9, 8, 7).unwrap();
        let files = OutputFiles::for_run(Utf8Path::new("/tmp/out"), at);
        assert_eq!(files.json, Utf8PathBuf::from("/tmp/out/dashboard_data_20250704_090807.json"));
        assert_eq!(files.html, Utf8PathBuf::from("/tmp/out/dashboard_20250704_090807.html"));
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_creates_both_files() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();
        let files = OutputFiles::for_run(&dir, Utc::now());

        files.write("{}", "<html></html>").unwrap();
        assert_eq!(fs::read_to_string(&files.json).unwrap(), "{}");
        assert_eq!(fs::read_to_string(&files.html).unwrap(), "<html></html>");
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let files = OutputFiles::for_run(Utf8Path::new("/definitely/not/here"), Utc::now());
        assert!(files.write("{}", "").is_err());
    }
}
