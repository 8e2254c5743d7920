use crate::config::types::JobFile;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::Path;

pub fn save_job_file(path: &Path, job_file: &JobFile, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!("Job file already exists: {}", path.display());
    }

    let content = serde_json::to_string_pretty(job_file).context("Failed to serialize job file")?;

    fs::write(path, content)
        .with_context(|| format!("Failed to write job file to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load::load_job_file;
    use tempfile::TempDir;

    #[test]
    fn test_saved_template_loads_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");

        save_job_file(&path, &JobFile::template(), false).unwrap();

        assert_eq!(load_job_file(&path).unwrap(), JobFile::template());
    }

    #[test]
    fn test_refuses_to_overwrite_without_flag() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("jobs.json");
        fs::write(&path, "keep me").unwrap();

        assert!(save_job_file(&path, &JobFile::template(), false).is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");

        save_job_file(&path, &JobFile::template(), true).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "keep me");
    }
}
