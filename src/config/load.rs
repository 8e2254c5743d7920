use crate::config::types::JobFile;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub fn load_job_file(path: &Path) -> Result<JobFile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read job file {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse job file {}", path.display()))
}
