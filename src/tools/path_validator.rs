use anyhow::{Result, bail};
use std::fs::OpenOptions;
use std::io;
use std::path::Path;

pub fn validate_directory_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        bail!("路徑不存在: {}", path.display());
    }
    if !path.is_dir() {
        bail!("路徑不是資料夾: {}", path.display());
    }
    Ok(())
}

/// 確認輸出路徑可寫入，不會建立或修改輸出檔案本身
///
/// An existing output is opened for writing without truncation; the parent
/// directory must accept a short-lived temporary file.
pub fn validate_output_writable(path: &Path) -> io::Result<()> {
    if path.as_os_str().is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "output path is empty",
        ));
    }

    if let Ok(metadata) = path.metadata() {
        if metadata.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "output path is a directory",
            ));
        }
        OpenOptions::new().write(true).open(path)?;
    }

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if !parent.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("output directory does not exist: {}", parent.display()),
        ));
    }

    tempfile::Builder::new()
        .prefix(".frameseq-check")
        .tempfile_in(parent)
        .map(drop)
}
