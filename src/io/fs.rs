use crate::error::{Result, SlugError};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn is_markdown(path: &Path) -> bool {
    path.extension().map(|s| s == "md").unwrap_or(false)
}

/// Ensure `path` names an existing directory
pub fn check_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(SlugError::file_not_found(path));
    }
    if !path.is_dir() {
        return Err(SlugError::not_a_directory(path));
    }
    Ok(())
}

/// All markdown files below `dir`, sorted by file name per directory
pub fn resolve_files(dir: &Path) -> Result<Vec<PathBuf>> {
    check_dir(dir)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| SlugError::Io(e.into()))?;
        if entry.file_type().is_file() && is_markdown(entry.path()) {
            files.push(entry.into_path());
        }
    }

    log::debug!("found {} markdown files in {}", files.len(), dir.display());
    Ok(files)
}

pub fn read_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| SlugError::read(path, e))
}

/// Replace `path` with `content` through a temporary file in the same directory
pub fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| SlugError::write(path, e))?;
    tmp.write_all(content.as_bytes())
        .and_then(|_| tmp.flush())
        .map_err(|e| SlugError::write(path, e))?;

    // Temp files are created 0600; keep the post's own mode.
    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| SlugError::write(path, e))?;
    }
    tmp.persist(path).map_err(|e| SlugError::write(path, e.error))?;

    Ok(())
}

/// Copy `path` next to itself with `suffix` appended to the file name
pub fn backup(path: &Path, suffix: &str) -> Result<PathBuf> {
    let mut name = path
        .file_name()
        .ok_or_else(|| SlugError::file_not_found(path))?
        .to_os_string();
    name.push(suffix);

    let backup_path = path.with_file_name(name);
    fs::copy(path, &backup_path).map_err(|e| SlugError::write(&backup_path, e))?;
    Ok(backup_path)
}
