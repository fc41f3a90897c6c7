use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Directory not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a text file
pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::at(path))
}

/// Write a text file, creating parent directories as needed
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }
    fs::write(path, content).map_err(IoError::at(path))
}

/// Scan for markdown files under `root`, sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::at(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::at(dir))?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_markdown(&path) {
            files.push(path);
        }
    }

    Ok(())
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"))
}

/// Mirror `src` into `dest`.
///
/// `dest` is created if missing and emptied if present (the directory itself
/// is kept). Returns every file written, sorted.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_dir(src)?;

    fs::create_dir_all(dest).map_err(IoError::at(dest))?;
    clear_directory(dest)?;

    let mut copied = Vec::new();
    copy_directory_recursive(src, dest, &mut copied)?;
    copied.sort();
    Ok(copied)
}

/// Remove everything inside `dir` but not `dir` itself.
fn clear_directory(dir: &Path) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::at(dir))?;

    for entry in entries {
        let entry = entry.map_err(IoError::at(dir))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(IoError::at(&path))?;

        if file_type.is_dir() {
            fs::remove_dir_all(&path).map_err(IoError::at(&path))?;
        } else {
            // Files and symlinks (including symlinks to directories)
            fs::remove_file(&path).map_err(IoError::at(&path))?;
        }
    }

    Ok(())
}

fn copy_directory_recursive(
    src: &Path,
    dest: &Path,
    copied: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    fs::create_dir_all(dest).map_err(IoError::at(dest))?;
    let entries = fs::read_dir(src).map_err(IoError::at(src))?;

    for entry in entries {
        let entry = entry.map_err(IoError::at(src))?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            copy_directory_recursive(&from, &to, copied)?;
        } else {
            fs::copy(&from, &to).map_err(IoError::at(&from))?;
            log::info!("Copied {} -> {}", from.display(), to.display());
            copied.push(to);
        }
    }

    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }

    Ok(())
}
