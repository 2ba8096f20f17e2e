use crate::error::AppError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Input formats the convert stage picks up. Everything else is left alone.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "heic"];

pub fn has_extension(path: &Path, wanted: &str) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => ext.eq_ignore_ascii_case(wanted),
        None => false,
    }
}

pub fn is_image(path: &Path) -> bool {
    IMAGE_EXTENSIONS.iter().any(|ext| has_extension(path, ext))
}

// Case-sensitive: an uppercase `.ZIP` is neither extracted nor deleted.
pub fn is_archive(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("zip")
}

/// Recursively collect image files under `root`, depth-first, entries sorted
/// by file name within each directory. Enumeration errors are fatal.
pub fn find_images(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    log::debug!("Starting image discovery in {:?}", root);

    let mut images = Vec::new();
    for entry in sorted_walk(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
            continue;
        }
        let path = entry.path();
        if is_image(path) {
            log::trace!("Discovered image file: {:?}", path);
            images.push(path.to_path_buf());
        } else {
            log::trace!("Skipping file due to unsupported extension: {:?}", path);
        }
    }

    log::debug!("Image discovery complete: {} file(s)", images.len());
    Ok(images)
}

/// Recursively collect every file under `root`, in the same order as
/// [`find_images`].
pub fn find_files(root: &Path) -> Result<Vec<PathBuf>, AppError> {
    let mut files = Vec::new();
    for entry in sorted_walk(root) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.path().to_path_buf());
        }
    }
    Ok(files)
}

fn sorted_walk(root: &Path) -> walkdir::IntoIter {
    WalkDir::new(root)
        .sort_by(|a, b| a.file_name().cmp(b.file_name()))
        .into_iter()
}
