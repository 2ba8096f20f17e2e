//! Destructive cleanup stages that run once conversion and flattening are
//! done. All of these operate on the top level of the root directory only.

use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::StageReport;
use crate::walker;
use std::fs;

/// Delete every top-level `.zip` archive.
pub fn remove_archives(config: &AppConfig) -> Result<StageReport, AppError> {
    let root = config.root();
    let mut report = StageReport::new("remove-archives");

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if walker::is_archive(&path) {
            // No file type check; a directory named `*.zip` is a fatal error.
            fs::remove_file(&path)?;
            log::info!("Deleted zip: {:?}", entry.file_name());
            report.processed += 1;
        }
    }

    Ok(report)
}

/// Delete every top-level subdirectory, recursively.
pub fn remove_subdirs(config: &AppConfig) -> Result<StageReport, AppError> {
    let root = config.root();
    let mut report = StageReport::new("remove-subdirs");

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(entry.path())?;
            log::info!("Deleted folder: {:?}", entry.file_name());
            report.processed += 1;
        }
    }

    Ok(report)
}

/// Delete leftover `.mov` files and any directory that appeared since the
/// subdirectory sweep.
pub fn remove_strays(config: &AppConfig) -> Result<StageReport, AppError> {
    let root = config.root();
    let mut report = StageReport::new("remove-strays");

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if entry.file_type()?.is_dir() {
            fs::remove_dir_all(&path)?;
            log::info!("Deleted folder: {:?}", entry.file_name());
            report.processed += 1;
        } else if walker::has_extension(&path, "mov") {
            fs::remove_file(&path)?;
            log::info!("Deleted .mov file: {:?}", entry.file_name());
            report.processed += 1;
        }
    }

    Ok(report)
}
