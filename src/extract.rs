use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::StageReport;
use crate::walker;
use std::fs::{self, File};
use std::io::BufReader;
use zip::ZipArchive;

/// Extract every top-level `.zip` archive into a sibling directory named
/// after the archive's stem. Archive errors abort the run.
pub fn run(config: &AppConfig) -> Result<StageReport, AppError> {
    let root = config.root();
    let mut report = StageReport::new("extract");

    let mut entries: Vec<_> = fs::read_dir(root)?.collect::<Result<_, _>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let path = entry.path();
        if !walker::is_archive(&path) {
            continue;
        }
        let stem = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_owned(),
            None => {
                log::trace!("Skipping archive with unusable name: {:?}", path);
                continue;
            }
        };

        log::info!("Unzipping {:?}...", entry.file_name());
        let out_dir = root.join(&stem);
        if !out_dir.exists() {
            fs::create_dir(&out_dir)?;
        }
        let mut archive = ZipArchive::new(BufReader::new(File::open(&path)?))?;
        archive.extract(&out_dir)?;
        log::debug!("Extracted {} file(s) from {:?}", archive.len(), path);
        report.processed += 1;
    }

    Ok(report)
}
