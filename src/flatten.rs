use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::StageReport;
use crate::walker;
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Move every `.webp` file found below the root directory up into the root,
/// renaming on collision (`img.webp`, `img_1.webp`, `img_2.webp`, ...).
pub fn run(config: &AppConfig) -> Result<StageReport, AppError> {
    let root = config.root();
    let mut report = StageReport::new("flatten");

    for path in walker::find_files(root)? {
        if !walker::has_extension(&path, "webp") {
            continue;
        }
        if path.parent() == Some(root) {
            continue;
        }
        let name = match path.file_name() {
            Some(name) => name.to_os_string(),
            None => continue,
        };

        let dest = free_destination(root, &name);
        fs::rename(&path, &dest)?;
        log::info!("Moved {:?} -> {:?}", path, dest);
        report.processed += 1;
    }

    Ok(report)
}

fn free_destination(root: &Path, name: &OsStr) -> PathBuf {
    let mut dest = root.join(name);
    let mut count = 1;
    while dest.exists() {
        dest = root.join(numbered_name(name, count));
        count += 1;
    }
    dest
}

/// `img.webp` with count 3 becomes `img_3.webp`, keeping the extension's
/// original case.
fn numbered_name(name: &OsStr, count: u32) -> OsString {
    let path = Path::new(name);
    let mut out = path.file_stem().map(OsStr::to_os_string).unwrap_or_default();
    out.push(format!("_{}", count));
    if let Some(ext) = path.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}
