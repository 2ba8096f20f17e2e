use crate::config::AppConfig;
use crate::error::AppError;
use crate::walker;
use serde::Serialize;
use std::fs;
use zenwebp::WebPDecoder;

/// The landing page lays out this many gallery slots.
pub const MIN_GALLERY_IMAGES: usize = 8;

#[derive(Debug, Clone, Serialize)]
pub struct ImageEntry {
    pub url: String,
    pub file: String,
    pub width: u32,
    pub height: u32,
}

/// Build a gallery entry for every WebP at the top of the root directory,
/// sorted by file name. Dimensions come from the WebP headers.
pub fn build(config: &AppConfig) -> Result<Vec<ImageEntry>, AppError> {
    let root = config.root();

    let mut names = Vec::new();
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if !walker::has_extension(&entry.path(), "webp") {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(name) => log::warn!("Skipping non-UTF-8 file name: {:?}", name),
        }
    }
    names.sort();

    let prefix = config.site_prefix.trim_end_matches('/');
    let mut entries = Vec::with_capacity(names.len());
    for name in names {
        let path = root.join(&name);
        let bytes = fs::read(&path)?;
        let decoder = WebPDecoder::new(&bytes).map_err(|e| e.into_inner())?;
        let (width, height) = decoder.dimensions();
        log::debug!("Manifest entry {:?}: {}x{}", path, width, height);
        entries.push(ImageEntry {
            url: format!("{}/{}", prefix, name),
            file: name,
            width,
            height,
        });
    }

    if entries.len() < MIN_GALLERY_IMAGES {
        log::warn!(
            "Gallery has {} image(s); the landing page expects at least {}",
            entries.len(),
            MIN_GALLERY_IMAGES
        );
    }
    Ok(entries)
}
