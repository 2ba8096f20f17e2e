use crate::config::AppConfig;
use crate::error::AppError;
use crate::heic;
use crate::report::StageReport;
use crate::walker;
use image::imageops::FilterType;
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};
use zenwebp::{EncodeRequest, EncoderConfig, PixelLayout, Preset};

/// Convert every image under the root to WebP, resizing so the longest edge
/// does not exceed `max_edge`. A failed conversion skips that file and the
/// stage keeps going; filesystem errors abort the run.
pub fn run(config: &AppConfig) -> Result<StageReport, AppError> {
    let mut report = StageReport::new("convert");

    // Collect up front so the temp JPEGs written mid-stage are not re-enumerated.
    let images = walker::find_images(config.root())?;
    log::info!("Found {} image(s) to convert", images.len());

    #[cfg(not(feature = "heic"))]
    {
        let heic_count = images
            .iter()
            .filter(|p| walker::has_extension(p, "heic"))
            .count();
        if heic_count > 0 {
            log::warn!(
                "Found {} HEIC file(s) this build cannot decode; rebuild with the `heic` feature to convert them",
                heic_count
            );
        }
    }

    for path in images {
        let mut temp_jpeg: Option<PathBuf> = None;
        match convert_one(&path, config, &mut temp_jpeg) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                log::warn!("Failed to convert {:?}: {}", path, e);
                report.skip(&path, &e);
            }
        }
        // The temp JPEG is removed even when the encode failed, and an error
        // here aborts the stage.
        if let Some(temp) = temp_jpeg {
            if temp.exists() {
                fs::remove_file(&temp)?;
            }
        }
    }

    Ok(report)
}

fn convert_one(
    path: &Path,
    config: &AppConfig,
    temp_jpeg: &mut Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    let source = if walker::has_extension(path, "heic") {
        let jpeg = path.with_extension("jpg");
        *temp_jpeg = Some(jpeg.clone());
        heic::convert_to_jpeg(path, &jpeg, config.jpeg_quality)?;
        fs::remove_file(path)?;
        log::info!("Converted HEIC to JPG: {:?} -> {:?}", path, jpeg);
        jpeg
    } else {
        path.to_path_buf()
    };

    encode_webp(&source, config)
}

/// Re-encode `input` as a WebP next to it and delete the input.
fn encode_webp(input: &Path, config: &AppConfig) -> Result<PathBuf, AppError> {
    let img = image::open(input)?;
    let (width, height) = img.dimensions();

    let img = match resize_target(width, height, config.max_edge) {
        Some((w, h)) => {
            log::debug!("Resizing {:?} from {}x{} to {}x{}", input, width, height, w, h);
            img.resize_exact(w, h, FilterType::Lanczos3)
        }
        None => img,
    };

    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();
    let encoder = EncoderConfig::with_preset(Preset::Photo, config.webp_quality);
    // encode() reports errors in a capture-location wrapper; keep the bare error.
    let bytes = EncodeRequest::new(&encoder, rgba.as_raw(), PixelLayout::Rgba8, w, h)
        .encode()
        .map_err(|e| e.into_inner())?;

    let out = input.with_extension("webp");
    fs::write(&out, bytes)?;
    fs::remove_file(input)?;
    log::info!("Converted, resized, and removed: {:?}", input);
    Ok(out)
}

/// Target dimensions for the longest-edge rule, or `None` when the image
/// already fits. Landscape images clamp the width, everything else (portrait
/// and square) clamps the height.
pub fn resize_target(width: u32, height: u32, max_edge: u32) -> Option<(u32, u32)> {
    if width > height && width > max_edge {
        let scaled = (height as f64 * max_edge as f64 / width as f64).round().max(1.0) as u32;
        Some((max_edge, scaled))
    } else if height >= width && height > max_edge {
        let scaled = (width as f64 * max_edge as f64 / height as f64).round().max(1.0) as u32;
        Some((scaled, max_edge))
    } else {
        None
    }
}
