//! HEIC decoding, gated behind the `heic` feature so the default build does
//! not link against libheif. Without the feature every HEIC file takes the
//! per-file skip path in the convert stage.

use crate::error::AppError;
use std::path::Path;

/// Decode a HEIC file and write it back out as a JPEG at `dest`.
#[cfg(feature = "heic")]
pub fn convert_to_jpeg(src: &Path, dest: &Path, quality: u8) -> Result<(), AppError> {
    use image::codecs::jpeg::JpegEncoder;
    use image::{ColorType, ImageEncoder};
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};
    use std::fs::File;
    use std::io::BufWriter;

    let src_str = src.to_str().ok_or_else(|| {
        AppError::Unsupported(format!("non-UTF-8 path cannot be decoded: {:?}", src))
    })?;

    let lib_heif = LibHeif::new();
    let ctx = HeifContext::read_from_file(src_str)?;
    let handle = ctx.primary_image_handle()?;
    let decoded = lib_heif.decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)?;

    let plane = decoded.planes().interleaved.ok_or_else(|| {
        AppError::Unsupported(format!("no interleaved RGB plane in {:?}", src))
    })?;
    let width = plane.width;
    let height = plane.height;
    log::trace!("Decoded HEIC {:?}: {}x{}", src, width, height);

    // Rows are stride-padded. Repack into a tight RGB buffer.
    let row_bytes = width as usize * 3;
    let mut rgb = Vec::with_capacity(row_bytes * height as usize);
    for row in plane.data.chunks(plane.stride).take(height as usize) {
        rgb.extend_from_slice(&row[..row_bytes]);
    }

    let writer = BufWriter::new(File::create(dest)?);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.write_image(&rgb, width, height, ColorType::Rgb8)?;
    Ok(())
}

#[cfg(not(feature = "heic"))]
pub fn convert_to_jpeg(src: &Path, _dest: &Path, _quality: u8) -> Result<(), AppError> {
    Err(AppError::Unsupported(format!(
        "cannot decode {:?}: HEIC support requires the `heic` feature (libheif)",
        src
    )))
}
