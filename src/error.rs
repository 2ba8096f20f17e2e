use serde_json::Error as SerdeJsonError;
use thiserror::Error;
use zip::result::ZipError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Walkdir error: {0}")]
    Walkdir(#[from] walkdir::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Zip error: {0}")]
    Zip(#[from] ZipError),

    #[error("WebP encode error: {0}")]
    WebpEncode(#[from] zenwebp::EncodeError),

    #[error("WebP decode error: {0}")]
    WebpDecode(#[from] zenwebp::DecodeError),

    #[cfg(feature = "heic")]
    #[error("HEIC error: {0}")]
    Heic(#[from] libheif_rs::HeifError),

    #[error("JSON error: {0}")]
    Json(#[from] SerdeJsonError),

    #[error("Unsupported input: {0}")]
    Unsupported(String),
}
