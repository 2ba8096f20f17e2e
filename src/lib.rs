//! Asset preparation for the photo portfolio site: unzip uploaded archives,
//! convert and resize every image to WebP, flatten the results into the
//! gallery root, then clear out archives, subdirectories, and video strays.

pub mod cleanup;
pub mod config;
pub mod convert;
pub mod error;
pub mod extract;
pub mod flatten;
pub mod heic;
pub mod manifest;
pub mod pipeline;
pub mod report;
pub mod walker;

pub use config::AppConfig;
pub use error::AppError;
pub use pipeline::{run_all, run_stage, StageKind};
pub use report::{RunReport, SkippedFile, StageReport};
