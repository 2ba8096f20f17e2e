use crate::config::AppConfig;
use crate::error::AppError;
use crate::report::{RunReport, StageReport};
use crate::{cleanup, convert, extract, flatten};
use clap::ValueEnum;

/// The pipeline's stages. Order matters: conversion runs while the extracted
/// subdirectories still exist, and cleanup only after flattening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StageKind {
    Extract,
    Convert,
    Flatten,
    RemoveArchives,
    RemoveSubdirs,
    RemoveStrays,
}

impl StageKind {
    /// Every stage, in full-run order.
    pub const ALL: [StageKind; 6] = [
        StageKind::Extract,
        StageKind::Convert,
        StageKind::Flatten,
        StageKind::RemoveArchives,
        StageKind::RemoveSubdirs,
        StageKind::RemoveStrays,
    ];

    pub fn name(self) -> &'static str {
        match self {
            StageKind::Extract => "extract",
            StageKind::Convert => "convert",
            StageKind::Flatten => "flatten",
            StageKind::RemoveArchives => "remove-archives",
            StageKind::RemoveSubdirs => "remove-subdirs",
            StageKind::RemoveStrays => "remove-strays",
        }
    }

    fn run(self, config: &AppConfig) -> Result<StageReport, AppError> {
        match self {
            StageKind::Extract => extract::run(config),
            StageKind::Convert => convert::run(config),
            StageKind::Flatten => flatten::run(config),
            StageKind::RemoveArchives => cleanup::remove_archives(config),
            StageKind::RemoveSubdirs => cleanup::remove_subdirs(config),
            StageKind::RemoveStrays => cleanup::remove_strays(config),
        }
    }
}

/// Run a single stage on its own.
pub fn run_stage(stage: StageKind, config: &AppConfig) -> Result<StageReport, AppError> {
    log::info!("Running stage: {}", stage.name());
    let report = stage.run(config)?;
    if !report.skipped.is_empty() {
        log::warn!(
            "Stage {} skipped {} file(s)",
            report.stage,
            report.skipped.len()
        );
    }
    Ok(report)
}

/// Run every stage in order against the configured root directory.
pub fn run_all(config: &AppConfig) -> Result<RunReport, AppError> {
    let mut report = RunReport::default();
    for stage in StageKind::ALL {
        report.stages.push(run_stage(stage, config)?);
    }
    log::info!("Photo cleanup complete.");
    Ok(report)
}
