use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

/// A file a stage gave up on without aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedFile {
    pub path: String,
    pub reason: String,
}

/// Outcome of a single stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageReport {
    pub stage: &'static str,
    pub processed: usize,
    pub skipped: Vec<SkippedFile>,
}

impl StageReport {
    pub fn new(stage: &'static str) -> Self {
        StageReport {
            stage,
            processed: 0,
            skipped: Vec::new(),
        }
    }

    pub fn skip(&mut self, path: &Path, reason: impl Display) {
        self.skipped.push(SkippedFile {
            path: path.display().to_string(),
            reason: reason.to_string(),
        });
    }
}

/// Outcome of a full pipeline run, one entry per executed stage.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub stages: Vec<StageReport>,
}

impl RunReport {
    pub fn total_skipped(&self) -> usize {
        self.stages.iter().map(|s| s.skipped.len()).sum()
    }
}
