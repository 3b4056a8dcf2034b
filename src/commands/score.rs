use super::RunSettings;
use crate::core::IterationContext;
use crate::io::{read_frame, read_versions, OutputWriter};
use crate::scoring::{compute_frame_score, score_versions, FrameScore, VersionScore};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Score one frame file, optionally within an iteration sequence
pub fn score_frame_file(
    path: &Path,
    iteration: Option<u32>,
    total_iterations: Option<u32>,
    settings: &RunSettings,
) -> Result<FrameScore> {
    let record =
        read_frame(path).with_context(|| format!("Failed to load frame {}", path.display()))?;

    let bounds = settings.config.iteration_bounds();
    let context = iteration
        .zip(total_iterations)
        .map(|(iteration, total)| IterationContext::new(iteration, bounds.clamp(total)));

    Ok(compute_frame_score(&record, context))
}

/// Load and score every version across the given files, in file order
pub fn score_version_files(paths: &[PathBuf], settings: &RunSettings) -> Result<Vec<VersionScore>> {
    let bounds = settings.config.iteration_bounds();
    let mut versions = Vec::new();
    for path in paths {
        let loaded = read_versions(path, &bounds)
            .with_context(|| format!("Failed to load versions from {}", path.display()))?;
        log::debug!("Loaded {} version(s) from {}", loaded.len(), path.display());
        versions.extend(loaded);
    }
    Ok(score_versions(&versions))
}

pub fn handle_frame(
    path: &Path,
    iteration: Option<u32>,
    total_iterations: Option<u32>,
    settings: &RunSettings,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let frame = score_frame_file(path, iteration, total_iterations, settings)?;
    writer.write_frame(&frame)
}

pub fn handle_versions(
    paths: &[PathBuf],
    settings: &RunSettings,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let versions = score_version_files(paths, settings)?;
    writer.write_versions(&versions)
}
