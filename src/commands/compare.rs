use super::score::score_version_files;
use super::RunSettings;
use crate::io::OutputWriter;
use crate::scoring::{progression_report, VersionDelta};
use anyhow::Result;
use std::path::PathBuf;

/// Score version files and report deltas between consecutive versions
pub fn compare_version_files(paths: &[PathBuf], settings: &RunSettings) -> Result<Vec<VersionDelta>> {
    let history = score_version_files(paths, settings)?;
    if history.len() < 2 {
        anyhow::bail!(
            "Need at least two versions to compare, found {}",
            history.len()
        );
    }
    Ok(progression_report(&history))
}

pub fn handle_compare(
    paths: &[PathBuf],
    settings: &RunSettings,
    writer: &mut dyn OutputWriter,
) -> Result<()> {
    let deltas = compare_version_files(paths, settings)?;
    writer.write_deltas(&deltas)
}
