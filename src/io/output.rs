use crate::scoring::{FrameScore, VersionDelta, VersionScore};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::io::Write;

use super::writers::{JsonWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tables with the full calculation breakdown
    #[default]
    Terminal,
    /// Pretty-printed JSON
    Json,
}

pub trait OutputWriter {
    fn write_frame(&mut self, frame: &FrameScore) -> anyhow::Result<()>;

    fn write_versions(&mut self, versions: &[VersionScore]) -> anyhow::Result<()>;

    fn write_deltas(&mut self, deltas: &[VersionDelta]) -> anyhow::Result<()>;
}

pub fn create_writer<'a, W: Write + 'a>(
    format: OutputFormat,
    writer: W,
    plain: bool,
) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer, plain)),
    }
}
