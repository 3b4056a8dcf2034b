use crate::io::output::OutputWriter;
use crate::scoring::{FrameScore, VersionDelta, VersionScore};
use serde::Serialize;
use std::io::Write;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_frame(&mut self, frame: &FrameScore) -> anyhow::Result<()> {
        self.write_json(frame)
    }

    fn write_versions(&mut self, versions: &[VersionScore]) -> anyhow::Result<()> {
        self.write_json(versions)
    }

    fn write_deltas(&mut self, deltas: &[VersionDelta]) -> anyhow::Result<()> {
        self.write_json(deltas)
    }
}
