//! Terminal rendering of the "show calculation" breakdown.
//!
//! Absent trace fields render as `-` so a reviewer can tell missing inputs
//! from a genuine zero. Plain mode is decided per writer; nothing here
//! touches `colored`'s process-wide override.

use crate::core::{DebugTrace, Score};
use crate::io::output::OutputWriter;
use crate::scoring::{FrameScore, Trend, VersionDelta, VersionScore, VersionScoreSource};
use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use std::io::Write;

const MISSING: &str = "-";

pub struct TerminalWriter<W: Write> {
    writer: W,
    plain: bool,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W, plain: bool) -> Self {
        Self { writer, plain }
    }

    fn bold(&self, text: &str) -> String {
        if self.plain {
            text.to_string()
        } else {
            text.bold().to_string()
        }
    }

    fn score_text(&self, score: Score) -> String {
        if self.plain {
            score.to_string()
        } else {
            colored_score(score).to_string()
        }
    }

    fn trend_text(&self, trend: Trend) -> String {
        if self.plain {
            trend.as_str().to_string()
        } else {
            trend_label(trend).to_string()
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        if self.plain {
            table.force_no_tty();
        }
        table
    }

    fn score_cell(&self, score: Score) -> Cell {
        let cell = Cell::new(score.value());
        if self.plain {
            cell
        } else {
            cell.fg(band_color(score))
        }
    }

    fn frame_table(&self, frames: &[FrameScore]) -> Table {
        let mut table = self.table();
        table.set_header(vec![
            "frame",
            "score",
            "source",
            "heuristics",
            "categories",
            "bias",
            "combined",
            "target",
            "alpha",
            "blended",
            "extra pull",
            "iteration",
        ]);

        for (index, frame) in frames.iter().enumerate() {
            let mut row = vec![Cell::new(index + 1), self.score_cell(frame.score)];
            row.push(Cell::new(frame.source.as_str()));
            row.extend(trace_cells(&frame.trace.fields()).into_iter().map(Cell::new));
            table.add_row(row);
        }
        table
    }
}

fn band_color(score: Score) -> Color {
    match score.value() {
        80..=100 => Color::Green,
        50..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn colored_score(score: Score) -> ColoredString {
    let text = score.to_string();
    match score.value() {
        80..=100 => text.green(),
        50..=79 => text.yellow(),
        _ => text.red(),
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn trace_cells(trace: &DebugTrace) -> Vec<String> {
    let iteration = match (trace.iteration, trace.total_iterations) {
        (Some(i), Some(total)) => format!("{i}/{total}"),
        (Some(i), None) => i.to_string(),
        _ => MISSING.to_string(),
    };
    let extra_pull = match (trace.blended, trace.extra_pull_applied) {
        (None, _) => MISSING,
        (Some(_), true) => "yes",
        (Some(_), false) => "no",
    };

    vec![
        opt(trace.heuristics_avg),
        opt(trace.categories_avg),
        opt(trace.bias_weighted_overall),
        opt(trace.combined),
        opt(trace.target),
        opt(trace.alpha),
        opt(trace.blended),
        extra_pull.to_string(),
        iteration,
    ]
}

fn trend_label(trend: Trend) -> ColoredString {
    match trend {
        Trend::Improved => trend.as_str().green(),
        Trend::Regressed => trend.as_str().red(),
        Trend::Unchanged => trend.as_str().normal(),
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_frame(&mut self, frame: &FrameScore) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "{} {} ({})",
            self.bold("Frame score:"),
            self.score_text(frame.score),
            frame.source
        )?;
        let table = self.frame_table(std::slice::from_ref(frame));
        writeln!(self.writer, "{table}")?;
        Ok(())
    }

    fn write_versions(&mut self, versions: &[VersionScore]) -> anyhow::Result<()> {
        for version in versions {
            let recomputed = match (version.source, version.recomputed) {
                (VersionScoreSource::Persisted, Some(r)) => {
                    format!(", recomputed {r}")
                }
                _ => String::new(),
            };
            writeln!(
                self.writer,
                "{} {}: {} ({}{})",
                self.bold("Version"),
                self.bold(&version.id),
                self.score_text(version.score),
                version.source,
                recomputed
            )?;
            if version.frames.is_empty() {
                writeln!(self.writer, "  no frames")?;
            } else {
                let table = self.frame_table(&version.frames);
                writeln!(self.writer, "{table}")?;
            }
            writeln!(self.writer)?;
        }
        Ok(())
    }

    fn write_deltas(&mut self, deltas: &[VersionDelta]) -> anyhow::Result<()> {
        let mut table = self.table();
        table.set_header(vec!["from", "to", "previous", "current", "delta", "trend"]);
        for delta in deltas {
            let trend = if self.plain {
                Cell::new(delta.trend.as_str())
            } else {
                Cell::new(delta.trend.as_str()).fg(match delta.trend {
                    Trend::Improved => Color::Green,
                    Trend::Regressed => Color::Red,
                    Trend::Unchanged => Color::Reset,
                })
            };
            table.add_row(vec![
                Cell::new(&delta.previous_id),
                Cell::new(&delta.current_id),
                Cell::new(delta.previous.value()),
                Cell::new(delta.current.value()),
                Cell::new(format!("{:+}", delta.delta)),
                trend,
            ]);
        }
        writeln!(self.writer, "{table}")?;

        for delta in deltas.iter().filter(|d| !d.frames.is_empty()) {
            writeln!(
                self.writer,
                "{} -> {} ({})",
                delta.previous_id,
                delta.current_id,
                self.trend_text(delta.trend)
            )?;
            for frame in &delta.frames {
                writeln!(
                    self.writer,
                    "  frame {}: {} -> {} ({:+})",
                    frame.index + 1,
                    frame.previous,
                    frame.current,
                    frame.delta
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FrameEvaluationRecord, HeuristicEntry, IterationContext, VersionRecord};
    use crate::scoring::{compute_frame_score, compute_version_score};

    fn render_versions(versions: &[VersionScore]) -> String {
        let mut buffer = Vec::new();
        TerminalWriter::new(&mut buffer, true)
            .write_versions(versions)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let trace = DebugTrace {
            heuristics_avg: Some(Score::new(40)),
            final_score: Some(Score::new(40)),
            ..DebugTrace::default()
        };
        let cells = trace_cells(&trace);
        assert_eq!(cells[0], "40");
        assert!(cells[1..].iter().all(|c| c == MISSING));
    }

    #[test]
    fn blended_frame_shows_full_breakdown() {
        let record = FrameEvaluationRecord {
            heuristic_breakdown: vec![HeuristicEntry::points(4.0, 2.0), HeuristicEntry::points(4.0, 4.0)],
            category_scores: [("color".to_string(), 80.0), ("layout".to_string(), 60.0)]
                .into_iter()
                .collect(),
            ..FrameEvaluationRecord::default()
        };
        let frame = compute_frame_score(&record, Some(IterationContext::new(2, 3)));
        let cells = trace_cells(&frame.trace.fields());
        assert_eq!(cells, vec!["75", "70", "-", "73", "75", "0.35", "74", "no", "2/3"]);
    }

    #[test]
    fn plain_output_has_no_escapes_and_leaves_global_colors_alone() {
        let before = colored::control::SHOULD_COLORIZE.should_colorize();
        let record = FrameEvaluationRecord {
            overall_score: Some(42.0),
            ..FrameEvaluationRecord::default()
        };
        let version = compute_version_score(&VersionRecord::new("v1", 2, 3, vec![record]));

        let mut buffer = Vec::new();
        let mut writer = TerminalWriter::new(&mut buffer, true);
        writer.write_frame(&version.frames[0]).unwrap();
        writer.write_versions(std::slice::from_ref(&version)).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("Frame score: 42 (overall score)"));
        assert!(!output.contains('\x1b'));
        assert_eq!(colored::control::SHOULD_COLORIZE.should_colorize(), before);
    }

    #[test]
    fn version_header_and_empty_version() {
        let scored = compute_version_score(&VersionRecord::new("v9", 1, 3, Vec::new()));
        let output = render_versions(&[scored]);
        assert!(output.contains("Version v9: 0 (no data)"));
        assert!(output.contains("no frames"));
    }
}
