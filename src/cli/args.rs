use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uxscore")]
#[command(about = "Reconcile usability assessment data into frame and version scores", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to the config file, then terminal)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Disable colors
    #[arg(long, global = true)]
    pub plain: bool,

    /// Configuration file (defaults to the nearest .uxscore.toml)
    #[arg(long, global = true, env = "UXSCORE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (0 = all cores)
    #[arg(short = 'j', long, default_value = "0", global = true)]
    pub jobs: usize,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single frame record
    Frame {
        /// JSON file holding one frame evaluation record
        path: PathBuf,

        /// Iteration the frame belongs to
        #[arg(long, requires = "total_iterations")]
        iteration: Option<u32>,

        /// Total iterations in the sequence (clamped to the configured bounds)
        #[arg(long, requires = "iteration")]
        total_iterations: Option<u32>,
    },

    /// Score one or more version files
    Version {
        /// JSON files holding a version record or an array of them
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// Compare scored versions in order
    Compare {
        /// Version files, oldest first
        #[arg(required = true, num_args = 2..)]
        paths: Vec<PathBuf>,
    },

    /// Write a default .uxscore.toml
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_frame_with_context() {
        let cli = Cli::try_parse_from([
            "uxscore",
            "frame",
            "frame.json",
            "--iteration",
            "2",
            "--total-iterations",
            "3",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Frame {
                iteration,
                total_iterations,
                ..
            } => {
                assert_eq!(iteration, Some(2));
                assert_eq!(total_iterations, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn iteration_requires_total() {
        assert!(Cli::try_parse_from(["uxscore", "frame", "f.json", "--iteration", "2"]).is_err());
    }

    #[test]
    fn compare_needs_two_files() {
        assert!(Cli::try_parse_from(["uxscore", "compare", "v1.json"]).is_err());
        assert!(Cli::try_parse_from(["uxscore", "compare", "v1.json", "v2.json"]).is_ok());
    }

    #[test]
    fn verbosity_counts() {
        let cli = Cli::try_parse_from(["uxscore", "-vv", "init"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
