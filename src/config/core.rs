use serde::{Deserialize, Serialize};

use crate::core::IterationBounds;
use crate::io::output::OutputFormat;

/// Root configuration structure for uxscore
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UxscoreConfig {
    /// Allowed range for a version's total iteration count
    #[serde(default)]
    pub iterations: Option<IterationBounds>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    #[serde(default)]
    pub default_format: Option<OutputFormat>,

    /// Disable colors in terminal output
    #[serde(default)]
    pub plain: Option<bool>,
}

impl UxscoreConfig {
    pub fn iteration_bounds(&self) -> IterationBounds {
        self.iterations.unwrap_or_default()
    }

    pub fn default_format(&self) -> OutputFormat {
        self.output
            .as_ref()
            .and_then(|o| o.default_format)
            .unwrap_or_default()
    }

    pub fn plain(&self) -> bool {
        self.output.as_ref().and_then(|o| o.plain).unwrap_or(false)
    }
}
