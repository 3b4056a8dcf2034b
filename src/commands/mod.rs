pub mod compare;
pub mod init;
pub mod score;

use crate::config::{load_config, load_config_from_path, UxscoreConfig};
use crate::io::{create_writer, OutputFormat, OutputWriter};
use anyhow::Result;
use std::path::Path;

/// Settings resolved from CLI flags and the config file
#[derive(Debug, Clone)]
pub struct RunSettings {
    pub config: UxscoreConfig,
    pub format: OutputFormat,
    pub plain: bool,
}

impl RunSettings {
    /// CLI flags take precedence over the config file
    pub fn resolve(
        config_path: Option<&Path>,
        format: Option<OutputFormat>,
        plain: bool,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => load_config_from_path(path)?,
            None => load_config(),
        };
        Ok(Self::from_config(config, format, plain))
    }

    pub fn from_config(config: UxscoreConfig, format: Option<OutputFormat>, plain: bool) -> Self {
        let format = format.unwrap_or_else(|| config.default_format());
        let plain = plain || config.plain();
        Self {
            config,
            format,
            plain,
        }
    }

    /// Turn off `colored` styling for the whole process in plain mode.
    ///
    /// Called once at startup so output that bypasses the writers also
    /// stays unstyled.
    pub fn apply_color_override(&self) {
        if self.plain {
            colored::control::set_override(false);
        }
    }

    pub fn stdout_writer(&self) -> Box<dyn OutputWriter> {
        create_writer(self.format, std::io::stdout(), self.plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_and_validate_config;

    #[test]
    fn flags_override_config() {
        let config = parse_and_validate_config("[output]\ndefault_format = \"json\"\n").unwrap();

        let from_config = RunSettings::from_config(config.clone(), None, false);
        assert_eq!(from_config.format, OutputFormat::Json);

        let from_flag = RunSettings::from_config(config, Some(OutputFormat::Terminal), true);
        assert_eq!(from_flag.format, OutputFormat::Terminal);
        assert!(from_flag.plain);
    }
}
