//! Configuration loaded from `.uxscore.toml`.

mod core;
mod loader;

pub use self::core::{OutputConfig, UxscoreConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Contents written by `uxscore init`
pub const DEFAULT_CONFIG: &str = r#"# uxscore configuration

[iterations]
# total_iterations of every version is clamped into this range
min_total = 3
max_total = 5

[output]
default_format = "terminal"
plain = false
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses_to_defaults() {
        let config = parse_and_validate_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.iteration_bounds(), crate::core::IterationBounds::default());
        assert!(!config.plain());
    }
}
