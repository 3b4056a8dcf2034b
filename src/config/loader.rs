use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::UxscoreConfig;
use crate::core::{Error, IterationBounds, Result};

pub const CONFIG_FILE_NAME: &str = ".uxscore.toml";

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Pure function to parse and validate config from TOML string
///
/// Invalid iteration bounds are replaced by the defaults with a warning;
/// only unparseable TOML is an error.
pub fn parse_and_validate_config(contents: &str) -> Result<UxscoreConfig> {
    let mut config = toml::from_str::<UxscoreConfig>(contents)?;

    if let Some(bounds) = config.iterations {
        if let Err(e) = bounds.validate() {
            log::warn!("Invalid iteration bounds: {}. Using defaults.", e);
            config.iterations = Some(IterationBounds::default());
        }
    }

    Ok(config)
}

/// Pure function to try loading config from a specific path
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<UxscoreConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Failed to parse {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Pure function to generate directory ancestors up to a depth limit
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Search `start` and its ancestors for a config file
pub fn discover_config(start: PathBuf) -> UxscoreConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            UxscoreConfig::default()
        })
}

pub fn load_config() -> UxscoreConfig {
    match std::env::current_dir() {
        Ok(dir) => discover_config(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            UxscoreConfig::default()
        }
    }
}

/// Load an explicitly named config file; unlike discovery, failures are errors
pub fn load_config_from_path(path: &Path) -> Result<UxscoreConfig> {
    let contents = read_config_file(path)
        .map_err(|e| Error::file_system("Failed to read config file", path, e))?;
    parse_and_validate_config(&contents)
        .map_err(|e| Error::Configuration(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::output::OutputFormat;
    use indoc::indoc;

    #[test]
    fn parses_full_config() {
        let config = parse_and_validate_config(indoc! {r#"
            [iterations]
            min_total = 2
            max_total = 6

            [output]
            default_format = "json"
            plain = true
        "#})
        .unwrap();

        let bounds = config.iteration_bounds();
        assert_eq!((bounds.min_total, bounds.max_total), (2, 6));
        assert_eq!(config.default_format(), OutputFormat::Json);
        assert!(config.plain());
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = parse_and_validate_config("").unwrap();
        assert_eq!(config.iteration_bounds(), IterationBounds::default());
        assert_eq!(config.default_format(), OutputFormat::Terminal);
        assert!(!config.plain());
    }

    #[test]
    fn invalid_bounds_fall_back() {
        let config = parse_and_validate_config(indoc! {r#"
            [iterations]
            min_total = 6
            max_total = 4
        "#})
        .unwrap();
        assert_eq!(config.iteration_bounds(), IterationBounds::default());
    }

    #[test]
    fn malformed_toml_is_error() {
        assert!(parse_and_validate_config("[iterations\nmin_total = ").is_err());
    }

    #[test]
    fn ancestors_limited_by_depth() {
        let dirs: Vec<PathBuf> = directory_ancestors(PathBuf::from("/a/b/c/d"), 3).collect();
        assert_eq!(
            dirs,
            vec![
                PathBuf::from("/a/b/c/d"),
                PathBuf::from("/a/b/c"),
                PathBuf::from("/a/b")
            ]
        );
    }
}
