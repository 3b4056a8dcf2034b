use indoc::indoc;
use std::fs;
use tempfile::TempDir;
use uxscore::config::{discover_config, load_config_from_path, CONFIG_FILE_NAME};
use uxscore::core::IterationBounds;
use uxscore::io::OutputFormat;

#[test]
fn finds_config_in_ancestor_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [iterations]
            min_total = 4
            max_total = 6

            [output]
            default_format = "json"
        "#},
    )
    .unwrap();
    let nested = root.path().join("designs").join("checkout");
    fs::create_dir_all(&nested).unwrap();

    let config = discover_config(nested);
    assert_eq!(
        config.iteration_bounds(),
        IterationBounds {
            min_total: 4,
            max_total: 6
        }
    );
    assert_eq!(config.default_format(), OutputFormat::Json);
}

#[test]
fn broken_discovered_config_falls_back_to_defaults() {
    let root = TempDir::new().unwrap();
    fs::write(root.path().join(CONFIG_FILE_NAME), "[iterations\n").unwrap();

    let config = discover_config(root.path().to_path_buf());
    assert_eq!(config.iteration_bounds(), IterationBounds::default());
}

#[test]
fn explicit_config_errors_are_reported() {
    let root = TempDir::new().unwrap();
    let missing = root.path().join("missing.toml");
    assert!(load_config_from_path(&missing).is_err());

    let broken = root.path().join("broken.toml");
    fs::write(&broken, "output = 3\n").unwrap();
    assert!(load_config_from_path(&broken).is_err());
}
