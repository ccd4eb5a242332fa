//! User settings, loaded from an optional `settings.toml`.
//!
//! Every field is optional. Command line flags win over the file,
//! and the file wins over the built-in defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Cli;
use crate::media::thumbnail::THUMBNAIL_SIZE;
use crate::state::catalog::DEFAULT_CATALOG_PATH;
use crate::state::lookbook::DEFAULT_INTERVAL;
use crate::state::presentation::Mode;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "photo-gallery";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub site_root: Option<PathBuf>,
    /// Catalog path, relative to the site root unless absolute
    pub catalog: Option<PathBuf>,
    pub lookbook: Option<bool>,
    pub autoplay_interval_ms: Option<u64>,
    pub reduced_motion: Option<bool>,
    pub thumbnail_size: Option<u32>,
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Load the settings file.
///
/// An explicit path must exist; the default location is optional.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        return load_from_path(path);
    }
    match get_default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => Ok(Config::default()),
    }
}

pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub root: PathBuf,
    pub catalog_path: PathBuf,
    pub mode: Mode,
    pub interval: Duration,
    pub reduced_motion: bool,
    pub thumbnail_size: u32,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Self {
        let root = cli
            .root
            .clone()
            .or(config.site_root)
            .unwrap_or_else(|| PathBuf::from("."));

        let catalog_path = match (&cli.catalog, config.catalog) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => root.join(path),
            (None, None) => root.join(DEFAULT_CATALOG_PATH),
        };

        let mode = if cli.lookbook || config.lookbook.unwrap_or(false) {
            Mode::Lookbook
        } else {
            Mode::Gallery
        };

        let interval = cli
            .interval_ms
            .or(config.autoplay_interval_ms)
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_INTERVAL);

        Self {
            root,
            catalog_path,
            mode,
            interval,
            reduced_motion: cli.reduced_motion || config.reduced_motion.unwrap_or(false),
            thumbnail_size: config
                .thumbnail_size
                .filter(|size| *size > 0)
                .unwrap_or(THUMBNAIL_SIZE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_without_file_or_flags() {
        let settings = Settings::resolve(&Cli::default(), Config::default());
        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.catalog_path, PathBuf::from("./data/images.json"));
        assert_eq!(settings.mode, Mode::Gallery);
        assert_eq!(settings.interval, Duration::from_millis(4000));
        assert!(!settings.reduced_motion);
        assert_eq!(settings.thumbnail_size, THUMBNAIL_SIZE);
    }

    #[test]
    fn test_load_from_path_reads_fields() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("settings.toml");
        fs::write(
            &path,
            "site_root = \"/srv/site\"\n\
             lookbook = true\n\
             autoplay_interval_ms = 6000\n\
             reduced_motion = true\n",
        )
        .unwrap();

        let config = load_from_path(&path).expect("failed to load");
        let settings = Settings::resolve(&Cli::default(), config);
        assert_eq!(settings.root, PathBuf::from("/srv/site"));
        assert_eq!(
            settings.catalog_path,
            PathBuf::from("/srv/site/data/images.json")
        );
        assert_eq!(settings.mode, Mode::Lookbook);
        assert_eq!(settings.interval, Duration::from_millis(6000));
        assert!(settings.reduced_motion);
    }

    #[test]
    fn test_flags_override_file() {
        let config = Config {
            site_root: Some(PathBuf::from("from-file")),
            catalog: Some(PathBuf::from("catalog.json")),
            autoplay_interval_ms: Some(6000),
            ..Config::default()
        };
        let cli = Cli {
            root: Some(PathBuf::from("from-cli")),
            interval_ms: Some(1500),
            ..Cli::default()
        };

        let settings = Settings::resolve(&cli, config);
        assert_eq!(settings.root, PathBuf::from("from-cli"));
        assert_eq!(
            settings.catalog_path,
            PathBuf::from("from-cli/catalog.json")
        );
        assert_eq!(settings.interval, Duration::from_millis(1500));
    }

    #[test]
    fn test_zero_interval_falls_back_to_default() {
        let cli = Cli {
            interval_ms: Some(0),
            ..Cli::default()
        };
        let settings = Settings::resolve(&cli, Config::default());
        assert_eq!(settings.interval, DEFAULT_INTERVAL);
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "lookbook = \"maybe").unwrap();
        assert!(matches!(load_from_path(&path), Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(load(Some(&path)), Err(ConfigError::Io { .. })));
    }
}
