use std::io;
use std::path::Path;
use std::path::PathBuf;

use campus_core::config::Config;
use thiserror::Error;
use tracing::debug;

pub const ENV_CONFIG_PATH: &str = "CAMPUS_DESK_CONFIG";

const APP_DIR: &str = "campus-desk";
const MIN_TICK_RATE_MS: u64 = 16;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to resolve a configuration directory for this platform")]
    NoConfigDir,
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse config from {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let base = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base.join(APP_DIR).join("config.toml"))
}

/// `--config` wins, then the environment, then the platform default.
pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    match std::env::var(ENV_CONFIG_PATH) {
        Ok(raw) if !raw.trim().is_empty() => Ok(PathBuf::from(raw.trim())),
        _ => default_config_path(),
    }
}

/// A missing file is not an error; every section falls back to defaults.
pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut config: Config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    normalize(&mut config);
    Ok(config)
}

fn normalize(config: &mut Config) {
    config.ui.tick_rate_ms = config.ui.tick_rate_ms.max(MIN_TICK_RATE_MS);
    config.ui.toast_ttl_ticks = config.ui.toast_ttl_ticks.max(1);
    if config.session.reporter_name.trim().is_empty() {
        config.session.reporter_name = Config::default().session.reporter_name;
    }
}

pub fn log_file_path(config: &Config) -> PathBuf {
    if let Some(file) = config.log.file.as_deref().filter(|f| !f.trim().is_empty()) {
        return PathBuf::from(file);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("campus.log")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn write(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("config.toml");
        std::fs::write(&path, body).expect("write config");
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_from_path(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            dir.path(),
            "[session]\nreporter_name = \"Priya Raman\"\n\n[ui]\ncompact_width = 80\n",
        );

        let config = load_from_path(&path).expect("parse");

        assert_eq!(config.session.reporter_name, "Priya Raman");
        assert_eq!(config.ui.compact_width, 80);
        assert_eq!(config.ui.tick_rate_ms, Config::default().ui.tick_rate_ms);
        assert_eq!(config.log.level, "info");
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(dir.path(), "[ui\ncompact_width = ");

        let error = load_from_path(&path).expect_err("parse failure");
        assert!(matches!(error, ConfigError::Parse { .. }));
        assert!(error.to_string().contains("failed to parse config"));
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = write(
            dir.path(),
            "[ui]\ntick_rate_ms = 1\ntoast_ttl_ticks = 0\n[session]\nreporter_name = \"  \"\n",
        );

        let config = load_from_path(&path).expect("parse");

        assert_eq!(config.ui.tick_rate_ms, 16);
        assert_eq!(config.ui.toast_ttl_ticks, 1);
        assert_eq!(config.session.reporter_name, "Alex Johnson");
    }

    #[test]
    fn explicit_path_wins() {
        let path = resolve_config_path(Some(PathBuf::from("/tmp/campus.toml"))).expect("path");
        assert_eq!(path, PathBuf::from("/tmp/campus.toml"));
    }

    #[test]
    fn configured_log_file_is_used_verbatim() {
        let mut config = Config::default();
        config.log.file = Some("/var/log/campus.log".to_string());
        assert_eq!(log_file_path(&config), PathBuf::from("/var/log/campus.log"));
    }
}
