//! Configuration: an optional YAML file plus environment overrides.
//!
//! Lookup order for the file: `--config`, `FLIGHTSCRIPT_CONFIG`, then
//! `~/.config/flightscript/config.yaml`. A `.env` in the working directory
//! is loaded first so its variables act like the real environment.
//! Environment variables override values from the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::errors::ScriptError;
use crate::script::DEFAULT_SCRIPT_NAME;

pub const CONFIG_ENV: &str = "FLIGHTSCRIPT_CONFIG";
pub const SCRIPT_ENV: &str = "FLIGHTSCRIPT_SCRIPT";
pub const HIDDEN_ENV: &str = "FLIGHTSCRIPT_HIDDEN";
pub const TIMEOUT_ENV: &str = "FLIGHTSCRIPT_TIMEOUT";
pub const BANNERS_ENV: &str = "FLIGHTSCRIPT_BANNERS";

/// On-disk configuration. Every key is optional.
///
/// ```yaml
/// executable: /opt/FlightStream/FlightStream
/// script: runs/script_out.txt
/// hidden: true
/// timeout: 30m
/// banners: false
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub executable: Option<PathBuf>,
    pub script: Option<PathBuf>,
    pub hidden: Option<bool>,
    /// humantime duration, e.g. `90s` or `1h 30m`.
    pub timeout: Option<String>,
    pub banners: Option<bool>,
}

/// Effective settings after merging file, environment and defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Settings {
    /// Executable named by the config file; `FS_EXE` and `PATH` are
    /// consulted later by `exec::resolve_executable`.
    pub executable: Option<PathBuf>,
    pub script: PathBuf,
    pub hidden: bool,
    #[serde(serialize_with = "serialize_timeout")]
    pub timeout: Option<Duration>,
    pub banners: bool,
    /// File the settings were read from, if any.
    pub source: Option<PathBuf>,
}

fn serialize_timeout<S: serde::Serializer>(
    t: &Option<Duration>,
    s: S,
) -> Result<S::Ok, S::Error> {
    match t {
        Some(d) => s.serialize_some(&humantime::format_duration(*d).to_string()),
        None => s.serialize_none(),
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            executable: None,
            script: PathBuf::from(DEFAULT_SCRIPT_NAME),
            hidden: false,
            timeout: None,
            banners: true,
            source: None,
        }
    }
}

impl Settings {
    /// Load `.env`, locate and parse the config file, then apply the environment.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ScriptError> {
        let _ = dotenvy::dotenv();
        let env = |k: &str| std::env::var(k).ok();
        let path = config_path(explicit, &env);
        let file = match &path {
            Some(p) => read_config_file(p)?,
            None => Config::default(),
        };
        Self::resolve(file, path, &env)
    }

    /// Merge a parsed file with environment values supplied by `env`.
    pub fn resolve<F>(file: Config, source: Option<PathBuf>, env: &F) -> Result<Self, ScriptError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let origin = source.clone().unwrap_or_else(|| PathBuf::from("<defaults>"));
        let defaults = Settings::default();

        let timeout = match env(TIMEOUT_ENV).filter(|v| !v.trim().is_empty()) {
            Some(v) => Some(parse_timeout(&v, &env_origin(TIMEOUT_ENV))?),
            None => match file.timeout.as_deref() {
                Some(v) => Some(parse_timeout(v, &origin)?),
                None => None,
            },
        };
        let hidden = match env(HIDDEN_ENV) {
            Some(v) => parse_bool(&v, HIDDEN_ENV)?,
            None => file.hidden.unwrap_or(defaults.hidden),
        };
        let banners = match env(BANNERS_ENV) {
            Some(v) => parse_bool(&v, BANNERS_ENV)?,
            None => file.banners.unwrap_or(defaults.banners),
        };
        let script = env(SCRIPT_ENV)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .or(file.script)
            .unwrap_or(defaults.script);

        Ok(Settings {
            executable: file.executable,
            script,
            hidden,
            timeout,
            banners,
            source,
        })
    }
}

/// Config file to read, if any. An explicit path is returned even when it
/// does not exist so the caller reports it; the default location is optional.
pub fn config_path<F>(explicit: Option<&Path>, env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    if let Some(v) = env(CONFIG_ENV).filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(v));
    }
    default_config_path().filter(|p| p.is_file())
}

/// `~/.config/flightscript/config.yaml`.
pub fn default_config_path() -> Option<PathBuf> {
    home::home_dir().map(|h| h.join(".config").join("flightscript").join("config.yaml"))
}

pub fn read_config_file(path: &Path) -> Result<Config, ScriptError> {
    let text = fs::read_to_string(path).map_err(|e| ScriptError::io(path, e))?;
    if text.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str(&text).map_err(|e| ScriptError::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

fn env_origin(name: &str) -> PathBuf {
    PathBuf::from(format!("<env:{name}>"))
}

fn parse_timeout(v: &str, origin: &Path) -> Result<Duration, ScriptError> {
    humantime::parse_duration(v.trim()).map_err(|e| ScriptError::Config {
        path: origin.to_path_buf(),
        reason: format!("invalid timeout '{v}': {e}"),
    })
}

fn parse_bool(v: &str, name: &str) -> Result<bool, ScriptError> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ScriptError::Config {
            path: env_origin(name),
            reason: format!("expected a boolean, got '{v}'"),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn defaults_without_file_or_env() {
        let s = Settings::resolve(Config::default(), None, &env_of(&[])).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.script, PathBuf::from("script_out.txt"));
        assert!(s.banners);
    }

    #[test]
    fn environment_overrides_file() {
        let file = Config {
            script: Some(PathBuf::from("from_file.txt")),
            hidden: Some(false),
            timeout: Some("10m".to_string()),
            ..Config::default()
        };
        let env = env_of(&[
            (SCRIPT_ENV, "from_env.txt"),
            (HIDDEN_ENV, "1"),
            (TIMEOUT_ENV, "90s"),
            (BANNERS_ENV, "off"),
        ]);
        let s = Settings::resolve(file, None, &env).unwrap();
        assert_eq!(s.script, PathBuf::from("from_env.txt"));
        assert!(s.hidden);
        assert_eq!(s.timeout, Some(Duration::from_secs(90)));
        assert!(!s.banners);
    }

    #[test]
    fn parses_yaml_file() {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(
            &p,
            "executable: /opt/fs/FlightStream\nhidden: true\ntimeout: 1h 30m\n",
        )
        .unwrap();
        let file = read_config_file(&p).unwrap();
        let s = Settings::resolve(file, Some(p.clone()), &env_of(&[])).unwrap();
        assert_eq!(s.executable, Some(PathBuf::from("/opt/fs/FlightStream")));
        assert!(s.hidden);
        assert_eq!(s.timeout, Some(Duration::from_secs(5400)));
        assert_eq!(s.source, Some(p));
    }

    #[test]
    fn unknown_keys_and_bad_values_are_config_errors() {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("config.yaml");
        fs::write(&p, "exe: nope\n").unwrap();
        assert!(matches!(read_config_file(&p), Err(ScriptError::Config { .. })));

        let bad_timeout = Config {
            timeout: Some("soon".to_string()),
            ..Config::default()
        };
        assert!(Settings::resolve(bad_timeout, None, &env_of(&[])).is_err());
        let env = env_of(&[(HIDDEN_ENV, "maybe")]);
        assert!(Settings::resolve(Config::default(), None, &env).is_err());
    }

    #[test]
    fn explicit_config_path_wins() {
        let env = env_of(&[(CONFIG_ENV, "/from/env.yaml")]);
        assert_eq!(
            config_path(Some(Path::new("/explicit.yaml")), &env),
            Some(PathBuf::from("/explicit.yaml"))
        );
        assert_eq!(config_path(None, &env), Some(PathBuf::from("/from/env.yaml")));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let td = tempfile::tempdir().unwrap();
        let p = td.path().join("absent.yaml");
        assert!(matches!(read_config_file(&p), Err(ScriptError::Io { .. })));
    }
}
