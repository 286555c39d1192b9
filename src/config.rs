use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::output::DEFAULT_GRADEBOOK_OUTPUT;
use crate::prompt::DEFAULT_MAX_ATTEMPTS;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
///
/// | Variable                 | Default                |
/// |--------------------------|------------------------|
/// | `LOG_FILE_PATH`          | `logs/tally.log`       |
/// | `TALLY_CALORIE_LOG_DIR`  | `.`                    |
/// | `TALLY_GRADEBOOK_OUTPUT` | `gradebook_output.csv` |
/// | `TALLY_MAX_ATTEMPTS`     | `5`                    |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub log_file_path: PathBuf,
    pub calorie_log_dir: PathBuf,
    pub gradebook_output: String,
    pub max_attempts: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_file_path: PathBuf::from("logs/tally.log"),
            calorie_log_dir: PathBuf::from("."),
            gradebook_output: DEFAULT_GRADEBOOK_OUTPUT.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();

        if let Some(v) = get("LOG_FILE_PATH") {
            settings.log_file_path = PathBuf::from(v);
        }
        if let Some(v) = get("TALLY_CALORIE_LOG_DIR") {
            settings.calorie_log_dir = PathBuf::from(v);
        }
        if let Some(v) = get("TALLY_GRADEBOOK_OUTPUT") {
            settings.gradebook_output = v.trim().to_string();
        }
        if let Some(v) = get("TALLY_MAX_ATTEMPTS") {
            match v.trim().parse::<usize>() {
                Ok(n) if n >= 1 => settings.max_attempts = n,
                _ => warn!(value = %v, default = DEFAULT_MAX_ATTEMPTS, "Ignoring invalid TALLY_MAX_ATTEMPTS"),
            }
        }

        settings
    }

    /// Directory and file name for the rolling JSON log.
    ///
    /// A bare file name logs into the working directory.
    pub fn log_target(&self) -> (&Path, &OsStr) {
        let dir = self
            .log_file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let file = self
            .log_file_path
            .file_name()
            .unwrap_or(OsStr::new("tally.log"));
        (dir, file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let s = Settings::from_lookup(lookup(&[]));
        assert_eq!(s, Settings::default());
        assert_eq!(s.max_attempts, 5);
        assert_eq!(s.gradebook_output, "gradebook_output.csv");
    }

    #[test]
    fn test_overrides() {
        let s = Settings::from_lookup(lookup(&[
            ("TALLY_CALORIE_LOG_DIR", "/tmp/logs"),
            ("TALLY_GRADEBOOK_OUTPUT", "final.csv"),
            ("TALLY_MAX_ATTEMPTS", "3"),
        ]));
        assert_eq!(s.calorie_log_dir, PathBuf::from("/tmp/logs"));
        assert_eq!(s.gradebook_output, "final.csv");
        assert_eq!(s.max_attempts, 3);
    }

    #[test]
    fn test_invalid_attempts_fall_back() {
        for bad in ["0", "lots", "-1"] {
            let s = Settings::from_lookup(lookup(&[("TALLY_MAX_ATTEMPTS", bad)]));
            assert_eq!(s.max_attempts, DEFAULT_MAX_ATTEMPTS);
        }
    }

    #[test]
    fn test_log_target() {
        let s = Settings::default();
        assert_eq!(s.log_target(), (Path::new("logs"), OsStr::new("tally.log")));

        let bare = Settings::from_lookup(lookup(&[("LOG_FILE_PATH", "tally.log")]));
        assert_eq!(bare.log_target(), (Path::new("."), OsStr::new("tally.log")));
    }

    #[test]
    fn test_blank_values_ignored() {
        let s = Settings::from_lookup(lookup(&[("TALLY_GRADEBOOK_OUTPUT", "  ")]));
        assert_eq!(s.gradebook_output, DEFAULT_GRADEBOOK_OUTPUT);
    }
}
