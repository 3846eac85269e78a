// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! TOML configuration-file loading shared across the workspace binaries.

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, String),

    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, String),
}

/// Trait for loading a configuration struct from a TOML file found on the
/// standard search path (current directory → XDG config dir → /etc).
pub trait ConfigFile: Sized + Default + DeserializeOwned {
    /// File name looked up on the search path (e.g. `crave.toml`).
    fn config_filename() -> &'static str;

    fn default_search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(Self::config_filename())];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("crave").join(Self::config_filename()));
        }
        paths.push(PathBuf::from("/etc/crave").join(Self::config_filename()));
        paths
    }

    /// Load configuration from a specific file path.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e.to_string()))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e.to_string()))
    }

    /// Search the default paths and load the first file that exists.
    ///
    /// Returns `(config, path_where_found)`, or `(Default::default(), None)`
    /// when no config file is found anywhere.
    fn load_from_default_paths() -> Result<(Self, Option<PathBuf>), ConfigError> {
        for path in Self::default_search_paths() {
            if path.exists() {
                let cfg = Self::load_from_file(&path)?;
                return Ok((cfg, Some(path)));
            }
        }
        Ok((Self::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    #[serde(default)]
    struct TestConfig {
        name: String,
        port: u16,
    }

    impl ConfigFile for TestConfig {
        fn config_filename() -> &'static str {
            "test.toml"
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(&path, "name = \"crave\"\nport = 8080\n").unwrap();

        let cfg = TestConfig::load_from_file(&path).unwrap();
        assert_eq!(cfg, TestConfig { name: "crave".to_string(), port: 8080 });
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = TestConfig::load_from_file(Path::new("/nonexistent/test.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_, _)));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.toml");
        std::fs::write(&path, "name = [broken\n").unwrap();

        let err = TestConfig::load_from_file(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_, _)));
    }

    #[test]
    fn test_search_paths_start_in_cwd() {
        let paths = TestConfig::default_search_paths();
        assert_eq!(paths.first(), Some(&PathBuf::from("test.toml")));
        assert_eq!(paths.last(), Some(&PathBuf::from("/etc/crave/test.toml")));
    }
}
