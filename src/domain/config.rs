use std::{io, path::Path};

use serde::{Deserialize, Serialize};

use super::Language;

/// Configuration for header constant generation.
///
/// This struct holds the settings that control which rows are kept, which
/// protocols get a module, and how the output package is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Rows whose status exactly matches one of these are dropped.
    ignore_statuses: Vec<String>,

    /// Protocols that never get a module of their own.
    ///
    /// Defaults to the `none` sentinel, used by the registry for fields with
    /// no protocol association.
    excluded_protocols: Vec<String>,

    /// The name of the output package directory.
    package: String,

    /// The language of the generated modules.
    pub language: Language,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ignore_statuses: default_ignore_statuses(),
            excluded_protocols: default_excluded_protocols(),
            package: default_package(),
            language: Language::default(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        toml::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }

    /// The statuses whose rows are dropped.
    #[must_use]
    pub fn ignore_statuses(&self) -> &[String] {
        &self.ignore_statuses
    }

    /// Checks whether a protocol is excluded from generation.
    ///
    /// The comparison is verbatim, so `None` is not excluded by `none`.
    #[must_use]
    pub fn is_protocol_excluded(&self, protocol: &str) -> bool {
        self.excluded_protocols.iter().any(|p| p == protocol)
    }

    /// The name of the output package directory.
    #[must_use]
    pub fn package(&self) -> &str {
        &self.package
    }

    /// Sets the language of the generated modules.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }
}

/// Errors raised while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] io::Error),

    /// The file is not a valid configuration.
    #[error("Failed to parse config file: {0}")]
    Parse(#[source] toml::de::Error),

    /// The configuration could not be serialized.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[source] toml::ser::Error),

    /// The file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] io::Error),
}

fn default_ignore_statuses() -> Vec<String> {
    vec!["obsoleted".to_string(), "deprecated".to_string()]
}

fn default_excluded_protocols() -> Vec<String> {
    vec!["none".to_string()]
}

fn default_package() -> String {
    "headers".to_string()
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_ignore_statuses")]
        ignore_statuses: Vec<String>,

        #[serde(default = "default_excluded_protocols")]
        excluded_protocols: Vec<String>,

        #[serde(default = "default_package")]
        package: String,

        #[serde(default)]
        language: Language,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                ignore_statuses,
                excluded_protocols,
                package,
                language,
            } => Self {
                ignore_statuses,
                excluded_protocols,
                package,
                language,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            ignore_statuses: config.ignore_statuses,
            excluded_protocols: config.excluded_protocols,
            package: config.package,
            language: config.language,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\nignore_statuses = [\"obsoleted\"]\nexcluded_protocols = [\"none\", \"netnews\"]\npackage = \"fields\"\nlanguage = \"rust\"\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.ignore_statuses(), &["obsoleted".to_string()]);
        assert!(config.is_protocol_excluded("none"));
        assert!(config.is_protocol_excluded("netnews"));
        assert!(!config.is_protocol_excluded("http"));
        assert_eq!(config.package(), "fields");
        assert_eq!(config.language, Language::Rust);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read(_)));
        assert!(error.to_string().starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nlanguage = \"cobol\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.to_string().starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("headergen.toml");
        let config = Config::default().with_language(Language::Rust);

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn sentinel_comparison_is_verbatim() {
        let config = Config::default();
        assert!(config.is_protocol_excluded("none"));
        assert!(!config.is_protocol_excluded("None"));
    }
}
