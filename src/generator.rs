use std::path::{Path, PathBuf};

use tracing::instrument;

use crate::{
    domain::{Config, ConfigError, Timestamp},
    storage::{self, ExtractError, GeneratedModule, WriteError},
};

/// The directory the CSV exports are read from when none is given.
///
/// This is the `references` directory next to this crate's manifest.
#[must_use]
pub fn default_references() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("references")
}

/// Runs the whole pipeline with the default settings.
///
/// Reads the CSV exports from [`default_references`] and writes the
/// `headers` package into the current directory.
///
/// # Errors
///
/// Fails on the first error reading the exports or writing the package.
pub fn generate() -> Result<Report, Error> {
    Generator::new(default_references(), PathBuf::from(".")).run()
}

/// The header constant generation pipeline.
#[derive(Debug, Clone)]
pub struct Generator {
    references: PathBuf,
    output: PathBuf,
    config: Config,
}

impl Generator {
    /// Creates a generator that reads from `references` and writes the
    /// package directory inside `output`.
    #[must_use]
    pub fn new(references: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            references: references.into(),
            output: output.into(),
            config: Config::default(),
        }
    }

    /// Replaces the default configuration.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default configuration with one loaded from a TOML file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid configuration.
    pub fn with_config_file(self, path: &Path) -> Result<Self, Error> {
        let config = Config::load(path)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(self.with_config(config))
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The package directory the generated files are written to.
    #[must_use]
    pub fn package_dir(&self) -> PathBuf {
        self.output.join(self.config.package())
    }

    /// Runs the pipeline, stamping the generated files with the current time.
    ///
    /// # Errors
    ///
    /// Fails on the first error reading the exports or writing the package.
    /// Nothing is written if the exports cannot be read.
    pub fn run(&self) -> Result<Report, Error> {
        self.run_at(Timestamp::now())
    }

    /// Runs the pipeline, stamping every generated file with `timestamp`.
    ///
    /// # Errors
    ///
    /// See [`Generator::run`].
    #[instrument(skip(self), fields(references = %self.references.display()))]
    pub fn run_at(&self, timestamp: Timestamp) -> Result<Report, Error> {
        let group = storage::extract(&self.references, &self.config)?;

        let package_dir = self.package_dir();
        let modules = storage::write_modules(&group, &package_dir, &self.config, timestamp)?;

        let imports: Vec<String> = modules.iter().map(|m| m.import.clone()).collect();
        let package = storage::write_package(&imports, &package_dir, &self.config, timestamp)?;

        Ok(Report {
            timestamp,
            modules,
            package,
        })
    }
}

/// The outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// The time written into every generated file.
    pub timestamp: Timestamp,

    /// The generated modules, in generation order.
    pub modules: Vec<GeneratedModule>,

    /// The path of the package aggregator.
    pub package: PathBuf,
}

/// Errors that abort a run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The CSV exports could not be read.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The generated files could not be written.
    #[error(transparent)]
    Write(#[from] WriteError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_references_live_next_to_the_manifest() {
        let references = default_references();
        assert!(references.ends_with("references"));
        assert!(references.starts_with(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn package_dir_uses_configured_name() {
        let generator = Generator::new("refs", "out");
        assert_eq!(generator.package_dir(), Path::new("out").join("headers"));
    }
}
