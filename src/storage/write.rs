//! Writing the generated package to disk.
//!
//! Files are overwritten in place. Modules from earlier runs whose protocol
//! no longer appears in the input are left untouched.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use tracing::instrument;

use crate::domain::{Config, ProtocolGroup, Timestamp};

/// A module file written by [`write_modules`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedModule {
    /// The protocol as it appeared in the input.
    pub protocol: String,

    /// The module name, the lower-cased protocol.
    pub module: String,

    /// Where the module was written.
    pub path: PathBuf,

    /// The number of definitions in the module.
    pub definitions: usize,

    /// The aggregator statement that re-exports the module.
    pub import: String,
}

/// Writes one module per protocol into `package_dir`.
///
/// Protocols excluded by the configuration (the `none` sentinel by default)
/// are skipped. Every other protocol gets a module named after the
/// lower-cased protocol, even if it has no definitions.
///
/// Returns the written modules in generation order.
///
/// # Errors
///
/// Fails if the package directory cannot be created or a module cannot be
/// written. Modules written before the failure are left in place.
#[instrument(skip(group, config))]
pub fn write_modules(
    group: &ProtocolGroup,
    package_dir: &Path,
    config: &Config,
    timestamp: Timestamp,
) -> Result<Vec<GeneratedModule>, WriteError> {
    let language = config.language;
    let mut modules = Vec::with_capacity(group.len());

    for (protocol, definitions) in group.iter() {
        if config.is_protocol_excluded(protocol) {
            tracing::debug!(
                "Skipping {} definitions for excluded protocol '{protocol}'",
                definitions.len()
            );
            continue;
        }

        let module = protocol.to_lowercase();
        let path = package_dir.join(language.module_file(&module));

        let body = definitions
            .iter()
            .map(|definition| language.render(definition))
            .collect::<Vec<_>>()
            .join("\n");
        let content = timestamp.header(language.comment()) + &body;

        create_package_dir(package_dir)?;
        write_file(&path, &content)?;
        tracing::info!("Generated module {module} ({} definitions)", definitions.len());

        modules.push(GeneratedModule {
            protocol: protocol.to_string(),
            import: language.import(&module),
            module,
            path,
            definitions: definitions.len(),
        });
    }

    Ok(modules)
}

/// Writes the package aggregator that re-exports every generated module.
///
/// The imports are written in the order given. Returns the path of the
/// aggregator file.
///
/// # Errors
///
/// Fails if the package directory cannot be created or the aggregator cannot
/// be written.
#[instrument(skip(imports, config))]
pub fn write_package(
    imports: &[String],
    package_dir: &Path,
    config: &Config,
    timestamp: Timestamp,
) -> Result<PathBuf, WriteError> {
    let language = config.language;
    let path = package_dir.join(language.package_file());
    let content = timestamp.header(language.comment()) + &imports.join("\n");

    create_package_dir(package_dir)?;
    write_file(&path, &content)?;
    tracing::info!("Generated package {} ({} modules)", path.display(), imports.len());

    Ok(path)
}

fn create_package_dir(path: &Path) -> Result<(), WriteError> {
    fs::create_dir_all(path).map_err(|source| WriteError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|source| WriteError::WriteFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Errors raised while writing generated files.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// The package directory could not be created.
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        /// The directory being created.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// A generated file could not be written.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },
}
