//! Reading header definitions from a directory of CSV exports.
//!
//! Every `.csv` file directly inside the references directory is read, in
//! file name order. Rows carry five positional columns (see
//! [`COLUMNS`](crate::domain::record::COLUMNS)) and no header line is
//! expected: a header line left in an export is read as a data row.

use std::{
    ffi::OsStr,
    fs, io,
    path::{Path, PathBuf},
};

use tracing::instrument;
use walkdir::WalkDir;

use crate::domain::{record::COLUMNS, Config, Definition, HeaderRecord, ProtocolGroup};

/// Reads every CSV file in `dir` and groups the surviving rows by protocol.
///
/// Rows whose status is in the configured ignore set are dropped.
///
/// # Errors
///
/// This function fails if:
///
/// - `dir` does not exist or is not a directory
/// - the directory listing or a CSV file cannot be read
/// - a row has fewer than five columns
#[instrument(skip(config))]
pub fn extract(dir: &Path, config: &Config) -> Result<ProtocolGroup, ExtractError> {
    let metadata = fs::metadata(dir).map_err(|source| ExtractError::InputNotFound {
        path: dir.to_path_buf(),
        source,
    })?;
    if !metadata.is_dir() {
        return Err(ExtractError::InputNotFound {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let mut group = ProtocolGroup::new();
    for path in csv_paths(dir)? {
        extract_file(&path, config, &mut group)?;
    }

    tracing::debug!("Extracted {} protocols from {}", group.len(), dir.display());
    Ok(group)
}

fn csv_paths(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let mut paths = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|source| ExtractError::List {
            path: dir.to_path_buf(),
            source,
        })?;

        if entry.file_type().is_file() && is_csv(entry.path()) {
            paths.push(entry.into_path());
        } else {
            tracing::debug!("Skipping {}", entry.path().display());
        }
    }
    Ok(paths)
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|extension| extension.eq_ignore_ascii_case("csv"))
}

fn extract_file(
    path: &Path,
    config: &Config,
    group: &mut ProtocolGroup,
) -> Result<(), ExtractError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ExtractError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

    let mut kept = 0usize;
    let mut ignored = 0usize;
    for result in reader.deserialize::<HeaderRecord>() {
        let record = result.map_err(|source| row_error(path, source))?;

        if record.is_ignored(config.ignore_statuses()) {
            ignored += 1;
            continue;
        }

        let definition = Definition::from_record(&record);
        if !definition.is_valid_identifier() {
            tracing::warn!(
                "Header field '{}' in {} does not produce a valid identifier: {}",
                record.name,
                path.display(),
                definition.constant()
            );
        }
        group.push(record.protocol, definition);
        kept += 1;
    }

    tracing::debug!(
        "Read {}: {kept} definitions, {ignored} ignored",
        path.display()
    );
    Ok(())
}

fn row_error(path: &Path, source: csv::Error) -> ExtractError {
    if source.is_io_error() {
        return ExtractError::ReadFile {
            path: path.to_path_buf(),
            source,
        };
    }
    ExtractError::MalformedRow {
        path: path.to_path_buf(),
        line: source.position().map(csv::Position::line),
        source,
    }
}

/// Errors raised while reading the references directory.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// The references directory is missing or is not a directory.
    #[error("references directory {path} not found: {source}")]
    InputNotFound {
        /// The directory that was requested.
        path: PathBuf,
        /// The underlying error.
        source: io::Error,
    },

    /// The references directory could not be listed.
    #[error("failed to list {path}: {source}")]
    List {
        /// The directory being listed.
        path: PathBuf,
        /// The underlying error.
        source: walkdir::Error,
    },

    /// A CSV file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    ReadFile {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        source: csv::Error,
    },

    /// A row could not be parsed into the expected columns.
    #[error(
        "malformed row in {path}{}: {source} (expected columns: {})",
        .line.map_or_else(String::new, |line| format!(" at line {line}")),
        COLUMNS.join(", ")
    )]
    MalformedRow {
        /// The file containing the row.
        path: PathBuf,
        /// The 1-based line of the row, when known.
        line: Option<u64>,
        /// The underlying error.
        source: csv::Error,
    },
}
