//! Row decoding and path helpers shared by the query modules.

use std::{
    env::current_dir,
    path::{Component, Path, PathBuf},
};

use jiff::Timestamp;
use rusqlite::{types::Type, Row};

use crate::error::{LibraryError, Result};

/// Reads an RFC 3339 timestamp stored as text in column `idx`.
pub(crate) fn timestamp_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(idx)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Reads a non-negative integer id stored in column `idx`.
pub(crate) fn id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<u64> {
    Ok(row.get::<_, i64>(idx)? as u64)
}

/// Reads a nullable integer id stored in column `idx`.
pub(crate) fn optional_id_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<u64>> {
    Ok(row.get::<_, Option<i64>>(idx)?.map(|id| id as u64))
}

/// Converts a path to the string form stored in `file_path` columns.
pub(crate) fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Normalizes a path by resolving "." and ".." components without requiring
/// the path to exist
pub fn normalize_path(path: &Path) -> PathBuf {
    path.components().fold(PathBuf::new(), |mut acc, component| {
        match component {
            Component::CurDir => acc,
            Component::ParentDir => {
                acc.pop();
                acc
            }
            _ => {
                acc.push(component);
                acc
            }
        }
    })
}

/// Makes `path` absolute against the current working directory and
/// normalizes it lexically.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(normalize_path(path));
    }

    let cwd = current_dir().map_err(|e| LibraryError::FileSystem {
        path: PathBuf::from("."),
        source: e,
    })?;
    Ok(normalize_path(&cwd.join(path)))
}
