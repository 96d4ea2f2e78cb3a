//! Resolution of library file requests with root containment.

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::error::{LibraryError, Result};

/// Resolves a URL-encoded file request to a canonical path inside `root`.
///
/// The request is decoded, made absolute and canonicalized (following
/// symlinks and `..` segments) before it is compared component-wise with
/// the canonical root, so no spelling of the path can escape the library.
///
/// # Errors
///
/// * `LibraryError::InvalidInput` - the request does not decode to UTF-8
/// * `LibraryError::FileNotFound` - the path does not exist or is a directory
/// * `LibraryError::AccessDenied` - the path resolves outside `root`
/// * `LibraryError::FileSystem` - any other I/O failure while resolving
pub fn resolve_library_file(root: &Path, requested: &str) -> Result<PathBuf> {
    let decoded = urlencoding::decode(requested).map_err(|e| {
        LibraryError::invalid_input("path", format!("not valid UTF-8: {e}"))
    })?;
    let requested_path = PathBuf::from(decoded.as_ref());

    let resolved = canonicalize(&requested_path)?;
    let root = canonicalize(root)?;

    if !resolved.starts_with(&root) {
        return Err(LibraryError::AccessDenied {
            path: requested_path,
        });
    }

    if resolved.is_dir() {
        return Err(LibraryError::FileNotFound {
            path: requested_path,
        });
    }

    Ok(resolved)
}

fn canonicalize(path: &Path) -> Result<PathBuf> {
    path.canonicalize().map_err(|source| match source.kind() {
        ErrorKind::NotFound => LibraryError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => LibraryError::FileSystem {
            path: path.to_path_buf(),
            source,
        },
    })
}
