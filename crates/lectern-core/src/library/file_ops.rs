//! Opening library files for streaming.

use std::path::PathBuf;

use log::debug;
use tokio::{fs::File, task};

use super::Library;
use crate::{
    error::{FileSystemResultExt, LibraryError, Result},
    files::resolve_library_file,
    params::FetchFile,
};

/// An open file inside the library root.
#[derive(Debug)]
pub struct LibraryFile {
    /// Canonical path of the file
    pub path: PathBuf,
    /// Size in bytes at open time
    pub len: u64,
    /// Handle positioned at the start of the file
    pub file: File,
}

impl Library {
    /// Opens the file at the URL-encoded `params.path` for streaming.
    ///
    /// No privilege is required; only files under the configured root are
    /// served.
    ///
    /// # Errors
    ///
    /// * `LibraryError::Configuration` - no root configured
    /// * `LibraryError::InvalidInput` - the path does not decode to UTF-8
    /// * `LibraryError::FileNotFound` - missing file, or a directory
    /// * `LibraryError::AccessDenied` - the path resolves outside the root
    pub async fn open_file(&self, params: &FetchFile) -> Result<LibraryFile> {
        let root = self.require_root()?;
        let requested = params.path.clone();

        let path = task::spawn_blocking(move || resolve_library_file(&root, &requested))
            .await
            .map_err(|e| LibraryError::configuration(format!("Task join error: {e}")))??;

        let file = File::open(&path).await.fs_context(&path)?;
        let len = file.metadata().await.fs_context(&path)?.len();
        debug!("Serving {} ({len} bytes)", path.display());

        Ok(LibraryFile { path, len, file })
    }
}
