//! Builder for creating and configuring Library instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Library;
use crate::{
    db::{utils::absolute_path, Database},
    error::{FileSystemResultExt, LibraryError, Result},
};

const XDG_PREFIX: &str = "lectern";
const DATABASE_FILE_NAME: &str = "lectern.db";

/// Builder for creating and configuring Library instances.
#[derive(Debug, Clone, Default)]
pub struct LibraryBuilder {
    database_path: Option<PathBuf>,
    root_path: Option<PathBuf>,
}

impl LibraryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses the XDG data directory:
    /// `$XDG_DATA_HOME/lectern/lectern.db` or
    /// `~/.local/share/lectern/lectern.db`.
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the directory scanned for categories and courses.
    ///
    /// Without a root, scans fail with a configuration error and file
    /// requests cannot be served. Reads of already imported data still work.
    pub fn with_root_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.root_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured library, creating the database if needed.
    ///
    /// The root path is made absolute against the current directory but is
    /// not required to exist yet.
    ///
    /// # Errors
    ///
    /// * `LibraryError::XdgDirectory` - no default database location
    /// * `LibraryError::FileSystem` - the database directory cannot be created
    /// * `LibraryError::Database` - schema initialization fails
    pub async fn build(self) -> Result<Library> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).fs_context(parent)?;
            }
        }

        let root_path = self.root_path.as_deref().map(absolute_path).transpose()?;

        let init_path = db_path.clone();
        task::spawn_blocking(move || Database::new(&init_path).map(drop))
            .await
            .map_err(|e| LibraryError::configuration(format!("Task join error: {e}")))??;

        debug!(
            "Library ready: database {}, root {:?}",
            db_path.display(),
            root_path
        );
        Ok(Library::new(db_path, root_path))
    }

    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix(XDG_PREFIX)
            .place_data_file(DATABASE_FILE_NAME)
            .map_err(|e| LibraryError::XdgDirectory(e.to_string()))
    }
}
