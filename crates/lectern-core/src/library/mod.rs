//! Async library API.
//!
//! [`Library`] is the entry point every interface goes through. Each call
//! opens its own [`Database`](crate::db::Database) connection inside
//! `tokio::task::spawn_blocking`, so callers on an async runtime never block
//! on SQLite or the filesystem, and concurrent calls never share a
//! connection.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI / MCP     │    │     Library     │    │    Database     │
//! │   (lectern-cli) │───▶│ (privilege and  │───▶│ (scanner, tree, │
//! │                 │    │  configuration) │    │  db queries)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`builder`]: [`LibraryBuilder`] resolves the database and root paths
//! - [`scan_ops`]: scanning the library root
//! - [`catalog_ops`]: course, category and tree reads plus category updates
//! - [`file_ops`]: opening library files for streaming
//!
//! # Examples
//!
//! ```rust,no_run
//! use lectern_core::{models::Caller, params::GetTree, LibraryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("/tmp/lectern.db"))
//!     .with_root_path(Some("/srv/library"))
//!     .build()
//!     .await?;
//!
//! let report = library.scan_library(&Caller::privileged()).await?;
//! println!("{report}");
//!
//! for tree in library.get_tree(&GetTree::default()).await? {
//!     println!("{tree}");
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{LibraryError, Result},
};

pub mod builder;
pub mod catalog_ops;
pub mod file_ops;
pub mod scan_ops;

#[cfg(test)]
mod tests;

pub use builder::LibraryBuilder;
pub use file_ops::LibraryFile;

/// Entry point for scanning and reading the course library.
#[derive(Debug, Clone)]
pub struct Library {
    pub(crate) db_path: PathBuf,
    pub(crate) root_path: Option<PathBuf>,
}

impl Library {
    pub(crate) fn new(db_path: PathBuf, root_path: Option<PathBuf>) -> Self {
        Self { db_path, root_path }
    }

    /// Path of the SQLite database backing this library.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Configured library root, if any.
    pub fn root_path(&self) -> Option<&Path> {
        self.root_path.as_deref()
    }

    pub(crate) fn require_root(&self) -> Result<PathBuf> {
        self.root_path
            .clone()
            .ok_or_else(|| LibraryError::configuration("library root directory is not configured"))
    }

    /// Runs `op` against a fresh connection on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(|e| LibraryError::configuration(format!("Task join error: {e}")))?
    }
}
