//! Library scans.

use log::{info, warn};

use super::Library;
use crate::{
    error::{LibraryError, Result},
    models::{Caller, ScanReport},
};

impl Library {
    /// Rescans the configured root and rebuilds every course found there.
    ///
    /// # Errors
    ///
    /// * `LibraryError::PermissionDenied` - `caller` is not privileged
    /// * `LibraryError::Configuration` - no root configured, or the root is
    ///   missing or not a directory
    /// * `LibraryError::FileSystem` / `LibraryError::Database` - the scan
    ///   failed and nothing was committed
    pub async fn scan_library(&self, caller: &Caller) -> Result<ScanReport> {
        if !caller.is_privileged() {
            warn!("Rejected scan request from unprivileged caller");
            return Err(LibraryError::PermissionDenied {
                action: "scan_library".to_string(),
            });
        }

        let root = self.require_root()?;
        info!("Scanning library at {}", root.display());

        self.with_database(move |db| db.scan_library(&root)).await
    }
}
