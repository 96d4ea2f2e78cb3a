//! Scan report returned by a library scan.

use serde::{Deserialize, Serialize};

/// Aggregated counts for a completed library scan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanReport {
    /// Whether the scan ran to completion and was committed
    pub success: bool,
    /// Human-readable outcome
    pub message: String,
    /// Courses imported for the first time
    pub courses_created: u32,
    /// Existing courses matched by path and rebuilt
    pub courses_updated: u32,
    /// Modules created, root modules included
    pub modules_created: u32,
    /// Lessons created
    pub lessons_created: u32,
    /// Categories created
    pub categories_created: u32,
}
