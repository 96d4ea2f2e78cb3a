//! Category model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Icon given to categories created by a library scan.
pub const DEFAULT_CATEGORY_ICON: &str = "📂";

/// Top-level grouping of courses, one per first-level directory of the
/// library root.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique identifier for the category
    pub id: u64,

    /// Directory name the category was imported from (unique, case-sensitive)
    pub name: String,

    /// Display icon
    pub icon: String,

    /// Free-form description
    pub description: Option<String>,

    /// Timestamp when the category was created (UTC)
    pub created_at: Timestamp,
}
