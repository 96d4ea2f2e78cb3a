//! Parameter structures for library operations
//!
//! These structures are shared by every interface (CLI, MCP) and carry no
//! framework-specific derives beyond serde and an optional JSON schema.
//! Interface layers wrap them:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! The CLI converts its clap structs with `From` impls; the MCP server wraps
//! the core types in a transparent serde container that adds `JsonSchema`.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like show_course and course_tree.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for listing courses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListCourses {
    /// Only list courses in this category
    #[serde(default)]
    pub category_id: Option<u64>,
}

/// Parameters for reading the course hierarchy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct GetTree {
    /// Restrict the tree to a single course; all courses when absent
    #[serde(default)]
    pub course_id: Option<u64>,
}

/// Parameters for reassigning a course to another category.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateCourseCategory {
    /// Course to update
    pub course_id: u64,
    /// New category. When absent the current category is kept.
    #[serde(default)]
    pub category_id: Option<u64>,
}

/// Parameters for fetching a file from the library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FetchFile {
    /// URL-encoded path of the file, usually a lesson's `file_path`
    pub path: String,
}
