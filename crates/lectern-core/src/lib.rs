//! Core library for Lectern, a course library indexer.
//!
//! Lectern scans a directory tree laid out as
//! `<root>/<category>/<course>/...` into SQLite and serves the result as
//! nested course trees, flat course and category listings, and file
//! streams confined to the library root.
//!
//! # Layers
//!
//! - [`scanner`]: walks the root and rebuilds each course's modules and
//!   lessons inside a single transaction
//! - [`tree`]: turns the flat module arena back into ordered trees
//! - [`files`]: decodes and confines file requests to the root
//! - [`db`]: SQLite schema, migrations and queries
//! - [`library`]: the async [`Library`] API used by the CLI and MCP server
//! - [`display`]: markdown rendering shared by every interface
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use lectern_core::{models::Caller, params::ListCourses, LibraryBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let library = LibraryBuilder::new()
//!     .with_database_path(Some("lectern.db"))
//!     .with_root_path(Some("/srv/courses"))
//!     .build()
//!     .await?;
//!
//! let report = library.scan_library(&Caller::privileged()).await?;
//! println!("{report}");
//!
//! let courses = library.list_courses(&ListCourses::default()).await?;
//! for course in &courses {
//!     println!("{}: {} lessons", course.title, course.total_lessons);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod files;
pub mod library;
pub mod models;
pub mod params;
pub mod scanner;
pub mod tree;

pub use db::Database;
pub use display::{Categories, CourseTrees, Courses, LocalDateTime, OperationStatus, UpdateResult};
pub use error::{LibraryError, Result};
pub use library::{Library, LibraryBuilder, LibraryFile};
pub use models::{
    Caller, Category, Course, CourseTree, FileKind, Lesson, LessonNode, Module, ModuleNode,
    ScanReport,
};
pub use params::{FetchFile, GetTree, Id, ListCourses, UpdateCourseCategory};
