//! Database operations and SQLite management for the course library.
//!
//! This module owns the SQLite connection and schema, and provides the
//! query interfaces for categories, courses and the module/lesson
//! hierarchy. Functions that must run inside a scan transaction take a
//! `&Connection` (a `Transaction` derefs to one) instead of `&self`.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod category_queries;
pub mod course_queries;
pub mod hierarchy_queries;
pub mod migrations;
pub mod utils;

pub use hierarchy_queries::{NewLesson, NewModule};

/// Database connection and operations handler.
pub struct Database {
    pub(crate) connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
