//! Category lookups and the find-or-create resolver used by scans.

use jiff::Timestamp;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::{id_column, timestamp_column};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Category, DEFAULT_CATEGORY_ICON},
};

const CATEGORY_COLUMNS: &str = "id, name, icon, description, created_at";
const INSERT_CATEGORY_SQL: &str =
    "INSERT INTO categories (name, icon, description, created_at) VALUES (?1, ?2, ?3, ?4)";
const CHECK_CATEGORY_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM categories WHERE id = ?1)";

impl super::Database {
    /// Helper function to construct a Category from a database row
    fn build_category_from_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
        Ok(Category {
            id: id_column(row, 0)?,
            name: row.get(1)?,
            icon: row.get(2)?,
            description: row.get(3)?,
            created_at: timestamp_column(row, 4)?,
        })
    }

    /// Finds the category called `name`, creating it when absent.
    ///
    /// Returns the category and whether it was created by this call.
    pub fn resolve_category(&mut self, name: &str) -> Result<(Category, bool)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        let resolved = Self::resolve_category_in(&tx, name)?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(resolved)
    }

    /// Transaction-scoped variant of [`resolve_category`](Self::resolve_category).
    pub(crate) fn resolve_category_in(conn: &Connection, name: &str) -> Result<(Category, bool)> {
        let existing = conn
            .query_row(
                &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE name = ?1"),
                params![name],
                Self::build_category_from_row,
            )
            .optional()
            .db_context("Failed to query category by name")?;

        if let Some(category) = existing {
            return Ok((category, false));
        }

        let now = Timestamp::now();
        let description = format!("Imported from {name}");
        conn.execute(
            INSERT_CATEGORY_SQL,
            params![name, DEFAULT_CATEGORY_ICON, &description, now.to_string()],
        )
        .db_context("Failed to insert category")?;

        let category = Category {
            id: conn.last_insert_rowid() as u64,
            name: name.to_string(),
            icon: DEFAULT_CATEGORY_ICON.to_string(),
            description: Some(description),
            created_at: now,
        };
        Ok((category, true))
    }

    /// Retrieves a category by its ID.
    pub fn get_category(&self, id: u64) -> Result<Option<Category>> {
        self.connection
            .query_row(
                &format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = ?1"),
                params![id as i64],
                Self::build_category_from_row,
            )
            .optional()
            .db_context("Failed to query category")
    }

    /// Lists all categories ordered by name.
    pub fn list_categories(&self) -> Result<Vec<Category>> {
        let mut stmt = self
            .connection
            .prepare(&format!(
                "SELECT {CATEGORY_COLUMNS} FROM categories ORDER BY name"
            ))
            .db_context("Failed to prepare query")?;

        let categories = stmt
            .query_map([], Self::build_category_from_row)
            .db_context("Failed to query categories")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch categories")?;

        Ok(categories)
    }

    /// Whether a category with the given ID exists.
    pub(crate) fn category_exists(conn: &Connection, id: u64) -> Result<bool> {
        conn.query_row(CHECK_CATEGORY_EXISTS_SQL, params![id as i64], |row| {
            row.get(0)
        })
        .db_context("Failed to check category existence")
    }
}
