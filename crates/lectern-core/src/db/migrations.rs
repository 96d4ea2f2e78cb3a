//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply additive migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        let has_duration_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('lessons') WHERE name = 'duration'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect lessons table")?;

        if !has_duration_column {
            self.connection
                .execute("ALTER TABLE lessons ADD COLUMN duration INTEGER", [])
                .db_context("Failed to add duration column to lessons table")?;
        }

        Ok(())
    }
}
