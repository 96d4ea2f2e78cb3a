//! Library scan: rebuilds the persisted hierarchy from the directory tree.
//!
//! The library root has two fixed levels above the course content:
//!
//! ```text
//! <root>/<category>/<course>/...modules and lessons...
//! ```
//!
//! Every scan resolves each category directory, matches each course
//! directory to a course by path (creating it on first sight), tears the
//! course's modules and lessons down and rebuilds them with
//! [`sync_directory`]. The whole scan runs inside a single `IMMEDIATE`
//! transaction, so it either commits every course or none of them, and no
//! other writer can interleave with the delete-then-rebuild.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};
use rusqlite::{Connection, TransactionBehavior};

use crate::{
    db::{
        utils::{absolute_path, path_to_string},
        Database, NewModule,
    },
    error::{DatabaseResultExt, FileSystemResultExt, LibraryError, Result},
    models::ScanReport,
};

pub mod sync;

pub use sync::{sync_directory, SyncCounts};

const SCAN_COMPLETED_MESSAGE: &str = "Scan completed";

impl Database {
    /// Scans the library rooted at `root` and commits the rebuilt
    /// hierarchy.
    ///
    /// # Errors
    ///
    /// * `LibraryError::Configuration` - `root` is missing or not a directory
    /// * `LibraryError::FileSystem` - any read error during the walk; nothing
    ///   is committed
    /// * `LibraryError::Database` - store failures, including a concurrent
    ///   writer holding the lock
    pub fn scan_library(&mut self, root: &Path) -> Result<ScanReport> {
        let root = absolute_path(root)?;
        if !root.is_dir() {
            return Err(LibraryError::configuration(format!(
                "library root not found or not a directory: {}",
                root.display()
            )));
        }

        let tx = self
            .connection
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .db_context("Failed to begin scan transaction")?;

        let mut report = ScanReport::default();

        for category_dir in subdirectories(&root)? {
            let category_name = dir_name(&category_dir);
            let (category, created) = Self::resolve_category_in(&tx, &category_name)?;
            if created {
                info!("Created category '{}'", category.name);
                report.categories_created += 1;
            }

            for course_dir in subdirectories(&category_dir)? {
                scan_course(&tx, category.id, &course_dir, &mut report)?;
            }
        }

        tx.commit().db_context("Failed to commit scan")?;

        report.success = true;
        report.message = SCAN_COMPLETED_MESSAGE.to_string();
        info!(
            "Scan of {} finished: {} courses created, {} updated, {} modules, {} lessons",
            root.display(),
            report.courses_created,
            report.courses_updated,
            report.modules_created,
            report.lessons_created
        );

        Ok(report)
    }
}

/// Imports or refreshes one course directory and rebuilds its hierarchy.
fn scan_course(
    conn: &Connection,
    category_id: u64,
    course_dir: &Path,
    report: &mut ScanReport,
) -> Result<()> {
    let file_path = path_to_string(course_dir);

    let course = match Database::find_course_by_path(conn, &file_path)? {
        Some(mut course) => {
            Database::update_course_placement(conn, course.id, Some(category_id), &file_path)?;
            course.category_id = Some(category_id);
            course.file_path = file_path.clone();
            report.courses_updated += 1;
            debug!("Refreshing course {} '{}'", course.id, course.title);
            course
        }
        None => {
            let description = format!("Imported from {file_path}");
            let course = Database::insert_course(
                conn,
                &dir_name(course_dir),
                Some(&description),
                Some(category_id),
                &file_path,
            )?;
            report.courses_created += 1;
            debug!("Imported course {} '{}'", course.id, course.title);
            course
        }
    };

    Database::clear_course_hierarchy(conn, course.id)?;

    let root_module_id = Database::insert_module(
        conn,
        &NewModule {
            course_id: course.id,
            parent_id: None,
            title: &course.title,
            order: 0,
            file_path: &file_path,
        },
    )?;
    report.modules_created += 1;

    let counts = sync_directory(conn, course.id, root_module_id, course_dir, 1)?;
    report.modules_created += counts.modules_created;
    report.lessons_created += counts.lessons_created;

    Database::set_course_totals(conn, course.id, counts.lessons, 0)?;
    info!(
        "Scanned course '{}': {} lessons in {} modules",
        course.title,
        counts.lessons,
        counts.modules_created + 1
    );

    Ok(())
}

/// Immediate subdirectories of `dir`, sorted by name.
fn subdirectories(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    for entry in fs::read_dir(dir).fs_context(dir)? {
        let path = entry.fs_context(dir)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }

    dirs.sort();
    Ok(dirs)
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path_to_string(path))
}
