//! Recursive directory-to-hierarchy synchronization for a single course.

use std::{
    cmp::Ordering,
    fs,
    ops::AddAssign,
    path::{Path, PathBuf},
};

use log::debug;
use rusqlite::Connection;

use crate::{
    db::{utils::path_to_string, Database, NewLesson, NewModule},
    error::{FileSystemResultExt, Result},
    models::FileKind,
};

/// Counts produced by synchronizing one directory and everything below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncCounts {
    /// Lessons found in the directory and all subdirectories
    pub lessons: u32,
    /// Modules created for subdirectories
    pub modules_created: u32,
    /// Lessons created
    pub lessons_created: u32,
}

impl AddAssign for SyncCounts {
    fn add_assign(&mut self, other: Self) {
        self.lessons += other.lessons;
        self.modules_created += other.modules_created;
        self.lessons_created += other.lessons_created;
    }
}

/// A directory entry with its type and size resolved through symlinks.
#[derive(Debug)]
pub(crate) struct Entry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    pub len: u64,
}

/// Lists the immediate children of `dir`, directories first, then files,
/// each group ordered by case-insensitive name.
pub(crate) fn sorted_entries(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for entry in fs::read_dir(dir).fs_context(dir)? {
        let entry = entry.fs_context(dir)?;
        let path = entry.path();
        let metadata = fs::metadata(&path).fs_context(&path)?;

        entries.push(Entry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: metadata.is_dir(),
            len: metadata.len(),
            path,
        });
    }

    entries.sort_by(compare_entries);
    Ok(entries)
}

fn compare_entries(a: &Entry, b: &Entry) -> Ordering {
    b.is_dir
        .cmp(&a.is_dir)
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Mirrors `dir` into the hierarchy under `module_id`.
///
/// Subdirectories become child modules and files become lessons of
/// `module_id` itself. Modules and lessons share one sibling counter that
/// starts at `order_start`; every nested directory restarts its own counter
/// at 1.
///
/// Any filesystem error aborts the walk.
pub fn sync_directory(
    conn: &Connection,
    course_id: u64,
    module_id: u64,
    dir: &Path,
    order_start: u32,
) -> Result<SyncCounts> {
    let mut counts = SyncCounts::default();
    let mut order = order_start;

    for entry in sorted_entries(dir)? {
        let file_path = path_to_string(&entry.path);

        if entry.is_dir {
            let child_id = Database::insert_module(
                conn,
                &NewModule {
                    course_id,
                    parent_id: Some(module_id),
                    title: &entry.name,
                    order,
                    file_path: &file_path,
                },
            )?;
            debug!("Module {child_id} '{}' at position {order}", entry.name);
            counts.modules_created += 1;
            order += 1;

            counts += sync_directory(conn, course_id, child_id, &entry.path, 1)?;
        } else {
            let title = entry
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| entry.name.clone());
            let file_type = FileKind::from_path(&entry.path);

            Database::insert_lesson(
                conn,
                &NewLesson {
                    module_id,
                    title: &title,
                    file_type: &file_type,
                    file_path: &file_path,
                    file_size: entry.len,
                    order,
                },
            )?;
            debug!("Lesson '{title}' ({}) at position {order}", file_type.as_str());
            counts.lessons += 1;
            counts.lessons_created += 1;
            order += 1;
        }
    }

    Ok(counts)
}
