#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use lectern_core::{Database, Library, LibraryBuilder};
use tempfile::TempDir;

/// A temporary library root plus a database file next to it.
pub struct Fixture {
    pub temp_dir: TempDir,
    pub root: PathBuf,
}

impl Fixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("library");
        fs::create_dir_all(&root).expect("Failed to create library root");
        Self { temp_dir, root }
    }

    /// Creates a directory (and its parents) under the root.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root.join(relative);
        fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Writes `contents` to a file under the root, creating parents.
    pub fn file(&self, relative: &str, contents: &[u8]) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn remove(&self, relative: &str) {
        let path = self.root.join(relative);
        if path.is_dir() {
            fs::remove_dir_all(path).expect("Failed to remove directory");
        } else {
            fs::remove_file(path).expect("Failed to remove file");
        }
    }

    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("test.db")
    }

    pub fn database(&self) -> Database {
        Database::new(self.db_path()).expect("Failed to open test database")
    }

    pub async fn library(&self) -> Library {
        LibraryBuilder::new()
            .with_database_path(Some(self.db_path()))
            .with_root_path(Some(&self.root))
            .build()
            .await
            .expect("Failed to create library")
    }

    /// The `Programming/GoCourse` layout used across scan tests:
    ///
    /// ```text
    /// Programming/GoCourse/
    ///   01-intro.mp4      (10 bytes)
    ///   Week1/
    ///     slides.pdf
    ///     lecture.MKV
    ///   notes.txt
    /// ```
    pub fn go_course(&self) -> PathBuf {
        self.file("Programming/GoCourse/01-intro.mp4", b"0123456789");
        self.file("Programming/GoCourse/Week1/slides.pdf", b"%PDF");
        self.file("Programming/GoCourse/Week1/lecture.MKV", b"mkv");
        self.file("Programming/GoCourse/notes.txt", b"notes");
        self.root.join("Programming/GoCourse")
    }
}

pub fn path_str(path: &Path) -> String {
    path.to_str().expect("test paths are UTF-8").to_string()
}
