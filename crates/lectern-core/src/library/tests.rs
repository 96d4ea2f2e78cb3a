//! Tests for the library facade.

use std::{fs, path::Path};

use tempfile::TempDir;
use tokio::io::AsyncReadExt;

use super::*;
use crate::{
    error::LibraryError,
    models::Caller,
    params::{FetchFile, GetTree, Id, ListCourses, UpdateCourseCategory},
};

/// Creates a library root with one course and a library over it.
async fn create_test_library() -> (TempDir, Library) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let root = temp_dir.path().join("library");
    let course = root.join("Programming").join("GoCourse");
    fs::create_dir_all(course.join("Week1")).unwrap();
    fs::write(course.join("01 intro.mp4"), b"0123456789").unwrap();
    fs::write(course.join("Week1").join("slides.pdf"), b"pdf").unwrap();

    let library = LibraryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_root_path(Some(&root))
        .build()
        .await
        .expect("Failed to create library");
    (temp_dir, library)
}

fn path_of(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[tokio::test]
async fn test_builder_creates_database_directory() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("dir").join("lectern.db");

    let library = LibraryBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("build should create parent directories");

    assert!(db_path.exists());
    assert_eq!(library.database_path(), db_path.as_path());
    assert!(library.root_path().is_none());
}

#[tokio::test]
async fn test_scan_requires_privilege() {
    let (_temp_dir, library) = create_test_library().await;

    let err = library
        .scan_library(&Caller::anonymous())
        .await
        .expect_err("anonymous scan must be rejected");

    assert!(matches!(err, LibraryError::PermissionDenied { .. }));
    assert!(library.list_courses(&ListCourses::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_scan_without_root_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let library = LibraryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .build()
        .await
        .unwrap();

    let err = library.scan_library(&Caller::privileged()).await.unwrap_err();
    assert!(matches!(err, LibraryError::Configuration { .. }));
}

#[tokio::test]
async fn test_scan_with_missing_root_is_configuration_error() {
    let temp_dir = TempDir::new().unwrap();
    let library = LibraryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_root_path(Some(temp_dir.path().join("does-not-exist")))
        .build()
        .await
        .unwrap();

    let err = library.scan_library(&Caller::privileged()).await.unwrap_err();
    assert!(matches!(err, LibraryError::Configuration { .. }));
}

#[tokio::test]
async fn test_scan_then_read_tree() {
    let (_temp_dir, library) = create_test_library().await;

    let report = library.scan_library(&Caller::privileged()).await.unwrap();
    assert!(report.success);
    assert_eq!(report.courses_created, 1);
    assert_eq!(report.lessons_created, 2);

    let course = library.list_courses(&ListCourses::default()).await.unwrap()[0].clone();
    let tree = library.get_course_tree(&Id { id: course.id }).await.unwrap();

    assert_eq!(tree.modules.len(), 1);
    let root = &tree.modules[0];
    assert_eq!(root.title, "GoCourse");
    assert_eq!(root.children[0].title, "Week1");
    assert_eq!(root.lessons[0].title, "01 intro");
    assert_eq!(tree.lesson_count() as u32, tree.total_lessons);
}

#[tokio::test]
async fn test_get_course_not_found() {
    let (_temp_dir, library) = create_test_library().await;

    let err = library.get_course(&Id { id: 404 }).await.unwrap_err();
    assert!(matches!(err, LibraryError::CourseNotFound { id: 404 }));

    let err = library.get_course_tree(&Id { id: 404 }).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_get_tree_of_empty_library() {
    let (_temp_dir, library) = create_test_library().await;
    let trees = library.get_tree(&GetTree::default()).await.unwrap();
    assert!(trees.is_empty());
}

#[tokio::test]
async fn test_update_course_category_requires_privilege() {
    let (_temp_dir, library) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let err = library
        .update_course_category(
            &Caller::anonymous(),
            &UpdateCourseCategory {
                course_id: 1,
                category_id: Some(1),
            },
        )
        .await
        .unwrap_err();

    assert!(err.is_denied());
}

#[tokio::test]
async fn test_update_course_category_unknown_category() {
    let (_temp_dir, library) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let err = library
        .update_course_category(
            &Caller::privileged(),
            &UpdateCourseCategory {
                course_id: 1,
                category_id: Some(99),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, LibraryError::CategoryNotFound { id: 99 }));
}

#[tokio::test]
async fn test_open_file_streams_contents() {
    let (_temp_dir, library) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let trees = library.get_tree(&GetTree::default()).await.unwrap();
    let lesson_path = trees[0].modules[0].lessons[0].file_path.clone();
    let encoded = lesson_path.replace(' ', "%20");

    let mut opened = library
        .open_file(&FetchFile { path: encoded })
        .await
        .expect("lesson file should open");

    let mut contents = Vec::new();
    opened.file.read_to_end(&mut contents).await.unwrap();
    assert_eq!(opened.len, 10);
    assert_eq!(contents, b"0123456789");
}

#[tokio::test]
async fn test_open_file_outside_root_is_denied() {
    let (temp_dir, library) = create_test_library().await;
    let outside = temp_dir.path().join("test.db");

    let err = library
        .open_file(&FetchFile {
            path: path_of(&outside),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, LibraryError::AccessDenied { .. }));
}
