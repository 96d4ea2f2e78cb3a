//! Checks that CLI output matches the core Display implementations the MCP
//! server also returns.

use std::{fs, process::Command};

use lectern_core::{
    models::Caller,
    params::{GetTree, Id, ListCourses},
    Library, LibraryBuilder,
};
use tempfile::TempDir;

async fn create_test_library() -> (Library, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temporary directory");
    let root = temp_dir.path().join("library");
    fs::create_dir_all(root.join("Music/Piano/Scales")).unwrap();
    fs::write(root.join("Music/Piano/welcome.mp3"), b"a").unwrap();
    fs::write(root.join("Music/Piano/Scales/c-major.pdf"), b"b").unwrap();

    let library = LibraryBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_root_path(Some(root))
        .build()
        .await
        .expect("Failed to create library");

    (library, temp_dir)
}

/// Run a CLI command against `library`'s database and capture stdout.
fn run_cli_command(library: &Library, args: &[&str]) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_lectern"))
        .env_remove("LECTERN_ROOT")
        .arg("--no-color")
        .arg("--database-file")
        .arg(library.database_path())
        .args(args)
        .output()
        .expect("Failed to run CLI command");
    String::from_utf8(output.stdout).expect("Invalid UTF-8 in CLI output")
}

#[tokio::test]
async fn test_course_display_consistency() {
    let (library, _temp_dir) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let course = library.get_course(&Id { id: 1 }).await.unwrap();
    let cli_output = run_cli_command(&library, &["course", "show", "1"]);

    assert_eq!(cli_output, course.to_string());
}

#[tokio::test]
async fn test_tree_display_consistency() {
    let (library, _temp_dir) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let trees = library.get_tree(&GetTree::default()).await.unwrap();
    let cli_output = run_cli_command(&library, &["course", "tree"]);

    assert_eq!(cli_output, trees.to_string());
}

#[tokio::test]
async fn test_course_list_consistency() {
    let (library, _temp_dir) = create_test_library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let courses = library.list_courses(&ListCourses::default()).await.unwrap();
    let cli_output = run_cli_command(&library, &["course", "list"]);

    assert_eq!(cli_output, format!("# Courses\n\n{courses}"));
}
