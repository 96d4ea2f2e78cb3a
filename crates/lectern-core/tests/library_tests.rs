mod common;

use common::{path_str, Fixture};
use lectern_core::{Caller, FetchFile, GetTree, Id, ListCourses, UpdateCourseCategory};
use tokio::io::AsyncReadExt;

#[tokio::test]
async fn test_end_to_end_scan_read_and_serve() {
    let fixture = Fixture::new();
    let course_dir = fixture.go_course();
    let library = fixture.library().await;

    let report = library.scan_library(&Caller::privileged()).await.unwrap();
    assert_eq!(report.lessons_created, 4);

    let courses = library.list_courses(&ListCourses::default()).await.unwrap();
    let course = library.get_course(&Id { id: courses[0].id }).await.unwrap();
    assert_eq!(course.file_path, path_str(&course_dir));

    let tree = library.get_course_tree(&Id { id: course.id }).await.unwrap();
    let week1 = &tree.modules[0].children[0];
    let slides = week1.lessons.iter().find(|l| l.title == "slides").unwrap();

    let mut opened = library
        .open_file(&FetchFile {
            path: slides.file_path.clone(),
        })
        .await
        .unwrap();
    let mut bytes = Vec::new();
    opened.file.read_to_end(&mut bytes).await.unwrap();
    assert_eq!(bytes, b"%PDF");
}

#[tokio::test]
async fn test_concurrent_scans_leave_one_consistent_hierarchy() {
    let fixture = Fixture::new();
    fixture.go_course();
    fixture.file("Design/Figma/basics.mp4", b"x");
    let library = fixture.library().await;
    let admin = Caller::privileged();

    let (first, second) = tokio::join!(library.scan_library(&admin), library.scan_library(&admin));

    // A scan may lose the write lock, but any committed state is complete.
    assert!(first.is_ok() || second.is_ok());

    let trees = library.get_tree(&GetTree::default()).await.unwrap();
    assert_eq!(trees.len(), 2);
    for tree in &trees {
        let roots = tree.modules.len();
        assert_eq!(roots, 1, "{} should have exactly one root module", tree.title);
        assert_eq!(tree.lesson_count() as u32, tree.total_lessons);
    }
}

#[tokio::test]
async fn test_reads_do_not_need_privilege_but_writes_do() {
    let fixture = Fixture::new();
    fixture.go_course();
    let library = fixture.library().await;
    library.scan_library(&Caller::privileged()).await.unwrap();

    let reader = Caller::anonymous();
    let categories = library.list_categories().await.unwrap();
    assert_eq!(categories.len(), 1);

    let err = library
        .update_course_category(
            &reader,
            &UpdateCourseCategory {
                course_id: 1,
                category_id: Some(categories[0].id),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_denied());

    let err = library.scan_library(&reader).await.unwrap_err();
    assert!(err.is_denied());
}

#[tokio::test]
async fn test_open_file_rejects_traversal_and_missing_files() {
    let fixture = Fixture::new();
    fixture.go_course();
    std::fs::write(fixture.temp_dir.path().join("outside.txt"), b"no").unwrap();
    let library = fixture.library().await;

    let traversal = format!("{}/Programming/%2E%2E/%2E%2E/outside.txt", path_str(&fixture.root));
    let err = library
        .open_file(&FetchFile { path: traversal })
        .await
        .unwrap_err();
    assert!(err.is_denied());

    let missing = format!("{}/Programming/GoCourse/missing.mp4", path_str(&fixture.root));
    let err = library
        .open_file(&FetchFile { path: missing })
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
