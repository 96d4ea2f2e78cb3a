#[cfg(test)]
mod model_tests {
    use std::path::Path;

    use jiff::Timestamp;
    use pretty_assertions::assert_eq;

    use crate::models::{
        Caller, Course, CourseTree, FileKind, Lesson, LessonNode, Module, ModuleNode, ScanReport,
    };

    fn create_test_course() -> Course {
        Course {
            id: 1,
            title: "GoCourse".to_string(),
            description: Some("Imported from /library/Programming/GoCourse".to_string()),
            category_id: Some(1),
            file_path: "/library/Programming/GoCourse".to_string(),
            total_lessons: 2,
            total_duration: 0,
            created_at: Timestamp::from_second(1640995200).unwrap(), // 2022-01-01 00:00:00 UTC
        }
    }

    #[test]
    fn test_classifier_known_kinds() {
        let cases = [
            ("intro.mp4", FileKind::Video),
            ("clip.MOV", FileKind::Video),
            ("movie.mkv", FileKind::Video),
            ("talk.mp3", FileKind::Audio),
            ("raw.Wav", FileKind::Audio),
            ("slides.PDF", FileKind::Pdf),
        ];

        for (name, expected) in cases {
            assert_eq!(FileKind::from_path(Path::new(name)), expected, "{name}");
        }
    }

    #[test]
    fn test_classifier_falls_back_to_extension_or_file() {
        assert_eq!(
            FileKind::from_path(Path::new("notes.TXT")),
            FileKind::Other("txt".to_string())
        );
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::File);
        assert_eq!(FileKind::from_path(Path::new("archive.tar.GZ")).as_str(), "gz");
    }

    #[test]
    fn test_file_kind_serializes_as_tag() {
        let json = serde_json::to_string(&FileKind::Video).unwrap();
        assert_eq!(json, "\"video\"");

        let other: FileKind = serde_json::from_str("\"srt\"").unwrap();
        assert_eq!(other, FileKind::Other("srt".to_string()));

        let file: FileKind = serde_json::from_str("\"file\"").unwrap();
        assert_eq!(file, FileKind::File);
    }

    #[test]
    fn test_module_root_detection() {
        let root = Module {
            id: 1,
            course_id: 1,
            parent_id: None,
            title: "GoCourse".to_string(),
            order: 0,
            file_path: "/library/Programming/GoCourse".to_string(),
        };
        let child = Module {
            id: 2,
            parent_id: Some(1),
            order: 1,
            ..root.clone()
        };

        assert!(root.is_root());
        assert!(!child.is_root());
    }

    #[test]
    fn test_course_tree_carries_course_fields() {
        let lesson = Lesson {
            id: 9,
            module_id: 1,
            title: "intro".to_string(),
            file_type: FileKind::Video,
            file_path: "/library/Programming/GoCourse/intro.mp4".to_string(),
            file_size: 1024,
            order: 1,
            duration: None,
        };
        let mut root = ModuleNode::leaf(Module {
            id: 1,
            course_id: 1,
            parent_id: None,
            title: "GoCourse".to_string(),
            order: 0,
            file_path: "/library/Programming/GoCourse".to_string(),
        });
        root.lessons.push(LessonNode::from(lesson));

        let tree = CourseTree::new(create_test_course(), vec![root]);

        assert_eq!(tree.id, 1);
        assert_eq!(tree.title, "GoCourse");
        assert_eq!(tree.category_id, Some(1));
        assert_eq!(tree.lesson_count(), 1);
        assert_eq!(tree.modules[0].lessons[0].title, "intro");
    }

    #[test]
    fn test_tree_json_shape() {
        let tree = CourseTree::new(create_test_course(), vec![]);
        let json = serde_json::to_value(&tree).unwrap();

        assert_eq!(json["title"], "GoCourse");
        assert_eq!(json["total_lessons"], 2);
        assert!(json["modules"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_lesson_duration_serializes_as_null() {
        let node = LessonNode {
            id: 1,
            title: "intro".to_string(),
            file_type: FileKind::Pdf,
            file_path: "/x/intro.pdf".to_string(),
            order: 1,
            duration: None,
        };
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json.get("duration"), Some(&serde_json::Value::Null));
        assert_eq!(json["file_type"], "pdf");
    }

    #[test]
    fn test_caller_privilege() {
        assert!(Caller::privileged().is_privileged());
        assert!(!Caller::anonymous().is_privileged());
        assert_eq!(Caller::default(), Caller::anonymous());
    }

    #[test]
    fn test_scan_report_default_is_empty() {
        let report = ScanReport::default();
        assert!(!report.success);
        assert_eq!(report.courses_created + report.lessons_created, 0);
    }
}
