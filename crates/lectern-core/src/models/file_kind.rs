//! Content-kind classification for lesson files.

use std::{convert::Infallible, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

/// Tag describing what kind of content a lesson file holds.
///
/// The tag is derived from the file extension alone; file contents are never
/// inspected. Extensions without a dedicated kind keep their own lowercased
/// name so the frontend can still pick an icon for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FileKind {
    /// `mp4`, `mov`, `mkv`
    Video,
    /// `mp3`, `wav`
    Audio,
    /// `pdf`
    Pdf,
    /// Any other extension, lowercased
    Other(String),
    /// No extension at all
    File,
}

impl FileKind {
    /// Classifies a path by its extension, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::path::Path;
    /// use lectern_core::models::FileKind;
    ///
    /// assert_eq!(FileKind::from_path(Path::new("intro.MP4")), FileKind::Video);
    /// assert_eq!(FileKind::from_path(Path::new("notes.Md")).as_str(), "md");
    /// assert_eq!(FileKind::from_path(Path::new("LICENSE")), FileKind::File);
    /// ```
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }

    fn from_extension(extension: &str) -> Self {
        match extension {
            "mp4" | "mov" | "mkv" => FileKind::Video,
            "mp3" | "wav" => FileKind::Audio,
            "pdf" => FileKind::Pdf,
            "" => FileKind::File,
            other => FileKind::Other(other.to_string()),
        }
    }

    /// Tag as stored in the `lessons.file_type` column.
    pub fn as_str(&self) -> &str {
        match self {
            FileKind::Video => "video",
            FileKind::Audio => "audio",
            FileKind::Pdf => "pdf",
            FileKind::Other(ext) => ext,
            FileKind::File => "file",
        }
    }
}

impl FromStr for FileKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "video" => FileKind::Video,
            "audio" => FileKind::Audio,
            "pdf" => FileKind::Pdf,
            "file" | "" => FileKind::File,
            other => FileKind::Other(other.to_string()),
        })
    }
}

impl From<String> for FileKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<FileKind> for String {
    fn from(kind: FileKind) -> Self {
        kind.as_str().to_string()
    }
}
