use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::AnalysisError;

/// The category a document is uploaded under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FileKind {
    Report,
    Xray,
    Mri,
    Scan,
}

const DOCUMENT_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx", ".txt"];
const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".dicom"];

impl FileKind {
    pub fn label(&self) -> &'static str {
        match self {
            FileKind::Report => "Medical Report",
            FileKind::Xray => "X-Ray",
            FileKind::Mri => "MRI",
            FileKind::Scan => "Scan",
        }
    }

    /// Lowercase extensions, dot included.
    pub fn accepted_extensions(&self) -> &'static [&'static str] {
        match self {
            FileKind::Report => DOCUMENT_EXTENSIONS,
            FileKind::Xray | FileKind::Mri | FileKind::Scan => IMAGE_EXTENSIONS,
        }
    }

    pub fn accepts(&self, file_name: &str) -> bool {
        let lower = file_name.to_lowercase();
        self.accepted_extensions()
            .iter()
            .any(|ext| lower.len() > ext.len() && lower.ends_with(ext))
    }
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A file queued for analysis. Only metadata is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UploadedFile {
    pub id: Uuid,
    pub name: String,
    pub kind: FileKind,
    pub content_type: Option<String>,
    /// True for `image/*` content, which the front-end can preview inline.
    pub previewable: bool,
}

/// Files waiting for analysis, in upload order.
#[derive(Debug, Clone, Default)]
pub struct UploadQueue {
    files: Vec<UploadedFile>,
}

impl UploadQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a file under `kind`. Names whose extension `kind` does not
    /// accept are rejected.
    pub fn add(
        &mut self,
        name: &str,
        kind: FileKind,
        content_type: Option<&str>,
    ) -> Result<&UploadedFile, AnalysisError> {
        if !kind.accepts(name) {
            return Err(AnalysisError::UnsupportedFile {
                name: name.to_string(),
                kind,
            });
        }

        let file = UploadedFile {
            id: Uuid::new_v4(),
            name: name.to_string(),
            kind,
            content_type: content_type.map(str::to_string),
            previewable: content_type.is_some_and(|ct| ct.starts_with("image/")),
        };
        tracing::debug!(file_id = %file.id, name = %file.name, kind = ?file.kind, "file queued");

        self.files.push(file);
        let last = self.files.len() - 1;
        Ok(&self.files[last])
    }

    /// Drop a queued file. Returns whether anything was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.files.len();
        self.files.retain(|f| f.id != id);
        self.files.len() != before
    }

    pub fn files(&self) -> &[UploadedFile] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
