use thiserror::Error;

use crate::upload::FileKind;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no files to analyze")]
    NoFiles,

    #[error("{name} is not an accepted {kind} file (expected one of: {accepted})", accepted = .kind.accepted_extensions().join(", "))]
    UnsupportedFile { name: String, kind: FileKind },
}
