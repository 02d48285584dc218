use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("tip list must not be empty")]
    EmptyTipList,

    #[error("rule {index} has no keywords")]
    RuleWithoutKeywords { index: usize },

    #[error("rule {index} has an empty keyword")]
    EmptyKeyword { index: usize },

    #[error("failed to read responder config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
