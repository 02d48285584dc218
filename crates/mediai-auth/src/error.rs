use mediai_core::error::CoreError;
use mediai_storage::error::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage unavailable: {0}")]
    PersistenceUnavailable(#[from] StorageError),

    #[error("stored session record is corrupt: {0}")]
    CorruptSessionRecord(#[from] CoreError),

    #[error("stored session record is unreadable: {0}")]
    UnreadableSessionRecord(StorageError),

    #[error("identity provider '{provider}' failed: {message}")]
    ProviderFailed { provider: String, message: String },
}
