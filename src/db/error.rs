use sea_orm::DbErr;
use thiserror::Error;

/// Store-level failure surfaced by the persistence gateway. Wraps the driver
/// error for logging; the client only ever sees a short generic message.
#[derive(Debug, Error)]
#[error("database error: {0}")]
pub struct StorageError(#[from] pub DbErr);

pub type StorageResult<T> = Result<T, StorageError>;
