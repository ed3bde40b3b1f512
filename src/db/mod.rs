pub mod connection;
pub mod entities;
pub mod error;
pub mod todo_repo;

pub use error::{StorageError, StorageResult};
