//! Local key-value storage for the client task list.
//!
//! [`StoragePort`] is the seam between the view-state and wherever the
//! serialized list lives. [`MemoryStorage`] backs tests, [`FileStorage`]
//! backs the CLI.

pub mod bridge;
pub mod file;
pub mod memory;

pub use bridge::PersistenceBridge;
pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::Result;

/// Key the task list is stored under unless configured otherwise.
pub const DEFAULT_STORAGE_KEY: &str = "todos";

/// String key-value store in the shape of browser local storage.
pub trait StoragePort {
    /// Read the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the backing store cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key` if present.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Storage` if the backing store cannot be written.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}
