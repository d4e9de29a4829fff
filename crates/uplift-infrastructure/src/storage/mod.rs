//! Storage layer: atomic files and the key-value stores built on them.

mod atomic_file;
mod file_store;
mod memory_store;

pub use atomic_file::{AtomicFileError, AtomicTextFile};
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
