//! Infrastructure layer for UpliftED: paths, config loading, the local
//! record stores and the repositories built on top of them.

pub mod config_service;
pub mod kv_deadline_repository;
pub mod kv_user_repository;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::kv_deadline_repository::KvDeadlineRepository;
pub use crate::kv_user_repository::KvUserRepository;
pub use crate::paths::UpliftPaths;
pub use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
