//! studygroup-storage
//!
//! S3-backed session store and performance history. Thin wrapper around the
//! AWS S3 SDK storing one JSON document per key.

pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod objects;
pub mod sessions;
pub mod state;

pub use config::StorageConfig;
pub use history::S3PerformanceHistory;
pub use sessions::S3SessionStore;
