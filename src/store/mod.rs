//! Persistence layer for submitted deployment records.
//!
//! This module contains:
//! - [`DeploymentRecord`] — the persisted outcome of a real submission
//! - [`RecordStore`] trait — atomic single-document persistence, plus
//!   [`MemoryRecordStore`] and [`FileRecordStore`] implementations
//!
//! Dry runs never touch this layer.

mod file_backed;
mod record;
mod store;

pub use file_backed::FileRecordStore;
pub use record::DeploymentRecord;
pub use store::{MemoryRecordStore, RecordStore};
