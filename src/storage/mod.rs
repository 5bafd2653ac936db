//! Persistent model store

pub mod copy;
pub mod download;
pub mod inspect;

pub use copy::{copy_tree, staging_path, CopyStats};
pub use download::{fetch, megabytes, Fetched};
pub use inspect::{inspect, tree_size, ModelStatus, StoreStatus};
