//! # Command Implementations
//!
//! Each submodule handles one CLI command.

pub mod fetch;
pub mod materialize;
pub mod models;
pub mod status;
