//! # Process Handoff
//!
//! Replacing the entrypoint with the main service process.

pub mod handoff;

pub use handoff::handoff;
