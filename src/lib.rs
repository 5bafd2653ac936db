//! # model-seed Library
//!
//! First-run model materialization for container entrypoints.
//! Copies installed model packages into a persistent volume, then hands off
//! to the main service process.

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod runtime;
pub mod storage;
pub mod ui;

pub use crate::core::{ensure_models_present, MarkerCheck, MaterializeError, MaterializeReport, ModelId};
pub use crate::models::ModelResolver;
