//! Core domain types

pub mod error;
pub mod materializer;
pub mod model_id;

pub use error::{CopyError, MaterializeError, ResolveError};
pub use materializer::{ensure_models_present, MarkerCheck, MaterializeReport};
pub use model_id::{InvalidModelId, ModelId};
