//! # Model Resolution
//!
//! Locating installed model packages inside the container image.

pub mod package;
pub mod python;

use std::path::PathBuf;

use crate::core::{ModelId, ResolveError};

pub use package::PackageResolver;
pub use python::PythonResolver;

/// Maps a model identifier to the directory its installed data lives in
pub trait ModelResolver {
	fn resolve(&self, id: &ModelId) -> Result<PathBuf, ResolveError>;
}

impl<R: ModelResolver + ?Sized> ModelResolver for &R {
	fn resolve(&self, id: &ModelId) -> Result<PathBuf, ResolveError> {
		(**self).resolve(id)
	}
}

impl<R: ModelResolver + ?Sized> ModelResolver for Box<R> {
	fn resolve(&self, id: &ModelId) -> Result<PathBuf, ResolveError> {
		(**self).resolve(id)
	}
}
