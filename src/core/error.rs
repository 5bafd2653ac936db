//! Error types for model materialization

use std::path::PathBuf;

use thiserror::Error;

use super::ModelId;

/// The model library could not turn an identifier into a source directory
#[derive(Debug, Error)]
pub enum ResolveError {
	/// No installed package matches the identifier
	#[error("model {id} is not installed (searched {searched})")]
	NotInstalled { id: String, searched: String },

	/// The interpreter could not be started
	#[error("failed to run {program}")]
	Interpreter {
		program: String,
		#[source]
		source: std::io::Error,
	},

	/// The interpreter ran but could not load the model
	#[error("loading model {id} failed ({status}): {stderr}")]
	Failed { id: String, status: String, stderr: String },

	/// The resolved location is not a usable directory
	#[error("model {id} resolved to {path}, which is not a directory")]
	InvalidPath { id: String, path: PathBuf },

	/// Package metadata could not be read
	#[error("invalid package metadata at {path}: {reason}")]
	Metadata { path: PathBuf, reason: String },
}

/// Filesystem failure while copying one model tree
#[derive(Debug, Error)]
pub enum CopyError {
	#[error("source {0} does not exist or is not a directory")]
	SourceMissing(PathBuf),

	#[error("{0} already exists and is not a directory")]
	NotADirectory(PathBuf),

	#[error("I/O error at {path}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl CopyError {
	pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
		Self::Io { path: path.into(), source }
	}
}

/// A materialization pass was aborted
#[derive(Debug, Error)]
pub enum MaterializeError {
	#[error("no models to materialize")]
	NoModels,

	#[error("could not resolve model {id}")]
	Resolve {
		id: ModelId,
		#[source]
		source: ResolveError,
	},

	#[error("could not copy model {id}")]
	Copy {
		id: ModelId,
		#[source]
		source: CopyError,
	},
}

impl MaterializeError {
	/// Identifier of the model that aborted the pass
	pub fn model(&self) -> Option<&ModelId> {
		match self {
			Self::NoModels => None,
			Self::Resolve { id, .. } | Self::Copy { id, .. } => Some(id),
		}
	}
}

/// Error message followed by every source, joined with ": "
pub fn chain(err: &dyn std::error::Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(inner) = source {
		message.push_str(": ");
		message.push_str(&inner.to_string());
		source = inner.source();
	}
	message
}
