//! First-run model materialization
//!
//! Copies installed model directories into the persistent store so the
//! service can load them from the volume on every start.
//!
//! Two instances started against the same store are not coordinated. Each
//! copy lands in a hidden staging directory and is renamed into place, so a
//! reader never sees a half-copied tree under a model's name, but both
//! instances may still do the full copy.

use std::fs;
use std::path::Path;

use super::error::chain;
use super::{CopyError, MaterializeError, ModelId};
use crate::models::ModelResolver;
use crate::storage::{copy_tree, staging_path};
use crate::ui;

/// Which directories decide that materialization already happened
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MarkerCheck {
	/// Only the first model's directory. Later models missing from a store
	/// that has the first one are never repaired.
	FirstModel,
	/// Every model is checked on every run
	#[default]
	EveryModel,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
	/// The first-model marker short-circuited the run
	pub marker_hit: bool,
	pub copied: Vec<ModelId>,
	pub skipped: Vec<ModelId>,
}

impl MaterializeReport {
	pub fn wrote_anything(&self) -> bool {
		!self.copied.is_empty()
	}
}

/// Ensure every model in `ids` has a directory under `root`.
///
/// Stops at the first model that cannot be resolved or copied. Models copied
/// before it stay in place; nothing is retried or rolled back.
pub fn ensure_models_present<R: ModelResolver + ?Sized>(
	root: &Path,
	ids: &[ModelId],
	resolver: &R,
	marker: MarkerCheck,
) -> Result<MaterializeReport, MaterializeError> {
	let Some(first) = ids.first() else {
		return Err(MaterializeError::NoModels);
	};

	let mut report = MaterializeReport::default();

	if marker == MarkerCheck::FirstModel && root.join(first).is_dir() {
		ui::debug(&format!("Marker {} present, skipping materialization", first));
		report.marker_hit = true;
		return Ok(report);
	}

	for id in ids {
		let dest = root.join(id);

		if dest.is_dir() {
			ui::debug(&format!("{} already present", id));
			report.skipped.push(id.clone());
			continue;
		}

		match materialize_one(root, id, &dest, resolver) {
			Ok(Placed::Copied) => report.copied.push(id.clone()),
			Ok(Placed::LostRace) => report.skipped.push(id.clone()),
			Err(e) => {
				ui::error(&chain(&e));
				return Err(e);
			}
		}
	}

	Ok(report)
}

enum Placed {
	Copied,
	LostRace,
}

fn materialize_one<R: ModelResolver + ?Sized>(
	root: &Path,
	id: &ModelId,
	dest: &Path,
	resolver: &R,
) -> Result<Placed, MaterializeError> {
	let copy_err = |source: CopyError| MaterializeError::Copy { id: id.clone(), source };

	if dest.exists() || dest.is_symlink() {
		return Err(copy_err(CopyError::NotADirectory(dest.to_path_buf())));
	}

	let source = resolver
		.resolve(id)
		.map_err(|source| MaterializeError::Resolve { id: id.clone(), source })?;

	ui::info(&format!("Copying {} from {}", id, source.display()));

	fs::create_dir_all(root).map_err(|e| copy_err(CopyError::io(root, e)))?;

	let staging = staging_path(root, id);
	if staging.exists() {
		// Leftover from an interrupted run
		fs::remove_dir_all(&staging).map_err(|e| copy_err(CopyError::io(&staging, e)))?;
	}

	let stats = match copy_tree(&source, &staging) {
		Ok(stats) => stats,
		Err(e) => {
			let _ = fs::remove_dir_all(&staging);
			return Err(copy_err(e));
		}
	};

	if let Err(e) = fs::rename(&staging, dest) {
		let _ = fs::remove_dir_all(&staging);
		if dest.is_dir() {
			ui::warn(&format!("{} was placed by another instance, discarding this copy", id));
			return Ok(Placed::LostRace);
		}
		return Err(copy_err(CopyError::io(dest, e)));
	}

	ui::success(&format!(
		"Copied {} ({} files, {:.2} MB)",
		id,
		stats.files,
		crate::storage::megabytes(stats.bytes)
	));

	Ok(Placed::Copied)
}
