//! Read-only store inspection

use std::path::Path;

use serde::Serialize;
use walkdir::WalkDir;

use crate::core::ModelId;

#[derive(Debug, Clone, Serialize)]
pub struct ModelStatus {
	pub id: String,
	pub present: bool,
	pub files: u64,
	pub bytes: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreStatus {
	pub root: String,
	pub marker: String,
	pub marker_present: bool,
	pub models: Vec<ModelStatus>,
}

impl StoreStatus {
	pub fn missing(&self) -> impl Iterator<Item = &ModelStatus> {
		self.models.iter().filter(|m| !m.present)
	}

	pub fn is_complete(&self) -> bool {
		self.missing().next().is_none()
	}

	/// Marker exists but a later model does not, so a first-model check would never repair it
	pub fn masked_by_marker(&self) -> bool {
		self.marker_present && !self.is_complete()
	}
}

/// Describe which models exist under `root`. Never writes.
pub fn inspect(root: &Path, ids: &[ModelId]) -> StoreStatus {
	let models = ids
		.iter()
		.map(|id| {
			let dir = root.join(id);
			let present = dir.is_dir();
			let (files, bytes) = if present { tree_size(&dir) } else { (0, 0) };
			ModelStatus { id: id.to_string(), present, files, bytes }
		})
		.collect::<Vec<_>>();

	let marker = ids.first().map(|id| id.to_string()).unwrap_or_default();
	let marker_present = models.first().map(|m| m.present).unwrap_or(false);

	StoreStatus {
		root: root.display().to_string(),
		marker,
		marker_present,
		models,
	}
}

/// File count and total bytes of a directory tree
pub fn tree_size(dir: &Path) -> (u64, u64) {
	WalkDir::new(dir)
		.into_iter()
		.filter_map(|e| e.ok())
		.filter(|e| !e.file_type().is_dir())
		.fold((0, 0), |(files, bytes), entry| {
			let len = entry.metadata().map(|m| m.len()).unwrap_or(0);
			(files + 1, bytes + len)
		})
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;

	fn ids(names: &[&str]) -> Vec<ModelId> {
		names.iter().map(|n| ModelId::new(*n).unwrap()).collect()
	}

	#[test]
	fn reports_masked_model() {
		let root = tempfile::tempdir().unwrap();
		fs::create_dir(root.path().join("a")).unwrap();
		fs::write(root.path().join("a/model.bin"), b"1234").unwrap();

		let status = inspect(root.path(), &ids(&["a", "b"]));

		assert!(status.marker_present);
		assert!(!status.is_complete());
		assert!(status.masked_by_marker());
		assert_eq!(status.models[0].files, 1);
		assert_eq!(status.models[0].bytes, 4);
		assert_eq!(status.missing().map(|m| m.id.as_str()).collect::<Vec<_>>(), ["b"]);
	}

	#[test]
	fn empty_store_is_not_masked() {
		let root = tempfile::tempdir().unwrap();
		let status = inspect(root.path(), &ids(&["a", "b"]));
		assert!(!status.marker_present);
		assert!(!status.masked_by_marker());
		assert_eq!(status.missing().count(), 2);
	}
}
