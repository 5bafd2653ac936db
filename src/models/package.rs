//! Resolve models from installed package directories (site-packages)
//!
//! A spaCy pipeline package installs as `<site>/<name>/<name>-<version>/`,
//! with `meta.json` in the versioned directory describing `lang`, `name` and
//! `version`.

use serde::Deserialize;
use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use super::ModelResolver;
use crate::config::PACKAGE_META;
use crate::core::{ModelId, ResolveError};
use crate::ui;

#[derive(Debug, Deserialize)]
struct PackageMeta {
	lang: String,
	name: String,
	version: String,
}

impl PackageMeta {
	fn load(path: &Path) -> Result<Self, ResolveError> {
		let data = fs::read_to_string(path).map_err(|e| ResolveError::Metadata {
			path: path.to_path_buf(),
			reason: e.to_string(),
		})?;
		serde_json::from_str(&data).map_err(|e| ResolveError::Metadata {
			path: path.to_path_buf(),
			reason: e.to_string(),
		})
	}

	fn package_name(&self) -> String {
		format!("{}_{}", self.lang, self.name)
	}
}

pub struct PackageResolver {
	search_dirs: Vec<PathBuf>,
}

impl PackageResolver {
	pub fn new(search_dirs: Vec<PathBuf>) -> Self {
		Self { search_dirs }
	}

	fn find_in(&self, site: &Path, id: &ModelId) -> Result<Option<PathBuf>, ResolveError> {
		let package = site.join(id);
		if !package.is_dir() {
			return Ok(None);
		}

		let prefix = format!("{}-", id);
		let mut best: Option<(String, PathBuf)> = None;

		let Ok(entries) = fs::read_dir(&package) else {
			return Ok(None);
		};

		for entry in entries.filter_map(|e| e.ok()) {
			let path = entry.path();
			let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
				continue;
			};
			if !name.starts_with(&prefix) || !path.is_dir() {
				continue;
			}

			let meta_path = path.join(PACKAGE_META);
			if !meta_path.is_file() {
				continue;
			}

			let meta = PackageMeta::load(&meta_path)?;
			if meta.package_name() != id.as_str() {
				ui::debug(&format!(
					"Skipping {}: metadata names {}",
					path.display(),
					meta.package_name()
				));
				continue;
			}

			let newer = match &best {
				Some((version, _)) => compare_versions(&meta.version, version) == Ordering::Greater,
				None => true,
			};
			if newer {
				best = Some((meta.version, path));
			}
		}

		if let Some((version, path)) = best {
			ui::debug(&format!("Found {} {} at {}", id, version, path.display()));
			return Ok(Some(path));
		}

		// Unversioned layout: data sits directly in the package directory
		if package.join(PACKAGE_META).is_file() {
			return Ok(Some(package));
		}

		Ok(None)
	}
}

impl ModelResolver for PackageResolver {
	fn resolve(&self, id: &ModelId) -> Result<PathBuf, ResolveError> {
		for site in &self.search_dirs {
			if let Some(path) = self.find_in(site, id)? {
				return Ok(path);
			}
		}

		Err(ResolveError::NotInstalled {
			id: id.to_string(),
			searched: self
				.search_dirs
				.iter()
				.map(|d| d.display().to_string())
				.collect::<Vec<_>>()
				.join(", "),
		})
	}
}

/// Dotted numeric comparison; non-numeric suffixes ("3.7.1rc1") compare by their leading digits
fn compare_versions(a: &str, b: &str) -> Ordering {
	let parse = |v: &str| -> Vec<u64> {
		v.split('.')
			.map(|part| {
				let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
				digits.parse().unwrap_or(0)
			})
			.collect()
	};

	let (a, b) = (parse(a), parse(b));
	let len = a.len().max(b.len());
	for i in 0..len {
		let ord = a.get(i).unwrap_or(&0).cmp(b.get(i).unwrap_or(&0));
		if ord != Ordering::Equal {
			return ord;
		}
	}
	Ordering::Equal
}
