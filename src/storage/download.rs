//! Single-file model download

use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui;

pub enum Fetched {
	AlreadyPresent(u64),
	Downloaded(u64),
}

/// Size in MB for log lines
pub fn megabytes(bytes: u64) -> f64 {
	bytes as f64 / (1024.0 * 1024.0)
}

fn part_path(target: &Path) -> PathBuf {
	let mut name = target.file_name().map(|n| n.to_os_string()).unwrap_or_default();
	name.push(".part");
	target.with_file_name(name)
}

/// Download `url` to `target` unless it already exists
pub fn fetch(url: &str, target: &Path) -> Result<Fetched> {
	if target.is_file() {
		let size = fs::metadata(target)
			.with_context(|| format!("failed to stat {}", target.display()))?
			.len();
		return Ok(Fetched::AlreadyPresent(size));
	}

	if let Some(parent) = target.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)
				.with_context(|| format!("failed to create directory {}", parent.display()))?;
		}
	}

	ui::debug(&format!("Download URL: {}", url));

	let response = ureq::get(url)
		.set("User-Agent", concat!("model-seed/", env!("CARGO_PKG_VERSION")))
		.call()
		.with_context(|| format!("failed to fetch {}", url))?;

	if response.status() != 200 {
		return Err(anyhow!("{} returned status {}", url, response.status()));
	}

	let part = part_path(target);
	let mut file = fs::File::create(&part)
		.with_context(|| format!("failed to create file {}", part.display()))?;

	let written = match std::io::copy(&mut response.into_reader(), &mut file) {
		Ok(n) => n,
		Err(e) => {
			let _ = fs::remove_file(&part);
			return Err(e).with_context(|| format!("failed to write file {}", part.display()));
		}
	};
	drop(file);

	if let Err(e) = fs::rename(&part, target) {
		let _ = fs::remove_file(&part);
		return Err(e).with_context(|| format!("failed to move {} into place", part.display()));
	}

	Ok(Fetched::Downloaded(written))
}
