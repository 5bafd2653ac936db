//! Fetch command - one-off model file download

use anyhow::Result;
use std::path::Path;

use crate::storage::{self, Fetched};
use crate::ui;

pub fn run(url: &str, target: &Path) -> Result<()> {
	if !target.exists() {
		ui::info(&format!("Downloading model from {}...", url));
		ui::info(&format!("This will be saved to {}", target.display()));
	}

	match storage::fetch(url, target)? {
		Fetched::AlreadyPresent(size) => {
			ui::info(&format!("Model already exists at {}", target.display()));
			ui::info(&format!("Model size: {:.2} MB", storage::megabytes(size)));
		}
		Fetched::Downloaded(size) => {
			ui::success(&format!("Model downloaded successfully! Size: {:.2} MB", storage::megabytes(size)));
		}
	}

	Ok(())
}
