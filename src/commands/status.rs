//! Status command - inspect the store without touching it

use anyhow::{bail, Result};
use colored::*;
use std::path::Path;

use crate::core::ModelId;
use crate::storage;
use crate::ui;

pub fn run(root: &Path, ids: &[ModelId], json: bool) -> Result<()> {
	let status = storage::inspect(root, ids);

	if json {
		println!("{}", serde_json::to_string_pretty(&status)?);
	} else {
		ui::header(&format!("Store {}", root.display()));
		for model in &status.models {
			if model.present {
				println!(
					"  {} {} {}",
					"✓".bright_green().bold(),
					model.id,
					format!("{} files, {:.2} MB", model.files, storage::megabytes(model.bytes)).dimmed()
				);
			} else {
				println!("  {} {} {}", "✗".bright_red().bold(), model.id, "missing".dimmed());
			}
		}
		println!();

		if status.masked_by_marker() {
			ui::warn(&format!(
				"Marker {} exists, so --marker-only runs will not repair the missing models",
				status.marker
			));
		}
	}

	let missing = status.missing().count();
	if missing > 0 {
		bail!("{} of {} models missing", missing, status.models.len());
	}

	if !json {
		ui::success("All models present");
	}
	Ok(())
}
