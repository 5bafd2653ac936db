//! Models command - show the built-in catalog

use colored::*;

use crate::config::{self, LANGUAGE_MODELS};
use crate::ui;

pub fn run() {
	ui::header("Languages");
	for (lang, model) in LANGUAGE_MODELS {
		println!("  {} {}", format!("{:<3}", lang).yellow(), model);
	}

	ui::header("Materialization order");
	for (i, id) in config::default_model_ids().iter().enumerate() {
		let marker = if i == 0 { " (marker)".dimmed() } else { "".normal() };
		println!("  {} {}{}", format!("{}.", i + 1).bright_blue(), id, marker);
	}
	println!();
}
