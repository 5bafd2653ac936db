//! Materialize command - seed the store, then hand off

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::ResolverKind;
use crate::config;
use crate::core::{ensure_models_present, MarkerCheck, ModelId};
use crate::models::{ModelResolver, PackageResolver, PythonResolver};
use crate::runtime;
use crate::ui;

/// Resolver for the CLI selection; any --site-packages dir selects the package resolver
pub fn build_resolver(kind: ResolverKind, site_packages: Vec<PathBuf>) -> Box<dyn ModelResolver> {
	if kind == ResolverKind::Packages || !site_packages.is_empty() {
		ui::debug(&format!("Resolving models from {} package dirs", site_packages.len()));
		Box::new(PackageResolver::new(site_packages))
	} else {
		Box::new(PythonResolver::new(config::python()))
	}
}

pub fn run(
	root: &Path,
	ids: &[ModelId],
	resolver: &dyn ModelResolver,
	marker: MarkerCheck,
	command: &[String],
) -> Result<i32> {
	let start = Instant::now();

	ui::info(&format!("Store: {} ({} models)", root.display(), ids.len()));

	let report = ensure_models_present(root, ids, resolver, marker)?;

	if report.marker_hit {
		ui::success("Models already materialized");
	} else if report.wrote_anything() {
		ui::success(&format!(
			"Materialized {} models in {:.1}s ({} already present)",
			report.copied.len(),
			start.elapsed().as_secs_f32(),
			report.skipped.len()
		));
	} else {
		ui::success(&format!("All {} models already present", report.skipped.len()));
	}

	runtime::handoff(command)
}
