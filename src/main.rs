//! model-seed - container entrypoint
//!
//! Seeds a persistent volume with installed model packages on first start,
//! then execs into the main service command.

use anyhow::{bail, Result};
use clap::Parser;

use model_seed::cli::{Cli, Command, StoreArgs};
use model_seed::commands;
use model_seed::config;
use model_seed::core::{MarkerCheck, MaterializeError, ModelId};
use model_seed::ui::{self, Log};

fn main() {
	let cli = Cli::parse();

	Log::set_verbose(cli.verbose);

	match run(cli.command) {
		Ok(0) => {}
		Ok(code) => std::process::exit(code),
		Err(e) => {
			if !already_logged(&e) {
				ui::error(&format!("{:#}", e));
			}
			std::process::exit(1);
		}
	}
}

/// The materializer logs a failing model itself before returning the error
fn already_logged(e: &anyhow::Error) -> bool {
	e.downcast_ref::<MaterializeError>()
		.is_some_and(|e| e.model().is_some())
}

fn run(command: Command) -> Result<i32> {
	match command {
		Command::Materialize {
			store,
			marker_only,
			resolver,
			python,
			site_packages,
			command,
		} => {
			if let Some(python) = python {
				config::set_python(python);
			}
			let ids = apply_store(store)?;
			let root = config::store_root();
			let resolver = commands::materialize::build_resolver(resolver, site_packages);
			let marker = if marker_only { MarkerCheck::FirstModel } else { MarkerCheck::EveryModel };

			print_header();
			commands::materialize::run(&root, &ids, resolver.as_ref(), marker, &command)
		}
		Command::Status { store, json } => {
			let ids = apply_store(store)?;
			commands::status::run(&config::store_root(), &ids, json)?;
			Ok(0)
		}
		Command::Fetch { url, target } => {
			print_header();
			commands::fetch::run(&url, &target)?;
			Ok(0)
		}
		Command::Models => {
			commands::models::run();
			Ok(0)
		}
	}
}

/// Push CLI overrides into config and return the effective model list
fn apply_store(store: StoreArgs) -> Result<Vec<ModelId>> {
	if let Some(root) = store.root {
		config::set_root(root);
	}
	if !store.models.is_empty() {
		config::set_models(store.models);
	}
	let ids = config::model_ids()?;
	if ids.is_empty() {
		bail!("no models configured (check --models and ${})", config::MODELS_ENV);
	}
	Ok(ids)
}

fn print_header() {
	ui::header(&format!("model-seed v{}", env!("CARGO_PKG_VERSION")));
}
