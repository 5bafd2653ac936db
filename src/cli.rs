use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::PathBuf;

use crate::core::ModelId;

/// How installed models are located inside the image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ResolverKind {
	/// Ask spaCy, through the Python interpreter, where each loaded pipeline lives
	#[default]
	Python,
	/// Look up versioned package directories under --site-packages
	Packages,
}

fn parse_model_id(s: &str) -> Result<ModelId, String> {
	ModelId::new(s.trim()).map_err(|e| e.to_string())
}

fn styles() -> Styles {
	let blue = Some(Color::Ansi(AnsiColor::Blue));
	Styles::styled()
		.header(Style::new().bold().fg_color(blue))
		.usage(Style::new().bold().fg_color(blue))
		.literal(Style::new().fg_color(blue))
		.placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))))
		.valid(Style::new().fg_color(blue))
		.invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))))
}

#[derive(Parser, Debug)]
#[command(
	name = "model-seed",
	author,
	version,
	about = "Copy installed models into a persistent volume, then start the service",
	styles = styles(),
	after_help = format!(
		"{title}
  {bin} {materialize} {materialize_args}  {materialize_desc}
  {bin} {status}      {status_args}                {status_desc}
  {bin} {fetch}       {fetch_args}   {fetch_desc}",
		title = "Examples:".bright_blue().bold(),
		bin = "model-seed".bright_blue(),
		materialize = "materialize".yellow(),
		materialize_args = "-- uvicorn app.main:app",
		materialize_desc = "Seed /models, then exec the API".dimmed(),
		status = "status".yellow(),
		status_args = "--json",
		status_desc = "Show which models are stored".dimmed(),
		fetch = "fetch".yellow(),
		fetch_args = "<URL> /models/lid.176.bin",
		fetch_desc = "Download a model file once".dimmed(),
	),
)]
pub struct Cli {
	/// Enable verbose debug output
	#[arg(short = 'v', long = "verbose", global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

/// Store location and model list shared by materialize and status
#[derive(clap::Args, Debug, Clone)]
pub struct StoreArgs {
	/// Persistent store root (default: $MODELS_DIR or /models)
	#[arg(short = 'd', long = "root", value_name = "DIR")]
	pub root: Option<PathBuf>,

	/// Models to materialize, in order (comma-separated; default: $MODEL_SEED_MODELS or the built-in catalog)
	#[arg(short = 'm', long = "models", value_delimiter = ',', value_parser = parse_model_id)]
	pub models: Vec<ModelId>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Copy missing models into the store, then exec COMMAND
	Materialize {
		#[command(flatten)]
		store: StoreArgs,

		/// Treat the first model's directory as proof that every model is present
		#[arg(long = "marker-only")]
		marker_only: bool,

		/// Resolver used to find installed models
		#[arg(short = 'r', long = "resolver", default_value = "python")]
		resolver: ResolverKind,

		/// Python interpreter for the python resolver (default: $MODEL_SEED_PYTHON or python3)
		#[arg(long = "python", value_name = "PROGRAM")]
		python: Option<String>,

		/// Package directory to search (repeatable; implies --resolver packages)
		#[arg(short = 's', long = "site-packages", value_name = "DIR")]
		site_packages: Vec<PathBuf>,

		/// Main service command to exec after a successful run
		#[arg(last = true, value_name = "COMMAND")]
		command: Vec<String>,
	},

	/// Report which models exist in the store
	Status {
		#[command(flatten)]
		store: StoreArgs,

		/// Print the report as JSON
		#[arg(long = "json")]
		json: bool,
	},

	/// Download a single model file unless it already exists
	Fetch {
		/// Source URL
		url: String,

		/// Destination file
		target: PathBuf,
	},

	/// List the language catalog and default materialization order
	Models,
}
