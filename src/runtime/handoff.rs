//! Exec into the main service command

use anyhow::{Context, Result};
use std::process::Command;

use crate::ui;

/// Replace this process with `command` and return the exit code the caller
/// should finish with. An empty `command` runs nothing and yields 0; on unix
/// this only returns on failure.
pub fn handoff(command: &[String]) -> Result<i32> {
	let Some((program, args)) = command.split_first() else {
		ui::debug("No command given, exiting after materialization");
		return Ok(0);
	};

	ui::info(&format!("Starting: {}", command.join(" ")));

	let mut cmd = Command::new(program);
	cmd.args(args);
	run(cmd, program)
}

#[cfg(unix)]
fn run(mut cmd: Command, program: &str) -> Result<i32> {
	use std::os::unix::process::CommandExt;

	let err = cmd.exec();
	Err(err).with_context(|| format!("failed to exec {}", program))
}

#[cfg(not(unix))]
fn run(mut cmd: Command, program: &str) -> Result<i32> {
	let status = cmd
		.status()
		.with_context(|| format!("failed to start {}", program))?;

	status
		.code()
		.with_context(|| format!("{} terminated without an exit code", program))
}
