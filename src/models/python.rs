//! Resolve models by asking spaCy where a loaded pipeline lives

use std::path::PathBuf;
use std::process::Command;

use super::ModelResolver;
use crate::core::{ModelId, ResolveError};
use crate::ui;

const LOAD_SCRIPT: &str = "import sys, spacy; print(spacy.load(sys.argv[1]).path)";

pub struct PythonResolver {
	program: String,
}

impl PythonResolver {
	pub fn new(program: impl Into<String>) -> Self {
		Self { program: program.into() }
	}
}

impl ModelResolver for PythonResolver {
	fn resolve(&self, id: &ModelId) -> Result<PathBuf, ResolveError> {
		ui::debug(&format!("Resolving {} with {}", id, self.program));

		let output = Command::new(&self.program)
			.args(["-c", LOAD_SCRIPT, id.as_str()])
			.output()
			.map_err(|source| ResolveError::Interpreter {
				program: self.program.clone(),
				source,
			})?;

		if !output.status.success() {
			return Err(ResolveError::Failed {
				id: id.to_string(),
				status: output.status.to_string(),
				stderr: last_line(&String::from_utf8_lossy(&output.stderr)).to_string(),
			});
		}

		let stdout = String::from_utf8_lossy(&output.stdout);
		let path = PathBuf::from(last_line(&stdout));

		if path.as_os_str().is_empty() || !path.is_dir() {
			return Err(ResolveError::InvalidPath { id: id.to_string(), path });
		}

		Ok(path)
	}
}

/// Last non-blank line; library warnings may precede the printed path
fn last_line(text: &str) -> &str {
	text.lines().rev().map(str::trim).find(|l| !l.is_empty()).unwrap_or("")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn last_line_skips_trailing_blanks() {
		assert_eq!(last_line("warning\n/opt/model\n\n"), "/opt/model");
		assert_eq!(last_line(""), "");
	}

	#[test]
	fn missing_interpreter_is_reported() {
		let resolver = PythonResolver::new("model-seed-no-such-python");
		let id = ModelId::new("en_core_web_md").unwrap();
		let err = resolver.resolve(&id).unwrap_err();
		assert!(matches!(err, ResolveError::Interpreter { .. }));
	}

	#[cfg(unix)]
	#[test]
	fn printed_path_is_returned() {
		let dir = tempfile::tempdir().unwrap();
		let script = dir.path().join("fake-python");
		let model = dir.path().join("model");
		std::fs::create_dir(&model).unwrap();
		std::fs::write(&script, format!("#!/bin/sh\necho loading >&1\necho {}\n", model.display())).unwrap();
		make_executable(&script);

		let resolver = PythonResolver::new(script.to_string_lossy());
		let path = resolver.resolve(&ModelId::new("en_core_web_md").unwrap()).unwrap();
		assert_eq!(path, model);
	}

	#[cfg(unix)]
	#[test]
	fn failing_load_carries_stderr() {
		let dir = tempfile::tempdir().unwrap();
		let script = dir.path().join("fake-python");
		std::fs::write(&script, "#!/bin/sh\necho \"OSError: [E050] Can't find model\" >&2\nexit 1\n").unwrap();
		make_executable(&script);

		let resolver = PythonResolver::new(script.to_string_lossy());
		let err = resolver.resolve(&ModelId::new("fr_core_news_md").unwrap()).unwrap_err();
		match err {
			ResolveError::Failed { id, stderr, .. } => {
				assert_eq!(id, "fr_core_news_md");
				assert!(stderr.contains("E050"));
			}
			other => panic!("unexpected error: {other}"),
		}
	}

	#[cfg(unix)]
	fn make_executable(path: &std::path::Path) {
		use std::os::unix::fs::PermissionsExt;
		std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
	}
}
