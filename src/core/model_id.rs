//! Model identifiers

use std::fmt;

use thiserror::Error;

/// Name of an installed model package. Doubles as a directory name under the
/// store root, so it can never escape it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModelId(String);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidModelId {
	#[error("model identifier is empty")]
	Empty,

	#[error("model identifier '{0}' is not a plain directory name")]
	NotAName(String),
}

impl ModelId {
	pub fn new(name: impl Into<String>) -> Result<Self, InvalidModelId> {
		let name = name.into();
		if name.is_empty() {
			return Err(InvalidModelId::Empty);
		}
		if name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
			return Err(InvalidModelId::NotAName(name));
		}
		Ok(Self(name))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for ModelId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::str::FromStr for ModelId {
	type Err = InvalidModelId;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::new(s)
	}
}

impl AsRef<std::path::Path> for ModelId {
	fn as_ref(&self) -> &std::path::Path {
		std::path::Path::new(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_package_names() {
		let id = ModelId::new("xx_ent_wiki_sm").unwrap();
		assert_eq!(id.as_str(), "xx_ent_wiki_sm");
		assert_eq!(id.to_string(), "xx_ent_wiki_sm");
	}

	#[test]
	fn rejects_empty_and_traversal() {
		assert_eq!(ModelId::new(""), Err(InvalidModelId::Empty));
		assert!(ModelId::new("..").is_err());
		assert!(ModelId::new(".").is_err());
		assert!(ModelId::new("a/b").is_err());
		assert!(ModelId::new("a\\b").is_err());
	}
}
