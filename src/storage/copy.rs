//! Recursive model tree copy

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::{STAGING_PREFIX, STAGING_SUFFIX};
use crate::core::{CopyError, ModelId};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyStats {
	pub files: u64,
	pub bytes: u64,
}

/// Hidden sibling directory a model is copied into before it is renamed into place
pub fn staging_path(root: &Path, id: &ModelId) -> PathBuf {
	root.join(format!("{}{}{}", STAGING_PREFIX, id, STAGING_SUFFIX))
}

/// Copy every directory and file under `src` into `dest`. Symlinks are
/// followed, so the copy holds the linked content and never points back into
/// the image.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<CopyStats, CopyError> {
	if !src.is_dir() {
		return Err(CopyError::SourceMissing(src.to_path_buf()));
	}

	let mut stats = CopyStats::default();

	for entry in WalkDir::new(src).follow_links(true) {
		let entry = entry.map_err(|e| {
			let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| src.to_path_buf());
			CopyError::io(path, e.into())
		})?;

		let Ok(relative) = entry.path().strip_prefix(src) else {
			continue;
		};
		let target = dest.join(relative);
		let file_type = entry.file_type();

		if file_type.is_dir() {
			fs::create_dir_all(&target).map_err(|e| CopyError::io(&target, e))?;
		} else {
			let bytes = fs::copy(entry.path(), &target).map_err(|e| CopyError::io(entry.path(), e))?;
			stats.files += 1;
			stats.bytes += bytes;
		}
	}

	Ok(stats)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn copies_nested_tree() {
		let src = tempfile::tempdir().unwrap();
		let dest = tempfile::tempdir().unwrap();
		fs::create_dir_all(src.path().join("ner/cfg")).unwrap();
		fs::write(src.path().join("meta.json"), b"{}").unwrap();
		fs::write(src.path().join("ner/model"), b"weights").unwrap();
		fs::write(src.path().join("ner/cfg/moves"), b"").unwrap();

		let out = dest.path().join("copy");
		let stats = copy_tree(src.path(), &out).unwrap();

		assert_eq!(stats.files, 3);
		assert_eq!(stats.bytes, 9);
		assert_eq!(fs::read(out.join("ner/model")).unwrap(), b"weights");
		assert!(out.join("ner/cfg/moves").is_file());
	}

	#[test]
	fn copies_empty_source_as_empty_dir() {
		let src = tempfile::tempdir().unwrap();
		let dest = tempfile::tempdir().unwrap();
		let out = dest.path().join("empty");

		let stats = copy_tree(src.path(), &out).unwrap();
		assert_eq!(stats, CopyStats::default());
		assert!(out.is_dir());
	}

	#[test]
	fn missing_source_is_an_error() {
		let dest = tempfile::tempdir().unwrap();
		let err = copy_tree(&dest.path().join("nope"), &dest.path().join("out")).unwrap_err();
		assert!(matches!(err, CopyError::SourceMissing(_)));
	}

	#[cfg(unix)]
	#[test]
	fn symlinks_are_copied_as_content() {
		use std::os::unix::fs::symlink;

		let outside = tempfile::tempdir().unwrap();
		let shared = outside.path().join("shared");
		fs::create_dir_all(shared.join("lookups")).unwrap();
		fs::write(shared.join("vectors.bin"), b"vectors").unwrap();
		fs::write(shared.join("lookups/lemma"), b"lemma").unwrap();

		let src = outside.path().join("model");
		fs::create_dir(&src).unwrap();
		fs::write(src.join("tokens"), b"tok").unwrap();
		symlink("tokens", src.join("alias")).unwrap();
		symlink(shared.join("vectors.bin"), src.join("vectors.bin")).unwrap();
		symlink("../shared/vectors.bin", src.join("rel.bin")).unwrap();
		symlink("../shared/lookups", src.join("lookups")).unwrap();

		let dest = tempfile::tempdir().unwrap();
		let out = dest.path().join("copy");
		copy_tree(&src, &out).unwrap();
		drop(outside);

		for name in ["alias", "vectors.bin", "rel.bin", "lookups", "lookups/lemma"] {
			assert!(!fs::symlink_metadata(out.join(name)).unwrap().file_type().is_symlink(), "{name} is a link");
		}
		assert_eq!(fs::read(out.join("alias")).unwrap(), b"tok");
		assert_eq!(fs::read(out.join("vectors.bin")).unwrap(), b"vectors");
		assert_eq!(fs::read(out.join("rel.bin")).unwrap(), b"vectors");
		assert_eq!(fs::read(out.join("lookups/lemma")).unwrap(), b"lemma");
	}

	#[cfg(unix)]
	#[test]
	fn dangling_symlink_is_an_error() {
		let src = tempfile::tempdir().unwrap();
		let dest = tempfile::tempdir().unwrap();
		std::os::unix::fs::symlink("missing", src.path().join("broken")).unwrap();

		let err = copy_tree(src.path(), &dest.path().join("copy")).unwrap_err();
		assert!(matches!(err, CopyError::Io { .. }));
	}

	#[test]
	fn staging_dir_is_hidden_sibling() {
		let id = ModelId::new("en_core_web_md").unwrap();
		let path = staging_path(Path::new("/models"), &id);
		assert_eq!(path, PathBuf::from("/models/.en_core_web_md.partial"));
	}
}
