//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::core::{InvalidModelId, ModelId};

static CUSTOM_ROOT: OnceLock<PathBuf> = OnceLock::new();
static CUSTOM_MODELS: OnceLock<Vec<ModelId>> = OnceLock::new();
static CUSTOM_PYTHON: OnceLock<String> = OnceLock::new();

// === Environment ===
pub const ROOT_ENV: &str = "MODELS_DIR";
pub const MODELS_ENV: &str = "MODEL_SEED_MODELS";
pub const PYTHON_ENV: &str = "MODEL_SEED_PYTHON";

// === Defaults ===
pub const DEFAULT_ROOT: &str = "/models";
pub const DEFAULT_PYTHON: &str = "python3";

// === Storage ===
pub const STAGING_PREFIX: &str = ".";
pub const STAGING_SUFFIX: &str = ".partial";
pub const PACKAGE_META: &str = "meta.json";

/// Language code -> installed model package. `ar` and `ms` have no dedicated
/// NER pipeline and share the multilingual one.
pub const LANGUAGE_MODELS: &[(&str, &str)] = &[
    ("en", "en_core_web_md"),
    ("fr", "fr_core_news_md"),
    ("de", "de_core_news_md"),
    ("nl", "nl_core_news_md"),
    ("ru", "ru_core_news_md"),
    ("ar", "xx_ent_wiki_sm"),
    ("ms", "xx_ent_wiki_sm"),
];

pub fn set_root(path: PathBuf) {
    let _ = CUSTOM_ROOT.set(path);
}

pub fn set_models(models: Vec<ModelId>) {
    let _ = CUSTOM_MODELS.set(models);
}

pub fn set_python(interpreter: String) {
    let _ = CUSTOM_PYTHON.set(interpreter);
}

/// Persistent store root (--root, then MODELS_DIR, then /models)
pub fn store_root() -> PathBuf {
    if let Some(custom) = CUSTOM_ROOT.get() {
        crate::ui::debug(&format!("Using custom store root: {}", custom.display()));
        return custom.clone();
    }

    if let Ok(env_path) = std::env::var(ROOT_ENV) {
        if !env_path.trim().is_empty() {
            crate::ui::debug(&format!("Using {}: {}", ROOT_ENV, env_path));
            return PathBuf::from(env_path);
        }
    }

    PathBuf::from(DEFAULT_ROOT)
}

/// Models to materialize, in order (--models, then MODEL_SEED_MODELS, then the catalog)
pub fn model_ids() -> Result<Vec<ModelId>, InvalidModelId> {
    if let Some(custom) = CUSTOM_MODELS.get() {
        return Ok(custom.clone());
    }

    if let Ok(list) = std::env::var(MODELS_ENV) {
        if !list.trim().is_empty() {
            crate::ui::debug(&format!("Using {}: {}", MODELS_ENV, list));
            return parse_model_list(&list);
        }
    }

    Ok(default_model_ids())
}

pub fn python() -> String {
    if let Some(custom) = CUSTOM_PYTHON.get() {
        return custom.clone();
    }
    std::env::var(PYTHON_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string())
}

/// Distinct catalog models in first-seen order
pub fn default_model_ids() -> Vec<ModelId> {
    let mut ids: Vec<ModelId> = Vec::new();
    for (_, name) in LANGUAGE_MODELS {
        if ids.iter().any(|id| id.as_str() == *name) {
            continue;
        }
        if let Ok(id) = ModelId::new(*name) {
            ids.push(id);
        }
    }
    ids
}

pub fn parse_model_list(list: &str) -> Result<Vec<ModelId>, InvalidModelId> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ModelId::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_list_has_six_models_in_catalog_order() {
        let ids: Vec<String> = default_model_ids().iter().map(|id| id.to_string()).collect();
        assert_eq!(
            ids,
            [
                "en_core_web_md",
                "fr_core_news_md",
                "de_core_news_md",
                "nl_core_news_md",
                "ru_core_news_md",
                "xx_ent_wiki_sm",
            ]
        );
    }

    #[test]
    fn model_list_skips_blanks() {
        let ids = parse_model_list(" en_core_web_md, ,fr_core_news_md,").unwrap();
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[1].as_str(), "fr_core_news_md");
    }

    #[test]
    fn model_list_rejects_paths() {
        assert!(parse_model_list("en_core_web_md,../etc").is_err());
    }
}
