//! Exam variant configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use exambank_core::session::ExamVariant;

/// Top-level exambank configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExambankConfig {
    /// Exam variants keyed by name.
    #[serde(default)]
    pub exams: BTreeMap<String, ExamVariant>,
    /// Variant used when none is named on the command line.
    #[serde(default)]
    pub default_exam: Option<String>,
}

impl ExambankConfig {
    /// Resolve a variant by name, falling back to `default_exam`.
    ///
    /// The returned variant's `name` is always the key it was found under.
    pub fn variant(&self, name: Option<&str>) -> Result<ExamVariant> {
        let name = match name.or(self.default_exam.as_deref()) {
            Some(n) => n,
            None => anyhow::bail!("no exam named and no default_exam configured"),
        };

        let mut variant = self.exams.get(name).cloned().with_context(|| {
            format!(
                "exam '{}' not found in config. Available: {:?}",
                name,
                self.exams.keys().collect::<Vec<_>>()
            )
        })?;
        variant.name = name.to_string();
        Ok(variant)
    }

    /// All variants, with names filled in.
    pub fn variants(&self) -> Vec<ExamVariant> {
        self.exams
            .iter()
            .map(|(name, v)| ExamVariant {
                name: name.clone(),
                ..v.clone()
            })
            .collect()
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
///
/// Substituted values are inserted verbatim and never expanded again.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    let mut from = 0;
    while let Some(offset) = result[from..].find("${") {
        let start = from + offset;
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
            from = start + value.len();
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `exambank.toml` in the current directory
/// 2. `~/.config/exambank/config.toml`
///
/// Environment variable override: `EXAMBANK_SAMPLE_SIZE`.
pub fn load_config() -> Result<ExambankConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ExambankConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("exambank.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExambankConfig::default(),
    };

    if let Ok(size) = std::env::var("EXAMBANK_SAMPLE_SIZE") {
        let size: usize = size
            .trim()
            .parse()
            .with_context(|| format!("invalid EXAMBANK_SAMPLE_SIZE: '{size}'"))?;
        for variant in config.exams.values_mut() {
            variant.sample_size = size;
        }
    }

    Ok(config)
}

/// Parse a TOML string into a config, resolving `${VAR}` in bank sources.
pub fn parse_config_str(content: &str) -> Result<ExambankConfig> {
    let mut config: ExambankConfig = toml::from_str(content)?;
    for variant in config.exams.values_mut() {
        variant.source = resolve_env_vars(&variant.source);
    }
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("exambank"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
default_exam = "foundation"

[exams.foundation]
source = "banks/foundation.json"
sample_size = 10

[exams.acceptance]
source = "${_EXAMBANK_TEST_HOST}/data/acceptance.json"
sample_size = 5
show_examples = false

[exams.acceptance.labels]
title = "Acceptance Testing Practice"
show_answer = "Reveal"
"#;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_EXAMBANK_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_EXAMBANK_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_EXAMBANK_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        assert_eq!(resolve_env_vars("no vars here"), "no vars here");
        std::env::remove_var("_EXAMBANK_TEST_VAR");
    }

    #[test]
    fn resolve_env_vars_does_not_expand_values() {
        std::env::set_var("_EXAMBANK_TEST_SELF", "x${_EXAMBANK_TEST_SELF}");
        std::env::set_var("_EXAMBANK_TEST_PING", "${_EXAMBANK_TEST_PONG}");
        std::env::set_var("_EXAMBANK_TEST_PONG", "${_EXAMBANK_TEST_PING}");

        assert_eq!(
            resolve_env_vars("${_EXAMBANK_TEST_SELF}/bank.json"),
            "x${_EXAMBANK_TEST_SELF}/bank.json"
        );
        assert_eq!(
            resolve_env_vars("${_EXAMBANK_TEST_PING}-${_EXAMBANK_TEST_PONG}"),
            "${_EXAMBANK_TEST_PONG}-${_EXAMBANK_TEST_PING}"
        );

        std::env::remove_var("_EXAMBANK_TEST_SELF");
        std::env::remove_var("_EXAMBANK_TEST_PING");
        std::env::remove_var("_EXAMBANK_TEST_PONG");
    }

    #[test]
    fn resolve_env_vars_unset_and_unclosed() {
        std::env::remove_var("_EXAMBANK_TEST_UNSET");
        assert_eq!(resolve_env_vars("a${_EXAMBANK_TEST_UNSET}b"), "ab");
        assert_eq!(resolve_env_vars("host/${OPEN"), "host/${OPEN");
    }

    #[test]
    fn parse_variants() {
        std::env::set_var("_EXAMBANK_TEST_HOST", "https://cv.example.com");
        let config = parse_config_str(SAMPLE).unwrap();
        std::env::remove_var("_EXAMBANK_TEST_HOST");

        assert_eq!(config.exams.len(), 2);
        let acceptance = config.variant(Some("acceptance")).unwrap();
        assert_eq!(acceptance.name, "acceptance");
        assert_eq!(
            acceptance.source,
            "https://cv.example.com/data/acceptance.json"
        );
        assert_eq!(acceptance.sample_size, 5);
        assert!(!acceptance.show_examples);
        assert_eq!(acceptance.labels.show_answer, "Reveal");
        assert_eq!(acceptance.labels.show_tip, "Show tip");
    }

    #[test]
    fn default_exam_fallback() {
        let config = parse_config_str(SAMPLE).unwrap();
        let variant = config.variant(None).unwrap();
        assert_eq!(variant.name, "foundation");
        assert!(variant.show_examples);
    }

    #[test]
    fn unknown_exam() {
        let config = parse_config_str(SAMPLE).unwrap();
        let err = config.variant(Some("advanced")).unwrap_err();
        assert!(err.to_string().contains("not found"));

        let empty = ExambankConfig::default();
        assert!(empty.variant(None).is_err());
    }

    #[test]
    fn negative_sample_size_is_rejected() {
        let toml_str = r#"
[exams.bad]
source = "bank.json"
sample_size = -3
"#;
        assert!(parse_config_str(toml_str).is_err());
    }

    #[test]
    fn variants_carry_names() {
        let config = parse_config_str(SAMPLE).unwrap();
        let names: Vec<String> = config.variants().into_iter().map(|v| v.name).collect();
        assert_eq!(names, vec!["acceptance", "foundation"]);
    }

    #[test]
    fn explicit_missing_path() {
        let err = load_config_from(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn explicit_path_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exambank.toml");
        std::fs::write(&path, "[exams.x]\nsource = \"x.json\"\n").unwrap();
        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.variant(Some("x")).unwrap().source, "x.json");
    }
}
