//! Configuration loading and merging.
//!
//! Configuration can only add deny rules and switch on the audit log. It
//! never disables a built-in detector or widens the temp-directory
//! allow-list.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Env var overriding the user config location.
pub const CONFIG_ENV_VAR: &str = "GIT_SAFETY_GUARD_CONFIG";

/// Project config file name, looked up in the hook's working directory.
pub const PROJECT_CONFIG_FILE: &str = ".git-safety-guard.toml";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid regex pattern '{pattern}': {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Extra deny rules, checked after the built-in detectors.
    pub deny: Vec<DenyRule>,

    /// Audit logging settings.
    pub audit: AuditConfig,
}

/// A configured deny rule, matched case-insensitively against each candidate.
#[derive(Debug, Clone, Deserialize)]
pub struct DenyRule {
    /// Rule identifier reported in the audit log.
    #[serde(default)]
    pub name: Option<String>,
    /// Regex pattern to match against the command.
    pub pattern: String,
    /// Human-readable reason for blocking.
    pub reason: String,
}

/// Audit logging configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    /// Enable audit logging.
    pub enabled: bool,
    /// Path to audit log file.
    pub path: Option<String>,
}

/// A deny rule with its compiled regex.
#[derive(Debug, Clone)]
pub struct CompiledDenyRule {
    pub rule: DenyRule,
    pub regex: Regex,
}

/// Compiled configuration with pre-built regexes.
#[derive(Debug, Clone, Default)]
pub struct CompiledConfig {
    /// The raw config.
    pub raw: Config,
    /// Compiled deny rules, in file order.
    pub deny_rules: Vec<CompiledDenyRule>,
}

impl Config {
    /// Load configuration, merging user and project configs.
    pub fn load(cwd: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(path) = Self::user_config_path() {
            if let Some(user_config) = Self::load_file(&path)? {
                config = user_config;
            }
        }

        if let Some(cwd) = cwd {
            if let Some(project_config) = Self::load_file(&cwd.join(PROJECT_CONFIG_FILE))? {
                config.merge(project_config);
            }
        }

        Ok(config)
    }

    /// Parse a config file; a missing file is not an error.
    fn load_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)?;
        Ok(Some(Self::parse(&content)?))
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Get user config path.
    /// Respects GIT_SAFETY_GUARD_CONFIG for testing.
    fn user_config_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|h| h.join(".claude/git-safety-guard.toml"))
    }

    /// Merge another config into this one (other takes precedence for scalars).
    fn merge(&mut self, other: Config) {
        self.deny.extend(other.deny);

        if other.audit.enabled {
            self.audit.enabled = true;
            if other.audit.path.is_some() {
                self.audit.path = other.audit.path;
            }
        }
    }

    /// Compile all regex patterns for faster matching.
    pub fn compile(self) -> Result<CompiledConfig, ConfigError> {
        let deny_rules = self
            .deny
            .iter()
            .map(|rule| {
                let regex = RegexBuilder::new(&rule.pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| ConfigError::Regex {
                        pattern: rule.pattern.clone(),
                        source: e,
                    })?;
                Ok(CompiledDenyRule {
                    rule: rule.clone(),
                    regex,
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(CompiledConfig {
            raw: self,
            deny_rules,
        })
    }
}

impl CompiledConfig {
    /// Audit log path, if auditing is switched on.
    pub fn audit_path(&self) -> Option<&Path> {
        if !self.raw.audit.enabled {
            return None;
        }
        self.raw.audit.path.as_deref().map(Path::new)
    }
}
