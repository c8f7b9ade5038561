//! Inference options.
//!
//! The options are plain serde data so a host can embed them in its own
//! configuration file (for example under an `[inference]` table).

use serde::Deserialize;
use thiserror::Error;

/// Prefix used for fresh type variables when none is configured.
pub const DEFAULT_VAR_PREFIX: &str = "a";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InferOptions {
    /// Fresh type variables are named `<var_prefix><n>`.
    pub var_prefix: String,
}

impl Default for InferOptions {
    fn default() -> Self {
        InferOptions {
            var_prefix: DEFAULT_VAR_PREFIX.to_string(),
        }
    }
}

impl InferOptions {
    pub fn with_var_prefix(prefix: impl Into<String>) -> Self {
        InferOptions {
            var_prefix: prefix.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.var_prefix.is_empty() {
            return Err(ConfigError::EmptyVarPrefix);
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("type variable prefix must not be empty")]
    EmptyVarPrefix,
}
