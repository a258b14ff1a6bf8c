//! TOML configuration for directors.
//!
//! ```toml
//! [policy]
//! min_seats = 1
//! allow_empty_engine = false
//!
//! [sequences.sport]
//! steps = [{ seats = 2 }, { engine = "V12" }, { gps = false }]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::director::{Director, Sequence};
use crate::error::{BuildError, Result};
use crate::validate::AttributePolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorConfig {
    #[serde(default)]
    policy: AttributePolicy,
    #[serde(default)]
    sequences: BTreeMap<String, Sequence>,
}

impl DirectorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| BuildError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            sequences = config.sequences.len(),
            "loaded director config"
        );
        Ok(config)
    }

    pub fn policy(&self) -> &AttributePolicy {
        &self.policy
    }

    /// Built-in sequences plus the configured ones. Configured names win.
    pub fn into_director(self) -> Director {
        self.sequences
            .into_iter()
            .fold(Director::new(), |director, (name, sequence)| {
                director.with_sequence(name, sequence)
            })
    }
}
