//! Pipeline configuration.
//!
//! Every section has defaults, so a partial JSON document is enough:
//!
//! ```rust
//! use restream::config::{Config, TagRule};
//!
//! let config = Config::from_json_str(r#"{ "source": { "tag_rule": "ordinal" } }"#).unwrap();
//! assert_eq!(config.source.tag_rule, TagRule::Ordinal);
//! assert_eq!(config.source.log_every, 1000);
//! assert_eq!(config.store.chunk_size, 16384);
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{error::Result, store::DEFAULT_CHUNK_SIZE};

/// Separator between a rendered value and its rendered tag on persisted lines.
pub const STANDARD_SEPARATOR: &str = "\t";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StoreConfig {
    /// Root folder of a filesystem store. Namespaces are sub-folders.
    pub base_folder: PathBuf,
    /// Bytes per chunk for streamed writes.
    pub chunk_size: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_folder: PathBuf::from("."),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// How a storage generator tags the items it reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagRule {
    /// `[namespace, key]`
    #[default]
    Source,
    /// `[ordinal]`, counting successfully read items
    Ordinal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SourceConfig {
    /// Log progress every this many items. Zero disables progress logs.
    pub log_every: usize,
    pub tag_rule: TagRule,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            log_every: 1000,
            tag_rule: TagRule::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct SinkConfig {
    pub separator: String,
    /// Append the rendered tag to each line of a tagged sequence.
    pub output_tag: bool,
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self {
            separator: STANDARD_SEPARATOR.to_string(),
            output_tag: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct Config {
    pub store: StoreConfig,
    pub source: SourceConfig,
    pub sink: SinkConfig,
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
