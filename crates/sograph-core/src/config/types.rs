//! Configuration type definitions

use crate::graph::ReaddPolicy;
use serde::{Deserialize, Serialize};

/// Current config format version
pub const CONFIG_FORMAT_VERSION: u32 = 1;

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Config format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Graph store behavior
    #[serde(default)]
    pub graph: GraphConfig,
}

/// Configuration for graph construction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// What `add <id>` does when the vertex already exists
    #[serde(default)]
    pub readd_policy: ReaddPolicy,

    /// Weight used by `edges <u> <v>` lines that omit one
    #[serde(default)]
    pub default_weight: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_FORMAT_VERSION,
            graph: GraphConfig::default(),
        }
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            readd_policy: ReaddPolicy::default(),
            default_weight: 0.0,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_FORMAT_VERSION
}
