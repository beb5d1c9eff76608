//! Server configuration.
//!
//! Loaded from a TOML file when one is given, otherwise defaults apply.
//! CLI flags override file values (see `bin/cli.rs`).

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Runtime configuration for the Cinegraph server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Socket address the HTTP endpoint binds to.
    pub bind: SocketAddr,

    /// Path of the JSON snapshot file. `None` runs fully in-memory.
    pub data: Option<PathBuf>,

    /// Whether GET /graphql serves the interactive playground.
    pub playground: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: ([127, 0, 0, 1], 3005).into(),
            data: None,
            playground: true,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
