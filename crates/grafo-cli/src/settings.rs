// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Optional JSON settings file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use grafo_core::MstAlgorithm;
use serde::{Deserialize, Serialize};

/// User settings. Missing keys fall back to [`Settings::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Spanning-tree builder used when `mst` is run without `--algorithm`.
    pub algorithm: MstAlgorithm,
    /// `tracing` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            algorithm: MstAlgorithm::Kruskal,
            log_filter: "warn".to_owned(),
        }
    }
}

impl Settings {
    /// Loads settings from `path`, or defaults when no path is given.
    ///
    /// An empty file is treated as absent.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let bytes =
            fs::read(path).with_context(|| format!("reading settings {}", path.display()))?;
        Self::from_slice(&bytes).with_context(|| format!("parsing settings {}", path.display()))
    }

    fn from_slice(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }
}
