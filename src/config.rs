// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning knobs for the on-disk lookup engine.
//!
//! The defaults were tuned against the stock WordNet 3.x files, where most
//! index lines are well under a hundred bytes and a handful run to several
//! kilobytes. A dataset with a different line-length distribution may want
//! different numbers, hence options rather than constants.
//!
//! Options deserialize from JSON with every field optional:
//!
//! ```json
//! { "line_window": 4096, "search": { "probe_window": 256 } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordNetError};

/// Initial read size for data-file line retrieval.
pub const DEFAULT_LINE_WINDOW: usize = 1024;

/// Initial probe size for the index search.
pub const DEFAULT_PROBE_WINDOW: usize = 127;

/// Probe growth when a window misses a complete line.
pub const DEFAULT_GROWTH_FACTOR: f64 = 1.5;

/// Probe shrink when the remaining span fits in the window.
pub const DEFAULT_SHRINK_FACTOR: f64 = 0.8;

/// Probe size below which the search gives up.
pub const DEFAULT_MIN_WINDOW: usize = 10;

/// Adaptive binary search parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub probe_window: usize,
    pub growth_factor: f64,
    pub shrink_factor: f64,
    pub min_window: usize,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            probe_window: DEFAULT_PROBE_WINDOW,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            shrink_factor: DEFAULT_SHRINK_FACTOR,
            min_window: DEFAULT_MIN_WINDOW,
        }
    }
}

/// Everything the facade needs besides the data directory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupOptions {
    pub line_window: usize,
    pub search: SearchOptions,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            line_window: DEFAULT_LINE_WINDOW,
            search: SearchOptions::default(),
        }
    }
}

impl LookupOptions {
    /// Load from a JSON file; missing fields take their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| WordNetError::io(path, e))?;
        let options: LookupOptions = serde_json::from_str(&text)
            .map_err(|e| WordNetError::config(path, format!("invalid options: {}", e)))?;
        options.validate(path)?;
        Ok(options)
    }

    /// Reject values that would stall or never terminate the search.
    ///
    /// `origin` names where the options came from, for the error message.
    pub fn validate(&self, origin: impl AsRef<Path>) -> Result<()> {
        let origin = origin.as_ref();
        let search = &self.search;
        if self.line_window == 0 {
            return Err(WordNetError::config(origin, "line_window must be positive"));
        }
        if search.min_window == 0 {
            return Err(WordNetError::config(origin, "min_window must be positive"));
        }
        if search.probe_window < search.min_window {
            return Err(WordNetError::config(
                origin,
                format!(
                    "probe_window {} is below min_window {}",
                    search.probe_window, search.min_window
                ),
            ));
        }
        if !(search.growth_factor > 1.0 && search.growth_factor.is_finite()) {
            return Err(WordNetError::config(
                origin,
                format!("growth_factor {} must be greater than 1", search.growth_factor),
            ));
        }
        if !(search.shrink_factor > 0.0 && search.shrink_factor < 1.0) {
            return Err(WordNetError::config(
                origin,
                format!("shrink_factor {} must be in (0, 1)", search.shrink_factor),
            ));
        }
        Ok(())
    }
}
