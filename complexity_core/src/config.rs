//! Demo configuration
//!
//! A single sequence length drives both demo units. Values come from a TOML
//! file, with anything missing falling back to the defaults below.

use crate::error::{ComplexityError, ComplexityResult};
use crate::sequence::Element;
use crate::space_demo::DEFAULT_SAMPLE_LEN;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sequence length used when nothing else is configured
pub const DEFAULT_N: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Length of the base sequence `[0, 1, ..., n-1]`
    pub n: usize,

    /// How many leading elements the space report keeps
    pub sample_len: usize,

    /// Target for both binary searches, `n - 1` when unset
    pub search_target: Option<Element>,

    /// Repetitions per timed operation
    pub runs: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            sample_len: DEFAULT_SAMPLE_LEN,
            search_target: None,
            runs: 1,
        }
    }
}

impl DemoConfig {
    /// Config with a given sequence length and defaults elsewhere
    pub fn with_n(n: usize) -> Self {
        Self {
            n,
            ..Self::default()
        }
    }

    /// Load config from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> ComplexityResult<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| ComplexityError::ConfigRead {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_toml(&contents)
    }

    /// Parse config from a TOML string
    pub fn from_toml(contents: &str) -> ComplexityResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Check the preconditions the demos rely on
    pub fn validate(&self) -> ComplexityResult<()> {
        if self.n == 0 {
            return Err(ComplexityError::InvalidSize(self.n));
        }
        if self.runs == 0 {
            return Err(ComplexityError::InvalidRuns);
        }
        Ok(())
    }

    /// Binary search target: configured value or the last element
    pub fn target(&self) -> Element {
        self.search_target
            .unwrap_or_else(|| self.n.saturating_sub(1) as Element)
    }
}
