//! Core configuration for skelmix-core.

use serde::{Deserialize, Serialize};

use crate::error::{AnimationError, Result};

/// Subdivision count used by bezier curves when none is given.
pub const DEFAULT_BEZIER_SEGMENTS: usize = 10;

/// Upper bound on bezier subdivisions; each evaluation walks all of them.
pub const MAX_BEZIER_SEGMENTS: usize = 1000;

/// Configuration applied when timelines are constructed.
/// Keep this minimal; expand as needed without breaking API.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of uniform subdivisions sampled by each bezier curve segment.
    /// Higher values reduce the approximation error at the cost of a longer
    /// forward-difference walk per evaluation.
    pub bezier_segments: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bezier_segments: DEFAULT_BEZIER_SEGMENTS,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if !(2..=MAX_BEZIER_SEGMENTS).contains(&self.bezier_segments) {
            return Err(AnimationError::InvalidConfig(format!(
                "bezier_segments must be between 2 and {MAX_BEZIER_SEGMENTS}, got {}",
                self.bezier_segments
            )));
        }
        Ok(())
    }
}
