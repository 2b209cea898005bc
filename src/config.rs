use crate::animation::DEFAULT_MAX_STEPS;
use crate::error::Result;
use crate::interpolation::{DEFAULT_NUM_POINTS, DEFAULT_RANGE_PADDING};
use serde::{Deserialize, Serialize};

/// Sampling parameters used when a full report is assembled.
///
/// Every field is optional in JSON; missing fields take the defaults below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Samples per evaluated range (default 100).
    pub num_points: usize,
    /// Upper bound on animation frames (default 50).
    pub max_steps: usize,
    /// Padding added on both sides of the node span for the default range (default 1.0).
    ///
    /// Only the report's evaluation range uses it. Animation frames always sample the
    /// span padded by the fixed [`DEFAULT_RANGE_PADDING`].
    pub range_padding: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            num_points: DEFAULT_NUM_POINTS,
            max_steps: DEFAULT_MAX_STEPS,
            range_padding: DEFAULT_RANGE_PADDING,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}
