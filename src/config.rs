// SPDX-License-Identifier: MPL-2.0
//! Serializable slider configuration.
//!
//! Host applications that persist their settings can embed
//! [`SliderConfig`] in their own configuration files; the crate itself
//! never touches the filesystem. Values are validated when converted
//! into the domain types, so a hand-edited file cannot smuggle a
//! degenerate range past construction.
//!
//! # Examples
//!
//! ```
//! use center_origin_slider::config::SliderConfig;
//!
//! let config = SliderConfig {
//!     lower: -2.0,
//!     upper: 2.0,
//!     increment: Some(0.5),
//! };
//! let range = config.range().unwrap();
//! assert_eq!(range.center(), 0.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::range::{Increment, SliderRange};
use crate::error::Result;

/// Default lower bound.
pub const DEFAULT_LOWER: f32 = -1.0;
/// Default upper bound.
pub const DEFAULT_UPPER: f32 = 1.0;

/// Plain serializable form of a slider's value configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Lower bound of the range.
    pub lower: f32,
    /// Upper bound of the range.
    pub upper: f32,
    /// Step size; absent means the value varies continuously.
    #[serde(default)]
    pub increment: Option<f32>,
}

impl SliderConfig {
    /// Builds the validated range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DegenerateRange`] for unusable bounds.
    pub fn range(&self) -> Result<SliderRange> {
        SliderRange::new(self.lower, self.upper)
    }

    /// Builds the validated increment.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidIncrement`] for a non-positive
    /// or non-finite step.
    pub fn increment(&self) -> Result<Increment> {
        match self.increment {
            None => Ok(Increment::CONTINUOUS),
            Some(step) => Increment::stepped(step),
        }
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            lower: DEFAULT_LOWER,
            upper: DEFAULT_UPPER,
            increment: None,
        }
    }
}

impl From<SliderRange> for SliderConfig {
    fn from(range: SliderRange) -> Self {
        Self {
            lower: range.lower(),
            upper: range.upper(),
            increment: None,
        }
    }
}
