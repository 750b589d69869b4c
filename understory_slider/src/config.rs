// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slider configuration: the value range, step, and thumb/track sizing.
//!
//! [`SliderConfig`] is plain host-owned data. It is validated whenever a
//! [`Slider`](crate::Slider) is built, whenever it is replaced, and on every
//! render pass, so an invalid configuration is rejected for as long as it
//! persists instead of producing wrong snap boundaries.

use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Why a slider configuration was rejected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// One of the numeric fields is NaN or infinite.
    NonFinite,
    /// `min` is not strictly below `max`.
    EmptyRange {
        /// Configured lower bound.
        min: f64,
        /// Configured upper bound.
        max: f64,
    },
    /// The step is zero or negative.
    NonPositiveStep {
        /// Configured step.
        step: f64,
    },
    /// `max / step` is not an integer, so the step does not divide the range.
    StepDoesNotDivide {
        /// Configured upper bound.
        max: f64,
        /// Configured step.
        step: f64,
    },
    /// A track or thumb dimension is negative.
    NegativeSize,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "slider configuration contains a non-finite value"),
            Self::EmptyRange { min, max } => {
                write!(f, "slider range is empty: min {min} is not below max {max}")
            }
            Self::NonPositiveStep { step } => {
                write!(f, "slider step must be positive, got {step}")
            }
            Self::StepDoesNotDivide { max, step } => {
                write!(f, "slider max {max} is not a multiple of step {step}")
            }
            Self::NegativeSize => write!(f, "slider track and thumb sizes must be non-negative"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// A validated value range with its step.
///
/// Invariants: all fields finite, `min < max`, `step > 0`, and `max / step`
/// is an exact integer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderRange {
    min: f64,
    max: f64,
    step: f64,
}

impl SliderRange {
    /// Validates and builds a range.
    ///
    /// ```
    /// use understory_slider::{ConfigError, SliderRange};
    ///
    /// assert!(SliderRange::new(0.0, 100.0, 4.0).is_ok());
    /// assert_eq!(
    ///     SliderRange::new(0.0, 100.0, 3.0),
    ///     Err(ConfigError::StepDoesNotDivide { max: 100.0, step: 3.0 })
    /// );
    /// ```
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        if !(min.is_finite() && max.is_finite() && step.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if min >= max {
            return Err(ConfigError::EmptyRange { min, max });
        }
        if step <= 0.0 {
            return Err(ConfigError::NonPositiveStep { step });
        }
        // Exact check: a step that only nearly divides `max` is still rejected.
        let steps = max / step;
        if steps.round() != steps {
            return Err(ConfigError::StepDoesNotDivide { max, step });
        }
        Ok(Self { min, max, step })
    }

    /// Lower bound of the range.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Step between selectable values.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Width of the range, `max - min`. Always positive.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Fraction of the range covered by `value`, clamped into `[0, 1]`.
    #[must_use]
    pub fn fraction(&self, value: f64) -> f64 {
        ((value - self.min) / self.span()).clamp(0.0, 1.0)
    }
}

/// Host-owned slider properties.
///
/// Sizes are in pixels. The horizontal track margin is
/// `thumb_radius + thumb_padding` so the thumb stays inside the widget at
/// both ends of the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderConfig {
    /// Lowest selectable value.
    pub min: f64,
    /// Highest selectable value.
    pub max: f64,
    /// Value increment; `max / step` must be an integer.
    pub step: f64,
    /// Thickness of the track.
    pub track_size: f64,
    /// Radius of the thumb.
    pub thumb_radius: f64,
    /// Extra space kept around the thumb.
    pub thumb_padding: f64,
    /// When set, new gestures are not started.
    pub disabled: bool,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
            track_size: 4.0,
            thumb_radius: 10.0,
            thumb_padding: 0.0,
            disabled: false,
        }
    }
}

impl SliderConfig {
    /// Sets the value range and step.
    #[must_use]
    pub fn with_range(mut self, min: f64, max: f64, step: f64) -> Self {
        self.min = min;
        self.max = max;
        self.step = step;
        self
    }

    /// Sets the thumb radius and padding.
    #[must_use]
    pub fn with_thumb(mut self, radius: f64, padding: f64) -> Self {
        self.thumb_radius = radius;
        self.thumb_padding = padding;
        self
    }

    /// Sets the track thickness.
    #[must_use]
    pub fn with_track_size(mut self, track_size: f64) -> Self {
        self.track_size = track_size;
        self
    }

    /// Sets the disabled flag.
    #[must_use]
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Checks the configuration and returns its validated range.
    pub fn validate(&self) -> Result<SliderRange, ConfigError> {
        let range = SliderRange::new(self.min, self.max, self.step)?;
        let sizes = [self.track_size, self.thumb_radius, self.thumb_padding];
        if sizes.iter().any(|s| !s.is_finite()) {
            return Err(ConfigError::NonFinite);
        }
        if sizes.iter().any(|s| *s < 0.0) {
            return Err(ConfigError::NegativeSize);
        }
        Ok(range)
    }

    /// Horizontal inset between the widget edge and the start of the track.
    #[must_use]
    pub fn margin_h(&self) -> f64 {
        self.thumb_radius + self.thumb_padding
    }

    /// Vertical inset between the widget edge and the top of the track.
    ///
    /// Non-zero only when the thumb is taller than the track.
    #[must_use]
    pub fn margin_v(&self) -> f64 {
        (self.thumb_radius + self.thumb_padding - self.track_size * 0.5).max(0.0)
    }
}
