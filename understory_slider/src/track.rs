// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track geometry, pixel/value mapping, and step snapping.
//!
//! Three coordinate spaces meet here:
//!
//! - **pointer space**: absolute offsets along the widget's horizontal axis,
//!   as delivered by the gesture source;
//! - **track space**: pixels from the start of the track, in
//!   `[0, length]`, obtained by removing the horizontal margin;
//! - **value space**: logical values in `[min, max]`.
//!
//! Mapping between track space and value space is only defined once the track
//! has been measured. [`TrackMapping`] can only be built for a measured track,
//! so an unmeasured track turns every mapping into a no-op at the call site.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`
use kurbo::{Point, Rect};

use crate::config::{SliderConfig, SliderRange};

/// Measured size of the track plus the insets around it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrackGeometry {
    length: f64,
    margin_h: f64,
    margin_v: f64,
}

impl TrackGeometry {
    /// Creates an unmeasured track with the margins implied by `config`.
    #[must_use]
    pub fn from_config(config: &SliderConfig) -> Self {
        Self {
            length: 0.0,
            margin_h: config.margin_h(),
            margin_v: config.margin_v(),
        }
    }

    /// Track length in pixels; `0.0` until the first layout measurement.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Horizontal inset of the track inside the widget.
    #[must_use]
    pub fn margin_h(&self) -> f64 {
        self.margin_h
    }

    /// Vertical inset of the track inside the widget.
    #[must_use]
    pub fn margin_v(&self) -> f64 {
        self.margin_v
    }

    /// Returns `true` once a non-zero length has been measured.
    #[must_use]
    pub fn is_measured(&self) -> bool {
        self.length > 0.0
    }

    /// Stores a new length, returning `true` if it differs from the old one.
    ///
    /// Negative and non-finite lengths are stored as `0.0`.
    pub fn set_length(&mut self, length: f64) -> bool {
        let length = if length.is_finite() {
            length.max(0.0)
        } else {
            0.0
        };
        if length == self.length {
            return false;
        }
        self.length = length;
        true
    }

    pub(crate) fn set_margins(&mut self, config: &SliderConfig) {
        self.margin_h = config.margin_h();
        self.margin_v = config.margin_v();
    }

    /// Converts an absolute pointer offset into a track-relative position
    /// clamped to `[0, length]`.
    #[must_use]
    pub fn touch_position(&self, pointer: f64) -> f64 {
        (pointer - self.margin_h).clamp(0.0, self.length)
    }

    /// Rectangle occupied by the track, in widget coordinates.
    #[must_use]
    pub fn track_rect(&self, track_size: f64) -> Rect {
        Rect::new(
            self.margin_h,
            self.margin_v,
            self.margin_h + self.length,
            self.margin_v + track_size,
        )
    }

    /// Centre of the thumb when it sits at `offset` pixels along the track.
    #[must_use]
    pub fn thumb_center(&self, offset: f64, track_size: f64) -> Point {
        Point::new(
            self.margin_h + offset,
            self.margin_v + track_size * 0.5,
        )
    }
}

/// Bidirectional mapping between track pixels and values for a measured track.
///
/// ```
/// use understory_slider::{SliderRange, TrackMapping};
///
/// let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
/// let mapping = TrackMapping::new(range, 200.0).unwrap();
/// assert_eq!(mapping.value_to_pixel(25.0), 50.0);
/// assert_eq!(mapping.pixel_to_value(50.0), 25.0);
///
/// // No mapping exists before the track is measured.
/// assert!(TrackMapping::new(range, 0.0).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackMapping {
    range: SliderRange,
    length: f64,
}

impl TrackMapping {
    /// Builds a mapping, or `None` when `length` is not positive.
    #[must_use]
    pub fn new(range: SliderRange, length: f64) -> Option<Self> {
        (length > 0.0 && length.is_finite()).then_some(Self { range, length })
    }

    /// The value range being mapped.
    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    /// Track length in pixels.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `(v - min) * length / (max - min)`
    #[must_use]
    pub fn value_to_pixel(&self, value: f64) -> f64 {
        (value - self.range.min()) * self.length / self.range.span()
    }

    /// `x * (max - min) / length + min`
    #[must_use]
    pub fn pixel_to_value(&self, x: f64) -> f64 {
        x * self.range.span() / self.length + self.range.min()
    }

    /// Width of one step in pixels: `value_to_pixel(max) / (max - min) * step`.
    ///
    /// This multiplies by `step`. Dividing by it instead would give a fraction
    /// of a step whenever `step != 1`, and snapping would then land between
    /// selectable values.
    ///
    /// Always positive: both the step and the range span are positive.
    #[must_use]
    pub fn step_increment(&self) -> f64 {
        self.value_to_pixel(self.range.max()) / self.range.span() * self.range.step()
    }

    /// Quantizes a track position to the nearest step boundary.
    ///
    /// The position is clamped to the track before snapping.
    #[must_use]
    pub fn snap(&self, x: f64) -> f64 {
        snap(x.clamp(0.0, self.length), self.step_increment())
    }

    /// Snaps a track position and converts it to a value inside the range.
    #[must_use]
    pub fn snapped_value(&self, x: f64) -> (f64, f64) {
        let px = self.snap(x);
        (px, self.range.clamp(self.pixel_to_value(px)))
    }
}

/// Snaps `x` to a multiple of `inc`.
///
/// `x` is first rounded to a whole pixel with round-half-away-from-zero
/// ([`f64::round`]). With `diff = x % inc`, a remainder of at least half a step
/// rounds the ratio `x / inc` (again half away from zero); a smaller remainder
/// truncates down to `x - diff`.
///
/// `inc` must be positive.
///
/// ```
/// use understory_slider::snap;
///
/// assert_eq!(snap(14.0, 10.0), 10.0);
/// assert_eq!(snap(15.0, 10.0), 20.0);
/// assert_eq!(snap(14.5, 10.0), 20.0); // 14.5 rounds to 15 first
/// ```
#[must_use]
pub fn snap(x: f64, inc: f64) -> f64 {
    debug_assert!(inc > 0.0, "snap increment must be positive");
    let current = x.round();
    let diff = current % inc;
    if diff >= inc / 2.0 {
        (current / inc).round() * inc
    } else {
        current - diff
    }
}

#[cfg(test)]
mod tests {
    use super::{SliderConfig, SliderRange, TrackGeometry, TrackMapping, snap};
    use kurbo::Point;

    fn mapping(min: f64, max: f64, step: f64, length: f64) -> TrackMapping {
        TrackMapping::new(SliderRange::new(min, max, step).unwrap(), length).unwrap()
    }

    #[test]
    fn value_pixel_roundtrip() {
        for &(min, max, step, length) in &[
            (0.0, 100.0, 1.0, 100.0),
            (0.0, 100.0, 4.0, 333.0),
            (-50.0, 50.0, 5.0, 217.5),
            (0.0, 1.0, 0.25, 640.0),
        ] {
            let m = mapping(min, max, step, length);
            for i in 0..=200 {
                let v = min + (max - min) * f64::from(i) / 200.0;
                let back = m.pixel_to_value(m.value_to_pixel(v));
                assert!((back - v).abs() < 1e-9, "roundtrip drifted: {v} -> {back}");
            }
        }
    }

    #[test]
    fn unmeasured_track_has_no_mapping() {
        let range = SliderRange::new(0.0, 100.0, 1.0).unwrap();
        assert!(TrackMapping::new(range, 0.0).is_none());
        assert!(TrackMapping::new(range, -3.0).is_none());
        assert!(TrackMapping::new(range, f64::NAN).is_none());
    }

    #[test]
    fn step_increment_is_one_step_in_pixels() {
        assert_eq!(mapping(0.0, 100.0, 1.0, 100.0).step_increment(), 1.0);
        assert_eq!(mapping(0.0, 100.0, 4.0, 300.0).step_increment(), 12.0);
        assert_eq!(mapping(0.0, 100.0, 10.0, 250.0).step_increment(), 25.0);
    }

    #[test]
    fn snap_rounds_to_nearest_step() {
        assert_eq!(snap(0.0, 25.0), 0.0);
        assert_eq!(snap(12.0, 25.0), 0.0);
        assert_eq!(snap(13.0, 25.0), 25.0);
        assert_eq!(snap(37.0, 25.0), 25.0);
        assert_eq!(snap(38.0, 25.0), 50.0);
        assert_eq!(snap(250.0, 25.0), 250.0);
    }

    #[test]
    fn snap_half_pixel_rounds_away_from_zero() {
        // 12.5 rounds up to 13 before the remainder is considered.
        assert_eq!(snap(12.5, 25.0), 25.0);
        assert_eq!(snap(12.49, 25.0), 0.0);
        // Exact half step: remainder equals inc / 2 and snaps up.
        assert_eq!(snap(6.0, 12.0), 12.0);
        assert_eq!(snap(5.0, 12.0), 0.0);
    }

    #[test]
    fn snap_is_idempotent() {
        for &(step, length) in &[(1.0, 100.0), (4.0, 300.0), (10.0, 250.0), (4.0, 90.0), (5.0, 333.0)]
        {
            let m = mapping(0.0, 100.0, step, length);
            let mut i = 0_u32;
            while f64::from(i) * 0.37 <= length {
                let x = f64::from(i) * 0.37;
                let once = m.snap(x);
                assert_eq!(m.snap(once), once, "snap not idempotent at {x} (step {step})");
                i += 1;
            }
        }
    }

    #[test]
    fn snapped_value_stays_in_range() {
        let m = mapping(0.0, 100.0, 4.0, 90.0);
        for i in 0..=90 {
            let (_, v) = m.snapped_value(f64::from(i));
            assert!((0.0..=100.0).contains(&v), "value {v} escaped the range");
        }
        assert_eq!(m.snapped_value(1_000.0).1, 100.0);
        assert_eq!(m.snapped_value(-5.0).1, 0.0);
    }

    #[test]
    fn touch_position_removes_margin_and_clamps() {
        let mut track = TrackGeometry::from_config(&SliderConfig::default().with_thumb(10.0, 0.0));
        assert!(track.set_length(200.0));
        assert_eq!(track.touch_position(10.0), 0.0);
        assert_eq!(track.touch_position(60.0), 50.0);
        assert_eq!(track.touch_position(-40.0), 0.0);
        assert_eq!(track.touch_position(500.0), 200.0);
    }

    #[test]
    fn set_length_reports_changes_and_sanitizes() {
        let mut track = TrackGeometry::default();
        assert!(!track.is_measured());
        assert!(track.set_length(120.0));
        assert!(!track.set_length(120.0));
        assert!(track.is_measured());
        assert!(track.set_length(f64::INFINITY));
        assert_eq!(track.length(), 0.0);
        assert!(!track.set_length(-10.0));
    }

    #[test]
    fn thumb_center_accounts_for_margins() {
        let config = SliderConfig::default()
            .with_thumb(10.0, 2.0)
            .with_track_size(4.0);
        let mut track = TrackGeometry::from_config(&config);
        track.set_length(100.0);
        assert_eq!(track.thumb_center(40.0, 4.0), Point::new(52.0, 12.0));
        let rect = track.track_rect(4.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.x0, 12.0);
    }
}
