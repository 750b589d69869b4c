// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use tracing::{debug, trace, warn};

use crate::config::{ConfigError, SliderConfig, SliderRange};
use crate::gesture::{
    GestureEvent, GestureInterpreter, GesturePhase, TerminationResponse, TouchPhase,
};
use crate::listener::{SliderListener, ThumbTarget};
use crate::store::{Notify, ValueStore};
use crate::track::{TrackGeometry, TrackMapping};

/// Headless slider: gesture handling, value mapping, and notifications.
///
/// `Slider` owns the configuration, track geometry, gesture state and value.
/// The thumb visual and the application callbacks are injected as `T` and `L`.
///
/// Every handler runs to completion synchronously, so thumb directives are
/// issued before the handler returns and the thumb never lags the value.
#[derive(Debug)]
pub struct Slider<T, L> {
    config: SliderConfig,
    range: Option<SliderRange>,
    track: TrackGeometry,
    store: ValueStore,
    gestures: GestureInterpreter,
    thumb_offset: Option<f64>,
    thumb: T,
    listener: L,
}

impl<T: ThumbTarget, L: SliderListener> Slider<T, L> {
    /// Creates a slider whose value starts at `config.min`.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(config: SliderConfig, thumb: T, listener: L) -> Result<Self, ConfigError> {
        let range = config.validate()?;
        Ok(Self {
            config,
            range: Some(range),
            track: TrackGeometry::from_config(&config),
            store: ValueStore::new(range.min()),
            gestures: GestureInterpreter::new(),
            thumb_offset: None,
            thumb,
            listener,
        })
    }

    /// Seeds the value without notifying anyone.
    ///
    /// The value is clamped into the configured range.
    #[must_use]
    pub fn with_value(mut self, value: f64) -> Self {
        if let Some(range) = self.range {
            self.store
                .set_value(range.clamp(value), Notify::Silent, &mut self.listener);
        }
        self
    }

    /// Current configuration, which may be invalid.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replaces the configuration.
    ///
    /// The new configuration is kept even when invalid; in that case the error
    /// is returned here and from every [`render`](Self::render) call until a
    /// valid configuration is set. Meanwhile new gestures are dropped, but an
    /// open gesture is still closed by its `Up`/`Cancel` (with `on_press_out`
    /// and `on_confirm` at the current value).
    ///
    /// A valid configuration clamps the value into the new range silently and
    /// re-syncs the thumb without confirming.
    pub fn set_config(&mut self, config: SliderConfig) -> Result<(), ConfigError> {
        self.config = config;
        self.track.set_margins(&config);
        match config.validate() {
            Ok(range) => {
                self.range = Some(range);
                let clamped = range.clamp(self.store.value());
                self.store
                    .set_value(clamped, Notify::Silent, &mut self.listener);
                self.sync_thumb(false);
                Ok(())
            }
            Err(err) => {
                warn!(%err, "slider configuration rejected");
                self.range = None;
                Err(err)
            }
        }
    }

    /// Validates the configuration and produces the data a renderer needs.
    ///
    /// This is the render pass: it fails for as long as the configuration is
    /// invalid.
    pub fn render(&self) -> Result<SliderFrame, ConfigError> {
        let range = self.config.validate()?;
        let value = self.store.value();
        let offset = TrackMapping::new(range, self.track.length())
            .map_or(0.0, |mapping| mapping.value_to_pixel(value));
        let track_size = self.config.track_size;
        Ok(SliderFrame {
            value,
            fraction: range.fraction(value),
            thumb_offset: offset,
            thumb_center: self.track.thumb_center(offset, track_size),
            thumb_radius: self.config.thumb_radius,
            track_rect: self.track.track_rect(track_size),
            pressed: self.gestures.is_dragging(),
            disabled: self.config.disabled,
        })
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.store.value()
    }

    /// Assigns the value from outside a gesture.
    ///
    /// The value is clamped into range and stored without `on_change`. The
    /// thumb is moved to match (once the track is measured) and `on_confirm`
    /// fires with the stored value.
    pub fn set_value(&mut self, value: f64) {
        let Some(range) = self.range else {
            warn!(value, "value assignment ignored: invalid slider configuration");
            return;
        };
        let value = range.clamp(value);
        debug!(value, "slider value set externally");
        self.store.set_value(value, Notify::Silent, &mut self.listener);
        self.sync_thumb(true);
    }

    /// Layout reactor: the track length changed to `length` pixels.
    ///
    /// On an actual change the thumb is re-placed from the current value. The
    /// value itself is untouched and no listener callback fires.
    pub fn set_track_length(&mut self, length: f64) {
        if !self.track.set_length(length) {
            return;
        }
        debug!(length = self.track.length(), "slider track length changed");
        self.sync_thumb(false);
    }

    /// Layout reactor for a measured track size; only the width is used.
    pub fn set_track_size(&mut self, size: Size) {
        self.set_track_length(size.width);
    }

    /// Feeds one gesture event.
    pub fn handle_gesture(&mut self, event: GestureEvent) {
        // A gesture already open must still be closed by its Up/Cancel.
        let closes = matches!(event, GestureEvent::Up { .. } | GestureEvent::Cancel { .. });
        if self.range.is_none() && !closes {
            warn!(event = event.name(), "gesture ignored: invalid slider configuration");
            return;
        }
        if self.config.disabled && matches!(event, GestureEvent::Down { .. }) {
            debug!("gesture ignored: slider disabled");
            return;
        }
        let Some(sample) = self.gestures.handle(event) else {
            warn!(
                event = event.name(),
                dragging = self.gestures.is_dragging(),
                "gesture event out of sequence, ignored"
            );
            return;
        };

        match sample.phase {
            TouchPhase::Press => {
                debug!(pointer = sample.pointer, "slider press");
                self.listener.on_press_in();
                self.update_from_pointer(sample.pointer);
            }
            TouchPhase::Drag => self.update_from_pointer(sample.pointer),
            TouchPhase::Release => {
                debug!(
                    pointer = sample.pointer,
                    cancelled = sample.cancelled,
                    "slider release"
                );
                self.listener.on_press_out();
                self.confirm_from_pointer(sample.pointer);
            }
        }
    }

    /// Answers a competing gesture owner: never let go mid-drag.
    #[must_use]
    pub fn on_termination_request(&self) -> TerminationResponse {
        self.gestures.termination_request()
    }

    /// Returns `true` while a gesture is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    /// Track geometry.
    #[must_use]
    pub fn track(&self) -> &TrackGeometry {
        &self.track
    }

    /// Last offset sent to the thumb, if any.
    #[must_use]
    pub fn thumb_offset(&self) -> Option<f64> {
        self.thumb_offset
    }

    /// The injected thumb target.
    #[must_use]
    pub fn thumb(&self) -> &T {
        &self.thumb
    }

    /// Mutable access to the injected thumb target.
    pub fn thumb_mut(&mut self) -> &mut T {
        &mut self.thumb
    }

    /// The injected listener.
    #[must_use]
    pub fn listener(&self) -> &L {
        &self.listener
    }

    /// Mutable access to the injected listener.
    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }

    /// Consumes the slider and returns the injected thumb and listener.
    pub fn into_parts(self) -> (T, L) {
        (self.thumb, self.listener)
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> SliderDebugInfo {
        SliderDebugInfo {
            value: self.store.value(),
            phase: self.gestures.phase(),
            anchor: self.gestures.anchor(),
            track_length: self.track.length(),
            margin_h: self.track.margin_h(),
            margin_v: self.track.margin_v(),
            thumb_offset: self.thumb_offset,
            config_valid: self.range.is_some(),
        }
    }

    /// `None` while the config is invalid or the track is unmeasured.
    fn mapping(&self) -> Option<TrackMapping> {
        TrackMapping::new(self.range?, self.track.length())
    }

    fn move_thumb(&mut self, offset: f64) {
        self.thumb_offset = Some(offset);
        self.thumb.move_to(offset);
    }

    fn update_from_pointer(&mut self, pointer: f64) {
        let Some(mapping) = self.mapping() else {
            return;
        };
        let touch = self.track.touch_position(pointer);
        let (offset, value) = mapping.snapped_value(touch);
        if self.store.set_value(value, Notify::Live, &mut self.listener) {
            trace!(value, offset, "slider live update");
        }
        self.move_thumb(offset);
    }

    fn confirm_from_pointer(&mut self, pointer: f64) {
        if let Some(mapping) = self.mapping() {
            let touch = self.track.touch_position(pointer);
            let (offset, value) = mapping.snapped_value(touch);
            self.store.set_value(value, Notify::Live, &mut self.listener);
            self.move_thumb(offset);
        }
        self.thumb.confirm_move_to();
        self.store.confirm(&mut self.listener);
        debug!(value = self.store.value(), "slider value confirmed");
    }

    /// Re-places the thumb from the stored value.
    ///
    /// With `notify`, `on_confirm` fires even if the track is unmeasured.
    /// During a drag the thumb is moved but not settled; the gesture end does
    /// that.
    fn sync_thumb(&mut self, notify: bool) {
        if let Some(mapping) = self.mapping() {
            let offset = mapping.value_to_pixel(self.store.value());
            self.move_thumb(offset);
            if !self.gestures.is_dragging() {
                self.thumb.confirm_move_to();
            }
        } else {
            self.thumb_offset = None;
        }
        if notify {
            self.store.confirm(&mut self.listener);
        }
    }
}

/// Everything a renderer needs to draw the slider for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFrame {
    /// Current value.
    pub value: f64,
    /// Position of the value inside the range, in `[0, 1]`.
    pub fraction: f64,
    /// Thumb offset along the track; `0.0` before the track is measured.
    pub thumb_offset: f64,
    /// Thumb centre in widget coordinates.
    pub thumb_center: Point,
    /// Thumb radius.
    pub thumb_radius: f64,
    /// Track rectangle in widget coordinates.
    pub track_rect: Rect,
    /// A gesture is in progress.
    pub pressed: bool,
    /// The slider does not accept new gestures.
    pub disabled: bool,
}

/// Debug snapshot of a [`Slider`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderDebugInfo {
    /// Current value.
    pub value: f64,
    /// Gesture state.
    pub phase: GesturePhase,
    /// Last committed pointer anchor.
    pub anchor: f64,
    /// Measured track length.
    pub track_length: f64,
    /// Horizontal track inset.
    pub margin_h: f64,
    /// Vertical track inset.
    pub margin_v: f64,
    /// Last offset sent to the thumb.
    pub thumb_offset: Option<f64>,
    /// Whether the current configuration passed validation.
    pub config_valid: bool,
}
