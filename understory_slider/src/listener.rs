// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities injected into a [`Slider`](crate::Slider).
//!
//! The core never talks to a renderer or an application directly. It drives a
//! [`ThumbTarget`] for visual placement and reports to a [`SliderListener`]
//! for value and gesture notifications. Both traits are implemented for `()`
//! as no-op sinks.

/// Receives thumb placement directives.
///
/// Moves are immediate positional assignments; there is no animation.
pub trait ThumbTarget {
    /// Places the thumb at `offset` pixels from the start of the track.
    fn move_to(&mut self, offset: f64);

    /// Settles the thumb after a gesture or an external update, for example
    /// ending a transient pressed highlight.
    fn confirm_move_to(&mut self);
}

/// Callback sink for slider notifications.
///
/// All methods default to doing nothing.
pub trait SliderListener {
    /// Called on every live value change, including during a drag.
    fn on_change(&mut self, value: f64) {
        let _ = value;
    }

    /// Called when a gesture starts.
    fn on_press_in(&mut self) {}

    /// Called when a gesture ends, before the value is confirmed.
    fn on_press_out(&mut self) {}

    /// Called once per finished or cancelled gesture and once per external
    /// value assignment, with the current value.
    fn on_confirm(&mut self, value: f64) {
        let _ = value;
    }
}

impl ThumbTarget for () {
    fn move_to(&mut self, _offset: f64) {}

    fn confirm_move_to(&mut self) {}
}

impl SliderListener for () {}

impl<T: ThumbTarget + ?Sized> ThumbTarget for &mut T {
    fn move_to(&mut self, offset: f64) {
        (**self).move_to(offset);
    }

    fn confirm_move_to(&mut self) {
        (**self).confirm_move_to();
    }
}

impl<L: SliderListener + ?Sized> SliderListener for &mut L {
    fn on_change(&mut self, value: f64) {
        (**self).on_change(value);
    }

    fn on_press_in(&mut self) {
        (**self).on_press_in();
    }

    fn on_press_out(&mut self) {
        (**self).on_press_out();
    }

    fn on_confirm(&mut self, value: f64) {
        (**self).on_confirm(value);
    }
}
