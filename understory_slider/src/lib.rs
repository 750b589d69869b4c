// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: the headless core of a draggable range selector.
//!
//! This crate turns a one-dimensional pointer gesture into a value inside a
//! bounded range. It handles:
//!
//! - Mapping between track pixels and values ([`TrackMapping`]).
//! - Quantizing positions to step boundaries ([`snap`]).
//! - The press/drag/release lifecycle, including cancellation
//!   ([`gesture::GestureInterpreter`]).
//! - Live value updates during a drag versus a confirmed value at the end
//!   ([`SliderListener`]).
//! - Keeping the thumb in sync with the value when the track is resized.
//!
//! It does **not** draw anything, measure layout, or capture pointers. Callers
//! are expected to:
//! - Feed gesture events from their input system into [`Slider::handle_gesture`].
//! - Report track length changes through [`Slider::set_track_length`].
//! - Implement [`ThumbTarget`] to place the thumb visual.
//! - Read [`Slider::render`] to draw the track and thumb.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_slider::gesture::GestureEvent;
//! use understory_slider::{Slider, SliderConfig, SliderListener};
//!
//! #[derive(Default)]
//! struct Report {
//!     live: Vec<f64>,
//!     confirmed: Vec<f64>,
//! }
//!
//! impl SliderListener for Report {
//!     fn on_change(&mut self, value: f64) {
//!         self.live.push(value);
//!     }
//!     fn on_confirm(&mut self, value: f64) {
//!         self.confirmed.push(value);
//!     }
//! }
//!
//! // 0..100 in steps of 10, with a 10px thumb radius.
//! let config = SliderConfig::default()
//!     .with_range(0.0, 100.0, 10.0)
//!     .with_thumb(10.0, 0.0);
//! let mut slider = Slider::new(config, (), Report::default()).unwrap();
//!
//! // Layout arrives: the track is 200px long.
//! slider.set_track_length(200.0);
//!
//! // Press 10px into the widget (the track start), drag 93px, release.
//! slider.handle_gesture(GestureEvent::Down { offset: 10.0 });
//! slider.handle_gesture(GestureEvent::Move { delta: 93.0 });
//! slider.handle_gesture(GestureEvent::Up { delta: 93.0 });
//!
//! // 93px snaps to the 100px step boundary: value 50.
//! assert_eq!(slider.value(), 50.0);
//! assert_eq!(slider.listener().live, [50.0]);
//! assert_eq!(slider.listener().confirmed, [50.0]);
//! ```
//!
//! ## Configuration errors
//!
//! The step must divide `max` exactly. A configuration that violates this is
//! rejected at construction, on replacement, and on every render pass:
//!
//! ```rust
//! use understory_slider::{ConfigError, Slider, SliderConfig};
//!
//! let bad = SliderConfig::default().with_range(0.0, 100.0, 3.0);
//! assert!(matches!(
//!     Slider::new(bad, (), ()),
//!     Err(ConfigError::StepDoesNotDivide { .. })
//! ));
//! ```
//!
//! ## Diagnostics
//!
//! Lifecycle transitions and rejected events are reported through `tracing`.
//! No subscriber is installed by this crate.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod config;
pub mod gesture;
mod listener;
mod slider;
mod store;
mod track;

pub use config::{ConfigError, SliderConfig, SliderRange};
pub use gesture::{GestureEvent, TerminationResponse};
pub use listener::{SliderListener, ThumbTarget};
pub use slider::{Slider, SliderDebugInfo, SliderFrame};
pub use store::{Notify, ValueStore};
pub use track::{TrackGeometry, TrackMapping, snap};
