// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture interpreter: turn down/move/up/cancel events into absolute pointer
//! offsets along the track axis.
//!
//! The gesture source reports an absolute offset on `Down` and, afterwards,
//! deltas measured from that `Down` position. The interpreter records the
//! `Down` offset as the *anchor* and reconstructs absolute positions as
//! `anchor + delta`.
//!
//! `Cancel` is special: its delta is not trusted, so the gesture closes at the
//! last committed anchor instead.
//!
//! ## Minimal example
//!
//! ```
//! use understory_slider::gesture::{GestureEvent, GestureInterpreter, TouchPhase};
//!
//! let mut gestures = GestureInterpreter::new();
//!
//! let down = gestures.handle(GestureEvent::Down { offset: 20.0 }).unwrap();
//! assert_eq!((down.phase, down.pointer), (TouchPhase::Press, 20.0));
//!
//! let moved = gestures.handle(GestureEvent::Move { delta: 30.0 }).unwrap();
//! assert_eq!(moved.pointer, 50.0);
//!
//! // The cancel delta is ignored; the gesture ends at the anchor.
//! let end = gestures.handle(GestureEvent::Cancel { delta: 999.0 }).unwrap();
//! assert_eq!((end.phase, end.pointer), (TouchPhase::Release, 20.0));
//! assert!(!gestures.is_dragging());
//! ```

use kurbo::Point;

/// A raw pointer event from the gesture source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureEvent {
    /// A gesture starts at an absolute offset along the track axis.
    Down {
        /// Absolute offset from the widget's leading edge.
        offset: f64,
    },
    /// The pointer moved; `delta` is measured from the `Down` offset.
    Move {
        /// Offset relative to the `Down` position.
        delta: f64,
    },
    /// The pointer was released; `delta` is measured from the `Down` offset.
    Up {
        /// Offset relative to the `Down` position.
        delta: f64,
    },
    /// The gesture was cancelled by the system. The delta is not trusted.
    Cancel {
        /// Offset relative to the `Down` position, as reported.
        delta: f64,
    },
}

impl GestureEvent {
    /// `Down` at the X coordinate of `pos`.
    #[must_use]
    pub fn down_at(pos: Point) -> Self {
        Self::Down { offset: pos.x }
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Down { .. } => "down",
            Self::Move { .. } => "move",
            Self::Up { .. } => "up",
            Self::Cancel { .. } => "cancel",
        }
    }
}

/// Interpreter state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture is open.
    #[default]
    Idle,
    /// A gesture is open and owns the pointer.
    Dragging,
}

/// What an accepted event means for the slider.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    /// The gesture just started.
    Press,
    /// The pointer moved during the gesture.
    Drag,
    /// The gesture ended, by release or cancellation.
    Release,
}

/// An absolute pointer offset derived from an accepted event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    /// Lifecycle position of the event.
    pub phase: TouchPhase,
    /// Absolute pointer offset along the track axis.
    pub pointer: f64,
    /// `true` when the gesture ended through `Cancel`.
    pub cancelled: bool,
}

/// Answer to a competing gesture owner asking this slider to let go.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TerminationResponse {
    /// Release the pointer; nothing is in progress.
    Grant,
    /// Keep the pointer; a drag is in progress.
    Refuse,
}

/// Single-session gesture state machine.
#[derive(Clone, Copy, Debug, Default)]
pub struct GestureInterpreter {
    phase: GesturePhase,
    anchor: f64,
}

impl GestureInterpreter {
    /// Creates an idle interpreter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a gesture is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.phase == GesturePhase::Dragging
    }

    /// Absolute pointer offset recorded at `Down`, advanced on `Up`.
    #[must_use]
    pub fn anchor(&self) -> f64 {
        self.anchor
    }

    /// Feeds one event.
    ///
    /// Returns `None` for events that do not fit the lifecycle: `Move`, `Up`
    /// or `Cancel` while idle, and `Down` while a gesture is already open.
    /// Such events leave the state untouched.
    pub fn handle(&mut self, event: GestureEvent) -> Option<TouchSample> {
        let (phase, pointer, cancelled) = match (self.phase, event) {
            (GesturePhase::Idle, GestureEvent::Down { offset }) => {
                self.phase = GesturePhase::Dragging;
                self.anchor = offset;
                (TouchPhase::Press, offset, false)
            }
            (GesturePhase::Dragging, GestureEvent::Move { delta }) => {
                (TouchPhase::Drag, self.anchor + delta, false)
            }
            (GesturePhase::Dragging, GestureEvent::Up { delta }) => {
                self.phase = GesturePhase::Idle;
                self.anchor += delta;
                (TouchPhase::Release, self.anchor, false)
            }
            (GesturePhase::Dragging, GestureEvent::Cancel { .. }) => {
                self.phase = GesturePhase::Idle;
                (TouchPhase::Release, self.anchor, true)
            }
            _ => return None,
        };
        Some(TouchSample {
            phase,
            pointer,
            cancelled,
        })
    }

    /// Responds to a termination request from a competing gesture owner.
    #[must_use]
    pub fn termination_request(&self) -> TerminationResponse {
        if self.is_dragging() {
            TerminationResponse::Refuse
        } else {
            TerminationResponse::Grant
        }
    }
}
