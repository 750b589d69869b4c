// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Authoritative slider value with change suppression.

use crate::listener::SliderListener;

/// Whether a value update should be reported to [`SliderListener::on_change`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notify {
    /// Report the change as a live update.
    Live,
    /// Store the value without reporting it.
    Silent,
}

/// Holds the current value.
///
/// Updates that do not change the value (exact comparison) are dropped, so a
/// gesture source that repeats a position does not repeat `on_change`.
/// Confirmation is different: it always reports, whether or not anything
/// changed.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueStore {
    value: f64,
}

impl ValueStore {
    /// Creates a store holding `value`.
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Stores `value` if it differs from the current one.
    ///
    /// Returns `true` when the value changed. With [`Notify::Live`], a change
    /// is also reported through `listener`.
    pub fn set_value<L: SliderListener + ?Sized>(
        &mut self,
        value: f64,
        notify: Notify,
        listener: &mut L,
    ) -> bool {
        if value == self.value {
            return false;
        }
        self.value = value;
        if notify == Notify::Live {
            listener.on_change(value);
        }
        true
    }

    /// Reports the current value as confirmed.
    pub fn confirm<L: SliderListener + ?Sized>(&self, listener: &mut L) {
        listener.on_confirm(self.value);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{Notify, ValueStore};
    use crate::listener::SliderListener;

    #[derive(Default)]
    struct Log {
        changes: Vec<f64>,
        confirms: Vec<f64>,
    }

    impl SliderListener for Log {
        fn on_change(&mut self, value: f64) {
            self.changes.push(value);
        }

        fn on_confirm(&mut self, value: f64) {
            self.confirms.push(value);
        }
    }

    #[test]
    fn live_updates_fire_once_per_change() {
        let mut store = ValueStore::new(0.0);
        let mut log = Log::default();

        assert!(store.set_value(10.0, Notify::Live, &mut log));
        assert!(!store.set_value(10.0, Notify::Live, &mut log));
        assert!(store.set_value(11.0, Notify::Live, &mut log));

        assert_eq!(log.changes, [10.0, 11.0]);
        assert_eq!(store.value(), 11.0);
    }

    #[test]
    fn silent_updates_store_without_reporting() {
        let mut store = ValueStore::new(0.0);
        let mut log = Log::default();

        assert!(store.set_value(30.0, Notify::Silent, &mut log));
        assert!(log.changes.is_empty());
        assert_eq!(store.value(), 30.0);
    }

    #[test]
    fn no_epsilon_in_change_detection() {
        let mut store = ValueStore::new(0.1 + 0.2);
        let mut log = Log::default();

        assert!(store.set_value(0.3, Notify::Live, &mut log));
        assert_eq!(log.changes.len(), 1);
    }

    #[test]
    fn confirm_reports_even_without_change() {
        let store = ValueStore::new(5.0);
        let mut log = Log::default();

        store.confirm(&mut log);
        store.confirm(&mut log);

        assert_eq!(log.confirms, [5.0, 5.0]);
    }
}
