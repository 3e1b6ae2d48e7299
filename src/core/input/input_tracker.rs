//=========================================================================
// Input Tracker
//=========================================================================
//
// Held movement keys for one mounted scene.
//
// Architecture:
//   KeyDown/KeyUp → on_key_down()/on_key_up() → HashSet<KeyCode> → held()
//
// The tracker stores raw keys rather than directions so that releasing
// one alias (`A`) does not release a direction still held through the
// other (`ArrowLeft`). Queries always return canonical directions.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

use log::trace;

//=== Internal Dependencies ===============================================

use super::direction::{Direction, DirectionSet};
use super::event::KeyCode;

//=== KeyResponse =========================================================

/// Whether the tracker handled a key.
///
/// `Consumed` tells the caller to suppress any default handling of the
/// key by the host (scrolling, focus navigation).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyResponse {
    Consumed,
    Ignored,
}

//=== InputTracker ========================================================

/// Tracks which movement keys are currently held.
pub struct InputTracker {
    keys_down: HashSet<KeyCode>,
}

impl InputTracker {
    /// Creates a tracker with nothing held.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::with_capacity(8),
        }
    }

    //--- Event Handling ---------------------------------------------------

    /// Records a key press. Non-movement keys are ignored.
    pub fn on_key_down(&mut self, key: KeyCode) -> KeyResponse {
        if Direction::from_key(key).is_none() {
            return KeyResponse::Ignored;
        }

        if self.keys_down.insert(key) {
            trace!("Movement key down: {:?}", key);
        }
        KeyResponse::Consumed
    }

    /// Records a key release. Non-movement keys are ignored.
    pub fn on_key_up(&mut self, key: KeyCode) -> KeyResponse {
        if Direction::from_key(key).is_none() {
            return KeyResponse::Ignored;
        }

        if self.keys_down.remove(&key) {
            trace!("Movement key up: {:?}", key);
        }
        KeyResponse::Consumed
    }

    /// Releases every held key.
    pub fn clear(&mut self) {
        self.keys_down.clear();
    }

    //--- Queries ----------------------------------------------------------

    /// Canonical directions currently held.
    pub fn held(&self) -> DirectionSet {
        self.keys_down
            .iter()
            .filter_map(|key| Direction::from_key(*key))
            .collect()
    }

    /// Raw keys currently held, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.keys_down.iter().copied()
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_down_adds_direction() {
        let mut tracker = InputTracker::new();

        assert_eq!(tracker.on_key_down(KeyCode::KeyD), KeyResponse::Consumed);
        assert!(tracker.held().contains(Direction::Right));
        assert_eq!(tracker.keys().collect::<Vec<_>>(), vec![KeyCode::KeyD]);
    }

    #[test]
    fn key_up_removes_direction() {
        let mut tracker = InputTracker::new();
        tracker.on_key_down(KeyCode::ArrowUp);

        assert_eq!(tracker.on_key_up(KeyCode::ArrowUp), KeyResponse::Consumed);
        assert!(tracker.held().is_empty());
    }

    #[test]
    fn unrecognized_keys_are_ignored() {
        let mut tracker = InputTracker::new();

        assert_eq!(tracker.on_key_down(KeyCode::Enter), KeyResponse::Ignored);
        assert_eq!(tracker.on_key_up(KeyCode::Escape), KeyResponse::Ignored);
        assert!(tracker.held().is_empty());
        assert_eq!(tracker.keys().count(), 0);
    }

    #[test]
    fn alias_keeps_direction_held() {
        let mut tracker = InputTracker::new();
        tracker.on_key_down(KeyCode::KeyA);
        tracker.on_key_down(KeyCode::ArrowLeft);

        tracker.on_key_up(KeyCode::KeyA);
        assert!(tracker.held().contains(Direction::Left));

        tracker.on_key_up(KeyCode::ArrowLeft);
        assert!(!tracker.held().contains(Direction::Left));
    }

    #[test]
    fn release_without_press_is_harmless() {
        let mut tracker = InputTracker::new();
        assert_eq!(tracker.on_key_up(KeyCode::KeyS), KeyResponse::Consumed);
        assert!(tracker.held().is_empty());
    }

    #[test]
    fn clear_releases_everything() {
        let mut tracker = InputTracker::new();
        tracker.on_key_down(KeyCode::KeyW);
        tracker.on_key_down(KeyCode::KeyD);
        assert_eq!(tracker.held().iter().count(), 2);

        tracker.clear();
        assert!(tracker.held().is_empty());
    }

    #[test]
    fn repeated_key_down_counts_once() {
        let mut tracker = InputTracker::new();
        tracker.on_key_down(KeyCode::KeyS);
        tracker.on_key_down(KeyCode::KeyS);
        tracker.on_key_up(KeyCode::KeyS);
        assert!(tracker.held().is_empty());
    }
}
