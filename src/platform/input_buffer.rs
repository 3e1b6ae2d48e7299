//=========================================================================
// Input Buffer
//
// Collects key events between two redraws. Acts as a transient event
// aggregator between the winit callbacks and the logic-thread channel.
//
// Responsibilities:
// - Store incoming key events for the current platform frame
// - Drop exact consecutive duplicates (OS key repeat that slipped through)
// - Hand the whole frame over in one `drain()`
//
// Notes:
// Order is preserved: a press followed by a release in the same frame
// must reach the logic thread in that order.
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================

pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    //
    // Preallocates for a typical frame to avoid reallocations.
    //
    pub fn new() -> Self {
        const EVENT_BASE: usize = 32;

        Self {
            events: Vec::with_capacity(EVENT_BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Appends an event; identical consecutive events are ignored.
    //
    pub fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns all events for this frame and empties the buffer.
    // Returns `None` for an empty frame so nothing is sent.
    //
    pub fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.events.is_empty() {
            return None;
        }
        Some(self.events.drain(..).collect())
    }

    //--- Utilities --------------------------------------------------------
    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::KeyCode;

    #[test]
    fn consecutive_duplicates_are_dropped() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyD));
        assert_eq!(buffer.len(), 2, "Duplicates should be ignored");
    }

    #[test]
    fn press_release_press_is_kept() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        buffer.push(InputEvent::KeyUp(KeyCode::KeyA));
        buffer.push(InputEvent::KeyDown(KeyCode::KeyA));
        assert_eq!(buffer.len(), 3);
    }

    #[test]
    fn drain_preserves_order_and_clears() {
        let mut buffer = InputBuffer::new();
        buffer.push(InputEvent::KeyDown(KeyCode::KeyW));
        buffer.push(InputEvent::KeyUp(KeyCode::KeyW));

        let events = buffer.drain().expect("buffer had events");
        assert_eq!(
            events,
            vec![InputEvent::KeyDown(KeyCode::KeyW), InputEvent::KeyUp(KeyCode::KeyW)]
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn drain_empty_returns_none() {
        let mut buffer = InputBuffer::new();
        assert!(buffer.drain().is_none());
    }

    #[test]
    fn drain_does_not_deallocate() {
        let mut buffer = InputBuffer::new();
        for i in 0..64 {
            let key = if i % 2 == 0 { KeyCode::KeyA } else { KeyCode::KeyD };
            buffer.push(InputEvent::KeyDown(key));
        }
        let capacity = buffer.events.capacity();

        buffer.drain();
        assert_eq!(buffer.events.capacity(), capacity);
    }
}
