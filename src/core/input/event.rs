//=========================================================================
// Input Event Types
//
// Defines the engine-side representation of keyboard input.
//
// This module abstracts platform-specific key reports (Winit physical
// keys, DOM-style key names) into a small portable enum used by the
// scene input trackers and the game flow controller.
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    GameFlowController (routes to the mounted scene)
//         ↓
//    InputTracker (held movement keys)
// ```
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only the keys the game reacts to are named. Everything else the
/// platform reports collapses into `Unidentified` and is dropped before
/// it reaches the logic thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Movement ---------------------------------------------------------

    /// WASD cluster
    KeyW, KeyA, KeyS, KeyD,

    /// Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    //--- Menu -------------------------------------------------------------

    /// Restart shortcut on the victory screen
    KeyR,

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Closes the game
    Escape,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

impl KeyCode {
    /// Parses a DOM-style key name (`"w"`, `"ArrowUp"`, `"Enter"`).
    ///
    /// Matching is case-insensitive, so `"W"` and `"arrowup"` are accepted.
    /// Returns `None` for names the game does not know about.
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name.to_ascii_lowercase().as_str() {
            "w" => Self::KeyW,
            "a" => Self::KeyA,
            "s" => Self::KeyS,
            "d" => Self::KeyD,
            "r" => Self::KeyR,
            "arrowup" => Self::ArrowUp,
            "arrowdown" => Self::ArrowDown,
            "arrowleft" => Self::ArrowLeft,
            "arrowright" => Self::ArrowRight,
            " " | "space" | "spacebar" => Self::Space,
            "enter" => Self::Enter,
            "escape" | "esc" => Self::Escape,
            _ => return None,
        };
        Some(key)
    }

    /// Returns `true` for keys that confirm the victory screen.
    pub fn is_confirm(self) -> bool {
        matches!(self, Self::Enter | Self::Space | Self::KeyR)
    }
}

//=== InputEvent ==========================================================

/// Low-level input event from the platform layer.
///
/// Key events are discrete and order-significant. `FocusLost` is sent
/// when the window stops receiving keyboard input; held keys would never
/// see their release event otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    /// Key pressed down.
    KeyDown(KeyCode),

    /// Key released.
    KeyUp(KeyCode),

    /// Keyboard focus left the window.
    FocusLost,
}

impl InputEvent {
    /// Returns `true` for a press that should close the window.
    pub fn is_quit_request(&self) -> bool {
        matches!(self, Self::KeyDown(KeyCode::Escape))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name_accepts_wasd_and_arrows() {
        assert_eq!(KeyCode::from_name("w"), Some(KeyCode::KeyW));
        assert_eq!(KeyCode::from_name("d"), Some(KeyCode::KeyD));
        assert_eq!(KeyCode::from_name("ArrowLeft"), Some(KeyCode::ArrowLeft));
        assert_eq!(KeyCode::from_name("ArrowDown"), Some(KeyCode::ArrowDown));
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(KeyCode::from_name("W"), Some(KeyCode::KeyW));
        assert_eq!(KeyCode::from_name("ARROWUP"), Some(KeyCode::ArrowUp));
        assert_eq!(KeyCode::from_name("arrowright"), Some(KeyCode::ArrowRight));
    }

    #[test]
    fn from_name_rejects_unknown_keys() {
        assert_eq!(KeyCode::from_name("q"), None);
        assert_eq!(KeyCode::from_name("Shift"), None);
        assert_eq!(KeyCode::from_name(""), None);
    }

    #[test]
    fn confirm_keys() {
        assert!(KeyCode::Enter.is_confirm());
        assert!(KeyCode::Space.is_confirm());
        assert!(KeyCode::KeyR.is_confirm());
        assert!(!KeyCode::KeyW.is_confirm());
        assert!(!KeyCode::Escape.is_confirm());
    }

    #[test]
    fn events_compare_by_kind_and_key() {
        assert_eq!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyDown(KeyCode::KeyA));
        assert_ne!(InputEvent::KeyDown(KeyCode::KeyA), InputEvent::KeyUp(KeyCode::KeyA));
    }

    #[test]
    fn escape_press_requests_quit() {
        assert!(InputEvent::KeyDown(KeyCode::Escape).is_quit_request());
        assert!(!InputEvent::KeyUp(KeyCode::Escape).is_quit_request());
        assert!(!InputEvent::KeyDown(KeyCode::Enter).is_quit_request());
        assert!(!InputEvent::FocusLost.is_quit_request());
        assert_eq!(KeyCode::from_name("Esc"), Some(KeyCode::Escape));
    }
}
