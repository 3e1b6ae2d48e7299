//=========================================================================
// Input
//
// Keyboard input types and the per-scene held-key tracker.
//
// Responsibilities:
// - Represent platform key reports in a portable form (`event`)
// - Canonicalize movement keys into directions (`direction`)
// - Track held movement keys for the mounted scene (`input_tracker`)
//
// Notes:
// There is no global input state. Each mounted scene owns its own
// `InputTracker`, and the game flow controller routes events to it.
// When a scene is unmounted its tracker goes with it.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod direction;
mod input_tracker;

//=== Public API ==========================================================

pub use direction::{Direction, DirectionSet};
pub use event::{InputEvent, KeyCode};
pub use input_tracker::{InputTracker, KeyResponse};
