//=========================================================================
// Scene System
//=========================================================================
//
// Scene controllers and the game flow that mounts them.
//
// Architecture:
//   GameFlowController
//     ├─ state: GameState (Room | Outdoor | Victory)
//     ├─ scene: Option<SceneController>
//     │     ├─ InputTracker
//     │     ├─ TriggerZone[]
//     │     └─ DeferredQueue (pending exits)
//     └─ transition: DeferredQueue<GameState>
//
// Flow:
//   tick() → SceneController::tick() → exit callback → SceneExit signal
//          → begin_transition() → (delay) → mount next scene
//
//=========================================================================

//=== Module Declarations =================================================

mod controller;
mod flow;
mod presets;
mod walk_cycle;

//=== Public API ==========================================================

pub use controller::{CameraConfig, ExitCallback, SceneConfig, SceneController};
pub use flow::{FlowConfig, GameFlowController, GameState};
pub use presets::{
    COMPANION_DELAY, COMPANION_POSITION, COMPANION_RADIUS, DOOR_DELAY, OUTDOOR_MAX_CAMERA_OFFSET,
    OUTDOOR_SPAWN, ROOM_SPAWN,
};
pub use walk_cycle::WalkCycle;

//=== SceneKind ===========================================================

/// Identifies a playable scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Room,
    Outdoor,
}
