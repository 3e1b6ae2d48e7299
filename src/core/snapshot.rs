//=========================================================================
// Render Snapshot
//=========================================================================
//
// Read-only view of the simulation, published once per tick.
//
// The renderer never reaches into the simulation; it only sees these
// plain values. Everything here is `Copy` so a snapshot can be sent
// across the platform channel without borrowing.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Position;
use crate::core::input::Direction;
use crate::core::scene::{GameState, SceneKind, COMPANION_POSITION};

/// HUD distances are shown in metres of 10 pixels.
const PIXELS_PER_METRE: f32 = 10.0;

//=== SceneSnapshot =======================================================

/// State of the mounted scene after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneSnapshot {
    pub kind: SceneKind,
    pub position: Position,
    pub direction: Direction,
    pub moving: bool,

    /// Horizontal scroll in pixels. Always `0.0` for scenes without a camera.
    pub camera_offset: f32,

    /// Walk animation frame, `0` or `1`.
    pub walk_frame: u8,

    /// Whether any trigger zone in the scene has fired.
    pub triggered: bool,
}

impl SceneSnapshot {
    /// Horizontal distance to the companion in whole metres, outdoors only.
    pub fn companion_distance(&self) -> Option<u32> {
        match self.kind {
            SceneKind::Outdoor => {
                let metres = (self.position.x - COMPANION_POSITION.x).abs() / PIXELS_PER_METRE;
                Some(metres.floor() as u32)
            }
            SceneKind::Room => None,
        }
    }
}

//=== RenderSnapshot ======================================================

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSnapshot {
    pub state: GameState,

    /// A transition is in flight; show the loading screen.
    pub transitioning: bool,

    /// `None` while transitioning and on the victory screen.
    pub scene: Option<SceneSnapshot>,
}

//=========================================================================
// Unit Tests
//=========================================================================
