//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types.
//
// Usage:
//   use pixel_quest::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::engine::{Engine, EngineBuilder};

// Input
pub use crate::core::input::{Direction, InputEvent, KeyCode, KeyResponse};

// Scenes and flow
pub use crate::core::scene::{FlowConfig, GameFlowController, GameState, SceneConfig, SceneKind};

// Geometry and snapshots
pub use crate::core::geometry::{BoundaryRect, Position};
pub use crate::core::snapshot::{RenderSnapshot, SceneSnapshot};
