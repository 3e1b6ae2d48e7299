//=========================================================================
// Scene Presets
//=========================================================================
//
// Layouts for the two playable scenes.
//
//   Room     800x600 interior, door on the right wall, no scrolling
//   Outdoor  2000px wide field, companion near the far end, follow camera
//
//=========================================================================

use std::time::Duration;

use crate::core::geometry::{BoundaryRect, Position};
use crate::core::input::Direction;
use crate::core::movement::MovementResolver;
use crate::core::trigger::{TriggerShape, TriggerZone};
use super::controller::{CameraConfig, SceneConfig};
use super::SceneKind;

//--- Room ----------------------------------------------------------------

pub const ROOM_SPAWN: Position = Position::new(400.0, 300.0);
pub const DOOR_DELAY: Duration = Duration::from_millis(500);

//--- Outdoor -------------------------------------------------------------

pub const OUTDOOR_SPAWN: Position = Position::new(50.0, 300.0);
pub const COMPANION_POSITION: Position = Position::new(1800.0, 250.0);
pub const COMPANION_RADIUS: f32 = 80.0;
pub const COMPANION_DELAY: Duration = Duration::from_millis(1000);
pub const OUTDOOR_MAX_CAMERA_OFFSET: f32 = 1200.0;

impl SceneConfig {
    /// The starting bedroom. Walking into the door band on the right wall
    /// leaves the room.
    pub fn room() -> Self {
        Self {
            kind: SceneKind::Room,
            start: ROOM_SPAWN,
            facing: Direction::Down,
            bounds: BoundaryRect::new(20.0, 780.0, 20.0, 560.0),
            speed: MovementResolver::DEFAULT_SPEED,
            triggers: vec![TriggerZone::new(
                "door",
                TriggerShape::Rect {
                    x_min: 720.0,
                    x_max: f32::INFINITY,
                    y_min: 250.0,
                    y_max: 350.0,
                },
                DOOR_DELAY,
            )],
            camera: None,
            freeze_on_trigger: false,
        }
    }

    /// The outdoor field. `viewport_width` centres the follow camera.
    pub fn outdoor(viewport_width: f32) -> Self {
        Self {
            kind: SceneKind::Outdoor,
            start: OUTDOOR_SPAWN,
            facing: Direction::Right,
            bounds: BoundaryRect::new(0.0, 2000.0, 100.0, 500.0),
            speed: MovementResolver::DEFAULT_SPEED,
            triggers: vec![TriggerZone::new(
                "companion",
                TriggerShape::Radial {
                    center: COMPANION_POSITION,
                    radius: COMPANION_RADIUS,
                },
                COMPANION_DELAY,
            )],
            camera: Some(CameraConfig {
                viewport_width,
                max_offset: OUTDOOR_MAX_CAMERA_OFFSET,
            }),
            freeze_on_trigger: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawns_are_inside_bounds() {
        let room = SceneConfig::room();
        assert!(room.bounds.contains(room.start));

        let outdoor = SceneConfig::outdoor(800.0);
        assert!(outdoor.bounds.contains(outdoor.start));
    }

    #[test]
    fn spawns_start_outside_their_triggers() {
        for config in [SceneConfig::room(), SceneConfig::outdoor(800.0)] {
            for zone in &config.triggers {
                assert!(!zone.shape().contains(config.start), "{} covers spawn", zone.name());
            }
        }
    }

    #[test]
    fn companion_is_far_from_spawn() {
        assert!(OUTDOOR_SPAWN.distance_to(COMPANION_POSITION) > 1000.0);
    }
}
