//=========================================================================
// Trigger Zones
//=========================================================================
//
// One-shot regions that end a scene when the player enters them.
//
// A zone is armed when its scene is mounted. The first evaluation that
// finds the player inside disarms it and reports the hit; the scene then
// schedules its exit after the zone's presentation delay. Zones never
// re-arm; a fresh set is built every time a scene is mounted.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::geometry::Position;

//=== TriggerShape ========================================================

/// Region covered by a trigger zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TriggerShape {
    /// Open rectangle: the player must be strictly inside every bound.
    /// Use `f32::NEG_INFINITY` / `f32::INFINITY` for unbounded sides.
    Rect {
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    },

    /// Circle: the player must be strictly closer than `radius`.
    Radial { center: Position, radius: f32 },
}

impl TriggerShape {
    /// Returns `true` if `position` lies inside the region.
    pub fn contains(&self, position: Position) -> bool {
        match *self {
            Self::Rect { x_min, x_max, y_min, y_max } => {
                position.x > x_min && position.x < x_max && position.y > y_min && position.y < y_max
            }
            Self::Radial { center, radius } => position.distance_to(center) < radius,
        }
    }
}

//=== TriggerZone =========================================================

/// Named one-shot region with a presentation delay.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerZone {
    name: &'static str,
    shape: TriggerShape,
    delay: Duration,
    armed: bool,
}

impl TriggerZone {
    /// Creates an armed zone.
    pub fn new(name: &'static str, shape: TriggerShape, delay: Duration) -> Self {
        Self { name, shape, delay, armed: true }
    }

    /// Tests `position` against the zone. Fires (and disarms) at most once.
    pub fn evaluate(&mut self, position: Position) -> bool {
        if !self.armed || !self.shape.contains(position) {
            return false;
        }

        self.armed = false;
        debug!("Trigger '{}' fired at ({}, {})", self.name, position.x, position.y);
        true
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn shape(&self) -> &TriggerShape {
        &self.shape
    }

    /// Wait between firing and the scene exit.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn door() -> TriggerZone {
        TriggerZone::new(
            "door",
            TriggerShape::Rect {
                x_min: 720.0,
                x_max: f32::INFINITY,
                y_min: 250.0,
                y_max: 350.0,
            },
            Duration::from_millis(500),
        )
    }

    fn companion() -> TriggerZone {
        TriggerZone::new(
            "companion",
            TriggerShape::Radial { center: Position::new(1800.0, 250.0), radius: 80.0 },
            Duration::from_millis(1000),
        )
    }

    #[test]
    fn rect_fires_inside_band() {
        let mut zone = door();
        assert!(zone.evaluate(Position::new(724.0, 300.0)));
        assert!(!zone.is_armed());
    }

    #[test]
    fn rect_bounds_are_strict() {
        let mut zone = door();
        assert!(!zone.evaluate(Position::new(720.0, 300.0)));
        assert!(!zone.evaluate(Position::new(760.0, 250.0)));
        assert!(!zone.evaluate(Position::new(760.0, 350.0)));
        assert!(zone.is_armed());
    }

    #[test]
    fn rect_ignores_positions_outside_band() {
        let mut zone = door();
        assert!(!zone.evaluate(Position::new(780.0, 100.0)));
        assert!(!zone.evaluate(Position::new(400.0, 300.0)));
    }

    #[test]
    fn fires_only_once() {
        let mut zone = door();
        assert!(zone.evaluate(Position::new(724.0, 300.0)));
        assert!(!zone.evaluate(Position::new(728.0, 300.0)));

        // Leave and re-enter
        assert!(!zone.evaluate(Position::new(400.0, 300.0)));
        assert!(!zone.evaluate(Position::new(724.0, 300.0)));
    }

    #[test]
    fn radial_fires_at_center() {
        let mut zone = companion();
        assert!(zone.evaluate(Position::new(1800.0, 250.0)));
    }

    #[test]
    fn radial_boundary_is_exclusive() {
        let mut zone = companion();
        assert!(!zone.evaluate(Position::new(1880.0, 250.0)));
        assert!(!zone.evaluate(Position::new(1800.0, 330.0)));
        assert!(zone.is_armed());

        assert!(zone.evaluate(Position::new(1879.9, 250.0)));
    }

    #[test]
    fn delay_and_name_are_exposed() {
        let zone = companion();
        assert_eq!(zone.name(), "companion");
        assert_eq!(zone.delay(), Duration::from_millis(1000));
        assert!(matches!(zone.shape(), TriggerShape::Radial { .. }));
    }
}
