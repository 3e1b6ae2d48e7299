//=========================================================================
// Movement Resolver
//=========================================================================
//
// One discrete movement step.
//
// Each held direction moves its own axis by `speed`, evaluated in the
// order Left, Right, Up, Down. The last held direction in that order
// becomes the facing. The vector is not normalized, so a diagonal step
// covers `speed` on both axes. The result is always clamped into the
// scene bounds.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::{BoundaryRect, Position};
use crate::core::input::{Direction, DirectionSet};

//=== MovementStep ========================================================

/// Result of resolving one tick of movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementStep {
    pub position: Position,
    pub direction: Direction,
    pub moving: bool,
}

//=== MovementResolver ====================================================

/// Applies held directions to a position at a fixed per-tick speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementResolver {
    speed: f32,
}

impl MovementResolver {
    /// Distance covered per tick along each held axis.
    pub const DEFAULT_SPEED: f32 = 4.0;

    /// # Panics
    ///
    /// Panics if `speed` is negative or not finite.
    pub fn new(speed: f32) -> Self {
        assert!(speed.is_finite() && speed >= 0.0, "Speed must be finite and non-negative, got {}", speed);
        Self { speed }
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Resolves one step.
    pub fn step(
        &self,
        held: DirectionSet,
        position: Position,
        direction: Direction,
        bounds: &BoundaryRect,
    ) -> MovementStep {
        if held.is_empty() {
            return MovementStep { position, direction, moving: false };
        }

        let mut next = position;
        let mut facing = direction;

        for held_direction in held.iter() {
            let (dx, dy) = held_direction.delta();
            next.x += dx * self.speed;
            next.y += dy * self.speed;
            facing = held_direction;
        }

        MovementStep {
            position: bounds.clamp(next),
            direction: facing,
            moving: true,
        }
    }
}

impl Default for MovementResolver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SPEED)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
