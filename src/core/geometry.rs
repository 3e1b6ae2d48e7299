//=========================================================================
// Geometry
//=========================================================================
//
// Pixel-space points and axis-aligned bounds shared by movement,
// triggers and the camera.
//
// Coordinates are screen space: origin top-left, y grows downward.
//
//=========================================================================

//=== Position ============================================================

/// A point in world pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Position) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

//=== BoundaryRect ========================================================

/// Inclusive axis-aligned bounds used to clamp the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryRect {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl BoundaryRect {
    /// Creates bounds from inclusive ranges.
    ///
    /// # Panics
    ///
    /// Panics if a minimum exceeds its maximum.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        assert!(x_min <= x_max, "x_min ({}) must not exceed x_max ({})", x_min, x_max);
        assert!(y_min <= y_max, "y_min ({}) must not exceed y_max ({})", y_min, y_max);
        Self { x_min, x_max, y_min, y_max }
    }

    /// Returns the closest point inside the bounds.
    pub fn clamp(&self, position: Position) -> Position {
        Position {
            x: position.x.clamp(self.x_min, self.x_max),
            y: position.y.clamp(self.y_min, self.y_max),
        }
    }

    /// Inclusive containment test.
    pub fn contains(&self, position: Position) -> bool {
        (self.x_min..=self.x_max).contains(&position.x)
            && (self.y_min..=self.y_max).contains(&position.y)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
