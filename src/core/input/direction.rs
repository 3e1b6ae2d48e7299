//=========================================================================
// Directions
//=========================================================================
//
// Canonical movement directions and a compact set of held directions.
//
// Several raw keys alias the same direction (`W` and `ArrowUp` both mean
// Up). Everything past the input tracker works with directions only.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::event::KeyCode;

//=== Direction ===========================================================

/// Facing / movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Resolution order used by the movement step. Later entries win the
    /// facing when several directions are held.
    pub const EVALUATION_ORDER: [Direction; 4] =
        [Direction::Left, Direction::Right, Direction::Up, Direction::Down];

    /// Maps a movement key to its direction (`None` for other keys).
    pub fn from_key(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::KeyA | KeyCode::ArrowLeft => Some(Self::Left),
            KeyCode::KeyD | KeyCode::ArrowRight => Some(Self::Right),
            KeyCode::KeyW | KeyCode::ArrowUp => Some(Self::Up),
            KeyCode::KeyS | KeyCode::ArrowDown => Some(Self::Down),
            _ => None,
        }
    }

    /// Unit step along this direction, screen space (y grows downward).
    pub fn delta(self) -> (f32, f32) {
        match self {
            Self::Left => (-1.0, 0.0),
            Self::Right => (1.0, 0.0),
            Self::Up => (0.0, -1.0),
            Self::Down => (0.0, 1.0),
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Left => 0b0001,
            Self::Right => 0b0010,
            Self::Up => 0b0100,
            Self::Down => 0b1000,
        }
    }
}

//=== DirectionSet ========================================================

/// Set of held directions, cheap to copy into the movement step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: Self = Self(0);

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    pub fn contains(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates held directions in [`Direction::EVALUATION_ORDER`].
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::EVALUATION_ORDER
            .into_iter()
            .filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_map_to_same_direction() {
        assert_eq!(Direction::from_key(KeyCode::KeyW), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::ArrowUp), Some(Direction::Up));
        assert_eq!(Direction::from_key(KeyCode::KeyA), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::ArrowLeft), Some(Direction::Left));
        assert_eq!(Direction::from_key(KeyCode::Enter), None);
    }

    #[test]
    fn set_iterates_in_evaluation_order() {
        let set: DirectionSet = [Direction::Down, Direction::Left, Direction::Up]
            .into_iter()
            .collect();

        let order: Vec<_> = set.iter().collect();
        assert_eq!(order, vec![Direction::Left, Direction::Up, Direction::Down]);
        assert_eq!(set.iter().count(), 3);
    }

    #[test]
    fn empty_set() {
        assert!(DirectionSet::EMPTY.is_empty());
        assert_eq!(DirectionSet::default(), DirectionSet::EMPTY);
        assert_eq!(DirectionSet::EMPTY.iter().count(), 0);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = DirectionSet::EMPTY;
        set.insert(Direction::Right);
        set.insert(Direction::Right);
        assert_eq!(set.iter().count(), 1);
        assert!(set.contains(Direction::Right));
    }
}
