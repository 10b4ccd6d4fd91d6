use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::rng::random_int;

/// Canonical movement directions for snake input.
///
/// Each direction is a unit vector in grid cells: `Left (-1, 0)`,
/// `Right (1, 0)`, `Up (0, -1)`, `Down (0, 1)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in the order used for random selection.
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Returns the x component of the unit vector.
    #[must_use]
    pub fn dx(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
            Self::Up | Self::Down => 0,
        }
    }

    /// Returns the y component of the unit vector.
    #[must_use]
    pub fn dy(self) -> i32 {
        match self {
            Self::Up => -1,
            Self::Down => 1,
            Self::Left | Self::Right => 0,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Picks a direction uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = random_int(rng, 0, 3);
        Self::ALL[index as usize]
    }

    /// Returns true when the two unit vectors share either axis component,
    /// exactly or negated.
    ///
    /// On the four axis-aligned directions this matches exactly the identical
    /// and reversed pairs: a reversal agrees on its zero component, while
    /// perpendicular directions share nothing on either axis. Movement code
    /// uses it to reject turns that would be no-ops or instant reversals.
    #[must_use]
    pub fn is_same_or_opposed(self, other: Self) -> bool {
        let (x1, y1) = (self.dx(), self.dy());
        let (x2, y2) = (other.dx(), other.dy());

        x1 == x2 || x1 == -x2 || y1 == y2 || y1 == -y2
    }
}
