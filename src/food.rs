use crate::snake::Position;

/// Food entity currently active on the board.
///
/// Spawning and scoring stay with the embedding game; the core only needs to
/// know which cell is occupied.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Creates a food at `position`.
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }
}
