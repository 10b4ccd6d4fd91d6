use serde::{Deserialize, Serialize};

/// Logical grid dimensions passed through the game as a named type.
///
/// `columns` and `rows` are measured in cells and expected to be at least 1.
/// `scale` is the render cell size in pixels and is only read by the drawing
/// paths.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: u16,
    pub rows: u16,
    pub scale: u16,
}
