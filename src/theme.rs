use ratatui::style::Color;

/// Head and tail colors applied to one snake.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ColorPair {
    pub head: Color,
    pub tail: Color,
}

/// Classic white head on a green body.
pub const PAIR_CLASSIC: ColorPair = ColorPair {
    head: Color::White,
    tail: Color::Green,
};

/// Ocean cyan pair.
pub const PAIR_OCEAN: ColorPair = ColorPair {
    head: Color::White,
    tail: Color::Cyan,
};

/// Neon magenta pair.
pub const PAIR_NEON: ColorPair = ColorPair {
    head: Color::Yellow,
    tail: Color::Magenta,
};

/// Gray pair a snake switches to when it dies.
pub const PAIR_DEAD: ColorPair = ColorPair {
    head: Color::Rgb(0x55, 0x55, 0x55),
    tail: Color::Rgb(0x77, 0x77, 0x77),
};

/// Selectable pairs in cycle order. The dead pair is excluded; it is applied
/// by the snake itself.
pub const PAIRS: &[ColorPair] = &[PAIR_CLASSIC, PAIR_OCEAN, PAIR_NEON];
