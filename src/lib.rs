//! Core movement, growth, collision, and input-buffering rules for a
//! grid-based snake game.
//!
//! The [`snake::Snake`] state machine owns all gameplay state; the embedding
//! program owns the game loop, food placement, scoring, and the screen. One
//! tick runs `update_direction` -> `move_forward` -> `detect_collision`, after
//! which the caller checks `eat` and applies `grow`. Rendering through
//! [`render::RenderTarget`] is a pure read of current state.

pub mod food;
pub mod grid;
pub mod input;
pub mod render;
pub mod rng;
pub mod snake;
pub mod theme;
