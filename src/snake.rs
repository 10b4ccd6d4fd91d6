use std::collections::VecDeque;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::food::Food;
use crate::grid::Grid;
use crate::input::Direction;
use crate::render::{PixelRect, RenderTarget};
use crate::rng::random_int;
use crate::theme::{ColorPair, PAIR_DEAD};

/// Grid position in logical cell coordinates.
///
/// Coordinates may leave the grid during intermediate arithmetic; collision
/// detection normalizes them afterwards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Returns true when the position lies inside the grid.
    #[must_use]
    pub fn is_within_bounds(self, grid: Grid) -> bool {
        self.x >= 0
            && self.y >= 0
            && self.x < i32::from(grid.columns)
            && self.y < i32::from(grid.rows)
    }

    /// Returns this position wrapped into the grid on both axes.
    #[must_use]
    pub fn wrapped(self, grid: Grid) -> Self {
        Self {
            x: wrap_axis(self.x, i32::from(grid.columns)),
            y: wrap_axis(self.y, i32::from(grid.rows)),
        }
    }
}

fn wrap_axis(value: i32, upper_bound: i32) -> i32 {
    let wrapped = value % upper_bound;
    if wrapped < 0 {
        wrapped + upper_bound
    } else {
        wrapped
    }
}

/// Wall contact behavior.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum WallCollisionMode {
    /// Out-of-range coordinates re-enter from the opposite edge.
    WrapAround,
    /// Leaving the grid kills the snake.
    Death,
}

/// Why a snake died.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum DeathReason {
    WallCollision,
    SelfCollision,
}

/// Construction failure: no start cell satisfies the border margin.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum SnakeError {
    #[error("snake of length {length} does not fit a {columns}x{rows} grid with border margin")]
    DoesNotFit {
        length: usize,
        columns: u16,
        rows: u16,
    },
}

/// Mutable snake state: movement, growth, collision, and input buffering.
///
/// The snake is exclusively owned by the game loop driving it. One tick runs
/// [`Self::update_direction`] -> [`Self::move_forward`] ->
/// [`Self::detect_collision`]; the caller then checks [`Self::eat`] and
/// applies [`Self::grow`]. A dead snake is not moved further by well-behaved
/// callers.
#[derive(Debug, Clone)]
pub struct Snake {
    direction: Direction,
    head: Position,
    /// Body segments behind the head, nearest first.
    tail: VecDeque<Position>,
    /// Pending direction commands, oldest first.
    input_buffer: VecDeque<Direction>,
    alive: bool,
    colors: ColorPair,
    wall_mode: WallCollisionMode,
    death_reason: Option<DeathReason>,
}

impl Snake {
    /// Places a snake of `length` cells at a random interior position.
    ///
    /// The direction is chosen uniformly at random, then the head is chosen
    /// uniformly from the cells where the whole body, grown backward from the
    /// head, stays at least one cell away from every border. Fails with
    /// [`SnakeError::DoesNotFit`] when no such cell exists for the chosen
    /// direction. Lengths below 1 are clamped to 1.
    pub fn new<R: Rng + ?Sized>(
        length: usize,
        colors: ColorPair,
        grid: Grid,
        rng: &mut R,
    ) -> Result<Self, SnakeError> {
        let length = length.max(1);
        let direction = Direction::random(rng);
        let range = start_range(length, direction, grid)?;

        let head = Position {
            x: random_int(rng, range.left, range.right),
            y: random_int(rng, range.top, range.bottom),
        };

        let snake = Self::from_head(head, direction, length, colors);
        debug!(
            "placed snake: head ({}, {}), length {length}, heading {direction:?}",
            head.x, head.y
        );
        Ok(snake)
    }

    /// Creates a snake at an explicit position, tail grown backward from
    /// `head` along the negated direction.
    ///
    /// No margin check is applied; callers supply an in-bounds placement.
    /// Lengths below 1 are clamped to 1.
    #[must_use]
    pub fn from_head(
        head: Position,
        direction: Direction,
        length: usize,
        colors: ColorPair,
    ) -> Self {
        let length = length.max(1);
        let back = direction.opposite();

        let mut tail = VecDeque::with_capacity(length - 1);
        let mut segment = head;
        for _ in 1..length {
            segment = Position {
                x: segment.x + back.dx(),
                y: segment.y + back.dy(),
            };
            tail.push_back(segment);
        }

        Self {
            direction,
            head,
            tail,
            input_buffer: VecDeque::new(),
            alive: true,
            colors,
            wall_mode: WallCollisionMode::WrapAround,
            death_reason: None,
        }
    }

    /// Queues a direction command for later consumption.
    ///
    /// The filter keeps the queue meaningful without bounding its growth:
    /// - empty buffer: a command same-or-opposed to the *current* direction
    ///   is dropped;
    /// - more than one pending command: a command same-or-opposed to the
    ///   *last buffered* one is dropped;
    /// - exactly one pending command: the pending command is discarded and
    ///   the new one enqueued unconditionally, so fresher input wins.
    pub fn buffer_input_command(&mut self, new_direction: Direction) {
        match self.input_buffer.len() {
            0 => {
                if new_direction.is_same_or_opposed(self.direction) {
                    return;
                }
            }
            1 => {
                self.input_buffer.pop_front();
            }
            _ => {
                if self
                    .input_buffer
                    .back()
                    .is_some_and(|last| new_direction.is_same_or_opposed(*last))
                {
                    return;
                }
            }
        }

        self.input_buffer.push_back(new_direction);
    }

    /// Consumes the oldest buffered command, if any.
    ///
    /// A command same-or-opposed to the current direction is discarded and no
    /// further commands are tried this call. Invoked at most once per tick,
    /// before [`Self::move_forward`].
    pub fn update_direction(&mut self) {
        let Some(next) = self.input_buffer.pop_front() else {
            return;
        };

        if next.is_same_or_opposed(self.direction) {
            return;
        }

        self.direction = next;
    }

    /// Advances the head one cell along the current direction.
    ///
    /// A non-empty tail shifts worm-style: the pre-move head becomes the
    /// nearest tail segment and the oldest segment is dropped. A one-cell
    /// snake skips the shift but still advances.
    pub fn move_forward(&mut self) {
        if !self.tail.is_empty() {
            self.tail.push_front(self.head);
            self.tail.pop_back();
        }

        self.head.x += self.direction.dx();
        self.head.y += self.direction.dy();
    }

    /// Normalizes the head against the walls, then checks the tail.
    ///
    /// In [`WallCollisionMode::WrapAround`] an out-of-range head re-enters
    /// from the opposite edge first, so a wrapped head can die against a
    /// segment near the opposite border in the same tick. In
    /// [`WallCollisionMode::Death`] leaving the grid is fatal and the tail
    /// check is skipped.
    pub fn detect_collision(&mut self, grid: Grid) {
        debug_assert!(grid.columns > 0 && grid.rows > 0);

        match self.wall_mode {
            WallCollisionMode::WrapAround => {
                self.head = self.head.wrapped(grid);
            }
            WallCollisionMode::Death => {
                if !self.head.is_within_bounds(grid) {
                    self.death_reason = Some(DeathReason::WallCollision);
                    self.die();
                    return;
                }
            }
        }

        if self.tail.contains(&self.head) {
            self.death_reason = Some(DeathReason::SelfCollision);
            self.die();
        }
    }

    /// Returns true when the head occupies the food's cell.
    #[must_use]
    pub fn eat(&self, food: &Food) -> bool {
        self.head == food.position
    }

    /// Adds one tail segment at the head's cell, without removal.
    ///
    /// The duplicate cell resolves as the body crawls forward on following
    /// ticks; the net effect is one more segment.
    pub fn grow(&mut self) {
        self.tail.push_front(self.head);
    }

    /// Marks the snake dead and switches it to the dead palette.
    ///
    /// Calling it again on a dead snake has no effect.
    pub fn die(&mut self) {
        if !self.alive {
            return;
        }

        self.alive = false;
        self.colors = PAIR_DEAD;
        match self.death_reason {
            Some(reason) => debug!("snake died: {reason:?}"),
            None => debug!("snake died"),
        }
    }

    /// Draws every segment as a filled `scale × scale` rect.
    pub fn draw<T: RenderTarget + ?Sized>(&self, target: &mut T, grid: Grid) {
        let scale = i32::from(grid.scale);

        target.set_fill_color(self.colors.tail);
        for segment in &self.tail {
            target.fill_rect(segment.x * scale, segment.y * scale, scale, scale);
        }

        target.set_fill_color(self.colors.head);
        target.fill_rect(self.head.x * scale, self.head.y * scale, scale, scale);
    }

    /// Fills the stretch rect for sub-cell movement progress `distance`.
    ///
    /// Uses the target's current fill color; nothing is filled when either
    /// side of the rect truncates to zero pixels.
    pub fn animate<T: RenderTarget + ?Sized>(&self, target: &mut T, grid: Grid, distance: f64) {
        let rect = self.animation_rect(grid, distance);
        if rect.width != 0 && rect.height != 0 {
            target.fill_rect(rect.x, rect.y, rect.width, rect.height);
        }
    }

    /// Returns the rectangle covering the head's sub-cell progress.
    ///
    /// `distance` is the fraction of the next cell already traveled, in
    /// `0.0..=1.0`. The rect spans one full cell across the movement axis and
    /// `distance` cells along it, leading the head; coordinates are scaled to
    /// render pixels and truncated toward zero, with leftward and upward
    /// stretches rounding one pixel outward.
    #[must_use]
    pub fn animation_rect(&self, grid: Grid, distance: f64) -> PixelRect {
        let scale = f64::from(grid.scale);
        let dx = self.direction.dx();
        let dy = self.direction.dy();

        let mut x = f64::from(self.head.x);
        let mut y = f64::from(self.head.y);
        let width = if dx == 0 { 1.0 } else { distance };
        let height = if dy == 0 { 1.0 } else { distance };

        if dx != 0 {
            x += if dx < 0 { -distance } else { 1.0 };
        }
        if dy != 0 {
            y += if dy < 0 { -distance } else { 1.0 };
        }

        let mut rect = PixelRect {
            x: (x * scale) as i32,
            y: (y * scale) as i32,
            width: (width * scale) as i32,
            height: (height * scale) as i32,
        };

        if dx < 0 {
            rect.width += 1;
        }
        if dy < 0 {
            rect.height += 1;
        }

        rect
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Position {
        self.head
    }

    /// Returns the current movement direction.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns false once the snake has died.
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Returns the current head/tail colors.
    #[must_use]
    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    /// Returns what killed the snake, when collision detection did.
    #[must_use]
    pub fn death_reason(&self) -> Option<DeathReason> {
        self.death_reason
    }

    /// Iterates over tail segments, nearest the head first.
    pub fn segments(&self) -> impl Iterator<Item = &Position> {
        self.tail.iter()
    }

    /// Returns the total number of occupied cells, head included.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.tail.len() + 1
    }

    /// Returns true if any segment, head included, occupies `position`.
    #[must_use]
    pub fn occupies(&self, position: Position) -> bool {
        self.head == position || self.tail.contains(&position)
    }

    /// Returns the current wall contact behavior.
    #[must_use]
    pub fn wall_collision_mode(&self) -> WallCollisionMode {
        self.wall_mode
    }

    /// Switches the wall contact behavior.
    pub fn set_wall_collision_mode(&mut self, mode: WallCollisionMode) {
        self.wall_mode = mode;
    }
}

struct StartRange {
    left: i32,
    top: i32,
    right: i32,
    bottom: i32,
}

/// Start cells keeping the whole body one cell away from every border.
fn start_range(length: usize, direction: Direction, grid: Grid) -> Result<StartRange, SnakeError> {
    let columns = i32::from(grid.columns);
    let rows = i32::from(grid.rows);
    // Lengths beyond any sane grid saturate and fall out as DoesNotFit.
    let margin = i32::try_from(length - 1).unwrap_or(i32::MAX / 2);

    let range = StartRange {
        left: 1 + if direction.dx() > 0 { margin } else { 0 },
        top: 1 + if direction.dy() > 0 { margin } else { 0 },
        right: columns - 2 - if direction.dx() < 0 { margin } else { 0 },
        bottom: rows - 2 - if direction.dy() < 0 { margin } else { 0 },
    };

    if range.left > range.right || range.top > range.bottom {
        warn!(
            "no room for a length {length} snake heading {direction:?} on a {columns}x{rows} grid"
        );
        return Err(SnakeError::DoesNotFit {
            length,
            columns: grid.columns,
            rows: grid.rows,
        });
    }

    Ok(range)
}
