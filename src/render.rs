use ratatui::buffer::Buffer;
use ratatui::style::{Color, Style};

/// Screen-space rectangle in render pixels.
///
/// Coordinates may be negative while a shape hangs off the drawable area;
/// targets clip when they paint.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Fill-style drawing surface the snake renders onto.
///
/// Mirrors the two primitives the drawing code needs from a canvas: an
/// ambient fill color and axis-aligned filled rectangles in render pixels.
pub trait RenderTarget {
    /// Sets the fill color used by subsequent [`Self::fill_rect`] calls.
    fn set_fill_color(&mut self, color: Color);

    /// Fills the axis-aligned rectangle at `(x, y)` sized `width × height`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32);
}

/// Glyph painted for filled cells.
const GLYPH_FILL: &str = "█";

/// Render target painting solid block glyphs into a ratatui buffer.
///
/// Render pixels map one-to-one to terminal cells, so embeddings normally
/// use a grid `scale` of 1. Rectangles are clipped to the buffer area.
pub struct BufferCanvas<'a> {
    buffer: &'a mut Buffer,
    fill: Color,
}

impl<'a> BufferCanvas<'a> {
    /// Wraps `buffer` with a neutral fill color.
    pub fn new(buffer: &'a mut Buffer) -> Self {
        Self {
            buffer,
            fill: Color::Reset,
        }
    }
}

impl RenderTarget for BufferCanvas<'_> {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let area = self.buffer.area;
        let left = x.max(i32::from(area.left()));
        let top = y.max(i32::from(area.top()));
        let right = (x + width).min(i32::from(area.right()));
        let bottom = (y + height).min(i32::from(area.bottom()));

        let style = Style::new().fg(self.fill);
        for row in top..bottom {
            for column in left..right {
                let (Ok(column), Ok(row)) = (u16::try_from(column), u16::try_from(row)) else {
                    continue;
                };
                self.buffer.set_string(column, row, GLYPH_FILL, style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;
    use ratatui::style::Color;

    use super::{BufferCanvas, GLYPH_FILL, RenderTarget};

    #[test]
    fn fill_rect_paints_cells_with_the_current_color() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 8, 4));
        let mut canvas = BufferCanvas::new(&mut buffer);

        canvas.set_fill_color(Color::Red);
        canvas.fill_rect(2, 1, 2, 2);

        let painted = buffer.cell((2u16, 1u16)).expect("cell should exist");
        assert_eq!(painted.symbol(), GLYPH_FILL);
        assert_eq!(painted.fg, Color::Red);

        let untouched = buffer.cell((4u16, 1u16)).expect("cell should exist");
        assert_eq!(untouched.symbol(), " ");
    }

    #[test]
    fn rectangles_are_clipped_to_the_buffer() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 4, 3));
        let mut canvas = BufferCanvas::new(&mut buffer);

        canvas.set_fill_color(Color::Blue);
        canvas.fill_rect(-2, -1, 4, 3);

        let inside = buffer.cell((1u16, 1u16)).expect("cell should exist");
        assert_eq!(inside.symbol(), GLYPH_FILL);

        let outside = buffer.cell((2u16, 2u16)).expect("cell should exist");
        assert_eq!(outside.symbol(), " ");
    }

    #[test]
    fn fill_color_persists_across_rectangles() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 6, 2));
        let mut canvas = BufferCanvas::new(&mut buffer);

        canvas.set_fill_color(Color::Green);
        canvas.fill_rect(0, 0, 1, 1);
        canvas.fill_rect(3, 0, 1, 1);

        for x in [0u16, 3u16] {
            let cell = buffer.cell((x, 0u16)).expect("cell should exist");
            assert_eq!(cell.fg, Color::Green);
        }
    }
}
