use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

use crate::board::layout::HexCell;

/// Filled hexagon with pointed top and bottom, three times as wide as half
/// its height.
///
/// `y` is measured from the top of the board; `canvas_height` flips it into
/// the canvas coordinate system, whose origin is bottom-left.
pub struct Hexagon {
    pub cell: HexCell,
    pub canvas_height: f64,
    pub color: Color,
}

const STEP: f64 = 0.5;

impl Hexagon {
    /// Horizontal half-extent of the hexagon at vertical offset `dy` from its centre.
    pub fn half_width_at(&self, dy: f64) -> f64 {
        let size = self.cell.size;
        let dy = dy.abs();
        if dy > size {
            0.0
        } else if dy <= size / 2.0 {
            1.5 * size
        } else {
            3.0 * (size - dy)
        }
    }
}

impl Shape for Hexagon {
    fn draw(&self, painter: &mut Painter) {
        let HexCell { x, y, size } = self.cell;
        let cy = self.canvas_height - y;

        let mut dy = -size;
        while dy <= size {
            let half = self.half_width_at(dy);
            let mut dx = -half;
            while dx <= half {
                if let Some((px, py)) = painter.get_point(x + dx, cy + dy) {
                    painter.paint(px, py, self.color);
                }
                dx += STEP;
            }
            dy += STEP;
        }
    }
}
