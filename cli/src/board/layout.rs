//! Hexagon placement on the board canvas.
//!
//! All geometry is in braille dots: a terminal cell is 2 dots wide and 4 dots
//! tall, which makes one dot roughly square. Rows are laid out top-down.

use ratatui::layout::{Constraint, Layout, Rect};

pub const DOTS_PER_COLUMN: f64 = 2.0;
pub const DOTS_PER_ROW: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexCell {
    pub x: f64,
    pub y: f64,
    /// Half the hexagon height; the width is three times this.
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BoardLayout {
    pub width: f64,
    pub height: f64,
    pub cells: Vec<HexCell>,
}

/// Splits the terminal into the board and, outside fullscreen, a footer line.
pub fn split(area: Rect, fullscreen: bool) -> (Rect, Option<Rect>) {
    if fullscreen {
        return (area, None);
    }
    let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);
    (chunks[0], Some(chunks[1]))
}

/// Area left for hexagons once the border is drawn.
pub fn canvas_area(area: Rect, fullscreen: bool) -> Rect {
    let (board, _) = split(area, fullscreen);
    if fullscreen {
        board
    } else {
        Rect {
            x: board.x.saturating_add(1),
            y: board.y.saturating_add(1),
            width: board.width.saturating_sub(2),
            height: board.height.saturating_sub(2),
        }
    }
}

pub fn arrange_in(area: Rect, count: usize) -> BoardLayout {
    arrange(
        count,
        f64::from(area.width) * DOTS_PER_COLUMN,
        f64::from(area.height) * DOTS_PER_ROW,
    )
}

/// Sizes hexagons from the target count and the canvas, then fills rows
/// left to right.
pub fn arrange(count: usize, width: f64, height: f64) -> BoardLayout {
    if count == 0 || width < 1.0 || height < 1.0 {
        return BoardLayout { width, height, cells: Vec::new() };
    }

    let by_width = (width / (count / 2 + 1) as f64).floor();
    let by_height = (height / (count / 3 + 1) as f64).floor();
    let size = (by_width.min(by_height) / 4.0).floor().max(1.0);
    let spacing = (size / 2.0).floor();

    let pitch_x = 3.0 * size + spacing;
    let pitch_y = 2.0 * size + spacing;
    let per_row = ((width / pitch_x).floor() as usize).max(1);

    let cells = (0..count)
        .map(|i| {
            let row = (i / per_row) as f64;
            let col = (i % per_row) as f64;
            HexCell {
                x: pitch_x * col + pitch_x / 2.0,
                y: pitch_y * row + pitch_y / 2.0,
                size,
            }
        })
        .collect();

    BoardLayout { width, height, cells }
}
