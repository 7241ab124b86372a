use hexwatch_common::network::status::Status;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::board::hexagon::Hexagon;
use crate::board::layout::{self, DOTS_PER_COLUMN};
use crate::board::state::{BoardState, MenuAction};

pub const COLOR_PENDING: Color = Color::DarkGray;
const COLOR_LABEL: Color = Color::White;
const COLOR_MUTED: Color = Color::Gray;

/// Board color for a target's last known status; `None` before the first pass.
pub fn status_color(status: Option<Status>) -> Color {
    match status {
        Some(Status::Unreachable) => Color::Red,
        Some(Status::PortClosed) => Color::Blue,
        Some(Status::Healthy) => Color::Green,
        None => COLOR_PENDING,
    }
}

pub fn render(f: &mut Frame, state: &BoardState) {
    let (board_area, footer_area) = layout::split(f.area(), state.fullscreen);

    render_board(f, board_area, state);
    if let Some(area) = footer_area {
        render_footer(f, area, state);
    }
    if state.menu.is_some() {
        render_menu(f, state);
    }
}

fn render_board(f: &mut Frame, area: Rect, state: &BoardState) {
    let board = state.layout();
    let (width, height) = (board.width.max(1.0), board.height.max(1.0));

    let mut canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(Color::Black)
        .x_bounds([0.0, width])
        .y_bounds([0.0, height])
        .paint(|ctx| {
            for (idx, cell) in board.cells.iter().enumerate() {
                ctx.draw(&Hexagon {
                    cell: *cell,
                    canvas_height: height,
                    color: status_color(state.status(idx)),
                });
            }
            ctx.layer();
            for (cell, target) in board.cells.iter().zip(state.targets()) {
                let label = fit_label(&target.name, cell.size);
                let label_width = UnicodeWidthStr::width(label.as_str()) as f64;
                let x = cell.x - label_width * DOTS_PER_COLUMN / 2.0;
                ctx.print(
                    x.max(0.0),
                    height - cell.y,
                    Line::from(Span::styled(
                        label,
                        Style::default().fg(COLOR_LABEL).add_modifier(Modifier::BOLD),
                    )),
                );
            }
        });

    if !state.fullscreen {
        canvas = canvas.block(Block::bordered().title(" hexwatch "));
    }
    f.render_widget(canvas, area);
}

/// Truncates `name` to the cells a hexagon of `size` dots can hold.
fn fit_label(name: &str, size: f64) -> String {
    let max_cells = ((3.0 * size) / DOTS_PER_COLUMN).floor().max(1.0) as usize;
    if UnicodeWidthStr::width(name) <= max_cells {
        return name.to_string();
    }
    let mut label = String::new();
    for ch in name.chars() {
        let next = format!("{label}{ch}");
        if UnicodeWidthStr::width(next.as_str()) >= max_cells {
            break;
        }
        label = next;
    }
    label.push('…');
    label
}

fn render_footer(f: &mut Frame, area: Rect, state: &BoardState) {
    let mut spans: Vec<Span> = Vec::new();
    for (status, label) in [
        (Some(Status::Healthy), "healthy"),
        (Some(Status::PortClosed), "port closed"),
        (Some(Status::Unreachable), "unreachable"),
        (None, "pending"),
    ] {
        spans.push(Span::styled("■ ", Style::default().fg(status_color(status))));
        spans.push(Span::styled(format!("{label}  "), Style::default().fg(COLOR_MUTED)));
    }

    let pass = match &state.last_pass {
        Some(pass) => format!(
            "│ pass #{} at {} ({:.2}s) ",
            pass.sequence,
            pass.finished_at.format("%H:%M:%S"),
            pass.elapsed.as_secs_f64()
        ),
        None => "│ waiting for first pass ".to_string(),
    };
    spans.push(Span::styled(pass, Style::default().fg(COLOR_LABEL)));
    spans.push(Span::styled(
        "│ f fullscreen · m menu · q quit",
        Style::default().fg(COLOR_MUTED),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Popup placement for the context menu, kept inside `bounds`.
pub fn menu_area(anchor: (u16, u16), bounds: Rect) -> Rect {
    let width = MenuAction::ALL
        .iter()
        .map(|action| action.label().len() as u16)
        .max()
        .unwrap_or(0)
        + 4;
    let height = MenuAction::ALL.len() as u16 + 2;

    let x = anchor.0.min(bounds.right().saturating_sub(width)).max(bounds.x);
    let y = anchor.1.min(bounds.bottom().saturating_sub(height)).max(bounds.y);
    Rect::new(x, y, width.min(bounds.width), height.min(bounds.height))
}

fn render_menu(f: &mut Frame, state: &BoardState) {
    let Some(menu) = state.menu else {
        return;
    };
    let area = menu_area(menu.anchor, f.area());

    let lines: Vec<Line> = MenuAction::ALL
        .iter()
        .enumerate()
        .map(|(idx, action)| {
            let style = if idx == menu.selected {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default().fg(COLOR_LABEL)
            };
            Line::from(Span::styled(format!(" {} ", action.label()), style))
        })
        .collect();

    f.render_widget(Clear, area);
    f.render_widget(Paragraph::new(lines).block(Block::bordered()), area);
}
