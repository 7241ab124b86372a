use std::time::Instant;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::board::state::{BoardState, MenuAction};
use crate::board::ui;

pub fn handle(state: &mut BoardState, event: Event, now: Instant) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => on_key(state, key),
        Event::Mouse(mouse) => on_mouse(state, mouse),
        Event::Resize(width, height) => state.on_resize(width, height, now),
        _ => {}
    }
}

fn on_key(state: &mut BoardState, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit();
        return;
    }

    if state.menu.is_some() {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => state.move_selection(false),
            KeyCode::Down | KeyCode::Char('j') => state.move_selection(true),
            KeyCode::Enter => state.activate(None),
            KeyCode::Esc | KeyCode::Char('m') => state.close_menu(),
            KeyCode::Char('q') => state.quit(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.quit(),
        KeyCode::Char('f') | KeyCode::F(11) => state.toggle_fullscreen(),
        KeyCode::Char('m') => {
            let area = state.terminal_area();
            state.open_menu((area.width / 2, area.height / 2));
        }
        _ => {}
    }
}

fn on_mouse(state: &mut BoardState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Right) => state.open_menu((mouse.column, mouse.row)),
        MouseEventKind::Down(MouseButton::Left) => {
            let Some(menu) = state.menu else {
                return;
            };
            let area = ui::menu_area(menu.anchor, state.terminal_area());
            let inside = mouse.column > area.x
                && mouse.column < area.right().saturating_sub(1)
                && mouse.row > area.y
                && mouse.row < area.bottom().saturating_sub(1);

            if inside {
                let idx = usize::from(mouse.row - area.y - 1);
                state.activate(MenuAction::ALL.get(idx).copied());
            } else {
                state.close_menu();
            }
        }
        _ => {}
    }
}
