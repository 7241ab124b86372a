use std::collections::HashMap;
use std::time::{Duration, Instant};

use chrono::{DateTime, Local};
use hexwatch_common::network::status::Status;
use hexwatch_common::network::target::{Target, TargetId};
use hexwatch_core::scheduler::PassReport;
use ratatui::layout::Rect;

use crate::board::layout::{self, BoardLayout};

/// Quiet period after the last resize event before hexagons are re-laid out.
pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ToggleFullscreen,
    Exit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 2] = [MenuAction::ToggleFullscreen, MenuAction::Exit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::ToggleFullscreen => "Toggle Fullscreen",
            MenuAction::Exit => "Exit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContextMenu {
    /// Terminal cell the menu was opened at.
    pub anchor: (u16, u16),
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PassSummary {
    pub sequence: u64,
    pub finished_at: DateTime<Local>,
    pub elapsed: Duration,
}

/// Everything the board shows. Owned by the board loop; the scheduler only
/// reaches it through [`BoardState::apply_results`].
pub struct BoardState {
    targets: Vec<Target>,
    index: HashMap<TargetId, usize>,
    statuses: Vec<Option<Status>>,
    layout: BoardLayout,
    terminal: (u16, u16),
    pending_resize: Option<Instant>,
    pub fullscreen: bool,
    pub menu: Option<ContextMenu>,
    pub last_pass: Option<PassSummary>,
    pub running: bool,
    dirty: bool,
}

impl BoardState {
    /// Initial layout: every target placed, none probed yet.
    pub fn new(targets: Vec<Target>, terminal: (u16, u16)) -> Self {
        let index = targets
            .iter()
            .enumerate()
            .map(|(idx, target)| (target.id.clone(), idx))
            .collect();
        let statuses = vec![None; targets.len()];

        let mut state = Self {
            targets,
            index,
            statuses,
            layout: BoardLayout::default(),
            terminal,
            pending_resize: None,
            fullscreen: false,
            menu: None,
            last_pass: None,
            running: true,
            dirty: true,
        };
        state.relayout();
        state
    }

    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn status(&self, idx: usize) -> Option<Status> {
        self.statuses.get(idx).copied().flatten()
    }

    /// Recolors from a finished pass. Returns whether any hexagon changed.
    pub fn apply_results(&mut self, report: &PassReport) -> bool {
        let mut changed = false;
        for result in &report.results {
            let Some(&idx) = self.index.get(&result.target_id) else {
                continue;
            };
            if self.statuses[idx] != Some(result.status) {
                self.statuses[idx] = Some(result.status);
                changed = true;
            }
        }

        self.last_pass = Some(PassSummary {
            sequence: report.sequence,
            finished_at: Local::now(),
            elapsed: report.elapsed(),
        });

        // The footer shows the pass number, so chrome needs a redraw anyway.
        if changed || !self.fullscreen {
            self.dirty = true;
        }
        changed
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
        self.relayout();
    }

    pub fn on_resize(&mut self, width: u16, height: u16, now: Instant) {
        self.terminal = (width, height);
        self.pending_resize = Some(now);
        self.dirty = true;
    }

    /// Re-lays out once resizing has been quiet for [`RESIZE_DEBOUNCE`].
    pub fn settle_resize(&mut self, now: Instant) {
        if let Some(since) = self.pending_resize
            && now.saturating_duration_since(since) >= RESIZE_DEBOUNCE
        {
            self.relayout();
        }
    }

    pub fn open_menu(&mut self, anchor: (u16, u16)) {
        self.menu = Some(ContextMenu { anchor, selected: 0 });
        self.dirty = true;
    }

    pub fn close_menu(&mut self) {
        if self.menu.take().is_some() {
            self.dirty = true;
        }
    }

    pub fn move_selection(&mut self, down: bool) {
        if let Some(menu) = self.menu.as_mut() {
            let len = MenuAction::ALL.len();
            menu.selected = if down {
                (menu.selected + 1) % len
            } else {
                (menu.selected + len - 1) % len
            };
            self.dirty = true;
        }
    }

    /// Runs the highlighted menu entry, or `action` when given, and closes the menu.
    pub fn activate(&mut self, action: Option<MenuAction>) {
        let Some(menu) = self.menu.take() else {
            return;
        };
        match action.unwrap_or(MenuAction::ALL[menu.selected]) {
            MenuAction::ToggleFullscreen => self.toggle_fullscreen(),
            MenuAction::Exit => self.quit(),
        }
        self.dirty = true;
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Whether a redraw is due, clearing the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn terminal_area(&self) -> Rect {
        Rect::new(0, 0, self.terminal.0, self.terminal.1)
    }

    fn relayout(&mut self) {
        let canvas = layout::canvas_area(self.terminal_area(), self.fullscreen);
        self.layout = layout::arrange_in(canvas, self.targets.len());
        self.pending_resize = None;
        self.dirty = true;
    }
}
