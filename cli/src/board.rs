//! The hexagon board: one colored hexagon per target, redrawn when a pass
//! changes something and re-laid out when the terminal settles after a
//! resize.

mod events;
mod hexagon;
mod layout;
mod state;
mod ui;

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{self as term, EnterAlternateScreen, LeaveAlternateScreen};
use hexwatch_common::network::target::Target;
use hexwatch_core::scheduler::PassReport;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::sync::watch;
use tracing::{debug, warn};

use state::BoardState;

const INPUT_POLL: Duration = Duration::from_millis(100);

/// Raw mode and the alternate screen for as long as the session lives.
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> anyhow::Result<Self> {
        term::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            let _ = term::disable_raw_mode();
            return Err(e.into());
        }
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(Self { terminal })
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = term::disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Runs the board until the user exits, then tells the scheduler to stop.
pub fn run(
    targets: Vec<Target>,
    mut reports: UnboundedReceiver<PassReport>,
    shutdown: watch::Sender<bool>,
) -> anyhow::Result<()> {
    let mut session = TerminalSession::enter()?;
    let size = term::size()?;
    let mut state = BoardState::new(targets, size);
    let mut scheduler_alive = true;

    while state.running {
        while scheduler_alive {
            match reports.try_recv() {
                Ok(report) => {
                    let changed = state.apply_results(&report);
                    debug!("Pass {} applied, changed: {changed}", report.sequence);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Scheduler stopped delivering results");
                    scheduler_alive = false;
                }
            }
        }

        state.settle_resize(Instant::now());
        if state.take_dirty() {
            session.terminal.draw(|f| ui::render(f, &state))?;
        }

        if event::poll(INPUT_POLL)? {
            events::handle(&mut state, event::read()?, Instant::now());
        }
    }

    let _ = shutdown.send(true);
    Ok(())
}
