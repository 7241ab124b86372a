use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();
static SPINNING: AtomicBool = AtomicBool::new(false);

fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]);
    pb.set_style(style);
    pb
}

pub fn start(msg: String) {
    let pb = get_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    SPINNING.store(true, Ordering::Relaxed);
}

pub fn finish() {
    SPINNING.store(false, Ordering::Relaxed);
    get_spinner().finish_and_clear();
}

/// Routes formatted log lines above the spinner while it is spinning.
pub struct SpinnerWriter;

impl std::io::Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf);
        let msg = msg.trim_end();
        let pb = get_spinner();
        if SPINNING.load(Ordering::Relaxed) && !pb.is_hidden() {
            pb.println(msg);
        } else {
            println!("{msg}");
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
