use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::terminal::colors;

const TICK: Duration = Duration::from_millis(100);
const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

static PROGRESS: OnceLock<MultiProgress> = OnceLock::new();

/// Every spinner is drawn through this one target so log lines can be
/// printed above them.
pub fn progress() -> &'static MultiProgress {
    PROGRESS.get_or_init(MultiProgress::new)
}

/// Starts a loading spinner. `hidden` still yields a bar, it just never draws.
pub fn start_loading(message: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let pb: ProgressBar = progress().add(ProgressBar::new_spinner());
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb.set_message(format!("{}", message.color(colors::TEXT_DEFAULT)));
    pb.enable_steady_tick(TICK);
    pb
}

pub fn stop_loading(pb: ProgressBar) {
    pb.finish_and_clear();
    progress().remove(&pb);
}

/// Log writer that suspends any live spinner while a line is written.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        progress().suspend(|| std::io::stdout().write_all(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
