use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

const FALLBACK: UiPrefs = UiPrefs {
    color: false,
    progress: false,
    term_width: None,
};

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let is_tty = std::io::stdout().is_terminal();
    let table = flags.format == OutputFormat::Table;

    let color = match flags.color {
        ColorMode::Always => table,
        ColorMode::Never => false,
        ColorMode::Auto => {
            is_tty && table && !flags.quiet && std::env::var_os("NO_COLOR").is_none()
        }
    };

    // Spinners draw on stderr, but never next to machine-readable output.
    // In auto mode they also stay out of the way of debug logs.
    let stderr_tty = std::io::stderr().is_terminal();
    let progress = match flags.progress {
        ProgressMode::Off => false,
        ProgressMode::On => stderr_tty && table,
        ProgressMode::Auto => stderr_tty && table && !flags.quiet && !flags.verbose,
    };

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        color,
        progress,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&FALLBACK)
}
