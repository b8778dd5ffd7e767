//! Panic and error-report hooks.
//!
//! The alternate screen has to come down before a report prints,
//! otherwise the backtrace lands on a screen the shell never shows.

use std::io::stdout;
use std::panic;

use color_eyre::config::HookBuilder;
use color_eyre::eyre::Result;
use crossterm::execute;
use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};

pub fn install_hooks() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        eprintln!("{}", panic_hook.panic_report(info));
    }));

    Ok(())
}

/// Leaves the alternate screen if raw mode is still on. Shared by the
/// panic hook and the normal TUI exit path.
pub fn restore_terminal() -> Result<()> {
    if crossterm::terminal::is_raw_mode_enabled()? {
        execute!(stdout(), LeaveAlternateScreen)?;
        disable_raw_mode()?;
    }
    Ok(())
}
