//! Plain stdout output around the TUI: banner on the way in, roll summary
//! on the way out.

use std::io::{self, Write};

use console::style;
use d20_core::utils::time::relative_time;
use d20_core::RollStats;

/// Print the startup banner. Shown before the alternate screen takes over
/// and again after it is left.
pub fn print_banner() -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(handle)?;
    writeln!(handle, "{}", style("  ╔══════════════════════════════╗").cyan())?;
    writeln!(
        handle,
        "{}{}{}",
        style("  ║").cyan(),
        style("         🎲  d 2 0  🎲        ").bold().cyan(),
        style("║").cyan()
    )?;
    writeln!(
        handle,
        "{}{}{}",
        style("  ║").cyan(),
        style("  roll for today's motivation ").dim(),
        style("║").cyan()
    )?;
    writeln!(handle, "{}", style("  ╚══════════════════════════════╝").cyan())?;
    writeln!(handle)?;
    handle.flush()
}

/// Print the closing summary after the TUI exits.
pub fn print_farewell(stats: &RollStats, session_rolls: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    writeln!(
        handle,
        "{} {} this session, {} lifetime.",
        style("Rolls:").bold(),
        session_rolls,
        stats.lifetime_rolls
    )?;
    if let Some(last) = stats.last_roll {
        writeln!(handle, "{} {}", style("Last roll:").bold(), relative_time(last))?;
    }
    handle.flush()
}
