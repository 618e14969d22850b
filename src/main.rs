use std::error::Error as _;
use std::io::{self, Stdout};
use std::process::ExitCode;

use crossterm::cursor::{Hide, Show};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;

use roomwalk::config::Settings;
use roomwalk::input::TerminalKeys;
use roomwalk::{app, logging, Error, Result};

fn main() -> ExitCode {
    let outcome = start();
    if let Err(err) = &outcome {
        eprintln!("roomwalk: {err}");
        let mut source = err.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {cause}");
            source = cause.source();
        }
    }
    ExitCode::from(app::exit_status(&outcome))
}

fn start() -> Result<()> {
    let settings = Settings::from_env()?;
    logging::init(&settings)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().map_err(Error::RawMode)?;
    let outcome = enter_screen(&mut stdout).and_then(|()| {
        app::play(&settings, &mut TerminalKeys, &mut stdout, || {
            Ok(terminal::size()?)
        })
    });

    app::settle(outcome, leave_screen(&mut stdout))
}

fn enter_screen(stdout: &mut Stdout) -> Result<()> {
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;
    Ok(())
}

/// Runs every restore step even if an earlier one fails, so raw mode is
/// always released.
fn leave_screen(stdout: &mut Stdout) -> Result<()> {
    let shown = stdout.execute(Show).map(|_| ());
    let left = stdout.execute(LeaveAlternateScreen).map(|_| ());
    let raw = terminal::disable_raw_mode();
    Ok(shown.and(left).and(raw)?)
}
