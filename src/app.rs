use std::io::Write;

use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::Settings;
use crate::error::Result;
use crate::input::KeySource;
use crate::session::Session;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => {
            info!("seeding room generator with {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => {
            info!("seeding room generator from entropy");
            StdRng::from_entropy()
        }
    }
}

/// Runs one session until the quit key or a terminal failure.
pub fn play<K, W>(
    settings: &Settings,
    keys: &mut K,
    out: &mut W,
    viewport: impl FnMut() -> Result<(u16, u16)>,
) -> Result<()>
where
    K: KeySource,
    W: Write,
{
    let mut session = Session::new(seeded_rng(settings.seed));
    session.run(keys, out, viewport)
}

/// Combines the session outcome with the terminal restore. The session's own
/// error is reported first.
pub fn settle(outcome: Result<()>, restored: Result<()>) -> Result<()> {
    outcome.and(restored)
}

pub fn exit_status(outcome: &Result<()>) -> u8 {
    match outcome {
        Ok(()) => EXIT_OK,
        Err(_) => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::input::ScriptedKeys;
    use std::io;

    fn settings(seed: u64) -> Settings {
        Settings {
            seed: Some(seed),
            log_filter: "info".to_string(),
            log_file: None,
        }
    }

    fn terminal_error() -> Error {
        io::Error::new(io::ErrorKind::Other, "restore failed").into()
    }

    #[test]
    fn quit_key_exits_zero() {
        let mut keys = ScriptedKeys::new("ddrq");
        let mut out = Vec::new();
        let outcome = play(&settings(3), &mut keys, &mut out, || Ok((120, 60)));
        assert!(outcome.is_ok());
        assert_eq!(exit_status(&outcome), EXIT_OK);
    }

    #[test]
    fn failing_key_source_exits_one() {
        let mut keys = ScriptedKeys::new("dd");
        let mut out = Vec::new();
        let outcome = play(&settings(3), &mut keys, &mut out, || Ok((120, 60)));
        assert!(matches!(outcome, Err(Error::Terminal(_))));
        assert_eq!(exit_status(&outcome), EXIT_FAILURE);
    }

    #[test]
    fn session_error_wins_over_restore_error() {
        let outcome = Err(Error::InvalidSetting {
            var: "X",
            value: "y".to_string(),
        });
        let settled = settle(outcome, Err(terminal_error()));
        assert!(matches!(settled, Err(Error::InvalidSetting { .. })));
    }

    #[test]
    fn restore_error_surfaces_after_clean_quit() {
        let settled = settle(Ok(()), Err(terminal_error()));
        assert!(matches!(settled, Err(Error::Terminal(_))));
        assert_eq!(exit_status(&settled), EXIT_FAILURE);
        assert!(settle(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn same_seed_same_first_room() {
        let a = Session::new(seeded_rng(Some(21)));
        let b = Session::new(seeded_rng(Some(21)));
        assert_eq!(a.grid(), b.grid());
    }
}
