use std::fs::File;

use env_logger::{Builder, Target};

use crate::config::Settings;
use crate::error::{Error, Result};

/// Installs a file-backed logger. The terminal is the drawing surface, so
/// nothing is logged unless a log file is configured.
pub fn init(settings: &Settings) -> Result<()> {
    let Some(path) = settings.log_file.as_ref() else {
        return Ok(());
    };
    let file = File::create(path).map_err(|source| Error::LogFile {
        path: path.clone(),
        source,
    })?;
    Builder::new()
        .parse_filters(&settings.log_filter)
        .target(Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}
