use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not put the terminal into raw mode")]
    RawMode(#[source] io::Error),

    #[error("terminal i/o failed")]
    Terminal(#[from] io::Error),

    #[error("invalid value {value:?} for {var}: expected an unsigned integer")]
    InvalidSetting { var: &'static str, value: String },

    #[error("could not open log file {}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("logger already installed")]
    Logger(#[from] log::SetLoggerError),
}
