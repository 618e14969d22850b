//! Walk a single actor around a randomly walled terminal room.

pub mod actor;
pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod logging;
pub mod render;
pub mod session;

pub use actor::{Actor, Dir};
pub use command::Command;
pub use error::{Error, Result};
pub use grid::{Cell, Grid, Pos, HEIGHT, WIDTH};
pub use session::{Flow, Session};
