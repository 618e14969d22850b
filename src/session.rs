use std::io::Write;

use log::{debug, info};
use rand::Rng;

use crate::actor::Actor;
use crate::command::Command;
use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::input::KeySource;
use crate::render::Renderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything one run owns: the room, the actor, and the RNG that builds
/// rooms. The RNG is never re-seeded.
pub struct Session<R: Rng> {
    grid: Grid,
    actor: Actor,
    rng: R,
    regenerations: u32,
}

impl<R: Rng> Session<R> {
    pub fn new(mut rng: R) -> Self {
        let grid = Grid::generate(&mut rng);
        info!("generated room with {} walls", grid.count(Cell::Wall));
        Self {
            grid,
            actor: Actor::default(),
            rng,
            regenerations: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn actor(&self) -> Actor {
        self.actor
    }

    pub fn regenerations(&self) -> u32 {
        self.regenerations
    }

    /// Replaces the room. The actor stays put, even if it is now inside a wall.
    pub fn regenerate(&mut self) {
        self.grid = Grid::generate(&mut self.rng);
        self.regenerations += 1;
        info!(
            "regenerated room #{} with {} walls, actor at ({}, {})",
            self.regenerations,
            self.grid.count(Cell::Wall),
            self.actor.pos.x,
            self.actor.pos.y
        );
    }

    pub fn apply(&mut self, command: Command) -> Flow {
        match command {
            Command::Move(dir) => {
                if !self.actor.try_move(&self.grid, dir) {
                    debug!(
                        "move {:?} blocked at ({}, {})",
                        dir, self.actor.pos.x, self.actor.pos.y
                    );
                }
                Flow::Continue
            }
            Command::Regenerate => {
                self.regenerate();
                Flow::Continue
            }
            Command::Quit => Flow::Quit,
        }
    }

    pub fn hud(&self) -> String {
        format!(
            "Pos: ({}, {})  Rooms: {}  (wasd move, r regenerate, q quit)",
            self.actor.pos.x,
            self.actor.pos.y,
            self.regenerations + 1
        )
    }

    /// Render, read one key, dispatch; until quit or the key source fails.
    pub fn run<K, W>(
        &mut self,
        keys: &mut K,
        out: &mut W,
        mut viewport: impl FnMut() -> Result<(u16, u16)>,
    ) -> Result<()>
    where
        K: KeySource,
        W: Write,
    {
        let mut renderer = Renderer::new();
        loop {
            let hud = self.hud();
            renderer.draw(out, &self.grid, self.actor, &hud, viewport()?)?;

            let key = keys.read_key()?;
            let Some(command) = Command::from_key(key) else {
                continue;
            };
            if self.apply(command) == Flow::Quit {
                info!("quit requested");
                return Ok(());
            }
        }
    }
}
