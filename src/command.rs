use crate::actor::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Dir),
    Regenerate,
    Quit,
}

impl Command {
    /// Key bindings. Unbound keys map to `None` and are ignored by the caller.
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Command::Move(Dir::Up)),
            'a' => Some(Command::Move(Dir::Left)),
            's' => Some(Command::Move(Dir::Down)),
            'd' => Some(Command::Move(Dir::Right)),
            'r' => Some(Command::Regenerate),
            'q' => Some(Command::Quit),
            _ => None,
        }
    }
}
