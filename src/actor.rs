use crate::grid::{Grid, Pos};

pub const START: Pos = Pos::new(1, 1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];

    fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub pos: Pos,
}

impl Default for Actor {
    fn default() -> Self {
        Self { pos: START }
    }
}

impl Actor {
    pub fn new(pos: Pos) -> Self {
        Self { pos }
    }

    /// Steps one cell in `dir` unless that leaves the room or hits a wall.
    /// Returns whether the actor moved.
    pub fn try_move(&mut self, grid: &Grid, dir: Dir) -> bool {
        match target(grid, self.pos, dir) {
            Some(next) if !grid.is_wall(next) => {
                self.pos = next;
                true
            }
            _ => false,
        }
    }
}

/// The neighbouring cell in `dir`, if it lies inside the room.
fn target(grid: &Grid, pos: Pos, dir: Dir) -> Option<Pos> {
    let (dx, dy) = dir.delta();
    let nx = pos.x.checked_add_signed(dx)?;
    let ny = pos.y.checked_add_signed(dy)?;
    if nx >= grid.width() || ny >= grid.height() {
        return None;
    }
    Some(Pos::new(nx, ny))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Cell, HEIGHT, WIDTH};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;

    fn open_room() -> Grid {
        Grid::from_rows(vec![vec![Cell::Open; WIDTH]; HEIGHT]).expect("room has valid size")
    }

    #[test]
    fn up_from_start_hits_border() {
        let grid = open_room();
        let mut actor = Actor::default();
        assert!(!actor.try_move(&grid, Dir::Up));
        assert_eq!(actor.pos, Pos::new(1, 1));
    }

    #[test]
    fn right_into_open_cell_moves() {
        let mut grid = open_room();
        grid.set(Pos::new(2, 1), Cell::Open);
        let mut actor = Actor::default();
        assert!(actor.try_move(&grid, Dir::Right));
        assert_eq!(actor.pos, Pos::new(2, 1));
    }

    #[test]
    fn every_direction_is_blocked_by_walls() {
        let mut grid = open_room();
        let centre = Pos::new(10, 10);
        for pos in [
            Pos::new(10, 9),
            Pos::new(10, 11),
            Pos::new(9, 10),
            Pos::new(11, 10),
        ] {
            grid.set(pos, Cell::Wall);
        }
        for dir in Dir::ALL {
            let mut actor = Actor::new(centre);
            assert!(!actor.try_move(&grid, dir), "{dir:?} went through a wall");
            assert_eq!(actor.pos, centre);
        }
    }

    #[test]
    fn moves_change_one_axis_by_one() {
        let grid = open_room();
        let centre = Pos::new(10, 10);
        let expected = [
            (Dir::Up, Pos::new(10, 9)),
            (Dir::Down, Pos::new(10, 11)),
            (Dir::Left, Pos::new(9, 10)),
            (Dir::Right, Pos::new(11, 10)),
        ];
        for (dir, after) in expected {
            let mut actor = Actor::new(centre);
            assert!(actor.try_move(&grid, dir));
            assert_eq!(actor.pos, after);
        }
    }

    #[test]
    fn edge_of_room_never_escapes() {
        // Border cells are walls, so place the actor on them directly.
        let grid = open_room();
        let corners = [
            (Pos::new(0, 0), Dir::Up),
            (Pos::new(0, 0), Dir::Left),
            (Pos::new(WIDTH - 1, HEIGHT - 1), Dir::Down),
            (Pos::new(WIDTH - 1, HEIGHT - 1), Dir::Right),
        ];
        for (start, dir) in corners {
            let mut actor = Actor::new(start);
            assert!(!actor.try_move(&grid, dir));
            assert_eq!(actor.pos, start);
        }
    }

    #[test]
    fn random_walk_stays_in_bounds_and_off_walls() {
        let mut rng = StdRng::seed_from_u64(99);
        let grid = Grid::generate(&mut rng);
        let mut actor = Actor::default();
        for _ in 0..5_000 {
            let dir = *Dir::ALL.choose(&mut rng).unwrap();
            let before = actor.pos;
            let moved = actor.try_move(&grid, dir);
            assert!(actor.pos.x < WIDTH && actor.pos.y < HEIGHT);
            if moved {
                assert!(!grid.is_wall(actor.pos));
            } else {
                assert_eq!(actor.pos, before);
            }
        }
    }
}
