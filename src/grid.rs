use rand::Rng;

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 40;
/// Chance that an interior cell becomes a wall.
pub const WALL_CHANCE: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A walled room of `WIDTH` x `HEIGHT` cells, indexed `[y][x]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Builds a fresh room. The border is always wall; every interior cell
    /// draws one sample from `rng`.
    pub fn generate(rng: &mut impl Rng) -> Self {
        let mut cells = vec![vec![Cell::Open; WIDTH]; HEIGHT];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = if is_border(Pos::new(x, y)) || rng.gen_bool(WALL_CHANCE) {
                    Cell::Wall
                } else {
                    Cell::Open
                };
            }
        }
        Self { cells }
    }

    /// Builds a room from explicit rows. Rows must all be `WIDTH` long and
    /// there must be `HEIGHT` of them; the border is forced to wall.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<Self> {
        if rows.len() != HEIGHT || rows.iter().any(|row| row.len() != WIDTH) {
            return None;
        }
        let mut cells = rows;
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                if is_border(Pos::new(x, y)) {
                    *cell = Cell::Wall;
                }
            }
        }
        Some(Self { cells })
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }

    pub fn cell(&self, pos: Pos) -> Option<Cell> {
        self.cells.get(pos.y).and_then(|row| row.get(pos.x)).copied()
    }

    pub fn is_wall(&self, pos: Pos) -> bool {
        self.cell(pos) == Some(Cell::Wall)
    }

    /// Overwrites one interior cell. Border and out-of-room positions are
    /// left alone.
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        if is_border(pos) {
            return;
        }
        if let Some(slot) = self.cells.get_mut(pos.y).and_then(|row| row.get_mut(pos.x)) {
            *slot = cell;
        }
    }

    pub fn count(&self, kind: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell == kind)
            .count()
    }
}

pub fn is_border(pos: Pos) -> bool {
    pos.x == 0 || pos.y == 0 || pos.x == WIDTH - 1 || pos.y == HEIGHT - 1
}
