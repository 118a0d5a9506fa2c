use super::{Cell, EngineError};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Relative offsets of the 8 Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// LifeEngine owns a fixed-size grid and advances it one generation at a time.
/// Cells outside the grid are always dead (no wraparound).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeEngine {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl LifeEngine {
    /// Create a new engine with all cells dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0)
            .ok_or(EngineError::InvalidDimension { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; len],
        })
    }

    /// Grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert (row, col) to an index, rejecting out-of-range coordinates
    fn index(&self, row: usize, col: usize) -> Result<usize, EngineError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(EngineError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Read a cell, failing outside the grid
    pub fn cell_at(&self, row: usize, col: usize) -> Result<bool, EngineError> {
        let idx = self.index(row, col)?;
        Ok(self.cells[idx].is_alive())
    }

    /// Set a cell to a specific state
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), EngineError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = Cell::from(alive);
        Ok(())
    }

    /// Flip a single cell
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), EngineError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Set every cell alive with probability 0.5 from the supplied source
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(0.5)));
    }

    /// Randomize from a fresh generator seeded with `seed`
    pub fn randomize_seeded(&mut self, seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        self.randomize(&mut rng);
    }

    /// Count live cells among the 8 Moore neighbors.
    /// Positions outside the grid count as dead.
    ///
    /// `row`/`col` themselves may be anywhere; only in-bounds neighbors are read.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let r = row.checked_add_signed(dr)?;
                let c = col.checked_add_signed(dc)?;
                (r < self.rows && c < self.cols).then(|| self.cells[r * self.cols + c])
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Advance one generation.
    ///
    /// The next generation is computed into a fresh buffer from the current one
    /// and then swapped in whole, so every neighbor count reads the previous
    /// generation.
    pub fn step(&mut self) {
        let next: Vec<Cell> = (0..self.rows)
            .flat_map(|row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| {
                let current = self.cells[row * self.cols + col];
                current.evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        self.cells = next;
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row-major
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}
