use super::{EngineError, LifeEngine};

/// Represents a pattern that can be stamped onto the grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(r, _)| *r).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, c)| *c).max().unwrap_or(0) + 1;
        Self { name, description, rows, cols, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at (row, col).
    /// Nothing is written unless the whole pattern fits.
    pub fn place_on(&self, engine: &mut LifeEngine, row: usize, col: usize) -> Result<(), EngineError> {
        let (rows, cols) = engine.dimensions();
        let fits = |anchor: usize, extent: usize, limit: usize| {
            anchor.checked_add(extent).is_some_and(|end| end <= limit)
        };
        if !fits(row, self.rows, rows) || !fits(col, self.cols, cols) {
            return Err(EngineError::OutOfBounds {
                row: row.saturating_add(self.rows - 1),
                col: col.saturating_add(self.cols - 1),
                rows,
                cols,
            });
        }
        self.cells
            .iter()
            .try_for_each(|&(dr, dc)| engine.set(row + dr, col + dc, true))
    }
}

/// Small classic patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator, horizontal phase
    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 0), (0, 1), (0, 2)])
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), glider(), toad(), beacon()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(engine: &LifeEngine) -> Vec<(usize, usize)> {
        engine
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test]
    fn test_bounding_box() {
        let glider = presets::glider();
        assert_eq!((glider.rows, glider.cols), (3, 3));
        let blinker = presets::blinker();
        assert_eq!((blinker.rows, blinker.cols), (1, 3));
    }

    #[test]
    fn test_place_offsets_cells() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        presets::block().place_on(&mut engine, 3, 4).unwrap();
        assert_eq!(snapshot(&engine), vec![(3, 4), (3, 5), (4, 4), (4, 5)]);
    }

    #[test]
    fn test_place_rejects_overhang_without_writing() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        let result = presets::glider().place_on(&mut engine, 3, 0);
        assert!(matches!(result, Err(EngineError::OutOfBounds { .. })));
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_place_rejects_huge_anchor() {
        let mut engine = LifeEngine::new(5, 5).unwrap();
        let result = presets::block().place_on(&mut engine, usize::MAX, 0);
        assert!(matches!(
            result,
            Err(EngineError::OutOfBounds { row: usize::MAX, .. })
        ));
        assert!(presets::block().place_on(&mut engine, 0, usize::MAX - 1).is_err());
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn test_presets_have_unique_names() {
        let names: Vec<_> = presets::all_patterns().iter().map(|p| p.name).collect();
        let mut unique = names.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(names.len(), unique.len());
    }

    #[test]
    fn test_period_two_oscillators() {
        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut engine = LifeEngine::new(8, 8).unwrap();
            pattern.place_on(&mut engine, 2, 2).unwrap();
            let start = snapshot(&engine);

            engine.step();
            assert_ne!(snapshot(&engine), start, "{} did not change", pattern.name);
            engine.step();
            assert_eq!(snapshot(&engine), start, "{} did not return", pattern.name);
        }
    }

    #[test]
    fn test_glider_translates_diagonally() {
        let mut engine = LifeEngine::new(10, 10).unwrap();
        presets::glider().place_on(&mut engine, 0, 0).unwrap();
        let start = snapshot(&engine);

        for _ in 0..4 {
            engine.step();
        }

        let shifted: Vec<_> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(snapshot(&engine), shifted);
    }
}
