use std::collections::HashMap;

use super::player::DiscState;
use super::topology::BoardTopology;
use crate::error::GameError;

/// Per-cell disc state for one board topology.
///
/// The key set is fixed by `make_grid`; afterwards only the engine changes
/// individual cells.
#[derive(Debug, Clone)]
pub struct BoardGrid<T: BoardTopology> {
    topology: T,
    cells: Vec<T::Cell>,
    discs: HashMap<T::Cell, DiscState>,
}

impl<T: BoardTopology> BoardGrid<T> {
    /// Create a grid with no cells; call `make_grid` to populate it
    pub fn new(topology: T) -> Self {
        BoardGrid {
            topology,
            cells: Vec::new(),
            discs: HashMap::new(),
        }
    }

    pub fn topology(&self) -> &T {
        &self.topology
    }

    /// Populate every valid cell with `Empty`, discarding previous contents
    pub fn make_grid(&mut self) {
        self.cells = self.topology.cells();
        self.discs = self
            .cells
            .iter()
            .map(|&cell| (cell, DiscState::Empty))
            .collect();
    }

    /// Place the topology's opening cluster in the centre
    pub fn starter_grid(&mut self) {
        for (cell, disc) in self.topology.starter_cluster() {
            if let Some(slot) = self.discs.get_mut(&cell) {
                *slot = disc;
            }
        }
    }

    pub fn get_status(&self, cell: T::Cell) -> Result<DiscState, GameError> {
        self.discs
            .get(&cell)
            .copied()
            .ok_or_else(|| GameError::InvalidCoordinate(cell.to_string()))
    }

    /// Status of an on-board cell, `None` if the cell is not a key
    pub fn get(&self, cell: T::Cell) -> Option<DiscState> {
        self.discs.get(&cell).copied()
    }

    pub(crate) fn set_status(&mut self, cell: T::Cell, disc: DiscState) {
        if let Some(slot) = self.discs.get_mut(&cell) {
            *slot = disc;
        }
    }

    /// Cells in reading order
    pub fn cells(&self) -> &[T::Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn count(&self, disc: DiscState) -> usize {
        self.discs.values().filter(|&&d| d == disc).count()
    }

    /// Full copy of the cell-to-disc mapping
    pub fn to_map(&self) -> HashMap<T::Cell, DiscState> {
        self.discs.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Hex, HexCell, Square, SquareCell};

    #[test]
    fn test_new_grid_has_no_cells() {
        let grid = BoardGrid::new(Hex::default());
        assert!(grid.is_empty());
        assert!(grid.get_status(HexCell::new(0, 0, 0)).is_err());
    }

    #[test]
    fn test_make_grid_is_all_empty() {
        let mut grid = BoardGrid::new(Hex::default());
        grid.make_grid();
        assert_eq!(grid.len(), 91);
        assert_eq!(grid.count(DiscState::Empty), 91);
    }

    #[test]
    fn test_hex_starter_layout() {
        let mut grid = BoardGrid::new(Hex::default());
        grid.make_grid();
        grid.starter_grid();

        let expected = [
            ((0, -1, 1), DiscState::Black),
            ((1, -1, 0), DiscState::White),
            ((1, 0, -1), DiscState::Black),
            ((0, 1, -1), DiscState::White),
            ((-1, 1, 0), DiscState::Black),
            ((-1, 0, 1), DiscState::White),
            ((0, 0, 0), DiscState::Empty),
        ];
        for ((q, r, s), disc) in expected {
            assert_eq!(grid.get_status(HexCell::new(q, r, s)), Ok(disc));
        }
        assert_eq!(grid.count(DiscState::Black), 3);
        assert_eq!(grid.count(DiscState::White), 3);
    }

    #[test]
    fn test_square_starter_layout() {
        let mut grid = BoardGrid::new(Square::default());
        grid.make_grid();
        grid.starter_grid();

        assert_eq!(grid.get_status(SquareCell::new(3, 3)), Ok(DiscState::Black));
        assert_eq!(grid.get_status(SquareCell::new(4, 4)), Ok(DiscState::Black));
        assert_eq!(grid.get_status(SquareCell::new(4, 3)), Ok(DiscState::White));
        assert_eq!(grid.get_status(SquareCell::new(3, 4)), Ok(DiscState::White));
        assert_eq!(grid.count(DiscState::Empty), 60);
    }

    #[test]
    fn test_small_square_starter_layout() {
        let mut grid = BoardGrid::new(Square::new(4).unwrap());
        grid.make_grid();
        grid.starter_grid();

        assert_eq!(grid.get_status(SquareCell::new(1, 1)), Ok(DiscState::Black));
        assert_eq!(grid.get_status(SquareCell::new(2, 2)), Ok(DiscState::Black));
        assert_eq!(grid.get_status(SquareCell::new(2, 1)), Ok(DiscState::White));
        assert_eq!(grid.get_status(SquareCell::new(1, 2)), Ok(DiscState::White));
    }

    #[test]
    fn test_get_status_off_board() {
        let mut grid = BoardGrid::new(Square::default());
        grid.make_grid();
        assert_eq!(
            grid.get_status(SquareCell::new(8, 0)),
            Err(GameError::InvalidCoordinate("(8, 0)".to_string()))
        );
        assert!(grid.get_status(SquareCell::new(-1, 3)).is_err());
    }

    #[test]
    fn test_copy_is_independent() {
        let mut grid = BoardGrid::new(Hex::new(3).unwrap());
        grid.make_grid();
        let mut copy = grid.to_map();
        copy.insert(HexCell::new(0, 0, 0), DiscState::Black);
        assert_eq!(grid.get_status(HexCell::new(0, 0, 0)), Ok(DiscState::Empty));
    }
}
