use std::fmt;
use std::hash::Hash;
use std::ops::Add;

use super::cell::{HexCell, SquareCell};
use super::player::DiscState;
use crate::error::GridError;

/// The shape of a board: which cells exist, how they neighbour each other,
/// and how a game starts on it.
///
/// The engine is generic over this trait; `Hex` and `Square` are the two
/// shipped shapes.
pub trait BoardTopology: Clone + fmt::Debug {
    type Cell: 'static + Copy + Eq + Hash + fmt::Debug + fmt::Display + Add<Output = Self::Cell>;

    /// Short lowercase name used in logs and errors
    const NAME: &'static str;

    /// Number of cells along the board's widest axis.
    fn size(&self) -> usize;

    /// Every valid cell, in reading order.
    fn cells(&self) -> Vec<Self::Cell>;

    /// Discs placed on an empty board by `setup`.
    fn starter_cluster(&self) -> Vec<(Self::Cell, DiscState)>;

    /// Unit steps to every neighbour. The order is fixed and shared by
    /// legality checks and flipping.
    fn directions(&self) -> &'static [Self::Cell];

    /// Whether `cell` is a position on this board.
    fn contains(&self, cell: Self::Cell) -> bool;

    /// Corner cells, in reading order.
    fn corners(&self) -> Vec<Self::Cell>;

    /// Sort key placing upper rows first, then leftmost cells within a row.
    fn reading_key(&self, cell: Self::Cell) -> (i32, i32);

    /// Parse a cell typed by a person, e.g. `"2 -1 -1"` or `"5,3"`.
    fn parse_cell(&self, text: &str) -> Option<Self::Cell>;

    fn is_corner(&self, cell: Self::Cell) -> bool {
        self.corners().contains(&cell)
    }

    /// True for non-corner cells one step away from a corner
    fn is_next_to_corner(&self, cell: Self::Cell) -> bool {
        !self.is_corner(cell)
            && self
                .directions()
                .iter()
                .any(|&d| self.is_corner(cell + d))
    }
}

const HEX_DIRECTIONS: [HexCell; 6] = [
    HexCell::new(1, -1, 0),
    HexCell::new(1, 0, -1),
    HexCell::new(0, 1, -1),
    HexCell::new(-1, 1, 0),
    HexCell::new(-1, 0, 1),
    HexCell::new(0, -1, 1),
];

const SQUARE_DIRECTIONS: [SquareCell; 8] = [
    SquareCell::new(1, -1),
    SquareCell::new(1, 0),
    SquareCell::new(1, 1),
    SquareCell::new(0, 1),
    SquareCell::new(-1, 1),
    SquareCell::new(-1, 0),
    SquareCell::new(-1, -1),
    SquareCell::new(0, -1),
];

/// A hexagon-shaped board of hexagonal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hex {
    size: usize,
}

impl Hex {
    pub const DEFAULT_SIZE: usize = 11;

    /// Size must be odd and at least 3 so there is a centre cell with a
    /// full first ring around it.
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_coordinate_range(Self::NAME, size)?;
        if size % 2 == 1 && size >= 3 {
            Ok(Hex { size })
        } else {
            Err(GridError::InvalidSize {
                topology: Self::NAME,
                size,
                requirement: "must be odd and at least 3",
            })
        }
    }

    fn radius(&self) -> i32 {
        (self.size / 2) as i32
    }
}

impl Default for Hex {
    fn default() -> Self {
        Hex {
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl BoardTopology for Hex {
    type Cell = HexCell;

    const NAME: &'static str = "hex";

    fn size(&self) -> usize {
        self.size
    }

    fn cells(&self) -> Vec<HexCell> {
        let n = self.radius();
        let mut cells = Vec::new();
        for r in -n..=n {
            for q in -n..=n {
                let cell = HexCell::new(q, r, -q - r);
                if self.contains(cell) {
                    cells.push(cell);
                }
            }
        }
        cells
    }

    fn starter_cluster(&self) -> Vec<(HexCell, DiscState)> {
        vec![
            (HexCell::new(0, -1, 1), DiscState::Black),
            (HexCell::new(1, -1, 0), DiscState::White),
            (HexCell::new(1, 0, -1), DiscState::Black),
            (HexCell::new(0, 1, -1), DiscState::White),
            (HexCell::new(-1, 1, 0), DiscState::Black),
            (HexCell::new(-1, 0, 1), DiscState::White),
        ]
    }

    fn directions(&self) -> &'static [HexCell] {
        &HEX_DIRECTIONS
    }

    fn contains(&self, cell: HexCell) -> bool {
        cell.is_cube() && cell.ring() <= self.radius()
    }

    fn corners(&self) -> Vec<HexCell> {
        let n = self.radius();
        vec![
            HexCell::new(0, -n, n),
            HexCell::new(n, -n, 0),
            HexCell::new(-n, 0, n),
            HexCell::new(n, 0, -n),
            HexCell::new(-n, n, 0),
            HexCell::new(0, n, -n),
        ]
    }

    fn reading_key(&self, cell: HexCell) -> (i32, i32) {
        (cell.r, cell.q)
    }

    fn parse_cell(&self, text: &str) -> Option<HexCell> {
        match parse_ints(text)?.as_slice() {
            &[q, r, s] => Some(HexCell::new(q, r, s)),
            _ => None,
        }
    }
}

/// A square board of square cells, as in classic Othello.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Square {
    size: usize,
}

impl Square {
    pub const DEFAULT_SIZE: usize = 8;

    /// Size must be even and greater than 2 so there is a 2x2 centre block.
    pub fn new(size: usize) -> Result<Self, GridError> {
        check_coordinate_range(Self::NAME, size)?;
        if size % 2 == 0 && size > 2 {
            Ok(Square { size })
        } else {
            Err(GridError::InvalidSize {
                topology: Self::NAME,
                size,
                requirement: "must be even and greater than 2",
            })
        }
    }

    fn last(&self) -> i32 {
        self.size as i32 - 1
    }
}

impl Default for Square {
    fn default() -> Self {
        Square {
            size: Self::DEFAULT_SIZE,
        }
    }
}

impl BoardTopology for Square {
    type Cell = SquareCell;

    const NAME: &'static str = "square";

    fn size(&self) -> usize {
        self.size
    }

    fn cells(&self) -> Vec<SquareCell> {
        let size = self.size as i32;
        (0..size)
            .flat_map(|y| (0..size).map(move |x| SquareCell::new(x, y)))
            .collect()
    }

    fn starter_cluster(&self) -> Vec<(SquareCell, DiscState)> {
        let m = (self.size / 2) as i32 - 1;
        vec![
            (SquareCell::new(m, m), DiscState::Black),
            (SquareCell::new(m + 1, m + 1), DiscState::Black),
            (SquareCell::new(m + 1, m), DiscState::White),
            (SquareCell::new(m, m + 1), DiscState::White),
        ]
    }

    fn directions(&self) -> &'static [SquareCell] {
        &SQUARE_DIRECTIONS
    }

    fn contains(&self, cell: SquareCell) -> bool {
        let range = 0..self.size as i32;
        range.contains(&cell.x) && range.contains(&cell.y)
    }

    fn corners(&self) -> Vec<SquareCell> {
        let last = self.last();
        vec![
            SquareCell::new(0, 0),
            SquareCell::new(last, 0),
            SquareCell::new(0, last),
            SquareCell::new(last, last),
        ]
    }

    fn reading_key(&self, cell: SquareCell) -> (i32, i32) {
        (cell.y, cell.x)
    }

    fn parse_cell(&self, text: &str) -> Option<SquareCell> {
        match parse_ints(text)?.as_slice() {
            &[x, y] => Some(SquareCell::new(x, y)),
            _ => None,
        }
    }
}

/// Coordinates are `i32`, so every index along an axis must fit in one
fn check_coordinate_range(topology: &'static str, size: usize) -> Result<(), GridError> {
    match i32::try_from(size) {
        Ok(_) => Ok(()),
        Err(_) => Err(GridError::InvalidSize {
            topology,
            size,
            requirement: "must fit in 32-bit coordinates",
        }),
    }
}

fn parse_ints(text: &str) -> Option<Vec<i32>> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}
