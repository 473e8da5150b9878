use std::fmt;
use std::ops::Add;

/// A position on a hexagonal board in cube coordinates.
///
/// On-board cells satisfy `q + r + s == 0`. Any triple can be constructed so
/// that callers can hand the engine a coordinate it must reject; the board
/// never stores a cell that breaks the invariant. `r` grows downward and `q`
/// grows rightward along a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexCell {
    pub q: i32,
    pub r: i32,
    pub s: i32,
}

impl HexCell {
    pub const fn new(q: i32, r: i32, s: i32) -> Self {
        HexCell { q, r, s }
    }

    /// Whether the cube-coordinate invariant holds
    pub fn is_cube(self) -> bool {
        self.q + self.r + self.s == 0
    }

    /// Distance from the origin, in rings
    pub fn ring(self) -> i32 {
        self.q.abs().max(self.r.abs()).max(self.s.abs())
    }
}

impl Add for HexCell {
    type Output = HexCell;

    fn add(self, rhs: HexCell) -> HexCell {
        HexCell::new(self.q + rhs.q, self.r + rhs.r, self.s + rhs.s)
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.q, self.r, self.s)
    }
}

/// A position on a square board. `(0, 0)` is the top-left corner, `x` is the
/// column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SquareCell {
    pub x: i32,
    pub y: i32,
}

impl SquareCell {
    pub const fn new(x: i32, y: i32) -> Self {
        SquareCell { x, y }
    }
}

impl Add for SquareCell {
    type Output = SquareCell;

    fn add(self, rhs: SquareCell) -> SquareCell {
        SquareCell::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for SquareCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
