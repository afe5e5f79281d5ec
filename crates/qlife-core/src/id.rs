//! Value types identifying cells and generations.

use std::fmt;
use std::ops::{Add, Div, Mul, Rem, Sub};

/// A cell position `(x, y)`: `x` is the column, `y` the row.
///
/// Positions are plain values with structural equality and hashing, so
/// they can be used directly as set members and map keys. They are not
/// tied to any grid; negative and out-of-range values are legal and are
/// wrapped by the topology that resolves them.
///
/// Component-wise arithmetic is provided for offset computation.
/// `Div` and `Rem` panic on a zero component, like the integer operators
/// they forward to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl Position {
    /// Construct a position from column and row.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise Euclidean remainder; both components of the result
    /// are non-negative for positive moduli.
    pub fn rem_euclid(self, modulus: Position) -> Self {
        Self {
            x: self.x.rem_euclid(modulus.x),
            y: self.y.rem_euclid(modulus.y),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Position> for (i32, i32) {
    fn from(p: Position) -> Self {
        (p.x, p.y)
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul for Position {
    type Output = Position;

    fn mul(self, rhs: Position) -> Position {
        Position::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Mul<i32> for Position {
    type Output = Position;

    fn mul(self, rhs: i32) -> Position {
        Position::new(self.x * rhs, self.y * rhs)
    }
}

impl Div for Position {
    type Output = Position;

    fn div(self, rhs: Position) -> Position {
        Position::new(self.x / rhs.x, self.y / rhs.y)
    }
}

impl Rem for Position {
    type Output = Position;

    fn rem(self, rhs: Position) -> Position {
        Position::new(self.x % rhs.x, self.y % rhs.y)
    }
}

/// Monotonically increasing generation counter.
///
/// Generation 0 is the initial population; each `iterate()` advances it
/// by one, including iterations that leave the cells unchanged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The following generation.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
