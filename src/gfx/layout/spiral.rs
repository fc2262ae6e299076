//! # Square Spiral Walk
//!
//! Cells are visited ring by ring, counter-clockwise in cell coordinates
//! (`x` to the right, `y` up), first moving along +x:
//!
//! ```text
//! (0,0) -> (1,0) -> (1,1) -> (0,1) -> (-1,1) -> (-1,0) -> (-1,-1)
//!       -> (0,-1) -> (1,-1) -> (2,-1) -> (2,0) -> (2,1) -> (2,2) -> ...
//! ```
//!
//! Ring `r` is entered at `(r, 1 - r)`, climbs to `(r, r)`, runs left to
//! `(-r, r)`, down to `(-r, -r)`, right to `(r, -r)` and then steps out to
//! `(r + 1, -r)`. [`SpiralCell::next`] derives the step from the cell alone,
//! so the walk needs no state besides the current cell.

/// A grid cell on the ground plane. `x` maps to world X, `y` to world Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpiralCell {
    pub x: i32,
    pub y: i32,
}

impl SpiralCell {
    pub const ORIGIN: SpiralCell = SpiralCell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance from the origin, i.e. which ring the cell is on.
    pub fn ring(&self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// The cell after this one on the spiral.
    pub fn next(self) -> SpiralCell {
        let Self { x, y } = self;
        let r = self.ring();

        if r == 0 || (x == r && y == -r) {
            // Start, or bottom-right corner: step out onto the next ring
            Self::new(x + 1, y)
        } else if x == r && y < r {
            Self::new(x, y + 1)
        } else if y == r && x > -r {
            Self::new(x - 1, y)
        } else if x == -r && y > -r {
            Self::new(x, y - 1)
        } else {
            Self::new(x + 1, y)
        }
    }
}

/// Iterator over the spiral starting at a given cell (inclusive).
#[derive(Debug, Clone)]
pub struct SpiralWalk {
    cell: SpiralCell,
}

impl SpiralWalk {
    pub fn new() -> Self {
        Self::from(SpiralCell::ORIGIN)
    }
}

impl Default for SpiralWalk {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SpiralCell> for SpiralWalk {
    fn from(cell: SpiralCell) -> Self {
        Self { cell }
    }
}

impl Iterator for SpiralWalk {
    type Item = SpiralCell;

    fn next(&mut self) -> Option<SpiralCell> {
        let cell = self.cell;
        self.cell = cell.next();
        Some(cell)
    }
}
