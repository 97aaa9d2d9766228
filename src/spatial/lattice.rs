//! Lattice geometry and gate matrices for kolam grid walks
//!
//! A grid of dimension `ND` spans an `(ND+1) × (ND+1)` lattice of integer
//! coordinate pairs. Traversal is constrained by a boundary predicate and by
//! a gate matrix whose positive cells permit direction changes while zero
//! cells block traversal entirely.

use ndarray::Array2;

/// Sentinel value marking an open gate cell in a freshly built matrix
pub const OPEN_GATE: u8 = 99;

/// Boundary rule determining which lattice points are valid for traversal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundaryKind {
    /// Manhattan-distance diamond centered on the grid
    Diamond,
    /// No restriction; every lattice point counts as inside
    Open,
}

/// Geometry of the `(ND+1) × (ND+1)` dot-grid lattice
///
/// Leaf component shared by both walkers. Positions are integer pairs
/// `[i, j]`; the diamond predicate uses integer division so odd and even
/// dimensions both center correctly.
#[derive(Clone, Copy, Debug)]
pub struct Lattice {
    dimension: usize,
    boundary: BoundaryKind,
}

impl Lattice {
    /// Create a lattice for grid dimension `ND`
    ///
    /// Callers validate `ND` before construction; the walkers assume a
    /// positive dimension.
    pub const fn new(dimension: usize, boundary: BoundaryKind) -> Self {
        Self {
            dimension,
            boundary,
        }
    }

    /// Grid dimension `ND`
    pub const fn dimension(&self) -> usize {
        self.dimension
    }

    /// Lattice extent per axis, `ND + 1`
    pub const fn extent(&self) -> usize {
        self.dimension + 1
    }

    /// Grid center `(ND/2, ND/2)` using integer division
    pub const fn center(&self) -> [i32; 2] {
        let c = (self.dimension / 2) as i32;
        [c, c]
    }

    /// Whether a position satisfies the boundary predicate
    ///
    /// For the diamond boundary this is `|i − ND/2| + |j − ND/2| ≤ ND/2`.
    pub const fn is_inside(&self, pos: [i32; 2]) -> bool {
        match self.boundary {
            BoundaryKind::Diamond => {
                let r = (self.dimension / 2) as i32;
                (pos[0] - r).abs() + (pos[1] - r).abs() <= r
            }
            BoundaryKind::Open => true,
        }
    }

    /// Whether a position is strictly interior, `0 < i, j < ND`
    ///
    /// Coverage strokes only grow through interior cells; the outermost
    /// rows and columns are permanently closed.
    pub const fn is_interior(&self, pos: [i32; 2]) -> bool {
        let hi = self.dimension as i32;
        pos[0] > 0 && pos[0] < hi && pos[1] > 0 && pos[1] < hi
    }
}

/// Gate and flag matrices built fresh for every generation call
///
/// The gate matrix controls traversal: a positive cell is an open gate where
/// the walk may change direction, a zero cell blocks traversal. The flag
/// matrix records which cells still participate in gate logic; it is mutated
/// in lockstep during construction and stays constant afterwards.
#[derive(Clone, Debug)]
pub struct GateField {
    gates: Array2<u8>,
    flags: Array2<u8>,
}

impl GateField {
    /// Build matrices with the boundary rows and columns closed
    ///
    /// Every interior cell starts at the open sentinel; the four edge rows
    /// and columns are zeroed in both matrices.
    pub fn bounded(extent: usize) -> Self {
        let mut field = Self {
            gates: Array2::from_elem((extent, extent), OPEN_GATE),
            flags: Array2::ones((extent, extent)),
        };

        let hi = extent.saturating_sub(1) as i32;
        for k in 0..extent as i32 {
            field.close([0, k]);
            field.close([k, 0]);
            field.close([hi, k]);
            field.close([k, hi]);
        }

        field
    }

    /// Build matrices with both main diagonals closed as well
    ///
    /// The coverage walk treats diagonal cells `(i, i)` and `(i, ND − i)` as
    /// fixed-direction constraints: no stroke passes through them.
    pub fn with_closed_diagonals(extent: usize) -> Self {
        let mut field = Self::bounded(extent);

        let hi = extent.saturating_sub(1) as i32;
        for i in 1..hi {
            field.close([i, i]);
            field.close([i, hi - i]);
        }

        field
    }

    /// Close the gate at a position, blocking traversal through it
    pub fn close(&mut self, pos: [i32; 2]) {
        if let Some(index) = self.index(pos) {
            if let Some(gate) = self.gates.get_mut(index) {
                *gate = 0;
            }
            if let Some(flag) = self.flags.get_mut(index) {
                *flag = 0;
            }
        }
    }

    /// Whether the gate at a position is open
    ///
    /// Out-of-range positions count as closed.
    pub fn is_open(&self, pos: [i32; 2]) -> bool {
        self.index(pos)
            .and_then(|index| self.gates.get(index))
            .copied()
            .unwrap_or(0)
            > 0
    }

    /// Whether a cell has been withdrawn from gate logic
    ///
    /// True for boundary cells and, in coverage fields, diagonal cells.
    pub fn is_fixed(&self, pos: [i32; 2]) -> bool {
        self.index(pos)
            .and_then(|index| self.flags.get(index))
            .copied()
            .unwrap_or(0)
            == 0
    }

    fn index(&self, pos: [i32; 2]) -> Option<[usize; 2]> {
        let extent = self.gates.nrows() as i32;
        (pos[0] >= 0 && pos[0] < extent && pos[1] >= 0 && pos[1] < extent)
            .then_some([pos[0] as usize, pos[1] as usize])
    }
}
