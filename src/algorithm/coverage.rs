//! Multi-stroke grid-coverage walker
//!
//! Scans interior start cells in row-major order and greedily grows a stroke
//! from each unvisited open cell. Accepted strokes consume their cells
//! permanently; strokes of three points or fewer are discarded without
//! marking anything, so their cells stay available to later scan positions.
//! The scan stops once the stroke cap is reached.

use crate::algorithm::bias::BiasSource;
use crate::spatial::{GateField, Lattice, VisitedMask};

/// Fixed direction-scan order for stroke growth: axis moves first, then
/// diagonals. Ties between valid moves default to the earliest entry.
pub const SCAN_COMPASS: [[i32; 2]; 8] = [
    [0, 1],
    [1, 0],
    [0, -1],
    [-1, 0],
    [1, 1],
    [-1, -1],
    [1, -1],
    [-1, 1],
];

/// A stroke must exceed this many points to be accepted
pub const MIN_STROKE_POINTS: usize = 3;

/// Most strokes any coverage walk will accept regardless of grid size
pub const STROKE_CAP: usize = 10;

/// Combined result of a coverage walk
///
/// Points are the flattened concatenation of all accepted strokes in
/// stroke-then-point order. Zero accepted strokes leaves the points empty;
/// the caller decides whether to substitute the center fallback.
#[derive(Clone, Debug)]
pub struct CoveragePath {
    /// Flattened stroke points in generation order
    pub points: Vec<[i32; 2]>,
    /// Number of accepted strokes
    pub strokes: usize,
}

/// Greedy walker covering the grid interior with multiple strokes
#[derive(Clone, Copy, Debug)]
pub struct CoverageWalker {
    lattice: Lattice,
    stroke_step_limit: usize,
    max_strokes: usize,
}

impl CoverageWalker {
    /// Create a walker with per-stroke budget `Ns/4` where `Ns = 2·(ND²+1)+5`
    /// and stroke cap `min(10, ND)`
    pub const fn new(lattice: Lattice) -> Self {
        let nd = lattice.dimension();
        let ns = 2 * (nd * nd + 1) + 5;
        let max_strokes = if nd < STROKE_CAP { nd } else { STROKE_CAP };
        Self {
            lattice,
            stroke_step_limit: ns / 4,
            max_strokes,
        }
    }

    /// Stroke cap for this grid size
    pub const fn max_strokes(&self) -> usize {
        self.max_strokes
    }

    /// Step budget for one stroke
    pub const fn stroke_step_limit(&self) -> usize {
        self.stroke_step_limit
    }

    /// Run the coverage walk with the standard diagonal constraints
    pub fn generate(
        &self,
        complexity: f64,
        bias: &mut dyn BiasSource,
        progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> CoveragePath {
        let field = GateField::with_closed_diagonals(self.lattice.extent());
        self.cover(&field, complexity, bias, progress)
    }

    /// Run the coverage walk over an explicit gate field
    ///
    /// The optional progress callback receives `(scanned, interior_cells)`
    /// once per scanned start cell.
    pub fn cover(
        &self,
        field: &GateField,
        complexity: f64,
        bias: &mut dyn BiasSource,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> CoveragePath {
        let extent = self.lattice.extent();
        let interior = extent.saturating_sub(2);
        let interior_cells = interior * interior;

        let mut visited = VisitedMask::new(extent);
        let mut points = Vec::new();
        let mut strokes = 0_usize;
        let mut scanned = 0_usize;

        'scan: for si in 1..=interior as i32 {
            for sj in 1..=interior as i32 {
                scanned += 1;
                if let Some(report) = progress.as_deref_mut() {
                    report(scanned, interior_cells);
                }

                if strokes >= self.max_strokes {
                    break 'scan;
                }

                let start = [si, sj];
                if visited.contains(start) || !field.is_open(start) {
                    continue;
                }

                let stroke = self.grow_stroke(start, field, &visited, complexity, bias);
                if stroke.len() > MIN_STROKE_POINTS {
                    visited.mark_all(&stroke);
                    points.extend_from_slice(&stroke);
                    strokes += 1;
                }
                // Shorter attempts are dropped without marking: rejection
                // does not consume cells the way acceptance does.
            }
        }

        CoveragePath { points, strokes }
    }

    /// Grow one stroke greedily from a start cell
    ///
    /// A stroke never revisits its own cells: the in-progress points count
    /// as visited alongside the cells consumed by earlier strokes.
    fn grow_stroke(
        &self,
        start: [i32; 2],
        field: &GateField,
        visited: &VisitedMask,
        complexity: f64,
        bias: &mut dyn BiasSource,
    ) -> Vec<[i32; 2]> {
        let mut stroke = Vec::new();
        let mut local = VisitedMask::new(self.lattice.extent());
        let mut pos = start;

        for _ in 0..self.stroke_step_limit {
            if !self.lattice.is_interior(pos)
                || visited.contains(pos)
                || local.contains(pos)
                || !field.is_open(pos)
            {
                break;
            }

            stroke.push(pos);
            local.mark(pos);

            let moves = self.valid_moves(pos, field, visited, &local);
            let Some(&first) = moves.first() else {
                break;
            };

            pos = if moves.len() > 1 && bias.toss(complexity) {
                moves.get(bias.pick(moves.len())).copied().unwrap_or(first)
            } else {
                first
            };
        }

        stroke
    }

    fn valid_moves(
        &self,
        pos: [i32; 2],
        field: &GateField,
        visited: &VisitedMask,
        local: &VisitedMask,
    ) -> Vec<[i32; 2]> {
        let mut moves = Vec::with_capacity(SCAN_COMPASS.len());
        for offset in &SCAN_COMPASS {
            let next = [pos[0] + offset[0], pos[1] + offset[1]];
            if self.lattice.is_interior(next)
                && !visited.contains(next)
                && !local.contains(next)
                && field.is_open(next)
            {
                moves.push(next);
            }
        }
        moves
    }
}
