use bitvec::prelude::*;
use std::fmt;

/// Row-major bitmask over lattice points
///
/// Records which cells have been consumed by accepted strokes during a
/// coverage walk. A cell is never cleared within one generation: once any
/// stroke includes it, it stays unavailable to later strokes and start-cell
/// scans. Marking is idempotent.
#[derive(Clone, Debug)]
pub struct VisitedMask {
    bits: BitVec,
    extent: usize,
}

impl VisitedMask {
    /// Create an all-clear mask for an `extent × extent` lattice
    pub fn new(extent: usize) -> Self {
        Self {
            bits: bitvec![0; extent * extent],
            extent,
        }
    }

    /// Test whether a position has been visited
    ///
    /// Out-of-range positions count as visited so walkers never step there.
    pub fn contains(&self, pos: [i32; 2]) -> bool {
        self.index(pos)
            .is_none_or(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Mark a position as visited
    pub fn mark(&mut self, pos: [i32; 2]) {
        if let Some(index) = self.index(pos) {
            self.bits.set(index, true);
        }
    }

    /// Mark every point of an accepted stroke
    pub fn mark_all(&mut self, points: &[[i32; 2]]) {
        for &point in points {
            self.mark(point);
        }
    }

    /// Count visited cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    fn index(&self, pos: [i32; 2]) -> Option<usize> {
        let extent = self.extent as i32;
        (pos[0] >= 0 && pos[0] < extent && pos[1] >= 0 && pos[1] < extent)
            .then(|| pos[0] as usize * self.extent + pos[1] as usize)
    }
}

impl fmt::Display for VisitedMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VisitedMask({}/{} cells)",
            self.count(),
            self.extent * self.extent
        )
    }
}
