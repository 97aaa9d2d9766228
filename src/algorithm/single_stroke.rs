//! Single-stroke biased random walker
//!
//! Produces one continuous path from the grid center under a four-direction
//! diagonal compass. At every open gate cell a biased coin rotates the
//! direction index forward or backward; the walk ends when it crosses the
//! boundary, returns to its starting point, or exhausts its step budget.

use crate::algorithm::bias::BiasSource;
use crate::io::configuration::PROGRESS_REPORT_INTERVAL;
use crate::spatial::{GateField, Lattice};

/// Diagonal compass indexed by the rotating direction index θ
pub const TURN_COMPASS: [[i32; 2]; 4] = [[1, 1], [1, -1], [-1, -1], [-1, 1]];

// Loop detection only engages once the path is long enough to rule out the
// trivial first few revolutions around the center.
const LOOP_DETECTION_THRESHOLD: usize = 10;

/// Why a single-stroke walk stopped
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// The walk crossed the lattice boundary
    OutOfBounds,
    /// The advanced position returned to the path's first point
    LoopDetected,
    /// The derived step budget ran out
    StepLimit,
}

/// One continuous traced path with its termination reason
///
/// Points are in generation order and may revisit cells. An empty path means
/// the starting point was already outside the boundary; the caller decides
/// whether to substitute the canonical center fallback.
#[derive(Clone, Debug)]
pub struct TracedPath {
    /// Lattice points in generation order
    pub points: Vec<[i32; 2]>,
    /// Why the walk stopped
    pub termination: Termination,
}

/// Biased random walker producing one continuous stroke
#[derive(Clone, Copy, Debug)]
pub struct SingleStrokeWalker {
    lattice: Lattice,
    step_limit: usize,
}

impl SingleStrokeWalker {
    /// Create a walker with the derived step budget `(2·ND² + 1)·5`
    pub const fn new(lattice: Lattice) -> Self {
        let nd = lattice.dimension();
        Self {
            lattice,
            step_limit: (2 * nd * nd + 1) * 5,
        }
    }

    /// Step budget for one walk
    pub const fn step_limit(&self) -> usize {
        self.step_limit
    }

    /// Walk from the grid center
    ///
    /// Convenience wrapper around [`Self::trace_from`].
    pub fn generate(
        &self,
        complexity: f64,
        bias: &mut dyn BiasSource,
        progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> TracedPath {
        self.trace_from(self.lattice.center(), complexity, bias, progress)
    }

    /// Walk from an explicit starting point
    ///
    /// The direction index starts at 0 and rotates forward on toss success,
    /// backward on failure, at every open gate cell. The optional progress
    /// callback is invoked at fixed step intervals with `(step, budget)`.
    pub fn trace_from(
        &self,
        start: [i32; 2],
        complexity: f64,
        bias: &mut dyn BiasSource,
        mut progress: Option<&mut dyn FnMut(usize, usize)>,
    ) -> TracedPath {
        let field = GateField::bounded(self.lattice.extent());
        let mut points = Vec::new();
        let mut pos = start;
        let mut theta = 0_usize;
        let mut termination = Termination::StepLimit;

        for step in 0..self.step_limit {
            if step % PROGRESS_REPORT_INTERVAL == 0
                && let Some(report) = progress.as_deref_mut()
            {
                report(step, self.step_limit);
            }

            if !self.lattice.is_inside(pos) {
                termination = Termination::OutOfBounds;
                break;
            }

            points.push(pos);

            if field.is_open(pos) {
                theta = if bias.toss(complexity) {
                    (theta + 1) % 4
                } else {
                    (theta + 3) % 4
                };
            }

            pos = advance(pos, theta);

            // The check compares the next coordinate to the start before it
            // would be appended on the following iteration.
            if points.len() > LOOP_DETECTION_THRESHOLD && points.first() == Some(&pos) {
                termination = Termination::LoopDetected;
                break;
            }
        }

        TracedPath {
            points,
            termination,
        }
    }
}

fn advance(pos: [i32; 2], theta: usize) -> [i32; 2] {
    let [di, dj] = TURN_COMPASS.get(theta % 4).copied().unwrap_or([1, 1]);
    [pos[0] + di, pos[1] + dj]
}
