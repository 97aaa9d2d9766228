//! Biased coin-flip abstraction shared by both walkers
//!
//! Randomness is injected rather than drawn from a global source so that
//! generation is reproducible for a given seed and fully scriptable in tests.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the stochastic choices made during a walk
///
/// `toss` succeeds iff a uniform draw in `[0, 1)` exceeds the bias, so a
/// *lower* bias succeeds more often. Callers expose the bias as "complexity";
/// the relationship between the two is inverse, not monotone in visual
/// intricacy.
pub trait BiasSource {
    /// Biased coin flip; true counts as success
    fn toss(&mut self, bias: f64) -> bool;

    /// Uniform pick of an index strictly below `upper`
    ///
    /// Returns 0 when `upper` is 0.
    fn pick(&mut self, upper: usize) -> usize;
}

/// Seeded production source for reproducible stochastic choices
pub struct SeededBias {
    rng: StdRng,
}

impl SeededBias {
    /// Create a deterministic source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl BiasSource for SeededBias {
    fn toss(&mut self, bias: f64) -> bool {
        self.rng.random::<f64>() > bias
    }

    fn pick(&mut self, upper: usize) -> usize {
        if upper == 0 {
            0
        } else {
            self.rng.random_range(0..upper)
        }
    }
}

/// Deterministic playback source for scripted traces
///
/// Replays a fixed toss sequence, cycling when exhausted, and always picks
/// index 0. Useful for forcing a specific turn pattern through a walker.
pub struct ScriptedBias {
    script: Vec<bool>,
    cursor: usize,
}

impl ScriptedBias {
    /// Source that always returns the same toss outcome
    pub fn always(outcome: bool) -> Self {
        Self {
            script: vec![outcome],
            cursor: 0,
        }
    }

    /// Source replaying the given toss sequence cyclically
    pub const fn sequence(script: Vec<bool>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl BiasSource for ScriptedBias {
    fn toss(&mut self, _bias: f64) -> bool {
        if self.script.is_empty() {
            return false;
        }
        let outcome = self
            .script
            .get(self.cursor % self.script.len())
            .copied()
            .unwrap_or(false);
        self.cursor += 1;
        outcome
    }

    fn pick(&mut self, _upper: usize) -> usize {
        0
    }
}
