//! Walk algorithms and supporting abstractions
//!
//! The two path generators share the lattice abstraction and the injectable
//! bias source; the generator facade dispatches between them and guarantees
//! a non-empty result.

/// Biased coin-flip capability and its implementations
pub mod bias;
/// Multi-stroke grid-coverage walker
pub mod coverage;
/// Generation facade shared by all callers
pub mod generator;
/// Single-stroke biased random walker
pub mod single_stroke;

pub use generator::{Algorithm, Generation, PatternRequest, generate, generate_on};
