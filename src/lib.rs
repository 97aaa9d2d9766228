//! Procedural generation of traditional South Indian kolam patterns
//!
//! Two randomized grid-walk algorithms produce ordered sequences of lattice
//! coordinates: a single-stroke biased walker that changes direction at gate
//! cells, and a multi-stroke coverage walker that grows greedy strokes with
//! visited-cell bookkeeping. A thin rendering layer projects the lattice onto
//! a rotated plane and rasterizes the path to a PNG image.

#![forbid(unsafe_code)]

/// Walk algorithms, the bias source, and the generation facade
pub mod algorithm;
/// Input/output operations: CLI, rendering, progress, and error handling
pub mod io;
/// Lattice model and visited-cell bookkeeping
pub mod spatial;

pub use io::error::{KolamError, Result};
