//! Spatial data structures for the kolam lattice
//!
//! This module contains the grid abstraction shared by both walk algorithms:
//! - Lattice geometry and the boundary predicate
//! - Gate and flag matrices
//! - Visited-cell bookkeeping for coverage walks

/// Lattice geometry, boundary predicates, and gate matrices
pub mod lattice;
/// Bitmask tracking which lattice points strokes have consumed
pub mod mask;

pub use lattice::{BoundaryKind, GateField, Lattice};
pub use mask::VisitedMask;
