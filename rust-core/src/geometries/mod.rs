// Geometries module: Contains the periodic atomic geometry container
// This module provides the cell, the atom container and the operations the ribbon builders rely on

// ======================== MODULE DECLARATIONS ========================
pub mod geometry;
pub mod neighbours;
pub mod unit_cell;

// Test modules
mod _tests_geometry;

// ======================== UNIT CELL ========================
pub use unit_cell::UnitCell; // struct - validated 3x3 cell (lattice vectors as columns) with cached inverse
// UnitCell impl methods:
//   from_vectors(a1, a2, a3) -> Result<Self>                  - builds a cell, rejecting singular vectors
//   orthogonal(a, b, c) -> Result<Self>                       - rectangular cell
//   vector(&self, axis: Axis) -> Vector3<f64>                 - lattice vector along an axis
//   to_fractional / to_cartesian                              - coordinate conversions
//   scaled / extended / with_vector / rotated_z               - derived cells

// ======================== ATOMIC GEOMETRY ========================
pub use geometry::{
    AxisBounds, // struct - min/max/mean of coordinates along one axis
    Geometry,   // struct - cell + positions + atoms
};
// Geometry impl methods:
//   moved / moved_along / mirrored / rotated_z                - rigid transformations
//   tiled(reps, axis) / repeated(reps, axis)                  - copy-major / atom-major supercells
//   removed(indices) / retain(predicate) / sorted_xy()        - atom selection and ordering
//   wrapped()                                                 - reduce atoms into the cell
//   with_vacuum(amount, axis) / appended(other, axis)         - cell growth and concatenation
//   neighbour_counts(cutoff, periodic) / lone_atoms(...)      - connectivity checks
