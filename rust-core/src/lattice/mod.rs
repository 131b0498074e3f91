// Lattice module: Contains the honeycomb lattice and the pristine nanoribbon builders
// This module provides the ribbon primitives that heteroribbon sections are cut from

// ======================== MODULE DECLARATIONS ========================
pub mod honeycomb;
pub mod nanoribbon;


// ======================== HONEYCOMB SEED ========================
pub use honeycomb::honeycomb; // fn(bond: f64, atoms: &[Atom]) -> Result<Geometry> - orthogonal 4-atom honeycomb cell

// ======================== NANORIBBON PRIMITIVES ========================
pub use nanoribbon::{
    RibbonKind,          // enum - armchair or zigzag edge termination
    agnr,                // fn(width: usize) -> Result<Geometry> - armchair graphene ribbon, 1.42 Å bond
    graphene_nanoribbon, // fn(width: usize, bond: f64, kind: RibbonKind) -> Result<Geometry> - carbon ribbon
    nanoribbon,          // fn(bond: f64, atoms: &[Atom], width: usize, kind: RibbonKind) -> Result<Geometry>
    zgnr,                // fn(width: usize) -> Result<Geometry> - zigzag graphene ribbon, 1.42 Å bond
};
