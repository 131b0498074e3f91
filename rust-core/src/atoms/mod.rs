// Atoms module: Contains the atom/species model placed on lattice sites
// This module provides the minimal chemistry needed to decorate ribbon geometries

// ======================== MODULE DECLARATIONS ========================
pub mod atom;

// ======================== ATOM TYPES & PROPERTIES ========================
pub use atom::{
    Atom,        // struct - atomic species with atomic number, symbol and bonding radius
    CommonAtoms, // struct - collection of predefined atoms (Carbon, Boron, Nitrogen)
};
