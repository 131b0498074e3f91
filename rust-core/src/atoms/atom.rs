// Atom module: Contains the species definition attached to every site of a geometry
// An atom carries an atomic number, a chemical symbol and a bonding radius

use serde::{Deserialize, Serialize};

use crate::config::{BOND_RADIUS_FACTOR, DEFAULT_BOND};

/// Atomic species placed on a lattice site
///
/// # Fields
/// * `z` - Atomic number
/// * `symbol` - Chemical symbol
/// * `radius` - Bonding radius (Å), used to decide which atoms are connected
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Atom {
    pub z: u32,
    pub symbol: String,
    pub radius: f64,
}

impl Atom {
    /// Create a new atom
    ///
    /// # Arguments
    /// * `z` - Atomic number
    /// * `symbol` - Chemical symbol
    /// * `radius` - Bonding radius in Å
    pub fn new(z: u32, symbol: impl Into<String>, radius: f64) -> Self {
        Self {
            z,
            symbol: symbol.into(),
            radius,
        }
    }

    /// Carbon with a bonding radius slightly above the bond length
    pub fn carbon(bond: f64) -> Self {
        Self::new(6, "C", bond * BOND_RADIUS_FACTOR)
    }
}

impl Default for Atom {
    /// Default atom: graphene carbon
    fn default() -> Self {
        Self::carbon(DEFAULT_BOND)
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        const TOLERANCE: f64 = 1e-12;

        self.z == other.z && (self.radius - other.radius).abs() < TOLERANCE
    }
}

/// Common atom constants for honeycomb materials
pub struct CommonAtoms;

impl CommonAtoms {
    /// Carbon for a given C-C bond length
    pub fn carbon(bond: f64) -> Atom {
        Atom::carbon(bond)
    }

    /// Boron for a given B-N bond length
    pub fn boron(bond: f64) -> Atom {
        Atom::new(5, "B", bond * BOND_RADIUS_FACTOR)
    }

    /// Nitrogen for a given B-N bond length
    pub fn nitrogen(bond: f64) -> Atom {
        Atom::new(7, "N", bond * BOND_RADIUS_FACTOR)
    }

    /// Atom spec of a graphene lattice
    pub fn graphene(bond: f64) -> Vec<Atom> {
        vec![Self::carbon(bond)]
    }

    /// Atom spec of a hexagonal boron nitride lattice (alternating sublattices)
    pub fn hbn(bond: f64) -> Vec<Atom> {
        vec![Self::boron(bond), Self::nitrogen(bond)]
    }
}
