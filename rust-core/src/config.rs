// Constants

// Tolerances
pub const CELL_TOLERANCE: f64 = 1e-10; // For construction of unit cells
pub const COORDINATE_TOLERANCE: f64 = 1e-8; // For sorting and fractional wrapping

// Ribbon primitive
pub const RIBBON_VACUUM: f64 = 20.0; // Added to the transverse cell vector
pub const RIBBON_MARGIN: f64 = 10.0; // Distance between the cell origin and the lowest atom
pub const HONEYCOMB_CELL_HEIGHT: f64 = 10.0; // Length of the out-of-plane cell vector

// Heteroribbon assembly
pub const COMPOSITE_PADDING: f64 = 14.0; // Extra vacuum when a section leaves the cell
pub const CUT_MARGIN: f64 = 0.01; // Slack when trimming the trailing row of atoms

// Graphene defaults
pub const DEFAULT_BOND: f64 = 1.42;
pub const BOND_RADIUS_FACTOR: f64 = 1.01; // Bonding radius relative to the bond length
