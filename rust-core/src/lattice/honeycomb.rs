use nalgebra::Vector3;

use crate::atoms::Atom;
use crate::config::HONEYCOMB_CELL_HEIGHT;
use crate::error::{Result, RibbonError};
use crate::geometries::{Geometry, UnitCell};

/// Orthogonal honeycomb cell with 4 atoms.
///
/// `a1 = (3b, 0, 0)`, `a2 = (0, √3 b, 0)`; atoms sit at `(0, 0)`, `(b/2, √3b/2)`,
/// `(3b/2, √3b/2)` and `(2b, 0)`. The atom spec is cycled over the sites, so a
/// single atom gives a homogeneous lattice and two atoms alternate sublattices.
pub fn honeycomb(bond: f64, atoms: &[Atom]) -> Result<Geometry> {
    if !(bond > 0.0) {
        return Err(RibbonError::invalid_input(format!(
            "honeycomb: bond length must be positive ({bond})"
        )));
    }
    if atoms.is_empty() {
        return Err(RibbonError::invalid_input(
            "honeycomb: at least one atom is required",
        ));
    }

    let sq3h = 3.0_f64.sqrt() / 2.0;
    let cell = UnitCell::orthogonal(3.0 * bond, 2.0 * sq3h * bond, HONEYCOMB_CELL_HEIGHT)?;
    let xyz: Vec<Vector3<f64>> = [(0.0, 0.0), (0.5, sq3h), (1.5, sq3h), (2.0, 0.0)]
        .iter()
        .map(|&(x, y)| Vector3::new(x, y, 0.0) * bond)
        .collect();
    let species = (0..xyz.len())
        .map(|i| atoms[i % atoms.len()].clone())
        .collect();

    Geometry::new(xyz, species, cell)
}
