// Nanoribbon module: builds the unit cell of a pristine honeycomb nanoribbon
// Every ribbon is periodic along x and finite along y

use std::f64::consts::FRAC_PI_2;
use std::fmt;
use std::str::FromStr;

use log::debug;
use nalgebra::{Matrix3, Vector3};
use serde::{Deserialize, Serialize};

use crate::atoms::{Atom, CommonAtoms};
use crate::config::{DEFAULT_BOND, RIBBON_MARGIN, RIBBON_VACUUM};
use crate::error::{Result, RibbonError};
use crate::geometries::{Geometry, UnitCell};
use crate::interfaces::Axis;
use crate::lattice::honeycomb::honeycomb;

/// Edge termination of a honeycomb ribbon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RibbonKind {
    #[default]
    Armchair,
    Zigzag,
}

impl RibbonKind {
    /// Axis along which the ribbon is periodic (tiling direction)
    pub fn longitudinal_axis(self) -> Axis {
        // `nanoribbon` orients both kinds along x
        Axis::X
    }

    /// Axis along which the width of the ribbon is measured
    pub fn transverse_axis(self) -> Axis {
        Axis::Y
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RibbonKind::Armchair => "armchair",
            RibbonKind::Zigzag => "zigzag",
        }
    }
}

impl fmt::Display for RibbonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RibbonKind {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "armchair" => Ok(RibbonKind::Armchair),
            "zigzag" => Ok(RibbonKind::Zigzag),
            _ => Err(RibbonError::invalid_input(format!(
                "nanoribbon: kind must be armchair or zigzag ({s})"
            ))),
        }
    }
}

/// Construct the unit cell of a nanoribbon of type armchair or zigzag.
///
/// # Arguments
/// * `bond` - Bond length between atoms of the honeycomb lattice
/// * `atoms` - Atom (or alternating atoms) placed on the lattice sites
/// * `width` - Number of atoms in the transverse direction
/// * `kind` - Edge termination
///
/// The ribbon is periodic along x. A 20 Å vacuum separates periodic images
/// along y and the lowest atom sits 10 Å above the cell origin.
pub fn nanoribbon(bond: f64, atoms: &[Atom], width: usize, kind: RibbonKind) -> Result<Geometry> {
    if width == 0 {
        return Err(RibbonError::invalid_input(format!(
            "nanoribbon: width needs to be a positive integer ({width})"
        )));
    }

    let (n, odd) = (width / 2, width % 2 == 1);
    let seed = honeycomb(bond, atoms)?;

    let ribbon = match kind {
        RibbonKind::Armchair => {
            if odd {
                // Drop the two atoms of the lowest row
                seed.repeated(n + 1, Axis::Y)?.removed(&[0, 3 * (n + 1)])?
            } else {
                seed.repeated(n, Axis::Y)?
            }
        }
        RibbonKind::Zigzag => {
            let rotated = seed.rotated_z(-FRAC_PI_2)?;
            let ribbon = if odd {
                let tiled = rotated.tiled(n + 1, Axis::X)?;
                let last = tiled.len() - 1;
                tiled.removed(&[last - 1, last])?
            } else {
                rotated.tiled(n, Axis::X)?
            };
            let ribbon = ribbon.mirrored(Axis::Y);

            // Strictly orthogonal cell: x is the zigzag period, y the width
            let m = ribbon.cell().matrix();
            let cell = UnitCell::from_matrix(Matrix3::from_diagonal(&Vector3::new(
                m[(0, 1)],
                -m[(1, 0)],
                m[(2, 2)],
            )))?;
            ribbon.with_cell(cell).sorted_xy()
        }
    };

    let ribbon = ribbon.with_vacuum(RIBBON_VACUUM, Axis::Y)?;

    // Move inside the unit cell
    let min_x = ribbon.bounds(Axis::X).map_or(0.0, |b| b.min);
    let min_y = ribbon.bounds(Axis::Y).map_or(0.0, |b| b.min);
    debug!(
        "nanoribbon: {kind} width={width} with {} atoms",
        ribbon.len()
    );
    Ok(ribbon.moved(Vector3::new(-min_x, -min_y + RIBBON_MARGIN, 0.0)))
}

/// Graphene nanoribbon with C-C bond `bond` (carbon radius 1.01 × bond)
pub fn graphene_nanoribbon(width: usize, bond: f64, kind: RibbonKind) -> Result<Geometry> {
    nanoribbon(bond, &CommonAtoms::graphene(bond), width, kind)
}

/// Armchair graphene nanoribbon with the default 1.42 Å bond
pub fn agnr(width: usize) -> Result<Geometry> {
    graphene_nanoribbon(width, DEFAULT_BOND, RibbonKind::Armchair)
}

/// Zigzag graphene nanoribbon with the default 1.42 Å bond
pub fn zgnr(width: usize) -> Result<Geometry> {
    graphene_nanoribbon(width, DEFAULT_BOND, RibbonKind::Zigzag)
}
