// Geometry module: Contains the atomic geometry container used by every builder
// A geometry is a periodic cell with a list of atoms and their cartesian positions

use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::atoms::Atom;
use crate::config::COORDINATE_TOLERANCE;
use crate::error::{Result, RibbonError};
use crate::geometries::unit_cell::UnitCell;
use crate::interfaces::Axis;

/// Extent of a set of atoms along one cartesian axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

impl AxisBounds {
    /// Bounds of a collection of coordinates, `None` if it is empty
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut iter = values.into_iter();
        let first = iter.next()?;

        let (mut min, mut max, mut sum, mut count) = (first, first, first, 1usize);
        for value in iter {
            min = min.min(value);
            max = max.max(value);
            sum += value;
            count += 1;
        }

        Some(Self {
            min,
            max,
            mean: sum / count as f64,
        })
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Atoms in a periodic cell
///
/// All transformations return a new geometry; the receiver is consumed so
/// calls can be chained the same way as with `Transform2D`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Geometry {
    cell: UnitCell,
    xyz: Vec<Vector3<f64>>,
    atoms: Vec<Atom>,
}

impl Geometry {
    pub fn new(xyz: Vec<Vector3<f64>>, atoms: Vec<Atom>, cell: UnitCell) -> Result<Self> {
        if xyz.len() != atoms.len() {
            return Err(RibbonError::invalid_input(format!(
                "got {} coordinates but {} atoms",
                xyz.len(),
                atoms.len()
            )));
        }
        Ok(Self { cell, xyz, atoms })
    }

    pub fn len(&self) -> usize {
        self.xyz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xyz.is_empty()
    }

    pub fn cell(&self) -> &UnitCell {
        &self.cell
    }

    pub fn xyz(&self) -> &[Vector3<f64>] {
        &self.xyz
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Coordinates of every atom along `axis`
    pub fn coordinates(&self, axis: Axis) -> impl Iterator<Item = f64> + '_ {
        self.xyz.iter().map(move |p| p[axis.index()])
    }

    pub fn bounds(&self, axis: Axis) -> Option<AxisBounds> {
        AxisBounds::from_values(self.coordinates(axis))
    }

    pub fn with_cell(mut self, cell: UnitCell) -> Self {
        self.cell = cell;
        self
    }

    /// Translate every atom by `offset`
    pub fn moved(mut self, offset: Vector3<f64>) -> Self {
        self.xyz.iter_mut().for_each(|p| *p += offset);
        self
    }

    /// Translate every atom by `amount` along a cartesian axis
    pub fn moved_along(self, axis: Axis, amount: f64) -> Self {
        let mut offset = Vector3::zeros();
        offset[axis.index()] = amount;
        self.moved(offset)
    }

    /// Flip the sign of every coordinate along `axis` (the cell is untouched)
    pub fn mirrored(mut self, axis: Axis) -> Self {
        self.xyz.iter_mut().for_each(|p| p[axis.index()] *= -1.0);
        self
    }

    /// Rotate atoms and cell about the z axis (radians, counterclockwise)
    pub fn rotated_z(mut self, angle: f64) -> Result<Self> {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        self.xyz.iter_mut().for_each(|p| *p = rotation * *p);
        self.cell = self.cell.rotated_z(angle)?;
        Ok(self)
    }

    /// Copy the whole geometry `reps` times along a cell vector.
    ///
    /// Atoms are ordered copy-major: all atoms of copy 0, then all atoms of copy 1, ...
    pub fn tiled(&self, reps: usize, axis: Axis) -> Result<Self> {
        if reps == 0 {
            return Err(RibbonError::invalid_input("cannot tile a geometry 0 times"));
        }

        let step = self.cell.vector(axis);
        let mut xyz = Vec::with_capacity(self.len() * reps);
        let mut atoms = Vec::with_capacity(self.len() * reps);
        for rep in 0..reps {
            let shift = step * rep as f64;
            xyz.extend(self.xyz.iter().map(|p| p + shift));
            atoms.extend(self.atoms.iter().cloned());
        }

        Ok(Self {
            cell: self.cell.scaled(axis, reps as f64)?,
            xyz,
            atoms,
        })
    }

    /// Copy every atom `reps` times along a cell vector.
    ///
    /// Atoms are ordered atom-major: all copies of atom 0, then all copies of atom 1, ...
    pub fn repeated(&self, reps: usize, axis: Axis) -> Result<Self> {
        if reps == 0 {
            return Err(RibbonError::invalid_input("cannot repeat a geometry 0 times"));
        }

        let step = self.cell.vector(axis);
        let mut xyz = Vec::with_capacity(self.len() * reps);
        let mut atoms = Vec::with_capacity(self.len() * reps);
        for (p, atom) in self.xyz.iter().zip(&self.atoms) {
            for rep in 0..reps {
                xyz.push(p + step * rep as f64);
                atoms.push(atom.clone());
            }
        }

        Ok(Self {
            cell: self.cell.scaled(axis, reps as f64)?,
            xyz,
            atoms,
        })
    }

    /// Drop the atoms at the given indices (indices refer to the current ordering)
    pub fn removed(self, indices: &[usize]) -> Result<Self> {
        if let Some(bad) = indices.iter().find(|&&i| i >= self.len()) {
            return Err(RibbonError::invalid_input(format!(
                "atom index {bad} out of range for a geometry with {} atoms",
                self.len()
            )));
        }
        let mut index = 0;
        Ok(self.retain(|_| {
            let keep = !indices.contains(&index);
            index += 1;
            keep
        }))
    }

    /// Keep only the atoms whose position satisfies `keep`
    pub fn retain<F>(self, mut keep: F) -> Self
    where
        F: FnMut(&Vector3<f64>) -> bool,
    {
        let (xyz, atoms) = self
            .xyz
            .into_iter()
            .zip(self.atoms)
            .filter(|(p, _)| keep(p))
            .unzip();
        Self {
            cell: self.cell,
            xyz,
            atoms,
        }
    }

    /// Sort atoms by x, then y. Coordinates closer than the coordinate
    /// tolerance compare equal so the order is stable against round-off.
    pub fn sorted_xy(self) -> Self {
        let key = |p: &Vector3<f64>| {
            (
                (p.x / COORDINATE_TOLERANCE).round() as i64,
                (p.y / COORDINATE_TOLERANCE).round() as i64,
            )
        };
        let mut pairs: Vec<_> = self.xyz.into_iter().zip(self.atoms).collect();
        pairs.sort_by_key(|(p, _)| key(p));
        let (xyz, atoms) = pairs.into_iter().unzip();
        Self {
            cell: self.cell,
            xyz,
            atoms,
        }
    }

    /// Reduce every atom into the cell, i.e. fractional coordinates in [0, 1)
    pub fn wrapped(mut self) -> Self {
        let cell = self.cell.clone();
        for p in self.xyz.iter_mut() {
            let frac = cell.to_fractional(p).map(|f| {
                let f = f.rem_euclid(1.0);
                if 1.0 - f < COORDINATE_TOLERANCE {
                    0.0
                } else {
                    f
                }
            });
            *p = cell.to_cartesian(&frac);
        }
        self
    }

    /// Add `amount` of empty space along a cell vector (atoms stay in place)
    pub fn with_vacuum(mut self, amount: f64, axis: Axis) -> Result<Self> {
        self.cell = self.cell.extended(axis, amount)?;
        Ok(self)
    }

    /// Place `other` right after `self` along a cell vector.
    ///
    /// `other` is translated by the lattice vector of `self` along `axis`, and the
    /// resulting lattice vector is the sum of both; the remaining vectors are
    /// taken from `self`.
    pub fn appended(mut self, other: &Geometry, axis: Axis) -> Result<Self> {
        let step = self.cell.vector(axis);
        self.cell = self
            .cell
            .with_vector(axis, step + other.cell.vector(axis))?;
        self.xyz.extend(other.xyz.iter().map(|p| p + step));
        self.atoms.extend(other.atoms.iter().cloned());
        Ok(self)
    }
}
