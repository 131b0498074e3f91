use nalgebra::{Matrix3, Rotation3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::{CELL_TOLERANCE, COORDINATE_TOLERANCE};
use crate::error::{Result, RibbonError};
use crate::interfaces::Axis;

/// Periodic cell of a geometry. Lattice vectors are stored as the columns of
/// `matrix`; the inverse is cached since every constructor checks invertibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Matrix3<f64>", into = "Matrix3<f64>")]
pub struct UnitCell {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl UnitCell {
    pub fn from_vectors(a1: Vector3<f64>, a2: Vector3<f64>, a3: Vector3<f64>) -> Result<Self> {
        Self::from_matrix(Matrix3::from_columns(&[a1, a2, a3]))
    }

    pub fn from_matrix(matrix: Matrix3<f64>) -> Result<Self> {
        // Linearly non-dependent (also catches zero vectors)
        if matrix.determinant().abs() < CELL_TOLERANCE {
            return Err(RibbonError::geometry(
                "Determinant too small. Cell vectors are either too small or linearly dependent.",
            ));
        }

        let inverse = matrix
            .try_inverse()
            .ok_or_else(|| RibbonError::geometry("Cell matrix is not invertible."))?;

        Ok(UnitCell { matrix, inverse })
    }

    /// Rectangular cell with the given lengths along x, y and z
    pub fn orthogonal(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::from_matrix(Matrix3::from_diagonal(&Vector3::new(a, b, c)))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    pub fn inverse(&self) -> &Matrix3<f64> {
        &self.inverse
    }

    pub fn vector(&self, axis: Axis) -> Vector3<f64> {
        self.matrix.column(axis.index()).into_owned()
    }

    pub fn length(&self, axis: Axis) -> f64 {
        self.vector(axis).norm()
    }

    pub fn volume(&self) -> f64 {
        self.matrix.determinant().abs()
    }

    pub fn is_orthogonal(&self) -> bool {
        let metric = self.matrix.transpose() * self.matrix;
        metric[(0, 1)].abs() < COORDINATE_TOLERANCE
            && metric[(0, 2)].abs() < COORDINATE_TOLERANCE
            && metric[(1, 2)].abs() < COORDINATE_TOLERANCE
    }

    pub fn to_fractional(&self, cartesian: &Vector3<f64>) -> Vector3<f64> {
        self.inverse * cartesian
    }

    pub fn to_cartesian(&self, fractional: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * fractional
    }

    /// Replace one lattice vector, re-running the invertibility checks
    pub fn with_vector(&self, axis: Axis, vector: Vector3<f64>) -> Result<Self> {
        let mut matrix = self.matrix;
        matrix.set_column(axis.index(), &vector);
        Self::from_matrix(matrix)
    }

    /// Multiply one lattice vector by `factor`
    pub fn scaled(&self, axis: Axis, factor: f64) -> Result<Self> {
        if factor <= 0.0 {
            return Err(RibbonError::invalid_input(format!(
                "cell scaling factor must be positive ({factor})"
            )));
        }
        self.with_vector(axis, self.vector(axis) * factor)
    }

    /// Lengthen one lattice vector by `amount` along its own direction
    pub fn extended(&self, axis: Axis, amount: f64) -> Result<Self> {
        let vector = self.vector(axis);
        let length = vector.norm();
        if length + amount <= 0.0 {
            return Err(RibbonError::invalid_input(format!(
                "cannot shorten a cell vector of length {length} by {}",
                -amount
            )));
        }
        self.with_vector(axis, vector * ((length + amount) / length))
    }

    /// Rotate all lattice vectors about the z axis (radians, counterclockwise)
    pub fn rotated_z(&self, angle: f64) -> Result<Self> {
        let rotation = Rotation3::from_axis_angle(&Vector3::z_axis(), angle);
        Self::from_matrix(rotation.matrix() * self.matrix)
    }
}

impl TryFrom<Matrix3<f64>> for UnitCell {
    type Error = RibbonError;

    fn try_from(matrix: Matrix3<f64>) -> Result<Self> {
        Self::from_matrix(matrix)
    }
}

impl From<UnitCell> for Matrix3<f64> {
    fn from(cell: UnitCell) -> Self {
        cell.matrix
    }
}
