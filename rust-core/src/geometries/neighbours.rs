use nalgebra::Vector3;

use crate::geometries::geometry::Geometry;
use crate::interfaces::Axis;

/// Translations to the periodic images reachable along `periodic` (±1 cell each)
fn image_offsets(geometry: &Geometry, periodic: &[Axis]) -> Vec<Vector3<f64>> {
    let mut offsets = vec![Vector3::zeros()];
    for &axis in periodic {
        let step = geometry.cell().vector(axis);
        offsets = offsets
            .iter()
            .flat_map(|o| [o - step, *o, o + step])
            .collect();
    }
    offsets
}

impl Geometry {
    /// Number of neighbours of every atom within `cutoff`, counting periodic
    /// images along the `periodic` axes. An atom is never its own neighbour,
    /// but its periodic images are.
    pub fn neighbour_counts(&self, cutoff: f64, periodic: &[Axis]) -> Vec<usize> {
        let offsets = image_offsets(self, periodic);
        let xyz = self.xyz();

        xyz.iter()
            .enumerate()
            .map(|(i, p)| {
                xyz.iter()
                    .enumerate()
                    .flat_map(|(j, q)| offsets.iter().map(move |o| (j, q + o)))
                    .filter(|(j, q)| {
                        let distance = (q - p).norm();
                        distance < cutoff && !(*j == i && distance < f64::EPSILON)
                    })
                    .count()
            })
            .collect()
    }

    /// Indices of atoms with fewer than two neighbours within `cutoff`
    pub fn lone_atoms(&self, cutoff: f64, periodic: &[Axis]) -> Vec<usize> {
        self.neighbour_counts(cutoff, periodic)
            .into_iter()
            .enumerate()
            .filter(|&(_, count)| count < 2)
            .map(|(i, _)| i)
            .collect()
    }
}
