#[cfg(test)]
mod tests {
    use super::super::geometry::{AxisBounds, Geometry};
    use super::super::unit_cell::UnitCell;
    use crate::atoms::{Atom, CommonAtoms};
    use crate::interfaces::Axis;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector3;

    // Helper: two carbon atoms in a 2 x 3 x 10 cell
    fn dimer() -> Geometry {
        Geometry::new(
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 1.0, 0.0)],
            vec![Atom::carbon(1.42); 2],
            UnitCell::orthogonal(2.0, 3.0, 10.0).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_checks_lengths() {
        let result = Geometry::new(
            vec![Vector3::zeros()],
            vec![],
            UnitCell::orthogonal(1.0, 1.0, 1.0).unwrap(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_tiled_is_copy_major() {
        let tiled = dimer().tiled(3, Axis::X).unwrap();
        assert_eq!(tiled.len(), 6);
        assert_abs_diff_eq!(tiled.cell().length(Axis::X), 6.0, epsilon = 1e-12);
        let xs: Vec<f64> = tiled.coordinates(Axis::X).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!(dimer().tiled(0, Axis::X).is_err());
    }

    #[test]
    fn test_repeated_is_atom_major() {
        let repeated = dimer().repeated(2, Axis::Y).unwrap();
        let ys: Vec<f64> = repeated.coordinates(Axis::Y).collect();
        assert_eq!(ys, vec![0.0, 3.0, 1.0, 4.0]);
        assert_abs_diff_eq!(repeated.cell().length(Axis::Y), 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_removed() {
        let geometry = dimer().tiled(2, Axis::X).unwrap();
        let removed = geometry.removed(&[0, 3]).unwrap();
        let xs: Vec<f64> = removed.coordinates(Axis::X).collect();
        assert_eq!(xs, vec![1.0, 2.0]);
        assert!(dimer().removed(&[2]).is_err());
    }

    #[test]
    fn test_retain_keeps_atoms_in_sync() {
        let geometry = Geometry::new(
            vec![Vector3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0)],
            CommonAtoms::hbn(1.45),
            UnitCell::orthogonal(2.0, 2.0, 2.0).unwrap(),
        )
        .unwrap();
        let kept = geometry.retain(|p| p.x > 0.5);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept.atoms()[0].symbol, "N");
    }

    #[test]
    fn test_wrapped_snaps_to_origin() {
        let geometry = dimer()
            .moved(Vector3::new(2.0 - 1e-12, -1.0, 0.0))
            .wrapped();
        let p0 = geometry.xyz()[0];
        let p1 = geometry.xyz()[1];
        assert_abs_diff_eq!(p0.x, 0.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p0.y, 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p1.x, 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(p1.y, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_with_vacuum_does_not_move_atoms() {
        let geometry = dimer().with_vacuum(14.0, Axis::Y).unwrap();
        assert_abs_diff_eq!(geometry.cell().length(Axis::Y), 17.0, epsilon = 1e-12);
        assert_eq!(geometry.xyz()[1], Vector3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_appended_is_seamless() {
        let left = dimer();
        let right = dimer().tiled(2, Axis::X).unwrap();
        let joined = left.appended(&right, Axis::X).unwrap();

        assert_eq!(joined.len(), 6);
        assert_abs_diff_eq!(joined.cell().length(Axis::X), 6.0, epsilon = 1e-12);
        // Same result as tiling the dimer three times
        let tiled = dimer().tiled(3, Axis::X).unwrap();
        for (a, b) in joined.xyz().iter().zip(tiled.xyz()) {
            assert_abs_diff_eq!((a - b).norm(), 0.0, epsilon = 1e-12);
        }
        // Transverse cell comes from the receiver
        assert_abs_diff_eq!(joined.cell().length(Axis::Y), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sorted_xy() {
        let geometry = Geometry::new(
            vec![
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 2.0, 0.0),
                Vector3::new(1e-12, 1.0, 0.0),
            ],
            vec![Atom::default(); 3],
            UnitCell::orthogonal(2.0, 3.0, 1.0).unwrap(),
        )
        .unwrap()
        .sorted_xy();
        let ys: Vec<f64> = geometry.coordinates(Axis::Y).collect();
        assert_eq!(ys, vec![1.0, 2.0, 0.0]);
    }

    #[test]
    fn test_bounds() {
        let bounds = dimer().bounds(Axis::Y).unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 1.0);
        assert_abs_diff_eq!(bounds.mean, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(bounds.span(), 1.0, epsilon = 1e-12);
        assert!(AxisBounds::from_values(Vec::new()).is_none());
    }

    #[test]
    fn test_mirrored_and_moved_along() {
        let geometry = dimer().mirrored(Axis::Y).moved_along(Axis::Y, 5.0);
        let ys: Vec<f64> = geometry.coordinates(Axis::Y).collect();
        assert_eq!(ys, vec![5.0, 4.0]);
    }
}
