#[cfg(test)]
mod _tests_alignment {
    use super::super::alignment::*;
    use super::super::section::{PlacementResult, Section};
    use crate::error::RibbonError;
    use crate::interfaces::Axis;
    use approx::assert_abs_diff_eq;

    const ROW: f64 = 1.42 * 0.866_025_403_784_438_6; // bond * sqrt(3) / 2

    fn placed(width: usize, length: usize) -> PlacementResult {
        Section::new(width)
            .with_length(length)
            .build_section(None)
            .unwrap()
    }

    #[test]
    fn test_parse_align() {
        assert_eq!("c".parse::<Align>().unwrap(), Align::Center);
        assert_eq!("TOP".parse::<Align>().unwrap(), Align::Top);
        assert_eq!("b".parse::<Align>().unwrap(), Align::Bottom);
        assert_eq!("auto".parse::<Align>().unwrap(), Align::Auto);
        let err = "middle".parse::<Align>().unwrap_err();
        assert!(matches!(err, RibbonError::InvalidInput(_)));
        assert!(err.to_string().contains("'center'"));
        assert_eq!(Align::default(), Align::Center);
    }

    #[test]
    fn test_auto_on_odd_pairs_is_center() {
        for previous in (1..=13).step_by(2) {
            for width in (1..=13).step_by(2) {
                for open in [false, true] {
                    assert_eq!(resolve_auto(previous, open, width), Align::Center);
                }
            }
        }
    }

    #[test]
    fn test_auto_follows_open_edge_of_even_section() {
        assert_eq!(resolve_auto(8, true, 5), Align::Top);
        assert_eq!(resolve_auto(8, false, 5), Align::Bottom);
        assert_eq!(resolve_auto(7, true, 8), Align::Bottom);
    }

    #[test]
    fn test_auto_and_bottom_agree_on_open_edge() {
        // For an even previous section, auto picks the bottom edge exactly when
        // the bottom alignment considers that edge open.
        for previous in (2..=14).step_by(2) {
            for width in 1..=14 {
                for open in [false, true] {
                    let last_bottom_open = (previous % 2 == 1) == open;
                    let picks_bottom = resolve_auto(previous, open, width) == Align::Bottom;
                    assert_eq!(picks_bottom, last_bottom_open, "{previous} -> {width}");
                }
            }
        }
    }

    #[test]
    fn test_no_previous() {
        let candidate = Section::new(7).pristine().unwrap().clone();
        let resolution = resolve_alignment(None, 7, &candidate, Align::Top, Axis::Y).unwrap();
        assert_eq!(resolution.align, Align::Top);
        assert_eq!(resolution.offset, 0.0);
        assert!(resolution.aligned_match);
    }

    #[test]
    fn test_offsets() {
        let previous = placed(7, 2);
        let candidate = Section::new(11).pristine().unwrap().clone();

        let center =
            resolve_alignment(Some(&previous), 11, &candidate, Align::Center, Axis::Y).unwrap();
        assert_abs_diff_eq!(center.offset, -2.0 * ROW, epsilon = 1e-9);
        // Closed top border, width difference of 4
        assert!(center.aligned_match);

        let top = resolve_alignment(Some(&previous), 11, &candidate, Align::Top, Axis::Y).unwrap();
        assert_abs_diff_eq!(top.offset, -4.0 * ROW, epsilon = 1e-9);
        assert!(top.aligned_match);

        let bottom =
            resolve_alignment(Some(&previous), 11, &candidate, Align::Bottom, Axis::Y).unwrap();
        assert_abs_diff_eq!(bottom.offset, 0.0, epsilon = 1e-9);
        assert!(bottom.aligned_match);

        let auto = resolve_alignment(Some(&previous), 11, &candidate, Align::Auto, Axis::Y).unwrap();
        assert_eq!(auto.align, Align::Center);
    }

    #[test]
    fn test_center_rejects_odd_difference() {
        let previous = placed(7, 2);
        let candidate = Section::new(8).pristine().unwrap().clone();
        let err = resolve_alignment(Some(&previous), 8, &candidate, Align::Center, Axis::Y)
            .unwrap_err();
        assert!(matches!(err, RibbonError::Geometry(_)));
    }
}
