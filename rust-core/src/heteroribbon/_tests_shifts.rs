#[cfg(test)]
mod _tests_shifts {
    use super::super::alignment::Align;
    use super::super::shifts::*;

    const ALIGNS: [Align; 3] = [Align::Bottom, Align::Top, Align::Center];

    // ==================== Junction classification ====================

    #[test]
    fn test_classify() {
        assert_eq!(JunctionCase::classify(11, 7), JunctionCase::OddNarrowing);
        assert_eq!(JunctionCase::classify(7, 7), JunctionCase::OddEqual);
        assert_eq!(JunctionCase::classify(7, 11), JunctionCase::OddWidening);
        assert_eq!(JunctionCase::classify(8, 6), JunctionCase::EvenEven);
        assert_eq!(JunctionCase::classify(6, 6), JunctionCase::EvenEven);
        assert_eq!(JunctionCase::classify(8, 5), JunctionCase::EvenToOddNarrowing);
        assert_eq!(JunctionCase::classify(6, 9), JunctionCase::EvenToOddWidening);
        assert_eq!(JunctionCase::classify(7, 8), JunctionCase::OddToEven);
        assert!(JunctionCase::OddEqual.is_odd());
        assert!(!JunctionCase::OddToEven.is_odd());
    }

    // ==================== Valid shift sets ====================

    #[test]
    fn test_equal_odd_widths_only_allow_zero() {
        for width in (1..=15).step_by(2) {
            for open in [false, true] {
                for align in ALIGNS {
                    assert_eq!(valid_shifts(width, open, width, align), vec![0]);
                }
            }
        }
    }

    #[test]
    fn test_sets_are_sorted_and_unique() {
        for previous in 1..=12 {
            for width in 1..=12 {
                for open in [false, true] {
                    for align in ALIGNS {
                        let valid = valid_shifts(previous, open, width, align);
                        assert!(
                            valid.windows(2).all(|w| w[0] < w[1]),
                            "{previous} -> {width} (open={open}, {align}): {valid:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_odd_narrowing() {
        let expected = vec![-6, -4, -2, -1, 0, 1, 2, 4, 6];
        assert_eq!(valid_shifts(11, false, 7, Align::Center), expected);
        assert_eq!(valid_shifts(11, true, 7, Align::Center), expected);
        // Mirrored about the centered position
        let rule = ShiftRule::for_junction(11, false, 7, Align::Center);
        assert!(rule.mirrored);
        assert_eq!(rule.offset, 0);
    }

    #[test]
    fn test_odd_widening() {
        assert_eq!(valid_shifts(7, false, 11, Align::Center), vec![-2, 0, 2]);
        assert_eq!(valid_shifts(7, false, 11, Align::Top), vec![-4, -2, 0]);
        assert_eq!(valid_shifts(7, true, 11, Align::Bottom), vec![1, 3]);
        assert_eq!(
            valid_shifts(7, false, 9, Align::Center),
            vec![-5, -3, -1, 1, 3, 5]
        );
        assert_eq!(valid_shifts(7, true, 9, Align::Center), vec![0]);
    }

    #[test]
    fn test_even_junctions() {
        assert_eq!(valid_shifts(8, false, 6, Align::Bottom), vec![-5, -3, -1, 0]);
        assert_eq!(valid_shifts(8, true, 6, Align::Bottom), vec![2, 3, 5, 7]);
        assert_eq!(valid_shifts(8, true, 6, Align::Top), vec![0, 1, 3, 5]);
        assert_eq!(valid_shifts(8, false, 6, Align::Center), vec![-4, -2, 0, 1]);

        assert_eq!(valid_shifts(8, true, 5, Align::Bottom), vec![3, 5]);
        assert_eq!(valid_shifts(8, false, 5, Align::Bottom), vec![-3, -1, 0]);
        assert_eq!(valid_shifts(6, true, 9, Align::Bottom), vec![0, 2, 4]);
        assert_eq!(valid_shifts(6, false, 9, Align::Bottom), vec![-7, -5, -3, -1]);

        assert_eq!(valid_shifts(7, true, 8, Align::Bottom), vec![-1, 0]);
        assert_eq!(
            valid_shifts(7, false, 8, Align::Bottom),
            vec![-6, -4, -2, 1, 3, 5]
        );
    }

    #[test]
    fn test_step_range() {
        assert_eq!(StepRange::new(1, 5).values().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(StepRange::symmetric(2).values().collect::<Vec<_>>(), vec![-2, 0, 2]);
        assert_eq!(StepRange::new(1, -1).values().count(), 0);
    }

    // ==================== Shift resolution ====================

    #[test]
    fn test_resolve_literal_shift() {
        assert_eq!(resolve_shift(0, &[0], false), Ok(0));
        let err = resolve_shift(1, &[0], false).unwrap_err();
        assert_eq!(
            err.to_string(),
            "LONE ATOMS: Shift must be one of [0] but 1 was provided."
        );
    }

    #[test]
    fn test_aligned_index() {
        // Literal zero wins
        assert_eq!(aligned_index(&[-2, 0, 2]), Some(1));
        // Tie between -1 and 1 goes upwards
        assert_eq!(aligned_index(&[-5, -3, -1, 1, 3, 5]), Some(3));
        assert_eq!(aligned_index(&[-4, -3, 2]), Some(2));
        assert_eq!(aligned_index(&[]), None);
    }

    #[test]
    fn test_resolve_quantized_shift() {
        let valid = [-5, -3, -1, 1, 3, 5];
        assert_eq!(resolve_shift(0, &valid, true), Ok(1));
        assert_eq!(resolve_shift(-3, &valid, true), Ok(-5));
        assert_eq!(resolve_shift(2, &valid, true), Ok(5));

        let err = resolve_shift(3, &valid, true).unwrap_err();
        assert_eq!(
            err,
            ShiftError::OutOfRange {
                shift: 3,
                low: -3,
                high: 2
            }
        );
        assert!(err.to_string().contains("between -3 and 2"));

        // Extreme requests are rejected, not wrapped
        for shift in [i64::MAX, i64::MIN] {
            assert!(matches!(
                resolve_shift(shift, &valid, true),
                Err(ShiftError::OutOfRange { low: -3, high: 2, .. })
            ));
        }

        assert_eq!(
            resolve_shift(0, &[], true),
            Err(ShiftError::NoValidShift { shift: 0 })
        );
    }
}
