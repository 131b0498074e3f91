// Shift validator: enumerates the lateral shifts that join two sections without lone atoms
//
// Shifts are counted in transverse atomic rows (bond * sqrt(3) / 2). Whether a
// shift is valid depends on the parity of both widths, on the width difference
// and on whether the top border of the previous section is open.

use std::cmp::Reverse;

use thiserror::Error;

use crate::heteroribbon::alignment::Align;

/// Geometry of a junction, as far as the valid shifts are concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JunctionCase {
    /// Both widths odd, incoming section narrower
    OddNarrowing,
    /// Both widths odd and equal
    OddEqual,
    /// Both widths odd, incoming section wider
    OddWidening,
    /// Both widths even
    EvenEven,
    /// Even previous section, narrower odd incoming section
    EvenToOddNarrowing,
    /// Even previous section, wider odd incoming section
    EvenToOddWidening,
    /// Odd previous section, even incoming section
    OddToEven,
}

impl JunctionCase {
    pub fn classify(previous_width: usize, width: usize) -> Self {
        let diff = width as i64 - previous_width as i64;
        let odd = width % 2 == 1;

        if diff.rem_euclid(2) == 0 && odd {
            match width.cmp(&previous_width) {
                std::cmp::Ordering::Less => JunctionCase::OddNarrowing,
                std::cmp::Ordering::Equal => JunctionCase::OddEqual,
                std::cmp::Ordering::Greater => JunctionCase::OddWidening,
            }
        } else if diff.rem_euclid(2) == 0 {
            JunctionCase::EvenEven
        } else if odd {
            if width < previous_width {
                JunctionCase::EvenToOddNarrowing
            } else {
                JunctionCase::EvenToOddWidening
            }
        } else {
            JunctionCase::OddToEven
        }
    }

    /// Both sections odd: shifts are measured from the centered position
    pub fn is_odd(self) -> bool {
        matches!(
            self,
            JunctionCase::OddNarrowing | JunctionCase::OddEqual | JunctionCase::OddWidening
        )
    }
}

/// Inclusive range of shifts taken every 2 rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepRange {
    pub low: i64,
    pub high: i64,
}

impl StepRange {
    pub fn new(low: i64, high: i64) -> Self {
        Self { low, high }
    }

    /// Symmetric range `[-limit, limit]`
    pub fn symmetric(limit: i64) -> Self {
        Self::new(-limit, limit)
    }

    pub fn values(self) -> impl Iterator<Item = i64> {
        (self.low..=self.high).step_by(2)
    }
}

/// Closed form of the valid shifts of one junction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShiftRule {
    /// Isolated valid shifts
    pub anchors: Vec<i64>,
    /// Step-2 ranges of valid shifts
    pub ranges: Vec<StepRange>,
    /// Add the negative of every shift
    pub mirrored: bool,
    /// Added to every shift once the set is built (alignment correction)
    pub offset: i64,
}

impl ShiftRule {
    fn anchored(anchors: Vec<i64>, ranges: Vec<StepRange>) -> Self {
        Self {
            anchors,
            ranges,
            mirrored: false,
            offset: 0,
        }
    }

    /// Look up the rule of a junction.
    ///
    /// `align` must already be resolved (see `resolve_auto`); `Auto` adds no
    /// alignment correction.
    pub fn for_junction(
        previous_width: usize,
        previous_top_open: bool,
        width: usize,
        align: Align,
    ) -> Self {
        let (pw, w) = (previous_width as i64, width as i64);
        let diff = w - pw;
        let open = previous_top_open;
        let case = JunctionCase::classify(previous_width, width);

        let rule = match case {
            JunctionCase::OddNarrowing => {
                // A closed incoming section can shift until it loses contact, an
                // open one has to stop before its edge leaves the previous section.
                let closed = pw.div_euclid(2) + w.div_euclid(2) - 2;
                let opened = pw.div_euclid(2) - w.div_euclid(2) - 1;
                let (even, odd) = if closed.rem_euclid(2) == 0 {
                    (closed, opened)
                } else {
                    (opened, closed)
                };
                Self {
                    anchors: vec![],
                    ranges: vec![StepRange::new(0, even), StepRange::new(1, odd)],
                    mirrored: true,
                    offset: 0,
                }
            }
            JunctionCase::OddEqual => Self::anchored(vec![0], vec![]),
            JunctionCase::OddWidening => {
                let diff_mod = diff.rem_euclid(4);
                let limit = if (diff_mod == 2 && open) || (diff_mod == 0 && !open) {
                    // Centers match or differ by an even number of rows
                    (diff.div_euclid(2)).div_euclid(2) * 2
                } else if open {
                    // Keeps the open incoming section from leaving lone atoms
                    diff.div_euclid(2) - 1
                } else {
                    // Keeps both sections connected
                    diff.div_euclid(2) + (pw.div_euclid(2) - 1) * 2
                };
                Self::anchored(vec![], vec![StepRange::symmetric(limit)])
            }
            // From here on at least one section is even; shifts are computed for a
            // bottom alignment and the open edge of an even section must face the
            // center of the junction.
            JunctionCase::EvenEven if open => {
                Self::anchored(vec![pw - w], vec![StepRange::new(pw - w + 1, pw - 1)])
            }
            JunctionCase::EvenEven => Self::anchored(vec![0], vec![StepRange::new(-w + 1, -1)]),
            JunctionCase::EvenToOddNarrowing if open => Self::anchored(
                vec![pw - w],
                vec![StepRange::new(
                    pw - w,
                    pw - w + 1 + (w - 2).div_euclid(2) * 2,
                )],
            ),
            JunctionCase::EvenToOddNarrowing => Self::anchored(
                vec![0],
                vec![StepRange::new(-1 - (w - 2).div_euclid(2) * 2, -1)],
            ),
            JunctionCase::EvenToOddWidening if open => {
                Self::anchored(vec![], vec![StepRange::new(0, pw - 2)])
            }
            JunctionCase::EvenToOddWidening => {
                Self::anchored(vec![], vec![StepRange::new(-(w - 2), -1)])
            }
            JunctionCase::OddToEven if open => Self::anchored(vec![0, pw - w], vec![]),
            JunctionCase::OddToEven => Self::anchored(
                vec![],
                vec![
                    StepRange::new(1, pw - 2),
                    StepRange::new(-(w - 2), pw - w - 1),
                ],
            ),
        };

        let offset = match (case, align) {
            (JunctionCase::OddEqual, _) => 0,
            (c, Align::Top) if c.is_odd() => (-diff).div_euclid(2),
            (c, Align::Bottom) if c.is_odd() => diff.div_euclid(2),
            (c, _) if c.is_odd() => 0,
            (_, Align::Top) => diff,
            (_, Align::Center) => -diff.div_euclid(2),
            _ => 0,
        };

        Self { offset, ..rule }
    }

    /// Sorted, deduplicated valid shifts
    pub fn shifts(&self) -> Vec<i64> {
        let mut shifts: Vec<i64> = self
            .anchors
            .iter()
            .copied()
            .chain(self.ranges.iter().flat_map(|r| r.values()))
            .collect();
        if self.mirrored {
            let negated: Vec<i64> = shifts.iter().map(|s| -s).collect();
            shifts.extend(negated);
        }
        shifts.iter_mut().for_each(|s| *s += self.offset);
        shifts.sort_unstable();
        shifts.dedup();
        shifts
    }
}

/// Valid shifts of an incoming section of `width` after a section of
/// `previous_width` whose top border is `previous_top_open`.
pub fn valid_shifts(
    previous_width: usize,
    previous_top_open: bool,
    width: usize,
    align: Align,
) -> Vec<i64> {
    ShiftRule::for_junction(previous_width, previous_top_open, width, align).shifts()
}

/// Why a requested shift was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftError {
    #[error("LONE ATOMS: Shift must be one of {valid:?} but {shift} was provided.")]
    NotValid { shift: i64, valid: Vec<i64> },

    #[error("LONE ATOMS: Shift must be between {low} and {high}, but {shift} was provided.")]
    OutOfRange { shift: i64, low: i64, high: i64 },

    #[error("LONE ATOMS: There is no valid shift for this junction, but {shift} was provided.")]
    NoValidShift { shift: i64 },
}

/// Index of the best aligned shift: 0 if valid, else the one closest to 0
/// (the upward shift wins a tie).
pub fn aligned_index(valid: &[i64]) -> Option<usize> {
    valid
        .iter()
        .enumerate()
        .min_by_key(|&(_, &s)| (s.abs(), Reverse(s)))
        .map(|(i, _)| i)
}

/// Turn a requested shift into an actual shift.
///
/// With `quantized`, `requested` counts valid shifts away from the best aligned
/// one; otherwise it must itself be a valid shift.
pub fn resolve_shift(requested: i64, valid: &[i64], quantized: bool) -> Result<i64, ShiftError> {
    if !quantized {
        return if valid.contains(&requested) {
            Ok(requested)
        } else {
            Err(ShiftError::NotValid {
                shift: requested,
                valid: valid.to_vec(),
            })
        };
    }

    let anchor = aligned_index(valid).ok_or(ShiftError::NoValidShift { shift: requested })? as i64;
    let out_of_range = ShiftError::OutOfRange {
        shift: requested,
        low: -anchor,
        high: valid.len() as i64 - anchor - 1,
    };
    anchor
        .checked_add(requested)
        .and_then(|index| usize::try_from(index).ok())
        .and_then(|index| valid.get(index).copied())
        .ok_or(out_of_range)
}
