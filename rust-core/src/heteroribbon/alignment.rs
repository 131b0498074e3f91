// Alignment resolver: decides where an incoming section sits transversally
// relative to the previously placed one

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RibbonError};
use crate::geometries::{AxisBounds, Geometry};
use crate::heteroribbon::section::PlacementResult;
use crate::interfaces::Axis;

/// How a section is aligned with respect to the previous one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[serde(alias = "b")]
    Bottom,
    #[serde(alias = "t")]
    Top,
    #[default]
    #[serde(alias = "c")]
    Center,
    /// Pick one of the above from the widths and borders of both sections
    #[serde(alias = "a")]
    Auto,
}

impl Align {
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Bottom => "bottom",
            Align::Top => "top",
            Align::Center => "center",
            Align::Auto => "auto",
        }
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Align {
    type Err = RibbonError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "b" | "bottom" => Ok(Align::Bottom),
            "t" | "top" => Ok(Align::Top),
            "c" | "center" => Ok(Align::Center),
            "a" | "auto" => Ok(Align::Auto),
            _ => Err(RibbonError::invalid_input(format!(
                "invalid value for 'align': {s}. Must be one of \
                 {{'c', 'center', 't', 'top', 'b', 'bottom', 'a', 'auto'}}"
            ))),
        }
    }
}

/// Outcome of aligning a candidate section on the previous one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AlignmentResolution {
    /// Concrete alignment (never `Auto`)
    pub align: Align,
    /// Transverse translation to apply to the candidate
    pub offset: f64,
    /// Whether the borders of both sections already match before any shift
    pub aligned_match: bool,
}

/// Resolve `Auto` into a concrete alignment.
///
/// - Both widths odd: center.
/// - Previous width even: its open edge (top if open, bottom otherwise).
/// - Otherwise: bottom.
pub fn resolve_auto(previous_width: usize, previous_top_open: bool, width: usize) -> Align {
    let diff = width as i64 - previous_width as i64;
    if width % 2 == 1 && diff.rem_euclid(2) == 0 {
        Align::Center
    } else if previous_width % 2 == 0 {
        if previous_top_open {
            Align::Top
        } else {
            Align::Bottom
        }
    } else {
        Align::Bottom
    }
}

/// Compute the transverse offset of a `candidate` geometry of width `width`.
///
/// Without a previous section the requested alignment is returned as is, with no
/// offset and matching borders. Center alignment of widths differing by an odd
/// number of atoms is impossible and always fails.
pub fn resolve_alignment(
    previous: Option<&PlacementResult>,
    width: usize,
    candidate: &Geometry,
    requested: Align,
    axis: Axis,
) -> Result<AlignmentResolution> {
    let Some(previous) = previous else {
        return Ok(AlignmentResolution {
            align: requested,
            offset: 0.0,
            aligned_match: true,
        });
    };

    let diff = width as i64 - previous.width as i64;
    let align = match requested {
        Align::Auto => resolve_auto(previous.width, previous.open_borders.top, width),
        other => other,
    };

    let prev = &previous.transverse;
    let cand: AxisBounds = candidate
        .bounds(axis)
        .ok_or_else(|| RibbonError::geometry("cannot align a section without atoms"))?;

    let resolution = match align {
        Align::Center => {
            if diff.rem_euclid(2) == 1 {
                return Err(RibbonError::geometry(format!(
                    "at junction between sections of width {} and {width}: different parity \
                     sections can not be aligned by their centers",
                    previous.width
                )));
            }
            AlignmentResolution {
                align,
                offset: prev.mean - cand.mean,
                aligned_match: !previous.open_borders.top == (diff.rem_euclid(4) == 0),
            }
        }
        Align::Top => AlignmentResolution {
            align,
            offset: prev.max - cand.max,
            aligned_match: !previous.open_borders.top,
        },
        Align::Bottom | Align::Auto => {
            let last_bottom_open = (previous.width % 2 == 1) == previous.open_borders.top;
            let this_bottom_open = width % 2 == 0;
            AlignmentResolution {
                align: Align::Bottom,
                offset: prev.min - cand.min,
                aligned_match: last_bottom_open == this_bottom_open,
            }
        }
    };

    Ok(resolution)
}
