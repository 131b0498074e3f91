// Section model: one ribbon segment of a heteroribbon and its placement after
// the previously placed segment

use std::cell::OnceCell;
use std::fmt;

use log::debug;

use crate::atoms::{Atom, CommonAtoms};
use crate::config::{CUT_MARGIN, DEFAULT_BOND};
use crate::error::{Result, RibbonError};
use crate::geometries::{AxisBounds, Geometry};
use crate::heteroribbon::alignment::{resolve_alignment, Align};
use crate::heteroribbon::junction::{junction_error, LoneAtomPolicy};
use crate::heteroribbon::shifts::{resolve_shift, valid_shifts};
use crate::interfaces::Axis;
use crate::lattice::{nanoribbon, RibbonKind};

/// Whether each transverse edge of a placed section exposes an incomplete hexagon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenBorders {
    /// Border facing the previous section
    pub bottom: bool,
    /// Border facing the next section
    pub top: bool,
}

/// Result of placing a section: everything the next section needs to join it
#[derive(Debug, Clone)]
pub struct PlacementResult {
    /// Placed (shifted, tiled and trimmed) atoms of the section
    pub geometry: Geometry,
    pub open_borders: OpenBorders,
    pub width: usize,
    pub kind: RibbonKind,
    pub bond: f64,
    /// Extent of the placed atoms along the transverse axis
    pub transverse: AxisBounds,
    /// Description of the section, used in error messages
    pub label: String,
}

impl PlacementResult {
    fn new(section: &Section, geometry: Geometry, open_borders: OpenBorders) -> Result<Self> {
        let transverse = geometry
            .bounds(section.kind.transverse_axis())
            .ok_or_else(|| RibbonError::geometry(format!("section {section} has no atoms")))?;
        Ok(Self {
            geometry,
            open_borders,
            width: section.width,
            kind: section.kind,
            bond: section.bond,
            transverse,
            label: section.to_string(),
        })
    }

    /// Translate the placed atoms, keeping the transverse bounds in sync
    pub fn moved_along(mut self, axis: Axis, amount: f64) -> Self {
        self.geometry = self.geometry.moved_along(axis, amount);
        if axis == self.kind.transverse_axis() {
            self.transverse.min += amount;
            self.transverse.max += amount;
            self.transverse.mean += amount;
        }
        self
    }
}

impl fmt::Display for PlacementResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// One nanoribbon segment of a heteroribbon.
///
/// Parameters are fixed at construction; the pristine ribbon is built lazily
/// and every placement works on a copy, so the same section can be placed any
/// number of times.
#[derive(Debug, Clone)]
pub struct Section {
    width: usize,
    length: usize,
    shift: i64,
    align: Align,
    kind: RibbonKind,
    bond: f64,
    atoms: Vec<Atom>,
    shift_quantum: bool,
    on_lone_atom: LoneAtomPolicy,
    invert_first: bool,
    pristine: OnceCell<Geometry>,
}

impl Section {
    /// Create a section of `width` atoms with graphene defaults and `L = 1`
    pub fn new(width: usize) -> Self {
        Self {
            width,
            length: 1,
            shift: 0,
            align: Align::default(),
            kind: RibbonKind::default(),
            bond: DEFAULT_BOND,
            atoms: CommonAtoms::graphene(DEFAULT_BOND),
            shift_quantum: false,
            on_lone_atom: LoneAtomPolicy::default(),
            invert_first: false,
            pristine: OnceCell::new(),
        }
    }

    /// Number of transverse strings of atoms (half unit cells)
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Shift with respect to the previous section (positive is upwards)
    pub fn with_shift(mut self, shift: i64) -> Self {
        self.shift = shift;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_kind(mut self, kind: RibbonKind) -> Self {
        self.kind = kind;
        self.pristine = OnceCell::new();
        self
    }

    /// Bond length and atoms of the underlying lattice
    pub fn with_lattice(mut self, bond: f64, atoms: Vec<Atom>) -> Self {
        self.bond = bond;
        self.atoms = atoms;
        self.pristine = OnceCell::new();
        self
    }

    /// Interpret `shift` as an index into the valid shifts (0 = best aligned)
    pub fn with_shift_quantum(mut self, quantized: bool) -> Self {
        self.shift_quantum = quantized;
        self
    }

    pub fn with_on_lone_atom(mut self, policy: LoneAtomPolicy) -> Self {
        self.on_lone_atom = policy;
        self
    }

    /// Start with the other border when this is the first section
    pub fn with_invert_first(mut self, invert: bool) -> Self {
        self.invert_first = invert;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn shift(&self) -> i64 {
        self.shift
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn kind(&self) -> RibbonKind {
        self.kind
    }

    pub fn bond(&self) -> f64 {
        self.bond
    }

    pub fn shift_quantum(&self) -> bool {
        self.shift_quantum
    }

    pub fn invert_first(&self) -> bool {
        self.invert_first
    }

    /// Effective lone atom policy; quantized shifts always raise
    pub fn on_lone_atom(&self) -> LoneAtomPolicy {
        if self.shift_quantum {
            LoneAtomPolicy::Raise
        } else {
            self.on_lone_atom
        }
    }

    /// Pristine ribbon unit cell of this section
    pub fn pristine(&self) -> Result<&Geometry> {
        if let Some(geometry) = self.pristine.get() {
            return Ok(geometry);
        }
        if self.length == 0 {
            return Err(RibbonError::invalid_input(format!(
                "section length needs to be a positive integer ({})",
                self.length
            )));
        }
        let geometry = nanoribbon(self.bond, &self.atoms, self.width, self.kind)?;
        Ok(self.pristine.get_or_init(|| geometry))
    }

    fn check_compatible(&self, previous: &PlacementResult) -> Result<()> {
        if self.kind != previous.kind {
            return Err(junction_error(previous, self, "Ribbons must be of same type."));
        }
        if (self.bond - previous.bond).abs() > f64::EPSILON {
            return Err(junction_error(
                previous,
                self,
                "Ribbons must have same bond length.",
            ));
        }
        Ok(())
    }

    /// Change the border used by the ribbon by moving it half a unit cell along
    /// its periodic direction. Must happen before tiling.
    fn shift_unit_cell(&self, geometry: Geometry) -> Geometry {
        let axis = self.kind.longitudinal_axis();
        let half = geometry.cell().vector(axis) / 2.0;
        geometry.moved(half).wrapped()
    }

    /// Validate (or quantize) the requested shift against the valid shifts of
    /// the junction with `previous`.
    fn parse_shift(&self, previous: &PlacementResult, align: Align) -> Result<i64> {
        let policy = self.on_lone_atom();
        if policy == LoneAtomPolicy::Ignore {
            return Ok(self.shift);
        }

        // An open odd section that is wider than the incoming one always leaves lone atoms
        if previous.width % 2 == 1 && self.width < previous.width && previous.open_borders.top {
            policy.dispatch(junction_error(
                previous,
                self,
                "LONE ATOMS: Previous odd section, which has an open end, is wider than the \
                 incoming one. A wider odd section must always have a closed end. You can solve \
                 this by making the previous section one unit smaller or larger (L = L +- 1).",
            ))?;
        }

        let valid = valid_shifts(previous.width, previous.open_borders.top, self.width, align);
        debug!("valid shifts after {previous}: {valid:?}");

        match resolve_shift(self.shift, &valid, self.shift_quantum) {
            Ok(shift) => Ok(shift),
            Err(err) => {
                policy.dispatch(junction_error(previous, self, err.to_string()))?;
                Ok(self.shift)
            }
        }
    }

    /// Place this section after `previous` (or as the first section).
    ///
    /// The placement is shifted, tiled `(L + 1) / 2` times and, for odd `L`,
    /// trimmed by its trailing string of atoms.
    pub fn build_section(&self, previous: Option<&PlacementResult>) -> Result<PlacementResult> {
        let long = self.kind.longitudinal_axis();
        let trans = self.kind.transverse_axis();

        let mut section = self.pristine()?.clone();
        let mut borders = OpenBorders::default();

        match previous {
            None => {
                if self.invert_first {
                    section = self.shift_unit_cell(section);
                    borders.bottom = !borders.bottom;
                }
            }
            Some(previous) => {
                self.check_compatible(previous)?;

                let alignment =
                    resolve_alignment(Some(previous), self.width, &section, self.align, trans)?;
                let shift = self.parse_shift(previous, alignment.align)?;

                // Distance between transverse rows of atoms (sin 60°)
                let atom_shift = self.bond * 3.0_f64.sqrt() / 2.0;

                // Switch border if the requested shift makes them mismatch
                if alignment.aligned_match == (shift.rem_euclid(2) == 1) {
                    section = self.shift_unit_cell(section);
                    borders.bottom = !borders.bottom;
                }

                debug!(
                    "placing {self}: align={} offset={:.4} shift={shift}",
                    alignment.align, alignment.offset
                );
                section = section.moved_along(trans, alignment.offset + shift as f64 * atom_shift);
            }
        }

        let tiles = (self.length + 1) / 2;
        let cut_last = (self.length + 1) % 2 == 0;

        section = section.tiled(tiles, long)?;
        if cut_last {
            let factor = self.length as f64 / (self.length + 1) as f64;
            let cell = section.cell().scaled(long, factor)?;
            let limit = cell.length(long) - CUT_MARGIN;
            section = section
                .with_cell(cell)
                .retain(|p| p[long.index()] < limit);
        }

        borders.top = borders.bottom != cut_last;

        PlacementResult::new(self, section, borders)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Section(W={}, L={}, shift={}, align={}, kind={})",
            self.width, self.length, self.shift, self.align, self.kind
        )
    }
}
