// Section records: compact, serializable descriptions of sections and the
// composite-wide defaults they inherit from

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::atoms::{Atom, CommonAtoms};
use crate::config::DEFAULT_BOND;
use crate::error::{Result, RibbonError};
use crate::heteroribbon::alignment::Align;
use crate::heteroribbon::junction::LoneAtomPolicy;
use crate::heteroribbon::section::Section;
use crate::lattice::RibbonKind;

/// Parameters shared by every section of a heteroribbon unless overridden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDefaults {
    pub bond: f64,
    pub atoms: Vec<Atom>,
    pub kind: RibbonKind,
    pub align: Align,
    pub shift_quantum: bool,
    pub on_lone_atom: LoneAtomPolicy,
}

impl Default for SectionDefaults {
    fn default() -> Self {
        Self::graphene(DEFAULT_BOND)
    }
}

impl SectionDefaults {
    /// Carbon honeycomb with the given bond length
    pub fn graphene(bond: f64) -> Self {
        Self {
            bond,
            atoms: CommonAtoms::graphene(bond),
            kind: RibbonKind::default(),
            align: Align::default(),
            shift_quantum: false,
            on_lone_atom: LoneAtomPolicy::default(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bond > 0.0) {
            return Err(RibbonError::invalid_input(format!(
                "bond length must be positive ({})",
                self.bond
            )));
        }
        if self.atoms.is_empty() {
            return Err(RibbonError::invalid_input("at least one atom is required"));
        }
        Ok(())
    }
}

/// One section as written by a user; unset fields come from `SectionDefaults`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionSpec {
    #[serde(alias = "W")]
    pub width: usize,
    #[serde(default, alias = "L")]
    pub length: Option<usize>,
    #[serde(default)]
    pub shift: Option<i64>,
    #[serde(default)]
    pub align: Option<Align>,
    #[serde(default)]
    pub kind: Option<RibbonKind>,
    #[serde(default)]
    pub shift_quantum: Option<bool>,
    #[serde(default)]
    pub on_lone_atom: Option<LoneAtomPolicy>,
    #[serde(default)]
    pub invert_first: Option<bool>,
    #[serde(default)]
    pub bond: Option<f64>,
    #[serde(default, alias = "atom_spec")]
    pub atoms: Option<Vec<Atom>>,
}

impl SectionSpec {
    pub fn new(width: usize, length: usize, shift: i64) -> Self {
        Self {
            width,
            length: Some(length),
            shift: Some(shift),
            ..Self::default()
        }
    }

    pub fn into_section(self, defaults: &SectionDefaults) -> Section {
        let bond = self.bond.unwrap_or(defaults.bond);
        let atoms = self.atoms.unwrap_or_else(|| defaults.atoms.clone());
        Section::new(self.width)
            .with_lattice(bond, atoms)
            .with_length(self.length.unwrap_or(1))
            .with_shift(self.shift.unwrap_or(0))
            .with_align(self.align.unwrap_or(defaults.align))
            .with_kind(self.kind.unwrap_or(defaults.kind))
            .with_shift_quantum(self.shift_quantum.unwrap_or(defaults.shift_quantum))
            .with_on_lone_atom(self.on_lone_atom.unwrap_or(defaults.on_lone_atom))
            .with_invert_first(self.invert_first.unwrap_or(false))
    }
}

impl From<(usize, usize)> for SectionSpec {
    fn from((width, length): (usize, usize)) -> Self {
        Self::new(width, length, 0)
    }
}

impl From<(usize, usize, i64)> for SectionSpec {
    fn from((width, length, shift): (usize, usize, i64)) -> Self {
        Self::new(width, length, shift)
    }
}

fn parse_field<T: FromStr>(field: Option<&str>, name: &str, input: &str) -> Result<Option<T>> {
    match field.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            RibbonError::invalid_input(format!("section '{input}': invalid {name} '{value}'"))
        }),
    }
}

impl FromStr for SectionSpec {
    type Err = RibbonError;

    /// Parse `"W"`, `"W,L"` or `"W,L,shift"`
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = s.split(',');
        let width: usize = parse_field(fields.next(), "width", s)?
            .ok_or_else(|| RibbonError::invalid_input(format!("section '{s}': missing width")))?;
        let length = parse_field(fields.next(), "length", s)?;
        let shift = parse_field(fields.next(), "shift", s)?;
        if fields.next().is_some() {
            return Err(RibbonError::invalid_input(format!(
                "section '{s}': expected W,L[,shift]"
            )));
        }
        Ok(Self {
            width,
            length,
            shift,
            ..Self::default()
        })
    }
}
