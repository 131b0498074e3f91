// Heteroribbon module: Contains the section model and the junction algorithm
// This module joins ribbon sections of different widths without leaving lone atoms

// ======================== MODULE DECLARATIONS ========================
pub mod alignment;
pub mod composite;
pub mod defaults;
pub mod junction;
pub mod section;
pub mod shifts;

// Test modules
mod _tests_alignment;
mod _tests_shifts;

// ======================== SECTIONS ========================
pub use section::{
    OpenBorders,     // struct - open/closed state of the bottom and top borders
    PlacementResult, // struct - placed section, threaded to the next junction
    Section,         // struct - one ribbon segment (W, L, shift, align, ...)
};
// Section impl methods:
//   new(width) -> Self / with_length / with_shift / with_align / ...   - builder
//   pristine(&self) -> Result<&Geometry>                               - cached ribbon unit cell
//   build_section(&self, previous: Option<&PlacementResult>)           - shift, tile and trim

pub use defaults::{
    SectionDefaults, // struct - bond/atoms/kind/align shared by all sections
    SectionSpec,     // struct - compact section record ("W,L[,shift]", tuples, JSON)
};

// ======================== JUNCTIONS ========================
pub use alignment::{
    Align,               // enum - bottom, top, center or auto
    AlignmentResolution, // struct - resolved align, transverse offset, border match
    resolve_alignment,   // fn(previous, width, candidate, requested, axis) -> Result<AlignmentResolution>
    resolve_auto,        // fn(previous_width, previous_top_open, width) -> Align
};
pub use junction::{
    LoneAtomPolicy, // enum - ignore, warn or raise on lone atoms
    junction_error, // fn(previous, current, message) -> RibbonError
};
pub use shifts::{
    JunctionCase,  // enum - parity/width class of a junction
    ShiftError,    // enum - why a requested shift was rejected
    ShiftRule,     // struct - anchors + step-2 ranges + alignment offset
    aligned_index, // fn(valid: &[i64]) -> Option<usize> - index of the best aligned shift
    resolve_shift, // fn(requested, valid, quantized) -> Result<i64, ShiftError>
    valid_shifts,  // fn(previous_width, previous_top_open, width, align) -> Vec<i64>
};

// ======================== ASSEMBLY ========================
pub use composite::{
    CompositeSection,         // trait - section that appends itself onto a composite
    assemble_with_placements, // fn(&[Section]) -> Result<(Geometry, Vec<PlacementResult>)>
    composite_geometry,       // fn<S: CompositeSection>(&[S]) -> Result<(Geometry, Vec<S::Placement>)>
    graphene_heteroribbon,    // fn(sections) -> Result<Geometry> - carbon, 1.42 Å bond
    heteroribbon,             // fn(&[Section]) -> Result<Geometry>
    heteroribbon_from_specs,  // fn(sections, &SectionDefaults) -> Result<Geometry>
};
