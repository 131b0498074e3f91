// Composite assembler: walks a list of sections and appends each placement
// onto the running composite geometry

use log::{debug, info};

use crate::config::COMPOSITE_PADDING;
use crate::error::{Result, RibbonError};
use crate::geometries::Geometry;
use crate::heteroribbon::defaults::{SectionDefaults, SectionSpec};
use crate::heteroribbon::section::{PlacementResult, Section};

/// A building block that knows how to add itself onto a composite geometry
pub trait CompositeSection {
    /// What the next section needs to know about this one once it is placed
    type Placement;

    /// Place the section after `previous` and append it to `composite`
    /// (`None` for the first section).
    fn add_section(
        &self,
        composite: Option<Geometry>,
        previous: Option<&Self::Placement>,
    ) -> Result<(Geometry, Self::Placement)>;
}

/// Build a composite geometry by adding `sections` one after the other.
///
/// Returns the final geometry together with the placement of every section.
pub fn composite_geometry<S: CompositeSection>(
    sections: &[S],
) -> Result<(Geometry, Vec<S::Placement>)> {
    let mut composite: Option<Geometry> = None;
    let mut placements: Vec<S::Placement> = Vec::with_capacity(sections.len());

    for section in sections {
        let (geometry, placement) = section.add_section(composite.take(), placements.last())?;
        composite = Some(geometry);
        placements.push(placement);
    }

    let geometry = composite
        .ok_or_else(|| RibbonError::invalid_input("a composite needs at least one section"))?;
    Ok((geometry, placements))
}

impl CompositeSection for Section {
    type Placement = PlacementResult;

    fn add_section(
        &self,
        composite: Option<Geometry>,
        previous: Option<&PlacementResult>,
    ) -> Result<(Geometry, PlacementResult)> {
        let mut placement = self.build_section(previous)?;
        let Some(mut composite) = composite else {
            return Ok((placement.geometry.clone(), placement));
        };

        let trans = self.kind().transverse_axis();
        let long = self.kind().longitudinal_axis();

        // Keep the new section inside the cell along the transverse direction
        if placement.transverse.min < 0.0 {
            let offset = -placement.transverse.min + COMPOSITE_PADDING;
            debug!("{self} sticks out below the cell, adding {offset:.4} of vacuum");
            composite = composite
                .with_vacuum(offset, trans)?
                .moved_along(trans, offset);
            placement = placement.moved_along(trans, offset);
        }
        let height = composite.cell().length(trans);
        if placement.transverse.max > height {
            let extra = placement.transverse.max - height + COMPOSITE_PADDING;
            debug!("{self} sticks out above the cell, adding {extra:.4} of vacuum");
            composite = composite.with_vacuum(extra, trans)?;
        }

        let composite = composite.appended(&placement.geometry, long)?;
        Ok((composite, placement))
    }
}

/// Build a heteroribbon and keep the placement of every section
pub fn assemble_with_placements(sections: &[Section]) -> Result<(Geometry, Vec<PlacementResult>)> {
    if sections.is_empty() {
        return Err(RibbonError::invalid_input(
            "a heteroribbon needs at least one section",
        ));
    }

    let (geometry, placements) = composite_geometry(sections)?;
    info!(
        "built heteroribbon of {} sections: {} atoms, cell length {:.4}",
        placements.len(),
        geometry.len(),
        geometry
            .cell()
            .length(sections[0].kind().longitudinal_axis())
    );
    Ok((geometry, placements))
}

/// Build a heteroribbon by joining `sections` in order
pub fn heteroribbon(sections: &[Section]) -> Result<Geometry> {
    assemble_with_placements(sections).map(|(geometry, _)| geometry)
}

/// Build a heteroribbon from compact section records
pub fn heteroribbon_from_specs<I>(sections: I, defaults: &SectionDefaults) -> Result<Geometry>
where
    I: IntoIterator,
    I::Item: Into<SectionSpec>,
{
    defaults.validate()?;
    let sections: Vec<Section> = sections
        .into_iter()
        .map(|spec| Into::<SectionSpec>::into(spec).into_section(defaults))
        .collect();
    heteroribbon(&sections)
}

/// Carbon heteroribbon with a 1.42 Å bond
///
/// ```
/// use ribbon_lattice::heteroribbon::graphene_heteroribbon;
///
/// let ribbon = graphene_heteroribbon([(7usize, 2usize, 0i64), (11, 2, 0)]).unwrap();
/// assert_eq!(ribbon.len(), 36);
/// ```
pub fn graphene_heteroribbon<I>(sections: I) -> Result<Geometry>
where
    I: IntoIterator,
    I::Item: Into<SectionSpec>,
{
    heteroribbon_from_specs(sections, &SectionDefaults::default())
}
