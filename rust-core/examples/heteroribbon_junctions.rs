/// Example building heteroribbons out of armchair sections
///
/// Shows the valid shifts of a junction, a plain two-section heteroribbon,
/// quantized shifts and how the lone atom policy reports bad junctions.
use ribbon_lattice::heteroribbon::{
    assemble_with_placements, heteroribbon, valid_shifts, Align, LoneAtomPolicy, Section,
};
use ribbon_lattice::interfaces::Axis;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Joining Nanoribbon Sections ===\n");

    // Example 1: Valid shifts between a 7 and an 11 wide section
    println!("1. Valid shifts of a 7 -> 11 junction (closed top border):");
    for align in [Align::Bottom, Align::Center, Align::Top] {
        println!("   {:>6}: {:?}", align, valid_shifts(7, false, 11, align));
    }
    println!();

    // Example 2: A simple widening heteroribbon
    println!("2. Building 7 (L=2) -> 11 (L=2):");
    let sections = [
        Section::new(7).with_length(2),
        Section::new(11).with_length(2),
    ];
    let (ribbon, placements) = assemble_with_placements(&sections)?;
    println!("   Atoms: {}", ribbon.len());
    println!("   Cell length: {:.3}", ribbon.cell().length(Axis::X));
    for placement in &placements {
        println!(
            "   {} -> borders {:?}, y in [{:.3}, {:.3}]",
            placement, placement.open_borders, placement.transverse.min, placement.transverse.max
        );
    }
    println!(
        "   Lone atoms: {}\n",
        ribbon.lone_atoms(1.42 * 1.1, &[Axis::X]).len()
    );

    // Example 3: Quantized shifts walk through the valid shifts
    println!("3. Quantized shifts for 7 -> 9:");
    for shift in -2..=2 {
        let sections = [
            Section::new(7).with_length(2),
            Section::new(9)
                .with_length(2)
                .with_shift(shift)
                .with_shift_quantum(true),
        ];
        let (_, placements) = assemble_with_placements(&sections)?;
        println!("   shift {:>2}: bottom at y = {:.3}", shift, placements[1].transverse.min);
    }
    println!();

    // Example 4: A shift that leaves lone atoms
    println!("4. Invalid shift under the raise policy:");
    let sections = [
        Section::new(7).with_length(2),
        Section::new(7)
            .with_length(2)
            .with_shift(1)
            .with_on_lone_atom(LoneAtomPolicy::Raise),
    ];
    match heteroribbon(&sections) {
        Ok(_) => println!("   unexpectedly succeeded"),
        Err(err) => println!("   {err}"),
    }

    Ok(())
}
