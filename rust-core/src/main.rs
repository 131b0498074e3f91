use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use log::info;
use serde::Serialize;

use ribbon_lattice::atoms::CommonAtoms;
use ribbon_lattice::heteroribbon::{
    heteroribbon_from_specs, resolve_auto, valid_shifts, Align, LoneAtomPolicy, SectionDefaults,
    SectionSpec,
};
use ribbon_lattice::lattice::{nanoribbon, RibbonKind};

#[derive(Parser)]
#[command(name = "ribbon-lattice")]
#[command(about = "Honeycomb nanoribbon and heteroribbon builder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Write the JSON result to a file instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,
}

#[derive(Args)]
struct LatticeArgs {
    /// Edge termination
    #[arg(short, long, default_value = "armchair")]
    kind: RibbonKind,

    /// Bond length between neighbouring atoms (Å)
    #[arg(short, long, default_value_t = 1.42)]
    bond: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the unit cell of a pristine nanoribbon
    Ribbon {
        /// Number of atoms across the ribbon
        #[arg(short, long)]
        width: usize,

        #[command(flatten)]
        lattice: LatticeArgs,
    },
    /// Join ribbon sections into a heteroribbon
    Hetero {
        /// Section as W,L[,shift] (repeat for every section)
        #[arg(short, long = "section", value_name = "W,L[,SHIFT]")]
        sections: Vec<SectionSpec>,

        /// JSON file with a list of section records
        #[arg(long, conflicts_with = "sections")]
        sections_file: Option<PathBuf>,

        /// Alignment of every section with the previous one
        #[arg(short, long, default_value = "center")]
        align: Align,

        /// Interpret shifts as indices into the valid shifts
        #[arg(short, long)]
        quantized: bool,

        /// What to do when a junction leaves lone atoms
        #[arg(long, default_value = "ignore")]
        on_lone_atom: LoneAtomPolicy,

        /// Start the first section with the other border
        #[arg(long)]
        invert_first: bool,

        #[command(flatten)]
        lattice: LatticeArgs,
    },
    /// List the valid shifts of a junction
    Shifts {
        /// Previous section as W[,L]
        #[arg(short, long)]
        previous: SectionSpec,

        /// Width of the incoming section
        #[arg(short, long)]
        current: usize,

        /// Alignment of the incoming section
        #[arg(short, long, default_value = "center")]
        align: Align,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting ribbon-lattice v{}", ribbon_lattice::VERSION);

    let output = cli.output.as_deref();
    match cli.command {
        Commands::Ribbon { width, lattice } => {
            info!("Building {} ribbon of width {}", lattice.kind, width);
            let atoms = CommonAtoms::graphene(lattice.bond);
            let ribbon = nanoribbon(lattice.bond, &atoms, width, lattice.kind)
                .with_context(|| format!("failed to build ribbon of width {width}"))?;
            write_json(&ribbon, output)
        }
        Commands::Hetero {
            sections,
            sections_file,
            align,
            quantized,
            on_lone_atom,
            invert_first,
            lattice,
        } => {
            let mut specs = match sections_file {
                Some(path) => read_sections(&path)?,
                None => sections,
            };
            if specs.is_empty() {
                bail!("no sections given, use --section W,L[,shift] or --sections-file");
            }
            if let Some(first) = specs.first_mut() {
                first.invert_first.get_or_insert(invert_first);
            }

            let defaults = SectionDefaults {
                kind: lattice.kind,
                align,
                shift_quantum: quantized,
                on_lone_atom,
                ..SectionDefaults::graphene(lattice.bond)
            };
            info!("Joining {} sections", specs.len());
            let ribbon =
                heteroribbon_from_specs(specs, &defaults).context("failed to build heteroribbon")?;
            write_json(&ribbon, output)
        }
        Commands::Shifts {
            previous,
            current,
            align,
        } => {
            let placement = previous
                .into_section(&SectionDefaults::default())
                .build_section(None)
                .context("failed to build previous section")?;
            let top_open = placement.open_borders.top;
            let align = match align {
                Align::Auto => resolve_auto(placement.width, top_open, current),
                other => other,
            };
            let shifts = valid_shifts(placement.width, top_open, current, align);
            info!(
                "Junction {} -> {} ({align}, top border open: {top_open})",
                placement.width, current
            );
            write_json(&shifts, output)
        }
    }
}

fn read_sections(path: &Path) -> Result<Vec<SectionSpec>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid section list in {}", path.display()))
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
