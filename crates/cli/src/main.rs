//! U-CutList command-line front end.

mod input;
mod report;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use u_cutlist_core::{bill_of_materials, CutListOptimizer, PartRequirement};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Lay out cabinet parts on stock sheets")]
#[command(version)]
struct Cli {
    #[command(flatten)]
    sheet: SheetArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct SheetArgs {
    /// TOML configuration file (sheet size, kerf, tolerance)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Sheet width, overrides the configuration file
    #[arg(long, global = true)]
    sheet_width: Option<f64>,

    /// Sheet height, overrides the configuration file
    #[arg(long, global = true)]
    sheet_height: Option<f64>,

    /// Saw kerf left between parts, overrides the configuration file
    #[arg(long, global = true)]
    kerf: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a JSON list of part requirements
    Optimize {
        /// Path to the JSON requirements file
        file: PathBuf,

        /// Output file for the packing result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print the summary, not the per-sheet layout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Build the bill of materials for a JSON list of cabinets and optimize it
    Cabinets {
        /// Path to the JSON cabinets file
        file: PathBuf,

        /// Output file for the packing result (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Only print the summary, not the per-sheet layout
        #[arg(short, long)]
        quiet: bool,
    },

    /// Generate a synthetic requirements file
    Generate {
        /// Number of part kinds
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Random seed for reproducibility
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Output file
        #[arg(short, long, default_value = "parts.json")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Optimize {
            file,
            output,
            quiet,
        } => {
            let optimizer = build_optimizer(&cli.sheet)?;
            let requirements = input::load_requirements(&file)?;
            println!(
                "Loaded {} requirements from {}",
                requirements.len(),
                file.display()
            );
            run(&optimizer, &requirements, output, quiet)?;
        }

        Commands::Cabinets {
            file,
            output,
            quiet,
        } => {
            let optimizer = build_optimizer(&cli.sheet)?;
            let cabinets = input::load_cabinets(&file)?;
            let requirements = bill_of_materials(&cabinets);
            println!(
                "Loaded {} cabinets ({} part kinds) from {}",
                cabinets.len(),
                requirements.len(),
                file.display()
            );
            if !quiet {
                report::print_bill_of_materials(&requirements);
            }
            run(&optimizer, &requirements, output, quiet)?;
        }

        Commands::Generate {
            count,
            seed,
            output,
        } => {
            let requirements = input::synthetic_requirements(count, seed);
            let json = serde_json::to_string_pretty(&requirements)?;
            std::fs::write(&output, json)?;
            println!(
                "Generated {} requirements (seed={}) to {}",
                requirements.len(),
                seed,
                output.display()
            );
        }
    }

    Ok(())
}

fn build_optimizer(args: &SheetArgs) -> anyhow::Result<CutListOptimizer> {
    let mut config = match &args.config {
        Some(path) => input::load_config(path)?,
        None => u_cutlist_core::Config::default(),
    };

    if args.sheet_width.is_some() || args.sheet_height.is_some() {
        let width = args.sheet_width.unwrap_or(config.sheet.width);
        let height = args.sheet_height.unwrap_or(config.sheet.height);
        config = config.with_sheet_size(width, height);
    }
    if let Some(kerf) = args.kerf {
        config = config.with_kerf(kerf);
    }

    Ok(CutListOptimizer::try_new(config)?)
}

fn run(
    optimizer: &CutListOptimizer,
    requirements: &[PartRequirement],
    output: Option<PathBuf>,
    quiet: bool,
) -> anyhow::Result<()> {
    let result = optimizer.optimize(requirements);

    report::print_summary(&result);
    if !quiet {
        report::print_layout(&result);
    }
    report::print_unplaced(&result);

    if let Some(path) = output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(&path, json)?;
        println!("\nResult saved to: {}", path.display());
    }

    Ok(())
}
