//! TypeScript model generator CLI
//!
//! Command-line interface for generating TypeScript model definitions from
//! an OpenAPI document's schema components.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use ts_model_generator_generator::{DirectorySink, ModelGenerator};
use ts_model_generator_parser::SchemaParser;

#[derive(Parser)]
#[command(name = "ts-model-generator")]
#[command(version, about = "Generate TypeScript model definitions from OpenAPI schemas", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a spec file and display the schemas it defines
    #[command(after_help = "EXAMPLES:\n  \
        ts-model-generator parse --spec openapi.json")]
    Parse {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        spec: PathBuf,
    },

    /// Generate one .ts model file per schema in the spec
    #[command(after_help = "EXAMPLES:\n  \
        ts-model-generator generate \\\n    \
        --spec openapi.json \\\n    \
        --output ./src/model")]
    Generate {
        /// Path to the OpenAPI spec file
        #[arg(short, long)]
        spec: PathBuf,

        /// Output directory for generated model files
        #[arg(short, long, default_value = "./src/model")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { spec } => {
            parse_command(spec.as_path(), cli.verbose)?;
        }
        Commands::Generate { spec, output } => {
            generate_command(spec.as_path(), output.as_path(), cli.verbose)?;
        }
    }

    Ok(())
}

fn parse_command(spec_path: &Path, verbose: bool) -> Result<()> {
    println!("{} Parsing spec file: {}", "→".cyan(), spec_path.display());

    let parser = SchemaParser::from_file(spec_path).context("Failed to load OpenAPI spec")?;
    let document = parser.parse().context("Failed to classify schemas")?;

    println!("\n{}", "✓ Parse successful!".green().bold());
    println!("  Schemas: {}", document.len());

    if verbose {
        println!("\n{}", "Schemas:".bold());
        for name in document.schemas.keys() {
            println!("  • {}", name.cyan());
        }
    }

    Ok(())
}

fn generate_command(spec_path: &Path, output: &Path, verbose: bool) -> Result<()> {
    println!(
        "{} Generating models from: {}",
        "→".cyan(),
        spec_path.display()
    );

    let parser = SchemaParser::from_file(spec_path).context("Failed to load OpenAPI spec")?;
    let document = parser.parse().context("Failed to classify schemas")?;

    println!("{} Parsed {} schemas", "✓".green(), document.len());

    if verbose {
        println!("  Output: {}", output.display());
    }

    let generator = ModelGenerator::new(document).context("Failed to create generator")?;
    let sink = DirectorySink::create(output).with_context(|| {
        format!("Failed to create output directory {}", output.display())
    })?;

    let names: Vec<String> = generator.schema_names().map(String::from).collect();
    for name in &names {
        println!("{} Generating type {}...", "→".cyan(), name.yellow());
        generator
            .generate_one(name, &sink)
            .with_context(|| format!("Failed to generate model for {}", name))?;
    }

    println!("\n{}", "✓ Generation complete!".green().bold());
    println!(
        "  {} model files written to {}",
        names.len(),
        output.display()
    );

    Ok(())
}
