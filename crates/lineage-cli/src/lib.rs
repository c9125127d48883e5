//! CLI logic for the lineage chart tool.
//!
//! Reads a JSON array of table records, runs the layout engine, and writes
//! the positioned chart document for an external renderer.

mod args;
mod config;
mod error;

pub use args::Args;
pub use error::CliError;

use std::fs;

use log::info;

use lineage::{ChartBuilder, TableNode};

/// Run the lineage CLI application
///
/// This function reads the input table list, computes the chart layout, and
/// writes the resulting JSON document to the output file.
///
/// # Errors
///
/// Returns `CliError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Input parsing errors
/// - Layout errors (malformed lineage)
pub fn run(args: &Args) -> Result<(), CliError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing lineage chart"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read and parse the input table list
    let source = fs::read_to_string(&args.input)?;
    let tables: Vec<TableNode> = serde_json::from_str(&source)?;

    // Compute the chart layout
    let builder = ChartBuilder::new(app_config);
    let chart = builder.build_chart(&tables)?;

    // Write the output document
    let document = serde_json::to_string_pretty(&chart)?;
    fs::write(&args.output, document)?;

    info!(output_file = args.output; "Chart exported successfully");

    Ok(())
}
