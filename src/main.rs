mod mapping;
mod parse;
mod progress;
mod translate;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use crate::mapping::load_mapping;
use crate::translate::translate_edges;

#[derive(Parser)]
#[command(name = "edgemap")]
#[command(
    about = "Remap edge list identifiers to compact internal integer ids",
    long_about = None
)]
struct Args {
    /// <mapping> <input-edges> <output-edges> to apply one mapping to both
    /// columns, or <mapping-1> <mapping-2> <input-edges> <output-edges> to
    /// map each column from its own namespace
    #[arg(value_name = "FILE", num_args = 3..=4, required = true)]
    files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let report = match args.files.as_slice() {
        [mapping, input, output] => {
            info!("loading id mapping from {}", mapping.display());
            let (map, _) = load_mapping(mapping)?;
            info!("mapping edges from {} to internal ids", input.display());
            translate_edges(input, output, &map, &map)?
        }
        [from_mapping, to_mapping, input, output] => {
            info!("loading source-column id mapping from {}", from_mapping.display());
            let (from_map, _) = load_mapping(from_mapping)?;
            info!("loading target-column id mapping from {}", to_mapping.display());
            let (to_map, _) = load_mapping(to_mapping)?;
            info!("mapping edges from {} to internal ids", input.display());
            translate_edges(input, output, &from_map, &to_map)?
        }
        _ => unreachable!("clap restricts FILE to 3 or 4 paths"),
    };

    info!(
        "wrote {} edges, discarded {} for unmapped endpoints, skipped {} malformed lines",
        report.written, report.discarded, report.malformed
    );

    Ok(())
}
