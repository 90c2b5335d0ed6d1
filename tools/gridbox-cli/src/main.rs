//! Grid-box intersections boundary tool.
//!
//! Builds the input and output grids from their name tokens, derives each
//! grid's row-boundary latitudes, and prints the merged, origin-tagged
//! boundary sequence consumed by the box-intersection stage.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use gridbox_common::GeographicArea;
use gridbox_grid::{factory, merge};

#[derive(Parser, Debug)]
#[command(name = "gridbox")]
#[command(about = "Grid-box intersections interpolation method")]
struct Args {
    /// Input grid name: O<N>, F<N> or LL<Ni>x<Nj>
    #[arg(default_value = "O12")]
    input: String,

    /// Output grid name
    #[arg(default_value = "O6")]
    output: String,

    /// Input grid area, as N/W/S/E
    #[arg(short = 'I', long, default_value = "90/0/-90/360")]
    input_area: String,

    /// Output grid area, as N/W/S/E
    #[arg(short = 'O', long, default_value = "90/0/-90/360")]
    output_area: String,

    /// Emit the merged sequence as a JSON array instead of text
    #[arg(long)]
    json: bool,

    /// Log level
    #[arg(long, env = "GRIDBOX_LOG", default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let input_area: GeographicArea = args
        .input_area
        .parse()
        .with_context(|| format!("parsing input area '{}'", args.input_area))?;
    let output_area: GeographicArea = args
        .output_area
        .parse()
        .with_context(|| format!("parsing output area '{}'", args.output_area))?;

    let input = factory::build(&args.input, input_area)
        .with_context(|| format!("building input grid '{}'", args.input))?;
    let output = factory::build(&args.output, output_area)
        .with_context(|| format!("building output grid '{}'", args.output))?;

    info!(
        name = %args.input,
        rows = input.nj(),
        cells = input.cell_count(),
        "input grid"
    );
    info!(
        name = %args.output,
        rows = output.nj(),
        cells = output.cell_count(),
        "output grid"
    );

    let merged = merge::merge_grids(&input, &output)?;

    if args.json {
        println!("{}", serde_json::to_string(&merged)?);
    } else {
        let rendered: Vec<String> = merged.iter().map(|m| m.to_string()).collect();
        println!("{}", rendered.join(" "));
    }

    Ok(())
}
