use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};

use svg2mesh::{error::Error, extract, logging, output};

#[derive(Parser)]
#[command(name = "svg2mesh", about = "Convert SVG shapes into triangulated polygon meshes")]
struct Args {
    /// Input SVG file.
    #[arg(default_value = "test.svg")]
    input: PathBuf,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value = "json")]
    format: Format,

    /// Parameter step used to sample cubic Bezier curves into points.
    #[arg(long, default_value_t = 0.1)]
    resolution: f64,

    /// Enable per-shape debug diagnostics on stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Json,
    Obj,
}

fn main() {
    let args = Args::parse();
    logging::init(args.verbose);

    if let Err(err) = run(&args) {
        if err.is_internal() {
            log::error!("{err} (this is a bug, not a problem with the input)");
        } else {
            log::error!("{err}");
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Error> {
    if !(args.resolution > 0.0 && args.resolution <= 1.0) {
        return Err(Error::InvalidResolution(args.resolution));
    }

    let text = fs::read_to_string(&args.input)?;
    let doc = roxmltree::Document::parse(&text)?;

    let polygons = extract::extract_polygons(&doc, args.resolution)?;
    log::debug!("extracted {} polygons", polygons.len());

    let stdout = io::stdout().lock();
    let mut out = io::BufWriter::new(stdout);
    match args.format {
        Format::Json => output::write_json(&mut out, &polygons)?,
        Format::Obj => output::write_obj(&mut out, &polygons)?,
    }
    out.flush()?;
    Ok(())
}
