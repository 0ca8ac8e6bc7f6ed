use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::fs::File;
use std::time::Instant;

use geomatch::geo::Coordinate;
use geomatch::matcher::match_closest_points;
use geomatch::points_csv::read_points;

#[derive(Parser, Debug)]
#[command(name = "profile")]
#[command(about = "Time repeated nearest-neighbor matches between two CSVs of lat,lon points.", long_about = None)]
struct Cli {
    /// Points to match
    #[arg(short = 'a', long)]
    points_a: String,

    /// Candidate points
    #[arg(short = 'b', long)]
    points_b: String,

    /// Number of runs.
    #[arg(short, long, default_value_t = 10)]
    num_runs: usize,
}

fn load(path: &str) -> Result<Vec<Coordinate>> {
    let file = File::open(path).with_context(|| format!("opening {}", path))?;
    read_points(file).with_context(|| format!("reading points from {}", path))
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    let a = load(&cli.points_a)?;
    let b = load(&cli.points_b)?;
    info!(
        "Profiling {} x {} = {} distance evaluations per run",
        a.len(),
        b.len(),
        a.len() * b.len()
    );

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    for _ in 0..cli.num_runs {
        let now = Instant::now();
        let matches = match_closest_points(&a, &b)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        std::hint::black_box(matches);
    }
    println!("{:?}", duration_millis);

    Ok(())
}
