use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::fs::File;
use std::io::{self, Read};

use geomatch::geo::{haversine_km, Coordinate};
use geomatch::matcher::match_closest_points;
use geomatch::points_csv::{read_points, write_matches};
use geomatch::wire::handle_match_request;

#[derive(Parser, Debug)]
#[command(name = "geomatch")]
#[command(about = "Great-circle distances and nearest-neighbor matching between lat/lon point sets.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the haversine distance in km between two points
    Distance {
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },

    /// Match every point of one CSV (lat,lon) to its closest point in another
    Match {
        /// Points to match
        #[arg(short = 'a', long)]
        points_a: String,

        /// Candidate points. Must contain at least one row.
        #[arg(short = 'b', long)]
        points_b: String,

        /// Output CSV (lat_a, lon_a, lat_b, lon_b, distance_km). If omitted, prints a summary to stdout.
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Answer a JSON match request body, read from a file or stdin
    Json {
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn load_points(path: &str) -> Result<Vec<Coordinate>> {
    let file = File::open(path).with_context(|| format!("opening {}", path))?;
    let points = read_points(file).with_context(|| format!("reading points from {}", path))?;
    info!("Loaded {} points from {}", points.len(), path);
    Ok(points)
}

fn run_match(points_a: &str, points_b: &str, out: Option<String>) -> Result<()> {
    let a = load_points(points_a)?;
    let b = load_points(points_b)?;

    let matches = match_closest_points(&a, &b)
        .with_context(|| format!("matching {} against {}", points_a, points_b))?;

    if let Some(out_path) = out {
        let file = File::create(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        write_matches(file, &matches)?;
        info!("Wrote {} matches to {}", matches.len(), out_path);
    } else {
        println!("Points: {}", a.len());
        println!("Candidates: {}", b.len());
        if !matches.is_empty() {
            let mut maxd = 0.0_f64;
            let mut total = 0.0_f64;
            for &(p, q) in &matches {
                let d = haversine_km(p.0, p.1, q.0, q.1);
                total += d;
                if d > maxd {
                    maxd = d;
                }
            }
            println!("Mean match distance (km): {:.2}", total / matches.len() as f64);
            println!("Max match distance (km): {:.2}", maxd);
        }
    }
    Ok(())
}

fn run_json(input: Option<String>) -> Result<()> {
    let mut body = String::new();
    match input {
        Some(path) => {
            File::open(&path)
                .with_context(|| format!("opening {}", path))?
                .read_to_string(&mut body)
                .with_context(|| format!("reading {}", path))?;
        }
        None => {
            io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
        }
    }

    let response = handle_match_request(&body);
    println!("{}", response.body);
    if !response.is_success() {
        bail!("request rejected with status {}", response.status);
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let cli = Cli::parse();

    match cli.command {
        Command::Distance {
            lat1,
            lon1,
            lat2,
            lon2,
        } => {
            println!("{:.1}", haversine_km(lat1, lon1, lat2, lon2));
            Ok(())
        }
        Command::Match {
            points_a,
            points_b,
            out,
        } => run_match(&points_a, &points_b, out),
        Command::Json { input } => run_json(input),
    }
}
