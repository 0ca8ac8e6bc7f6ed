use csv::{ReaderBuilder, Writer};
use std::io::{Read, Write};

use crate::error::{MatchError, Result};
use crate::geo::{distance_between, Coordinate};
use crate::matcher::MatchedPair;

fn parse_column(value: &str, row: usize, column: &'static str) -> Result<f64> {
    value.trim().parse().map_err(|_| MatchError::Parse {
        row,
        column,
        value: value.to_string(),
    })
}

/// Reads `lat,lon` rows. The first line is a header; columns past the second are ignored.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<Coordinate>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut points = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result?;
        let row = i + 1;
        let lat = parse_column(record.get(0).unwrap_or(""), row, "lat")?;
        let lon = parse_column(record.get(1).unwrap_or(""), row, "lon")?;
        points.push((lat, lon));
    }
    Ok(points)
}

pub fn write_matches<W: Write>(writer: W, matches: &[MatchedPair]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["lat_a", "lon_a", "lat_b", "lon_b", "distance_km"])?;
    for &(a, b) in matches {
        wtr.write_record(&[
            a.0.to_string(),
            a.1.to_string(),
            b.0.to_string(),
            b.1.to_string(),
            format!("{:.6}", distance_between(a, b)),
        ])?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}
