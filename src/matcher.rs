use log::debug;

use crate::error::{MatchError, Result};
use crate::geo::{distance_between, Coordinate};

/// A point from the first sequence paired with its nearest candidate.
pub type MatchedPair = (Coordinate, Coordinate);

/// Index and distance (km) of the nearest candidate, or `None` when there are no candidates.
///
/// Candidates are scanned in order and only a strictly smaller distance replaces the
/// current best, so the first of several equidistant candidates wins.
pub fn closest_point(point: Coordinate, candidates: &[Coordinate]) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, &candidate) in candidates.iter().enumerate() {
        let d = distance_between(point, candidate);
        match best {
            None => best = Some((idx, d)),
            Some((_, best_d)) if d < best_d => best = Some((idx, d)),
            _ => {}
        }
    }
    best
}

/// Brute-force nearest neighbor: pairs every point of `points_a` with its closest point in
/// `points_b`, preserving the order of `points_a`.
///
/// Fails with [`MatchError::InvalidInput`] when `points_b` is empty, even if `points_a` is empty too.
pub fn match_closest_points(
    points_a: &[Coordinate],
    points_b: &[Coordinate],
) -> Result<Vec<MatchedPair>> {
    let no_candidates =
        || MatchError::InvalidInput("points_b must contain at least one candidate".to_string());
    if points_b.is_empty() {
        return Err(no_candidates());
    }

    let mut matched = Vec::with_capacity(points_a.len());
    for &point in points_a {
        let (idx, _) = closest_point(point, points_b).ok_or_else(no_candidates)?;
        matched.push((point, points_b[idx]));
    }

    debug!(
        "Matched {} points against {} candidates",
        matched.len(),
        points_b.len()
    );
    Ok(matched)
}
