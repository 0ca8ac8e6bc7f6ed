/// Earth radius in kilometers. The sphere approximation is within ~0.5% of ellipsoidal distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A `(latitude, longitude)` pair in degrees. Values are not range checked.
pub type Coordinate = (f64, f64);

/// Great-circle distance using the haversine formula.
/// Input lat/lon in degrees. Output in kilometers.
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1, lat2, lon2) = (
        lat1.to_radians(),
        lon1.to_radians(),
        lat2.to_radians(),
        lon2.to_radians(),
    );
    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1.0 for antipodal points. NaN still passes through.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn distance_between(a: Coordinate, b: Coordinate) -> f64 {
    haversine_km(a.0, a.1, b.0, b.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const NYC: Coordinate = (40.7128, -74.0060);
    const LONDON: Coordinate = (51.5074, -0.1278);

    fn round1(x: f64) -> f64 {
        (x * 10.0).round() / 10.0
    }

    #[test]
    fn new_york_to_london() {
        let d = haversine_km(NYC.0, NYC.1, LONDON.0, LONDON.1);
        assert_eq!(round1(d), 5570.2);
    }

    #[test]
    fn symmetric() {
        let pairs = [
            (NYC, LONDON),
            ((34.0522, -118.2437), (41.8781, -87.6298)),
            ((-33.8688, 151.2093), (35.6762, 139.6503)),
            ((0.0, 179.9), (0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_between(a, b), distance_between(b, a));
        }
    }

    #[test]
    fn same_point_is_zero() {
        assert_eq!(distance_between(NYC, NYC), 0.0);
        assert_eq!(haversine_km(-89.5, 12.0, -89.5, 12.0), 0.0);
    }

    #[test]
    fn stays_within_half_circumference() {
        let upper = PI * EARTH_RADIUS_KM + 1e-6;
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let d = haversine_km(lat, lon, -lat / 2.0, lon / 3.0);
                assert!(d >= 0.0 && d <= upper, "distance {} out of range", d);
                lon += 45.0;
            }
            lat += 30.0;
        }
    }

    #[test]
    fn antipodes_are_half_circumference() {
        let d = haversine_km(0.0, 0.0, 0.0, 180.0);
        assert!((d - PI * EARTH_RADIUS_KM).abs() < 1e-6);
    }

    #[test]
    fn off_equator_antipodes_are_finite() {
        let half = PI * EARTH_RADIUS_KM;
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let d = haversine_km(lat, lon, -lat, lon + 180.0);
                assert!(d.is_finite(), "antipode of ({}, {}) gave {}", lat, lon, d);
                // Within a metre of half the circumference.
                assert!((d - half).abs() < 1e-3, "antipode of ({}, {}) gave {}", lat, lon, d);
                lon += 1.0;
            }
            lat += 0.1;
        }
    }

    #[test]
    fn nan_propagates() {
        assert!(haversine_km(f64::NAN, 0.0, 1.0, 1.0).is_nan());
    }

    #[test]
    fn out_of_range_angles_are_accepted() {
        // 370 degrees of longitude is the same meridian as 10.
        let d = haversine_km(0.0, 370.0, 0.0, 10.0);
        assert!(d.abs() < 1e-6);
    }
}
