//! Service-area check applied before any prediction is attempted.

use super::entities::{GeoBounds, Interval};

/// California bounding box. Both ends of both intervals are inclusive.
pub const CALIFORNIA_BOUNDS: GeoBounds = GeoBounds {
    latitude: Interval {
        min: 32.5,
        max: 42.0,
    },
    longitude: Interval {
        min: -124.5,
        max: -114.1,
    },
};

/// Returns true iff `(lat, lon)` lies inside [`CALIFORNIA_BOUNDS`].
///
/// NaN compares false against every bound, so it is always rejected.
pub fn validate(lat: f64, lon: f64) -> bool {
    CALIFORNIA_BOUNDS.contains(lat, lon)
}
