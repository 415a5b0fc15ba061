use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of columns the regressor expects per row.
pub const FEATURE_COUNT: usize = 8;

/// One input column of the housing regressor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    MedInc,
    HouseAge,
    AveRooms,
    AveBedrms,
    Population,
    AveOccup,
    Latitude,
    Longitude,
}

impl Feature {
    /// Column identifier as recorded in the model artifact.
    pub fn name(&self) -> &'static str {
        match self {
            Feature::MedInc => "MedInc",
            Feature::HouseAge => "HouseAge",
            Feature::AveRooms => "AveRooms",
            Feature::AveBedrms => "AveBedrms",
            Feature::Population => "Population",
            Feature::AveOccup => "AveOccup",
            Feature::Latitude => "Latitude",
            Feature::Longitude => "Longitude",
        }
    }

    /// Human-readable label used by the input form.
    pub fn label(&self) -> &'static str {
        match self {
            Feature::MedInc => "Median Income ($10k)",
            Feature::HouseAge => "House Age",
            Feature::AveRooms => "Avg Rooms",
            Feature::AveBedrms => "Avg Beds",
            Feature::Population => "Local Population",
            Feature::AveOccup => "Avg Occupancy",
            Feature::Latitude => "Latitude",
            Feature::Longitude => "Longitude",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Versioned column order shared by the feature builder and the model loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureSchema {
    pub version: u32,
    pub features: [Feature; FEATURE_COUNT],
}

impl FeatureSchema {
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.features.iter().map(Feature::name)
    }

    /// True when `names` lists exactly this schema's columns in order.
    pub fn matches<S: AsRef<str>>(&self, names: &[S]) -> bool {
        names.len() == FEATURE_COUNT
            && names
                .iter()
                .zip(self.names())
                .all(|(given, expected)| given.as_ref() == expected)
    }
}

pub const FEATURE_SCHEMA: FeatureSchema = FeatureSchema {
    version: 1,
    features: [
        Feature::MedInc,
        Feature::HouseAge,
        Feature::AveRooms,
        Feature::AveBedrms,
        Feature::Population,
        Feature::AveOccup,
        Feature::Latitude,
        Feature::Longitude,
    ],
};

/// Feature vector laid out in `FEATURE_SCHEMA` order.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct OrderedFeatures([f64; FEATURE_COUNT]);

impl OrderedFeatures {
    pub(crate) fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

/// Raw property description as submitted from the prediction form.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyInput {
    pub median_income: f64,
    pub house_age: f64,
    pub average_rooms: f64,
    pub average_bedrooms: f64,
    pub population: f64,
    pub average_occupancy: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl PropertyInput {
    pub fn value_of(&self, feature: Feature) -> f64 {
        match feature {
            Feature::MedInc => self.median_income,
            Feature::HouseAge => self.house_age,
            Feature::AveRooms => self.average_rooms,
            Feature::AveBedrms => self.average_bedrooms,
            Feature::Population => self.population,
            Feature::AveOccup => self.average_occupancy,
            Feature::Latitude => self.latitude,
            Feature::Longitude => self.longitude,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Closed interval `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Rectangular service area; both intervals are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct GeoBounds {
    pub latitude: Interval,
    pub longitude: Interval,
}

impl GeoBounds {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        self.latitude.contains(lat) && self.longitude.contains(lon)
    }
}

impl fmt::Display for GeoBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Lat: {:?} to {:?} | Lon: {:?} to {:?}",
            self.latitude.min, self.latitude.max, self.longitude.min, self.longitude.max
        )
    }
}

/// Estimated price in currency units.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    pub price: f64,
}

impl PredictionResult {
    /// Formats as whole currency units with thousands separators, e.g. `$350,000`.
    pub fn display(&self) -> String {
        format_currency(self.price)
    }
}

/// Whole currency units with thousands separators. Halves round to even and
/// the sign follows the currency symbol, e.g. `$1,000` for 1000.5 and `$-45`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round_ties_even();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${sign}{grouped}")
}
