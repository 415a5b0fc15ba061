use super::entities::{OrderedFeatures, PropertyInput, FEATURE_SCHEMA};

/// Lays out the eight inputs in `FEATURE_SCHEMA` order.
///
/// Values pass through untouched; range checks are not this builder's job.
#[allow(clippy::too_many_arguments)]
pub fn build(
    income: f64,
    age: f64,
    rooms: f64,
    bedrooms: f64,
    population: f64,
    occupancy: f64,
    lat: f64,
    lon: f64,
) -> OrderedFeatures {
    PropertyInput {
        median_income: income,
        house_age: age,
        average_rooms: rooms,
        average_bedrooms: bedrooms,
        population,
        average_occupancy: occupancy,
        latitude: lat,
        longitude: lon,
    }
    .to_features()
}

impl PropertyInput {
    pub fn to_features(&self) -> OrderedFeatures {
        OrderedFeatures::from_array(FEATURE_SCHEMA.features.map(|feature| self.value_of(feature)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_build_keeps_argument_order() {
        let features = build(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0);
        assert_eq!(features.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn field_order_at_call_site_does_not_matter() {
        let input = PropertyInput {
            longitude: 8.0,
            latitude: 7.0,
            population: 5.0,
            median_income: 1.0,
            average_occupancy: 6.0,
            average_bedrooms: 4.0,
            house_age: 2.0,
            average_rooms: 3.0,
        };
        assert_eq!(
            input.to_features().as_slice(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]
        );
    }

    #[test]
    fn implausible_values_pass_through() {
        let features = build(-1.0, 0.0, -3.5, 0.0, 0.0, 0.0, 34.0, -118.0);
        assert_eq!(features.as_slice(), &[-1.0, 0.0, -3.5, 0.0, 0.0, 0.0, 34.0, -118.0]);
    }

    #[test]
    fn reference_property_maps_to_expected_vector() {
        let features = build(4.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.05, -118.24);
        assert_eq!(
            features.as_slice(),
            &[4.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.05, -118.24]
        );
    }
}
