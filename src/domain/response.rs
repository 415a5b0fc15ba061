//! Turns one form submission into the two outputs the prediction page renders:
//! a result summary and a map view state.

use log::{error, info};

use super::{
    entities::{GeoBounds, PredictionResult, PropertyInput},
    geofence::{self, CALIFORNIA_BOUNDS},
    map_state::{self, MapMode, MapViewState},
    prediction::PredictionService,
};

/// Output slot that is either left alone or replaced.
#[derive(Clone, Debug, PartialEq)]
pub enum Update<T> {
    NoUpdate,
    Set(T),
}

impl<T> Default for Update<T> {
    fn default() -> Self {
        Update::NoUpdate
    }
}

impl<T> Update<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Update::NoUpdate => None,
            Update::Set(value) => Some(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ResultSummary {
    OutsideServiceArea { bounds: GeoBounds },
    Estimate { result: PredictionResult },
    Unavailable,
}

impl ResultSummary {
    pub fn headline(&self) -> &'static str {
        match self {
            ResultSummary::OutsideServiceArea { .. } => "OUTSIDE SERVICE AREA",
            ResultSummary::Estimate { .. } => "ESTIMATED MARKET VALUE",
            ResultSummary::Unavailable => "PREDICTION UNAVAILABLE",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ResultSummary::OutsideServiceArea { .. } => {
                "Please use coordinates within California.".to_string()
            }
            ResultSummary::Estimate { result } => result.display(),
            ResultSummary::Unavailable => {
                "The valuation model could not process this property. Please try again.".to_string()
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PredictionResponse {
    pub summary: Update<ResultSummary>,
    pub map: Update<MapViewState>,
}

impl PredictionResponse {
    pub fn no_update() -> Self {
        Self {
            summary: Update::NoUpdate,
            map: Update::NoUpdate,
        }
    }

    fn set(summary: ResultSummary, map: MapViewState) -> Self {
        Self {
            summary: Update::Set(summary),
            map: Update::Set(map),
        }
    }
}

/// Handles one interaction cycle.
///
/// `trigger` is the submit button's click count; `None` means nothing has
/// been submitted yet and both outputs stay untouched.
pub fn respond(
    trigger: Option<u64>,
    input: &PropertyInput,
    service: &PredictionService,
) -> PredictionResponse {
    if trigger.is_none() {
        return PredictionResponse::no_update();
    }

    if !geofence::validate(input.latitude, input.longitude) {
        info!(
            "Rejected coordinates outside service area: ({}, {})",
            input.latitude, input.longitude
        );
        return PredictionResponse::set(
            ResultSummary::OutsideServiceArea {
                bounds: CALIFORNIA_BOUNDS,
            },
            map_state::build(MapMode::Default, None),
        );
    }

    let features = input.to_features();
    match service.predict(&features) {
        Ok(result) => {
            info!(
                "Estimated {} for ({}, {})",
                result.display(),
                input.latitude,
                input.longitude
            );
            PredictionResponse::set(
                ResultSummary::Estimate { result },
                map_state::build(MapMode::Result, Some(input.coordinate())),
            )
        }
        Err(err) => {
            error!("Prediction failed for {features:?}: {err}");
            PredictionResponse::set(
                ResultSummary::Unavailable,
                map_state::build(MapMode::Default, None),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        entities::Coordinate, features::build, prediction::testing::StubRegressor,
    };

    fn reference_input() -> PropertyInput {
        PropertyInput {
            median_income: 4.5,
            house_age: 15.0,
            average_rooms: 5.0,
            average_bedrooms: 1.0,
            population: 1200.0,
            average_occupancy: 3.0,
            latitude: 34.05,
            longitude: -118.24,
        }
    }

    #[test]
    fn no_trigger_yields_no_update_on_both_outputs() {
        let stub = StubRegressor::returning(3.5);
        let service = PredictionService::new(stub.clone());
        let response = respond(None, &reference_input(), &service);
        assert_eq!(response.summary, Update::NoUpdate);
        assert_eq!(response.map, Update::NoUpdate);
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn out_of_bounds_input_never_reaches_the_model() {
        let stub = StubRegressor::returning(3.5);
        let service = PredictionService::new(stub.clone());
        let input = PropertyInput {
            latitude: 50.0,
            longitude: -119.4,
            ..reference_input()
        };

        let response = respond(Some(1), &input, &service);

        let summary = response.summary.into_option().unwrap();
        assert_eq!(summary.headline(), "OUTSIDE SERVICE AREA");
        assert_eq!(
            summary,
            ResultSummary::OutsideServiceArea {
                bounds: CALIFORNIA_BOUNDS
            }
        );
        let map = response.map.into_option().unwrap();
        assert_eq!(map.center, Coordinate::new(36.7, -119.4));
        assert_eq!(map.zoom, 5.0);
        assert!(map.marker.is_none());
        assert_eq!(stub.call_count(), 0);
    }

    #[test]
    fn in_bounds_input_is_estimated_and_focused() {
        let stub = StubRegressor::returning(2.5);
        let service = PredictionService::new(stub.clone());

        let response = respond(Some(1), &reference_input(), &service);

        assert_eq!(stub.call_count(), 1);
        assert_eq!(
            stub.seen(),
            vec![build(4.5, 15.0, 5.0, 1.0, 1200.0, 3.0, 34.05, -118.24)]
        );
        let summary = response.summary.into_option().unwrap();
        assert_eq!(summary.headline(), "ESTIMATED MARKET VALUE");
        assert_eq!(summary.detail(), "$250,000");
        let map = response.map.into_option().unwrap();
        assert_eq!(map.center, Coordinate::new(34.05, -118.24));
        assert_eq!(map.zoom, 12.0);
        assert!(map.marker.is_some());
    }

    #[test]
    fn identical_submissions_produce_identical_outputs() {
        let service = PredictionService::new(StubRegressor::returning(1.75));
        let first = respond(Some(1), &reference_input(), &service);
        let second = respond(Some(2), &reference_input(), &service);
        assert_eq!(first, second);
    }

    #[test]
    fn model_failure_becomes_generic_summary() {
        let service = PredictionService::new(StubRegressor::failing());
        let response = respond(Some(3), &reference_input(), &service);
        let summary = response.summary.into_option().unwrap();
        assert_eq!(summary, ResultSummary::Unavailable);
        assert!(!summary.detail().contains("columns"));
        assert_eq!(response.map.into_option(), Some(MapViewState::statewide()));
    }
}
