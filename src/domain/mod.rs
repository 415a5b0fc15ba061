//! Domain logic for the valuation tool and the exploration views lives here.

pub mod dataset;
pub mod entities;
pub mod features;
pub mod form;
pub mod geofence;
pub mod map_state;
pub mod prediction;
pub mod response;

pub use dataset::{sample, summarize, HousingRecord, RawHousingRow};
pub use entities::{
    format_currency, Feature, OrderedFeatures, PropertyInput, FEATURE_COUNT, FEATURE_SCHEMA,
};
pub use form::PropertyForm;
pub use map_state::MapViewState;
pub use prediction::{PredictionService, Regressor, RegressorError};
pub use response::{respond, ResultSummary};
