//! Prediction service around an opaque regressor.
//!
//! - The regressor is injected at construction and never mutated afterwards.
//! - Raw model output is in units of 100k and is scaled to currency here.

use log::debug;
use thiserror::Error;

use super::entities::{OrderedFeatures, PredictionResult};

/// The model was trained on prices expressed in units of 100,000.
pub const PRICE_SCALE: f64 = 100_000.0;

#[derive(Debug, Error)]
pub enum RegressorError {
    #[error("model evaluation failed: {0}")]
    Evaluation(String),
}

#[derive(Debug, Error)]
pub enum PredictionError {
    #[error(transparent)]
    Model(#[from] RegressorError),
    #[error("model returned a non-finite value: {0}")]
    NonFiniteOutput(f64),
}

/// A pretrained model: one ordered row in, one scalar out.
pub trait Regressor: Send + Sync {
    fn predict(&self, features: &OrderedFeatures) -> Result<f64, RegressorError>;
}

pub struct PredictionService {
    regressor: Box<dyn Regressor>,
}

impl PredictionService {
    pub fn new(regressor: impl Regressor + 'static) -> Self {
        Self {
            regressor: Box::new(regressor),
        }
    }

    pub fn predict(&self, features: &OrderedFeatures) -> Result<PredictionResult, PredictionError> {
        let raw = self.regressor.predict(features)?;
        if !raw.is_finite() {
            return Err(PredictionError::NonFiniteOutput(raw));
        }
        let price = raw * PRICE_SCALE;
        debug!("Model output {raw} scaled to {price}");
        Ok(PredictionResult { price })
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    use super::*;

    /// Deterministic regressor that remembers every row it was asked about.
    #[derive(Clone, Default)]
    pub struct StubRegressor {
        pub output: f64,
        pub calls: Arc<AtomicUsize>,
        pub seen: Arc<Mutex<Vec<OrderedFeatures>>>,
        pub fail: bool,
    }

    impl StubRegressor {
        pub fn returning(output: f64) -> Self {
            Self {
                output,
                ..Self::default()
            }
        }

        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn seen(&self) -> Vec<OrderedFeatures> {
            self.seen.lock().map(|rows| rows.clone()).unwrap_or_default()
        }
    }

    impl Regressor for StubRegressor {
        fn predict(&self, features: &OrderedFeatures) -> Result<f64, RegressorError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Ok(mut rows) = self.seen.lock() {
                rows.push(*features);
            }
            if self.fail {
                return Err(RegressorError::Evaluation("expected 8 columns, got 7".into()));
            }
            Ok(self.output)
        }
    }
}
