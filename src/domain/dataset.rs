//! Exploration dataset: census block groups expressed in the model's feature space.

use serde::{Deserialize, Serialize};

use super::entities::PropertyInput;

/// One row of the public housing CSV, before derivation.
#[derive(Clone, Debug, Deserialize)]
pub struct RawHousingRow {
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub housing_median_age: Option<f64>,
    pub total_rooms: Option<f64>,
    pub total_bedrooms: Option<f64>,
    pub population: Option<f64>,
    pub households: Option<f64>,
    pub median_income: Option<f64>,
    pub median_house_value: Option<f64>,
}

/// A block group with per-household averages and its price in units of 100k.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HousingRecord {
    pub features: PropertyInput,
    pub price: f64,
}

impl HousingRecord {
    /// Derives averages per household. Rows with missing values or no
    /// households are skipped.
    pub fn from_raw(row: &RawHousingRow) -> Option<Self> {
        let households = row.households.filter(|h| *h > 0.0)?;
        let population = row.population?;
        Some(Self {
            features: PropertyInput {
                median_income: row.median_income?,
                house_age: row.housing_median_age?,
                average_rooms: row.total_rooms? / households,
                average_bedrooms: row.total_bedrooms? / households,
                population,
                average_occupancy: population / households,
                latitude: row.latitude?,
                longitude: row.longitude?,
            },
            price: row.median_house_value? / 100_000.0,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DatasetSummary {
    pub records: usize,
    pub mean_price: f64,
    pub min_price: f64,
    pub max_price: f64,
    /// Pearson correlation between median income and price.
    pub income_correlation: Option<f64>,
}

pub fn summarize(records: &[HousingRecord]) -> Option<DatasetSummary> {
    if records.is_empty() {
        return None;
    }

    let prices: Vec<f64> = records.iter().map(|r| r.price).collect();
    let incomes: Vec<f64> = records.iter().map(|r| r.features.median_income).collect();
    let mean_price = prices.iter().sum::<f64>() / prices.len() as f64;
    let min_price = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max_price = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    Some(DatasetSummary {
        records: records.len(),
        mean_price,
        min_price,
        max_price,
        income_correlation: pearson(&incomes, &prices),
    })
}

/// Returns `None` for fewer than two points or a constant series.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return None;
    }
    let mean_x = xs[..n].iter().sum::<f64>() / n as f64;
    let mean_y = ys[..n].iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs[..n].iter().zip(&ys[..n]) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some(cov / (var_x.sqrt() * var_y.sqrt()))
}

/// Picks up to `limit` records spread evenly across the slice.
///
/// Deterministic so the charts do not reshuffle between renders.
pub fn sample(records: &[HousingRecord], limit: usize) -> Vec<HousingRecord> {
    if limit == 0 {
        return Vec::new();
    }
    if records.len() <= limit {
        return records.to_vec();
    }
    (0..limit)
        .map(|i| records[i * records.len() / limit])
        .collect()
}
