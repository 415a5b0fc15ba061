use thiserror::Error;

use super::entities::{Feature, PropertyInput};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a number (got \"{value}\")")]
    NotANumber { field: &'static str, value: String },
}

/// Text-backed state of the prediction form, one entry per model column.
#[derive(Clone, Debug, PartialEq)]
pub struct PropertyForm {
    pub median_income: String,
    pub house_age: String,
    pub average_rooms: String,
    pub average_bedrooms: String,
    pub population: String,
    pub average_occupancy: String,
    pub latitude: String,
    pub longitude: String,
}

impl Default for PropertyForm {
    fn default() -> Self {
        Self {
            median_income: "4.5".to_string(),
            house_age: "15".to_string(),
            average_rooms: "5.0".to_string(),
            average_bedrooms: "1.0".to_string(),
            population: "1200".to_string(),
            average_occupancy: "3.0".to_string(),
            latitude: "34.05".to_string(),
            longitude: "-118.24".to_string(),
        }
    }
}

impl PropertyForm {
    pub fn field(&self, feature: Feature) -> &str {
        match feature {
            Feature::MedInc => &self.median_income,
            Feature::HouseAge => &self.house_age,
            Feature::AveRooms => &self.average_rooms,
            Feature::AveBedrms => &self.average_bedrooms,
            Feature::Population => &self.population,
            Feature::AveOccup => &self.average_occupancy,
            Feature::Latitude => &self.latitude,
            Feature::Longitude => &self.longitude,
        }
    }

    pub fn field_mut(&mut self, feature: Feature) -> &mut String {
        match feature {
            Feature::MedInc => &mut self.median_income,
            Feature::HouseAge => &mut self.house_age,
            Feature::AveRooms => &mut self.average_rooms,
            Feature::AveBedrms => &mut self.average_bedrooms,
            Feature::Population => &mut self.population,
            Feature::AveOccup => &mut self.average_occupancy,
            Feature::Latitude => &mut self.latitude,
            Feature::Longitude => &mut self.longitude,
        }
    }

    /// Parses every field, reporting the first one (in form order) that is
    /// empty or not a finite number. Plausibility is not checked.
    pub fn parse(&self) -> Result<PropertyInput, FormError> {
        let value = |feature: Feature| parse_number(feature, self.field(feature));
        Ok(PropertyInput {
            median_income: value(Feature::MedInc)?,
            house_age: value(Feature::HouseAge)?,
            average_rooms: value(Feature::AveRooms)?,
            average_bedrooms: value(Feature::AveBedrms)?,
            population: value(Feature::Population)?,
            average_occupancy: value(Feature::AveOccup)?,
            latitude: value(Feature::Latitude)?,
            longitude: value(Feature::Longitude)?,
        })
    }
}

fn parse_number(feature: Feature, raw: &str) -> Result<f64, FormError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FormError::Missing {
            field: feature.label(),
        });
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FormError::NotANumber {
            field: feature.label(),
            value: trimmed.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_to_reference_property() {
        let input = PropertyForm::default().parse().unwrap();
        assert_eq!(input.median_income, 4.5);
        assert_eq!(input.house_age, 15.0);
        assert_eq!(input.population, 1200.0);
        assert_eq!(input.latitude, 34.05);
        assert_eq!(input.longitude, -118.24);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let mut form = PropertyForm::default();
        form.latitude = "  36.7 ".to_string();
        assert_eq!(form.parse().unwrap().latitude, 36.7);
    }

    #[test]
    fn empty_field_is_reported_by_label() {
        let mut form = PropertyForm::default();
        *form.field_mut(Feature::Population) = String::new();
        assert_eq!(
            form.parse(),
            Err(FormError::Missing {
                field: "Local Population"
            })
        );
    }

    #[test]
    fn non_numeric_and_non_finite_values_are_rejected() {
        for raw in ["abc", "NaN", "inf", "1,5"] {
            let mut form = PropertyForm::default();
            form.average_rooms = raw.to_string();
            assert_eq!(
                form.parse(),
                Err(FormError::NotANumber {
                    field: "Avg Rooms",
                    value: raw.to_string()
                }),
                "{raw} should be rejected"
            );
        }
    }

    #[test]
    fn first_bad_field_in_form_order_wins() {
        let mut form = PropertyForm::default();
        form.longitude = "east".to_string();
        form.median_income = String::new();
        assert!(matches!(
            form.parse(),
            Err(FormError::Missing {
                field: "Median Income ($10k)"
            })
        ));
    }

    #[test]
    fn implausible_but_finite_values_are_accepted() {
        let mut form = PropertyForm::default();
        form.average_rooms = "-2".to_string();
        form.population = "0".to_string();
        let input = form.parse().unwrap();
        assert_eq!(input.average_rooms, -2.0);
        assert_eq!(input.population, 0.0);
    }
}
