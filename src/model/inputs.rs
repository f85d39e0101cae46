use super::factors::FuelType;
use crate::error::{FootprintError, InputError};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DAYS_PER_YEAR: f64 = 365.0;
pub const WEEKS_PER_YEAR: f64 = 52.0;
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Lifestyle inputs as the user reports them, each in its natural period.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawInputs {
    /// Daily commute distance, km.
    pub distance_km: f64,
    /// Monthly electricity use, kWh.
    pub electricity_kwh: f64,
    /// Weekly waste generated, kg.
    pub waste_kg: f64,
    /// Monthly spending on goods, ₹.
    pub shopping_spend: f64,
    pub short_flights: u32,
    pub medium_flights: u32,
    pub long_flights: u32,
    pub heating_fuel: FuelType,
    /// Monthly heating usage, in the fuel's unit.
    pub heating_usage: f64,
}

impl RawInputs {
    /// Rejects negative or non-finite numeric fields.
    pub fn validate(&self) -> Result<(), FootprintError> {
        let fields = [
            ("distance_km", self.distance_km),
            ("electricity_kwh", self.electricity_kwh),
            ("waste_kg", self.waste_kg),
            ("shopping_spend", self.shopping_spend),
            ("heating_usage", self.heating_usage),
        ];

        match fields
            .into_iter()
            .find(|(_, value)| !value.is_finite() || *value < 0.0)
        {
            Some((field, value)) => Err(FootprintError::InvalidInput { field, value }),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn annualized(&self) -> AnnualizedInputs {
        AnnualizedInputs::from(self)
    }
}

/// Loads inputs from a JSON object. Missing fields default to zero / Electricity.
///
/// # Errors
///
/// Returns [`InputError::FileRead`] if the file cannot be read and
/// [`InputError::InvalidJson`] if it does not describe a `RawInputs`.
pub fn load_inputs<P: AsRef<Path>>(path: P) -> Result<RawInputs, InputError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| InputError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })
}

/// Raw inputs scaled to yearly quantities. Flights are already annual counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualizedInputs {
    pub distance_km: f64,
    pub electricity_kwh: f64,
    pub waste_kg: f64,
    pub shopping_spend: f64,
    pub heating_usage: f64,
}

impl From<&RawInputs> for AnnualizedInputs {
    fn from(raw: &RawInputs) -> Self {
        Self {
            distance_km: raw.distance_km * DAYS_PER_YEAR,
            electricity_kwh: raw.electricity_kwh * MONTHS_PER_YEAR,
            waste_kg: raw.waste_kg * WEEKS_PER_YEAR,
            shopping_spend: raw.shopping_spend * MONTHS_PER_YEAR,
            heating_usage: raw.heating_usage * MONTHS_PER_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn annualization_uses_period_multipliers() {
        let raw = RawInputs {
            distance_km: 10.0,
            electricity_kwh: 100.0,
            waste_kg: 5.0,
            shopping_spend: 1000.0,
            heating_usage: 10.0,
            ..RawInputs::default()
        };

        assert_eq!(
            raw.annualized(),
            AnnualizedInputs {
                distance_km: 3650.0,
                electricity_kwh: 1200.0,
                waste_kg: 260.0,
                shopping_spend: 12000.0,
                heating_usage: 120.0,
            }
        );
    }

    #[test]
    fn validate_rejects_negative_values() {
        let raw = RawInputs {
            waste_kg: -1.0,
            ..RawInputs::default()
        };
        assert_eq!(
            raw.validate(),
            Err(FootprintError::InvalidInput {
                field: "waste_kg",
                value: -1.0
            })
        );
    }

    #[test]
    fn validate_rejects_non_finite_values() {
        let raw = RawInputs {
            heating_usage: f64::INFINITY,
            ..RawInputs::default()
        };
        assert!(matches!(
            raw.validate(),
            Err(FootprintError::InvalidInput {
                field: "heating_usage",
                ..
            })
        ));
    }

    #[test]
    fn load_inputs_reports_missing_file() {
        let err = load_inputs("/nonexistent/inputs.json").unwrap_err();
        assert!(matches!(err, InputError::FileRead { .. }));
    }

    #[test]
    fn missing_json_fields_fall_back_to_defaults() {
        let raw: RawInputs =
            serde_json::from_str(r#"{"distance_km": 12.5, "heating_fuel": "LPG"}"#).unwrap();
        assert_eq!(raw.distance_km, 12.5);
        assert_eq!(raw.heating_fuel, FuelType::Lpg);
        assert_eq!(raw.long_flights, 0);
    }
}
