use super::emission_model::EmissionModel;
use crate::error::FootprintError;
use crate::model::{CalculationResult, EmissionBreakdown, EmissionFactors, HaulCategory, RawInputs};
use tracing::{debug, warn};

/// kg CO2 absorbed by one tree per year.
pub const CO2_ABSORPTION_PER_TREE_KG: f64 = 21.0;

/// Shopping factors are expressed per this much spend.
pub const SHOPPING_SPEND_UNIT: f64 = 1000.0;

const KG_PER_TONNE: f64 = 1000.0;

/// Turns raw lifestyle inputs into an annual footprint using an [`EmissionModel`].
#[derive(Debug, Clone, Copy)]
pub struct FootprintCalculator<'m> {
    model: &'m EmissionModel,
}

impl<'m> FootprintCalculator<'m> {
    #[must_use]
    pub fn new(model: &'m EmissionModel) -> Self {
        Self { model }
    }

    #[must_use]
    pub fn model(&self) -> &'m EmissionModel {
        self.model
    }

    /// Computes the annual footprint for `inputs` under `country`'s factors.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::UnknownCountry`] for a country outside the
    /// factor table and [`FootprintError::InvalidInput`] for a negative or
    /// non-finite input. Nothing is computed on error.
    pub fn compute(
        &self,
        country: &str,
        inputs: &RawInputs,
    ) -> Result<CalculationResult, FootprintError> {
        let factors = self.model.lookup(country)?;
        inputs.validate().inspect_err(|e| warn!(error = %e, "rejected inputs"))?;

        let kg = category_emissions_kg(factors, inputs);
        let total_kg: f64 = kg.iter().sum();
        let total_tonnes = round2(total_kg / KG_PER_TONNE);
        let trees = trees_needed(total_kg);

        let [transportation, electricity, waste, shopping, flights, heating] =
            kg.map(|v| round2(v / KG_PER_TONNE));
        let breakdown = EmissionBreakdown {
            transportation,
            electricity,
            waste,
            shopping,
            flights,
            heating,
        };

        debug!(
            country,
            total_kg,
            total_tonnes,
            trees,
            "computed footprint"
        );

        Ok(CalculationResult::new(
            country.to_string(),
            total_kg,
            total_tonnes,
            trees,
            breakdown,
        ))
    }
}

/// Unrounded annual kg CO2 per category, in `Category::ALL` order.
fn category_emissions_kg(factors: &EmissionFactors, inputs: &RawInputs) -> [f64; 6] {
    let annual = inputs.annualized();
    debug!(
        distance_km = annual.distance_km,
        electricity_kwh = annual.electricity_kwh,
        waste_kg = annual.waste_kg,
        shopping_spend = annual.shopping_spend,
        heating_usage = annual.heating_usage,
        "annualized inputs"
    );

    let flights = [
        (HaulCategory::Short, inputs.short_flights),
        (HaulCategory::Medium, inputs.medium_flights),
        (HaulCategory::Long, inputs.long_flights),
    ]
    .into_iter()
    .map(|(haul, count)| factors.flights.get(haul) * f64::from(count))
    .sum();

    [
        factors.transportation * annual.distance_km,
        factors.electricity * annual.electricity_kwh,
        factors.waste * annual.waste_kg,
        (annual.shopping_spend / SHOPPING_SPEND_UNIT) * factors.shopping,
        flights,
        factors.heating.get(inputs.heating_fuel) * annual.heating_usage,
    ]
}

/// Rounds the stored binary value to 2 decimal places.
///
/// Scaling by 100 first can turn 0.10499.. into an exact 0.5 tie, so the
/// rounding is done by the formatter on the exact value instead.
#[must_use]
pub fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}

/// Trees whose yearly absorption covers `total_kg`. Zero emissions need zero trees.
#[must_use]
pub fn trees_needed(total_kg: f64) -> u64 {
    (total_kg / CO2_ABSORPTION_PER_TREE_KG).ceil() as u64
}
