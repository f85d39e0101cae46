use crate::error::FootprintError;
use crate::model::{EmissionFactors, FuelType, HaulCategory};
use std::collections::BTreeMap;
use tracing::warn;

/// Read-only table of emission factors keyed by country name.
///
/// Built once at startup and shared by reference between sessions.
#[derive(Debug, Clone)]
pub struct EmissionModel {
    countries: BTreeMap<String, EmissionFactors>,
}

impl EmissionModel {
    /// The published factor table shipped with the tool.
    #[must_use]
    pub fn builtin() -> Self {
        let mut countries = BTreeMap::new();
        countries.insert("India".to_string(), EmissionFactors::INDIA);
        debug_assert!(countries.values().all(EmissionFactors::all_non_negative));
        Self { countries }
    }

    /// Supported country names, sorted.
    pub fn countries(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    /// Factor record for `country`.
    ///
    /// # Errors
    ///
    /// Returns [`FootprintError::UnknownCountry`] if the table has no entry.
    pub fn lookup(&self, country: &str) -> Result<&EmissionFactors, FootprintError> {
        self.countries.get(country).ok_or_else(|| {
            warn!(country, "country not in emission factor table");
            FootprintError::UnknownCountry(country.to_string())
        })
    }

    /// Per-trip flight factor for a haul category given by name.
    pub fn flight_factor(&self, country: &str, haul: &str) -> Result<f64, FootprintError> {
        let factors = self.lookup(country)?;
        let haul: HaulCategory = haul.parse()?;
        Ok(factors.flights.get(haul))
    }

    /// Heating factor for a fuel type given by name.
    pub fn heating_factor(&self, country: &str, fuel: &str) -> Result<f64, FootprintError> {
        let factors = self.lookup(country)?;
        let fuel: FuelType = fuel.parse()?;
        Ok(factors.heating.get(fuel))
    }
}

impl Default for EmissionModel {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_contains_only_india() {
        let model = EmissionModel::builtin();
        assert_eq!(model.countries().collect::<Vec<_>>(), vec!["India"]);
        assert_eq!(model.lookup("India"), Ok(&EmissionFactors::INDIA));
    }

    #[test]
    fn builtin_factors_are_non_negative() {
        let model = EmissionModel::builtin();
        for country in model.countries() {
            assert!(model.lookup(country).unwrap().all_non_negative(), "{country}");
        }
    }

    #[test]
    fn unknown_country_fails() {
        let model = EmissionModel::builtin();
        assert_eq!(
            model.lookup("Atlantis"),
            Err(FootprintError::UnknownCountry("Atlantis".to_string()))
        );
    }

    #[test]
    fn flight_factor_by_name() {
        let model = EmissionModel::builtin();
        assert_eq!(model.flight_factor("India", "Short"), Ok(300.0));
        assert_eq!(model.flight_factor("India", "Medium"), Ok(1100.0));
        assert_eq!(model.flight_factor("India", "Long"), Ok(2500.0));
        assert_eq!(
            model.flight_factor("India", "Orbital"),
            Err(FootprintError::UnknownHaulCategory("Orbital".to_string()))
        );
    }

    #[test]
    fn heating_factor_by_name() {
        let model = EmissionModel::builtin();
        assert_eq!(model.heating_factor("India", "Electricity"), Ok(0.82));
        assert_eq!(model.heating_factor("India", "LPG"), Ok(2.98));
        assert_eq!(model.heating_factor("India", "Wood"), Ok(1.75));
        assert_eq!(
            model.heating_factor("India", "Peat"),
            Err(FootprintError::UnknownFuelType("Peat".to_string()))
        );
    }

    #[test]
    fn country_is_checked_before_category() {
        let model = EmissionModel::builtin();
        assert_eq!(
            model.heating_factor("Atlantis", "Peat"),
            Err(FootprintError::UnknownCountry("Atlantis".to_string()))
        );
    }
}
