use crate::error::FootprintError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flight distance tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HaulCategory {
    /// 0–1500 km
    Short,
    /// 1500–4000 km
    Medium,
    /// 4000 km+
    Long,
}

impl HaulCategory {
    pub const ALL: [Self; 3] = [Self::Short, Self::Medium, Self::Long];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}

impl fmt::Display for HaulCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HaulCategory {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FootprintError::UnknownHaulCategory(s.to_string()))
    }
}

/// Primary heating fuel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FuelType {
    #[default]
    Electricity,
    #[serde(rename = "LPG")]
    Lpg,
    Wood,
}

impl FuelType {
    pub const ALL: [Self; 3] = [Self::Electricity, Self::Lpg, Self::Wood];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Electricity => "Electricity",
            Self::Lpg => "LPG",
            Self::Wood => "Wood",
        }
    }

    /// Next fuel in selector order, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Electricity => Self::Lpg,
            Self::Lpg => Self::Wood,
            Self::Wood => Self::Electricity,
        }
    }

    /// Previous fuel in selector order, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::Electricity => Self::Wood,
            Self::Lpg => Self::Electricity,
            Self::Wood => Self::Lpg,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FuelType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FootprintError::UnknownFuelType(s.to_string()))
    }
}

/// Per-trip emissions by haul length, kg CO2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightFactors {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

impl FlightFactors {
    #[must_use]
    pub fn get(&self, haul: HaulCategory) -> f64 {
        match haul {
            HaulCategory::Short => self.short,
            HaulCategory::Medium => self.medium,
            HaulCategory::Long => self.long,
        }
    }
}

/// Emissions per unit of heating usage, kg CO2.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatingFactors {
    pub electricity: f64,
    pub lpg: f64,
    pub wood: f64,
}

impl HeatingFactors {
    #[must_use]
    pub fn get(&self, fuel: FuelType) -> f64 {
        match fuel {
            FuelType::Electricity => self.electricity,
            FuelType::Lpg => self.lpg,
            FuelType::Wood => self.wood,
        }
    }
}

/// Emission factors for one country.
///
/// Scalar factors are kg CO2 per unit of activity: per km travelled,
/// per kWh consumed, per kg of waste, and per ₹1000 of goods bought.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    pub transportation: f64,
    pub electricity: f64,
    pub waste: f64,
    pub shopping: f64,
    pub flights: FlightFactors,
    pub heating: HeatingFactors,
}

impl EmissionFactors {
    /// Published factors for India.
    pub const INDIA: Self = Self {
        transportation: 0.14,
        electricity: 0.82,
        waste: 0.1,
        shopping: 6.5,
        flights: FlightFactors {
            short: 300.0,
            medium: 1100.0,
            long: 2500.0,
        },
        heating: HeatingFactors {
            electricity: 0.82,
            lpg: 2.98,
            wood: 1.75,
        },
    };

    /// True when every factor in the record is finite and non-negative.
    #[must_use]
    pub fn all_non_negative(&self) -> bool {
        [
            self.transportation,
            self.electricity,
            self.waste,
            self.shopping,
            self.flights.short,
            self.flights.medium,
            self.flights.long,
            self.heating.electricity,
            self.heating.lpg,
            self.heating.wood,
        ]
        .iter()
        .all(|v| v.is_finite() && *v >= 0.0)
    }
}
