use super::benchmark::Benchmark;
use serde::Serialize;
use std::fmt;

/// Emission category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Transportation,
    Electricity,
    Waste,
    Shopping,
    Flights,
    Heating,
}

impl Category {
    pub const ALL: [Self; 6] = [
        Self::Transportation,
        Self::Electricity,
        Self::Waste,
        Self::Shopping,
        Self::Flights,
        Self::Heating,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Transportation => "Transportation",
            Self::Electricity => "Electricity",
            Self::Waste => "Waste",
            Self::Shopping => "Shopping",
            Self::Flights => "Flights",
            Self::Heating => "Heating",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-category emissions in tonnes CO2/year, each rounded to 2 decimals
/// independently. The parts may not sum exactly to the result's total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmissionBreakdown {
    pub transportation: f64,
    pub electricity: f64,
    pub waste: f64,
    pub shopping: f64,
    pub flights: f64,
    pub heating: f64,
}

impl EmissionBreakdown {
    #[must_use]
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Transportation => self.transportation,
            Category::Electricity => self.electricity,
            Category::Waste => self.waste,
            Category::Shopping => self.shopping,
            Category::Flights => self.flights,
            Category::Heating => self.heating,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Sum of the rounded category values.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Each category's fraction of the rounded sum, for proportional charts.
    /// An all-zero breakdown yields all-zero shares.
    #[must_use]
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let sum = self.sum();
        self.iter()
            .map(|(c, v)| (c, if sum > 0.0 { v / sum } else { 0.0 }))
            .collect()
    }
}

/// Outcome of one footprint calculation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    country: String,
    total_emission_kg: f64,
    total_emission_tonnes: f64,
    trees_needed: u64,
    breakdown: EmissionBreakdown,
}

impl CalculationResult {
    pub(crate) fn new(
        country: String,
        total_emission_kg: f64,
        total_emission_tonnes: f64,
        trees_needed: u64,
        breakdown: EmissionBreakdown,
    ) -> Self {
        Self {
            country,
            total_emission_kg,
            total_emission_tonnes,
            trees_needed,
            breakdown,
        }
    }

    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Unrounded sum of all category emissions, kg CO2/year.
    #[must_use]
    pub fn total_emission_kg(&self) -> f64 {
        self.total_emission_kg
    }

    /// Total emissions in tonnes CO2/year, rounded to 2 decimals.
    #[must_use]
    pub fn total_emission_tonnes(&self) -> f64 {
        self.total_emission_tonnes
    }

    #[must_use]
    pub fn trees_needed(&self) -> u64 {
        self.trees_needed
    }

    #[must_use]
    pub fn breakdown(&self) -> &EmissionBreakdown {
        &self.breakdown
    }

    /// Displayed total relative to a benchmark average (1.0 = on par).
    #[must_use]
    pub fn ratio_to(&self, benchmark: &Benchmark) -> f64 {
        if benchmark.tonnes > 0.0 {
            self.total_emission_tonnes / benchmark.tonnes
        } else {
            0.0
        }
    }
}
