use serde::Serialize;

/// A static per-capita emissions average shown next to a result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Benchmark {
    pub label: &'static str,
    /// Tonnes CO2 per person per year.
    pub tonnes: f64,
}

pub const INDIA_AVERAGE: Benchmark = Benchmark {
    label: "India Avg",
    tonnes: 1.9,
};

pub const GLOBAL_AVERAGE: Benchmark = Benchmark {
    label: "Global Avg",
    tonnes: 4.7,
};

pub const BENCHMARKS: [Benchmark; 2] = [INDIA_AVERAGE, GLOBAL_AVERAGE];

/// Outbound link for a tree-planting donation. Not validated or tracked.
pub const DONATION_URL: &str = "https://www.grow-trees.com";
