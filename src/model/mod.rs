pub mod benchmark;
pub mod factors;
pub mod inputs;
pub mod result;

pub use benchmark::{Benchmark, BENCHMARKS, DONATION_URL, GLOBAL_AVERAGE, INDIA_AVERAGE};
pub use factors::{EmissionFactors, FlightFactors, FuelType, HaulCategory, HeatingFactors};
pub use inputs::{load_inputs, AnnualizedInputs, RawInputs};
pub use result::{CalculationResult, Category, EmissionBreakdown};
