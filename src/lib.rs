//! # Carbon Footprint
//!
//! A terminal-based estimator for a personal annual carbon footprint.
//!
//! ## Features
//!
//! - Annualize daily, weekly and monthly lifestyle inputs
//! - Apply published per-country emission factors (India)
//! - Breakdown by category, total in tonnes, trees needed to offset
//! - Comparison with India and global averages
//! - Session history, exportable to CSV and JSON
//!
//! ## Example
//!
//! ```
//! use carbon_footprint::calc::EmissionModel;
//! use carbon_footprint::model::RawInputs;
//! use carbon_footprint::session::Session;
//!
//! let model = EmissionModel::builtin();
//! let mut session = Session::start(&model);
//! let inputs = RawInputs { distance_km: 10.0, ..RawInputs::default() };
//! let result = session.calculate("India", &inputs).expect("India is supported");
//! println!("Total: {} t, trees: {}", result.total_emission_tonnes(), result.trees_needed());
//! ```

pub mod calc;
pub mod error;
pub mod export;
pub mod model;
pub mod session;
pub mod ui;
