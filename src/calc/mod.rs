pub mod emission_model;
pub mod footprint;

pub use crate::error::FootprintError;
pub use emission_model::EmissionModel;
pub use footprint::{
    round2, trees_needed, FootprintCalculator, CO2_ABSORPTION_PER_TREE_KG, SHOPPING_SPEND_UNIT,
};
