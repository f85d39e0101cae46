pub mod app;
pub mod dashboard;

pub use app::{check_limits, App, Field, SliderLimits, View};
