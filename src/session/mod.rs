//! Session-scoped state: one user, one history, from start to end.

pub mod history;

pub use history::HistoryLog;

use crate::calc::{EmissionModel, FootprintCalculator};
use crate::error::FootprintError;
use crate::model::{CalculationResult, RawInputs};
use tracing::info;

/// One interactive session.
///
/// The emission model is shared read-only; the history belongs to this
/// session alone and goes away with it.
#[derive(Debug)]
pub struct Session<'m> {
    calculator: FootprintCalculator<'m>,
    history: HistoryLog,
}

impl<'m> Session<'m> {
    #[must_use]
    pub fn start(model: &'m EmissionModel) -> Self {
        info!("session started");
        Self {
            calculator: FootprintCalculator::new(model),
            history: HistoryLog::new(),
        }
    }

    #[must_use]
    pub fn model(&self) -> &'m EmissionModel {
        self.calculator.model()
    }

    /// Runs one calculation and appends it to the history.
    ///
    /// On error the history is left untouched.
    pub fn calculate(
        &mut self,
        country: &str,
        inputs: &RawInputs,
    ) -> Result<CalculationResult, FootprintError> {
        let result = self.calculator.compute(country, inputs)?;
        self.history.append(result.clone());
        Ok(result)
    }

    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Ends the session, handing back its history for a final export.
    #[must_use]
    pub fn end(self) -> HistoryLog {
        info!(entries = self.history.len(), "session ended");
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn calculate_appends_to_history() {
        let model = EmissionModel::builtin();
        let mut session = Session::start(&model);
        let inputs = RawInputs {
            distance_km: 10.0,
            ..RawInputs::default()
        };

        let trees = session.calculate("India", &inputs).unwrap().trees_needed();
        assert_eq!(trees, 25);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn failed_calculation_leaves_history_untouched() {
        let model = EmissionModel::builtin();
        let mut session = Session::start(&model);
        session.calculate("India", &RawInputs::default()).unwrap();

        assert!(session.calculate("Mars", &RawInputs::default()).is_err());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn sessions_do_not_share_history() {
        let model = EmissionModel::builtin();
        let mut first = Session::start(&model);
        let second = Session::start(&model);
        first.calculate("India", &RawInputs::default()).unwrap();

        assert_eq!(first.history().len(), 1);
        assert!(second.history().is_empty());
    }

    #[test]
    fn end_returns_history() {
        let model = EmissionModel::builtin();
        let mut session = Session::start(&model);
        session.calculate("India", &RawInputs::default()).unwrap();
        session.calculate("India", &RawInputs::default()).unwrap();
        assert_eq!(session.end().len(), 2);
    }
}
