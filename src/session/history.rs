use crate::model::CalculationResult;

/// Append-only record of the calculations made during one session.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<CalculationResult>,
}

impl HistoryLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, result: CalculationResult) {
        self.entries.push(result);
    }

    /// Entries most-recent-first.
    pub fn all(&self) -> impl ExactSizeIterator<Item = &CalculationResult> + DoubleEndedIterator {
        self.entries.iter().rev()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
