//! Narrowing history for display.

use super::HistoryRecord;

/// Criteria for selecting history records.
#[derive(Debug, Clone, Default)]
pub struct HistoryFilter {
    /// Keep only this routine.
    pub routine: Option<String>,

    /// Keep only exercises whose name contains this text (case-insensitive).
    pub exercise: Option<String>,

    /// Keep only the most recent N matches.
    pub limit: Option<usize>,
}

impl HistoryFilter {
    /// Check a single record against the routine and exercise criteria.
    pub fn matches(&self, record: &HistoryRecord) -> bool {
        if let Some(routine) = &self.routine {
            if &record.routine != routine {
                return false;
            }
        }
        if let Some(needle) = &self.exercise {
            if !record
                .exercise
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Apply the filter, keeping file order.
    pub fn apply<'a>(&self, records: &'a [HistoryRecord]) -> Vec<&'a HistoryRecord> {
        let matched: Vec<&HistoryRecord> = records.iter().filter(|r| self.matches(r)).collect();
        match self.limit {
            Some(limit) if matched.len() > limit => matched[matched.len() - limit..].to_vec(),
            _ => matched,
        }
    }
}
