//! Filter types for querying sessions.

use super::WorkoutSession;
use crate::schedule::{DateNormalizer, DayKey};

/// Filter options for listing sessions.
#[derive(Debug, Clone, Default)]
pub struct SessionFilter {
    /// Only sessions of this routine
    pub routine_id: Option<u64>,

    /// Inclusive day range, compared on the normalized session day
    pub from: Option<DayKey>,
    pub to: Option<DayKey>,

    /// Keep only the most recent N matches
    pub limit: Option<usize>,
}

impl SessionFilter {
    /// Whether a session passes the routine and day-range criteria.
    pub fn matches(&self, session: &WorkoutSession, normalizer: &DateNormalizer) -> bool {
        if self.routine_id.is_some_and(|id| id != session.routine_id) {
            return false;
        }

        let day = normalizer.day_of(session.timestamp);
        self.from.map_or(true, |from| day >= from) && self.to.map_or(true, |to| day <= to)
    }

    /// Applies the filter to a history list sorted oldest first.
    pub fn apply(
        &self,
        sessions: Vec<WorkoutSession>,
        normalizer: &DateNormalizer,
    ) -> Vec<WorkoutSession> {
        let mut matched: Vec<WorkoutSession> = sessions
            .into_iter()
            .filter(|session| self.matches(session, normalizer))
            .collect();

        if let Some(limit) = self.limit {
            let skip = matched.len().saturating_sub(limit);
            matched.drain(..skip);
        }
        matched
    }
}
