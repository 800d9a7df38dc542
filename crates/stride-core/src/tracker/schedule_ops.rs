//! Schedule operations for the Tracker.

use super::Tracker;
use crate::{
    error::{Result, StrideError},
    models::{Overview, ScheduleEntry},
    params::ToggleDay,
    schedule::DayKey,
};

impl Tracker {
    /// The stored schedule, sorted by day.
    pub async fn schedule(&self) -> Result<Vec<ScheduleEntry>> {
        self.with_db(|db, _| db.get_schedule()).await
    }

    /// Stored entries for `day_count` days starting at `from`.
    pub async fn schedule_window(&self, from: DayKey, day_count: usize) -> Result<Vec<ScheduleEntry>> {
        let entries = self.schedule().await?;
        let last = from.days().take(day_count).last();

        Ok(entries
            .into_iter()
            .filter(|entry| entry.date >= from && last.is_some_and(|last| entry.date <= last))
            .collect())
    }

    /// Recomputes the schedule from history, discarding manual toggles.
    pub async fn rebuild_schedule(&self) -> Result<Vec<ScheduleEntry>> {
        self.with_db(|db, normalizer| db.rebuild_schedule(normalizer))
            .await
    }

    /// Flips a future day between workout and rest.
    ///
    /// # Errors
    ///
    /// * `StrideError::InvalidInput` - the date does not parse, is today or
    ///   earlier, or there are no routines to assign
    pub async fn toggle_day(&self, params: &ToggleDay) -> Result<Vec<ScheduleEntry>> {
        let day = self.parse_day("date", &params.date)?;
        let today = self.normalizer.today();
        if day <= today {
            return Err(StrideError::invalid_input("date").with_reason(format!(
                "{day} is not after today ({today}); past days follow the history"
            )));
        }

        self.with_db(move |db, normalizer| {
            db.toggle_schedule_day(day, normalizer)?.ok_or_else(|| {
                StrideError::invalid_input("date")
                    .with_reason("There are no routines to schedule")
            })
        })
        .await
    }

    /// Summarizes today's plan, the next workout and training totals.
    pub async fn overview(&self) -> Result<Overview> {
        self.with_db(|db, normalizer| {
            let routines = db.list_routines()?;
            let history = db.list_sessions()?;
            let schedule = db.get_schedule()?;
            Ok(Overview::compute(&routines, &history, &schedule, normalizer))
        })
        .await
    }
}
