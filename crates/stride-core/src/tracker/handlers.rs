//! Handler operations that return display-ready wrapper types.
//!
//! Both the CLI and the MCP server call these, so the two interfaces print
//! identical markdown.

use std::collections::BTreeMap;

use super::Tracker;
use crate::{
    display::{
        CalendarGrid, CreateResult, DeleteResult, Routines, ScheduleView, SessionDetail,
        Sessions, UpdateResult,
    },
    error::Result,
    models::{Profile, Routine, WorkoutSession},
    params::{
        CreateRoutine, EditSession, Id, ListSessions, LogSession, RecordSession, ShowCalendar,
        ShowSchedule, UpdateProfile, UpdateRoutine,
    },
    schedule::{calendar_window, CALENDAR_WINDOW_DAYS},
};

/// Days shown by `show_schedule` when no count is given.
pub const DEFAULT_SCHEDULE_DAYS: usize = 14;

impl Tracker {
    async fn detail(&self, session: WorkoutSession) -> Result<SessionDetail> {
        let routine = self.get_routine(&Id { id: session.routine_id }).await?;
        Ok(SessionDetail {
            session,
            routine,
            time_zone: self.normalizer.time_zone().clone(),
        })
    }

    /// Handle listing routines in rotation order.
    pub async fn list_routines_view(&self) -> Result<Routines> {
        Ok(Routines(self.list_routines().await?))
    }

    /// Handle creating a routine.
    pub async fn create_routine_result(
        &self,
        params: &CreateRoutine,
    ) -> Result<CreateResult<Routine>> {
        Ok(CreateResult::new(self.create_routine(params).await?))
    }

    /// Handle renaming a routine, reporting which fields changed.
    pub async fn update_routine_result(
        &self,
        params: &UpdateRoutine,
    ) -> Result<UpdateResult<Routine>> {
        let routine = self.update_routine(params).await?;

        let mut changes = Vec::new();
        if let Some(name) = &params.name {
            changes.push(format!("Renamed to {}", name.trim()));
        }
        if params.description.is_some() {
            changes.push("Updated description".to_string());
        }
        Ok(UpdateResult::with_changes(routine, changes))
    }

    /// Handle deleting a routine.
    pub async fn delete_routine_result(&self, params: &Id) -> Result<DeleteResult<Routine>> {
        Ok(DeleteResult::new(self.delete_routine(params).await?))
    }

    /// Handle showing a single session with exercise names.
    pub async fn show_session(&self, params: &Id) -> Result<Option<SessionDetail>> {
        match self.get_session(params).await? {
            Some(session) => Ok(Some(self.detail(session).await?)),
            None => Ok(None),
        }
    }

    /// Handle listing sessions with routine names resolved.
    pub async fn list_sessions_view(&self, params: &ListSessions) -> Result<Sessions> {
        let sessions = self.list_sessions(params).await?;
        let routines = self.list_routines().await?;
        Ok(Sessions {
            sessions,
            routines,
            time_zone: self.normalizer.time_zone().clone(),
        })
    }

    /// Handle back-logging a session.
    pub async fn log_session_result(
        &self,
        params: &LogSession,
    ) -> Result<CreateResult<SessionDetail>> {
        let session = self.log_session(params).await?;
        Ok(CreateResult::new(self.detail(session).await?))
    }

    /// Handle recording a finished session.
    pub async fn record_session_result(
        &self,
        params: &RecordSession,
    ) -> Result<CreateResult<SessionDetail>> {
        let session = self.record_session(params).await?;
        Ok(CreateResult::new(self.detail(session).await?))
    }

    /// Handle the session editor, reporting which fields changed.
    pub async fn edit_session_result(
        &self,
        params: &EditSession,
    ) -> Result<UpdateResult<SessionDetail>> {
        let session = self.edit_session(params).await?;

        let mut changes = Vec::new();
        if let Some(routine_id) = params.routine_id {
            changes.push(format!("Reassigned to routine {routine_id}"));
        }
        if let Some(date) = &params.date {
            changes.push(format!("Moved to {date}"));
        }
        if params.notes.is_some() {
            changes.push("Updated notes".to_string());
        }
        Ok(UpdateResult::with_changes(self.detail(session).await?, changes))
    }

    /// Handle deleting a session.
    pub async fn delete_session_result(&self, params: &Id) -> Result<DeleteResult<SessionDetail>> {
        let session = self.delete_session(params).await?;
        Ok(DeleteResult::new(self.detail(session).await?))
    }

    /// Handle showing part of the schedule as a day list.
    pub async fn show_schedule(&self, params: &ShowSchedule) -> Result<ScheduleView> {
        let today = self.normalizer.today();
        let from = match &params.from {
            Some(raw) => self.parse_day("from", raw)?,
            None => today,
        };
        let days = params.days.unwrap_or(DEFAULT_SCHEDULE_DAYS);

        Ok(ScheduleView {
            entries: self.schedule_window(from, days).await?,
            routines: self.list_routines().await?,
            today,
        })
    }

    /// Handle the calendar grid: the previous week plus the weeks ahead.
    pub async fn show_calendar(&self, params: &ShowCalendar) -> Result<CalendarGrid> {
        let today = self.normalizer.today();
        let days = calendar_window(today, params.days.unwrap_or(CALENDAR_WINDOW_DAYS));

        let entries: BTreeMap<_, _> = self
            .schedule()
            .await?
            .into_iter()
            .map(|entry| (entry.date, entry))
            .collect();

        Ok(CalendarGrid {
            days,
            entries,
            routines: self.list_routines().await?,
            today,
        })
    }

    /// Handle updating the profile.
    pub async fn update_profile_result(
        &self,
        params: &UpdateProfile,
    ) -> Result<UpdateResult<Profile>> {
        let (profile, changes) = self.update_profile(params).await?;
        Ok(UpdateResult::with_changes(profile, changes))
    }
}
