//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use stride_core::{display::OperationStatus, params as core, StrideError, Tracker};
use tokio::sync::Mutex;

use super::errors::to_mcp_error;

/// Generic MCP wrapper for core parameter types
///
/// `#[serde(transparent)]` passes JSON straight through to the core type,
/// whose schema is reused as-is.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type LogSession = McpParams<core::LogSession>;
pub type ShowCalendar = McpParams<core::ShowCalendar>;
pub type ShowSchedule = McpParams<core::ShowSchedule>;
pub type ToggleDay = McpParams<core::ToggleDay>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(body: impl ToString) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(body.to_string())]))
}

/// Handler implementations for the MCP server
///
/// The tracker sits behind a mutex so tool calls that mutate the history
/// run one at a time and each recompute sees a consistent snapshot.
pub struct McpHandlers {
    tracker: Arc<Mutex<Tracker>>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Mutex<Tracker>>) -> Self {
        Self { tracker }
    }

    pub async fn list_routines(&self) -> McpResult {
        debug!("list_routines");

        let routines = self
            .tracker
            .lock()
            .await
            .list_routines_view()
            .await
            .map_err(|e| to_mcp_error("Failed to list routines", &e))?;

        if routines.is_empty() {
            return text(routines);
        }
        text(format!("# Routines\n\n{routines}"))
    }

    pub async fn show_schedule(&self, Parameters(params): Parameters<ShowSchedule>) -> McpResult {
        debug!("show_schedule: {:?}", params);

        let view = self
            .tracker
            .lock()
            .await
            .show_schedule(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load schedule", &e))?;

        text(format!("# Schedule\n\n{view}"))
    }

    pub async fn show_calendar(&self, Parameters(params): Parameters<ShowCalendar>) -> McpResult {
        debug!("show_calendar: {:?}", params);

        let grid = self
            .tracker
            .lock()
            .await
            .show_calendar(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load calendar", &e))?;

        text(format!("# Calendar\n\n{grid}"))
    }

    pub async fn log_session(&self, Parameters(params): Parameters<LogSession>) -> McpResult {
        debug!("log_session: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .log_session_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to log session", &e))?;

        text(result)
    }

    pub async fn delete_session(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_session: {:?}", params);

        let result = self
            .tracker
            .lock()
            .await
            .delete_session_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete session", &e))?;

        text(result)
    }

    pub async fn toggle_day(&self, Parameters(params): Parameters<ToggleDay>) -> McpResult {
        debug!("toggle_day: {:?}", params);

        let inner_params = params.as_ref();
        let result = self.tracker.lock().await.toggle_day(inner_params).await;

        // Rejected days are reported to the caller, not raised as tool errors.
        let schedule = match result {
            Ok(schedule) => schedule,
            Err(StrideError::InvalidInput { reason, .. }) => {
                return text(OperationStatus::failure(reason));
            }
            Err(e) => return Err(to_mcp_error("Failed to toggle day", &e)),
        };

        let now = schedule
            .iter()
            .find(|entry| entry.date.to_string() == inner_params.date)
            .map_or_else(|| inner_params.date.clone(), ToString::to_string);

        text(OperationStatus::success(format!(
            "{now}. Toggles are replaced by the rotation on the next change to routines or history."
        )))
    }

    pub async fn overview(&self) -> McpResult {
        debug!("overview");

        let overview = self
            .tracker
            .lock()
            .await
            .overview()
            .await
            .map_err(|e| to_mcp_error("Failed to build overview", &e))?;

        text(overview)
    }
}
