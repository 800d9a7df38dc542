//! MCP server implementation for Stride
//!
//! Exposes the schedule and session log to AI assistants over the Model
//! Context Protocol. Every tool returns the same markdown the CLI prints.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use stride_core::Tracker;
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use handlers::{Id, LogSession, McpResult, ShowCalendar, ShowSchedule, ToggleDay};

const INSTRUCTIONS: &str = r#"Stride tracks workout routines, logged sessions and a day-by-day schedule derived from both.

## Core Concepts
- **Routines**: named exercise templates. Their order decides the rotation: 1 routine alternates workout/rest, 2 routines run [A, B, rest], 3 run [A, B, C, rest], 4 or more use the weekly split [A, B, rest, C, D, rest, rest].
- **Sessions**: logged workouts. Days with a session are always shown as completed with that session's routine.
- **Schedule**: recomputed after every logged or deleted session. Future days continue the rotation one slot after the last session.

## Workflow
1. `overview` for today's plan and the next pending workout
2. `show_schedule` or `show_calendar` to look ahead
3. `list_routines` to find routine and exercise IDs
4. `log_session` once a workout is done (sets as exercise_id/reps/weight_added)
5. `delete_session` to undo a mistaken log
6. `toggle_day` to swap a future day between workout and rest; toggles last until the next logged or deleted session

Dates are calendar days written YYYY-MM-DD in the user's local time zone."#;

/// MCP server for Stride
#[derive(Clone)]
pub struct StrideMcpServer {
    tracker: Arc<Mutex<Tracker>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl StrideMcpServer {
    /// Create a new Stride MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(Mutex::new(tracker)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "list_routines",
        description = "List all routines in rotation order with their IDs, rotation letter (A-D) and exercise counts. Use the IDs from here when logging sessions."
    )]
    async fn list_routines(&self) -> McpResult {
        self.handlers().list_routines().await
    }

    #[tool(
        name = "show_schedule",
        description = "Show the schedule day by day. Optional 'from' (YYYY-MM-DD, defaults to today) and 'days' (defaults to 14). Each day is completed (✓), planned (●) or rest (○), with the routine name for workout days."
    )]
    async fn show_schedule(&self, params: Parameters<ShowSchedule>) -> McpResult {
        self.handlers().show_schedule(params).await
    }

    #[tool(
        name = "show_calendar",
        description = "Show the schedule as a Sunday-first week grid starting with the previous week. Optional 'days' (defaults to 35). Cells show the day of month, a status icon and the routine letter."
    )]
    async fn show_calendar(&self, params: Parameters<ShowCalendar>) -> McpResult {
        self.handlers().show_calendar(params).await
    }

    #[tool(
        name = "log_session",
        description = "Log a completed workout for today or an earlier day. Requires routine_id. Optional 'date' (YYYY-MM-DD, defaults to today; future days are rejected), 'sets' as a list of {exercise_id, reps, weight_added} (sets with 0 reps are dropped) and 'notes' (defaults to 'Manual'). The schedule is recomputed afterwards."
    )]
    async fn log_session(&self, params: Parameters<LogSession>) -> McpResult {
        self.handlers().log_session(params).await
    }

    #[tool(
        name = "delete_session",
        description = "Permanently delete a logged session by ID and rebuild the schedule from the remaining history. Manual day toggles are discarded by the rebuild."
    )]
    async fn delete_session(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().delete_session(params).await
    }

    #[tool(
        name = "toggle_day",
        description = "Flip a future day (YYYY-MM-DD, after today) between workout and rest. A rested day remembers its routine and gets it back when toggled again. Toggles are temporary: the next logged or deleted session recomputes the schedule from the rotation."
    )]
    async fn toggle_day(&self, params: Parameters<ToggleDay>) -> McpResult {
        self.handlers().toggle_day(params).await
    }

    #[tool(
        name = "overview",
        description = "Summarize today's schedule entry, the next pending workout, totals (routines, sessions, training time) and the volume of the last 10 sessions."
    )]
    async fn overview(&self) -> McpResult {
        self.handlers().overview().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for StrideMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "stride".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(INSTRUCTIONS.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: StrideMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Stride MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
