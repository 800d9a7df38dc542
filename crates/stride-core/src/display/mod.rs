//! Display formatting for models, collections and operation results.
//!
//! Every type here implements `Display` as markdown, which the CLI renders
//! with termimad and the MCP server returns verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views & Result  │    │   Formatted     │
//! │ (Routine, ...)  │───▶│    Wrappers     │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: list views (Routines, Sessions, ScheduleView, CalendarGrid)
//! - [`results`]: CreateResult, UpdateResult, DeleteResult
//! - [`status`]: OperationStatus
//! - [`datetime`]: LocalDateTime, ElapsedTime
//! - [`models`]: Display for domain models, plus SessionDetail
//!
//! # Examples
//!
//! ```rust
//! use stride_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Schedule rebuilt".to_string());
//! assert_eq!(status.to_string(), "Success: Schedule rebuilt\n");
//! ```

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{CalendarGrid, Routines, ScheduleView, Sessions};
pub use datetime::{ElapsedTime, LocalDateTime};
pub use models::SessionDetail;
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use status::OperationStatus;
