//! Command-line argument wrappers and their handlers
//!
//! Each subcommand has a clap `Args` struct that converts into the matching
//! core parameter type, keeping clap attributes out of `stride-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker → Display → Renderer
//! ```

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use stride_core::{
    display::{OperationStatus, Routines},
    params::*,
    Tracker,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// Routine arguments
// ============================================================================

/// Create a routine at the end of the rotation
///
/// Exercises use the compact form NAME:SETSxREPS[:REST], for example
/// `-e "Pull-up:4x6-8:120"`. Reps are free text ("8-12", "Max").
#[derive(Args)]
pub struct AddRoutineArgs {
    /// Name of the routine
    pub name: String,
    #[arg(short, long, help = "Optional notes about the routine's focus")]
    pub description: Option<String>,
    #[arg(
        short,
        long = "exercise",
        help = "Exercise as NAME:SETSxREPS[:REST]; repeat for each exercise"
    )]
    pub exercises: Vec<ExerciseSpec>,
}

impl From<AddRoutineArgs> for CreateRoutine {
    fn from(val: AddRoutineArgs) -> Self {
        CreateRoutine {
            name: val.name,
            description: val.description,
            exercises: val.exercises,
        }
    }
}

/// Show details of a specific routine
#[derive(Args)]
pub struct ShowRoutineArgs {
    #[arg(help = "Unique identifier of the routine to show")]
    pub id: u64,
}

impl From<ShowRoutineArgs> for Id {
    fn from(val: ShowRoutineArgs) -> Self {
        Id { id: val.id }
    }
}

/// Rename a routine or change its description
///
/// The schedule is not affected: routines keep their rotation slot.
#[derive(Args)]
pub struct RenameRoutineArgs {
    #[arg(help = "Unique identifier of the routine to update")]
    pub id: u64,
    #[arg(short, long, help = "New name for the routine")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description for the routine")]
    pub description: Option<String>,
}

impl From<RenameRoutineArgs> for UpdateRoutine {
    fn from(val: RenameRoutineArgs) -> Self {
        UpdateRoutine {
            id: val.id,
            name: val.name,
            description: val.description,
        }
    }
}

/// Delete a routine
///
/// Logged sessions of the routine stay in the history. The schedule is
/// recomputed with one routine fewer.
#[derive(Args)]
pub struct DeleteRoutineArgs {
    #[arg(help = "Unique identifier of the routine to delete")]
    pub id: u64,
}

impl From<DeleteRoutineArgs> for Id {
    fn from(val: DeleteRoutineArgs) -> Self {
        Id { id: val.id }
    }
}

/// Replace one exercise of a routine in place
#[derive(Args)]
pub struct ReplaceExerciseArgs {
    #[arg(help = "Unique identifier of the exercise to replace")]
    pub exercise_id: u64,
    #[arg(help = "Replacement as NAME:SETSxREPS[:REST]")]
    pub exercise: ExerciseSpec,
    #[arg(short, long, help = "Primary muscle group of the replacement")]
    pub muscle_group: Option<String>,
}

impl From<ReplaceExerciseArgs> for ReplaceExercise {
    fn from(val: ReplaceExerciseArgs) -> Self {
        ReplaceExercise {
            exercise_id: val.exercise_id,
            exercise: ExerciseSpec {
                muscle_group: val.muscle_group,
                ..val.exercise
            },
        }
    }
}

#[derive(Subcommand)]
pub enum RoutineCommands {
    /// Create a routine
    #[command(alias = "a")]
    Add(AddRoutineArgs),
    /// List routines in rotation order
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a routine
    #[command(alias = "s")]
    Show(ShowRoutineArgs),
    /// Rename a routine or change its description
    #[command(alias = "u")]
    Rename(RenameRoutineArgs),
    /// Delete a routine
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteRoutineArgs),
    /// Replace one exercise of a routine
    #[command(alias = "rx")]
    ReplaceExercise(ReplaceExerciseArgs),
}

// ============================================================================
// Session arguments
// ============================================================================

/// Log a session for today or an earlier day
///
/// Sets use the form EXERCISE_ID:REPS[@WEIGHT], e.g. `--set 3:10@12.5`.
/// Sets with zero reps are dropped.
#[derive(Args)]
pub struct LogSessionArgs {
    #[arg(help = "Routine that was performed")]
    pub routine_id: u64,
    #[arg(long, help = "Day of the session as YYYY-MM-DD (defaults to today)")]
    pub date: Option<String>,
    #[arg(
        short,
        long = "set",
        help = "Set as EXERCISE_ID:REPS[@WEIGHT]; repeat for each set"
    )]
    pub sets: Vec<SetEntry>,
    #[arg(short, long, help = "Notes (defaults to 'Manual')")]
    pub notes: Option<String>,
}

impl From<LogSessionArgs> for LogSession {
    fn from(val: LogSessionArgs) -> Self {
        LogSession {
            routine_id: val.routine_id,
            date: val.date,
            sets: val.sets,
            notes: val.notes,
        }
    }
}

/// Record a session that just finished
#[derive(Args)]
pub struct RecordSessionArgs {
    #[arg(help = "Routine that was performed")]
    pub routine_id: u64,
    #[arg(short, long, default_value_t = 0, help = "Duration in minutes")]
    pub minutes: u32,
    #[arg(
        short,
        long = "set",
        help = "Set as EXERCISE_ID:REPS[@WEIGHT]; repeat for each set"
    )]
    pub sets: Vec<SetEntry>,
    #[arg(short, long, help = "Optional notes")]
    pub notes: Option<String>,
}

impl From<RecordSessionArgs> for RecordSession {
    fn from(val: RecordSessionArgs) -> Self {
        RecordSession {
            routine_id: val.routine_id,
            duration_seconds: val.minutes.saturating_mul(60),
            sets: val.sets,
            notes: val.notes,
        }
    }
}

/// Show details of a session
#[derive(Args)]
pub struct ShowSessionArgs {
    #[arg(help = "Unique identifier of the session to show")]
    pub id: u64,
}

impl From<ShowSessionArgs> for Id {
    fn from(val: ShowSessionArgs) -> Self {
        Id { id: val.id }
    }
}

/// List logged sessions, newest first
#[derive(Args)]
pub struct ListSessionsArgs {
    #[arg(short, long, help = "Only sessions of this routine")]
    pub routine: Option<u64>,
    #[arg(long, help = "First day to include (YYYY-MM-DD)")]
    pub from: Option<String>,
    #[arg(long, help = "Last day to include (YYYY-MM-DD)")]
    pub to: Option<String>,
    #[arg(short = 'n', long, help = "Show only the N most recent sessions")]
    pub limit: Option<usize>,
}

impl From<ListSessionsArgs> for ListSessions {
    fn from(val: ListSessionsArgs) -> Self {
        ListSessions {
            routine_id: val.routine,
            from: val.from,
            to: val.to,
            limit: val.limit,
        }
    }
}

/// Reassign a session to another routine or day
///
/// A new day anchors the session at local noon. The schedule is recomputed.
#[derive(Args)]
pub struct EditSessionArgs {
    #[arg(help = "Unique identifier of the session to edit")]
    pub id: u64,
    #[arg(short, long, help = "Routine to reassign the session to")]
    pub routine: Option<u64>,
    #[arg(long, help = "Day to move the session to (YYYY-MM-DD)")]
    pub date: Option<String>,
    #[arg(short, long, help = "Replacement notes")]
    pub notes: Option<String>,
}

impl From<EditSessionArgs> for EditSession {
    fn from(val: EditSessionArgs) -> Self {
        EditSession {
            id: val.id,
            routine_id: val.routine,
            date: val.date,
            notes: val.notes,
        }
    }
}

/// Delete a session and rebuild the schedule
#[derive(Args)]
pub struct DeleteSessionArgs {
    #[arg(help = "Unique identifier of the session to delete")]
    pub id: u64,
}

impl From<DeleteSessionArgs> for Id {
    fn from(val: DeleteSessionArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum SessionCommands {
    /// Log a session for today or an earlier day
    #[command(alias = "l")]
    Log(LogSessionArgs),
    /// Record a session that just finished
    #[command(alias = "r")]
    Record(RecordSessionArgs),
    /// Show details of a session
    #[command(alias = "s")]
    Show(ShowSessionArgs),
    /// List logged sessions
    #[command(alias = "ls")]
    List(ListSessionsArgs),
    /// Reassign a session to another routine or day
    #[command(alias = "e")]
    Edit(EditSessionArgs),
    /// Delete a session
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteSessionArgs),
}

// ============================================================================
// Schedule arguments
// ============================================================================

/// Show the schedule as a list of days
#[derive(Args)]
pub struct ShowScheduleArgs {
    #[arg(long, help = "First day to show (defaults to today)")]
    pub from: Option<String>,
    #[arg(short, long, help = "Number of days to show (defaults to 14)")]
    pub days: Option<usize>,
}

impl From<ShowScheduleArgs> for ShowSchedule {
    fn from(val: ShowScheduleArgs) -> Self {
        ShowSchedule {
            from: val.from,
            days: val.days,
        }
    }
}

/// Show the schedule as a week grid, starting with the previous week
#[derive(Args)]
pub struct ShowCalendarArgs {
    #[arg(short, long, help = "Number of days to show (defaults to 35)")]
    pub days: Option<usize>,
}

impl From<ShowCalendarArgs> for ShowCalendar {
    fn from(val: ShowCalendarArgs) -> Self {
        ShowCalendar { days: val.days }
    }
}

/// Flip a future day between workout and rest
///
/// Toggles last until the next change to routines or history, which
/// recomputes the schedule from the rotation.
#[derive(Args)]
pub struct ToggleDayArgs {
    #[arg(help = "Day to toggle (YYYY-MM-DD), after today")]
    pub date: String,
}

impl From<ToggleDayArgs> for ToggleDay {
    fn from(val: ToggleDayArgs) -> Self {
        ToggleDay { date: val.date }
    }
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Show upcoming days
    #[command(alias = "s")]
    Show(ShowScheduleArgs),
    /// Show the calendar grid
    #[command(alias = "c")]
    Calendar(ShowCalendarArgs),
    /// Flip a future day between workout and rest
    #[command(alias = "t")]
    Toggle(ToggleDayArgs),
    /// Recompute the schedule, discarding toggles
    Rebuild,
}

// ============================================================================
// Profile and data arguments
// ============================================================================

/// Command-line representation of training levels
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for LevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LevelArg::Beginner => write!(f, "beginner"),
            LevelArg::Intermediate => write!(f, "intermediate"),
            LevelArg::Advanced => write!(f, "advanced"),
        }
    }
}

/// Command-line representation of training goals
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum GoalArg {
    Strength,
    Hypertrophy,
    Endurance,
    Skill,
}

impl std::fmt::Display for GoalArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalArg::Strength => write!(f, "strength"),
            GoalArg::Hypertrophy => write!(f, "hypertrophy"),
            GoalArg::Endurance => write!(f, "endurance"),
            GoalArg::Skill => write!(f, "skill"),
        }
    }
}

/// Update profile fields
#[derive(Args)]
pub struct SetProfileArgs {
    #[arg(short, long, help = "Athlete name")]
    pub name: Option<String>,
    #[arg(short, long, help = "Training level")]
    pub level: Option<LevelArg>,
    #[arg(short, long, help = "Primary training goal")]
    pub goal: Option<GoalArg>,
    #[arg(
        short,
        long,
        value_delimiter = ',',
        help = "Available equipment as comma-separated list"
    )]
    pub equipment: Option<Vec<String>>,
    #[arg(short, long, help = "Planned training days per week (0-7)")]
    pub days: Option<u8>,
}

impl From<SetProfileArgs> for UpdateProfile {
    fn from(val: SetProfileArgs) -> Self {
        UpdateProfile {
            name: val.name,
            level: val.level.map(|l| l.to_string()),
            goal: val.goal.map(|g| g.to_string()),
            equipment: val.equipment,
            training_days_per_week: val.days,
        }
    }
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Show the profile
    #[command(alias = "s")]
    Show,
    /// Update profile fields
    #[command(alias = "u")]
    Set(SetProfileArgs),
}

/// Write all data to a JSON file
#[derive(Args)]
pub struct ExportArgs {
    #[arg(help = "Destination file")]
    pub path: PathBuf,
}

/// Replace all data with a JSON export
#[derive(Args)]
pub struct ImportArgs {
    #[arg(help = "File written by `stride export`")]
    pub path: PathBuf,
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs CLI commands against a tracker and renders the markdown output.
pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_routine_command(&self, command: RoutineCommands) -> Result<()> {
        let output = match command {
            RoutineCommands::Add(args) => self
                .tracker
                .create_routine_result(&args.into())
                .await
                .context("Failed to create routine")?
                .to_string(),
            RoutineCommands::List => self.routines().await?.to_string(),
            RoutineCommands::Show(args) => {
                let params: Id = args.into();
                self.tracker
                    .get_routine(&params)
                    .await
                    .context("Failed to get routine")?
                    .ok_or_else(|| anyhow!("Routine with ID {} not found", params.id))?
                    .to_string()
            }
            RoutineCommands::Rename(args) => self
                .tracker
                .update_routine_result(&args.into())
                .await
                .context("Failed to update routine")?
                .to_string(),
            RoutineCommands::Delete(args) => self
                .tracker
                .delete_routine_result(&args.into())
                .await
                .context("Failed to delete routine")?
                .to_string(),
            RoutineCommands::ReplaceExercise(args) => {
                let routine = self
                    .tracker
                    .replace_exercise(&args.into())
                    .await
                    .context("Failed to replace exercise")?;
                format!("Replaced exercise in routine {}\n\n{routine}", routine.id)
            }
        };
        self.renderer.render(&output)
    }

    pub async fn handle_session_command(&self, command: SessionCommands) -> Result<()> {
        let output = match command {
            SessionCommands::Log(args) => self
                .tracker
                .log_session_result(&args.into())
                .await
                .context("Failed to log session")?
                .to_string(),
            SessionCommands::Record(args) => self
                .tracker
                .record_session_result(&args.into())
                .await
                .context("Failed to record session")?
                .to_string(),
            SessionCommands::Show(args) => {
                let params: Id = args.into();
                self.tracker
                    .show_session(&params)
                    .await
                    .context("Failed to get session")?
                    .ok_or_else(|| anyhow!("Session with ID {} not found", params.id))?
                    .to_string()
            }
            SessionCommands::List(args) => {
                let sessions = self
                    .tracker
                    .list_sessions_view(&args.into())
                    .await
                    .context("Failed to list sessions")?;
                if sessions.is_empty() {
                    sessions.to_string()
                } else {
                    format!("# Sessions\n\n{sessions}")
                }
            }
            SessionCommands::Edit(args) => self
                .tracker
                .edit_session_result(&args.into())
                .await
                .context("Failed to edit session")?
                .to_string(),
            SessionCommands::Delete(args) => self
                .tracker
                .delete_session_result(&args.into())
                .await
                .context("Failed to delete session")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        let output = match command {
            ScheduleCommands::Show(args) => self
                .tracker
                .show_schedule(&args.into())
                .await
                .context("Failed to load schedule")?
                .to_string(),
            ScheduleCommands::Calendar(args) => self
                .tracker
                .show_calendar(&args.into())
                .await
                .context("Failed to load calendar")?
                .to_string(),
            ScheduleCommands::Toggle(args) => {
                let params: ToggleDay = args.into();
                self.tracker
                    .toggle_day(&params)
                    .await
                    .context("Failed to toggle day")?;
                OperationStatus::success(format!(
                    "Toggled {}. The next change to routines or history restores the rotation.",
                    params.date
                ))
                .to_string()
            }
            ScheduleCommands::Rebuild => {
                let schedule = self
                    .tracker
                    .rebuild_schedule()
                    .await
                    .context("Failed to rebuild schedule")?;
                OperationStatus::success(format!(
                    "Schedule rebuilt with {} days",
                    schedule.len()
                ))
                .to_string()
            }
        };
        self.renderer.render(&output)
    }

    pub async fn handle_profile_command(&self, command: ProfileCommands) -> Result<()> {
        let output = match command {
            ProfileCommands::Show => self
                .tracker
                .profile()
                .await
                .context("Failed to load profile")?
                .to_string(),
            ProfileCommands::Set(args) => self
                .tracker
                .update_profile_result(&args.into())
                .await
                .context("Failed to update profile")?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    pub async fn overview(&self) -> Result<()> {
        let overview = self
            .tracker
            .overview()
            .await
            .context("Failed to build overview")?;
        self.renderer.render(&overview.to_string())
    }

    pub async fn export(&self, args: ExportArgs) -> Result<()> {
        let snapshot = self
            .tracker
            .export_to_file(&args.path)
            .await
            .context("Failed to export data")?;
        let status = OperationStatus::success(format!(
            "Exported {} routines and {} sessions to {}",
            snapshot.routines.len(),
            snapshot.history.len(),
            args.path.display()
        ));
        self.renderer.render(&status.to_string())
    }

    pub async fn import(&self, args: ImportArgs) -> Result<()> {
        let snapshot = self
            .tracker
            .import_from_file(&args.path)
            .await
            .context("Failed to import data")?;
        let status = OperationStatus::success(format!(
            "Imported {} routines and {} sessions from {}",
            snapshot.routines.len(),
            snapshot.history.len(),
            args.path.display()
        ));
        self.renderer.render(&status.to_string())
    }

    async fn routines(&self) -> Result<Routines> {
        let routines = self
            .tracker
            .list_routines_view()
            .await
            .context("Failed to list routines")?;
        Ok(routines)
    }
}
