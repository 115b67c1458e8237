//! matrix-core: scoring and quadrant classification for the priority matrix.
//!
//! Tasks are rated on four impact and three urgency dimensions. The engine sums
//! them, derives deadline proximity from the due date, and places each task in
//! one of four quadrants using the user's thresholds. Nothing here does I/O.

pub mod board;
pub mod deadline;
pub mod dimensions;
pub mod samples;
pub mod scoring;
pub mod settings;
pub mod task;
pub mod task_list;
pub mod time;
pub mod validation;

pub use board::{Board, BoardColumn, BoardEntry, BoardQuery, build_board};
pub use deadline::{days_until, deadline_proximity_for, derive_deadline_proximity, parse_due_date};
pub use dimensions::{
    DeadlineProximity, EffectiveUrgency, ImpactDimension, ImpactScores, Score, UrgencyDimension,
    UrgencyScores, clamp_score,
};
pub use samples::sample_tasks;
pub use scoring::{
    Quadrant, TaskScore, classify, effective_urgency_scores, impact_total, is_important,
    is_urgent, score_task, urgency_total,
};
pub use settings::{Settings, SettingsError};
pub use task::{Task, TaskRecord, TaskStatus};
pub use task_list::TaskList;
pub use time::{parse_day, today_in_timezone};
pub use validation::{TaskDraft, ValidationError, ValidationErrors};
