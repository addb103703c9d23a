//! Task score calculation.
//!
//! A score is an additive integer signal combining three terms:
//!
//! | Term | Condition | Points |
//! |------|-----------|--------|
//! | Urgency | overdue (`days_left < 0`) | +100 |
//! | Urgency | due within 3 days | +50 |
//! | Importance | always | `importance * 5` |
//! | Effort | `estimated_hours < 2` | +10 |
//!
//! The urgency bands are mutually exclusive; overdue always dominates
//! near-due. Importance is linear and unclamped, so negative values lower
//! the score.
//!
//! The calculator is a pure function of the record and an explicit `today`
//! date. Callers capture the date once per operation so a whole batch is
//! scored against the same instant. Defaults are not applied here: a record
//! missing `importance` or `estimated_hours` is an error.

use chrono::NaiveDate;

use crate::error::ScoreError;
use crate::task::TaskRecord;

/// Points added when a task is past its due date.
pub const OVERDUE_BONUS: i64 = 100;
/// Points added when a task is due within [`DUE_SOON_WINDOW_DAYS`].
pub const DUE_SOON_BONUS: i64 = 50;
/// Inclusive upper bound, in days, of the due-soon urgency band.
pub const DUE_SOON_WINDOW_DAYS: i64 = 3;
/// Weight multiplying the importance value.
pub const IMPORTANCE_WEIGHT: i64 = 5;
/// Points added for tasks estimated under [`QUICK_WIN_HOURS`].
pub const QUICK_WIN_BONUS: i64 = 10;
/// Strict upper bound, in hours, for the quick-win bonus. Exactly two
/// hours earns nothing.
pub const QUICK_WIN_HOURS: f64 = 2.0;

/// Whole days between `today` and the record's due date. Negative when the
/// task is overdue.
pub fn days_left(task: &TaskRecord, today: NaiveDate) -> Result<i64, ScoreError> {
    let raw = task
        .due_date
        .as_deref()
        .ok_or(ScoreError::MissingField { field: "due_date" })?;
    let due = raw
        .parse::<NaiveDate>()
        .map_err(|source| ScoreError::InvalidDueDate {
            value: raw.to_string(),
            source,
        })?;
    Ok((due - today).num_days())
}

/// Calculate the priority score for one task.
pub fn calculate_score(task: &TaskRecord, today: NaiveDate) -> Result<i64, ScoreError> {
    let importance = task
        .importance
        .ok_or(ScoreError::MissingField { field: "importance" })?;
    let estimated_hours = task.estimated_hours.ok_or(ScoreError::MissingField {
        field: "estimated_hours",
    })?;

    let mut score = 0;

    let days = days_left(task, today)?;
    if days < 0 {
        score += OVERDUE_BONUS;
    } else if days <= DUE_SOON_WINDOW_DAYS {
        score += DUE_SOON_BONUS;
    }

    score += importance * IMPORTANCE_WEIGHT;

    if estimated_hours < QUICK_WIN_HOURS {
        score += QUICK_WIN_BONUS;
    }

    Ok(score)
}
