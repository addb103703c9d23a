//! Suggest-now selection: the top urgent tasks for today.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::prioritize::prepare;
use crate::scoring;
use crate::task::TaskRecord;

/// Maximum number of tasks a suggestion returns.
pub const SUGGESTION_LIMIT: usize = 3;
/// Inclusive `days_left` bound for the urgent subset: due today, tomorrow,
/// or overdue. There is no lower bound.
pub const URGENT_WINDOW_DAYS: i64 = 1;
/// Fixed rationale attached to every suggestion, whichever branch produced
/// the selection.
pub const EXPLANATION: &str =
    "These tasks are suggested for today based on urgency and overall task score.";

/// Up to [`SUGGESTION_LIMIT`] scored tasks plus the fixed rationale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    pub tasks: Vec<TaskRecord>,
    pub explanation: String,
}

/// Pick the tasks to do now.
///
/// Scores the whole batch against one `today` snapshot, isolates tasks due
/// within [`URGENT_WINDOW_DAYS`], and falls back to the entire scored list
/// when nothing is urgent. The chosen subset is ranked descending by score
/// (stable) and truncated -- never padded -- to the limit. An empty input
/// yields an empty selection with the same rationale.
pub fn suggest(tasks: &[TaskRecord], today: NaiveDate) -> Result<Suggestion> {
    let scored = prepare(tasks, today)?;

    let mut selected = Vec::new();
    for task in &scored {
        if scoring::days_left(task, today)? <= URGENT_WINDOW_DAYS {
            selected.push(task.clone());
        }
    }

    if selected.is_empty() {
        selected = scored;
    }

    selected.sort_by(|a, b| b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0)));
    selected.truncate(SUGGESTION_LIMIT);

    Ok(Suggestion {
        tasks: selected,
        explanation: EXPLANATION.to_string(),
    })
}
