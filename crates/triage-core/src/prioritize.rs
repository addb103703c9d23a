//! Task prioritization: validate, default, score, order.

use chrono::NaiveDate;

use crate::error::{EngineError, Result};
use crate::scoring;
use crate::strategy::Strategy;
use crate::task::TaskRecord;

/// Sort sentinel for a missing `estimated_hours` under the fastest
/// strategy; pushes the record to the end.
const MISSING_HOURS_SENTINEL: f64 = 999.0;
/// Sort sentinel for a missing `due_date` under the deadline strategy.
const MISSING_DUE_DATE_SENTINEL: &str = "9999-12-31";

/// Validate a batch, fill defaults, and score every record.
///
/// Both engine operations start here. Validation is exhaustive: every task
/// missing `title` or `due_date` is reported as
/// `Task {n} is missing required fields: {names}` with a 1-based index, and
/// a single violation fails the whole batch -- no partial processing. The
/// input is never mutated; the returned records are owned copies with
/// defaults and scores applied against the one `today` snapshot.
pub(crate) fn prepare(tasks: &[TaskRecord], today: NaiveDate) -> Result<Vec<TaskRecord>> {
    let errors: Vec<String> = tasks
        .iter()
        .enumerate()
        .filter_map(|(index, task)| {
            let missing = task.missing_required_fields();
            if missing.is_empty() {
                None
            } else {
                Some(format!(
                    "Task {} is missing required fields: {}",
                    index + 1,
                    missing.join(", ")
                ))
            }
        })
        .collect();

    if !errors.is_empty() {
        return Err(EngineError::Validation(errors));
    }

    tasks
        .iter()
        .map(|task| {
            let mut task = task.clone().with_defaults();
            task.score = Some(scoring::calculate_score(&task, today)?);
            Ok(task)
        })
        .collect()
}

/// Score a task list and reorder it according to `strategy`.
///
/// The full list comes back -- ordering never drops tasks -- with `score`
/// and the defaulted fields populated on every record. All sorts are
/// stable, so ties keep their input order.
pub fn prioritize(
    tasks: &[TaskRecord],
    strategy: Strategy,
    today: NaiveDate,
) -> Result<Vec<TaskRecord>> {
    let mut scored = prepare(tasks, today)?;

    match strategy {
        Strategy::Fastest => scored.sort_by(|a, b| {
            a.estimated_hours
                .unwrap_or(MISSING_HOURS_SENTINEL)
                .total_cmp(&b.estimated_hours.unwrap_or(MISSING_HOURS_SENTINEL))
        }),
        Strategy::Impact => {
            scored.sort_by(|a, b| b.importance.unwrap_or(0).cmp(&a.importance.unwrap_or(0)))
        }
        // Raw string comparison: lexicographic order matches chronological
        // order for well-formed ISO-8601 dates.
        Strategy::Deadline => scored.sort_by(|a, b| {
            a.due_date
                .as_deref()
                .unwrap_or(MISSING_DUE_DATE_SENTINEL)
                .cmp(b.due_date.as_deref().unwrap_or(MISSING_DUE_DATE_SENTINEL))
        }),
        Strategy::Smart => {
            scored.sort_by(|a, b| b.score.unwrap_or(0).cmp(&a.score.unwrap_or(0)))
        }
    }

    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn task(title: &str, due: &str, importance: i64, hours: f64) -> TaskRecord {
        TaskRecord::new(title, due)
            .with_importance(importance)
            .with_estimated_hours(hours)
    }

    fn titles(tasks: &[TaskRecord]) -> Vec<&str> {
        tasks.iter().filter_map(|t| t.title.as_deref()).collect()
    }

    #[test]
    fn test_every_output_task_is_scored() {
        let tasks = vec![
            TaskRecord::new("A", "2025-06-16"),
            task("B", "2025-07-30", 2, 3.0),
        ];
        let ranked = prioritize(&tasks, Strategy::Smart, today()).unwrap();
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|t| t.score.is_some()));
        assert!(ranked.iter().all(|t| t.dependencies.is_some()));
    }

    #[test]
    fn test_supplied_score_is_overwritten() {
        let mut fudged = task("A", "2025-07-30", 0, 5.0);
        fudged.score = Some(9_999);
        let ranked = prioritize(&[fudged], Strategy::Smart, today()).unwrap();
        assert_eq!(ranked[0].score, Some(0));
    }

    #[test]
    fn test_smart_orders_by_score_descending() {
        // X: 50 + 5 + 0 = 55; Y: 0 + 100 + 10 = 110
        let x = task("X", "2025-06-17", 1, 3.0);
        let y = task("Y", "2025-07-15", 20, 1.0);
        let ranked = prioritize(&[x.clone(), y.clone()], Strategy::Smart, today()).unwrap();
        assert_eq!(titles(&ranked), vec!["Y", "X"]);
        assert_eq!(ranked[0].score, Some(110));
        assert_eq!(ranked[1].score, Some(55));

        // Same pair under deadline ordering flips.
        let ranked = prioritize(&[x, y], Strategy::Deadline, today()).unwrap();
        assert_eq!(titles(&ranked), vec!["X", "Y"]);
    }

    #[test]
    fn test_unknown_strategy_matches_smart() {
        let tasks = vec![
            task("low", "2025-07-30", 1, 5.0),
            task("high", "2025-07-30", 9, 5.0),
        ];
        let smart = prioritize(&tasks, Strategy::Smart, today()).unwrap();
        let unknown = prioritize(&tasks, Strategy::parse("banana"), today()).unwrap();
        assert_eq!(titles(&smart), titles(&unknown));
    }

    #[test]
    fn test_fastest_orders_by_hours_ascending() {
        let tasks = vec![
            task("slow", "2025-07-30", 5, 8.0),
            task("quick", "2025-07-30", 5, 0.5),
            task("medium", "2025-07-30", 5, 2.0),
        ];
        let ranked = prioritize(&tasks, Strategy::Fastest, today()).unwrap();
        assert_eq!(titles(&ranked), vec!["quick", "medium", "slow"]);
    }

    #[test]
    fn test_impact_orders_by_importance_descending() {
        let tasks = vec![
            task("minor", "2025-07-30", 1, 1.0),
            task("major", "2025-07-30", 10, 1.0),
            task("negative", "2025-07-30", -2, 1.0),
        ];
        let ranked = prioritize(&tasks, Strategy::Impact, today()).unwrap();
        assert_eq!(titles(&ranked), vec!["major", "minor", "negative"]);
    }

    #[test]
    fn test_stable_ties_keep_input_order() {
        let tasks = vec![
            task("first", "2025-07-30", 5, 1.0),
            task("second", "2025-07-30", 5, 1.0),
            task("third", "2025-07-30", 5, 1.0),
        ];
        for strategy in [
            Strategy::Fastest,
            Strategy::Impact,
            Strategy::Deadline,
            Strategy::Smart,
        ] {
            let ranked = prioritize(&tasks, strategy, today()).unwrap();
            assert_eq!(titles(&ranked), vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_validation_collects_all_violations() {
        let tasks = vec![
            TaskRecord {
                due_date: Some("2025-06-20".to_string()),
                ..TaskRecord::default()
            },
            task("fine", "2025-06-20", 5, 1.0),
            TaskRecord::default(),
        ];
        let err = prioritize(&tasks, Strategy::Smart, today()).unwrap_err();
        match err {
            EngineError::Validation(messages) => {
                assert_eq!(
                    messages,
                    vec![
                        "Task 1 is missing required fields: title",
                        "Task 3 is missing required fields: title, due_date",
                    ]
                );
            }
            other => panic!("expected validation error, got {other}"),
        }
    }

    #[test]
    fn test_invalid_due_date_surfaces_from_scoring() {
        let tasks = vec![task("bad", "06/20/2025", 5, 1.0)];
        let err = prioritize(&tasks, Strategy::Smart, today()).unwrap_err();
        assert!(matches!(err, EngineError::Score(_)));
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let tasks = vec![TaskRecord::new("A", "2025-06-16")];
        let _ = prioritize(&tasks, Strategy::Smart, today()).unwrap();
        assert_eq!(tasks[0].importance, None);
        assert_eq!(tasks[0].score, None);
    }

    #[test]
    fn test_extra_fields_survive_prioritization() {
        let value = serde_json::json!({
            "title": "A",
            "due_date": "2025-06-16",
            "assignee": "dana",
        });
        let task: TaskRecord = serde_json::from_value(value).unwrap();
        let ranked = prioritize(&[task], Strategy::Smart, today()).unwrap();
        assert_eq!(
            ranked[0].extra.get("assignee"),
            Some(&serde_json::json!("dana"))
        );
    }

    #[test]
    fn test_empty_list() {
        let ranked = prioritize(&[], Strategy::Smart, today()).unwrap();
        assert!(ranked.is_empty());
    }
}
