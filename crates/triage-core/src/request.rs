//! Request payload decoding for the transport boundary.
//!
//! The engine accepts two payload shapes, matching the service it fronts:
//! a bare JSON array of tasks, or an envelope object with a `tasks` array
//! and an optional `strategy` string. Anything else is a structural error,
//! reported before any per-task processing. A task element that is not an
//! object surfaces as a serde error, i.e. the generic-failure path.

use serde_json::Value;

use crate::error::{EngineError, Result};
use crate::strategy::Strategy;
use crate::task::TaskRecord;

/// Message for payloads that are not a task list in an accepted shape.
const STRUCTURAL_ERROR: &str = "JSON must be a list of tasks";

/// A decoded prioritization request.
///
/// `strategy` is `None` when the payload named none (a bare array, or an
/// envelope without the key), so the transport layer can fall back to its
/// own configured default. Library callers can use `unwrap_or_default()`
/// for the engine's smart default.
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    pub tasks: Vec<TaskRecord>,
    pub strategy: Option<Strategy>,
}

/// Decode an analyze payload: a bare array, or `{ "tasks": [...],
/// "strategy": "..." }` with both keys optional.
pub fn decode_analyze(payload: Value) -> Result<AnalyzeRequest> {
    match payload {
        Value::Array(items) => Ok(AnalyzeRequest {
            tasks: decode_elements(items)?,
            strategy: None,
        }),
        Value::Object(mut envelope) => {
            // A present-but-non-string strategy counts as unrecognized,
            // which parses to smart.
            let strategy = match envelope.get("strategy") {
                Some(Value::String(raw)) => Some(Strategy::parse(raw)),
                Some(_) => Some(Strategy::Smart),
                None => None,
            };
            let tasks = match envelope.remove("tasks") {
                Some(Value::Array(items)) => decode_elements(items)?,
                Some(_) => return Err(EngineError::Structural(STRUCTURAL_ERROR.into())),
                None => Vec::new(),
            };
            Ok(AnalyzeRequest { tasks, strategy })
        }
        _ => Err(EngineError::Structural(STRUCTURAL_ERROR.into())),
    }
}

/// Decode a suggest payload, which must be a bare array of tasks.
pub fn decode_suggest(payload: Value) -> Result<Vec<TaskRecord>> {
    match payload {
        Value::Array(items) => decode_elements(items),
        _ => Err(EngineError::Structural(STRUCTURAL_ERROR.into())),
    }
}

fn decode_elements(items: Vec<Value>) -> Result<Vec<TaskRecord>> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).map_err(EngineError::from))
        .collect()
}
