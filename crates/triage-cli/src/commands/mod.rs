//! CLI command implementations.

pub mod analyze;
pub mod config;
pub mod suggest;

use std::io::Read;
use std::path::Path;

use triage_core::EngineError;

/// Exit status for malformed requests (structural or validation failures).
pub const EXIT_CLIENT_ERROR: i32 = 2;
/// Exit status for any other engine failure.
pub const EXIT_FAILURE: i32 = 1;

/// Read a JSON payload from a file, or stdin when no path is given.
pub(crate) fn read_payload(
    path: Option<&Path>,
) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&raw)?)
}

/// Report an engine error as the service's JSON error envelope and exit
/// with the matching status: validation failures carry the collected
/// message list, everything else a single message string.
pub(crate) fn report_engine_error(err: EngineError) -> ! {
    let body = match &err {
        EngineError::Validation(messages) => serde_json::json!({ "error": messages }),
        _ => serde_json::json!({ "error": err.to_string() }),
    };
    eprintln!("{body}");
    let code = if err.is_client_error() {
        EXIT_CLIENT_ERROR
    } else {
        EXIT_FAILURE
    };
    std::process::exit(code);
}
