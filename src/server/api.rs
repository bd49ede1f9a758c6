use serde::Serialize;
use thiserror::Error;

use crate::data::snapshot::PoolSnapshot;
use crate::data::validate::{validate_snapshot, ValidationDiagnostic, ValidationReport};
use crate::optimizer::multiset::generate_valid_multisets;
use crate::optimizer::{optimize_snapshot, SearchStats, TierMultiset, UnicornResult};

#[derive(Debug, Clone, Serialize)]
pub struct UnicornResponse {
    pub status: &'static str,
    pub pool_id: String,
    pub min_points: u32,
    pub computed_at: String,
    pub result: Option<UnicornResult>,
    pub stats: SearchStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MultisetsResponse {
    pub min_points: u32,
    pub count: usize,
    pub multisets: Vec<TierMultiset>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationErrorResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub errors: Vec<ValidationDiagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub status: &'static str,
    pub pool_id: String,
    pub valid: bool,
    pub report: ValidationReport,
}

#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Query(String),
    #[error("snapshot failed validation")]
    Validation(ValidationErrorResponse),
}

pub fn health_payload() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({
        "status": "ok",
        "service": "fairway-api",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// POST /api/unicorn: body is a pool snapshot.
pub fn unicorn_payload(body: &str, default_min_points: u32) -> Result<String, PayloadError> {
    let snapshot: PoolSnapshot = serde_json::from_str(body)?;
    reject_invalid(&snapshot)?;

    let outcome = optimize_snapshot(&snapshot, default_min_points);
    let message = outcome
        .result
        .is_none()
        .then_some("no valid team: not enough golfers or minimum points unreachable");
    let response = UnicornResponse {
        status: "ok",
        pool_id: outcome.pool_id,
        min_points: outcome.min_points,
        computed_at: chrono::Utc::now().to_rfc3339(),
        result: outcome.result,
        stats: outcome.stats,
        message,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

/// GET /api/multisets?min_points=N
pub fn multisets_payload(path: &str, default_min_points: u32) -> Result<String, PayloadError> {
    let min_points = match query_param(path, "min_points") {
        None => default_min_points,
        Some(raw) => raw
            .parse::<u32>()
            .map_err(|_| PayloadError::Query(format!("min_points must be a non-negative integer, got '{raw}'")))?,
    };
    let multisets = generate_valid_multisets(min_points);
    let response = MultisetsResponse {
        min_points,
        count: multisets.len(),
        multisets,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

/// POST /api/validate: diagnostics for a snapshot without running the search.
pub fn validate_payload(body: &str) -> Result<String, PayloadError> {
    let snapshot: PoolSnapshot = serde_json::from_str(body)?;
    let report = validate_snapshot(&snapshot);
    let response = ValidateResponse {
        status: "ok",
        pool_id: snapshot.pool_id,
        valid: !report.has_errors(),
        report,
    };
    Ok(serde_json::to_string_pretty(&response)?)
}

fn reject_invalid(snapshot: &PoolSnapshot) -> Result<(), PayloadError> {
    let report = validate_snapshot(snapshot);
    if report.has_errors() {
        return Err(PayloadError::Validation(ValidationErrorResponse {
            status: "error",
            message: "Validation failed",
            errors: report.errors().cloned().collect(),
        }));
    }
    Ok(())
}

fn query_param<'a>(path: &'a str, key: &str) -> Option<&'a str> {
    let query = path.split_once('?')?.1;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| k.trim() == key)
        .map(|(_, v)| v.trim())
}
