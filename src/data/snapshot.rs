//! Pool snapshots: the golfer field of one pool at one moment, loaded from JSON or CSV.
//!
//! JSON shape:
//! `{"pool_id": "...", "min_points": 21, "golfers": [{"id", "name", "tier", "score", ...}]}`
//!
//! CSV columns: `id,name,tier,score,made_cut,thru,position,r1,r2,r3,r4`; empty
//! cells are absent values and `made_cut` defaults to true.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::golfer::GolferCandidate;
use crate::data::tiers::TierBoard;
use crate::data::validate::{validate_snapshot, ValidationDiagnostic};

const CSV_ROUND_COLUMNS: [&str; 4] = ["r1", "r2", "r3", "r4"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    #[serde(default)]
    pub pool_id: String,
    /// Pool-specific minimum tier points; the configured default applies when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_points: Option<u32>,
    #[serde(default)]
    pub golfers: Vec<GolferCandidate>,
}

impl PoolSnapshot {
    pub fn new(pool_id: impl Into<String>, golfers: Vec<GolferCandidate>) -> Self {
        Self {
            pool_id: pool_id.into(),
            min_points: None,
            golfers,
        }
    }

    /// Tier board with each tier ordered best score first.
    pub fn board(&self) -> TierBoard {
        TierBoard::from_golfers(self.golfers.iter().cloned())
    }

    pub fn effective_min_points(&self, default_min_points: u32) -> u32 {
        self.min_points.unwrap_or(default_min_points)
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse snapshot CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: invalid {field} '{value}'")]
    InvalidField {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("snapshot failed validation with {} error(s)", .0.len())]
    Invalid(Vec<ValidationDiagnostic>),
}

/// Load a snapshot from disk, choosing CSV for `.csv` files and JSON otherwise.
/// The snapshot is validated; error-level diagnostics fail the load.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<PoolSnapshot, SnapshotError> {
    let path = path.as_ref();
    let snapshot = read_snapshot(path)?;
    ensure_valid(&snapshot)?;
    tracing::debug!(
        path = %path.display(),
        pool = %snapshot.pool_id,
        golfers = snapshot.golfers.len(),
        "loaded pool snapshot"
    );
    Ok(snapshot)
}

/// Parse a snapshot file without validating it. CSV snapshots take their
/// pool id from the file stem.
pub fn read_snapshot(path: impl AsRef<Path>) -> Result<PoolSnapshot, SnapshotError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)?;
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let snapshot = if is_csv {
        let pool_id = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or_default();
        parse_snapshot_csv(pool_id, &raw)?
    } else {
        parse_snapshot_json(&raw)?
    };
    Ok(snapshot)
}

pub fn parse_snapshot_json(raw: &str) -> Result<PoolSnapshot, SnapshotError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn parse_snapshot_csv(pool_id: &str, raw: &str) -> Result<PoolSnapshot, SnapshotError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw.as_bytes());
    let headers = reader.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let columns = CsvColumns {
        id: column("id"),
        name: column("name"),
        tier: column("tier"),
        score: column("score"),
        made_cut: column("made_cut"),
        thru: column("thru"),
        position: column("position"),
        rounds: CSV_ROUND_COLUMNS.map(column),
    };

    let mut golfers = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // Header is row 1.
        golfers.push(columns.golfer_from_record(index + 2, &record)?);
    }

    Ok(PoolSnapshot::new(pool_id, golfers))
}

/// Fails with [SnapshotError::Invalid] when validation reports any error.
pub fn ensure_valid(snapshot: &PoolSnapshot) -> Result<(), SnapshotError> {
    let report = validate_snapshot(snapshot);
    if report.has_errors() {
        return Err(SnapshotError::Invalid(report.errors().cloned().collect()));
    }
    Ok(())
}

struct CsvColumns {
    id: Option<usize>,
    name: Option<usize>,
    tier: Option<usize>,
    score: Option<usize>,
    made_cut: Option<usize>,
    thru: Option<usize>,
    position: Option<usize>,
    rounds: [Option<usize>; 4],
}

impl CsvColumns {
    fn golfer_from_record(
        &self,
        row: usize,
        record: &csv::StringRecord,
    ) -> Result<GolferCandidate, SnapshotError> {
        let cell = |column: Option<usize>| {
            column
                .and_then(|index| record.get(index))
                .filter(|value| !value.is_empty())
        };

        let id = cell(self.id).unwrap_or_default().to_string();
        let name = cell(self.name).unwrap_or(&id).to_string();
        let tier = parse_required(row, "tier", cell(self.tier))?;
        let score = parse_required(row, "score", cell(self.score))?;
        let made_cut = match cell(self.made_cut) {
            None => true,
            Some(value) => parse_flag(value).ok_or_else(|| SnapshotError::InvalidField {
                row,
                field: "made_cut",
                value: value.to_string(),
            })?,
        };
        let thru = parse_optional(row, "thru", cell(self.thru))?;
        let position = cell(self.position).map(str::to_string);

        let mut rounds = Vec::new();
        for (field, column) in CSV_ROUND_COLUMNS.into_iter().zip(self.rounds) {
            if column.is_some() {
                rounds.push(parse_optional(row, field, cell(column))?);
            }
        }
        while rounds.last() == Some(&None) {
            rounds.pop();
        }

        Ok(GolferCandidate {
            id,
            name,
            tier,
            score,
            made_cut,
            thru,
            position,
            rounds,
        })
    }
}

fn parse_required<T: std::str::FromStr>(
    row: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<T, SnapshotError> {
    parse_optional(row, field, value)?.ok_or(SnapshotError::InvalidField {
        row,
        field,
        value: String::new(),
    })
}

fn parse_optional<T: std::str::FromStr>(
    row: usize,
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, SnapshotError> {
    value
        .map(|raw| {
            raw.parse::<T>().map_err(|_| SnapshotError::InvalidField {
                row,
                field,
                value: raw.to_string(),
            })
        })
        .transpose()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "1" => Some(true),
        "false" | "no" | "n" | "0" | "cut" => Some(false),
        _ => None,
    }
}
