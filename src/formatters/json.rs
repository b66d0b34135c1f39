// ABOUTME: JSON export of a full zone report
// ABOUTME: Serializes tables, summaries, and skipped activities with serde_json
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs;
use std::path::Path;
use tracing::info;
use zone_core::errors::AppResult;

use crate::report::ZoneReport;

/// Pretty-printed JSON for `report`
///
/// # Errors
///
/// Returns a serialization error if the report contains a non-finite float.
pub fn to_json_string(report: &ZoneReport) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write `report` as JSON to `path`, replacing any existing file
///
/// # Errors
///
/// Serialization or I/O failure.
pub fn write_report(path: &Path, report: &ZoneReport) -> AppResult<()> {
    let json = to_json_string(report)?;
    fs::write(path, json)?;
    info!(path = %path.display(), domains = report.domains.len(), "Wrote JSON report");
    Ok(())
}
