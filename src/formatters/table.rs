// ABOUTME: Renders an aggregate zone table as fixed-width text
// ABOUTME: Row name, metadata columns, zones_sum, then one column per zone label
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt::Write as _;
use std::iter;
use zone_core::models::{ZoneDomain, ZoneMetadata};

use crate::zones::{AggregateTable, TableRow};

const ROW_NAME_HEADER: &str = "activity";
const ZONES_SUM_HEADER: &str = "zones_sum";
const COLUMN_GAP: &str = "  ";

/// Render `table` with durations in whole seconds
///
/// The Total row leaves every metadata cell blank.
#[must_use]
pub fn render_table(table: &AggregateTable) -> String {
    let metadata_columns = table.domain.metadata_columns();

    let mut header: Vec<String> =
        Vec::with_capacity(2 + metadata_columns.len() + table.columns.len());
    header.push(ROW_NAME_HEADER.to_owned());
    header.extend(metadata_columns.iter().map(|&c| c.to_owned()));
    header.push(ZONES_SUM_HEADER.to_owned());
    header.extend(table.columns.iter().map(|label| label.as_str().to_owned()));

    let rows: Vec<Vec<String>> = table
        .rows()
        .map(|row| render_row(table.domain, metadata_columns, &row))
        .collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            rows.iter()
                .map(|cells| cells[i].chars().count())
                .chain(iter::once(header[i].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    for cells in &rows {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn render_row(domain: ZoneDomain, metadata_columns: &[&str], row: &TableRow<'_>) -> Vec<String> {
    let mut cells = Vec::with_capacity(2 + metadata_columns.len() + row.values().len());
    cells.push(row.name());

    match row {
        TableRow::Activity(activity) => cells.extend(metadata_columns.iter().map(|&column| {
            metadata_cell(domain, activity.activity_id, &activity.metadata, column)
        })),
        TableRow::Total(_) => cells.extend(metadata_columns.iter().map(|_| String::new())),
    }

    cells.push(format!("{:.0}", row.zones_sum()));
    cells.extend(row.values().iter().map(|value| format!("{value:.0}")));
    cells
}

fn metadata_cell(
    domain: ZoneDomain,
    activity_id: u64,
    metadata: &ZoneMetadata,
    column: &str,
) -> String {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    match column {
        "type" => domain.strava_type().to_owned(),
        "id" => activity_id.to_string(),
        "score" => opt(metadata.score),
        "resource_state" => opt(metadata.resource_state),
        "sensor_based" => opt(metadata.sensor_based),
        "points" => opt(metadata.points),
        "custom_zones" => opt(metadata.custom_zones),
        _ => String::new(),
    }
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, &width))| {
            if i == 0 {
                format!("{cell:<width$}")
            } else {
                format!("{cell:>width$}")
            }
        })
        .collect::<Vec<_>>()
        .join(COLUMN_GAP);
    let _ = writeln!(out, "{}", line.trim_end());
}
