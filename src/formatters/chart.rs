// ABOUTME: Textual proportion chart for a zone summary
// ABOUTME: One bar per zone label with its share rendered to one decimal place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Local;
use std::fmt::Write as _;
use zone_core::models::{DateRange, ZoneDomain};

use crate::date_input::DATE_FORMAT;
use crate::zones::ZoneSummary;

/// Bar width for a 100% share
pub const BAR_WIDTH: usize = 40;

const BAR_CHAR: char = '#';

/// "Percentage in each Pace Zone for 01-01-2024 to 02-01-2024"
#[must_use]
pub fn chart_title(domain: ZoneDomain, range: &DateRange) -> String {
    format!(
        "Percentage in each {} Zone for {} to {}",
        domain.display_name(),
        range.after.with_timezone(&Local).format(DATE_FORMAT),
        range.before.with_timezone(&Local).format(DATE_FORMAT),
    )
}

/// Render `summary` as a titled bar chart
#[must_use]
pub fn render_proportions(summary: &ZoneSummary, title: &str) -> String {
    let label_width = summary
        .labels
        .iter()
        .map(|label| label.as_str().chars().count())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));

    for (label, _, percentage) in summary.entries() {
        let bar = BAR_CHAR.to_string().repeat(bar_length(percentage));
        let _ = writeln!(
            out,
            "{label:<label_width$}  {bar:<bar_width$}  {percentage:5.1}%",
            label = label.as_str(),
            bar_width = BAR_WIDTH,
        );
    }
    out
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bar_length(percentage: f64) -> usize {
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0;
    }
    let scaled = (percentage / 100.0 * BAR_WIDTH as f64).round();
    (scaled as usize).min(BAR_WIDTH)
}
