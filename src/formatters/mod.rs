// ABOUTME: Output formatters for zone reports
// ABOUTME: Fixed-width tables, textual proportion charts, pie-chart images, and JSON export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Textual proportion charts
pub mod chart;
/// JSON export
pub mod json;
/// Pie-chart image export
pub mod pie;
/// Fixed-width tables
pub mod table;

pub use chart::{chart_title, render_proportions};
pub use json::{to_json_string, write_report};
pub use pie::{pie_chart_file_name, write_pie_chart, write_pie_charts};
pub use table::render_table;
