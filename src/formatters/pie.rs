// ABOUTME: Pie-chart image export of zone summaries
// ABOUTME: Renders one SVG per domain with plotters, titled like the text chart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use plotters::element::Pie;
use plotters::prelude::*;
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use zone_core::errors::{AppError, AppResult};
use zone_core::models::ZoneDomain;

use super::chart::chart_title;
use crate::report::ZoneReport;
use crate::zones::{ZoneLabel, ZoneSummary};

/// Image size in pixels
pub const PIE_CHART_SIZE: (u32, u32) = (800, 800);

// Categorical palette, cycled when a domain has more zones than colors
const SLICE_COLORS: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// File name of the pie chart for `domain`
#[must_use]
pub const fn pie_chart_file_name(domain: ZoneDomain) -> &'static str {
    match domain {
        ZoneDomain::Pace => "pace_pie.svg",
        ZoneDomain::HeartRate => "heart_rate_pie.svg",
    }
}

/// Draw `summary` as a labelled pie chart with percentage annotations
///
/// # Errors
///
/// Returns an internal error if the image cannot be drawn or written.
pub fn write_pie_chart(path: &Path, summary: &ZoneSummary, title: &str) -> AppResult<()> {
    let root = SVGBackend::new(path, PIE_CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(draw_error)?;
    let area = root
        .titled(title, ("sans-serif", 24).into_font().color(&BLACK))
        .map_err(draw_error)?;

    let (width, height) = area.dim_in_pixel();
    let center = (
        i32::try_from(width / 2).unwrap_or(0),
        i32::try_from(height / 2).unwrap_or(0),
    );
    let radius = f64::from(width.min(height)) * 0.35;

    let labels: Vec<&str> = summary.labels.iter().map(ZoneLabel::as_str).collect();
    let colors: Vec<RGBColor> = (0..labels.len())
        .map(|i| SLICE_COLORS[i % SLICE_COLORS.len()])
        .collect();

    let mut pie = Pie::new(&center, &radius, &summary.percentages, &colors, &labels);
    pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 14).into_font().color(&WHITE));
    area.draw(&pie).map_err(draw_error)?;

    root.present().map_err(draw_error)?;
    Ok(())
}

/// Write one pie chart per domain of `report` into `dir`
///
/// Creates `dir` if needed and returns the written paths in report order.
///
/// # Errors
///
/// I/O failure creating `dir`, or a drawing failure.
pub fn write_pie_charts(dir: &Path, report: &ZoneReport) -> AppResult<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(report.domains.len());
    for domain_report in &report.domains {
        let path = dir.join(pie_chart_file_name(domain_report.domain));
        let title = chart_title(domain_report.domain, &report.range);
        write_pie_chart(&path, &domain_report.summary, &title)?;
        info!(path = %path.display(), zone.domain = %domain_report.domain, "Wrote pie chart");
        written.push(path);
    }
    Ok(written)
}

fn draw_error(error: impl Display) -> AppError {
    AppError::internal(format!("Failed to draw pie chart: {error}"))
}
