// ABOUTME: Integration tests for zone report output formatting
// ABOUTME: Covers the fixed-width table, the proportion chart, pie-chart images, and JSON export
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Local, TimeZone, Utc};
use serde_json::Value;
use std::fs;
use strava_zones::formatters::{
    chart_title, pie_chart_file_name, render_proportions, render_table, to_json_string,
    write_pie_chart, write_pie_charts, write_report,
};
use strava_zones::models::{
    ActivitySummary, DateRange, ZoneBucket, ZoneDistribution, ZoneDomain, ZoneMetadata,
};
use strava_zones::report::{assemble_report, FetchedActivity, ReportOptions, ZoneReport};
use strava_zones::zones::{aggregate, normalize, summarize, AggregateTable};
use tempfile::TempDir;

fn heart_rate_table() -> AggregateTable {
    let first = ZoneDistribution::new(
        ZoneDomain::HeartRate,
        vec![ZoneBucket::new(-1.0, 114.0, 600.0), ZoneBucket::new(114.0, 153.0, 1800.0)],
    )
    .with_metadata(ZoneMetadata {
        score: Some(12.0),
        resource_state: Some(3),
        sensor_based: Some(true),
        points: Some(4),
        custom_zones: Some(false),
    });
    let second = ZoneDistribution::new(
        ZoneDomain::HeartRate,
        vec![ZoneBucket::new(-1.0, 114.0, 300.0), ZoneBucket::new(153.0, -1.0, 900.0)],
    );

    aggregate(
        ZoneDomain::HeartRate,
        vec![
            normalize(11, &first, ZoneDomain::HeartRate).unwrap(),
            normalize(22, &second, ZoneDomain::HeartRate).unwrap(),
        ],
    )
    .unwrap()
}

fn local_range() -> DateRange {
    let at = |m, d| {
        Local
            .with_ymd_and_hms(2024, m, d, 0, 0, 0)
            .earliest()
            .unwrap()
            .with_timezone(&Utc)
    };
    DateRange::new(at(1, 1), at(2, 1)).unwrap()
}

#[test]
fn test_table_layout() {
    let rendered = render_table(&heart_rate_table());
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines.len(), 4);

    let header: Vec<&str> = lines[0].split_whitespace().collect();
    assert_eq!(
        header,
        vec![
            "activity",
            "type",
            "score",
            "resource_state",
            "sensor_based",
            "id",
            "points",
            "custom_zones",
            "zones_sum",
            "114",
            "114",
            "-",
            "153",
            "153+",
        ]
    );

    let first: Vec<&str> = lines[1].split_whitespace().collect();
    assert_eq!(
        first,
        vec!["11", "heartrate", "12", "3", "true", "11", "4", "false", "2400", "600", "1800", "0"]
    );
}

#[test]
fn test_total_row_has_blank_metadata() {
    let rendered = render_table(&heart_rate_table());
    let total = rendered.lines().last().unwrap();
    let cells: Vec<&str> = total.split_whitespace().collect();
    assert_eq!(cells, vec!["Total", "3600", "900", "1800", "900"]);
}

#[test]
fn test_chart_title_uses_local_dates() {
    assert_eq!(
        chart_title(ZoneDomain::HeartRate, &local_range()),
        "Percentage in each Heartrate Zone for 01-01-2024 to 02-01-2024"
    );
    assert!(
        chart_title(ZoneDomain::Pace, &local_range()).starts_with("Percentage in each Pace Zone")
    );
}

#[test]
fn test_proportion_chart_lines() {
    let summary = summarize(&heart_rate_table()).unwrap();
    let chart = render_proportions(&summary, "Title");
    let lines: Vec<&str> = chart.lines().collect();

    assert_eq!(lines[0], "Title");
    assert_eq!(lines[1], "=====");
    assert_eq!(lines.len(), 2 + summary.labels.len());
    assert!(lines[3].starts_with("114 - 153"));
    assert!(lines[3].ends_with("50.0%"));
    assert!(lines[2].trim_end().ends_with("25.0%"));
}

fn sample_report() -> ZoneReport {
    let fetched = vec![FetchedActivity {
        activity: ActivitySummary::with_id(5),
        zones: vec![ZoneDistribution::new(
            ZoneDomain::Pace,
            vec![ZoneBucket::new(3.5, 4.0, 300.0), ZoneBucket::new(4.0, -1.0, 100.0)],
        )],
    }];
    let options = ReportOptions {
        domains: vec![ZoneDomain::Pace],
        ..ReportOptions::default()
    };
    assemble_report(local_range(), &fetched, &options).unwrap()
}

#[test]
fn test_json_export_round_trips_structure() {
    let json: Value = serde_json::from_str(&to_json_string(&sample_report()).unwrap()).unwrap();

    assert_eq!(json["activity_count"], 1);
    let pace = &json["domains"][0];
    assert_eq!(pace["domain"], "pace");
    assert_eq!(pace["table"]["columns"][0], "07:39-06:42");
    assert_eq!(pace["summary"]["percentages"][0], 75.0);
}

#[test]
fn test_write_report_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("report.json");

    write_report(&path, &sample_report()).unwrap();
    let written: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(written["domains"][0]["table"]["total"]["zones_sum"], 400.0);
}

fn two_domain_report() -> ZoneReport {
    let fetched = vec![FetchedActivity {
        activity: ActivitySummary::with_id(5),
        zones: vec![
            ZoneDistribution::new(
                ZoneDomain::HeartRate,
                vec![ZoneBucket::new(0.0, 153.0, 900.0), ZoneBucket::new(153.0, -1.0, 300.0)],
            ),
            ZoneDistribution::new(
                ZoneDomain::Pace,
                vec![ZoneBucket::new(3.5, 4.0, 300.0), ZoneBucket::new(4.0, -1.0, 100.0)],
            ),
        ],
    }];
    assemble_report(local_range(), &fetched, &ReportOptions::default()).unwrap()
}

#[test]
fn test_pie_chart_file_names() {
    assert_eq!(pie_chart_file_name(ZoneDomain::Pace), "pace_pie.svg");
    assert_eq!(pie_chart_file_name(ZoneDomain::HeartRate), "heart_rate_pie.svg");
}

#[test]
fn test_write_pie_chart_svg_carries_title_and_labels() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("hr.svg");
    let report = two_domain_report();
    let heart_rate = report.domain(ZoneDomain::HeartRate).unwrap();
    let title = chart_title(ZoneDomain::HeartRate, &report.range);

    write_pie_chart(&path, &heart_rate.summary, &title).unwrap();

    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains(&title));
    assert!(svg.contains("153+"));
}

#[test]
fn test_write_pie_charts_one_file_per_domain() {
    let dir = TempDir::new().unwrap();
    let chart_dir = dir.path().join("charts");
    let report = two_domain_report();

    let written = write_pie_charts(&chart_dir, &report).unwrap();

    let expected: Vec<_> = report
        .domains
        .iter()
        .map(|domain_report| chart_dir.join(pie_chart_file_name(domain_report.domain)))
        .collect();
    assert_eq!(written, expected);
    assert_eq!(written.len(), 2);
    for path in &written {
        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("<svg"));
    }
    let pace_svg = fs::read_to_string(chart_dir.join("pace_pie.svg")).unwrap();
    assert!(pace_svg.contains("Percentage in each Pace Zone"));
}
