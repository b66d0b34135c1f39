// ABOUTME: Integration tests for zone bucket classification
// ABOUTME: Covers heart-rate and pace labels, pace conversion, and rejected buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use strava_zones::errors::ZoneError;
use strava_zones::models::{ZoneBucket, ZoneDomain};
use strava_zones::zones::classifier::{format_minutes, format_pace, speed_to_pace_minutes};
use strava_zones::zones::{classify, ZoneLabel};

fn label(domain: ZoneDomain, min: f64, max: f64) -> String {
    classify(&ZoneBucket::new(min, max, 60.0), domain, 1)
        .unwrap()
        .label
        .as_str()
        .to_owned()
}

#[test]
fn test_heart_rate_closed_interval() {
    assert_eq!(label(ZoneDomain::HeartRate, 114.0, 153.0), "114 - 153");
    assert_eq!(label(ZoneDomain::HeartRate, 0.0, 114.0), "0 - 114");
}

#[test]
fn test_heart_rate_open_bounds() {
    assert_eq!(label(ZoneDomain::HeartRate, -1.0, 114.0), "114");
    assert_eq!(label(ZoneDomain::HeartRate, 150.0, -1.0), "150+");
}

#[test]
fn test_heart_rate_keeps_fractional_bounds() {
    assert_eq!(label(ZoneDomain::HeartRate, 114.5, 153.0), "114.5 - 153");
}

#[test]
fn test_pace_closed_interval_keeps_bucket_order() {
    assert_eq!(label(ZoneDomain::Pace, 3.5, 4.0), "07:39-06:42");
    assert_eq!(label(ZoneDomain::Pace, 2.5, 3.0), "10:43-08:56");
}

#[test]
fn test_pace_open_lower_bound() {
    assert_eq!(label(ZoneDomain::Pace, -1.0, 8.0), "> 03:21");
    assert_eq!(label(ZoneDomain::Pace, 0.0, 8.0), "> 03:21");
}

#[test]
fn test_pace_open_upper_bound() {
    assert_eq!(label(ZoneDomain::Pace, 4.5, -1.0), "< 05:57");
    assert_eq!(label(ZoneDomain::Pace, 5.0, 0.0), "< 05:21");
}

#[test]
fn test_pace_without_convertible_bound_is_degenerate() {
    let err = classify(&ZoneBucket::new(-1.0, 0.0, 30.0), ZoneDomain::Pace, 42).unwrap_err();
    assert!(matches!(
        err,
        ZoneError::DegenerateInterval {
            activity_id: 42,
            domain: ZoneDomain::Pace,
            ..
        }
    ));

    let err = classify(&ZoneBucket::new(-1.0, -1.0, 30.0), ZoneDomain::Pace, 42).unwrap_err();
    assert!(matches!(err, ZoneError::DegenerateInterval { .. }));

    let err = classify(&ZoneBucket::new(f64::NAN, 3.0, 30.0), ZoneDomain::Pace, 42).unwrap_err();
    assert!(matches!(err, ZoneError::DegenerateInterval { .. }));
}

#[test]
fn test_negative_duration_rejected() {
    let err = classify(&ZoneBucket::new(114.0, 153.0, -5.0), ZoneDomain::HeartRate, 7).unwrap_err();
    assert!(matches!(err, ZoneError::InvalidDuration { activity_id: 7, .. }));
    assert_eq!(err.activity_id(), Some(7));
}

#[test]
fn test_zero_duration_accepted() {
    let classified =
        classify(&ZoneBucket::new(114.0, 153.0, 0.0), ZoneDomain::HeartRate, 7).unwrap();
    assert_eq!(classified.label, ZoneLabel::from("114 - 153"));
    assert!(classified.duration.abs() < f64::EPSILON);
}

#[test]
fn test_classification_is_deterministic() {
    let bucket = ZoneBucket::new(3.3, 4.5, 120.0);
    let first = classify(&bucket, ZoneDomain::Pace, 1).unwrap();
    let second = classify(&bucket, ZoneDomain::Pace, 2).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.label.as_str(), "08:07-05:57");
}

#[test]
fn test_pace_conversion() {
    let minutes = speed_to_pace_minutes(8.0).unwrap();
    assert!((minutes - 3.352_791_666).abs() < 1e-6);
    assert_eq!(format_minutes(minutes), "03:21");
    assert_eq!(format_pace(2.0).as_deref(), Some("13:24"));
    assert_eq!(speed_to_pace_minutes(0.0), None);
    assert_eq!(speed_to_pace_minutes(-1.0), None);
    assert_eq!(speed_to_pace_minutes(f64::INFINITY), None);
}
