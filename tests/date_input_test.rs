// ABOUTME: Integration tests for MM-DD-YYYY date-range entry
// ABOUTME: Covers local-midnight parsing, ordering checks, and stdin prompting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{DateTime, Local, TimeZone, Utc};
use std::io::Cursor;
use strava_zones::date_input::{parse_date, parse_date_range, prompt_date_range, prompt_line};
use strava_zones::errors::ErrorCode;

fn local_midnight(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Local
        .with_ymd_and_hms(year, month, day, 0, 0, 0)
        .earliest()
        .unwrap()
        .with_timezone(&Utc)
}

#[test]
fn test_parse_date_is_local_midnight() {
    assert_eq!(parse_date("01-15-2024").unwrap(), local_midnight(2024, 1, 15));
    assert_eq!(parse_date("  12-31-2023\n").unwrap(), local_midnight(2023, 12, 31));
}

#[test]
fn test_parse_date_rejects_malformed_input() {
    for input in ["2024-01-15", "13-01-2024", "02-30-2024", "", "yesterday"] {
        let err = parse_date(input).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput, "input {input:?}");
    }
}

#[test]
fn test_range_requires_after_not_later_than_before() {
    let range = parse_date_range("01-01-2024", "02-01-2024").unwrap();
    assert!(range.after < range.before);

    let same_day = parse_date_range("01-01-2024", "01-01-2024").unwrap();
    assert_eq!(same_day.after, same_day.before);

    let err = parse_date_range("02-01-2024", "01-01-2024").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_prompt_asks_before_then_after() {
    let mut input = Cursor::new("02-01-2024\n01-01-2024\n");
    let mut output = Vec::new();

    let range = prompt_date_range(&mut input, &mut output).unwrap();
    assert_eq!(range.before, local_midnight(2024, 2, 1));
    assert_eq!(range.after, local_midnight(2024, 1, 1));

    let prompts = String::from_utf8(output).unwrap();
    let before_at = prompts.find("before date").unwrap();
    let after_at = prompts.find("after date").unwrap();
    assert!(before_at < after_at);
}

#[test]
fn test_prompt_fails_on_closed_input() {
    let mut input = Cursor::new("");
    let mut output = Vec::new();
    let err = prompt_line(&mut input, &mut output, "Enter a date").unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
