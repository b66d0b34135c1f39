// ABOUTME: Date-range entry for the report window in MM-DD-YYYY form
// ABOUTME: Parses dates as local midnight and prompts on stdin when flags are absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use std::io::{BufRead, Write};
use zone_core::errors::{AppError, AppResult};
use zone_core::models::DateRange;

/// Accepted input format
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Parse `MM-DD-YYYY` as midnight in the local timezone
///
/// # Errors
///
/// `invalid_input` for malformed dates or a midnight that does not exist locally.
pub fn parse_date(input: &str) -> AppResult<DateTime<Utc>> {
    let trimmed = input.trim();
    let date = NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|e| {
        AppError::invalid_input(format!("'{trimmed}' is not a MM-DD-YYYY date: {e}"))
    })?;

    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| AppError::invalid_input(format!("'{trimmed}' has no midnight")))?;

    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| {
            AppError::invalid_input(format!("'{trimmed}' midnight does not exist locally"))
        })
}

/// Build the report window from two `MM-DD-YYYY` strings
///
/// # Errors
///
/// `invalid_input` if either date is malformed or `after` is later than `before`.
pub fn parse_date_range(after: &str, before: &str) -> AppResult<DateRange> {
    DateRange::new(parse_date(after)?, parse_date(before)?)
}

/// Write `prompt` and read one trimmed line
///
/// # Errors
///
/// Returns an I/O error, or `invalid_input` on end of input.
pub fn prompt_line<R, W>(reader: &mut R, writer: &mut W, prompt: &str) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(writer, "{prompt}: ")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AppError::invalid_input(format!(
            "no input received for '{prompt}'"
        )));
    }
    Ok(line.trim().to_owned())
}

/// Ask for the before date, then the after date
///
/// # Errors
///
/// Propagates prompt and parse failures.
pub fn prompt_date_range<R, W>(reader: &mut R, writer: &mut W) -> AppResult<DateRange>
where
    R: BufRead,
    W: Write,
{
    let before = prompt_line(reader, writer, "Enter the before date in MM-DD-YYYY")?;
    let after = prompt_line(reader, writer, "Enter the after date in MM-DD-YYYY")?;
    parse_date_range(&after, &before)
}
