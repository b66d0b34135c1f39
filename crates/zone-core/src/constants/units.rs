// ABOUTME: Unit conversion constants for distance and time
// ABOUTME: Provides named constants to eliminate magic numbers in pace conversion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Meters per statute mile (as used by the pace labels)
pub const METERS_PER_MILE: f64 = 1609.34;

/// Seconds per hour
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Minutes per hour
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Multiplier turning meters/second into miles/hour
pub const MPS_TO_MPH: f64 = SECONDS_PER_HOUR / METERS_PER_MILE;
