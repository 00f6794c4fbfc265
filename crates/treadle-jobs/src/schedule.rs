// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Schedule parsing and cron expression validation.
//!
//! Schedule strings configured for job frameworks may carry a free-form
//! timezone token after the five cron fields ("0 * * * * Europe/Stockholm").
//! [`parse_cron_with_timezone`] splits the two apart; the split is only
//! accepted when the trailing token looks like a timezone, otherwise the
//! original string is preserved verbatim so nothing is silently dropped.

use std::str::FromStr;
use std::sync::LazyLock;

use cron::Schedule;
use regex::Regex;

use treadle_core::{MonitorError, ParsedSchedule, Result};

/// IANA-style zone name: one or more slash-separated segments of letters
/// and underscores ("UTC", "America/New_York", "America/Argentina/Buenos_Aires").
static NAMED_ZONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[A-Za-z_]+(?:/[A-Za-z_]+)*$").unwrap());

/// Fixed-offset zone: GMT or UTC with a signed one- or two-digit offset
/// ("GMT-5", "UTC+12").
static OFFSET_ZONE_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^(?:GMT|UTC)[+-]\d{1,2}$").unwrap());

/// Split a raw schedule string into its cron fields and an optional
/// trailing timezone.
///
/// Strings with five or fewer whitespace-separated tokens are returned
/// verbatim with no timezone. For longer strings, everything after the
/// fifth token is treated as a candidate timezone; if it fails the shape
/// check the whole original string is kept as the cron fields so the
/// malformed suffix stays visible to downstream validation.
pub fn parse_cron_with_timezone(raw: &str) -> ParsedSchedule {
	let tokens: Vec<&str> = raw.split_whitespace().collect();
	if tokens.len() <= 5 {
		return ParsedSchedule {
			cron_fields: raw.to_string(),
			timezone: None,
		};
	}

	let candidate = tokens[5..].join(" ");
	if validate_timezone(&candidate).is_ok() {
		ParsedSchedule {
			cron_fields: tokens[..5].join(" "),
			timezone: Some(candidate),
		}
	} else {
		ParsedSchedule {
			cron_fields: raw.to_string(),
			timezone: None,
		}
	}
}

/// Validate a timezone token against the shapes accepted in schedule
/// suffixes: an IANA-style zone name or a GMT/UTC numeric offset.
pub fn validate_timezone(timezone: &str) -> Result<()> {
	if NAMED_ZONE_REGEX.is_match(timezone) || OFFSET_ZONE_REGEX.is_match(timezone) {
		Ok(())
	} else {
		Err(MonitorError::InvalidTimezone(timezone.to_string()))
	}
}

/// Convert a standard 5-field Unix cron expression to the 7-field format
/// expected by the `cron` crate.
///
/// 5-field format: minute hour day-of-month month day-of-week
/// 7-field format: second minute hour day-of-month month day-of-week year
///
/// We add "0" for seconds (run at :00 of each minute) and "*" for year (any year).
fn convert_to_cron_crate_format(expression: &str) -> String {
	let field_count = expression.split_whitespace().count();
	if field_count >= 6 {
		// Already in extended format, use as-is
		expression.to_string()
	} else if field_count == 5 {
		format!("0 {} *", expression)
	} else {
		// Invalid format, return as-is and let the parser error
		expression.to_string()
	}
}

/// Validate a 5-field cron expression without computing occurrences.
pub fn validate_cron_expression(expression: &str) -> Result<()> {
	let cron_expr = convert_to_cron_crate_format(expression);
	Schedule::from_str(&cron_expr)
		.map_err(|e| MonitorError::InvalidCronExpression(e.to_string()))?;
	Ok(())
}
