// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for cron monitor registration.

use thiserror::Error;

/// Result type for monitor registration operations.
pub type Result<T> = std::result::Result<T, MonitorError>;

/// Errors that can occur while preparing monitor configurations.
///
/// All of these are recoverable: callers log them and degrade to
/// "this job is not monitored" rather than aborting.
#[derive(Debug, Error)]
pub enum MonitorError {
	#[error("invalid cron expression: {0}")]
	InvalidCronExpression(String),

	#[error("invalid timezone: {0}")]
	InvalidTimezone(String),
}
