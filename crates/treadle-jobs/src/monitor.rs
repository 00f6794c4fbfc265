// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Monitor configuration building and the check-in capability.

use tracing::warn;

use treadle_core::{CheckInPhase, JobMetadata, MonitorConfig};

use crate::client::MonitorClient;
use crate::schedule::{parse_cron_with_timezone, validate_cron_expression};

/// Build a monitor configuration from a raw cron expression.
///
/// An absent or empty expression is a valid "no monitor" signal and
/// returns `None` without logging. An expression whose cron grammar does
/// not validate also returns `None`, after one warning that carries the
/// original input. An explicit `timezone` wins over one embedded in the
/// expression.
pub fn monitor_config_from_cron(
	cron_expression: Option<&str>,
	timezone: Option<&str>,
) -> Option<MonitorConfig> {
	let raw = match cron_expression {
		Some(expression) if !expression.trim().is_empty() => expression,
		_ => return None,
	};

	let parsed = parse_cron_with_timezone(raw);
	if let Err(e) = validate_cron_expression(&parsed.cron_fields) {
		warn!(cron = %raw, error = %e, "skipping cron monitor for unparseable schedule");
		return None;
	}

	let timezone = timezone.map(str::to_string).or(parsed.timezone);
	Some(MonitorConfig {
		cron_fields: parsed.cron_fields,
		timezone,
	})
}

/// Check-in capability attached to a job class.
///
/// Attachment happens once at registration; the host's execution
/// framework then calls [`MonitorCheckIns::around_run`] for each run of
/// the job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorCheckIns {
	pub slug: String,
	pub config: Option<MonitorConfig>,
}

impl MonitorCheckIns {
	pub fn new(slug: impl Into<String>, config: Option<MonitorConfig>) -> Self {
		Self {
			slug: slug.into(),
			config,
		}
	}

	/// Wrap one job run in check-in signals.
	///
	/// Emits `Start` before running `f`, then `Success` or `Failure`
	/// depending on the outcome. The run's result is returned untouched.
	pub fn around_run<F, T, E>(
		&self,
		client: &dyn MonitorClient,
		metadata: &JobMetadata,
		f: F,
	) -> Result<T, E>
	where
		F: FnOnce() -> Result<T, E>,
	{
		client.emit_check_in(&self.slug, self.config.as_ref(), CheckInPhase::Start, metadata);

		match f() {
			Ok(value) => {
				client.emit_check_in(
					&self.slug,
					self.config.as_ref(),
					CheckInPhase::Success,
					metadata,
				);
				Ok(value)
			}
			Err(e) => {
				client.emit_check_in(
					&self.slug,
					self.config.as_ref(),
					CheckInPhase::Failure,
					metadata,
				);
				Err(e)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;

	/// Records every emitted check-in for assertions.
	#[derive(Default)]
	struct RecordingClient {
		check_ins: Mutex<Vec<(String, CheckInPhase)>>,
	}

	impl RecordingClient {
		fn phases(&self) -> Vec<(String, CheckInPhase)> {
			self.check_ins.lock().unwrap().clone()
		}
	}

	impl MonitorClient for RecordingClient {
		fn initialized(&self) -> bool {
			true
		}

		fn emit_check_in(
			&self,
			slug: &str,
			_config: Option<&MonitorConfig>,
			phase: CheckInPhase,
			_metadata: &JobMetadata,
		) {
			self.check_ins.lock().unwrap().push((slug.to_string(), phase));
		}
	}

	#[test]
	fn empty_expression_yields_no_config() {
		assert_eq!(monitor_config_from_cron(Some(""), None), None);
		assert_eq!(monitor_config_from_cron(Some("   "), None), None);
	}

	#[test]
	fn absent_expression_yields_no_config() {
		assert_eq!(monitor_config_from_cron(None, None), None);
	}

	#[test]
	fn valid_expression_builds_config() {
		let config = monitor_config_from_cron(Some("0 * * * *"), None).unwrap();
		assert_eq!(config.cron_fields, "0 * * * *");
		assert_eq!(config.timezone, None);
	}

	#[test]
	fn embedded_timezone_is_extracted() {
		let config = monitor_config_from_cron(Some("0 * * * * Europe/Stockholm"), None).unwrap();
		assert_eq!(config.cron_fields, "0 * * * *");
		assert_eq!(config.timezone.as_deref(), Some("Europe/Stockholm"));
	}

	#[test]
	fn explicit_timezone_wins_over_embedded() {
		let config =
			monitor_config_from_cron(Some("0 * * * * Europe/Stockholm"), Some("UTC")).unwrap();
		assert_eq!(config.timezone.as_deref(), Some("UTC"));
	}

	#[test]
	fn unparseable_expression_yields_no_config() {
		assert_eq!(monitor_config_from_cron(Some("not a cron"), None), None);
		assert_eq!(monitor_config_from_cron(Some("60 0 * * *"), None), None);
	}

	#[test]
	fn malformed_timezone_suffix_fails_grammar_validation() {
		// The suffix fails the shape check, so the whole original string is
		// handed to the grammar validator and rejected there.
		assert_eq!(
			monitor_config_from_cron(Some("0 * * * * invalid@timezone"), None),
			None
		);
	}

	#[test]
	fn around_run_emits_start_then_success() {
		let client = RecordingClient::default();
		let metadata = JobMetadata::new("TestJob");
		let checkins = MonitorCheckIns::new("test", None);

		let result: Result<i32, &str> = checkins.around_run(&client, &metadata, || Ok(42));

		assert_eq!(result, Ok(42));
		assert_eq!(
			client.phases(),
			vec![
				("test".to_string(), CheckInPhase::Start),
				("test".to_string(), CheckInPhase::Success),
			]
		);
	}

	#[test]
	fn around_run_emits_failure_and_propagates_error() {
		let client = RecordingClient::default();
		let metadata = JobMetadata::new("TestJob");
		let checkins = MonitorCheckIns::new("test", None);

		let result: Result<i32, &str> = checkins.around_run(&client, &metadata, || Err("boom"));

		assert_eq!(result, Err("boom"));
		assert_eq!(
			client.phases(),
			vec![
				("test".to_string(), CheckInPhase::Start),
				("test".to_string(), CheckInPhase::Failure),
			]
		);
	}
}
