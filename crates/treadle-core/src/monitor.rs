// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Monitor configuration and schedule types.

use serde::{Deserialize, Serialize};

/// A raw schedule entry as configured for a scheduled-job framework.
///
/// Both fields are optional: hosts ship configuration with deliberately
/// incomplete stub entries, and those are skipped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSpec {
	/// Job class name, resolved at registration time: "DailyCleanupJob"
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub class: Option<String>,
	/// Cron expression, optionally carrying a trailing timezone:
	/// "0 * * * * Europe/Stockholm"
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cron: Option<String>,
}

/// A cron expression split from its optional trailing timezone token.
///
/// Discarded once a [`MonitorConfig`] has been built from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSchedule {
	/// Five space-separated cron fields, or the original input verbatim
	/// when no timezone suffix could be split off.
	pub cron_fields: String,
	pub timezone: Option<String>,
}

/// Validated monitor configuration handed to the monitoring backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorConfig {
	/// Five space-separated cron fields: "0 * * * *"
	pub cron_fields: String,
	/// IANA zone name or GMT/UTC offset: "Europe/Stockholm", "GMT-5"
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub timezone: Option<String>,
}

/// Outcome of registering monitoring for one schedule entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationOutcome {
	/// Registration name of the entry in the schedule map.
	pub name: String,
	pub succeeded: bool,
	/// Display name of the job class, when registration succeeded.
	pub result_label: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn schedule_spec_deserializes_partial_entries() {
		let spec: ScheduleSpec = serde_json::from_str(r#"{"cron": "0 * * * *"}"#).unwrap();
		assert_eq!(spec.class, None);
		assert_eq!(spec.cron.as_deref(), Some("0 * * * *"));

		let spec: ScheduleSpec = serde_json::from_str("{}").unwrap();
		assert_eq!(spec, ScheduleSpec::default());
	}

	#[test]
	fn monitor_config_roundtrip() {
		let config = MonitorConfig {
			cron_fields: "0 * * * *".to_string(),
			timezone: Some("Europe/Stockholm".to_string()),
		};
		let json = serde_json::to_string(&config).unwrap();
		let parsed: MonitorConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(config, parsed);
	}

	#[test]
	fn monitor_config_omits_absent_timezone() {
		let config = MonitorConfig {
			cron_fields: "0 * * * *".to_string(),
			timezone: None,
		};
		let json = serde_json::to_string(&config).unwrap();
		assert!(!json.contains("timezone"));
	}

	#[test]
	fn registration_outcome_roundtrip() {
		let outcome = RegistrationOutcome {
			name: "cleanup".to_string(),
			succeeded: true,
			result_label: Some("DailyCleanupJob".to_string()),
		};
		let json = serde_json::to_string(&outcome).unwrap();
		let parsed: RegistrationOutcome = serde_json::from_str(&json).unwrap();
		assert_eq!(outcome, parsed);
	}
}
