// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron monitors configuration section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use treadle_core::ScheduleSpec;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CronMonitorsConfigLayer {
	pub enable_cron_monitors: Option<bool>,
	pub cron: Option<BTreeMap<String, ScheduleSpec>>,
}

impl CronMonitorsConfigLayer {
	pub fn merge(&mut self, other: Self) {
		if other.enable_cron_monitors.is_some() {
			self.enable_cron_monitors = other.enable_cron_monitors;
		}
		if other.cron.is_some() {
			self.cron = other.cron;
		}
	}

	pub fn finalize(self) -> CronMonitorsConfig {
		CronMonitorsConfig {
			enable_cron_monitors: self.enable_cron_monitors.unwrap_or(true),
			cron: self.cron.unwrap_or_default(),
		}
	}
}

/// Resolved cron monitors configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CronMonitorsConfig {
	/// Master switch; when false, registration is a silent no-op.
	pub enable_cron_monitors: bool,
	/// Schedule map: registration name to job class and cron expression.
	pub cron: BTreeMap<String, ScheduleSpec>,
}

impl Default for CronMonitorsConfig {
	fn default() -> Self {
		Self {
			enable_cron_monitors: true,
			cron: BTreeMap::new(),
		}
	}
}
