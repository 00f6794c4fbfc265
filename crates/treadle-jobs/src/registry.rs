// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Job registry and job class handles.

use std::collections::HashMap;
use std::sync::Arc;

use crate::monitor::MonitorCheckIns;

/// Resolves job class names to live job definitions.
///
/// Resolution is by string name because schedule maps are plain
/// configuration; a miss is a normal outcome, not an error.
pub trait JobRegistry: Send + Sync {
	fn resolve(&self, name: &str) -> Option<Arc<dyn JobClass>>;
}

/// An externally owned job definition that can carry a check-in capability.
///
/// The definition's lifecycle belongs to the host's execution framework;
/// this subsystem only attaches the capability and expects the framework
/// to invoke it around each run.
pub trait JobClass: Send + Sync {
	/// Human-readable class name: "DailyCleanupJob".
	fn display_name(&self) -> &str;

	/// Cron expression declared on the job itself, if any.
	fn declared_schedule(&self) -> Option<String> {
		None
	}

	/// Install the check-in capability for subsequent runs.
	fn attach_monitor(&self, checkins: MonitorCheckIns);
}

/// In-memory registry backed by a map, for hosts that register their job
/// classes up front.
#[derive(Default)]
pub struct StaticJobRegistry {
	jobs: HashMap<String, Arc<dyn JobClass>>,
}

impl StaticJobRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, job: Arc<dyn JobClass>) {
		self.jobs.insert(name.into(), job);
	}
}

impl JobRegistry for StaticJobRegistry {
	fn resolve(&self, name: &str) -> Option<Arc<dyn JobClass>> {
		self.jobs.get(name).cloned()
	}
}
