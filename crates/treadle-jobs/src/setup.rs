// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! One-time registration of cron monitoring across scheduled jobs.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use tracing::{debug, info, warn};

use treadle_core::{RegistrationOutcome, ScheduleSpec};

use crate::client::MonitorClient;
use crate::hooks::HostHooks;
use crate::monitor::{monitor_config_from_cron, MonitorCheckIns};
use crate::registry::{JobClass, JobRegistry};
use crate::settings::CronMonitorsConfig;
use crate::slug::monitor_slug;

/// Progress of the once-per-process registration pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupState {
	NotStarted,
	InProgress,
	Completed,
}

impl fmt::Display for SetupState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::NotStarted => write!(f, "not_started"),
			Self::InProgress => write!(f, "in_progress"),
			Self::Completed => write!(f, "completed"),
		}
	}
}

/// Orchestrates monitor registration for a host's schedule map.
///
/// The pass runs at most once per process lifetime: the state transition
/// `NotStarted -> InProgress` is checked and set under a lock, so
/// concurrent startup paths cannot run the pass twice. [`MonitorSetup::reset`]
/// re-arms it for test isolation.
pub struct MonitorSetup {
	registry: Arc<dyn JobRegistry>,
	client: Arc<dyn MonitorClient>,
	hooks: Arc<dyn HostHooks>,
	config: CronMonitorsConfig,
	state: Mutex<SetupState>,
}

impl MonitorSetup {
	pub fn new(
		registry: Arc<dyn JobRegistry>,
		client: Arc<dyn MonitorClient>,
		hooks: Arc<dyn HostHooks>,
		config: CronMonitorsConfig,
	) -> Self {
		Self {
			registry,
			client,
			hooks,
			config,
			state: Mutex::new(SetupState::NotStarted),
		}
	}

	pub fn state(&self) -> SetupState {
		*self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Re-arm the orchestrator. Test/debug use only.
	pub fn reset(&self) {
		*self.state.lock().unwrap_or_else(PoisonError::into_inner) = SetupState::NotStarted;
	}

	/// Run the registration pass over the configured schedule map.
	///
	/// A no-op unless the monitoring client is initialized, cron monitors
	/// are enabled, and the schedule map is non-empty; being inert when
	/// monitoring is unconfigured is the intended behavior, not an error.
	/// Also a no-op if the pass already ran this process lifetime.
	pub fn setup_scheduled_jobs(&self) -> Vec<RegistrationOutcome> {
		if !self.client.initialized()
			|| !self.config.enable_cron_monitors
			|| self.config.cron.is_empty()
		{
			return Vec::new();
		}

		{
			let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
			if *state != SetupState::NotStarted {
				return Vec::new();
			}
			*state = SetupState::InProgress;
		}

		let outcomes: Vec<RegistrationOutcome> = self
			.config
			.cron
			.iter()
			.filter_map(|(name, spec)| self.setup_job(name, spec))
			.collect();

		*self.state.lock().unwrap_or_else(PoisonError::into_inner) = SetupState::Completed;

		let labels: Vec<&str> = outcomes
			.iter()
			.filter(|o| o.succeeded)
			.filter_map(|o| o.result_label.as_deref())
			.collect();
		info!(
			"cron monitoring set up for {} scheduled jobs: {}",
			labels.len(),
			labels.join(", ")
		);

		outcomes
	}

	/// Register monitoring for a single schedule entry.
	///
	/// Entries missing a class or cron expression are deliberately
	/// incomplete stubs and skip silently. A class name the registry
	/// cannot resolve is logged and skipped; the pass continues with the
	/// remaining entries.
	pub fn setup_job(&self, name: &str, spec: &ScheduleSpec) -> Option<RegistrationOutcome> {
		let class = spec.class.as_deref()?;
		let cron = spec.cron.as_deref()?;

		let Some(job) = self.registry.resolve(class) else {
			warn!(entry = %name, "could not find job class '{}'", class);
			return Some(RegistrationOutcome {
				name: name.to_string(),
				succeeded: false,
				result_label: None,
			});
		};

		let slug = monitor_slug(class);
		let config = monitor_config_from_cron(Some(cron), None);
		let label = job.display_name().to_string();

		// Attachment is late-bound: job classes may still be loading while
		// the host boots, so the capability lands after initialization.
		let checkins = MonitorCheckIns::new(slug.clone(), config);
		self.hooks.after_initialize(Box::new(move || {
			job.attach_monitor(checkins);
		}));

		debug!(entry = %name, slug = %slug, "registered cron monitor");

		Some(RegistrationOutcome {
			name: name.to_string(),
			succeeded: true,
			result_label: Some(label),
		})
	}

	/// Attach monitoring to an already-resolved job class, bypassing the
	/// schedule map.
	///
	/// The slug defaults to one derived from the job's display name; the
	/// cron expression defaults to the job's declared schedule. No
	/// enablement gating applies.
	pub fn add_monitoring_to_job(
		&self,
		job: &Arc<dyn JobClass>,
		slug: Option<&str>,
		cron_expression: Option<&str>,
	) {
		let slug = slug
			.map(str::to_string)
			.unwrap_or_else(|| monitor_slug(job.display_name()));
		let cron = cron_expression
			.map(str::to_string)
			.or_else(|| job.declared_schedule());
		let config = monitor_config_from_cron(cron.as_deref(), None);

		job.attach_monitor(MonitorCheckIns::new(slug.clone(), config));
		info!(job_class = %job.display_name(), slug = %slug, "added cron monitoring");
	}
}
