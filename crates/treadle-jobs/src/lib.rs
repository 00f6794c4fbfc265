// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Cron monitor registration for scheduled-job frameworks.
//!
//! This crate wires check-in based cron monitoring onto a host's
//! scheduled jobs. Given a schedule map (registration name to job class
//! and cron expression), it derives a monitor slug per job, builds a
//! monitor configuration from the cron expression (which may carry a
//! trailing timezone), and attaches a check-in capability to each
//! resolvable job class — once per process lifetime.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use treadle_jobs::{CronMonitorsConfig, InlineHooks, MonitorSetup};
//!
//! let setup = MonitorSetup::new(registry, client, Arc::new(InlineHooks), config);
//! let outcomes = setup.setup_scheduled_jobs();
//! ```

pub mod client;
pub mod hooks;
pub mod monitor;
pub mod registry;
pub mod schedule;
pub mod settings;
pub mod setup;
pub mod slug;

pub use client::{MonitorClient, NoopMonitorClient};
pub use hooks::{HostHooks, InlineHooks, QueuedHooks};
pub use monitor::{monitor_config_from_cron, MonitorCheckIns};
pub use registry::{JobClass, JobRegistry, StaticJobRegistry};
pub use schedule::{parse_cron_with_timezone, validate_cron_expression, validate_timezone};
pub use settings::{CronMonitorsConfig, CronMonitorsConfigLayer};
pub use setup::{MonitorSetup, SetupState};
pub use slug::monitor_slug;

// Re-export core types for convenience
pub use treadle_core::{
	CheckInPhase, JobMetadata, MonitorConfig, MonitorError, ParsedSchedule, RegistrationOutcome,
	ScheduleSpec,
};
