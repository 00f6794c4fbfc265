// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Monitoring client boundary.

use treadle_core::{CheckInPhase, JobMetadata, MonitorConfig};

/// Client for the monitoring backend that receives check-in signals.
///
/// The wire protocol is owned by the implementor; this subsystem only
/// prepares slugs and monitor configurations and reports run phases.
pub trait MonitorClient: Send + Sync {
	/// Whether the monitoring backend has been initialized.
	///
	/// Registration is a silent no-op until this returns true.
	fn initialized(&self) -> bool;

	/// Emit one check-in signal for a monitored job run.
	fn emit_check_in(
		&self,
		slug: &str,
		config: Option<&MonitorConfig>,
		phase: CheckInPhase,
		metadata: &JobMetadata,
	);
}

/// A monitoring client that reports itself uninitialized and drops all
/// check-ins. Lets hosts wire the subsystem unconditionally and turn
/// monitoring on later.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMonitorClient;

impl MonitorClient for NoopMonitorClient {
	fn initialized(&self) -> bool {
		false
	}

	fn emit_check_in(
		&self,
		_slug: &str,
		_config: Option<&MonitorConfig>,
		_phase: CheckInPhase,
		_metadata: &JobMetadata,
	) {
	}
}
