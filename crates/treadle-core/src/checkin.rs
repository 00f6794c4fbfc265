// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Check-in phases and per-run job metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Phase of a monitored job run reported to the monitoring backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckInPhase {
	/// Job run started.
	Start,
	/// Job run completed successfully.
	Success,
	/// Job run raised an error.
	Failure,
}

impl fmt::Display for CheckInPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Start => write!(f, "start"),
			Self::Success => write!(f, "success"),
			Self::Failure => write!(f, "failure"),
		}
	}
}

impl FromStr for CheckInPhase {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"start" => Ok(Self::Start),
			"success" => Ok(Self::Success),
			"failure" => Ok(Self::Failure),
			_ => Err(format!("unknown check-in phase: {}", s)),
		}
	}
}

/// Execution metadata a job framework exposes for one run of a job.
///
/// The monitoring backend uses this to tag check-in events. Everything
/// except the class name is optional: frameworks differ in what they
/// expose, and a missing attribute is never an error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobMetadata {
	/// Job class display name: "DailyCleanupJob"
	pub job_class: String,
	pub queue_name: Option<String>,
	/// Number of times this job has been executed (including the current run).
	pub executions: u32,
	pub enqueued_at: Option<DateTime<Utc>>,
	pub priority: Option<i32>,
	/// Execution id assigned by the job backend.
	pub provider_job_id: Option<Uuid>,
}

impl JobMetadata {
	pub fn new(job_class: impl Into<String>) -> Self {
		Self {
			job_class: job_class.into(),
			queue_name: None,
			executions: 0,
			enqueued_at: None,
			priority: None,
			provider_job_id: None,
		}
	}

	/// Nested context object for event enrichment.
	///
	/// Only attributes the framework actually supplied are included.
	pub fn context_value(&self) -> Value {
		let mut context = serde_json::Map::new();
		if let Some(queue) = &self.queue_name {
			context.insert("queue_name".to_string(), json!(queue));
		}
		context.insert("executions".to_string(), json!(self.executions));
		if let Some(enqueued_at) = &self.enqueued_at {
			context.insert("enqueued_at".to_string(), json!(enqueued_at.to_rfc3339()));
		}
		if let Some(priority) = self.priority {
			context.insert("priority".to_string(), json!(priority));
		}
		if let Some(id) = &self.provider_job_id {
			context.insert("provider_job_id".to_string(), json!(id.to_string()));
		}
		Value::Object(context)
	}

	/// Flat string tags for event indexing. Timestamps are excluded; tags
	/// must stay low-cardinality.
	pub fn tag_pairs(&self) -> Vec<(String, String)> {
		let mut tags = Vec::new();
		if let Some(queue) = &self.queue_name {
			tags.push(("queue_name".to_string(), queue.clone()));
		}
		tags.push(("executions".to_string(), self.executions.to_string()));
		if let Some(priority) = self.priority {
			tags.push(("priority".to_string(), priority.to_string()));
		}
		tags
	}
}
