// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for treadle cron monitoring.
//!
//! This crate holds the plain data types shared between the registration
//! subsystem and its hosts: monitor configurations, schedule specs,
//! check-in phases, per-run job metadata, and registration outcomes.
//! No I/O happens here.

pub mod checkin;
pub mod error;
pub mod monitor;

pub use checkin::{CheckInPhase, JobMetadata};
pub use error::{MonitorError, Result};
pub use monitor::{MonitorConfig, ParsedSchedule, RegistrationOutcome, ScheduleSpec};
