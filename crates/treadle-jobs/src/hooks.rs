// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Host lifecycle hooks for deferred capability attachment.
//!
//! Job classes may not be fully loadable while the host application is
//! still booting, so attachment is late-bound: the orchestrator registers
//! intent here, and the host runs the callbacks once its own
//! initialization completes.

use std::sync::Mutex;

/// Startup-completion hook exposed by the host application.
pub trait HostHooks: Send + Sync {
	/// Run `f` after the host application has finished initializing.
	fn after_initialize(&self, f: Box<dyn FnOnce() + Send>);
}

/// Hooks implementation that runs callbacks immediately.
///
/// For hosts without a distinct boot phase.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineHooks;

impl HostHooks for InlineHooks {
	fn after_initialize(&self, f: Box<dyn FnOnce() + Send>) {
		f();
	}
}

/// Hooks implementation that queues callbacks until the host signals
/// readiness via [`QueuedHooks::application_ready`]. Callbacks registered
/// after that point run immediately.
#[derive(Default)]
pub struct QueuedHooks {
	inner: Mutex<QueuedState>,
}

#[derive(Default)]
struct QueuedState {
	ready: bool,
	pending: Vec<Box<dyn FnOnce() + Send>>,
}

impl QueuedHooks {
	pub fn new() -> Self {
		Self::default()
	}

	/// Signal that the host finished booting and drain pending callbacks.
	pub fn application_ready(&self) {
		let pending = {
			let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
			state.ready = true;
			std::mem::take(&mut state.pending)
		};
		for f in pending {
			f();
		}
	}

	pub fn pending_count(&self) -> usize {
		self.inner
			.lock()
			.unwrap_or_else(|e| e.into_inner())
			.pending
			.len()
	}
}

impl HostHooks for QueuedHooks {
	fn after_initialize(&self, f: Box<dyn FnOnce() + Send>) {
		{
			let mut state = self.inner.lock().unwrap_or_else(|e| e.into_inner());
			if !state.ready {
				state.pending.push(f);
				return;
			}
		}
		f();
	}
}
