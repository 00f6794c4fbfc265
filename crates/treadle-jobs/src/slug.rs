// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Monitor slug derivation.

/// Derive a monitor slug from a job class name.
///
/// The name (PascalCase or snake_case) is lowered to snake_case, a
/// trailing `_job` segment is stripped, and only the first remaining
/// segment is kept. Monitor slugs are short, stable prefixes keyed off
/// the job's primary name component: `TestJob` and `test_job` both
/// become `test`.
pub fn monitor_slug(job_class_name: &str) -> String {
	let snake = to_snake_case(job_class_name);
	let trimmed = snake.strip_suffix("_job").unwrap_or(&snake);
	trimmed.split('_').next().unwrap_or_default().to_string()
}

/// Lower a PascalCase identifier to snake_case. Acronym runs stay
/// together: `HTTPSyncJob` becomes `http_sync_job`.
fn to_snake_case(name: &str) -> String {
	let chars: Vec<char> = name.chars().collect();
	let mut out = String::with_capacity(name.len() + 4);
	for (i, &c) in chars.iter().enumerate() {
		if c.is_uppercase() {
			let after_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
			let acronym_end =
				i > 0 && chars[i - 1].is_uppercase() && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
			if after_lower || acronym_end {
				out.push('_');
			}
			out.extend(c.to_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}
