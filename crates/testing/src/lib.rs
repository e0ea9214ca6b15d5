// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Test support shared by the workspace crates: golden testscripts and
//! tracing setup for test binaries.

pub mod testscript;

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING: Once = Once::new();

/// Installs a fmt subscriber writing through the libtest capture. Filtered by
/// `RUST_LOG`, defaulting to `warn`. Safe to call from every test.
pub fn init_tracing() {
	TRACING.call_once(|| {
		let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
		let _ = fmt().with_env_filter(filter).with_test_writer().try_init();
	});
}
