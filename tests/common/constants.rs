//! Shared constants for the e2e test suite.

/// Timeout for individual HTTP requests made by the test client.
pub const REQUEST_TIMEOUT_SECS: u64 = 5;

/// How long to wait for a spawned test server to start answering.
pub const SERVER_READY_TIMEOUT_MS: u64 = 5_000;

/// Poll interval while waiting for the test server to come up.
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
