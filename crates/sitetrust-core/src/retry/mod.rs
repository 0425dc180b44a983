//! Retry and backoff policy for idempotent backend reads.
//!
//! Error classification (timeouts, throttling, connection failures) and
//! exponential backoff live here so the HTTP client applies one consistent
//! policy to both lookup fetches. Vote submissions are never retried.

mod classify;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status};
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
