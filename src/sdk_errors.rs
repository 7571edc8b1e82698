//! AWS SDK error classification for operator-visible logging.
//!
//! A collector failure never aborts the run, but not every failure deserves
//! the same log line: a permission gap is an account configuration problem
//! the operator can fix, while throttling and network errors are transient.
//! The SDK retries transient errors internally with exponential backoff
//! (`RetryConfig::standard()`, set at config load time); this module only
//! classifies what is left after those retries are exhausted.
//!
//! The service error code is captured by [`capture`] at the collector
//! boundary, while the `SdkError` is still concretely typed and exposes
//! `ProvideErrorMetadata::code()`. Classification prefers that code and only
//! falls back to scanning the rendered chain for errors that never carried
//! metadata (dispatch failures, timeouts).

use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::error::Error as StdError;
use std::fmt;

/// How a collector failure should be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The credentials lack permission for the list/describe call.
    PermissionDenied,
    /// Rate limiting outlasted the SDK's built-in retries.
    Throttled,
    /// Anything else: timeouts, network errors, service faults.
    Other,
}

impl FailureKind {
    pub fn label(self) -> &'static str {
        match self {
            FailureKind::PermissionDenied => "access denied",
            FailureKind::Throttled => "throttled",
            FailureKind::Other => "request failed",
        }
    }
}

/// A collector request failure with the service error code recorded while
/// the underlying SDK error was still typed. The original error stays on the
/// chain as the source.
#[derive(Debug)]
pub struct ApiFailure {
    code: Option<String>,
    source: Box<dyn StdError + Send + Sync + 'static>,
}

impl ApiFailure {
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => f.write_str(code),
            None => f.write_str("request failed"),
        }
    }
}

impl StdError for ApiFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Wraps a typed SDK error for the collector outcome, recording its service
/// error code. Failures that never reached the service (dispatch errors,
/// timeouts) carry no metadata and record `None`.
pub fn capture<E>(error: E) -> anyhow::Error
where
    E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
{
    let code = error.code().map(str::to_string);
    anyhow::Error::new(ApiFailure {
        code,
        source: Box::new(error),
    })
}

const PERMISSION_CODES: &[&str] = &[
    "AccessDenied",
    "AccessDeniedException",
    "UnauthorizedOperation",
    "UnauthorizedAccess",
    "AuthFailure",
    "NotAuthorized",
    "AuthorizationError",
];

const THROTTLING_CODES: &[&str] = &[
    "Throttling",
    "ThrottlingException",
    "TooManyRequestsException",
    "RequestLimitExceeded",
    "ProvisionedThroughputExceededException",
    "RateExceeded",
];

/// Classifies a collector error, preferring the error code captured at the
/// collector boundary over the rendered chain.
pub fn classify(error: &anyhow::Error) -> FailureKind {
    if let Some(failure) = error.downcast_ref::<ApiFailure>() {
        if let Some(code) = failure.code() {
            return classify_code(code);
        }
    }
    classify_str(&format!("{error:#}"))
}

fn classify_code(code: &str) -> FailureKind {
    if PERMISSION_CODES.contains(&code) {
        FailureKind::PermissionDenied
    } else if THROTTLING_CODES.contains(&code) {
        FailureKind::Throttled
    } else {
        FailureKind::Other
    }
}

fn classify_str(rendered: &str) -> FailureKind {
    if PERMISSION_CODES.iter().any(|p| rendered.contains(p)) {
        FailureKind::PermissionDenied
    } else if THROTTLING_CODES.iter().any(|p| rendered.contains(p)) {
        FailureKind::Throttled
    } else {
        FailureKind::Other
    }
}
