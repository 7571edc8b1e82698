//! Per-category resource collectors.
//!
//! Each collector is a stateless async function over a shared `SdkConfig`:
//! it builds the service client, drives the list/describe operation (through
//! [`crate::pagination::drain_pages`] when the API paginates), and formats
//! each item as one report line using the same field labels for every run.
//! Collectors never fail the run; their outcome is a [`Collected`] carrying
//! whatever lines were gathered plus the error that cut the category short,
//! if any.

pub mod cloudfront;
pub mod cloudwatch;
pub mod dynamodb;
pub mod ec2;
pub mod ecr;
pub mod ecs;
pub mod eks;
pub mod elbv2;
pub mod iam;
pub mod lambda;
pub mod rds;
pub mod s3;
pub mod sns;
pub mod sqs;

/// Outcome of one collector invocation.
///
/// `lines` holds every item formatted before the category finished or broke;
/// `error` is set when a request failed partway. Both can be non-empty at
/// once: a pagination failure on page k keeps the lines of pages 1..k-1.
#[derive(Debug)]
pub struct Collected {
    pub lines: Vec<String>,
    pub error: Option<anyhow::Error>,
}

impl Collected {
    /// Builds an outcome from an all-or-nothing request result, for the
    /// single-shot (non-paginated) list calls.
    pub fn from_result(result: anyhow::Result<Vec<String>>) -> Self {
        match result {
            Ok(lines) => Self { lines, error: None },
            Err(error) => Self {
                lines: Vec::new(),
                error: Some(error),
            },
        }
    }

    /// Attaches operation context to the carried error, if there is one.
    pub fn context(mut self, msg: &'static str) -> Self {
        self.error = self.error.map(|error| error.context(msg));
        self
    }
}
