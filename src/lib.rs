//! AWS Footprint - one-shot resource inventory reporting
//!
//! Enumerates the resources in a single AWS account/region through the AWS
//! SDK and writes a flat text report, one titled section per resource
//! category. The reusable pieces live here so tests can drive them without
//! the network: a data-driven [`registry`] of collectors, a generic
//! [`pagination`] helper that walks any paginated list API to exhaustion,
//! and an append-only [`report`] sink.

#![warn(clippy::all, rust_2018_idioms)]

pub mod collectors;
pub mod identity;
pub mod pagination;
pub mod registry;
pub mod report;
pub mod sdk_errors;
