//! Caller identity resolution via STS.
//!
//! The account id labels the report and names the output file, so failing to
//! resolve it is fatal for the whole run. Credentials must already be valid;
//! nothing here performs authentication.

use anyhow::{bail, Context, Result};
use aws_config::SdkConfig;
use aws_sdk_sts as sts;
use tracing::debug;

/// The resolved account identity. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerIdentity {
    pub account_id: String,
}

/// Resolves the caller's account id with `sts:GetCallerIdentity`.
pub async fn resolve_identity(config: &SdkConfig) -> Result<CallerIdentity> {
    let client = sts::Client::new(config);
    let response = client
        .get_caller_identity()
        .send()
        .await
        .context("failed to resolve caller identity, check profile credentials")?;

    let account_id = account_id_from(response.account.as_deref())?;
    debug!("resolved caller identity for account {}", account_id);
    Ok(CallerIdentity { account_id })
}

fn account_id_from(account: Option<&str>) -> Result<String> {
    match account {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => bail!("caller identity response carried no account id"),
    }
}
