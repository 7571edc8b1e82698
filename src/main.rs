#![warn(clippy::all, rust_2018_idioms)]

use std::io::{self, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use aws_config::retry::RetryConfig;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use tracing::{error, info, warn};

use aws_footprint::registry::{registry, run_all};
use aws_footprint::report::open_account_report;

/// Upper bound for a single HTTP attempt, including connect time.
const ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);
/// Upper bound for one SDK operation across all of its retries.
const OPERATION_TIMEOUT: Duration = Duration::from_secs(120);
/// Overall deadline for the whole collection run. Unbounded pagination
/// against a throttling API is the only way a run can otherwise hang.
const RUN_DEADLINE: Duration = Duration::from_secs(1800);

fn init_logging() {
    // Prompts go to stdout, so all diagnostics go to stderr. SDK internals
    // are quieted unless RUST_LOG asks for them.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "aws_footprint=info,aws_config=warn,aws_sigv4=warn,aws_smithy_runtime=warn,\
             aws_smithy_runtime_api=warn,aws_smithy_http=warn,hyper=warn",
        )
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush().context("failed to flush prompt")?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input.trim().to_string())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(err) = run().await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let profile = prompt("Enter AWS profile name: ")?;
    let region = prompt("Enter AWS region (e.g., us-east-1): ")?;

    let timeouts = TimeoutConfig::builder()
        .connect_timeout(Duration::from_secs(10))
        .operation_attempt_timeout(ATTEMPT_TIMEOUT)
        .operation_timeout(OPERATION_TIMEOUT)
        .build();
    let config = aws_config::defaults(BehaviorVersion::latest())
        .profile_name(&profile)
        .region(Region::new(region.clone()))
        .timeout_config(timeouts)
        .retry_config(RetryConfig::standard())
        .load()
        .await;

    // No report without an identity: a bad profile leaves no output file behind.
    let (identity, mut sink) = open_account_report(&config, Path::new(".")).await?;
    info!("collecting footprint for account {}", identity.account_id);

    let collectors = registry();
    match tokio::time::timeout(
        RUN_DEADLINE,
        run_all(&collectors, &config, &region, &mut sink),
    )
    .await
    {
        Ok(outcome) => {
            let summary = outcome?;
            if !summary.failed_sections.is_empty() {
                warn!(
                    "{} of {} sections incomplete: {}",
                    summary.failed_sections.len(),
                    collectors.len(),
                    summary.failed_sections.join(", "),
                );
            }
        }
        Err(_) => error!(
            "run deadline of {}s exceeded, report is incomplete",
            RUN_DEADLINE.as_secs(),
        ),
    }

    let report_path = sink.path().to_path_buf();
    sink.finish()?;
    println!("AWS footprint has been saved to {}", report_path.display());
    Ok(())
}
