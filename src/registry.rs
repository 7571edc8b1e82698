//! The collector registry and the sequential run loop.
//!
//! Section order in the report is a contract: it equals the registration
//! order below on every run. Global collectors (account-wide services) run
//! first, then the `Region:` divider, then the regional collectors for the
//! configured region. A collector's failure is logged and recorded but never
//! aborts the run; only sink write failures propagate.

use anyhow::Result;
use aws_config::SdkConfig;
use futures::future::BoxFuture;
use tracing::{debug, error, warn};

use crate::collectors::{
    self, cloudfront, cloudwatch, dynamodb, ec2, ecr, ecs, eks, elbv2, iam, lambda, rds, s3, sns,
    sqs,
};
use crate::report::ReportSink;
use crate::sdk_errors::{classify, FailureKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Account-wide service, independent of the target region.
    Global,
    /// Queried once for the configured region.
    Regional,
}

/// One entry in the registry table: a section title, its scope, and the
/// collector function producing the section's lines. The function takes the
/// config by value (`SdkConfig` is an `Arc`-backed handle, cloning is cheap)
/// so its future owns everything it needs.
pub struct Collector {
    pub title: &'static str,
    pub scope: Scope,
    pub run: fn(SdkConfig) -> BoxFuture<'static, collectors::Collected>,
}

/// What `run_all` reports back: which sections came up short.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub failed_sections: Vec<&'static str>,
}

/// Builds the registry in registration order.
pub fn registry() -> Vec<Collector> {
    use Scope::{Global, Regional};

    vec![
        Collector {
            title: "S3 Buckets",
            scope: Global,
            run: |config| Box::pin(async move { s3::list_buckets(&config).await }),
        },
        Collector {
            title: "IAM Users",
            scope: Global,
            run: |config| Box::pin(async move { iam::list_users(&config).await }),
        },
        Collector {
            title: "IAM Roles",
            scope: Global,
            run: |config| Box::pin(async move { iam::list_roles(&config).await }),
        },
        Collector {
            title: "CloudFront Distributions",
            scope: Global,
            run: |config| Box::pin(async move { cloudfront::list_distributions(&config).await }),
        },
        Collector {
            title: "EC2 Instances",
            scope: Regional,
            run: |config| Box::pin(async move { ec2::list_instances(&config).await }),
        },
        Collector {
            title: "VPCs",
            scope: Regional,
            run: |config| Box::pin(async move { ec2::list_vpcs(&config).await }),
        },
        Collector {
            title: "Subnets",
            scope: Regional,
            run: |config| Box::pin(async move { ec2::list_subnets(&config).await }),
        },
        Collector {
            title: "Security Groups",
            scope: Regional,
            run: |config| Box::pin(async move { ec2::list_security_groups(&config).await }),
        },
        Collector {
            title: "Load Balancers",
            scope: Regional,
            run: |config| Box::pin(async move { elbv2::list_load_balancers(&config).await }),
        },
        Collector {
            title: "RDS Instances",
            scope: Regional,
            run: |config| Box::pin(async move { rds::list_db_instances(&config).await }),
        },
        Collector {
            title: "Lambda Functions",
            scope: Regional,
            run: |config| Box::pin(async move { lambda::list_functions(&config).await }),
        },
        Collector {
            title: "DynamoDB Tables",
            scope: Regional,
            run: |config| Box::pin(async move { dynamodb::list_tables(&config).await }),
        },
        Collector {
            title: "CloudWatch Alarms",
            scope: Regional,
            run: |config| Box::pin(async move { cloudwatch::list_alarms(&config).await }),
        },
        Collector {
            title: "EBS Volumes",
            scope: Regional,
            run: |config| Box::pin(async move { ec2::list_volumes(&config).await }),
        },
        Collector {
            title: "SNS Topics",
            scope: Regional,
            run: |config| Box::pin(async move { sns::list_topics(&config).await }),
        },
        Collector {
            title: "SQS Queues",
            scope: Regional,
            run: |config| Box::pin(async move { sqs::list_queues(&config).await }),
        },
        Collector {
            title: "ECS Clusters",
            scope: Regional,
            run: |config| Box::pin(async move { ecs::list_clusters(&config).await }),
        },
        Collector {
            title: "EKS Clusters",
            scope: Regional,
            run: |config| Box::pin(async move { eks::list_clusters(&config).await }),
        },
        Collector {
            title: "ECR Repositories",
            scope: Regional,
            run: |config| Box::pin(async move { ecr::list_repositories(&config).await }),
        },
    ]
}

/// Runs every global collector, writes the region divider, then runs every
/// regional collector, all in registration order.
pub async fn run_all(
    collectors: &[Collector],
    config: &SdkConfig,
    region: &str,
    sink: &mut ReportSink,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for collector in collectors.iter().filter(|c| c.scope == Scope::Global) {
        run_one(collector, config, sink, &mut summary).await?;
    }
    sink.write_region(region)?;
    for collector in collectors.iter().filter(|c| c.scope == Scope::Regional) {
        run_one(collector, config, sink, &mut summary).await?;
    }

    Ok(summary)
}

async fn run_one(
    collector: &Collector,
    config: &SdkConfig,
    sink: &mut ReportSink,
    summary: &mut RunSummary,
) -> Result<()> {
    debug!("collecting {}", collector.title);
    let collected = (collector.run)(config.clone()).await;

    if let Some(err) = &collected.error {
        match classify(err) {
            // A permission gap is actionable account configuration, not a
            // transient fault; call it out more prominently.
            FailureKind::PermissionDenied => warn!(
                "{}: access denied, section truncated at {} item(s); grant the \
                 missing list/describe permission to include this category: {err:#}",
                collector.title,
                collected.lines.len(),
            ),
            kind => error!(
                "{}: {}, section truncated at {} item(s): {err:#}",
                collector.title,
                kind.label(),
                collected.lines.len(),
            ),
        }
        summary.failed_sections.push(collector.title);
    }

    sink.write_section(collector.title, &collected.lines)?;
    Ok(())
}
