//! Registry-level properties: registration order drives section order, a
//! broken category never takes the run down with it, and partial output from
//! a failed category is kept.

use anyhow::anyhow;
use aws_config::SdkConfig;
use futures::future::BoxFuture;
use pretty_assertions::assert_eq;

use aws_footprint::collectors::Collected;
use aws_footprint::registry::{registry, run_all, Collector, Scope};
use aws_footprint::report::ReportSink;

fn empty_config() -> SdkConfig {
    SdkConfig::builder().build()
}

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn two_buckets(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: lines(&["a", "b"]),
            error: None,
        }
    })
}

fn no_users(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: Vec::new(),
            error: None,
        }
    })
}

fn one_role(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: lines(&["RoleName: r1"]),
            error: None,
        }
    })
}

fn broken_after_one_page(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: lines(&["Instance ID: i-0aaa"]),
            error: Some(anyhow!("ThrottlingException: Rate exceeded on page 2")),
        }
    })
}

fn denied_immediately(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: Vec::new(),
            error: Some(anyhow!(
                "AccessDenied: not authorized to perform s3:ListAllMyBuckets"
            )),
        }
    })
}

fn one_volume(_: SdkConfig) -> BoxFuture<'static, Collected> {
    Box::pin(async {
        Collected {
            lines: lines(&["Volume ID: vol-0bbb"]),
            error: None,
        }
    })
}

fn stub_registry() -> Vec<Collector> {
    vec![
        Collector {
            title: "S3 Buckets",
            scope: Scope::Global,
            run: two_buckets,
        },
        Collector {
            title: "IAM Users",
            scope: Scope::Global,
            run: no_users,
        },
        Collector {
            title: "IAM Roles",
            scope: Scope::Global,
            run: one_role,
        },
        Collector {
            title: "EC2 Instances",
            scope: Scope::Regional,
            run: broken_after_one_page,
        },
        Collector {
            title: "EBS Volumes",
            scope: Scope::Regional,
            run: one_volume,
        },
    ]
}

async fn render(collectors: &[Collector]) -> (String, Vec<&'static str>) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("aws_footprint_123456789012.txt");

    let mut sink = ReportSink::create(&path).expect("create sink");
    sink.write_header("123456789012").expect("header");
    let summary = run_all(collectors, &empty_config(), "us-east-1", &mut sink)
        .await
        .expect("run_all");
    sink.finish().expect("finish");

    let report = std::fs::read_to_string(&path).expect("read report");
    (report, summary.failed_sections)
}

#[tokio::test]
async fn report_matches_golden_fixture() {
    let (report, failed) = render(&stub_registry()).await;

    let expected = "AWS Account ID: 123456789012\n\
                    \n\
                    S3 Buckets:\n\
                    - a\n\
                    - b\n\
                    \n\
                    IAM Users:\n\
                    \n\
                    IAM Roles:\n\
                    - RoleName: r1\n\
                    \n\
                    Region: us-east-1\n\
                    \n\
                    EC2 Instances:\n\
                    - Instance ID: i-0aaa\n\
                    \n\
                    EBS Volumes:\n\
                    - Volume ID: vol-0bbb\n";
    assert_eq!(report, expected);
    assert_eq!(failed, vec!["EC2 Instances"]);
}

#[tokio::test]
async fn failed_category_keeps_partial_lines_and_run_continues() {
    let (report, failed) = render(&stub_registry()).await;

    // Partial item from the page before the failure survives.
    assert!(report.contains("- Instance ID: i-0aaa"));
    // The collector after the failed one still produced its section.
    assert!(report.contains("EBS Volumes:\n- Volume ID: vol-0bbb\n"));
    assert_eq!(failed, vec!["EC2 Instances"]);
}

#[tokio::test]
async fn failed_first_request_still_prints_section_header() {
    // A category whose very first request is denied yields zero lines, but
    // its header is still written: every registered category appears in the
    // report, failed or not.
    let collectors = vec![
        Collector {
            title: "S3 Buckets",
            scope: Scope::Global,
            run: denied_immediately,
        },
        Collector {
            title: "IAM Users",
            scope: Scope::Global,
            run: no_users,
        },
    ];
    let (report, failed) = render(&collectors).await;

    assert!(report.contains("\nS3 Buckets:\n\nIAM Users:\n"));
    assert_eq!(failed, vec!["S3 Buckets"]);
}

#[tokio::test]
async fn repeated_runs_are_byte_identical() {
    let (first, _) = render(&stub_registry()).await;
    let (second, _) = render(&stub_registry()).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn region_divider_separates_global_and_regional_sections() {
    let (report, _) = render(&stub_registry()).await;

    let divider = report.find("\nRegion: us-east-1\n").expect("divider");
    let roles = report.find("IAM Roles:").expect("global section");
    let volumes = report.find("EBS Volumes:").expect("regional section");
    assert!(roles < divider);
    assert!(divider < volumes);
}

#[test]
fn production_registry_covers_every_category() {
    // 4 global + 15 regional categories, in a fixed order.
    let collectors = registry();
    assert_eq!(collectors.len(), 19);
    assert_eq!(
        collectors
            .iter()
            .filter(|c| c.scope == Scope::Global)
            .count(),
        4
    );
    assert_eq!(collectors.first().expect("non-empty").title, "S3 Buckets");
    assert_eq!(
        collectors.last().expect("non-empty").title,
        "ECR Repositories"
    );
}
