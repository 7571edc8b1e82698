use aws_config::SdkConfig;
use aws_sdk_rds as rds;

use super::Collected;
use crate::pagination::drain_pages;

/// List RDS database instances.
pub async fn list_db_instances(config: &SdkConfig) -> Collected {
    let client = rds::Client::new(config);
    let pages = client.describe_db_instances().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for instance in page.db_instances.unwrap_or_default() {
            if let Some(id) = instance.db_instance_identifier {
                lines.push(format!("DB Instance Identifier: {id}"));
            }
        }
    })
    .await
    .context("DescribeDBInstances request failed")
}
