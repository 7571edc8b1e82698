use aws_config::SdkConfig;
use aws_sdk_ecs as ecs;

use super::Collected;
use crate::pagination::drain_pages;

/// List ECS clusters by ARN.
pub async fn list_clusters(config: &SdkConfig) -> Collected {
    let client = ecs::Client::new(config);
    let pages = client.list_clusters().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for arn in page.cluster_arns.unwrap_or_default() {
            lines.push(format!("Cluster ARN: {arn}"));
        }
    })
    .await
    .context("ListClusters request failed")
}
