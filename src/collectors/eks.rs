use aws_config::SdkConfig;
use aws_sdk_eks as eks;

use super::Collected;
use crate::pagination::drain_pages;

/// List EKS clusters by name.
pub async fn list_clusters(config: &SdkConfig) -> Collected {
    let client = eks::Client::new(config);
    let pages = client.list_clusters().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for name in page.clusters.unwrap_or_default() {
            lines.push(format!("Cluster Name: {name}"));
        }
    })
    .await
    .context("ListClusters request failed")
}
