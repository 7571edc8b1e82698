use aws_config::SdkConfig;
use aws_sdk_ecr as ecr;

use super::Collected;
use crate::pagination::drain_pages;

/// List ECR image repositories.
pub async fn list_repositories(config: &SdkConfig) -> Collected {
    let client = ecr::Client::new(config);
    let pages = client.describe_repositories().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for repository in page.repositories.unwrap_or_default() {
            if let Some(name) = repository.repository_name {
                lines.push(format!("Repository Name: {name}"));
            }
        }
    })
    .await
    .context("DescribeRepositories request failed")
}
