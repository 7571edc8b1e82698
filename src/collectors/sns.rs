use aws_config::SdkConfig;
use aws_sdk_sns as sns;

use super::Collected;
use crate::pagination::drain_pages;

/// List SNS topics.
pub async fn list_topics(config: &SdkConfig) -> Collected {
    let client = sns::Client::new(config);
    let pages = client.list_topics().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for topic in page.topics.unwrap_or_default() {
            if let Some(arn) = topic.topic_arn {
                lines.push(format!("Topic ARN: {arn}"));
            }
        }
    })
    .await
    .context("ListTopics request failed")
}
