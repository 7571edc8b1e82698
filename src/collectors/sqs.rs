use aws_config::SdkConfig;
use aws_sdk_sqs as sqs;

use super::Collected;
use crate::pagination::drain_pages;

/// List SQS queues by URL.
pub async fn list_queues(config: &SdkConfig) -> Collected {
    let client = sqs::Client::new(config);
    let pages = client.list_queues().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for url in page.queue_urls.unwrap_or_default() {
            lines.push(format!("Queue URL: {url}"));
        }
    })
    .await
    .context("ListQueues request failed")
}
