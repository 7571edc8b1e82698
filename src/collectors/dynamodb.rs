use aws_config::SdkConfig;
use aws_sdk_dynamodb as dynamodb;

use super::Collected;
use crate::pagination::drain_pages;

/// List DynamoDB tables.
pub async fn list_tables(config: &SdkConfig) -> Collected {
    let client = dynamodb::Client::new(config);
    let pages = client.list_tables().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for name in page.table_names.unwrap_or_default() {
            lines.push(format!("Table Name: {name}"));
        }
    })
    .await
    .context("ListTables request failed")
}
