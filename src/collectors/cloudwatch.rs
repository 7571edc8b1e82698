use aws_config::SdkConfig;
use aws_sdk_cloudwatch as cloudwatch;

use super::Collected;
use crate::pagination::drain_pages;

/// List CloudWatch metric alarms.
pub async fn list_alarms(config: &SdkConfig) -> Collected {
    let client = cloudwatch::Client::new(config);
    let pages = client.describe_alarms().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for alarm in page.metric_alarms.unwrap_or_default() {
            if let Some(name) = alarm.alarm_name {
                lines.push(format!("Alarm Name: {name}"));
            }
        }
    })
    .await
    .context("DescribeAlarms request failed")
}
