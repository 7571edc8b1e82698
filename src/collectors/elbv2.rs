use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancingv2 as elbv2;

use super::Collected;
use crate::pagination::drain_pages;

/// List Application/Network/Gateway load balancers with name and type.
pub async fn list_load_balancers(config: &SdkConfig) -> Collected {
    let client = elbv2::Client::new(config);
    let pages = client.describe_load_balancers().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for lb in page.load_balancers.unwrap_or_default() {
            let name = lb.load_balancer_name.unwrap_or_default();
            let lb_type = lb
                .r#type
                .map(|t| t.as_str().to_string())
                .unwrap_or_default();
            lines.push(format!("Load Balancer Name: {name}, Type: {lb_type}"));
        }
    })
    .await
    .context("DescribeLoadBalancers request failed")
}
