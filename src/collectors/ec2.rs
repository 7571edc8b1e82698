use anyhow::{Context, Result};
use aws_config::SdkConfig;
use aws_sdk_ec2 as ec2;

use super::Collected;
use crate::pagination::drain_pages;
use crate::sdk_errors::capture;

/// List EC2 instances, flattening reservations.
pub async fn list_instances(config: &SdkConfig) -> Collected {
    let client = ec2::Client::new(config);
    let pages = client.describe_instances().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for reservation in page.reservations.unwrap_or_default() {
            for instance in reservation.instances.unwrap_or_default() {
                if let Some(id) = instance.instance_id {
                    lines.push(format!("Instance ID: {id}"));
                }
            }
        }
    })
    .await
    .context("DescribeInstances request failed")
}

/// List VPCs.
pub async fn list_vpcs(config: &SdkConfig) -> Collected {
    Collected::from_result(fetch_vpcs(config).await)
}

async fn fetch_vpcs(config: &SdkConfig) -> Result<Vec<String>> {
    let client = ec2::Client::new(config);
    let response = client
        .describe_vpcs()
        .send()
        .await
        .map_err(capture)
        .context("DescribeVpcs request failed")?;

    let mut lines = Vec::new();
    for vpc in response.vpcs.unwrap_or_default() {
        if let Some(id) = vpc.vpc_id {
            lines.push(format!("VPC ID: {id}"));
        }
    }
    Ok(lines)
}

/// List subnets.
pub async fn list_subnets(config: &SdkConfig) -> Collected {
    Collected::from_result(fetch_subnets(config).await)
}

async fn fetch_subnets(config: &SdkConfig) -> Result<Vec<String>> {
    let client = ec2::Client::new(config);
    let response = client
        .describe_subnets()
        .send()
        .await
        .map_err(capture)
        .context("DescribeSubnets request failed")?;

    let mut lines = Vec::new();
    for subnet in response.subnets.unwrap_or_default() {
        if let Some(id) = subnet.subnet_id {
            lines.push(format!("Subnet ID: {id}"));
        }
    }
    Ok(lines)
}

/// List security groups with id and name.
pub async fn list_security_groups(config: &SdkConfig) -> Collected {
    Collected::from_result(fetch_security_groups(config).await)
}

async fn fetch_security_groups(config: &SdkConfig) -> Result<Vec<String>> {
    let client = ec2::Client::new(config);
    let response = client
        .describe_security_groups()
        .send()
        .await
        .map_err(capture)
        .context("DescribeSecurityGroups request failed")?;

    let mut lines = Vec::new();
    for group in response.security_groups.unwrap_or_default() {
        let id = group.group_id.unwrap_or_default();
        let name = group.group_name.unwrap_or_default();
        lines.push(format!("Security Group ID: {id}, Name: {name}"));
    }
    Ok(lines)
}

/// List EBS volumes.
pub async fn list_volumes(config: &SdkConfig) -> Collected {
    let client = ec2::Client::new(config);
    let pages = client.describe_volumes().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for volume in page.volumes.unwrap_or_default() {
            if let Some(id) = volume.volume_id {
                lines.push(format!("Volume ID: {id}"));
            }
        }
    })
    .await
    .context("DescribeVolumes request failed")
}
