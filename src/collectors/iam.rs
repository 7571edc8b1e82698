use aws_config::SdkConfig;
use aws_sdk_iam as iam;

use super::Collected;
use crate::pagination::drain_pages;

/// List IAM users across all pages.
pub async fn list_users(config: &SdkConfig) -> Collected {
    let client = iam::Client::new(config);
    let pages = client.list_users().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for user in page.users {
            lines.push(format!("UserName: {}", user.user_name));
        }
    })
    .await
    .context("ListUsers request failed")
}

/// List IAM roles across all pages.
pub async fn list_roles(config: &SdkConfig) -> Collected {
    let client = iam::Client::new(config);
    let pages = client.list_roles().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for role in page.roles {
            lines.push(format!("RoleName: {}", role.role_name));
        }
    })
    .await
    .context("ListRoles request failed")
}
