use aws_config::SdkConfig;
use aws_sdk_lambda as lambda;

use super::Collected;
use crate::pagination::drain_pages;

/// List Lambda functions.
pub async fn list_functions(config: &SdkConfig) -> Collected {
    let client = lambda::Client::new(config);
    let pages = client.list_functions().into_paginator().send();
    drain_pages(pages, |page, lines| {
        for function in page.functions.unwrap_or_default() {
            if let Some(name) = function.function_name {
                lines.push(format!("Function Name: {name}"));
            }
        }
    })
    .await
    .context("ListFunctions request failed")
}
