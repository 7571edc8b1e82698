use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_cloudfront as cloudfront;
use aws_sdk_cloudfront::types::DistributionSummary;

use super::Collected;
use crate::pagination::{drain_pages, PageStream};
use crate::sdk_errors::capture;

/// List CloudFront distributions.
pub async fn list_distributions(config: &SdkConfig) -> Collected {
    let pages = DistributionPages::new(cloudfront::Client::new(config));
    drain_pages(pages, |page, lines| {
        for distribution in page {
            lines.push(format!("Distribution ID: {}", distribution.id));
        }
    })
    .await
    .context("ListDistributions request failed")
}

/// Hand-rolled marker pager for ListDistributions. Truncated responses
/// sometimes omit `next_marker`; the marker then falls back to the last
/// distribution id of the page, which the generated paginator does not do.
struct DistributionPages {
    client: cloudfront::Client,
    marker: Option<String>,
    exhausted: bool,
}

impl DistributionPages {
    fn new(client: cloudfront::Client) -> Self {
        Self {
            client,
            marker: None,
            exhausted: false,
        }
    }
}

#[async_trait]
impl PageStream for DistributionPages {
    type Page = Vec<DistributionSummary>;

    async fn next_page(&mut self) -> Option<Result<Self::Page, anyhow::Error>> {
        if self.exhausted {
            return None;
        }

        let mut request = self.client.list_distributions();
        if let Some(marker) = &self.marker {
            request = request.marker(marker);
        }
        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                self.exhausted = true;
                return Some(Err(capture(error)));
            }
        };

        let Some(list) = response.distribution_list else {
            self.exhausted = true;
            return Some(Ok(Vec::new()));
        };

        let items = list.items.unwrap_or_default();
        if list.is_truncated {
            self.marker = list
                .next_marker
                .clone()
                .or_else(|| items.last().map(|d| d.id.clone()));
            if self.marker.is_none() {
                self.exhausted = true;
            }
        } else {
            self.exhausted = true;
        }
        Some(Ok(items))
    }
}
