//! Generic paginate-until-exhausted support.
//!
//! Every paginated list/describe API in this tool is driven the same way:
//! request pages until the provider signals there are none left, format the
//! items of each page, and stop on the first failed page while keeping
//! everything gathered so far. [`drain_pages`] captures that loop once;
//! collectors only supply the page source and the per-page formatter.

use async_trait::async_trait;
use aws_smithy_async::future::pagination_stream::PaginationStream;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

use crate::collectors::Collected;
use crate::sdk_errors::capture;

/// A source of pages from a paginated list API.
///
/// Implemented for the SDK's `PaginationStream` (the `into_paginator()`
/// output every generated client exposes) and for hand-rolled marker loops
/// where the SDK does not generate a paginator. Test code substitutes stub
/// implementations backed by fixed page fixtures.
#[async_trait]
pub trait PageStream: Send {
    type Page: Send;

    /// Returns the next page, or `None` once the source is exhausted.
    async fn next_page(&mut self) -> Option<Result<Self::Page, anyhow::Error>>;
}

#[async_trait]
impl<O, E> PageStream for PaginationStream<Result<O, E>>
where
    O: Send + 'static,
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
{
    type Page = O;

    async fn next_page(&mut self) -> Option<Result<O, anyhow::Error>> {
        // The service error code is recorded here, while the error is still
        // concretely typed; classification happens after type erasure.
        self.next().await.map(|page| page.map_err(capture))
    }
}

/// Drives `pages` to exhaustion, feeding each page through `format_page`.
///
/// A page failure ends the walk: the lines accumulated from earlier pages
/// are kept and the error is carried alongside them, so a category that
/// breaks halfway still contributes its partial section to the report.
pub async fn drain_pages<S, F>(mut pages: S, mut format_page: F) -> Collected
where
    S: PageStream,
    F: FnMut(S::Page, &mut Vec<String>) + Send,
{
    let mut lines = Vec::new();
    loop {
        match pages.next_page().await {
            Some(Ok(page)) => format_page(page, &mut lines),
            Some(Err(error)) => {
                return Collected {
                    lines,
                    error: Some(error),
                }
            }
            None => {
                return Collected { lines, error: None }
            }
        }
    }
}
