//! List view state shared by the blog listing and the admin list panels.
//!
//! A [`ListView`] owns one [`PaginationController`] and the slice most
//! recently fetched for it. Fetch failures never escape: the view clears its
//! items and switches to an empty-state message instead.

use std::num::NonZeroU64;

use async_trait::async_trait;
use labelsite_api_types::{ListEnvelope, ListQuery};
use metrics::counter;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::resources::Resource;

use super::pagination::{PageChange, PaginationController};

pub const METRIC_LIST_FETCH_FAILURES: &str = "labelsite_list_fetch_failures_total";

#[derive(Debug, Clone, Error)]
pub enum SourceError {
    /// The source could not build a request for the resource.
    #[error("client configuration error: {0}")]
    Configuration(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Anything that can serve `GET /{resource}?page&limit`.
#[async_trait]
pub trait ListSource: Send + Sync {
    async fn fetch<T>(
        &self,
        resource: Resource,
        query: ListQuery,
    ) -> Result<ListEnvelope<T>, SourceError>
    where
        T: DeserializeOwned + Send + 'static;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListStatus {
    /// Nothing fetched yet.
    Idle,
    Loaded,
    /// The last fetch failed; `message` is what the view shows in place of items.
    Failed { message: String, detail: String },
}

pub struct ListView<T> {
    resource: Resource,
    controller: PaginationController,
    items: Vec<T>,
    status: ListStatus,
}

impl<T> ListView<T>
where
    T: DeserializeOwned + Send + 'static,
{
    pub fn new(resource: Resource, items_per_page: NonZeroU64) -> Self {
        Self {
            resource,
            controller: PaginationController::new(items_per_page, 0),
            items: Vec::new(),
            status: ListStatus::Idle,
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn controller(&self) -> &PaginationController {
        &self.controller
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn status(&self) -> &ListStatus {
        &self.status
    }

    /// Fetch `page` and adopt the returned slice and total.
    ///
    /// When the backend reports fewer pages than `page` needs, the view
    /// refetches the last available page once.
    pub async fn load<S>(&mut self, source: &S, page: u64) -> &ListStatus
    where
        S: ListSource + ?Sized,
    {
        let mut page = page.max(1);
        for attempt in 0..2 {
            let query = ListQuery::new(page, self.controller.state().items_per_page());
            match source.fetch::<T>(self.resource, query).await {
                Ok(envelope) => {
                    let settled = self.adopt(page, envelope);
                    if settled == page || attempt > 0 {
                        break;
                    }
                    debug!(
                        resource = %self.resource,
                        requested = page,
                        settled,
                        "requested page no longer exists; refetching"
                    );
                    page = settled;
                }
                Err(err) => {
                    self.fail(&err);
                    break;
                }
            }
        }
        &self.status
    }

    /// Request `target` and load it if the controller moved.
    pub async fn go_to<S>(&mut self, source: &S, target: i64) -> Option<PageChange>
    where
        S: ListSource + ?Sized,
    {
        let change = self.controller.request_page(target)?;
        self.load(source, change.to).await;
        Some(change)
    }

    pub async fn next<S>(&mut self, source: &S) -> Option<PageChange>
    where
        S: ListSource + ?Sized,
    {
        let change = self.controller.next()?;
        self.load(source, change.to).await;
        Some(change)
    }

    pub async fn previous<S>(&mut self, source: &S) -> Option<PageChange>
    where
        S: ListSource + ?Sized,
    {
        let change = self.controller.previous()?;
        self.load(source, change.to).await;
        Some(change)
    }

    /// Line shown above or in place of the list.
    pub fn summary(&self) -> String {
        let state = self.controller.state();
        match &self.status {
            ListStatus::Failed { message, .. } => message.clone(),
            ListStatus::Idle => format!("Loading {}...", self.resource.label()),
            ListStatus::Loaded if state.total_items() == 0 => {
                format!("No {} yet.", self.resource.label())
            }
            ListStatus::Loaded => format!(
                "Showing {}-{} of {} {}",
                state.first_item_index(),
                state.last_item_index(),
                state.total_items(),
                self.resource.label()
            ),
        }
    }

    fn adopt(&mut self, page: u64, envelope: ListEnvelope<T>) -> u64 {
        let ListEnvelope { data, pages, total } = envelope;
        let settled = self.controller.settle(page, total);
        if pages != 0 && pages != self.controller.total_pages() {
            debug!(
                resource = %self.resource,
                reported = pages,
                computed = self.controller.total_pages(),
                "backend page count disagrees with total; using total"
            );
        }
        info!(
            resource = %self.resource,
            page = settled,
            items = data.len(),
            total,
            "list slice loaded"
        );
        self.items = data;
        self.status = ListStatus::Loaded;
        settled
    }

    fn fail(&mut self, err: &SourceError) {
        warn!(resource = %self.resource, error = %err, "list fetch failed");
        counter!(METRIC_LIST_FETCH_FAILURES, "resource" => self.resource.path()).increment(1);
        self.items.clear();
        self.status = ListStatus::Failed {
            message: format!("No {} available right now.", self.resource.label()),
            detail: err.to_string(),
        };
    }
}
