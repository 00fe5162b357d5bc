#![deny(clippy::all, clippy::pedantic)]

use std::num::NonZeroU64;

use labelsite::application::listing::{ListStatus, ListView};
use labelsite::config::{self, ListingSettings};
use labelsite::domain::resources::Resource;
use labelsite::presentation::notice::Notice;
use labelsite::presentation::pager::PagerView;
use labelsite_api_types::{BlogPost, GalleryItem, Quote, Service, Testimonial};
use serde::{Serialize, de::DeserializeOwned};

use crate::args::ListCmd;
use crate::client::{CliError, Ctx};
use crate::print::{print_json, print_json_line};

#[derive(Serialize)]
struct ListOutput<'a, T> {
    resource: Resource,
    page: u64,
    pages: u64,
    total: u64,
    summary: String,
    items: &'a [T],
    #[serde(skip_serializing_if = "Option::is_none")]
    pager: Option<String>,
}

impl<'a, T> ListOutput<'a, T>
where
    T: DeserializeOwned + Send + 'static,
{
    fn new(view: &'a ListView<T>, pager: Option<String>) -> Self {
        let state = view.controller().state();
        Self {
            resource: view.resource(),
            page: state.current_page(),
            pages: state.total_pages(),
            total: state.total_items(),
            summary: view.summary(),
            items: view.items(),
            pager,
        }
    }
}

pub async fn handle(
    ctx: &Ctx,
    listing: &ListingSettings,
    resource: Resource,
    cmd: ListCmd,
) -> Result<(), CliError> {
    match resource {
        Resource::Blogs => run::<BlogPost>(ctx, listing, resource, cmd).await,
        Resource::Services => run::<Service>(ctx, listing, resource, cmd).await,
        Resource::Gallery => run::<GalleryItem>(ctx, listing, resource, cmd).await,
        Resource::Testimonials => run::<Testimonial>(ctx, listing, resource, cmd).await,
        Resource::Quotes => run::<Quote>(ctx, listing, resource, cmd).await,
    }
}

async fn run<T>(
    ctx: &Ctx,
    listing: &ListingSettings,
    resource: Resource,
    cmd: ListCmd,
) -> Result<(), CliError>
where
    T: DeserializeOwned + Serialize + Send + 'static,
{
    match cmd {
        ListCmd::List {
            page,
            limit,
            html,
            href,
        } => {
            let mut view = ListView::<T>::new(resource, per_page(limit, listing)?);
            view.load(ctx, u64::try_from(page).unwrap_or(1).max(1)).await;
            ensure_loaded(&view)?;

            let pager = if html {
                let base = href.unwrap_or_else(|| format!("/{}", resource.path()));
                Some(PagerView::from_controller(view.controller(), listing.window, &base).render()?)
            } else {
                None
            };
            print_json(&ListOutput::new(&view, pager))?;
            eprintln!("{}", Notice::info(view.summary()));
            Ok(())
        }
        ListCmd::Walk { limit } => {
            let mut view = ListView::<T>::new(resource, per_page(limit, listing)?);
            view.load(ctx, 1).await;
            loop {
                ensure_loaded(&view)?;
                print_json_line(&ListOutput::new(&view, None))?;
                if view.next(ctx).await.is_none() {
                    break;
                }
            }
            eprintln!(
                "{}",
                Notice::success(format!(
                    "Walked {} pages of {}",
                    view.controller().total_pages(),
                    resource.label()
                ))
            );
            Ok(())
        }
    }
}

fn per_page(limit: Option<u64>, listing: &ListingSettings) -> Result<NonZeroU64, CliError> {
    match limit {
        Some(value) => config::page_size("--limit", value)
            .map_err(|err| CliError::InvalidInput(err.to_string())),
        None => Ok(listing.per_page),
    }
}

fn ensure_loaded<T>(view: &ListView<T>) -> Result<(), CliError>
where
    T: DeserializeOwned + Send + 'static,
{
    if let ListStatus::Failed { message, detail } = view.status() {
        eprintln!("{}", Notice::error(message.clone()));
        return Err(CliError::Fetch {
            resource: view.resource(),
            detail: detail.clone(),
        });
    }
    Ok(())
}
