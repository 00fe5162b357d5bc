//! Page controls for list views.

use askama::Template;
use serde::Serialize;

use crate::application::pagination::{PaginationController, WindowSlot};

use super::views::{TemplateRenderError, render_template};

const GAP_LABEL: &str = "…";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerLinkView {
    pub label: String,
    pub href: String,
    pub class: &'static str,
    pub current: bool,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PagerView {
    pub links: Vec<PagerLinkView>,
}

#[derive(Template)]
#[template(
    ext = "html",
    source = r#"<nav class="pager" aria-label="Pagination">
{%- for link in links %}
{%- if link.disabled %}<span class="{{ link.class }} is-disabled" aria-disabled="true">{{ link.label }}</span>
{%- else if link.current %}<span class="{{ link.class }} is-current" aria-current="page">{{ link.label }}</span>
{%- else %}<a class="{{ link.class }}" href="{{ link.href }}">{{ link.label }}</a>
{%- endif %}
{%- endfor %}</nav>"#
)]
struct PagerTemplate<'a> {
    links: &'a [PagerLinkView],
}

impl PagerView {
    /// Build controls for the controller's current window. Links point at
    /// `base_href` with `page` and `limit` query parameters appended.
    pub fn from_controller(
        controller: &PaginationController,
        width: usize,
        base_href: &str,
    ) -> Self {
        let window = controller.window(width);
        if window.is_empty() {
            return Self::default();
        }

        let current = controller.current_page();
        let limit = controller.state().items_per_page();
        let separator = if base_href.contains('?') { '&' } else { '?' };
        let href = |page: u64| format!("{base_href}{separator}page={page}&limit={limit}");

        let mut links = Vec::with_capacity(window.slots.len() + 2);
        links.push(PagerLinkView {
            label: "Previous".to_string(),
            href: href(current.saturating_sub(1).max(1)),
            class: "pager-step",
            current: false,
            disabled: !window.has_previous,
        });
        for slot in &window.slots {
            links.push(match *slot {
                WindowSlot::Page { number, current } => PagerLinkView {
                    label: number.to_string(),
                    href: href(number),
                    class: "pager-page",
                    current,
                    disabled: false,
                },
                WindowSlot::Gap => PagerLinkView {
                    label: GAP_LABEL.to_string(),
                    href: String::new(),
                    class: "pager-gap",
                    current: false,
                    disabled: true,
                },
            });
        }
        links.push(PagerLinkView {
            label: "Next".to_string(),
            href: href(current.saturating_add(1).min(controller.total_pages())),
            class: "pager-step",
            current: false,
            disabled: !window.has_next,
        });

        Self { links }
    }

    pub fn is_visible(&self) -> bool {
        !self.links.is_empty()
    }

    /// HTML for the controls; empty when the list fits on one page.
    pub fn render(&self) -> Result<String, TemplateRenderError> {
        if !self.is_visible() {
            return Ok(String::new());
        }
        render_template(
            &PagerTemplate { links: &self.links },
            "presentation::pager::render",
        )
    }
}
