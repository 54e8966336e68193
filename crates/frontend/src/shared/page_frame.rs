//! PageFrame: root wrapper for a page.
//!
//! Sets the `id` / `data-page-category` pair described in
//! [`page_standard`](super::page_standard) and the matching BEM class.

use super::page_standard::*;
use leptos::prelude::*;

/// `page`, plus `page--dashboard` for dashboards, plus `class`
pub fn page_class(category: &str, class: &str) -> String {
    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    debug_assert!(is_valid_page_id(page_id), "bad page id: {page_id}");

    view! {
        <div
            id=page_id
            class=page_class(category, class)
            data-page-category=category
        >
            {children()}
        </div>
    }
}
