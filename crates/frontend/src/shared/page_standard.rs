//! Page metadata conventions.
//!
//! Every page root carries an HTML `id` of the form `{entity}--{category}`
//! (e.g. `"d100_overview--dashboard"`) and a `data-page-category` attribute.
//! Copying the id from the DOM inspector into a code search lands in the
//! module that renders it.

/// Analytical dashboard / chart view.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}
