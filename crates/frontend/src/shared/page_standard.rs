//! Page category constants.
//!
//! Every page declares an HTML `id` in the format `{entity}--{category}`
//! (e.g. `"a002_product--list"`) and a `data-page-category` attribute with
//! one of the constants below. The `--` separator makes the entity name
//! searchable: copy the id from the DOM inspector, search for it, and you
//! land in `domain/a002_product/`.

/// List of records with search and row actions.
pub const PAGE_CAT_LIST: &str = "list";

/// Analytical dashboard.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

pub const ALL_CATEGORIES: &[&str] = &[PAGE_CAT_LIST, PAGE_CAT_DASHBOARD];

/// Validate that a page id matches the `{entity}--{category}` format
/// with a known category.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && ALL_CATEGORIES.contains(&category),
        None => false,
    }
}
