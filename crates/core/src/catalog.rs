//! Work catalog view-model.
//!
//! [`compute_catalog_view`] turns the full list of works plus the visitor's
//! filter, sort and page selection into the page of works to display and the
//! filter option lists. It is pure and cheap enough to recompute on every
//! request. [`CatalogSession`] is the small stateful shell around it that
//! tracks the current selection the way the catalog page does.

use serde::{Deserialize, Serialize};

use crate::language::display_name;
use crate::ordering::SortMode;
use crate::work::WorkRecord;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Works per page in the catalog grid.
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Upper bound for a caller-supplied page size.
pub const MAX_PAGE_SIZE: usize = 50;

// ---------------------------------------------------------------------------
// Filter options
// ---------------------------------------------------------------------------

/// One entry of a filter dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    fn from_tag(tag: &str) -> Self {
        Self {
            value: tag.to_string(),
            label: display_name(tag).to_string(),
        }
    }
}

/// Distinct categories and technologies present in a set of works.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub categories: Vec<FilterOption>,
    pub technologies: Vec<FilterOption>,
}

/// Collect the distinct non-empty categories and technology tags, in the
/// order they are first seen.
pub fn build_filter_options(works: &[WorkRecord]) -> FilterOptions {
    let mut options = FilterOptions::default();

    for work in works {
        if let Some(category) = work.category.as_deref().filter(|c| !c.is_empty()) {
            push_distinct(&mut options.categories, category);
        }
        for tag in work.languages.iter().filter_map(|r| r.tag()) {
            if !tag.is_empty() {
                push_distinct(&mut options.technologies, tag);
            }
        }
    }

    options
}

fn push_distinct(list: &mut Vec<FilterOption>, value: &str) {
    if !list.iter().any(|o| o.value == value) {
        list.push(FilterOption::from_tag(value));
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Active filter selection. `None` (or an empty string) means "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilters {
    pub category: Option<String>,
    pub technology: Option<String>,
}

impl CatalogFilters {
    pub fn matches(&self, work: &WorkRecord) -> bool {
        let category_ok = match non_empty(&self.category) {
            None => true,
            Some(selected) => work.category.as_deref() == Some(selected),
        };
        let technology_ok = match non_empty(&self.technology) {
            None => true,
            Some(selected) => work.has_technology(selected),
        };
        category_ok && technology_ok
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Full input of one catalog computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    pub filters: CatalogFilters,
    pub sort: SortMode,
    /// 1-based; clamped into range.
    pub page: usize,
    pub page_size: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            filters: CatalogFilters::default(),
            sort: SortMode::default(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// The displayable result of a catalog computation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogView<'a> {
    pub page_items: Vec<&'a WorkRecord>,
    /// The page actually shown after clamping.
    pub page: usize,
    pub page_size: usize,
    /// `0` when nothing matches the filters.
    pub total_pages: usize,
    /// Number of works matching the filters, across all pages.
    pub total_count: usize,
    pub category_options: Vec<FilterOption>,
    pub technology_options: Vec<FilterOption>,
}

/// Number of pages needed for `total` items.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Clamp a 1-based page number into `[1, total_pages]`. With no pages the
/// result is `1`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Filter, sort and paginate `works`, and derive the filter options.
///
/// Filter options are always built from the unfiltered set so the dropdowns
/// keep offering every category and technology.
pub fn compute_catalog_view<'a>(works: &'a [WorkRecord], query: &CatalogQuery) -> CatalogView<'a> {
    let page_size = query.page_size.clamp(1, MAX_PAGE_SIZE);

    let mut matching: Vec<&WorkRecord> = works.iter().filter(|w| query.filters.matches(w)).collect();
    let compare = query.sort.comparator();
    matching.sort_by(|a, b| compare(a, b));

    let total_count = matching.len();
    let total_pages = page_count(total_count, page_size);
    let page = clamp_page(query.page, total_pages);

    let page_items: Vec<&WorkRecord> = matching
        .into_iter()
        .skip((page - 1) * page_size)
        .take(page_size)
        .collect();

    let options = build_filter_options(works);

    CatalogView {
        page_items,
        page,
        page_size,
        total_pages,
        total_count,
        category_options: options.categories,
        technology_options: options.technologies,
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Current catalog selection of one visitor.
///
/// Changing either filter sends the visitor back to page 1. Changing the
/// sort mode keeps the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSession {
    query: CatalogQuery,
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl CatalogSession {
    pub fn new(page_size: usize) -> Self {
        Self {
            query: CatalogQuery {
                page_size,
                ..CatalogQuery::default()
            },
        }
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.query.page
    }

    pub fn set_category(&mut self, category: Option<String>) {
        if self.query.filters.category != category {
            self.query.filters.category = category;
            self.query.page = 1;
        }
    }

    pub fn set_technology(&mut self, technology: Option<String>) {
        if self.query.filters.technology != technology {
            self.query.filters.technology = technology;
            self.query.page = 1;
        }
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
    }

    pub fn set_page(&mut self, page: usize) {
        self.query.page = page.max(1);
    }

    pub fn clear_filters(&mut self) {
        self.set_category(None);
        self.set_technology(None);
    }

    /// Compute the view for `works` and remember the clamped page.
    pub fn view<'a>(&mut self, works: &'a [WorkRecord]) -> CatalogView<'a> {
        let view = compute_catalog_view(works, &self.query);
        self.query.page = view.page;
        view
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
