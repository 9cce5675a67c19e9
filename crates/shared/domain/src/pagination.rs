//! Page windowing shared by every list operation.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Pagination query parameters as sent by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::IntoParams),
    into_params(parameter_in = Query)
)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    /// 1-based page number
    #[serde(default = "default_page")]
    pub page: i64,
    /// Requested page size; capped at 10
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

fn default_page() -> i64 {
    DEFAULT_PAGE_NUMBER
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PageQuery {
    pub fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE)
    }
}

/// Window over a store of `total_items` records.
///
/// `page` is never validated: pages outside the data produce an empty item
/// set while the totals stay correct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page: i64,
    pub page_size: i64,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PageWindow {
    /// Clamp the page size and compute totals.
    pub fn new(total_items: u64, query: PageQuery) -> Self {
        let page_size = query.page_size.min(MAX_PAGE_SIZE);
        let total_pages = match u64::try_from(page_size) {
            Ok(size) if size > 0 => total_items.div_ceil(size),
            _ => 0,
        };

        Self {
            page: query.page,
            page_size,
            total_items,
            total_pages,
        }
    }

    /// Raw `(page - 1) * page_size` offset.
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// `(offset, limit)` to fetch, or `None` when the window holds no rows.
    pub fn fetch_range(&self) -> Option<(u64, u64)> {
        let offset = u64::try_from(self.offset()).ok()?;
        let limit = u64::try_from(self.page_size).ok()?;

        if self.page < 1 || limit == 0 || offset >= self.total_items {
            return None;
        }
        Some((offset, limit))
    }

    /// Attach fetched items to the window.
    pub fn into_page<T>(self, items: Vec<T>) -> Paginated<T> {
        Paginated {
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            items,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "openapi",
    derive(utoipa::ToSchema),
    aliases(
        CategoryPage = Paginated<crate::Category>,
        SubcategoryPage = Paginated<crate::Subcategory>,
        ContactPage = Paginated<crate::ContactResponse>
    )
)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub page: i64,
    pub page_size: i64,
    pub total_items: u64,
    pub total_pages: u64,
    pub items: Vec<T>,
}

impl<T> Paginated<T> {
    /// Convert every item, keeping the window metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            page: self.page,
            page_size: self.page_size,
            total_items: self.total_items,
            total_pages: self.total_pages,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}
