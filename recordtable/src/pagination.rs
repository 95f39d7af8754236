//! Pagination.
//!
//! A table pages its rows in one of two modes, fixed per configuration:
//!
//! - [`Pagination::Local`]: the table owns the page and page size and slices
//!   the filtered rows itself.
//! - [`Pagination::External`]: the caller owns every counter through a
//!   [`PageDescriptor`]. The table renders those numbers verbatim and only
//!   forwards change requests.

use std::fmt;
use std::ops::Range;

use serde::Deserialize;

/// Where a page clamp lands after the filtered row count shrinks below the
/// current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ClampPolicy {
    /// `max(total_pages - 1, 1)`: one page below the new last page.
    #[default]
    PreviousPage,
    /// `max(total_pages, 1)`: the new last page.
    LastPage,
}

/// A navigation control target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageTarget {
    First,
    Previous,
    Next,
    Last,
    /// A specific 1-based page.
    Page(usize),
}

/// Caller-owned pagination counters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageDescriptor {
    /// Current page, 1-based.
    pub page: usize,
    /// Items across all pages.
    pub total_items: usize,
    /// Requested rows per page.
    pub page_size: usize,
    /// Rows actually loaded for this page; less than `page_size` on a final
    /// partial page.
    pub loaded_page_size: usize,
    pub total_pages: usize,
    pub items_per_page_options: Vec<usize>,
}

/// Table-owned pagination counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalPaging {
    /// Current page, 1-based.
    pub page: usize,
    pub page_size: usize,
    pub items_per_page_options: Vec<usize>,
}

impl LocalPaging {
    pub fn new(page_size: usize, items_per_page_options: Vec<usize>) -> Self {
        Self {
            page: 1,
            page_size,
            items_per_page_options,
        }
    }
}

/// Pagination state of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pagination {
    Local(LocalPaging),
    External(PageDescriptor),
}

/// Number of pages needed for `item_count` items.
pub fn total_pages(item_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    item_count.div_ceil(page_size)
}

/// Page to land on when `page` is past `total_pages`. Pages in range are
/// returned unchanged.
pub fn clamp_page(page: usize, total_pages: usize, policy: ClampPolicy) -> usize {
    if page <= total_pages {
        return page.max(1);
    }
    match policy {
        ClampPolicy::PreviousPage => total_pages.saturating_sub(1).max(1),
        ClampPolicy::LastPage => total_pages.max(1),
    }
}

/// The "Showing X to Y items of Z" range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSummary {
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl fmt::Display for PageSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} items of {}",
            self.from, self.to, self.total
        )
    }
}

impl Pagination {
    /// Returns `true` when the caller owns the counters.
    pub fn is_external(&self) -> bool {
        matches!(self, Pagination::External(_))
    }

    /// Current page, 1-based.
    pub fn page(&self) -> usize {
        match self {
            Pagination::Local(local) => local.page,
            Pagination::External(desc) => desc.page,
        }
    }

    pub fn page_size(&self) -> usize {
        match self {
            Pagination::Local(local) => local.page_size,
            Pagination::External(desc) => desc.page_size,
        }
    }

    /// Page sizes offered by the page-size selector.
    pub fn items_per_page_options(&self) -> &[usize] {
        match self {
            Pagination::Local(local) => &local.items_per_page_options,
            Pagination::External(desc) => &desc.items_per_page_options,
        }
    }

    /// Item count across all pages. `filtered` is the locally filtered row
    /// count; external mode ignores it.
    pub fn total_items(&self, filtered: usize) -> usize {
        match self {
            Pagination::Local(_) => filtered,
            Pagination::External(desc) => desc.total_items,
        }
    }

    pub fn total_pages(&self, filtered: usize) -> usize {
        match self {
            Pagination::Local(local) => total_pages(filtered, local.page_size),
            Pagination::External(desc) => desc.total_pages,
        }
    }

    /// Whether the pagination block has anything to offer: more rows than fit
    /// on one page.
    pub fn has_multiple_pages(&self, filtered: usize) -> bool {
        self.total_items(filtered) > self.page_size()
    }

    /// Range of processed rows shown on the current page.
    ///
    /// In external mode the rows are already the caller's page; at most
    /// `page_size` of them are shown.
    pub fn slice_range(&self, filtered: usize) -> Range<usize> {
        match self {
            Pagination::Local(local) => {
                if local.page_size == 0 {
                    return 0..filtered;
                }
                let start = local.page.saturating_sub(1).saturating_mul(local.page_size);
                let start = start.min(filtered);
                let end = start.saturating_add(local.page_size).min(filtered);
                start..end
            }
            Pagination::External(desc) => {
                let end = if desc.page_size == 0 {
                    filtered
                } else {
                    desc.page_size.min(filtered)
                };
                0..end
            }
        }
    }

    /// Displayed item range.
    ///
    /// External mode counts `loaded_page_size` rows on the current page so a
    /// final partial page reports its real end.
    pub fn summary(&self, filtered: usize) -> PageSummary {
        let total = self.total_items(filtered);
        if total == 0 {
            return PageSummary {
                from: 0,
                to: 0,
                total: 0,
            };
        }
        let (shown, page_size) = match self {
            Pagination::Local(_) => (self.slice_range(filtered).len(), self.page_size()),
            Pagination::External(desc) => (desc.loaded_page_size, desc.page_size),
        };
        let offset = self.page().saturating_sub(1).saturating_mul(page_size);
        if shown == 0 {
            return PageSummary {
                from: offset,
                to: offset,
                total,
            };
        }
        PageSummary {
            from: offset + 1,
            to: offset + shown,
            total,
        }
    }

    /// Resolve a navigation target to a page, or `None` if the control is
    /// disabled (out of range, or already the current page).
    pub fn resolve(&self, target: PageTarget, filtered: usize) -> Option<usize> {
        let page = self.page();
        let last = self.total_pages(filtered);
        let candidate = match target {
            PageTarget::First => 1,
            PageTarget::Previous => page.checked_sub(1)?,
            PageTarget::Next => page + 1,
            PageTarget::Last => last,
            PageTarget::Page(n) => n,
        };
        (candidate >= 1 && candidate <= last && candidate != page).then_some(candidate)
    }

    /// Move a local table to `page`. External pagination is never mutated.
    /// Returns true if the page changed.
    pub(crate) fn set_local_page(&mut self, page: usize) -> bool {
        match self {
            Pagination::Local(local) if local.page != page => {
                local.page = page;
                true
            }
            _ => false,
        }
    }

    /// Apply a local page-size change, resetting to the first page.
    /// Returns true if anything changed.
    pub(crate) fn set_local_page_size(&mut self, page_size: usize) -> bool {
        match self {
            Pagination::Local(local) if page_size > 0 => {
                let changed = local.page_size != page_size || local.page != 1;
                local.page_size = page_size;
                local.page = 1;
                changed
            }
            _ => false,
        }
    }

    /// Clamp a local page after the filtered count changed. Returns the new
    /// page if it moved.
    pub(crate) fn reconcile(&mut self, filtered: usize, policy: ClampPolicy) -> Option<usize> {
        let Pagination::Local(local) = self else {
            return None;
        };
        let pages = total_pages(filtered, local.page_size);
        let clamped = clamp_page(local.page, pages, policy);
        if clamped == local.page {
            return None;
        }
        log::debug!(
            "[pagination] clamped page {} -> {} ({} pages)",
            local.page,
            clamped,
            pages
        );
        local.page = clamped;
        Some(clamped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(page: usize, page_size: usize) -> Pagination {
        Pagination::Local(LocalPaging {
            page,
            page_size,
            items_per_page_options: vec![10, 25],
        })
    }

    fn external() -> Pagination {
        Pagination::External(PageDescriptor {
            page: 2,
            total_items: 25,
            page_size: 10,
            loaded_page_size: 10,
            total_pages: 3,
            items_per_page_options: vec![10, 20],
        })
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_clamp_previous_page() {
        assert_eq!(clamp_page(3, 2, ClampPolicy::PreviousPage), 1);
        assert_eq!(clamp_page(5, 3, ClampPolicy::PreviousPage), 2);
        assert_eq!(clamp_page(2, 0, ClampPolicy::PreviousPage), 1);
        assert_eq!(clamp_page(2, 3, ClampPolicy::PreviousPage), 2);
    }

    #[test]
    fn test_clamp_last_page() {
        assert_eq!(clamp_page(3, 2, ClampPolicy::LastPage), 2);
        assert_eq!(clamp_page(3, 0, ClampPolicy::LastPage), 1);
    }

    #[test]
    fn test_local_slice_and_summary() {
        let pagination = local(3, 10);
        assert_eq!(pagination.slice_range(25), 20..25);
        assert_eq!(
            pagination.summary(25).to_string(),
            "Showing 21 to 25 items of 25"
        );
        assert_eq!(local(1, 10).summary(0).to_string(), "Showing 0 to 0 items of 0");
    }

    #[test]
    fn test_external_summary_uses_loaded_page_size() {
        assert_eq!(
            external().summary(7).to_string(),
            "Showing 11 to 20 items of 25"
        );
        let Pagination::External(mut desc) = external() else {
            unreachable!()
        };
        desc.page = 3;
        desc.loaded_page_size = 5;
        assert_eq!(
            Pagination::External(desc).summary(5).to_string(),
            "Showing 21 to 25 items of 25"
        );
    }

    #[test]
    fn test_resolve_targets() {
        let pagination = local(1, 10);
        assert_eq!(pagination.resolve(PageTarget::First, 25), None);
        assert_eq!(pagination.resolve(PageTarget::Previous, 25), None);
        assert_eq!(pagination.resolve(PageTarget::Next, 25), Some(2));
        assert_eq!(pagination.resolve(PageTarget::Last, 25), Some(3));
        assert_eq!(pagination.resolve(PageTarget::Page(4), 25), None);
        assert_eq!(pagination.resolve(PageTarget::Page(0), 25), None);

        let pagination = external();
        assert_eq!(pagination.resolve(PageTarget::Previous, 0), Some(1));
        assert_eq!(pagination.resolve(PageTarget::Next, 0), Some(3));
    }

    #[test]
    fn test_reconcile_only_touches_local() {
        let mut pagination = local(3, 10);
        assert_eq!(pagination.reconcile(12, ClampPolicy::PreviousPage), Some(1));
        assert_eq!(pagination.page(), 1);

        let mut pagination = external();
        assert_eq!(pagination.reconcile(0, ClampPolicy::PreviousPage), None);
        assert_eq!(pagination.page(), 2);
        assert!(!pagination.set_local_page(1));
        assert!(!pagination.set_local_page_size(50));
        assert_eq!(pagination, external());
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut pagination = local(3, 10);
        assert!(pagination.set_local_page_size(25));
        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.page_size(), 25);
        assert!(!pagination.set_local_page_size(0));
    }

    #[test]
    fn test_has_multiple_pages() {
        assert!(!local(1, 10).has_multiple_pages(10));
        assert!(local(1, 10).has_multiple_pages(11));
        assert!(external().has_multiple_pages(0));
    }
}
