//! Search and pagination over the activity feed.

use crate::types::TruckActivity;

pub const PAGE_SIZE: usize = 5;

/// Case-insensitive substring match against truck id or PO number. An empty
/// term keeps every row, original order preserved.
pub fn filter<'a>(log: &'a [TruckActivity], term: &str) -> Vec<&'a TruckActivity> {
    if term.is_empty() {
        return log.iter().collect();
    }
    let needle = term.to_lowercase();
    log.iter()
        .filter(|a| {
            a.truck_id.to_lowercase().contains(&needle)
                || a.po_number.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Total pages for `len` rows; 1 even when empty so page numbers always have
/// a valid home.
pub fn total_pages(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamp `page` into `[1, total_pages]` and slice out that page.
pub fn paginate<T>(rows: &[T], page: usize) -> (&[T], usize) {
    let page = page.clamp(1, total_pages(rows.len()));
    let start = (page - 1) * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(rows.len());
    (&rows[start.min(rows.len())..end], page)
}

/// View state for the activity table: the live search box plus the pager.
/// Changing the search term snaps the pager back to page 1.
#[derive(Debug, Default, Clone)]
pub struct ActivityViewModel {
    term: String,
    page: usize,
}

impl ActivityViewModel {
    pub fn new() -> Self {
        Self {
            term: String::new(),
            page: 1,
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    pub fn set_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.term {
            self.page = 1;
        }
        self.term = term;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Filter + paginate in one go; the stored page is re-clamped against
    /// the current filter result.
    pub fn current_page<'a>(&mut self, log: &'a [TruckActivity]) -> ActivityPage<'a> {
        let filtered = filter(log, &self.term);
        let total = total_pages(filtered.len());
        let (_, clamped) = paginate(&filtered, self.page());
        self.page = clamped;
        let start = (clamped - 1) * PAGE_SIZE;
        let items = filtered
            .into_iter()
            .skip(start)
            .take(PAGE_SIZE)
            .collect();
        ActivityPage {
            items,
            page: clamped,
            total_pages: total,
        }
    }
}

#[derive(Debug)]
pub struct ActivityPage<'a> {
    pub items: Vec<&'a TruckActivity>,
    pub page: usize,
    pub total_pages: usize,
}
