//! List page state.
//!
//! A [`ListPage`] is what every list screen of the dashboard (items,
//! vendors, purchase orders, requisitions, issues, returns, reports)
//! keeps between renders: its records and one [`ViewParams`].  The
//! view engine is stateless, so the rules that depend on the previous
//! state live here:
//!
//! * changing the search term or the page size goes back to page 1;
//! * clicking the sorted column again flips the direction, clicking a
//!   different column sorts it ascending;
//! * jumping to a page stores it as asked.  Clamping after the result
//!   set shrinks is an explicit [`ListPage::clamp_page`] call.

use crate::models::{SortDirection, ViewParams, ViewResult};
use crate::record::Record;
use crate::view::{total_pages, view};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ListPage<R> {
    records: Vec<R>,
    params: ViewParams,
}

impl<R: Record + Clone> ListPage<R> {
    /// A page showing the first `page_size` records, unsorted and
    /// unfiltered.
    pub fn new<I, S>(records: Vec<R>, search_fields: I, page_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            records,
            params: ViewParams {
                search_fields: search_fields.into_iter().map(Into::into).collect(),
                page_size,
                ..ViewParams::default()
            },
        }
    }

    pub fn params(&self) -> &ViewParams {
        &self.params
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn render(&self) -> ViewResult<R> {
        view(&self.records, &self.params)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.params.search_term = term.into();
        self.params.page = 1;
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.params.page_size = page_size;
        self.params.page = 1;
    }

    /// Header click on `key`.
    pub fn toggle_sort(&mut self, key: &str) {
        if self.params.sort_key.as_deref() == Some(key) {
            self.params.sort_direction = self.params.sort_direction.flipped();
        } else {
            self.params.sort_key = Some(key.to_string());
            self.params.sort_direction = SortDirection::Asc;
        }
        debug!(
            sort_key = key,
            direction = ?self.params.sort_direction,
            "sort toggled"
        );
    }

    /// Stores `page` as given, even when it is past the last page.
    pub fn go_to_page(&mut self, page: usize) {
        self.params.page = page;
    }

    pub fn next_page(&mut self) {
        if self.params.page < self.total_pages() {
            self.params.page += 1;
        }
    }

    pub fn previous_page(&mut self) {
        if self.params.page > 1 {
            self.params.page -= 1;
        }
    }

    /// Pull the current page back into `[1, total_pages]`.
    pub fn clamp_page(&mut self) {
        let last = self.total_pages();
        let clamped = self.params.page.clamp(1, last);
        if clamped != self.params.page {
            debug!(from = self.params.page, to = clamped, "page clamped");
            self.params.page = clamped;
        }
    }

    /// Swap in a new backing collection, e.g. after a record was added
    /// or edited.  Search, sort and page are left alone.
    pub fn replace_records(&mut self, records: Vec<R>) {
        self.records = records;
    }

    pub fn total_pages(&self) -> usize {
        total_pages(&self.records, &self.params)
    }
}
