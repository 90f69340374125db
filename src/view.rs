//! Tabular view engine.
//!
//! The `view` module turns a collection of records and a
//! [`ViewParams`] into the [`ViewResult`] a list page renders.  The
//! pipeline always runs in the same order:
//!
//! 1. filter by the search term over the search fields,
//! 2. stable-sort by the sort key (when one is set),
//! 3. cut out the requested page.
//!
//! The engine is a pure function.  It never mutates its input and it
//! never corrects the requested page: asking for a page past the end
//! yields an empty slice with valid bookkeeping.  Keeping the page in
//! range is the caller's job (see [`crate::page::ListPage`]).

use crate::models::{SortDirection, ViewParams, ViewResult};
use crate::record::Record;
use std::cmp::Ordering;
use tracing::trace;

/// Derive the rendered slice of `records` for `params`.
///
/// A `page` or `page_size` of 0 is treated as 1, and the result
/// reports the page and page size the slice was actually cut with.
pub fn view<R: Record + Clone>(records: &[R], params: &ViewParams) -> ViewResult<R> {
    let page = params.page.max(1);
    let page_size = params.page_size.max(1);

    let mut matched = filter(records, params);
    if let Some(key) = params.sort_key.as_deref() {
        matched = sort(matched, key, params.sort_direction);
    }

    let total_matched = matched.len();
    let total_pages = page_count(total_matched, page_size);
    let start_offset = (page - 1).saturating_mul(page_size);
    let page_records: Vec<R> = matched
        .into_iter()
        .skip(start_offset)
        .take(page_size)
        .cloned()
        .collect();

    let (start_index, end_index) = if total_matched == 0 {
        (0, 0)
    } else {
        (
            start_offset.saturating_add(1),
            start_offset.saturating_add(page_records.len()),
        )
    };

    trace!(
        total = records.len(),
        total_matched,
        page,
        page_size,
        rendered = page_records.len(),
        "derived table view"
    );

    ViewResult {
        page_records,
        total_matched,
        total_pages,
        start_index,
        end_index,
        page,
        page_size,
    }
}

/// Number of pages the search in `params` produces over `records`.
/// Sorting never changes the count, so it is skipped.
pub fn total_pages<R: Record>(records: &[R], params: &ViewParams) -> usize {
    page_count(filter(records, params).len(), params.page_size.max(1))
}

fn page_count(total_matched: usize, page_size: usize) -> usize {
    total_matched.div_ceil(page_size).max(1)
}

fn filter<'a, R: Record>(records: &'a [R], params: &ViewParams) -> Vec<&'a R> {
    if params.search_term.is_empty() {
        return records.iter().collect();
    }
    let needle = params.search_term.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(*record, &needle, &params.search_fields))
        .collect()
}

/// `needle` must already be lowercase.
fn matches_search<R: Record>(record: &R, needle: &str, fields: &[String]) -> bool {
    fields.iter().any(|field| {
        record
            .field_text(field)
            .map(|text| text.to_lowercase().contains(needle))
            .unwrap_or(false)
    })
}

fn sort<'a, R: Record>(matched: Vec<&'a R>, key: &str, direction: SortDirection) -> Vec<&'a R> {
    let mut keyed: Vec<(String, &'a R)> = matched
        .into_iter()
        .map(|record| {
            let text = record
                .field_text(key)
                .map(|t| t.to_lowercase())
                .unwrap_or_default();
            (text, record)
        })
        .collect();
    // `sort_by` is stable and the direction only reverses the
    // comparison, so ties keep their filtered order either way.
    keyed.sort_by(|a, b| {
        let ord: Ordering = a.0.cmp(&b.0);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    keyed.into_iter().map(|(_, record)| record).collect()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::{json, Value};

    // -- Strategy helpers --

    fn arb_rows() -> impl Strategy<Value = Vec<Value>> {
        prop::collection::vec("[a-cA-C]{0,3}", 0..40).prop_map(|names| {
            names
                .into_iter()
                .enumerate()
                .map(|(i, name)| json!({"id": i, "name": name}))
                .collect()
        })
    }

    fn arb_direction() -> impl Strategy<Value = SortDirection> {
        prop_oneof![Just(SortDirection::Asc), Just(SortDirection::Desc)]
    }

    fn ids(rows: &[Value]) -> Vec<u64> {
        rows.iter().filter_map(|r| r["id"].as_u64()).collect()
    }

    fn search(term: &str, sorted: bool, direction: SortDirection, page_size: usize) -> ViewParams {
        ViewParams {
            search_term: term.to_string(),
            search_fields: vec!["name".into()],
            sort_key: sorted.then(|| "name".to_string()),
            sort_direction: direction,
            page: 1,
            page_size,
        }
    }

    proptest! {
        /// No search, no sort and a page large enough to hold every row
        /// hands the rows back untouched.
        #[test]
        fn unfiltered_view_is_identity(rows in arb_rows()) {
            let p = search("", false, SortDirection::Asc, rows.len().max(1));
            prop_assert_eq!(view(&rows, &p).page_records, rows);
        }

        /// Rows with equal sort keys keep their filtered order.
        #[test]
        fn sort_is_stable(rows in arb_rows(), term in "[abc]?", dir in arb_direction()) {
            let p = search(&term, true, dir, 1000);
            let sorted = view(&rows, &p).page_records;
            for pair in sorted.windows(2) {
                let a = pair[0]["name"].as_str().unwrap_or_default().to_lowercase();
                let b = pair[1]["name"].as_str().unwrap_or_default().to_lowercase();
                if a == b {
                    prop_assert!(pair[0]["id"].as_u64() < pair[1]["id"].as_u64());
                }
            }
        }

        /// Walking every page reproduces the full filtered, sorted set.
        #[test]
        fn pages_cover_the_filtered_set(
            rows in arb_rows(),
            term in "[abc]?",
            sorted in any::<bool>(),
            dir in arb_direction(),
            page_size in 1usize..12,
        ) {
            let whole = view(&rows, &search(&term, sorted, dir, usize::MAX)).page_records;
            let mut p = search(&term, sorted, dir, page_size);
            let total = view(&rows, &p).total_pages;
            let mut walked = Vec::new();
            for page in 1..=total {
                p.page = page;
                walked.extend(view(&rows, &p).page_records);
            }
            prop_assert_eq!(ids(&walked), ids(&whole));
        }

        /// A bigger page never needs more pages.
        #[test]
        fn total_pages_shrinks_with_page_size(rows in arb_rows(), small in 1usize..10, extra in 0usize..10) {
            let narrow = search("", false, SortDirection::Asc, small);
            let wide = search("", false, SortDirection::Asc, small + extra);
            prop_assert!(total_pages(&rows, &wide) <= total_pages(&rows, &narrow));
        }

        /// Any page and page size gives a well-formed result.
        #[test]
        fn extreme_pages_never_panic(
            rows in arb_rows(),
            page in any::<usize>(),
            page_size in prop_oneof![0usize..12, Just(usize::MAX), any::<usize>()],
        ) {
            let mut p = search("", false, SortDirection::Asc, page_size);
            p.page = page;
            let result = view(&rows, &p);
            prop_assert!(result.page_records.len() <= result.page_size);
            prop_assert!(result.start_index <= result.end_index.saturating_add(1));
            prop_assert!(result.total_pages >= 1);
            prop_assert_eq!(result.page, page.max(1));
            prop_assert_eq!(result.page_size, page_size.max(1));
        }

        /// Narrowing the search never adds pages.
        #[test]
        fn total_pages_shrinks_with_matches(rows in arb_rows(), term in "[abc]{1,2}", page_size in 1usize..8) {
            let broad = search(&term[..1], false, SortDirection::Asc, page_size);
            let narrow = search(&term, false, SortDirection::Asc, page_size);
            prop_assert!(view(&rows, &narrow).total_matched <= view(&rows, &broad).total_matched);
            prop_assert!(total_pages(&rows, &narrow) <= total_pages(&rows, &broad));
        }
    }
}
