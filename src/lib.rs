//! Store Engine library crate.
//!
//! This crate holds the two pieces of logic the store administration
//! dashboard shares across its pages: the tabular view engine (search,
//! sort and paginate a list of records) and the purchase line
//! calculator (line amounts, taxes and document totals).  Pages call
//! `view::view` or `page::ListPage` for their tables and
//! `purchase::compute_line` / `purchase::compute_totals` for purchase
//! entry.  The same functions are served over HTTP by `api`.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod numeric;
pub mod page;
pub mod purchase;
pub mod record;
pub mod tax;
pub mod view;
