//! Data models for the Store Engine.
//!
//! The `models` module defines the serialisable request and response
//! types shared by the tabular view engine and the purchase line
//! calculator.  Field names are serialised in camelCase so the types
//! match the JSON shapes the dashboard pages already exchange.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Direction in which a sorted column is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest value first.
    #[default]
    Asc,
    /// Largest value first.
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Everything a list page needs to ask for one rendered slice of its
/// records: the search box, the sorted column and the pager position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewParams {
    /// Free text typed into the search box.  Matching is a
    /// case-insensitive substring test.
    pub search_term: String,
    /// Fields consulted by the search, in order.
    pub search_fields: Vec<String>,
    /// Column to sort by.  When absent the filtered records keep their
    /// original relative order.
    pub sort_key: Option<String>,
    /// Direction of the sort.  Ignored when `sort_key` is absent.
    pub sort_direction: SortDirection,
    /// 1-based page number.
    pub page: usize,
    /// Number of records per page.
    pub page_size: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_fields: Vec::new(),
            sort_key: None,
            sort_direction: SortDirection::Asc,
            page: 1,
            page_size: 10,
        }
    }
}

/// The slice of records to render plus the bookkeeping a pager control
/// needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewResult<R> {
    /// At most `page_size` records, in display order.
    pub page_records: Vec<R>,
    /// Number of records that survived the search filter.
    pub total_matched: usize,
    /// `ceil(total_matched / page_size)`, never less than 1.
    pub total_pages: usize,
    /// 1-based index of the first displayed record, 0 when nothing matched.
    pub start_index: usize,
    /// 1-based index of the last displayed record, 0 when nothing matched.
    pub end_index: usize,
    /// The page the slice was cut from (a requested 0 reads as 1).
    pub page: usize,
    /// The page size the slice was cut with (a requested 0 reads as 1).
    pub page_size: usize,
}

impl<R> ViewResult<R> {
    /// Pager caption, e.g. `Showing 1 to 10 of 25 entries`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.start_index, self.end_index, self.total_matched
        )
    }

    /// Whether the pager's "previous" button is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether the pager's "next" button is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Raw purchase line fields as the purchase entry form holds them.
///
/// Every numeric field is kept as the JSON value the form produced (a
/// number, a numeric string, an empty string, `null` or nothing at
/// all).  The calculator coerces them with
/// [`coerce_number`](crate::numeric::coerce_number).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LineInput {
    pub item_name: Option<String>,
    pub unit: Option<String>,
    pub quantity: Value,
    pub rate: Value,
    pub discount_percent: Value,
    /// Absolute discount.  When greater than zero it replaces
    /// `discount_percent` entirely.
    pub discount_amount: Value,
    pub cgst_percent: Value,
    pub sgst_percent: Value,
    pub igst_percent: Value,
}

impl LineInput {
    pub fn new(quantity: impl Into<Value>, rate: impl Into<Value>) -> Self {
        Self {
            quantity: quantity.into(),
            rate: rate.into(),
            ..Self::default()
        }
    }

    pub fn with_item(mut self, item_name: impl Into<String>, unit: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self.unit = Some(unit.into());
        self
    }

    pub fn with_discount_percent(mut self, percent: impl Into<Value>) -> Self {
        self.discount_percent = percent.into();
        self
    }

    pub fn with_discount_amount(mut self, amount: impl Into<Value>) -> Self {
        self.discount_amount = amount.into();
        self
    }

    pub fn with_taxes(
        mut self,
        cgst: impl Into<Value>,
        sgst: impl Into<Value>,
        igst: impl Into<Value>,
    ) -> Self {
        self.cgst_percent = cgst.into();
        self.sgst_percent = sgst.into();
        self.igst_percent = igst.into();
        self
    }
}

/// A computed purchase line: the coerced inputs together with every
/// derived monetary amount.  Derived amounts are kept at full
/// precision; use [`PurchaseLine::rounded`] for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PurchaseLine {
    pub item_name: Option<String>,
    pub unit: Option<String>,
    pub quantity: f64,
    pub rate: f64,
    pub discount_percent: f64,
    pub discount_amount: f64,
    pub cgst_percent: f64,
    pub sgst_percent: f64,
    pub igst_percent: f64,
    /// `quantity * rate`.
    pub net_amount: f64,
    /// The discount actually applied to this line.
    pub effective_discount: f64,
    /// `net_amount - effective_discount`.
    pub taxable_amount: f64,
    pub cgst_amount: f64,
    pub sgst_amount: f64,
    pub igst_amount: f64,
    /// Taxable amount plus all three taxes.
    pub line_total: f64,
}

/// How a document level discount is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    #[default]
    Absolute,
    /// Percent of the document sub total.
    Percent,
}

/// The overall discount typed into the totals footer of a purchase
/// document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountSpec {
    #[serde(rename = "type", default)]
    pub kind: DiscountKind,
    #[serde(default)]
    pub value: Value,
}

impl DiscountSpec {
    pub fn absolute(value: impl Into<Value>) -> Self {
        Self {
            kind: DiscountKind::Absolute,
            value: value.into(),
        }
    }

    pub fn percent(value: impl Into<Value>) -> Self {
        Self {
            kind: DiscountKind::Percent,
            value: value.into(),
        }
    }
}

/// Document level summary shown under the purchase lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentTotals {
    /// Sum of every line's net amount.
    pub sub_total: f64,
    /// Sum of every line's own discount.  Informational only; it is not
    /// part of `grand_total`.
    pub line_discount: f64,
    pub cgst_amt: f64,
    pub sgst_amt: f64,
    pub igst_amt: f64,
    pub total_tax: f64,
    /// The overall discount resolved to an absolute amount.
    pub overall_discount: f64,
    /// `sub_total + total_tax - overall_discount`.
    pub grand_total: f64,
}
