//! Purchase line calculator.
//!
//! The `purchase` module derives the monetary amounts of a purchase or
//! purchase order document.  [`compute_line`] turns the raw fields of
//! one line into a [`PurchaseLine`]; [`compute_totals`] aggregates a
//! list of lines and applies the document level discount.
//!
//! Both functions are total.  Missing or non-numeric input counts as 0
//! and an empty line list yields all-zero totals.  Amounts are
//! accumulated at full precision; [`round_money`] is applied only when
//! a value is displayed.

use crate::models::{DiscountKind, DiscountSpec, DocumentTotals, LineInput, PurchaseLine};
use crate::numeric::coerce_number;
use tracing::trace;

/// Compute every derived amount of a single purchase line.
///
/// The absolute discount wins whenever it is greater than zero, even if
/// a percent discount is filled in too.  The percent is used only when
/// the amount is zero or absent.
pub fn compute_line(input: &LineInput) -> PurchaseLine {
    let line = PurchaseLine {
        item_name: input.item_name.clone(),
        unit: input.unit.clone(),
        quantity: coerce_number(&input.quantity),
        rate: coerce_number(&input.rate),
        discount_percent: coerce_number(&input.discount_percent),
        discount_amount: coerce_number(&input.discount_amount),
        cgst_percent: coerce_number(&input.cgst_percent),
        sgst_percent: coerce_number(&input.sgst_percent),
        igst_percent: coerce_number(&input.igst_percent),
        ..PurchaseLine::default()
    };
    derive(line)
}

/// Aggregate `lines` into the document footer.
///
/// Each line is recomputed from its own inputs, so stale derived
/// amounts on a line do not leak into the totals.  The overall discount
/// is taken once, after the taxes are summed, and never changes a
/// line's taxable amount.  A percent overall discount is a percent of
/// the sub total.
pub fn compute_totals(lines: &[PurchaseLine], overall: &DiscountSpec) -> DocumentTotals {
    let mut totals = lines
        .iter()
        .map(|line| derive(line.clone()))
        .fold(DocumentTotals::default(), |mut acc, line| {
            acc.sub_total += line.net_amount;
            acc.line_discount += line.effective_discount;
            acc.cgst_amt += line.cgst_amount;
            acc.sgst_amt += line.sgst_amount;
            acc.igst_amt += line.igst_amount;
            acc
        });

    totals.total_tax = totals.cgst_amt + totals.sgst_amt + totals.igst_amt;
    totals.overall_discount = overall_discount(overall, totals.sub_total);
    totals.grand_total = totals.sub_total + totals.total_tax - totals.overall_discount;

    trace!(
        lines = lines.len(),
        sub_total = totals.sub_total,
        grand_total = totals.grand_total,
        "computed document totals"
    );
    totals
}

/// Resolve the overall discount to an absolute amount.
pub fn overall_discount(spec: &DiscountSpec, sub_total: f64) -> f64 {
    let value = coerce_number(&spec.value);
    match spec.kind {
        DiscountKind::Absolute => value,
        DiscountKind::Percent => sub_total * value / 100.0,
    }
}

/// Round a monetary amount to 2 decimal places, halves away from zero.
pub fn round_money(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Fill in the derived amounts from the coerced inputs on `line`.
fn derive(mut line: PurchaseLine) -> PurchaseLine {
    line.net_amount = line.quantity * line.rate;
    line.effective_discount = if line.discount_amount > 0.0 {
        line.discount_amount
    } else {
        line.net_amount * line.discount_percent / 100.0
    };
    line.taxable_amount = line.net_amount - line.effective_discount;
    line.cgst_amount = line.taxable_amount * line.cgst_percent / 100.0;
    line.sgst_amount = line.taxable_amount * line.sgst_percent / 100.0;
    line.igst_amount = line.taxable_amount * line.igst_percent / 100.0;
    line.line_total =
        line.taxable_amount + line.cgst_amount + line.sgst_amount + line.igst_amount;
    line
}

impl PurchaseLine {
    /// Copy with every derived amount rounded for display.
    pub fn rounded(&self) -> PurchaseLine {
        PurchaseLine {
            net_amount: round_money(self.net_amount),
            effective_discount: round_money(self.effective_discount),
            taxable_amount: round_money(self.taxable_amount),
            cgst_amount: round_money(self.cgst_amount),
            sgst_amount: round_money(self.sgst_amount),
            igst_amount: round_money(self.igst_amount),
            line_total: round_money(self.line_total),
            ..self.clone()
        }
    }
}

impl DocumentTotals {
    /// Copy with every amount rounded for display.
    pub fn rounded(&self) -> DocumentTotals {
        DocumentTotals {
            sub_total: round_money(self.sub_total),
            line_discount: round_money(self.line_discount),
            cgst_amt: round_money(self.cgst_amt),
            sgst_amt: round_money(self.sgst_amt),
            igst_amt: round_money(self.igst_amt),
            total_tax: round_money(self.total_tax),
            overall_discount: round_money(self.overall_discount),
            grand_total: round_money(self.grand_total),
        }
    }
}
