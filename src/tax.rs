//! GST rates and tax slabs.
//!
//! Purchase lines carry three tax percents (CGST, SGST and IGST).  In
//! practice a purchase form picks one GST slab and splits it: a supply
//! within the state is taxed half as CGST and half as SGST, a supply
//! across states is taxed entirely as IGST.  The `tax` module provides
//! that split and the list of slabs offered to the form, optionally
//! loaded from a JSON file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{info, warn};

/// Where the goods are supplied relative to the buyer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyKind {
    /// Same state: CGST + SGST.
    IntraState,
    /// Different states: IGST.
    InterState,
}

/// The three tax percents applied to a purchase line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxRates {
    pub cgst_percent: f64,
    pub sgst_percent: f64,
    pub igst_percent: f64,
}

impl TaxRates {
    /// Split a GST rate for the given kind of supply.
    pub fn from_gst(gst_rate: f64, kind: SupplyKind) -> Self {
        match kind {
            SupplyKind::IntraState => Self {
                cgst_percent: gst_rate / 2.0,
                sgst_percent: gst_rate / 2.0,
                igst_percent: 0.0,
            },
            SupplyKind::InterState => Self {
                cgst_percent: 0.0,
                sgst_percent: 0.0,
                igst_percent: gst_rate,
            },
        }
    }

    pub fn total_percent(&self) -> f64 {
        self.cgst_percent + self.sgst_percent + self.igst_percent
    }
}

/// A named GST rate offered in the purchase form's tax picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaxSlab {
    pub name: String,
    pub gst_rate: f64,
}

impl TaxSlab {
    pub fn rates(&self, kind: SupplyKind) -> TaxRates {
        TaxRates::from_gst(self.gst_rate, kind)
    }
}

/// The standard GST slabs: 0, 5, 12, 18 and 28 percent.
pub fn default_slabs() -> Vec<TaxSlab> {
    [0.0, 5.0, 12.0, 18.0, 28.0]
        .into_iter()
        .map(|rate| TaxSlab {
            name: format!("GST {}%", rate),
            gst_rate: rate,
        })
        .collect()
}

/// Load tax slabs from a JSON file holding an array of slabs.
///
/// A missing file is not an error; the default slabs are returned
/// instead.  A file that exists but does not parse is an error, and so
/// is a slab with a negative rate.
pub fn load_tax_slabs(path: &Path) -> Result<Vec<TaxSlab>> {
    if !path.is_file() {
        warn!(path = %path.display(), "tax slab file not found, using default slabs");
        return Ok(default_slabs());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read tax slabs from {}", path.display()))?;
    let slabs: Vec<TaxSlab> = serde_json::from_str(&data)
        .with_context(|| format!("failed to parse tax slabs in {}", path.display()))?;
    if let Some(bad) = slabs.iter().find(|s| s.gst_rate < 0.0) {
        anyhow::bail!("tax slab {:?} has a negative rate", bad.name);
    }
    info!(path = %path.display(), count = slabs.len(), "loaded tax slabs");
    Ok(slabs)
}
