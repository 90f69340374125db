//! In-memory store collections.
//!
//! The dashboard works entirely on mock data.  The `catalog` module
//! generates the patient, item, vendor and purchase order lists the list pages
//! show, deterministically so that every run (and every test) sees the
//! same rows.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

/// A table row as a flat field-name-to-value mapping.
pub type Row = Map<String, Value>;

/// The collections a list page can browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Patients,
    Items,
    Vendors,
    PurchaseOrders,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Patients,
        Collection::Items,
        Collection::Vendors,
        Collection::PurchaseOrders,
    ];

    /// Parse the URL name of a collection (`patients`, `items`, `vendors`,
    /// `purchase-orders` or `purchase_orders`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "patients" => Some(Collection::Patients),
            "items" => Some(Collection::Items),
            "vendors" => Some(Collection::Vendors),
            "purchase-orders" | "purchase_orders" => Some(Collection::PurchaseOrders),
            _ => None,
        }
    }

    /// Fields the search box of this collection's page looks at.
    pub fn search_fields(self) -> &'static [&'static str] {
        match self {
            Collection::Patients => &["uhid", "name", "ward"],
            Collection::Items => &["id", "name", "category"],
            Collection::Vendors => &["id", "name", "city", "contact"],
            Collection::PurchaseOrders => &["id", "vendor", "status"],
        }
    }
}

const PATIENT_NAMES: &[&str] = &[
    "Aarav Shah", "Bhavna Iyer", "Chetan Rao", "Divya Menon", "Eshan Kapoor",
    "Farah Khan", "Gaurav Joshi", "Harini Nair", "Ishaan Verma", "Jaya Pillai",
    "Kunal Desai", "Lata Kulkarni", "Mohan Reddy", "Nisha Gupta", "Omkar Patil",
    "Pooja Sinha", "Qasim Ali", "Rhea Bose", "Sameer Jain", "Tara Das",
    "Uday Kumar", "Vidya Hegde", "Waseem Akhtar", "Xavier Dsouza", "Yamini Singh",
];

const WARDS: &[&str] = &["General", "ICU", "Pediatrics", "Orthopedics", "Maternity"];

const ITEM_NAMES: &[(&str, &str, &str)] = &[
    ("Surgical Gloves", "Consumables", "box"),
    ("Cotton Roll", "Consumables", "roll"),
    ("Syringe 5ml", "Consumables", "pcs"),
    ("Paracetamol 500mg", "Medicines", "strip"),
    ("Amoxicillin 250mg", "Medicines", "strip"),
    ("IV Cannula", "Consumables", "pcs"),
    ("Thermometer", "Equipment", "pcs"),
    ("BP Monitor", "Equipment", "pcs"),
    ("Face Mask", "Consumables", "box"),
    ("Hand Sanitizer", "Hygiene", "bottle"),
    ("Bandage 10cm", "Consumables", "roll"),
    ("Pulse Oximeter", "Equipment", "pcs"),
];

const VENDOR_NAMES: &[(&str, &str)] = &[
    ("Apex Medical Supplies", "Pune"),
    ("Bharat Pharma Distributors", "Mumbai"),
    ("CareWell Traders", "Nagpur"),
    ("Deccan Surgicals", "Hyderabad"),
    ("Everest Healthcare", "Delhi"),
    ("Fortune Lifesciences", "Chennai"),
    ("Galaxy Equipments", "Bengaluru"),
    ("Horizon Enterprises", "Pune"),
];

const PO_STATUSES: &[&str] = &["Draft", "Pending", "Approved", "Received", "Cancelled"];

/// All mock collections, generated once.
#[derive(Debug, Clone)]
pub struct Catalog {
    collections: HashMap<Collection, Vec<Row>>,
}

impl Catalog {
    pub fn mock() -> Self {
        let mut collections = HashMap::new();
        collections.insert(Collection::Patients, mock_patients());
        collections.insert(Collection::Items, mock_items());
        collections.insert(Collection::Vendors, mock_vendors());
        collections.insert(Collection::PurchaseOrders, mock_purchase_orders(25));
        Self { collections }
    }

    pub fn rows(&self, collection: Collection) -> &[Row] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => Row::new(),
    }
}

/// One patient per name, "Aarav Shah" through "Yamini Singh".
pub fn mock_patients() -> Vec<Row> {
    PATIENT_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            row(json!({
                "uhid": format!("UH-{:04}", 1001 + i),
                "name": name,
                "age": 18 + (i * 7) % 60,
                "gender": if i % 2 == 0 { "M" } else { "F" },
                "ward": WARDS[i % WARDS.len()],
            }))
        })
        .collect()
}

pub fn mock_items() -> Vec<Row> {
    ITEM_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, category, unit))| {
            row(json!({
                "id": format!("ITM-{:03}", i + 1),
                "name": name,
                "category": category,
                "unit": unit,
                "stock": (i * 37 + 12) % 200,
                "rate": 25.0 + (i as f64) * 12.5,
                "active": i % 5 != 4,
            }))
        })
        .collect()
}

pub fn mock_vendors() -> Vec<Row> {
    VENDOR_NAMES
        .iter()
        .enumerate()
        .map(|(i, (name, city))| {
            row(json!({
                "id": format!("VEN-{:03}", i + 1),
                "name": name,
                "city": city,
                "contact": format!("98{:08}", 22_000_000 + i * 1_111),
                "gstin": format!("27AAB{:04}F1Z{}", 1000 + i, i % 10),
                "active": i != 2,
            }))
        })
        .collect()
}

pub fn mock_purchase_orders(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            let (vendor, _) = VENDOR_NAMES[i % VENDOR_NAMES.len()];
            row(json!({
                "id": format!("PO-2024-{:03}", i + 1),
                "vendor": vendor,
                "date": format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
                "amount": 1500.0 + ((i * 733) % 9000) as f64,
                "status": PO_STATUSES[i % PO_STATUSES.len()],
            }))
        })
        .collect()
}
