//! Seed record shapes. Field names match what the database seeder reads.

use serde::{Deserialize, Serialize};

/// A sellable product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub stock: i64,
    /// Cost price (HPP)
    pub hpp: f64,
    /// Selling price (HJ)
    pub price: f64,
    pub unit: String,
    pub category: String,
}

/// A customer with an outstanding receivable (piutang)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub balance: f64,
}

impl Customer {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            phone: String::new(),
            address: String::new(),
            balance,
        }
    }
}

/// A supplier with an outstanding payable (hutang)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub balance: f64,
}

impl Supplier {
    pub fn new(name: impl Into<String>, balance: f64) -> Self {
        Self {
            name: name.into(),
            phone: String::new(),
            address: String::new(),
            balance,
        }
    }
}

/// A single-item sale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// ISO date, or "NaT" when the row has none
    pub date: String,
    pub item: String,
    pub qty: i64,
    pub hpp: f64,
    pub price: f64,
    /// Empty for walk-in sales
    pub customer: String,
    /// "BON" (credit) or "LUNAS" (paid)
    pub status: String,
    pub nominal: f64,
}
