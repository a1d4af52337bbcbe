//! Budget categories and line items
//!
//! A plan's budget is an ordered list of categories, each holding an ordered
//! list of line items. Order is display-relevant only. Wedding items carry a
//! side attribution used by the bride/groom split.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ItemId;
use super::money::Money;
use super::rates::Side;

/// A single budget line item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetItem {
    /// Unique identifier
    pub id: ItemId,

    /// Item label (e.g., "Venue Rental")
    pub label: String,

    /// Estimated cost
    pub cost: Money,

    /// Which side bears this cost (weddings only; Shared elsewhere)
    #[serde(default)]
    pub side: Side,
}

impl BudgetItem {
    /// Create a new shared line item
    pub fn new(label: impl Into<String>, cost: Money) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            cost,
            side: Side::Shared,
        }
    }

    /// Create a new line item attributed to a side
    pub fn with_side(label: impl Into<String>, cost: Money, side: Side) -> Self {
        let mut item = Self::new(label, cost);
        item.side = side;
        item
    }
}

impl fmt::Display for BudgetItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.cost)
    }
}

/// A named group of budget line items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Category name (e.g., "Food & Catering")
    pub name: String,

    /// Line items, in display order
    #[serde(default)]
    pub items: Vec<BudgetItem>,
}

impl BudgetCategory {
    /// Create a new empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Sum of item costs in this category
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(|i| i.cost).sum()
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults_to_shared() {
        let item = BudgetItem::new("DJ & Sound", Money::new(30_000.0));
        assert_eq!(item.label, "DJ & Sound");
        assert_eq!(item.side, Side::Shared);
    }

    #[test]
    fn test_item_with_side() {
        let item = BudgetItem::with_side("Bridal Lehenga", Money::new(60_000.0), Side::Bride);
        assert_eq!(item.side, Side::Bride);
    }

    #[test]
    fn test_category_subtotal() {
        let mut category = BudgetCategory::new("Entertainment");
        assert!(category.subtotal().is_zero());

        category.items.push(BudgetItem::new("DJ & Sound", Money::new(30_000.0)));
        category.items.push(BudgetItem::new("Dhol Players", Money::new(15_000.0)));

        assert_eq!(category.subtotal().rupees(), 45_000.0);
    }

    #[test]
    fn test_missing_side_deserializes_as_shared() {
        // Items written before side attribution existed carry no "side" field
        let json = format!(
            r#"{{"id":"{}","label":"Venue Rental","cost":100000.0}}"#,
            uuid::Uuid::new_v4()
        );
        let item: BudgetItem = serde_json::from_str(&json).unwrap();
        assert_eq!(item.side, Side::Shared);
    }

    #[test]
    fn test_serialization_round_trip() {
        let category = BudgetCategory {
            name: "Food & Catering".to_string(),
            items: vec![BudgetItem::new("Main Catering", Money::new(120_000.0))],
        };

        let json = serde_json::to_string(&category).unwrap();
        let deserialized: BudgetCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.name, category.name);
        assert_eq!(deserialized.items.len(), 1);
        assert_eq!(deserialized.items[0].id, category.items[0].id);
    }
}
