//! Guest headcount breakdown and gifting configuration
//!
//! The plan's guest count is derived from the per-category breakdown
//! whenever a category counter changes; the reverse direction is
//! intentionally absent (see `edits::PlanEdit::SetGuestCount`).

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Seats per round table used for the table-count estimate
pub const SEATS_PER_TABLE: u32 = 8;

/// Guest bucket used for headcount and gift budgeting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum GuestCategory {
    Family,
    Friends,
    Office,
    Vip,
}

impl GuestCategory {
    /// All guest categories
    pub fn all() -> &'static [Self] {
        &[Self::Family, Self::Friends, Self::Office, Self::Vip]
    }
}

impl fmt::Display for GuestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GuestCategory::Family => write!(f, "Family"),
            GuestCategory::Friends => write!(f, "Friends"),
            GuestCategory::Office => write!(f, "Office"),
            GuestCategory::Vip => write!(f, "VIP"),
        }
    }
}

/// Per-category guest headcounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestStats {
    #[serde(default)]
    pub family: u32,
    #[serde(default)]
    pub friends: u32,
    #[serde(default)]
    pub office: u32,
    #[serde(default)]
    pub vip: u32,
}

impl GuestStats {
    /// Read one counter
    pub fn get(&self, category: GuestCategory) -> u32 {
        match category {
            GuestCategory::Family => self.family,
            GuestCategory::Friends => self.friends,
            GuestCategory::Office => self.office,
            GuestCategory::Vip => self.vip,
        }
    }

    /// Set one counter and return the new total
    ///
    /// The caller writes the returned total back to the plan's guest count;
    /// this is the single direction in which the two stay in sync.
    pub fn set(&mut self, category: GuestCategory, count: u32) -> u32 {
        match category {
            GuestCategory::Family => self.family = count,
            GuestCategory::Friends => self.friends = count,
            GuestCategory::Office => self.office = count,
            GuestCategory::Vip => self.vip = count,
        }
        self.total()
    }

    /// Sum of all four counters
    pub fn total(&self) -> u32 {
        self.family + self.friends + self.office + self.vip
    }

    /// Split a headcount into a plausible initial breakdown
    ///
    /// 30% friends, 15% office, 5% VIP, remainder family, so the total
    /// always equals the input.
    pub fn distribute(guest_count: u32) -> Self {
        let friends = guest_count * 30 / 100;
        let office = guest_count * 15 / 100;
        let vip = guest_count * 5 / 100;
        Self {
            family: guest_count - friends - office - vip,
            friends,
            office,
            vip,
        }
    }
}

/// Per-category unit gift cost
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GiftConfig {
    pub family_per_gift: Money,
    pub friends_per_gift: Money,
    pub office_per_gift: Money,
    pub vip_per_gift: Money,
}

impl Default for GiftConfig {
    fn default() -> Self {
        Self {
            family_per_gift: Money::new(500.0),
            friends_per_gift: Money::new(300.0),
            office_per_gift: Money::new(250.0),
            vip_per_gift: Money::new(1500.0),
        }
    }
}

impl GiftConfig {
    /// Unit gift cost for one category
    pub fn per_gift(&self, category: GuestCategory) -> Money {
        match category {
            GuestCategory::Family => self.family_per_gift,
            GuestCategory::Friends => self.friends_per_gift,
            GuestCategory::Office => self.office_per_gift,
            GuestCategory::Vip => self.vip_per_gift,
        }
    }

    /// Set the unit gift cost for one category
    pub fn set_per_gift(&mut self, category: GuestCategory, cost: Money) {
        match category {
            GuestCategory::Family => self.family_per_gift = cost,
            GuestCategory::Friends => self.friends_per_gift = cost,
            GuestCategory::Office => self.office_per_gift = cost,
            GuestCategory::Vip => self.vip_per_gift = cost,
        }
    }

    /// Total gifting budget for a headcount breakdown
    pub fn budget_for(&self, stats: &GuestStats) -> Money {
        GuestCategory::all()
            .iter()
            .map(|&c| self.per_gift(c) * f64::from(stats.get(c)))
            .sum()
    }
}

/// Round tables needed to seat a headcount, 8 seats per table
pub fn tables_needed(guest_count: u32) -> u32 {
    guest_count.div_ceil(SEATS_PER_TABLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_returns_new_total() {
        let mut stats = GuestStats {
            family: 50,
            friends: 30,
            office: 15,
            vip: 5,
        };

        let total = stats.set(GuestCategory::Friends, 40);
        assert_eq!(total, 110);
        assert_eq!(stats.total(), 110);
        assert_eq!(stats.friends, 40);
        assert_eq!(stats.family, 50);
    }

    #[test]
    fn test_distribute_sums_to_input() {
        for count in [0, 1, 7, 8, 99, 100, 101, 250, 1000] {
            let stats = GuestStats::distribute(count);
            assert_eq!(stats.total(), count, "distribute({}) must sum back", count);
        }
    }

    #[test]
    fn test_distribute_shape() {
        let stats = GuestStats::distribute(100);
        assert_eq!(stats.friends, 30);
        assert_eq!(stats.office, 15);
        assert_eq!(stats.vip, 5);
        assert_eq!(stats.family, 50);
    }

    #[test]
    fn test_gift_budget() {
        // Worked example: 50*500 + 30*300 + 15*250 + 5*1500 = 45250
        let stats = GuestStats {
            family: 50,
            friends: 30,
            office: 15,
            vip: 5,
        };
        let config = GiftConfig::default();

        assert_eq!(config.budget_for(&stats).rupees(), 45_250.0);
    }

    #[test]
    fn test_gift_budget_zero_guests() {
        let stats = GuestStats::default();
        assert!(GiftConfig::default().budget_for(&stats).is_zero());
    }

    #[test]
    fn test_set_per_gift() {
        let mut config = GiftConfig::default();
        config.set_per_gift(GuestCategory::Vip, Money::new(2000.0));
        assert_eq!(config.per_gift(GuestCategory::Vip).rupees(), 2000.0);
        assert_eq!(config.per_gift(GuestCategory::Family).rupees(), 500.0);
    }

    #[test]
    fn test_tables_needed() {
        assert_eq!(tables_needed(0), 0);
        assert_eq!(tables_needed(1), 1);
        assert_eq!(tables_needed(8), 1);
        assert_eq!(tables_needed(9), 2);
        assert_eq!(tables_needed(100), 13);
    }
}
