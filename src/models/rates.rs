//! Rate tables: quality and city-tier multipliers
//!
//! Pure lookup data. Every generated budget figure is a base cost scaled by
//! these multipliers, so the tables live here as exhaustive matches rather
//! than runtime-validated maps - an unknown quality or tier is unrepresentable.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Spend-tier selector used as a cost multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Budget,
    #[default]
    Standard,
    Premium,
    Luxury,
}

impl Quality {
    /// Cost multiplier for this quality level
    pub const fn multiplier(self) -> f64 {
        match self {
            Quality::Budget => 0.5,
            Quality::Standard => 1.0,
            Quality::Premium => 2.0,
            Quality::Luxury => 8.0,
        }
    }

    /// All quality levels, cheapest first
    pub fn all() -> &'static [Self] {
        &[Self::Budget, Self::Standard, Self::Premium, Self::Luxury]
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Budget => write!(f, "Budget"),
            Quality::Standard => write!(f, "Standard"),
            Quality::Premium => write!(f, "Premium"),
            Quality::Luxury => write!(f, "Luxury"),
        }
    }
}

/// City cost-of-living bracket used as a cost multiplier
///
/// Applied only to venue/location-scaled line items; per-guest items cost
/// the same per head regardless of city.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CityTier {
    Metro,
    Tier2,
    Tier3,
}

impl CityTier {
    /// Cost multiplier for this bracket
    pub const fn multiplier(self) -> f64 {
        match self {
            CityTier::Metro => 1.6,
            CityTier::Tier2 => 1.0,
            CityTier::Tier3 => 0.75,
        }
    }

    /// Classify a city name into a tier
    ///
    /// Unknown cities fall back to Tier3; the tier is user-overridable at
    /// plan creation.
    pub fn for_city(city: &str) -> Self {
        const METRO: &[&str] = &[
            "mumbai",
            "delhi",
            "new delhi",
            "bangalore",
            "bengaluru",
            "hyderabad",
            "chennai",
            "kolkata",
            "pune",
            "gurgaon",
            "gurugram",
            "noida",
        ];
        const TIER2: &[&str] = &[
            "jaipur",
            "lucknow",
            "ahmedabad",
            "surat",
            "indore",
            "bhopal",
            "chandigarh",
            "nagpur",
            "kochi",
            "coimbatore",
            "goa",
            "udaipur",
        ];

        let needle = city.trim().to_lowercase();
        if METRO.contains(&needle.as_str()) {
            CityTier::Metro
        } else if TIER2.contains(&needle.as_str()) {
            CityTier::Tier2
        } else {
            CityTier::Tier3
        }
    }
}

impl fmt::Display for CityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityTier::Metro => write!(f, "Metro"),
            CityTier::Tier2 => write!(f, "Tier-2"),
            CityTier::Tier3 => write!(f, "Tier-3"),
        }
    }
}

/// The kind of celebration a plan is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    Wedding,
    Birthday,
    Corporate,
    Anniversary,
    Party,
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventType::Wedding => write!(f, "Wedding"),
            EventType::Birthday => write!(f, "Birthday"),
            EventType::Corporate => write!(f, "Corporate"),
            EventType::Anniversary => write!(f, "Anniversary"),
            EventType::Party => write!(f, "Party"),
        }
    }
}

/// Wedding cost attribution for the two-party budget split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Bride,
    Groom,
    #[default]
    Shared,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Bride => write!(f, "Bride"),
            Side::Groom => write!(f, "Groom"),
            Side::Shared => write!(f, "Shared"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_multipliers() {
        assert_eq!(Quality::Budget.multiplier(), 0.5);
        assert_eq!(Quality::Standard.multiplier(), 1.0);
        assert_eq!(Quality::Premium.multiplier(), 2.0);
        assert_eq!(Quality::Luxury.multiplier(), 8.0);
    }

    #[test]
    fn test_quality_multipliers_monotone() {
        let all = Quality::all();
        for pair in all.windows(2) {
            assert!(pair[0].multiplier() < pair[1].multiplier());
        }
    }

    #[test]
    fn test_tier_multipliers() {
        assert_eq!(CityTier::Metro.multiplier(), 1.6);
        assert_eq!(CityTier::Tier2.multiplier(), 1.0);
        assert_eq!(CityTier::Tier3.multiplier(), 0.75);
    }

    #[test]
    fn test_city_classification() {
        assert_eq!(CityTier::for_city("Mumbai"), CityTier::Metro);
        assert_eq!(CityTier::for_city("  bengaluru "), CityTier::Metro);
        assert_eq!(CityTier::for_city("Jaipur"), CityTier::Tier2);
        assert_eq!(CityTier::for_city("Sitapur"), CityTier::Tier3);
    }

    #[test]
    fn test_side_default_is_shared() {
        assert_eq!(Side::default(), Side::Shared);
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Quality::Luxury).unwrap(), "\"luxury\"");
        assert_eq!(serde_json::to_string(&CityTier::Tier2).unwrap(), "\"tier2\"");
        assert_eq!(serde_json::to_string(&Side::Bride).unwrap(), "\"bride\"");

        let q: Quality = serde_json::from_str("\"premium\"").unwrap();
        assert_eq!(q, Quality::Premium);
    }
}
