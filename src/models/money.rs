//! Money type for representing rupee amounts
//!
//! Stores amounts as f64 rupees. Budget figures here are estimates produced
//! by multiplier arithmetic, and two derived quantities depend on float
//! semantics: the per-guest cost is defined to be non-finite when the guest
//! count is zero, and the bride/groom split invariant holds up to a 1e-6
//! tolerance. Display uses Indian digit grouping (₹1,60,000).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

/// A rupee amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from rupees
    ///
    /// # Examples
    /// ```
    /// use utsav::models::Money;
    /// let amount = Money::new(45_000.0);
    /// ```
    pub const fn new(rupees: f64) -> Self {
        Self(rupees)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the amount in rupees
    pub const fn rupees(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Scale by a dimensionless factor (quality/tier multipliers, contingency)
    pub fn scaled(&self, factor: f64) -> Self {
        Self(self.0 * factor)
    }

    /// Compare for equality within a tolerance
    pub fn approx_eq(&self, other: Money, tolerance: f64) -> bool {
        (self.0 - other.0).abs() <= tolerance
    }

    /// Parse a rupee amount from a string
    ///
    /// Accepts formats: "45000", "45,000", "₹45,000", "-1200", "1050.50"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol and digit-group separators
        let s = s.strip_prefix('₹').unwrap_or(s);
        let cleaned: String = s.chars().filter(|c| *c != ',').collect();

        if cleaned.is_empty() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let rupees: f64 = cleaned
            .parse()
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        if !rupees.is_finite() {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self(if negative { -rupees } else { rupees }))
    }

    /// Format with a custom currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!("-{}{}", symbol, format_grouped(self.0.abs()))
        } else {
            format!("{}{}", symbol, format_grouped(self.0))
        }
    }
}

/// Format a non-negative rupee amount with Indian digit grouping
///
/// Whole rupees are grouped lakh-style (12,34,567); paise are shown only
/// when the amount is not whole.
fn format_grouped(rupees: f64) -> String {
    let mut whole = rupees.trunc() as u64;
    let mut paise = (rupees.fract() * 100.0).round() as u64;
    if paise >= 100 {
        whole += 1;
        paise = 0;
    }

    let digits = whole.to_string();
    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    if paise > 0 {
        format!("{}.{:02}", grouped, paise)
    } else {
        grouped
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-₹{}", format_grouped(self.0.abs()))
        } else {
            write!(f, "₹{}", format_grouped(self.0))
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Mul<f64> for Money {
    type Output = Self;

    fn mul(self, factor: f64) -> Self {
        Self(self.0 * factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
