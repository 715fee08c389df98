//! Provides an exact decimal type for token and fiat amounts.

use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;
use std::ops::AddAssign;

use num_traits::CheckedAdd;
use thiserror::Error;

/// An error that can occur when parsing a string into a `DecimalAmount`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    /// The string is not in a valid numeric format (e.g., "abc", "1.2.3").
    #[error("invalid amount format")]
    InvalidFormat,
    /// The string has more decimal places than the asset supports.
    #[error("too many decimal places, at most {0} allowed")]
    TooManyDecimals(u8),
    /// Transfers never carry negative amounts.
    #[error("amount must not be negative")]
    Negative,
}

/// The widest scale whose `10^decimals` still fits in a `u128`.
pub const MAX_DECIMALS: u8 = 38;

/// A non-negative amount with a fixed number of decimal places.
///
/// Internally the amount is stored as an unsigned integer count of the
/// smallest unit (`10^-decimals`), so no floating point is ever involved.
/// Two amounts only compare when they share the same number of decimals.
/// Amounts wider than [`MAX_DECIMALS`] can be held and displayed, but
/// parsing and conversion reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecimalAmount {
    units: u128,
    decimals: u8,
}

impl DecimalAmount {
    pub fn zero(decimals: u8) -> Self {
        Self::from_units(0, decimals)
    }

    /// Creates an amount directly from its smallest unit.
    ///
    /// # Example
    /// ```
    /// # use api::amount::DecimalAmount;
    /// let amount = DecimalAmount::from_units(12345, 2);
    /// assert_eq!(amount.to_string(), "123.45");
    /// ```
    pub fn from_units(units: u128, decimals: u8) -> Self {
        Self { units, decimals }
    }

    pub fn units(&self) -> u128 {
        self.units
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.units == 0
    }

    /// Parses a decimal string such as `"10.5"` or `".25"`.
    ///
    /// Fails when the string is not a plain non-negative decimal or carries
    /// more fractional digits than `decimals`.
    ///
    /// # Examples
    /// ```
    /// # use api::amount::{DecimalAmount, ParseAmountError};
    /// let amount = DecimalAmount::parse("3.2", 8).unwrap();
    /// assert_eq!(amount.units(), 320_000_000);
    ///
    /// let err = DecimalAmount::parse("1.234", 2).unwrap_err();
    /// assert_eq!(err, ParseAmountError::TooManyDecimals(2));
    /// ```
    pub fn parse(s: &str, decimals: u8) -> Result<Self, ParseAmountError> {
        if s.starts_with('-') {
            return Err(ParseAmountError::Negative);
        }

        let mut parts = s.split('.');
        let major_str = parts.next().unwrap_or("");
        let minor_str = parts.next().unwrap_or("");

        if parts.next().is_some() || (major_str.is_empty() && minor_str.is_empty()) {
            return Err(ParseAmountError::InvalidFormat);
        }
        if !major_str.bytes().chain(minor_str.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(ParseAmountError::InvalidFormat);
        }
        if minor_str.len() > decimals as usize {
            return Err(ParseAmountError::TooManyDecimals(decimals));
        }

        let major_units = if major_str.is_empty() {
            0
        } else {
            major_str
                .parse::<u128>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
        };
        let minor_units = if minor_str.is_empty() {
            0
        } else {
            minor_str
                .parse::<u128>()
                .map_err(|_| ParseAmountError::InvalidFormat)?
        };

        let multiplier = 10_u128
            .checked_pow(decimals as u32)
            .ok_or(ParseAmountError::InvalidFormat)?;
        let scaling_factor = 10_u128.pow(decimals as u32 - minor_str.len() as u32);
        let units = major_units
            .checked_mul(multiplier)
            .and_then(|major| major.checked_add(minor_units * scaling_factor))
            .ok_or(ParseAmountError::InvalidFormat)?;

        Ok(Self::from_units(units, decimals))
    }

    /// Formats without trailing fractional zeros (`"5.10000000"` becomes `"5.1"`).
    pub fn to_trimmed_string(&self) -> String {
        let full = self.to_string();
        if self.decimals == 0 {
            return full;
        }
        full.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Formats the amount with every decimal place, e.g. `"25.30"` for two decimals.
impl fmt::Display for DecimalAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = self.decimals as usize;

        if decimals == 0 {
            return write!(f, "{}", self.units);
        }

        // Past MAX_DECIMALS every u128 is below one whole unit.
        let (major_units, minor_units) = match 10_u128.checked_pow(decimals as u32) {
            Some(divisor) => (self.units / divisor, self.units % divisor),
            None => (0, self.units),
        };
        write!(
            f,
            "{}.{:0width$}",
            major_units,
            minor_units,
            width = decimals
        )
    }
}

impl PartialOrd for DecimalAmount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.decimals == other.decimals).then(|| self.units.cmp(&other.units))
    }
}

/// Implements the addition operator. Panics if the scales do not match.
impl Add for DecimalAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.decimals != rhs.decimals {
            panic!(
                "Cannot add amounts of different scales: {} and {} decimals",
                self.decimals, rhs.decimals
            );
        }
        Self::from_units(self.units + rhs.units, self.decimals)
    }
}

/// Implements the addition assignment operator. Panics if the scales do not match.
impl AddAssign for DecimalAmount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Implements checked addition. Returns `None` if the decimals mismatch or on overflow.
impl CheckedAdd for DecimalAmount {
    fn checked_add(&self, v: &Self) -> Option<Self> {
        if self.decimals != v.decimals {
            return None;
        }
        self.units
            .checked_add(v.units)
            .map(|units| Self::from_units(units, self.decimals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_partial_forms() {
        assert_eq!(DecimalAmount::parse("10", 8).unwrap().units(), 1_000_000_000);
        assert_eq!(DecimalAmount::parse(".5", 2).unwrap().units(), 50);
        assert_eq!(DecimalAmount::parse("7.", 2).unwrap().units(), 700);
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(DecimalAmount::parse("", 8), Err(ParseAmountError::InvalidFormat));
        assert_eq!(DecimalAmount::parse(".", 8), Err(ParseAmountError::InvalidFormat));
        assert_eq!(DecimalAmount::parse("1.2.3", 8), Err(ParseAmountError::InvalidFormat));
        assert_eq!(DecimalAmount::parse("1e5", 8), Err(ParseAmountError::InvalidFormat));
        assert_eq!(DecimalAmount::parse("+1", 8), Err(ParseAmountError::InvalidFormat));
        assert_eq!(DecimalAmount::parse("-1", 8), Err(ParseAmountError::Negative));
        assert_eq!(
            DecimalAmount::parse("0.001", 2),
            Err(ParseAmountError::TooManyDecimals(2))
        );
    }

    #[test]
    fn displays_fixed_and_trimmed() {
        let amount = DecimalAmount::parse("5.1", 8).unwrap();
        assert_eq!(amount.to_string(), "5.10000000");
        assert_eq!(amount.to_trimmed_string(), "5.1");
        assert_eq!(DecimalAmount::zero(8).to_trimmed_string(), "0");
        assert_eq!(DecimalAmount::from_units(42, 0).to_trimmed_string(), "42");
        assert_eq!(DecimalAmount::from_units(5, 2).to_string(), "0.05");
    }

    #[test]
    fn only_same_scale_amounts_compare() {
        let a = DecimalAmount::parse("3.2", 8).unwrap();
        let b = DecimalAmount::parse("10.0", 8).unwrap();
        assert!(a < b);
        assert_eq!(a.partial_cmp(&DecimalAmount::parse("3.2", 2).unwrap()), None);
        assert_eq!(a.checked_add(&DecimalAmount::zero(2)), None);
        assert_eq!(a.checked_add(&b).unwrap().to_trimmed_string(), "13.2");
    }

    #[test]
    fn adds_same_scale_amounts() {
        let mut total = DecimalAmount::parse("1.25", 2).unwrap();
        total += DecimalAmount::parse("0.75", 2).unwrap();
        assert_eq!(total.to_string(), "2.00");
        assert_eq!(
            (total + DecimalAmount::from_units(1, 2)).to_trimmed_string(),
            "2.01"
        );
    }

    #[test]
    #[should_panic(expected = "different scales")]
    fn adding_mixed_scales_panics() {
        let _ = DecimalAmount::zero(2) + DecimalAmount::zero(8);
    }

    #[test]
    fn displays_scales_wider_than_u128() {
        let amount = DecimalAmount::from_units(5, 39);
        assert_eq!(amount.to_string(), format!("0.{}5", "0".repeat(38)));
        assert_eq!(DecimalAmount::zero(40).to_trimmed_string(), "0");
        assert_eq!(
            DecimalAmount::parse("1", MAX_DECIMALS + 1),
            Err(ParseAmountError::InvalidFormat)
        );
    }
}
