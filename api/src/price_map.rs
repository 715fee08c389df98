//! Provides a map of token prices in the user's display currency.

use std::collections::HashMap;

use serde::Deserialize;
use serde::Serialize;

use crate::amount::DecimalAmount;
use crate::amount::ParseAmountError;
use crate::fiat_currency::FiatCurrency;

/// Decimal places kept for a per-unit price. Prices of small-cap tokens are
/// routinely below one cent, so they need more precision than the currency.
pub const PRICE_DECIMALS: u8 = 8;

/// The fiat price of one unit of each known token, all in one currency.
///
/// Keys are token symbols, compared case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceMap {
    currency: FiatCurrency,
    prices: HashMap<String, u128>,
}

impl PriceMap {
    pub fn new(currency: FiatCurrency) -> Self {
        Self {
            currency,
            prices: HashMap::new(),
        }
    }

    pub fn currency(&self) -> FiatCurrency {
        self.currency
    }

    /// Inserts or updates the price for `symbol`, returning the previous one.
    ///
    /// Prices with more than [`PRICE_DECIMALS`] places are rejected.
    pub fn insert(&mut self, symbol: &str, price: &str) -> Result<Option<DecimalAmount>, ParseAmountError> {
        let price = DecimalAmount::parse(price, PRICE_DECIMALS)?;
        Ok(self
            .prices
            .insert(symbol.to_ascii_uppercase(), price.units())
            .map(|old| DecimalAmount::from_units(old, PRICE_DECIMALS)))
    }

    pub fn remove(&mut self, symbol: &str) -> Option<DecimalAmount> {
        self.prices
            .remove(&symbol.to_ascii_uppercase())
            .map(|units| DecimalAmount::from_units(units, PRICE_DECIMALS))
    }

    pub fn get(&self, symbol: &str) -> Option<DecimalAmount> {
        self.prices
            .get(&symbol.to_ascii_uppercase())
            .map(|&units| DecimalAmount::from_units(units, PRICE_DECIMALS))
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Iterates over `(symbol, price)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, DecimalAmount)> {
        self.prices
            .iter()
            .map(|(symbol, &units)| (symbol.as_str(), DecimalAmount::from_units(units, PRICE_DECIMALS)))
    }
}
