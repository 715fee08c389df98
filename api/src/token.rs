//! Fungible token metadata as reported by the asset queries.

use serde::Deserialize;
use serde::Serialize;

/// Symbol of the chain's native asset.
pub const NATIVE_TOKEN_SYMBOL: &str = "FLOW";
/// Decimal places of the chain's native asset.
pub const NATIVE_TOKEN_DECIMALS: u8 = 8;

/// How a token is moved on chain.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIs,
    strum::IntoStaticStr,
)]
pub enum TokenType {
    /// The native asset.
    #[default]
    #[strum(serialize = "Flow")]
    #[serde(rename = "Flow")]
    Native,
    /// Any other fungible token.
    #[strum(serialize = "FT")]
    #[serde(rename = "FT")]
    Fungible,
}

impl TokenType {
    /// A token is native only when its symbol equals the native symbol, ignoring case.
    pub fn classify(symbol: &str) -> Self {
        if symbol.eq_ignore_ascii_case(NATIVE_TOKEN_SYMBOL) {
            Self::Native
        } else {
            Self::Fungible
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub symbol: String,
    pub name: String,
    /// Contract identifier, e.g. `A.1654653399040a61.FlowToken`.
    pub identifier: String,
    pub decimals: u8,
    /// Raw balance as a decimal string.
    pub balance: Option<String>,
    /// Spendable balance. May be below `balance` when funds are reserved,
    /// for instance to cover minimum storage.
    pub available_balance_to_use: Option<String>,
    pub logo_uri: Option<String>,
    /// Fiat price of one token unit as a decimal string.
    pub price: Option<String>,
    pub evm_address: Option<String>,
}

impl TokenInfo {
    pub fn new(symbol: impl Into<String>, decimals: u8) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            identifier: String::new(),
            decimals,
            balance: None,
            available_balance_to_use: None,
            logo_uri: None,
            price: None,
            evm_address: None,
        }
    }

    /// The native token with the given raw balance.
    pub fn native(balance: impl Into<String>) -> Self {
        Self {
            balance: Some(balance.into()),
            ..Self::new(NATIVE_TOKEN_SYMBOL, NATIVE_TOKEN_DECIMALS)
        }
    }

    pub fn token_type(&self) -> TokenType {
        TokenType::classify(&self.symbol)
    }
}
