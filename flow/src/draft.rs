//! The in-progress transfer a user is building.

use api::account::Contact;
use api::address::AddressType;
use api::network::Network;
use api::token::TokenInfo;
use api::token::TokenType;
use serde::Deserialize;
use serde::Serialize;

/// Which amount field the user is editing. The other one is derived from a
/// live price outside the reducer.
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
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FiatOrCoin {
    #[default]
    Coin,
    Fiat,
}

impl FiatOrCoin {
    pub fn toggled(self) -> Self {
        match self {
            Self::Coin => Self::Fiat,
            Self::Fiat => Self::Coin,
        }
    }
}

/// Amount strings a fresh draft starts with.
pub const INITIAL_AMOUNT: &str = "0.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    pub network: Network,
    pub parent_address: Option<String>,
    pub child_address: Option<String>,

    pub from_address: String,
    pub from_address_type: AddressType,
    pub from_contact: Contact,

    pub to_address: String,
    pub to_address_type: AddressType,
    pub to_contact: Contact,

    pub token_info: Option<TokenInfo>,
    pub token_type: TokenType,

    /// Amount in token units, verbatim as entered or derived.
    pub amount: String,
    /// Amount in the display currency, verbatim as entered or derived.
    pub fiat_amount: String,
    pub fiat_or_coin: FiatOrCoin,
    pub fee: Option<String>,

    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for TransactionDraft {
    fn default() -> Self {
        Self {
            network: Network::default(),
            parent_address: None,
            child_address: None,
            from_address: String::new(),
            from_address_type: AddressType::default(),
            from_contact: Contact::default(),
            to_address: String::new(),
            to_address_type: AddressType::default(),
            to_contact: Contact::default(),
            token_info: None,
            token_type: TokenType::default(),
            amount: INITIAL_AMOUNT.to_string(),
            fiat_amount: INITIAL_AMOUNT.to_string(),
            fiat_or_coin: FiatOrCoin::default(),
            fee: None,
            is_loading: false,
            error: None,
        }
    }
}
