//! Defines the fiat currencies amounts can be shown in.

use serde::Deserialize;
use serde::Serialize;

/// A display currency with its ISO 4217 code and formatting rules.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize, Default, strum::EnumIs, strum::EnumIter, strum::EnumString, strum::IntoStaticStr)]
#[strum(ascii_case_insensitive)]
#[allow(clippy::upper_case_acronyms)]
pub enum FiatCurrency {
    AUD, // Australian Dollar
    BRL, // Brazilian Real
    CAD, // Canadian Dollar
    CHF, // Swiss Franc
    CNY, // Chinese Yuan
    EUR, // Euro
    GBP, // Great British Pound
    HKD, // Hong Kong Dollar
    JPY, // Japanese Yen
    KRW, // South Korean Won
    KWD, // Kuwaiti Dinar
    SGD, // Singapore Dollar
    #[default]
    USD, // United States Dollar
}

impl FiatCurrency {
    /// Number of decimal digits in the currency's minor unit.
    pub fn decimals(&self) -> u8 {
        match self {
            Self::JPY | Self::KRW => 0,
            Self::KWD => 3,
            _ => 2,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::AUD | Self::CAD | Self::HKD | Self::SGD | Self::USD => "$",
            Self::BRL => "R$",
            Self::CHF => "CHF",
            Self::CNY | Self::JPY => "¥",
            Self::EUR => "€",
            Self::GBP => "£",
            Self::KRW => "₩",
            Self::KWD => "د.ك",
        }
    }

    /// The ISO 4217 code, e.g. "USD".
    pub fn code(&self) -> &'static str {
        self.into()
    }

    /// Formats an already rendered amount with the currency symbol, e.g. "$25.30".
    pub fn format_amount(&self, amt: &str) -> String {
        format!("{}{}", self.symbol(), amt)
    }
}
