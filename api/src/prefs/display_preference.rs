use crate::fiat_currency::FiatCurrency;
use std::env;
use std::str::FromStr;
use serde::Serialize;
use serde::Deserialize;

use super::is_truthy;

/// Represents how the user wants amounts entered and shown.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize, strum::EnumIs)]
pub enum DisplayPreference {
    /// Token amounts only. The send flow never enters fiat mode.
    CoinOnly,

    /// Fiat integration is enabled.
    FiatEnabled {
        /// The specific fiat currency selected by the user.
        fiat: FiatCurrency,

        /// Whether a fresh send starts with the fiat field authoritative.
        display_as_fiat: bool,
    },
}

impl DisplayPreference {

    /// Creates a DisplayPreference instance from environment variables,
    /// with a conservative in-code default.
    ///
    /// # Environment Variables (case-insensitive for "true" or "false"):
    /// - `COIN_ONLY`:
    ///   If "true", forces coin-only mode. defaults to false
    /// - `FIAT_CURRENCY`: ISO code such as "USD", "EUR" or "JPY".
    /// - `DISPLAY_AS_FIAT`: "true" to start new sends in fiat. defaults to false
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`Self::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        /// **Easy toggle:** Set to `true` to make coin-only the default mode.
        /// This is the lowest priority setting.
        const COIN_ONLY: bool = false;

        let is_coin_mode = match lookup("COIN_ONLY") {
            Some(val) => is_truthy(&val),
            None => COIN_ONLY,
        };

        if is_coin_mode {
            return Self::CoinOnly;
        }

        let fiat = lookup("FIAT_CURRENCY")
            .and_then(|s| FiatCurrency::from_str(&s).ok())
            .unwrap_or_default();

        let display_as_fiat = lookup("DISPLAY_AS_FIAT")
            .map(|val| is_truthy(&val))
            .unwrap_or(false);

        Self::FiatEnabled {
            fiat,
            display_as_fiat,
        }
    }

    pub fn fiat_currency(&self) -> Option<FiatCurrency> {
        match self {
            Self::CoinOnly => None,
            Self::FiatEnabled { fiat, .. } => Some(*fiat),
        }
    }

    pub fn starts_in_fiat(&self) -> bool {
        matches!(self, Self::FiatEnabled { display_as_fiat: true, .. })
    }
}


impl Default for DisplayPreference {
    fn default() -> Self {
        Self::from_env()
    }
}
