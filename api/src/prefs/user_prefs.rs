use std::env;
use std::str::FromStr;

use super::display_preference::DisplayPreference;
use crate::network::Network;
use serde::Serialize;
use serde::Deserialize;

/// Represents all user prefs. Intended for saving through the storage adapter, editing in settings, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    display_preference: DisplayPreference,
    /// Network used when a flow is entered without one, from `WALLET_NETWORK`.
    default_network: Network,
}

impl UserPrefs {
    pub fn new(display_preference: DisplayPreference, default_network: Network) -> Self {
        Self {
            display_preference,
            default_network,
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default_network = lookup("WALLET_NETWORK")
            .and_then(|s| Network::from_str(&s).ok())
            .unwrap_or_default();

        Self {
            display_preference: DisplayPreference::from_lookup(lookup),
            default_network,
        }
    }

    pub fn display_preference(&self) -> &DisplayPreference {
        &self.display_preference
    }

    pub fn default_network(&self) -> Network {
        self.default_network
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_falls_back_to_mainnet() {
        let prefs = UserPrefs::from_lookup(|key| (key == "WALLET_NETWORK").then(|| "moon".to_string()));
        assert_eq!(prefs.default_network(), Network::Mainnet);

        let prefs = UserPrefs::from_lookup(|key| (key == "WALLET_NETWORK").then(|| "Testnet".to_string()));
        assert_eq!(prefs.default_network(), Network::Testnet);
    }
}
