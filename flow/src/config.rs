//! Settings a send store is created with.

use std::env;

use api::prefs::user_prefs::UserPrefs;

use crate::draft::FiatOrCoin;
use crate::draft::TransactionDraft;
use crate::selection::MAX_SELECTED_NFTS;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowConfig {
    pub prefs: UserPrefs,
    /// Cap on selected NFTs. Values above [`MAX_SELECTED_NFTS`] are clamped.
    pub max_selected_nfts: usize,
}

impl FlowConfig {
    pub fn new(prefs: UserPrefs) -> Self {
        Self {
            prefs,
            max_selected_nfts: MAX_SELECTED_NFTS,
        }
    }

    /// Reads [`UserPrefs`] plus `NFT_SELECTION_LIMIT` from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let max_selected_nfts = lookup("NFT_SELECTION_LIMIT")
            .and_then(|s| s.parse::<usize>().ok())
            .map(|n| n.min(MAX_SELECTED_NFTS))
            .unwrap_or(MAX_SELECTED_NFTS);

        Self {
            prefs: UserPrefs::from_lookup(lookup),
            max_selected_nfts,
        }
    }

    /// The draft a fresh flow starts from.
    pub fn initial_draft(&self) -> TransactionDraft {
        let fiat_or_coin = if self.prefs.display_preference().starts_in_fiat() {
            FiatOrCoin::Fiat
        } else {
            FiatOrCoin::Coin
        };

        TransactionDraft {
            network: self.prefs.default_network(),
            fiat_or_coin,
            ..TransactionDraft::default()
        }
    }
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::network::Network;

    #[test]
    fn limit_cannot_exceed_nine() {
        let config = FlowConfig::from_lookup(|key| (key == "NFT_SELECTION_LIMIT").then(|| "50".into()));
        assert_eq!(config.max_selected_nfts, MAX_SELECTED_NFTS);

        let config = FlowConfig::from_lookup(|key| (key == "NFT_SELECTION_LIMIT").then(|| "3".into()));
        assert_eq!(config.max_selected_nfts, 3);
    }

    #[test]
    fn initial_draft_follows_prefs() {
        let config = FlowConfig::from_lookup(|key| match key {
            "DISPLAY_AS_FIAT" => Some("true".into()),
            "WALLET_NETWORK" => Some("testnet".into()),
            _ => None,
        });
        let draft = config.initial_draft();
        assert_eq!(draft.fiat_or_coin, FiatOrCoin::Fiat);
        assert_eq!(draft.network, Network::Testnet);
        assert_eq!(draft.amount, TransactionDraft::default().amount);
    }
}
