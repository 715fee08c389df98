//! The NFTs picked for an NFT send, with per-item quantities.

use std::collections::HashMap;

use api::nft::Nft;
use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;

/// Most NFTs a single send may carry.
pub const MAX_SELECTED_NFTS: usize = 9;

/// Result of a selection change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIs)]
pub enum SelectOutcome {
    Added,
    Removed,
    Replaced,
    /// The request was a no-op, e.g. selecting an already selected NFT.
    Unchanged,
    /// The cap would be exceeded. Nothing was changed.
    LimitReached,
}

/// An ordered, capped list of selected NFTs.
///
/// Quantities only matter for semi-fungible assets and default to 1. A
/// quantity entry is dropped together with its NFT.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftSelection {
    nfts: Vec<Nft>,
    quantities: HashMap<String, u64>,
    limit: usize,
}

impl Default for NftSelection {
    fn default() -> Self {
        Self::with_limit(MAX_SELECTED_NFTS)
    }
}

impl NftSelection {
    pub fn with_limit(limit: usize) -> Self {
        Self {
            nfts: Vec::new(),
            quantities: HashMap::new(),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.nfts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nfts.is_empty()
    }

    pub fn as_slice(&self) -> &[Nft] {
        &self.nfts
    }

    pub fn contains(&self, id: &str) -> bool {
        self.nfts.iter().any(|nft| nft.id == id)
    }

    pub fn select(&mut self, nft: Nft) -> SelectOutcome {
        if self.contains(&nft.id) {
            return SelectOutcome::Unchanged;
        }
        if self.nfts.len() >= self.limit {
            warn!(
                "cannot select NFT {}: selection limit of {} reached",
                nft.id, self.limit
            );
            return SelectOutcome::LimitReached;
        }
        self.nfts.push(nft);
        SelectOutcome::Added
    }

    pub fn deselect(&mut self, id: &str) -> SelectOutcome {
        let before = self.nfts.len();
        self.nfts.retain(|nft| nft.id != id);
        if self.nfts.len() == before {
            return SelectOutcome::Unchanged;
        }
        self.quantities.remove(id);
        SelectOutcome::Removed
    }

    pub fn toggle(&mut self, nft: Nft) -> SelectOutcome {
        if self.contains(&nft.id) {
            self.deselect(&nft.id)
        } else {
            self.select(nft)
        }
    }

    /// Replaces the whole selection. A list over the cap is rejected as a
    /// whole. Duplicate ids keep their first occurrence.
    pub fn replace(&mut self, nfts: Vec<Nft>) -> SelectOutcome {
        let mut deduped: Vec<Nft> = Vec::with_capacity(nfts.len());
        for nft in nfts {
            if !deduped.iter().any(|kept| kept.id == nft.id) {
                deduped.push(nft);
            }
        }

        if deduped.len() > self.limit {
            warn!(
                "cannot select {} NFTs: selection limit is {}",
                deduped.len(),
                self.limit
            );
            return SelectOutcome::LimitReached;
        }

        self.quantities
            .retain(|id, _| deduped.iter().any(|nft| &nft.id == id));
        self.nfts = deduped;
        SelectOutcome::Replaced
    }

    pub fn clear(&mut self) {
        self.nfts.clear();
        self.quantities.clear();
    }

    pub fn quantity(&self, id: &str) -> u64 {
        self.quantities.get(id).copied().unwrap_or(1)
    }

    /// Records the amount to send for `id`. Bounds are the selector's concern.
    pub fn set_quantity(&mut self, id: impl Into<String>, quantity: u64) {
        self.quantities.insert(id.into(), quantity);
    }

    /// Selected NFTs paired with the quantity to send.
    pub fn items(&self) -> impl Iterator<Item = (&Nft, u64)> {
        self.nfts.iter().map(|nft| (nft, self.quantity(&nft.id)))
    }
}
