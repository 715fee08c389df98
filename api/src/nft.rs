//! NFT collections and items.

use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftCollection {
    pub id: String,
    pub name: String,
    pub contract_name: String,
    /// Address of the account that deployed the collection contract.
    pub address: String,
    pub logo: Option<String>,
    /// Set when the collection is bridged to EVM.
    pub evm_address: Option<String>,
    pub count: Option<u32>,
}

impl NftCollection {
    pub fn is_evm_bridged(&self) -> bool {
        self.evm_address.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nft {
    pub id: String,
    pub name: String,
    pub thumbnail: Option<String>,
    pub collection_id: String,
    pub collection_name: String,
    /// For semi-fungible assets, the largest amount that may be sent at once.
    pub max_transferable: Option<u64>,
}

impl Nft {
    pub fn new(id: impl Into<String>, collection_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            collection_id: collection_id.into(),
            ..Default::default()
        }
    }

    pub fn is_semi_fungible(&self) -> bool {
        self.max_transferable.is_some()
    }
}
