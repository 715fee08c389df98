//! The request handed to the wallet backend for signing and broadcast.
//!
//! A request is always exactly one kind of transfer, so a token send can never
//! carry NFTs and vice versa.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

use crate::address::AddressType;
use crate::network::Network;
use crate::nft::Nft;
use crate::nft::NftCollection;
use crate::token::TokenInfo;

/// The kind of transfer a send flow produces.
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
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    #[default]
    Tokens,
    SingleNft,
    MultipleNfts,
}

/// Identifier of a submitted transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransactionId(pub String);

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub address: String,
    pub address_type: AddressType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftTransferItem {
    pub nft: Nft,
    pub quantity: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransferAsset {
    Token {
        token: TokenInfo,
        amount: String,
    },
    SingleNft {
        item: NftTransferItem,
        collection: Option<NftCollection>,
    },
    MultipleNfts {
        items: Vec<NftTransferItem>,
        collection: Option<NftCollection>,
    },
}

impl TransferAsset {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Token { .. } => TransactionKind::Tokens,
            Self::SingleNft { .. } => TransactionKind::SingleNft,
            Self::MultipleNfts { .. } => TransactionKind::MultipleNfts,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub network: Network,
    pub from: Endpoint,
    pub to: Endpoint,
    pub asset: TransferAsset,
    pub fee: Option<String>,
}
