//! Contracts for the collaborators the send flow calls out to.
//!
//! Each trait is implemented by the host application. Async methods may fail
//! with transport or chain errors; the send flow treats those as opaque
//! [`ApiError`]s to surface to the user.

use serde_json::Value;

use crate::account::Contact;
use crate::account::WalletAccount;
use crate::network::Network;
use crate::nft::Nft;
use crate::nft::NftCollection;
use crate::token::TokenInfo;
use crate::transfer::TransactionId;
use crate::transfer::TransferRequest;
use crate::ApiError;

/// The wallet backend: account context, signing and broadcast.
#[allow(async_fn_in_trait)]
pub trait WalletBridge {
    async fn selected_address(&self) -> Result<String, ApiError>;

    async fn network(&self) -> Result<Network, ApiError>;

    async fn current_account(&self) -> Result<WalletAccount, ApiError>;

    /// Raw balance of the native token held by `address`, as a decimal string.
    async fn balance(&self, address: &str) -> Result<String, ApiError>;

    /// Whether the wallet holds a key able to sign for `address`.
    async fn check_available_account_keys(&self, address: &str) -> Result<bool, ApiError>;

    /// Signs and broadcasts a transfer.
    async fn send_transfer(&self, request: &TransferRequest) -> Result<TransactionId, ApiError>;
}

/// Cached token and NFT queries, keyed by `(address, network, [collection])`.
///
/// Staleness and retry policy belong to the implementation.
#[allow(async_fn_in_trait)]
pub trait AssetQueries {
    async fn fetch_tokens(&self, address: &str, network: Network) -> Result<Vec<TokenInfo>, ApiError>;

    async fn fetch_nft_collections(
        &self,
        address: &str,
        network: Network,
    ) -> Result<Vec<NftCollection>, ApiError>;

    async fn fetch_nft_collection(
        &self,
        address: &str,
        collection: &NftCollection,
        network: Network,
    ) -> Result<Vec<Nft>, ApiError>;

    fn invalidate_tokens(&self, address: &str, network: Network);

    fn invalidate_nft_collection(&self, address: &str, collection_id: &str, network: Network);
}

/// Read-only recipient lists.
#[allow(async_fn_in_trait)]
pub trait AddressBook {
    async fn fetch_recent(&self) -> Result<Vec<Contact>, ApiError>;

    async fn fetch_contacts(&self) -> Result<Vec<Contact>, ApiError>;
}

/// Moves between screens. The routing table belongs to the host.
pub trait Navigator {
    fn navigate(&self, screen: &str, params: Option<Value>);

    fn go_back(&self);
}

/// Looks up a user-facing string by key.
pub trait Translator {
    fn t(&self, key: &str, params: &[(&str, &str)]) -> String;
}
