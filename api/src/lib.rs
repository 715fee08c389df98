//! This crate contains the shared types and collaborator contracts of the send flow.
//!
//! Nothing in here owns any state. The wallet backend, the asset queries, the
//! address book, navigation and translation are all provided by the host and
//! reached through the traits in [`bridge`].

pub mod account;
pub mod address;
pub mod amount;
pub mod bridge;
pub mod fiat_currency;
pub mod network;
pub mod nft;
pub mod prefs;
pub mod price_map;
pub mod token;
pub mod transfer;

/// Opaque failure reported by any backend collaborator.
pub type ApiError = anyhow::Error;
