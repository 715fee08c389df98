//! Client-side state of the wallet's send flow.
//!
//! A [`draft::TransactionDraft`] holds the in-progress transfer and is only
//! changed through [`reducer::transaction_reducer`]. The [`store::SendStore`]
//! wraps a draft together with the wizard position and NFT selection, exposes
//! it to every screen through a watch channel, and runs the async calls out to
//! the wallet backend.

pub mod config;
pub mod currency;
pub mod draft;
pub mod error;
pub mod reducer;
pub mod selection;
pub mod selectors;
pub mod step;
pub mod store;
pub mod wizard;

pub use draft::FiatOrCoin;
pub use draft::TransactionDraft;
pub use error::SendError;
pub use reducer::transaction_reducer;
pub use reducer::TransactionAction;
pub use store::SendState;
pub use store::SendStore;
