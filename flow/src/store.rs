//! The shared container every screen of the send flow reads and writes.
//!
//! A [`SendStore`] is created once per UI session and handed to each wizard
//! step. Synchronous setters apply immediately and notify subscribers through
//! a `tokio::sync::watch` channel. The async methods call the backend
//! collaborators and fold their results back into the state; they are the only
//! operations that can fail.

use std::collections::BTreeSet;
use std::future::Future;

use api::account::Contact;
use api::account::WalletAccount;
use api::address::can_receive_nft;
use api::address::AddressType;
use api::amount::DecimalAmount;
use api::bridge::AddressBook;
use api::bridge::AssetQueries;
use api::bridge::WalletBridge;
use api::network::Network;
use api::nft::Nft;
use api::nft::NftCollection;
use api::price_map::PriceMap;
use api::token::TokenInfo;
use api::token::TokenType;
use api::transfer::Endpoint;
use api::transfer::NftTransferItem;
use api::transfer::TransactionId;
use api::transfer::TransactionKind;
use api::transfer::TransferAsset;
use api::transfer::TransferRequest;
use api::ApiError;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use dioxus_logger::tracing::info;
use dioxus_logger::tracing::warn;
use tokio::sync::watch;

use crate::config::FlowConfig;
use crate::currency::derived_amount_action;
use crate::currency::ConversionError;
use crate::draft::FiatOrCoin;
use crate::draft::TransactionDraft;
use crate::draft::INITIAL_AMOUNT;
use crate::error::RequiredField;
use crate::error::SendError;
use crate::reducer::transaction_reducer;
use crate::reducer::AccountContext;
use crate::reducer::TransactionAction;
use crate::selection::NftSelection;
use crate::selection::SelectOutcome;
use crate::step::WizardStep;

/// Everything the send flow's screens share.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SendState {
    pub draft: TransactionDraft,
    pub current_step: WizardStep,
    /// Explicit transfer kind. Follows the NFT selection count, but an empty
    /// selection leaves it untouched.
    pub transaction_type: TransactionKind,
    pub nft_selection: NftSelection,
    /// Collection the selected NFTs were picked from.
    pub selected_collection: Option<NftCollection>,
    pub from_account: Option<WalletAccount>,
    pub to_account: Option<WalletAccount>,
}

impl SendState {
    pub fn new(config: &FlowConfig) -> Self {
        Self {
            draft: config.initial_draft(),
            nft_selection: NftSelection::with_limit(config.max_selected_nfts),
            ..Default::default()
        }
    }

    fn reduce(&mut self, action: TransactionAction) {
        let draft = std::mem::take(&mut self.draft);
        self.draft = transaction_reducer(draft, action);
    }

    fn sync_kind_with_selection(&mut self) {
        match self.nft_selection.len() {
            0 => {}
            1 => self.transaction_type = TransactionKind::SingleNft,
            _ => self.transaction_type = TransactionKind::MultipleNfts,
        }
    }
}

/// Result of a successful [`SendStore::execute_transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendReceipt {
    pub transaction_id: TransactionId,
    pub request: TransferRequest,
}

/// Builds the backend request for the current state, checking that every
/// field the tagged transfer kind needs is present.
pub fn build_transfer_request(state: &SendState) -> Result<TransferRequest, SendError> {
    let draft = &state.draft;
    if draft.from_address.is_empty() {
        return Err(SendError::MissingField(RequiredField::FromAddress));
    }
    if draft.to_address.is_empty() {
        return Err(SendError::MissingField(RequiredField::Recipient));
    }

    let asset = match state.transaction_type {
        TransactionKind::Tokens => {
            let token = draft
                .token_info
                .clone()
                .ok_or(SendError::MissingField(RequiredField::Token))?;
            let amount = DecimalAmount::parse(&draft.amount, token.decimals)?;
            if amount.is_zero() {
                return Err(SendError::ZeroAmount);
            }
            TransferAsset::Token {
                token,
                amount: amount.to_string(),
            }
        }
        kind @ (TransactionKind::SingleNft | TransactionKind::MultipleNfts) => {
            let items: Vec<NftTransferItem> = state
                .nft_selection
                .items()
                .map(|(nft, quantity)| NftTransferItem {
                    nft: nft.clone(),
                    quantity,
                })
                .collect();

            let collection = state.selected_collection.clone();
            if let Some(collection) = &collection {
                if !can_receive_nft(collection, draft.to_address_type) {
                    return Err(SendError::IncompatibleRecipient(collection.name.clone()));
                }
            }

            if kind == TransactionKind::SingleNft {
                let item = items
                    .into_iter()
                    .next()
                    .ok_or(SendError::MissingField(RequiredField::Nft))?;
                TransferAsset::SingleNft { item, collection }
            } else {
                if items.is_empty() {
                    return Err(SendError::MissingField(RequiredField::Nft));
                }
                TransferAsset::MultipleNfts { items, collection }
            }
        }
    };

    Ok(TransferRequest {
        network: draft.network,
        from: Endpoint {
            address: draft.from_address.clone(),
            address_type: draft.from_address_type,
        },
        to: Endpoint {
            address: draft.to_address.clone(),
            address_type: draft.to_address_type,
        },
        asset,
        fee: draft.fee.clone(),
    })
}

pub struct SendStore<B> {
    state: watch::Sender<SendState>,
    backend: B,
    config: FlowConfig,
}

impl<B> SendStore<B> {
    pub fn new(backend: B, config: FlowConfig) -> Self {
        let (state, _) = watch::channel(SendState::new(&config));
        Self {
            state,
            backend,
            config,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    // --- Observation ---

    /// A receiver that is notified on every state change.
    pub fn subscribe(&self) -> watch::Receiver<SendState> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> SendState {
        self.state.borrow().clone()
    }

    pub fn read<R>(&self, f: impl FnOnce(&SendState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update(&self, f: impl FnOnce(&mut SendState)) {
        self.state.send_modify(f);
    }

    // --- Synchronous setters ---

    /// Applies `action` to the draft.
    ///
    /// With a coin-only display preference, switching to fiat entry is
    /// ignored. `Reset` restores the configured initial draft.
    pub fn dispatch(&self, action: TransactionAction) {
        match action {
            TransactionAction::SwitchFiatOrCoin | TransactionAction::SetFiatOrCoin(FiatOrCoin::Fiat)
                if self.config.prefs.display_preference().is_coin_only() =>
            {
                debug!("coin-only display, ignoring {:?}", action);
            }
            TransactionAction::Reset => {
                let initial = self.config.initial_draft();
                self.update(|state| state.draft = initial);
            }
            action => self.update(|state| state.reduce(action)),
        }
    }

    /// Selecting a token tags the flow as a token send. The NFT selection is
    /// left alone; callers clear it when switching.
    pub fn set_selected_token(&self, token: Option<TokenInfo>) {
        self.update(|state| match token {
            Some(token) => {
                state.reduce(TransactionAction::SetTokenInfo(token));
                state.transaction_type = TransactionKind::Tokens;
            }
            None => {
                state.draft.token_info = None;
                state.draft.token_type = TokenType::default();
            }
        });
    }

    /// Replaces the NFT selection. Lists over the cap are rejected whole.
    pub fn set_selected_nfts(&self, nfts: Vec<Nft>) -> SelectOutcome {
        self.change_selection(|selection| selection.replace(nfts))
    }

    pub fn toggle_nft(&self, nft: Nft) -> SelectOutcome {
        self.change_selection(|selection| selection.toggle(nft))
    }

    pub fn deselect_nft(&self, id: &str) -> SelectOutcome {
        self.change_selection(|selection| selection.deselect(id))
    }

    fn change_selection(&self, f: impl FnOnce(&mut NftSelection) -> SelectOutcome) -> SelectOutcome {
        let mut outcome = SelectOutcome::Unchanged;
        self.state.send_if_modified(|state| {
            outcome = f(&mut state.nft_selection);
            let changed = !matches!(outcome, SelectOutcome::Unchanged | SelectOutcome::LimitReached);
            if changed {
                state.sync_kind_with_selection();
            }
            changed
        });
        outcome
    }

    pub fn set_selected_collection(&self, collection: Option<NftCollection>) {
        self.update(|state| state.selected_collection = collection);
    }

    pub fn set_from_account(&self, account: WalletAccount) {
        let child_address = account
            .address_type
            .is_child()
            .then(|| account.address.clone());
        let context = AccountContext {
            network: None,
            parent_address: account.parent_address.clone(),
            child_address,
            from_address: Some(account.address.clone()),
            from_contact: Some(account.contact()),
        };

        self.update(|state| {
            // Parent and child links belong to the previous sender.
            state.draft.parent_address = None;
            state.draft.child_address = None;
            state.reduce(TransactionAction::SetFromAddress(context));
            state.from_account = Some(account);
        });
    }

    /// Sets the recipient. Its kind is derived from the address the same way
    /// the reducer derives it.
    pub fn set_to_account(&self, mut account: WalletAccount) {
        account.address_type = AddressType::from_address(&account.address);
        let action = TransactionAction::SetToAddress {
            address: account.address.clone(),
            contact: account.contact(),
        };

        self.update(|state| {
            state.reduce(action);
            state.to_account = Some(account);
        });
    }

    /// Sets the recipient from an address book entry.
    pub fn set_to_contact(&self, contact: Contact) {
        let account = WalletAccount {
            avatar: contact.avatar.clone(),
            ..WalletAccount::new(contact.address.clone(), contact.name.clone())
        };
        self.update(|state| {
            state.reduce(TransactionAction::SetToAddress {
                address: contact.address.clone(),
                contact,
            });
            state.to_account = Some(account);
        });
    }

    pub fn set_transaction_type(&self, kind: TransactionKind) {
        self.update(|state| state.transaction_type = kind);
    }

    /// Records which screen is showing. Does not navigate.
    pub fn set_current_step(&self, step: WizardStep) {
        debug!("send flow step: {}", step);
        self.update(|state| state.current_step = step);
    }

    pub fn nft_quantity(&self, id: &str) -> u64 {
        self.read(|state| state.nft_selection.quantity(id))
    }

    pub fn set_nft_quantity(&self, id: &str, quantity: u64) {
        self.update(|state| state.nft_selection.set_quantity(id, quantity));
    }

    /// Clears token, NFTs and amounts but keeps account and network context.
    pub fn clear_transaction_data(&self) {
        self.update(|state| {
            state.draft.token_info = None;
            state.draft.token_type = TokenType::default();
            state.draft.amount = INITIAL_AMOUNT.to_string();
            state.draft.fiat_amount = INITIAL_AMOUNT.to_string();
            state.draft.fee = None;
            state.draft.error = None;
            state.nft_selection.clear();
            state.selected_collection = None;
        });
    }

    /// Discards the whole flow.
    pub fn reset(&self) {
        let initial = SendState::new(&self.config);
        self.update(|state| *state = initial);
    }

    /// Recomputes the amount field the user is not editing from `prices`.
    pub fn apply_prices(&self, prices: &PriceMap) -> Result<(), ConversionError> {
        let action = self.read(|state| derived_amount_action(&state.draft, prices));
        match action {
            Ok(action) => {
                self.dispatch(action);
                Ok(())
            }
            Err(e) => {
                debug!("derived amount not updated: {}", e);
                Err(e)
            }
        }
    }

    // --- Async helpers ---

    fn from_address_and_network(&self) -> Result<(String, Network), SendError> {
        self.read(|state| {
            if state.draft.from_address.is_empty() {
                Err(SendError::MissingField(RequiredField::FromAddress))
            } else {
                Ok((state.draft.from_address.clone(), state.draft.network))
            }
        })
    }

    /// Runs a backend call with the loading flag raised, recording failures.
    async fn tracked<T>(
        &self,
        what: &str,
        call: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, SendError> {
        self.dispatch(TransactionAction::SetLoading(true));
        match call.await {
            Ok(value) => {
                self.dispatch(TransactionAction::SetLoading(false));
                Ok(value)
            }
            Err(e) => {
                warn!("{} failed: {:#}", what, e);
                self.dispatch(TransactionAction::SetError(Some(format!("{e:#}"))));
                Err(SendError::Backend(e))
            }
        }
    }
}

impl<B: WalletBridge> SendStore<B> {
    /// Starts a fresh flow for the wallet's active account.
    pub async fn enter_flow(&self) -> Result<(), SendError> {
        let network = self.backend.network().await.map_err(SendError::Backend)?;
        let account = self
            .backend
            .current_account()
            .await
            .map_err(SendError::Backend)?;
        let selected = self
            .backend
            .selected_address()
            .await
            .map_err(SendError::Backend)?;

        let context = if selected == account.address {
            AccountContext {
                network: Some(network),
                parent_address: account.parent_address.clone(),
                child_address: None,
                from_address: Some(account.address.clone()),
                from_contact: Some(account.contact()),
            }
        } else {
            AccountContext {
                network: Some(network),
                parent_address: Some(account.address.clone()),
                child_address: Some(selected.clone()),
                from_address: Some(selected.clone()),
                from_contact: Some(Contact::new(selected.clone(), account.name.clone())),
            }
        };

        info!("entering send flow from {} on {}", selected, network);
        let initial = SendState::new(&self.config);
        self.update(|state| {
            *state = initial;
            state.reduce(TransactionAction::InitTransactionState(context));
            state.from_account = Some(account);
        });
        Ok(())
    }

    /// Refreshes the native balance of the sender. Updates the selected token
    /// when it is the native one, dropping its spendable figure so that
    /// "max" falls back to the fresh balance.
    pub async fn refresh_native_balance(&self) -> Result<String, SendError> {
        let (address, _) = self.from_address_and_network()?;
        let balance = self
            .tracked("balance query", self.backend.balance(&address))
            .await?;

        self.update(|state| {
            if let Some(token) = state.draft.token_info.as_ref() {
                if token.token_type().is_native() {
                    let mut token = token.clone();
                    token.balance = Some(balance.clone());
                    token.available_balance_to_use = None;
                    state.reduce(TransactionAction::SetTokenInfo(token));
                }
            }
        });
        Ok(balance)
    }

    /// Validates the draft for its transfer kind, then signs and broadcasts it.
    ///
    /// Failures leave the draft intact so the user can retry.
    pub async fn execute_transaction(&self) -> Result<SendReceipt, SendError> {
        let request = self.read(build_transfer_request).inspect_err(|e| {
            warn!("transaction not ready: {}", e);
        })?;

        info!(
            "executing {} transfer from {} to {}",
            request.asset.kind(),
            request.from.address,
            request.to.address
        );

        match self.submit(&request).await {
            Ok(transaction_id) => {
                info!("transaction submitted: {}", transaction_id);
                self.update(|state| {
                    state.reduce(TransactionAction::SetLoading(false));
                    state.current_step = WizardStep::Submitted;
                });
                Ok(SendReceipt {
                    transaction_id,
                    request,
                })
            }
            Err(e) => {
                error!("transaction failed: {}", e);
                self.dispatch(TransactionAction::SetError(Some(e.to_string())));
                Err(e)
            }
        }
    }

    async fn submit(&self, request: &TransferRequest) -> Result<TransactionId, SendError> {
        let has_key = self
            .backend
            .check_available_account_keys(&request.from.address)
            .await
            .map_err(SendError::Backend)?;
        if !has_key {
            return Err(SendError::NoSigningKey(request.from.address.clone()));
        }

        self.dispatch(TransactionAction::SetLoading(true));
        self.backend
            .send_transfer(request)
            .await
            .map_err(SendError::Backend)
    }
}

impl<B: AssetQueries> SendStore<B> {
    pub async fn load_tokens(&self) -> Result<Vec<TokenInfo>, SendError> {
        let (address, network) = self.from_address_and_network()?;
        self.tracked("token query", self.backend.fetch_tokens(&address, network))
            .await
    }

    pub async fn load_nft_collections(&self) -> Result<Vec<NftCollection>, SendError> {
        let (address, network) = self.from_address_and_network()?;
        self.tracked(
            "collection query",
            self.backend.fetch_nft_collections(&address, network),
        )
        .await
    }

    /// Lists the NFTs of the selected collection.
    pub async fn load_collection_nfts(&self) -> Result<Vec<Nft>, SendError> {
        let (address, network) = self.from_address_and_network()?;
        let collection = self
            .read(|state| state.selected_collection.clone())
            .ok_or(SendError::MissingField(RequiredField::Collection))?;
        self.tracked(
            "collection contents query",
            self.backend.fetch_nft_collection(&address, &collection, network),
        )
        .await
    }

    /// Drops cached data a completed transfer made stale. Not called by
    /// [`SendStore::execute_transaction`]; the caller decides when.
    pub fn invalidate_affected_caches(&self, receipt: &SendReceipt) {
        let request = &receipt.request;
        self.backend
            .invalidate_tokens(&request.from.address, request.network);

        let collection_ids: BTreeSet<&str> = match &request.asset {
            TransferAsset::Token { .. } => BTreeSet::new(),
            TransferAsset::SingleNft { item, .. } => [item.nft.collection_id.as_str()].into(),
            TransferAsset::MultipleNfts { items, .. } => items
                .iter()
                .map(|item| item.nft.collection_id.as_str())
                .collect(),
        };
        for collection_id in collection_ids {
            self.backend
                .invalidate_nft_collection(&request.from.address, collection_id, request.network);
        }
    }
}

impl<B: AddressBook> SendStore<B> {
    pub async fn load_recent_recipients(&self) -> Result<Vec<Contact>, SendError> {
        self.tracked("recent recipients query", self.backend.fetch_recent())
            .await
    }

    pub async fn load_contacts(&self) -> Result<Vec<Contact>, SendError> {
        self.tracked("contacts query", self.backend.fetch_contacts())
            .await
    }
}
