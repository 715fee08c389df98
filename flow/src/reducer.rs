//! Pure state transitions for a [`TransactionDraft`].
//!
//! The reducer never fails and never performs I/O. Callers validate
//! addresses, amounts and selection limits before dispatching.

use api::account::Contact;
use api::address::AddressType;
use api::network::Network;
use api::token::TokenInfo;

use crate::draft::FiatOrCoin;
use crate::draft::TransactionDraft;

/// Account context merged into the draft on flow entry or account change.
///
/// `None` fields leave the draft untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountContext {
    pub network: Option<Network>,
    pub parent_address: Option<String>,
    pub child_address: Option<String>,
    pub from_address: Option<String>,
    pub from_contact: Option<Contact>,
}

impl AccountContext {
    pub fn from_address(address: impl Into<String>) -> Self {
        Self {
            from_address: Some(address.into()),
            ..Default::default()
        }
    }

    pub fn with_network(mut self, network: Network) -> Self {
        self.network = Some(network);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionAction {
    InitTransactionState(AccountContext),
    SetFromAddress(AccountContext),
    SetToAddress { address: String, contact: Contact },
    SetTokenInfo(TokenInfo),
    SetAmount(String),
    SetFiatAmount(String),
    SetFiatOrCoin(FiatOrCoin),
    SwitchFiatOrCoin,
    SetAmountToMax,
    SetFee(Option<String>),
    SetLoading(bool),
    SetError(Option<String>),
    /// Back to [`TransactionDraft::default`]. `SendStore::dispatch` resets to
    /// the configured initial draft instead.
    Reset,
}

pub fn transaction_reducer(mut state: TransactionDraft, action: TransactionAction) -> TransactionDraft {
    match action {
        TransactionAction::InitTransactionState(context) | TransactionAction::SetFromAddress(context) => {
            merge_account_context(&mut state, context);
        }
        TransactionAction::SetToAddress { address, contact } => {
            state.to_address_type = AddressType::from_address(&address);
            state.to_address = address;
            state.to_contact = contact;
        }
        TransactionAction::SetTokenInfo(token_info) => {
            state.token_type = token_info.token_type();
            state.token_info = Some(token_info);
        }
        TransactionAction::SetAmount(amount) => state.amount = amount,
        TransactionAction::SetFiatAmount(amount) => state.fiat_amount = amount,
        TransactionAction::SetFiatOrCoin(mode) => state.fiat_or_coin = mode,
        TransactionAction::SwitchFiatOrCoin => state.fiat_or_coin = state.fiat_or_coin.toggled(),
        TransactionAction::SetAmountToMax => {
            state.amount = max_amount(state.token_info.as_ref()).to_string();
        }
        TransactionAction::SetFee(fee) => state.fee = fee,
        TransactionAction::SetLoading(is_loading) => state.is_loading = is_loading,
        TransactionAction::SetError(error) => {
            state.error = error;
            state.is_loading = false;
        }
        TransactionAction::Reset => return TransactionDraft::default(),
    }
    state
}

/// The most that can be sent of `token`: its spendable balance when known,
/// else its raw balance, else `"0"`.
pub fn max_amount(token: Option<&TokenInfo>) -> &str {
    token
        .and_then(|t| {
            t.available_balance_to_use
                .as_deref()
                .or(t.balance.as_deref())
        })
        .unwrap_or("0")
}

fn merge_account_context(state: &mut TransactionDraft, context: AccountContext) {
    let AccountContext {
        network,
        parent_address,
        child_address,
        from_address,
        from_contact,
    } = context;

    if let Some(network) = network {
        state.network = network;
    }
    if parent_address.is_some() {
        state.parent_address = parent_address;
    }
    if child_address.is_some() {
        state.child_address = child_address;
    }
    if let Some(from_address) = from_address {
        state.from_address = from_address;
    }
    if let Some(from_contact) = from_contact {
        state.from_contact = from_contact;
    }

    state.from_address_type = from_address_type(state);
}

fn from_address_type(state: &TransactionDraft) -> AddressType {
    let is_child = !state.from_address.is_empty()
        && state.child_address.as_deref() == Some(state.from_address.as_str());

    match AddressType::from_address(&state.from_address) {
        AddressType::Evm => AddressType::Evm,
        _ if is_child => AddressType::Child,
        _ => AddressType::Native,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::token::TokenType;

    const FROM: &str = "0x1d007eed492fdbbe";
    const TO: &str = "0x2e2f0f8d1b7c4a39";
    const EVM: &str = "0x00000000000000000000000235f0a1d5c3e3b1f7";

    fn apply(actions: impl IntoIterator<Item = TransactionAction>) -> TransactionDraft {
        actions
            .into_iter()
            .fold(TransactionDraft::default(), transaction_reducer)
    }

    fn token(available: Option<&str>, balance: Option<&str>) -> TokenInfo {
        TokenInfo {
            available_balance_to_use: available.map(str::to_string),
            balance: balance.map(str::to_string),
            ..TokenInfo::new("FLOW", 8)
        }
    }

    #[test]
    fn token_send_scenario() {
        let state = apply([
            TransactionAction::InitTransactionState(
                AccountContext::from_address(FROM).with_network(Network::Mainnet),
            ),
            TransactionAction::SetToAddress {
                address: TO.into(),
                contact: Contact::new(TO, "Bob"),
            },
            TransactionAction::SetTokenInfo(token(None, Some("10.0"))),
            TransactionAction::SetAmount("5.0".into()),
        ]);

        assert_eq!(state.network, Network::Mainnet);
        assert_eq!(state.from_address, FROM);
        assert_eq!(state.from_address_type, AddressType::Native);
        assert_eq!(state.to_address, TO);
        assert_eq!(state.to_address_type, AddressType::Native);
        assert_eq!(state.to_contact.name, "Bob");
        assert_eq!(state.token_info.as_ref().unwrap().symbol, "FLOW");
        assert_eq!(state.token_type, TokenType::Native);
        assert_eq!(state.token_type.to_string(), "Flow");
        assert_eq!(state.amount, "5.0");
    }

    #[test]
    fn placeholder_recipient_defaults_to_native() {
        let state = apply([TransactionAction::SetToAddress {
            address: "0xBBB...".into(),
            contact: Contact::default(),
        }]);
        assert_eq!(state.to_address_type, AddressType::Native);
    }

    #[test]
    fn evm_recipient_is_detected() {
        let state = apply([TransactionAction::SetToAddress {
            address: EVM.into(),
            contact: Contact::default(),
        }]);
        assert_eq!(state.to_address_type, AddressType::Evm);
    }

    #[test]
    fn set_to_address_is_deterministic() {
        let action = TransactionAction::SetToAddress {
            address: TO.into(),
            contact: Contact::new(TO, "Bob"),
        };
        let once = apply([action.clone()]);
        let twice = transaction_reducer(once.clone(), action);
        assert_eq!(once, twice);
    }

    #[test]
    fn fungible_tokens_are_not_native() {
        let state = apply([TransactionAction::SetTokenInfo(TokenInfo::new("USDC", 6))]);
        assert_eq!(state.token_type, TokenType::Fungible);

        let state = apply([TransactionAction::SetTokenInfo(TokenInfo::new("flow", 8))]);
        assert_eq!(state.token_type, TokenType::Native);
    }

    #[test]
    fn max_prefers_available_balance() {
        let cases = [
            (Some("3.2"), Some("10.0"), "3.2"),
            (Some("3.2"), None, "3.2"),
            (None, Some("10.0"), "10.0"),
            (None, None, "0"),
        ];
        for (available, balance, expected) in cases {
            let state = apply([
                TransactionAction::SetTokenInfo(token(available, balance)),
                TransactionAction::SetAmountToMax,
            ]);
            assert_eq!(state.amount, expected, "{available:?} {balance:?}");
        }

        let state = apply([TransactionAction::SetAmountToMax]);
        assert_eq!(state.amount, "0");
    }

    #[test]
    fn switching_twice_restores_mode() {
        for mode in [FiatOrCoin::Coin, FiatOrCoin::Fiat] {
            let start = apply([
                TransactionAction::SetFiatOrCoin(mode),
                TransactionAction::SetAmount("1.5".into()),
                TransactionAction::SetFiatAmount("2.25".into()),
            ]);
            let once = transaction_reducer(start.clone(), TransactionAction::SwitchFiatOrCoin);
            assert_eq!(once.fiat_or_coin, mode.toggled());
            assert_eq!(once.amount, "1.5");
            assert_eq!(once.fiat_amount, "2.25");

            let twice = transaction_reducer(once, TransactionAction::SwitchFiatOrCoin);
            assert_eq!(twice, start);
        }
    }

    #[test]
    fn amounts_are_stored_verbatim() {
        let state = apply([
            TransactionAction::SetAmount("not a number".into()),
            TransactionAction::SetFiatAmount("".into()),
        ]);
        assert_eq!(state.amount, "not a number");
        assert_eq!(state.fiat_amount, "");
    }

    #[test]
    fn error_ends_loading() {
        let state = apply([
            TransactionAction::SetLoading(true),
            TransactionAction::SetError(Some("boom".into())),
        ]);
        assert!(!state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));

        let state = transaction_reducer(state, TransactionAction::SetLoading(true));
        assert!(state.is_loading);
        assert_eq!(state.error.as_deref(), Some("boom"));
    }

    #[test]
    fn reset_returns_defaults() {
        let state = apply([
            TransactionAction::InitTransactionState(AccountContext::from_address(FROM)),
            TransactionAction::SetTokenInfo(token(Some("1"), Some("2"))),
            TransactionAction::SetAmountToMax,
            TransactionAction::SetFee(Some("0.001".into())),
            TransactionAction::SetFiatOrCoin(FiatOrCoin::Fiat),
            TransactionAction::SetError(Some("x".into())),
            TransactionAction::Reset,
        ]);
        assert_eq!(state, TransactionDraft::default());
    }

    #[test]
    fn child_accounts_are_recognized_from_context() {
        let state = apply([TransactionAction::InitTransactionState(AccountContext {
            parent_address: Some(FROM.into()),
            child_address: Some(TO.into()),
            from_address: Some(TO.into()),
            ..Default::default()
        })]);
        assert_eq!(state.from_address_type, AddressType::Child);

        let state = transaction_reducer(
            state,
            TransactionAction::SetFromAddress(AccountContext::from_address(FROM)),
        );
        assert_eq!(state.from_address_type, AddressType::Native);
        assert_eq!(state.parent_address.as_deref(), Some(FROM));

        let state = transaction_reducer(
            state,
            TransactionAction::SetFromAddress(AccountContext::from_address(EVM)),
        );
        assert_eq!(state.from_address_type, AddressType::Evm);
    }

    #[test]
    fn partial_context_keeps_other_fields() {
        let state = apply([
            TransactionAction::InitTransactionState(AccountContext {
                network: Some(Network::Testnet),
                from_address: Some(FROM.into()),
                from_contact: Some(Contact::new(FROM, "Alice")),
                ..Default::default()
            }),
            TransactionAction::SetFromAddress(AccountContext::default()),
        ]);
        assert_eq!(state.network, Network::Testnet);
        assert_eq!(state.from_contact.name, "Alice");
        assert_eq!(state.from_address, FROM);
    }
}
