//! Derived views over [`SendState`].

use api::amount::DecimalAmount;
use api::token::TokenInfo;
use api::token::TokenType;
use api::transfer::TransactionKind;
use num_traits::CheckedAdd;

use crate::reducer::max_amount;
use crate::store::SendState;

/// The kind implied by the current selections alone, ignoring the explicit tag.
pub fn selection_kind(state: &SendState) -> Option<TransactionKind> {
    match state.nft_selection.len() {
        0 if state.draft.token_info.is_some() => Some(TransactionKind::Tokens),
        0 => None,
        1 => Some(TransactionKind::SingleNft),
        _ => Some(TransactionKind::MultipleNfts),
    }
}

/// Largest amount of `token` that can be sent, honouring reserved funds.
pub fn max_transferable(token: &TokenInfo) -> Option<DecimalAmount> {
    DecimalAmount::parse(max_amount(Some(token)), token.decimals).ok()
}

/// Whether the entered amount (plus the fee, for the native token) exceeds
/// what can be sent. Unparseable amounts count as not exceeding; validation
/// reports those.
pub fn exceeds_balance(state: &SendState) -> bool {
    let Some(token) = state.draft.token_info.as_ref() else {
        return false;
    };
    let (Ok(amount), Some(max)) = (
        DecimalAmount::parse(&state.draft.amount, token.decimals),
        max_transferable(token),
    ) else {
        return false;
    };

    let fee = state
        .draft
        .fee
        .as_deref()
        .filter(|_| token.token_type() == TokenType::Native)
        .and_then(|fee| DecimalAmount::parse(fee, token.decimals).ok());

    let total = match fee {
        Some(fee) => match amount.checked_add(&fee) {
            Some(total) => total,
            None => return true,
        },
        None => amount,
    };
    total > max
}

/// Sum of quantities across the selected NFTs.
pub fn total_nft_quantity(state: &SendState) -> u64 {
    state
        .nft_selection
        .items()
        .map(|(_, quantity)| quantity)
        .fold(0, u64::saturating_add)
}

/// Whether the confirm step has everything it needs for the tagged kind.
pub fn is_ready_to_confirm(state: &SendState) -> bool {
    let draft = &state.draft;
    if draft.from_address.is_empty() || draft.to_address.is_empty() {
        return false;
    }

    match state.transaction_type {
        TransactionKind::Tokens => match draft.token_info.as_ref() {
            Some(token) => DecimalAmount::parse(&draft.amount, token.decimals)
                .map(|amount| !amount.is_zero())
                .unwrap_or(false),
            None => false,
        },
        TransactionKind::SingleNft | TransactionKind::MultipleNfts => !state.nft_selection.is_empty(),
    }
}
