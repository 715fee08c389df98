//! Positions in the send wizard.

use api::transfer::TransactionKind;
use serde::Deserialize;
use serde::Serialize;

/// The screen the send flow is currently showing.
///
/// Screens report their step on mount. Routing decides what is reachable;
/// nothing here guards against out-of-order steps.
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
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    #[default]
    SelectTokens,
    SendTo,
    SendTokens,
    SendNft,
    Confirm,
    Submitted,
    Cancelled,
}

impl WizardStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted | Self::Cancelled)
    }

    /// Route name handed to the navigator.
    pub fn screen_name(&self) -> &'static str {
        match self {
            Self::SelectTokens => "SelectTokens",
            Self::SendTo => "SendTo",
            Self::SendTokens => "SendTokens",
            Self::SendNft => "SendNFT",
            Self::Confirm => "Confirm",
            Self::Submitted => "TransactionSubmitted",
            Self::Cancelled => "Home",
        }
    }

    /// The step that follows `self` for a transfer of `kind`.
    pub fn next(&self, kind: TransactionKind) -> Option<Self> {
        match self {
            Self::SelectTokens => Some(Self::SendTo),
            Self::SendTo => Some(Self::amount_step(kind)),
            Self::SendTokens | Self::SendNft => Some(Self::Confirm),
            Self::Confirm => Some(Self::Submitted),
            Self::Submitted | Self::Cancelled => None,
        }
    }

    /// The step that precedes `self` for a transfer of `kind`.
    pub fn previous(&self, kind: TransactionKind) -> Option<Self> {
        match self {
            Self::SelectTokens | Self::Submitted | Self::Cancelled => None,
            Self::SendTo => Some(Self::SelectTokens),
            Self::SendTokens | Self::SendNft => Some(Self::SendTo),
            Self::Confirm => Some(Self::amount_step(kind)),
        }
    }

    fn amount_step(kind: TransactionKind) -> Self {
        match kind {
            TransactionKind::Tokens => Self::SendTokens,
            TransactionKind::SingleNft | TransactionKind::MultipleNfts => Self::SendNft,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_path() {
        let kind = TransactionKind::Tokens;
        let mut step = WizardStep::default();
        let mut path = vec![step];
        while let Some(next) = step.next(kind) {
            path.push(next);
            step = next;
        }
        assert_eq!(
            path,
            vec![
                WizardStep::SelectTokens,
                WizardStep::SendTo,
                WizardStep::SendTokens,
                WizardStep::Confirm,
                WizardStep::Submitted,
            ]
        );
    }

    #[test]
    fn nft_kinds_branch_to_send_nft() {
        for kind in [TransactionKind::SingleNft, TransactionKind::MultipleNfts] {
            assert_eq!(WizardStep::SendTo.next(kind), Some(WizardStep::SendNft));
            assert_eq!(WizardStep::Confirm.previous(kind), Some(WizardStep::SendNft));
        }
    }

    #[test]
    fn terminal_steps_go_nowhere() {
        for step in [WizardStep::Submitted, WizardStep::Cancelled] {
            assert!(step.is_terminal());
            assert_eq!(step.next(TransactionKind::Tokens), None);
            assert_eq!(step.previous(TransactionKind::Tokens), None);
        }
        assert_eq!(WizardStep::SendNft.to_string(), "send-nft");
    }
}
