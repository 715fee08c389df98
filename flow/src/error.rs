//! Failures surfaced by the send store's async operations.

use api::amount::ParseAmountError;
use api::bridge::Translator;
use api::ApiError;
use thiserror::Error;

/// A field that must be set before a transfer can be executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum RequiredField {
    FromAddress,
    Recipient,
    Token,
    Nft,
    Collection,
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("missing required field: {0}")]
    MissingField(RequiredField),

    #[error("invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("amount must be greater than zero")]
    ZeroAmount,

    #[error("recipient cannot hold NFTs from collection {0}")]
    IncompatibleRecipient(String),

    #[error("no key available to sign for {0}")]
    NoSigningKey(String),

    #[error("backend call failed: {0:#}")]
    Backend(ApiError),
}

impl SendError {
    /// Translation key of the message shown to the user.
    pub fn message_key(&self) -> &'static str {
        match self {
            Self::MissingField(RequiredField::FromAddress) => "send.error.missing_sender",
            Self::MissingField(RequiredField::Recipient) => "send.error.missing_recipient",
            Self::MissingField(RequiredField::Token) => "send.error.missing_token",
            Self::MissingField(RequiredField::Nft) => "send.error.missing_nft",
            Self::MissingField(RequiredField::Collection) => "send.error.missing_collection",
            Self::InvalidAmount(_) => "send.error.invalid_amount",
            Self::ZeroAmount => "send.error.zero_amount",
            Self::IncompatibleRecipient(_) => "send.error.incompatible_recipient",
            Self::NoSigningKey(_) => "send.error.no_signing_key",
            Self::Backend(_) => "send.error.transaction_failed",
        }
    }

    pub fn localized(&self, translator: &impl Translator) -> String {
        match self {
            Self::IncompatibleRecipient(collection) => {
                translator.t(self.message_key(), &[("collection", collection)])
            }
            Self::NoSigningKey(address) => translator.t(self.message_key(), &[("address", address)]),
            _ => translator.t(self.message_key(), &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoTranslator;

    impl Translator for EchoTranslator {
        fn t(&self, key: &str, params: &[(&str, &str)]) -> String {
            let params: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
            format!("{key}[{}]", params.join(","))
        }
    }

    #[test]
    fn messages_are_keys_not_literals() {
        let err = SendError::MissingField(RequiredField::Recipient);
        assert_eq!(err.localized(&EchoTranslator), "send.error.missing_recipient[]");

        let err = SendError::IncompatibleRecipient("TopShot".into());
        assert_eq!(
            err.localized(&EchoTranslator),
            "send.error.incompatible_recipient[collection=TopShot]"
        );
    }

    #[test]
    fn backend_errors_keep_their_context() {
        let err = SendError::Backend(anyhow::anyhow!("rpc timeout").context("sending transfer"));
        assert_eq!(err.to_string(), "backend call failed: sending transfer: rpc timeout");
        assert_eq!(err.message_key(), "send.error.transaction_failed");
    }
}
