//! Accounts and the display information shown for them.

use serde::Deserialize;
use serde::Serialize;

use crate::address::AddressType;

/// Display information for one side of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contact {
    pub id: Option<u64>,
    pub address: String,
    pub name: String,
    pub username: Option<String>,
    pub avatar: Option<String>,
}

impl Contact {
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// A wallet account that can act as sender or recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAccount {
    pub address: String,
    pub name: String,
    pub avatar: Option<String>,
    pub address_type: AddressType,
    /// The owning account when this is a linked child account.
    pub parent_address: Option<String>,
}

impl WalletAccount {
    /// An account whose kind is derived from its address.
    pub fn new(address: impl Into<String>, name: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            address_type: AddressType::from_address(&address),
            address,
            name: name.into(),
            avatar: None,
            parent_address: None,
        }
    }

    /// A linked child account owned by `parent_address`.
    pub fn child(
        address: impl Into<String>,
        name: impl Into<String>,
        parent_address: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            name: name.into(),
            avatar: None,
            address_type: AddressType::Child,
            parent_address: Some(parent_address.into()),
        }
    }

    pub fn contact(&self) -> Contact {
        Contact {
            id: None,
            address: self.address.clone(),
            name: self.name.clone(),
            username: None,
            avatar: self.avatar.clone(),
        }
    }
}
