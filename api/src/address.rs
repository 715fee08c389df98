//! Classification of account addresses by their textual shape.
//!
//! The wallet supports two recipient shapes. Native chain accounts are `0x`
//! followed by 16 hex digits, EVM-style accounts are `0x` followed by 40 hex
//! digits. The classification never fails: callers that need to know whether
//! an address was actually recognized use [`AddressShape::classify`], everyone
//! else goes through [`AddressType::from_address`].

use dioxus_logger::tracing::debug;
use serde::Deserialize;
use serde::Serialize;

use crate::nft::NftCollection;

const NATIVE_HEX_LEN: usize = 16;
const EVM_HEX_LEN: usize = 40;

/// The raw shape of an address string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIs)]
pub enum AddressShape {
    Native,
    Evm,
    Unrecognized,
}

impl AddressShape {
    pub fn classify(address: &str) -> Self {
        let Some(hex) = address
            .strip_prefix("0x")
            .or_else(|| address.strip_prefix("0X"))
        else {
            return Self::Unrecognized;
        };

        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Self::Unrecognized;
        }

        match hex.len() {
            NATIVE_HEX_LEN => Self::Native,
            EVM_HEX_LEN => Self::Evm,
            _ => Self::Unrecognized,
        }
    }
}

/// The kind of account on either side of a transfer.
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
    strum::IntoStaticStr,
)]
pub enum AddressType {
    /// A native (Cadence) chain account.
    #[default]
    Native,
    /// An EVM-style account.
    Evm,
    /// A linked child account. Only ever assigned from account context, never
    /// derived from an address string.
    Child,
}

impl AddressType {
    /// Derives the account kind from the textual form of `address`.
    ///
    /// Anything that is not EVM-shaped is treated as a native account,
    /// including strings that match neither shape.
    pub fn from_address(address: &str) -> Self {
        match AddressShape::classify(address) {
            AddressShape::Evm => Self::Evm,
            AddressShape::Native => Self::Native,
            AddressShape::Unrecognized => {
                debug!("unrecognized address shape {:?}, treating as native", address);
                Self::Native
            }
        }
    }
}

/// Whether an NFT from `collection` can be deposited into an account of kind `to`.
///
/// EVM accounts can only hold collections that are bridged to EVM.
pub fn can_receive_nft(collection: &NftCollection, to: AddressType) -> bool {
    match to {
        AddressType::Evm => collection.is_evm_bridged(),
        AddressType::Native | AddressType::Child => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NATIVE: &str = "0x1d007eed492fdbbe";
    const EVM: &str = "0x00000000000000000000000235f0a1d5c3e3b1f7";

    #[test]
    fn classifies_known_shapes() {
        assert_eq!(AddressShape::classify(NATIVE), AddressShape::Native);
        assert_eq!(AddressShape::classify(EVM), AddressShape::Evm);
        assert_eq!(AddressShape::classify("0X1D007EED492FDBBE"), AddressShape::Native);
    }

    #[test]
    fn unrecognized_shapes_are_reported() {
        for addr in ["", "0x", "1d007eed492fdbbe", "0x1d007eed492fdbbz", "0xBBB...", " 0x1d007eed492fdbbe"] {
            assert_eq!(AddressShape::classify(addr), AddressShape::Unrecognized, "{addr:?}");
        }
    }

    #[test]
    fn unrecognized_addresses_default_to_native() {
        assert_eq!(AddressType::from_address("0xBBB..."), AddressType::Native);
        assert_eq!(AddressType::from_address("not an address"), AddressType::Native);
        assert_eq!(AddressType::from_address(EVM), AddressType::Evm);
    }

    #[test]
    fn evm_recipients_need_bridged_collections() {
        let mut collection = NftCollection {
            id: "topshot".into(),
            name: "TopShot".into(),
            ..Default::default()
        };
        assert!(can_receive_nft(&collection, AddressType::Native));
        assert!(can_receive_nft(&collection, AddressType::Child));
        assert!(!can_receive_nft(&collection, AddressType::Evm));

        collection.evm_address = Some(EVM.into());
        assert!(can_receive_nft(&collection, AddressType::Evm));
    }
}
