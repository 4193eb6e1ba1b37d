//! Ledger account addresses.

use {
    crate::util,
    std::fmt::{self, Debug, Display, Formatter},
};

/// An account address of the native ledger. The bytes are opaque to this
/// crate; they are usually 20 bytes long.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct NativeAddress(pub Vec<u8>);

impl NativeAddress {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for NativeAddress {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for NativeAddress {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl Debug for NativeAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("NativeAddress")
            .field(&util::fmt::Hex(&self.0))
            .finish()
    }
}

impl Display for NativeAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&util::fmt::Hex(&self.0), f)
    }
}
