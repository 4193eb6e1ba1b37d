//! Calldata encoding for the view functions of restricted ERC20 contracts.

use {
    crate::{domain::eth, util},
    std::fmt::{self, Debug, Formatter},
};

/// A 4-byte function selector.
pub type Selector = [u8; 4];

/// Size of an ABI word.
pub const WORD_LEN: usize = 32;

/// The view functions queried on restricted ERC20 contracts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Method {
    /// `paused() returns (bool)`
    Paused,
    /// `isBlacklisted(address) returns (bool)`
    IsBlacklisted,
}

impl Method {
    /// The Solidity signature of the function.
    pub const fn signature(self) -> &'static str {
        match self {
            Self::Paused => "paused()",
            Self::IsBlacklisted => "isBlacklisted(address)",
        }
    }

    /// The first four bytes of the keccak256 hash of the signature.
    pub const fn selector(self) -> Selector {
        match self {
            Self::Paused => [0x5c, 0x97, 0x5a, 0xbb],
            Self::IsBlacklisted => [0xfe, 0x57, 0x5a, 0x87],
        }
    }

    /// The number of address arguments the function takes.
    pub const fn arity(self) -> usize {
        match self {
            Self::Paused => 0,
            Self::IsBlacklisted => 1,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.signature())
    }
}

/// A view function together with its arguments.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Call {
    Paused,
    IsBlacklisted(eth::Address),
}

impl Call {
    pub fn method(&self) -> Method {
        match self {
            Self::Paused => Method::Paused,
            Self::IsBlacklisted(_) => Method::IsBlacklisted,
        }
    }

    /// ABI encodes the call.
    pub fn encode(&self) -> Calldata {
        match self {
            Self::Paused => encode(Method::Paused.selector(), None),
            Self::IsBlacklisted(account) => encode(Method::IsBlacklisted.selector(), Some(account)),
        }
    }
}

/// Encoded calldata.
#[derive(Clone, Eq, PartialEq)]
pub struct Calldata(pub Vec<u8>);

impl Debug for Calldata {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_tuple("Calldata")
            .field(&util::fmt::Hex(&self.0))
            .finish()
    }
}

/// Encodes a selector followed by an optional address argument. The address
/// is right-aligned in a zero-padded 32-byte word.
pub fn encode(selector: Selector, arg: Option<&eth::Address>) -> Calldata {
    let mut data = Vec::with_capacity(selector.len() + WORD_LEN);
    data.extend_from_slice(&selector);
    if let Some(address) = arg {
        data.extend_from_slice(&[0; WORD_LEN - eth::ADDRESS_LEN]);
        data.extend_from_slice(address.as_slice());
    }
    Calldata(data)
}
