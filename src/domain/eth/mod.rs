pub use alloy::primitives::Address;

use std::fmt::{self, Display, Formatter};

/// Length of an address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// A contract address.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContractAddress(pub Address);

impl ContractAddress {
    /// Parses a hex encoded contract address. See [`parse_address`] for the
    /// accepted syntax.
    pub fn parse(s: &str) -> Result<Self, InvalidAddress> {
        parse_address(s).map(Self)
    }
}

impl From<Address> for ContractAddress {
    fn from(inner: Address) -> Self {
        Self(inner)
    }
}

impl Display for ContractAddress {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Parses a hex encoded 20-byte address.
///
/// The `0x` (or `0X`) prefix is optional and digits are matched
/// case-insensitively. Mixed-case input is accepted without verifying the
/// EIP-55 checksum.
pub fn parse_address(s: &str) -> Result<Address, InvalidAddress> {
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    if digits.len() != 2 * ADDRESS_LEN
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(InvalidAddress(s.to_owned()));
    }
    let bytes = hex::decode(digits).map_err(|_| InvalidAddress(s.to_owned()))?;
    Ok(Address::from_slice(&bytes))
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid contract address: {0}")]
pub struct InvalidAddress(pub String);
