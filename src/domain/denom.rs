//! Asset identifiers ("denoms") and the recognition of contract-backed
//! assets.

use {
    crate::domain::eth,
    std::fmt::{self, Display, Formatter},
};

/// A token identifier as used by the ledger's transfer path.
///
/// Denoms of the form `<prefix><contract>` (e.g.
/// `erc20:0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48`) are backed by an ERC20
/// contract. All other denoms are native to the ledger.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Denom<'a>(pub &'a str);

impl Denom<'_> {
    /// The reserved prefix of contract-backed denoms.
    pub const PREFIX: &'static str = "erc20:";

    /// Returns the backing contract of the denom when it carries `prefix`.
    ///
    /// Denoms without the prefix yield `Ok(None)`. A prefixed denom whose
    /// remainder is not a well-formed address is an error.
    pub fn contract(&self, prefix: &str) -> Result<Option<eth::ContractAddress>, InvalidDenom> {
        let Some(suffix) = self.0.strip_prefix(prefix) else {
            return Ok(None);
        };
        eth::ContractAddress::parse(suffix)
            .map(Some)
            .map_err(|source| InvalidDenom {
                denom: self.0.to_owned(),
                source,
            })
    }
}

impl Display for Denom<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A contract-backed denom with a malformed contract address.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid ERC20 contract address in denom {denom}")]
pub struct InvalidDenom {
    pub denom: String,
    #[source]
    pub source: eth::InvalidAddress,
}
