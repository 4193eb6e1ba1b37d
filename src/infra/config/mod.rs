use {
    crate::{domain::denom::Denom, infra::evm::view},
    serde::Deserialize,
};

pub mod file;

pub use self::file::{from_toml, load};

/// Configuration of the transfer restrictions.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Prefix that marks a denom as backed by an ERC20 contract.
    pub denom_prefix: String,
    /// Gas cap for every view call.
    pub gas_cap: u64,
    /// How view calls that fail to execute are treated.
    pub call_error_policy: CallErrorPolicy,
    /// Reject boolean return words that are not exactly `0` or `1`.
    pub strict_bool_decoding: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            denom_prefix: Denom::PREFIX.to_owned(),
            gas_cap: view::DEFAULT_GAS_CAP,
            call_error_policy: CallErrorPolicy::FailOpen,
            strict_bool_decoding: false,
        }
    }
}

impl Config {
    /// Checks the values that would otherwise silently disable enforcement.
    ///
    /// An empty prefix turns every denom into a malformed contract-backed one
    /// and a zero gas cap makes every view call run out of gas.
    pub fn validate(&self) -> Result<(), InvalidConfig> {
        if self.denom_prefix.is_empty() {
            return Err(InvalidConfig::EmptyDenomPrefix);
        }
        if self.gas_cap == 0 {
            return Err(InvalidConfig::ZeroGasCap);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidConfig {
    #[error("denom-prefix must not be empty")]
    EmptyDenomPrefix,
    #[error("gas-cap must be positive")]
    ZeroGasCap,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CallErrorPolicy {
    /// Log the failure and treat the restriction as not present.
    #[default]
    FailOpen,
    /// Deny the transfer.
    FailClosed,
}
