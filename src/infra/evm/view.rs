//! Read-only contract calls that return a single `bool`.

use {
    super::{
        CallArgs,
        EngineError,
        EthCallRequest,
        Evm,
        method::{Call, Method, WORD_LEN},
    },
    crate::{
        boundary,
        domain::{account::NativeAddress, eth},
    },
};

/// Executes view calls against the embedded EVM.
///
/// Every call is made exactly once under the same gas cap. Failures are
/// reported to the caller as is; deciding how to degrade is up to the caller.
pub struct ViewCaller<E> {
    evm: E,
    gas_cap: u64,
    strict: bool,
}

/// A conservative gas cap for view functions.
pub const DEFAULT_GAS_CAP: u64 = 100_000;

impl<E: Evm> ViewCaller<E> {
    pub fn new(evm: E, gas_cap: u64) -> Self {
        Self {
            evm,
            gas_cap,
            strict: false,
        }
    }

    /// Reject boolean return words whose high 31 bytes are not zero.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn gas_cap(&self) -> u64 {
        self.gas_cap
    }

    /// Checks if the ERC20 contract at `contract` is paused.
    pub fn is_token_paused(&self, contract: &str) -> Result<bool, CallError> {
        let contract = eth::ContractAddress::parse(contract)?;
        self.paused(contract)
    }

    /// Checks if `account` is blacklisted by the ERC20 contract at
    /// `contract`.
    pub fn is_address_blacklisted(
        &self,
        contract: &str,
        account: &NativeAddress,
    ) -> Result<bool, CallError> {
        let contract = eth::ContractAddress::parse(contract)?;
        self.blacklisted(contract, boundary::address::to_evm(account))
    }

    /// Calls `paused()` on `contract`.
    pub fn paused(&self, contract: eth::ContractAddress) -> Result<bool, CallError> {
        self.call_bool(contract, Call::Paused)
    }

    /// Calls `isBlacklisted(account)` on `contract`.
    pub fn blacklisted(
        &self,
        contract: eth::ContractAddress,
        account: eth::Address,
    ) -> Result<bool, CallError> {
        self.call_bool(contract, Call::IsBlacklisted(account))
    }

    /// Executes `call` on `contract` and decodes a single `bool` from its
    /// return data.
    pub fn call_bool(&self, contract: eth::ContractAddress, call: Call) -> Result<bool, CallError> {
        let method = call.method();
        let calldata = call.encode();
        let request = EthCallRequest::new(&CallArgs::new(contract, &calldata.0), self.gas_cap);

        let response = self
            .evm
            .eth_call(&request)
            .map_err(|source| CallError::Engine {
                method,
                contract,
                source,
            })?;
        if response.failed() {
            return Err(CallError::Reverted {
                method,
                contract,
                reason: response.vm_error,
            });
        }

        let value = decode_bool(&response.ret, self.strict).map_err(|source| {
            CallError::Decode {
                method,
                contract,
                source,
            }
        })?;
        tracing::trace!(%contract, %method, value, "view call");
        Ok(value)
    }
}

/// Decodes an ABI encoded `bool` from the first word of `ret`.
///
/// The value is `true` if the last byte of the word is non-zero. In strict
/// mode the word must be exactly `0` or `1`.
pub fn decode_bool(ret: &[u8], strict: bool) -> Result<bool, DecodeError> {
    let word = ret
        .get(..WORD_LEN)
        .ok_or(DecodeError::TooShort { len: ret.len() })?;
    let (high, last) = word.split_at(WORD_LEN - 1);
    if strict && (high.iter().any(|b| *b != 0) || last[0] > 1) {
        return Err(DecodeError::NonCanonical);
    }
    Ok(last[0] != 0)
}

#[derive(Debug, thiserror::Error)]
pub enum CallError {
    #[error(transparent)]
    InvalidAddress(#[from] eth::InvalidAddress),

    #[error("failed to call {method} on contract {contract}: {source}")]
    Engine {
        method: Method,
        contract: eth::ContractAddress,
        source: EngineError,
    },

    #[error("{method} call on contract {contract} failed: {reason}")]
    Reverted {
        method: Method,
        contract: eth::ContractAddress,
        reason: String,
    },

    #[error("invalid response from {method} on contract {contract}: {source}")]
    Decode {
        method: Method,
        contract: eth::ContractAddress,
        source: DecodeError,
    },
}

impl CallError {
    /// Returns `true` for malformed inputs that were rejected before reaching
    /// the engine, as opposed to calls that failed to execute.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidAddress(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("invalid response length: {len}")]
    TooShort { len: usize },
    #[error("non-canonical boolean word")]
    NonCanonical,
}
