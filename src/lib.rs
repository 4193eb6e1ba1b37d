//! Transfer restrictions for ledger denoms backed by ERC20 contracts on the
//! embedded EVM.
//!
//! [`Restrictions`] is invoked by the transfer path before a transfer is
//! committed. It answers from the contract's `paused()` and
//! `isBlacklisted(address)` view functions, executed synchronously through the
//! [`Evm`] read-only call entry point.

pub mod boundary;
pub mod domain;
pub mod infra;
pub mod util;

#[cfg(test)]
mod tests;

pub use {
    domain::{
        account::NativeAddress,
        denom::{Denom, InvalidDenom},
        eth::{Address, ContractAddress, InvalidAddress},
        restriction::{
            CallErrorPolicy,
            Check,
            Decision,
            Error,
            FailClosed,
            FailOpen,
            Outcome,
            Restriction,
            Restrictions,
        },
    },
    infra::{
        config::{Config, InvalidConfig},
        evm::{CallArgs, EngineError, EthCallRequest, EthCallResponse, Evm, ViewCaller},
    },
};
