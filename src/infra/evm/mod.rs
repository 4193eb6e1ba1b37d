//! Bindings to the embedded EVM execution engine.
//!
//! This crate only depends on the engine's synchronous read-only call entry
//! point (`eth_call`). The request and response shapes mirror what the engine
//! exposes: JSON encoded call arguments with a gas cap in, raw return data and
//! a VM error string out.

use {
    crate::{domain::eth, util},
    serde::{Deserialize, Serialize},
    std::fmt::{self, Debug, Formatter},
};

pub mod method;
pub mod view;

pub use self::{
    method::Method,
    view::{CallError, DecodeError, ViewCaller},
};

/// The execution engine's read-only call entry point.
///
/// Implementations must be deterministic: the same request against the same
/// state yields the same response on every node. They run the call to
/// completion before returning and never mutate state.
#[cfg_attr(test, mockall::automock)]
pub trait Evm {
    fn eth_call(&self, request: &EthCallRequest) -> Result<EthCallResponse, EngineError>;
}

impl<T: Evm + ?Sized> Evm for &T {
    fn eth_call(&self, request: &EthCallRequest) -> Result<EthCallResponse, EngineError> {
        (**self).eth_call(request)
    }
}

/// A read-only call as submitted to the engine.
#[derive(Clone, Eq, PartialEq)]
pub struct EthCallRequest {
    /// JSON serialized [`CallArgs`].
    pub args: Vec<u8>,
    /// Upper bound on the gas the call may consume.
    pub gas_cap: u64,
}

impl EthCallRequest {
    pub fn new(args: &CallArgs, gas_cap: u64) -> Self {
        Self {
            args: serde_json::to_vec(args).expect("call args are two strings"),
            gas_cap,
        }
    }

    /// Decodes the call arguments of the request.
    pub fn call_args(&self) -> Result<CallArgs, serde_json::Error> {
        serde_json::from_slice(&self.args)
    }
}

impl Debug for EthCallRequest {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("EthCallRequest")
            .field("args", &String::from_utf8_lossy(&self.args))
            .field("gas_cap", &self.gas_cap)
            .finish()
    }
}

/// Call arguments in the engine's JSON representation. Both fields are `0x`
/// prefixed hex strings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CallArgs {
    pub to: String,
    pub data: String,
}

impl CallArgs {
    pub fn new(to: eth::ContractAddress, data: &[u8]) -> Self {
        Self {
            to: to.to_string(),
            data: util::fmt::Hex(data).to_string(),
        }
    }
}

/// The outcome of a call that the engine managed to execute.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct EthCallResponse {
    /// Raw return data of the call.
    pub ret: Vec<u8>,
    /// The VM error that aborted the call. Empty on success.
    pub vm_error: String,
}

impl EthCallResponse {
    /// A successful call returning `ret`.
    pub fn success(ret: Vec<u8>) -> Self {
        Self {
            ret,
            vm_error: String::new(),
        }
    }

    /// A call that was aborted by the VM, e.g. because it reverted or ran out
    /// of gas.
    pub fn failure(vm_error: impl Into<String>) -> Self {
        Self {
            ret: Vec::new(),
            vm_error: vm_error.into(),
        }
    }

    /// Returns `true` if the call was aborted by the VM.
    pub fn failed(&self) -> bool {
        !self.vm_error.is_empty()
    }
}

impl Debug for EthCallResponse {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("EthCallResponse")
            .field("ret", &util::fmt::Hex(&self.ret))
            .field("vm_error", &self.vm_error)
            .finish()
    }
}

/// The engine could not execute the call at all.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl EngineError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}
