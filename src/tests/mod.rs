//! Scenario tests for the transfer restrictions. The execution engine is
//! mocked and every scenario states exactly which view calls it expects.

use {
    crate::{
        domain::{account::NativeAddress, eth},
        infra::{
            config::Config,
            evm::{
                CallArgs,
                EngineError,
                EthCallRequest,
                EthCallResponse,
                MockEvm,
                method::Call,
            },
        },
    },
    mockall::{Sequence, predicate::eq},
};


/// The contract backing [`DENOM`].
pub const CONTRACT: &str = "0x1111111111111111111111111111111111111111";

/// A contract-backed denom.
pub const DENOM: &str = "erc20:0x1111111111111111111111111111111111111111";

pub fn contract() -> eth::ContractAddress {
    eth::ContractAddress::parse(CONTRACT).unwrap()
}

pub fn sender() -> NativeAddress {
    NativeAddress(vec![0xaa; 20])
}

pub fn recipient() -> NativeAddress {
    NativeAddress(vec![0xbb; 20])
}

/// A successful response returning an ABI encoded `bool`.
pub fn returns(value: bool) -> EthCallResponse {
    let mut word = vec![0; 32];
    word[31] = value.into();
    EthCallResponse::success(word)
}

/// A view call against [`CONTRACT`] with the default gas cap.
pub fn request(call: Call) -> EthCallRequest {
    EthCallRequest::new(
        &CallArgs::new(contract(), &call.encode().0),
        Config::default().gas_cap,
    )
}

pub fn paused() -> EthCallRequest {
    request(Call::Paused)
}

pub fn blacklisted(account: &NativeAddress) -> EthCallRequest {
    request(Call::IsBlacklisted(eth::Address::from_slice(&account.0)))
}

/// What the mocked engine answers to a call.
pub enum Answer {
    Returns(EthCallResponse),
    EngineError(&'static str),
}

impl From<bool> for Answer {
    fn from(value: bool) -> Self {
        Self::Returns(returns(value))
    }
}

/// Creates an engine that expects exactly the given calls, in order.
pub fn evm(calls: Vec<(EthCallRequest, Answer)>) -> MockEvm {
    let mut evm = MockEvm::new();
    let mut seq = Sequence::new();
    for (request, answer) in calls {
        let expectation = evm
            .expect_eth_call()
            .with(eq(request))
            .times(1)
            .in_sequence(&mut seq);
        match answer {
            Answer::Returns(response) => {
                expectation.return_once(move |_| Ok(response));
            }
            Answer::EngineError(message) => {
                expectation.return_once(move |_| Err(EngineError::new(message)));
            }
        }
    }
    evm
}
