//! Treatment of view calls that could not be executed.

use {
    super::Check,
    crate::{domain::eth, infra::evm::CallError},
};

/// What to make of a check whose view call failed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Treat the restriction as not present and continue with the next check.
    Absent,
    /// Deny the transfer.
    Deny,
}

/// Decides how a failed view call affects the transfer.
///
/// Only call-execution failures reach the policy. Malformed denoms are always
/// rejected before any call is made.
pub trait CallErrorPolicy: Send + Sync {
    fn on_call_error(
        &self,
        contract: eth::ContractAddress,
        check: &Check<'_>,
        error: &CallError,
    ) -> Outcome;
}

/// Logs the failure and lets the transfer through.
///
/// Engine outages then never block transfers, at the price of a contract that
/// always reverts (or runs out of gas) disabling its own restrictions.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailOpen;

impl CallErrorPolicy for FailOpen {
    fn on_call_error(
        &self,
        contract: eth::ContractAddress,
        check: &Check<'_>,
        error: &CallError,
    ) -> Outcome {
        match check {
            Check::Paused => tracing::error!(
                %contract,
                %check,
                %error,
                "failed to check ERC20 pause status"
            ),
            Check::SenderBlacklisted(sender) => tracing::error!(
                %contract,
                %sender,
                %check,
                %error,
                "failed to check sender blacklist status"
            ),
            Check::RecipientBlacklisted(recipient) => tracing::error!(
                %contract,
                %recipient,
                %check,
                %error,
                "failed to check recipient blacklist status"
            ),
        }
        Outcome::Absent
    }
}

/// Denies transfers whose restrictions could not be verified.
#[derive(Clone, Copy, Debug, Default)]
pub struct FailClosed;

impl CallErrorPolicy for FailClosed {
    fn on_call_error(
        &self,
        contract: eth::ContractAddress,
        check: &Check<'_>,
        error: &CallError,
    ) -> Outcome {
        tracing::warn!(%contract, %check, %error, "denying transfer with unverified restriction");
        Outcome::Deny
    }
}
