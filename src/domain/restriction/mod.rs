//! Transfer restrictions for ERC20 backed denoms.
//!
//! A contract-backed denom may only be transferred if its contract is not
//! paused and neither party is blacklisted by it. The checks are answered by
//! view calls into the embedded EVM and run in a fixed order, stopping at the
//! first restriction found:
//!
//! 1. `paused()`
//! 2. `isBlacklisted(sender)`, if there is a sender
//! 3. `isBlacklisted(recipient)`, if there is a recipient
//!
//! A denom with a malformed contract address is always rejected. A view call
//! that fails to execute is handed to the configured [`CallErrorPolicy`].

use {
    crate::{
        boundary,
        domain::{
            account::NativeAddress,
            denom::{Denom, InvalidDenom},
            eth,
        },
        infra::{
            config::{self, Config, InvalidConfig},
            evm::{Evm, ViewCaller},
        },
    },
    std::fmt::{self, Display, Formatter},
};

pub mod policy;

pub use self::policy::{CallErrorPolicy, FailClosed, FailOpen, Outcome};

/// Evaluates the transfer restrictions of contract-backed denoms.
pub struct Restrictions<E> {
    caller: ViewCaller<E>,
    prefix: String,
    policy: Box<dyn CallErrorPolicy>,
}

impl<E: Evm> Restrictions<E> {
    /// Fails on configurations that would disable enforcement, see
    /// [`Config::validate`].
    pub fn new(evm: E, config: &Config) -> Result<Self, InvalidConfig> {
        config.validate()?;
        let policy: Box<dyn CallErrorPolicy> = match config.call_error_policy {
            config::CallErrorPolicy::FailOpen => Box::new(FailOpen),
            config::CallErrorPolicy::FailClosed => Box::new(FailClosed),
        };
        Ok(Self {
            caller: ViewCaller::new(evm, config.gas_cap).strict(config.strict_bool_decoding),
            prefix: config.denom_prefix.clone(),
            policy,
        })
    }

    /// Replaces the policy for failed view calls.
    pub fn with_policy(mut self, policy: impl CallErrorPolicy + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    /// Decides whether `denom` may be transferred from `sender` to
    /// `recipient`.
    ///
    /// Denoms without the contract prefix are allowed without making any
    /// calls. At most three view calls are made otherwise.
    pub fn check(
        &self,
        denom: &str,
        sender: Option<&NativeAddress>,
        recipient: Option<&NativeAddress>,
    ) -> Result<Decision, InvalidDenom> {
        let Some(contract) = Denom(denom).contract(&self.prefix)? else {
            return Ok(Decision::Allowed);
        };

        let checks = std::iter::once(Check::Paused)
            .chain(sender.map(Check::SenderBlacklisted))
            .chain(recipient.map(Check::RecipientBlacklisted));
        for check in checks {
            if let Some(restriction) = self.evaluate(contract, &check) {
                tracing::debug!(%denom, %restriction, "transfer restricted");
                return Ok(Decision::Restricted(restriction));
            }
        }
        Ok(Decision::Allowed)
    }

    /// Like [`Self::check`], but rejects restricted transfers with an error.
    pub fn ensure_transferable(
        &self,
        denom: &str,
        sender: Option<&NativeAddress>,
        recipient: Option<&NativeAddress>,
    ) -> Result<(), Error> {
        match self.check(denom, sender, recipient)? {
            Decision::Allowed => Ok(()),
            Decision::Restricted(restriction) => Err(Error::Restricted(restriction)),
        }
    }

    fn evaluate(&self, contract: eth::ContractAddress, check: &Check<'_>) -> Option<Restriction> {
        let result = match check {
            Check::Paused => self.caller.paused(contract),
            Check::SenderBlacklisted(account) | Check::RecipientBlacklisted(account) => self
                .caller
                .blacklisted(contract, boundary::address::to_evm(account)),
        };
        match result {
            Ok(true) => Some(check.restriction(contract)),
            Ok(false) => None,
            Err(err) => match self.policy.on_call_error(contract, check, &err) {
                Outcome::Absent => None,
                Outcome::Deny => Some(Restriction::Unverified {
                    contract,
                    check: check.to_string(),
                    reason: err.to_string(),
                }),
            },
        }
    }
}

/// A single restriction check.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Check<'a> {
    Paused,
    SenderBlacklisted(&'a NativeAddress),
    RecipientBlacklisted(&'a NativeAddress),
}

impl Check<'_> {
    fn restriction(&self, contract: eth::ContractAddress) -> Restriction {
        match *self {
            Self::Paused => Restriction::Paused { contract },
            Self::SenderBlacklisted(sender) => Restriction::SenderBlacklisted {
                contract,
                sender: sender.clone(),
            },
            Self::RecipientBlacklisted(recipient) => Restriction::RecipientBlacklisted {
                contract,
                recipient: recipient.clone(),
            },
        }
    }
}

impl Display for Check<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(match self {
            Self::Paused => "paused",
            Self::SenderBlacklisted(_) => "sender blacklisted",
            Self::RecipientBlacklisted(_) => "recipient blacklisted",
        })
    }
}

/// The result of checking a transfer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Decision {
    Allowed,
    Restricted(Restriction),
}

impl Decision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed)
    }
}

/// A restriction that prevents a transfer.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Restriction {
    #[error("ERC20 token {contract} is paused")]
    Paused { contract: eth::ContractAddress },

    #[error("sender {sender} is blacklisted for ERC20 token {contract}")]
    SenderBlacklisted {
        contract: eth::ContractAddress,
        sender: NativeAddress,
    },

    #[error("recipient {recipient} is blacklisted for ERC20 token {contract}")]
    RecipientBlacklisted {
        contract: eth::ContractAddress,
        recipient: NativeAddress,
    },

    /// Only produced by policies that deny transfers on failed view calls.
    #[error("could not verify {check} restriction of ERC20 token {contract}: {reason}")]
    Unverified {
        contract: eth::ContractAddress,
        check: String,
        reason: String,
    },
}

/// A rejected transfer.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidDenom(#[from] InvalidDenom),
    #[error("restricted action: {0}")]
    Restricted(Restriction),
}
