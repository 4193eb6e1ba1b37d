use crate::{
    domain::restriction::{Decision, Error, Restriction, Restrictions},
    infra::config::Config,
    tests::{self, Answer},
};

/// A paused token is restricted without asking about the parties.
#[test]
fn test() {
    let evm = tests::evm(vec![(tests::paused(), Answer::from(true))]);
    let restrictions = Restrictions::new(evm, &Config::default()).unwrap();

    let decision = restrictions
        .check(tests::DENOM, Some(&tests::sender()), Some(&tests::recipient()))
        .unwrap();

    assert_eq!(
        decision,
        Decision::Restricted(Restriction::Paused {
            contract: tests::contract()
        })
    );
}

#[test]
fn rejects_transfer() {
    let evm = tests::evm(vec![(tests::paused(), Answer::from(true))]);
    let restrictions = Restrictions::new(evm, &Config::default()).unwrap();

    let err = restrictions
        .ensure_transferable(tests::DENOM, Some(&tests::sender()), None)
        .unwrap_err();

    assert!(matches!(err, Error::Restricted(Restriction::Paused { .. })));
    assert_eq!(
        err.to_string(),
        "restricted action: ERC20 token 0x1111111111111111111111111111111111111111 is paused"
    );
}

/// An uppercase `0X` prefix addresses the same contract as `0x`.
#[test]
fn uppercase_hex_prefix() {
    let evm = tests::evm(vec![(tests::paused(), Answer::from(false))]);
    let restrictions = Restrictions::new(evm, &Config::default()).unwrap();

    assert!(
        restrictions
            .check("erc20:0X1111111111111111111111111111111111111111", None, None)
            .unwrap()
            .is_allowed()
    );
}

/// Without parties only the pause state is checked.
#[test]
fn no_parties() {
    let evm = tests::evm(vec![(tests::paused(), Answer::from(false))]);
    let restrictions = Restrictions::new(evm, &Config::default()).unwrap();

    assert_eq!(
        restrictions.check(tests::DENOM, None, None).unwrap(),
        Decision::Allowed
    );
}
