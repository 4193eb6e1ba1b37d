use crate::{
    domain::{
        eth,
        restriction::{Error, Restrictions},
    },
    infra::{config::Config, evm::MockEvm},
    tests,
};

/// Contract-backed denoms with a malformed address are rejected before any
/// view call is made, regardless of the call error policy.
#[test]
fn test() {
    for config in [
        Config::default(),
        Config {
            call_error_policy: crate::infra::config::CallErrorPolicy::FailClosed,
            ..Default::default()
        },
    ] {
        let mut evm = MockEvm::new();
        evm.expect_eth_call().never();
        let restrictions = Restrictions::new(evm, &config).unwrap();

        for (denom, suffix) in [
            ("erc20:", ""),
            ("erc20:0x1234", "0x1234"),
            ("erc20:usdc", "usdc"),
            (
                "erc20:0x111111111111111111111111111111111111111g",
                "0x111111111111111111111111111111111111111g",
            ),
            (
                "erc20:0x11111111111111111111111111111111111111111",
                "0x11111111111111111111111111111111111111111",
            ),
        ] {
            let err = restrictions
                .check(denom, Some(&tests::sender()), Some(&tests::recipient()))
                .unwrap_err();
            assert_eq!(err.denom, denom);
            assert_eq!(err.source, eth::InvalidAddress(suffix.to_owned()));

            let err = restrictions
                .ensure_transferable(denom, Some(&tests::sender()), None)
                .unwrap_err();
            assert!(matches!(err, Error::InvalidDenom(_)));
        }
    }
}
