use {
    crate::{
        domain::{
            eth,
            restriction::{
                CallErrorPolicy,
                Check,
                Decision,
                Outcome,
                Restriction,
                Restrictions,
            },
        },
        infra::{
            config::{self, Config},
            evm::{CallError, EthCallResponse},
        },
        tests::{self, Answer},
    },
    std::sync::{Arc, Mutex},
};

/// With the fail-closed policy a failed view call denies the transfer and
/// stops the remaining checks.
#[test]
fn test() {
    let evm = tests::evm(vec![
        (tests::paused(), Answer::from(false)),
        (
            tests::blacklisted(&tests::sender()),
            Answer::Returns(EthCallResponse::failure("execution reverted")),
        ),
    ]);
    let restrictions = Restrictions::new(
        evm,
        &Config {
            call_error_policy: config::CallErrorPolicy::FailClosed,
            ..Default::default()
        },
    )
    .unwrap();

    let decision = restrictions
        .check(tests::DENOM, Some(&tests::sender()), Some(&tests::recipient()))
        .unwrap();

    assert_eq!(
        decision,
        Decision::Restricted(Restriction::Unverified {
            contract: tests::contract(),
            check: "sender blacklisted".to_owned(),
            reason: "isBlacklisted(address) call on contract \
                     0x1111111111111111111111111111111111111111 failed: execution reverted"
                .to_owned(),
        })
    );
}

/// Custom policies see every failed check exactly once.
#[test]
fn custom_policy() {
    #[derive(Default)]
    struct Recording(Arc<Mutex<Vec<String>>>);

    impl CallErrorPolicy for Recording {
        fn on_call_error(
            &self,
            contract: eth::ContractAddress,
            check: &Check<'_>,
            error: &CallError,
        ) -> Outcome {
            assert_eq!(contract, tests::contract());
            assert!(!error.is_input_error());
            self.0.lock().unwrap().push(check.to_string());
            Outcome::Absent
        }
    }

    let evm = tests::evm(vec![
        (tests::paused(), Answer::EngineError("down")),
        (tests::blacklisted(&tests::sender()), Answer::EngineError("down")),
        (tests::blacklisted(&tests::recipient()), Answer::EngineError("down")),
    ]);
    let seen = Arc::new(Mutex::new(Vec::new()));
    let restrictions = Restrictions::new(evm, &Config::default())
        .unwrap()
        .with_policy(Recording(seen.clone()));

    assert!(
        restrictions
            .check(tests::DENOM, Some(&tests::sender()), Some(&tests::recipient()))
            .unwrap()
            .is_allowed()
    );
    assert_eq!(
        *seen.lock().unwrap(),
        ["paused", "sender blacklisted", "recipient blacklisted"]
    );
}
