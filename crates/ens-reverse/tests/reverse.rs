//! End-to-end reverse resolution against an in-memory ENS deployment.

use std::sync::{Arc, Once};

use ens_reverse::core::{namehash, Address, ChainId};
use ens_reverse::{format, reverse_resolve, CallError, ResolveError, ReverseResolver};
use ens_reverse_testkit::{
    address, chain_id, ens_name, nonzero_address, random_address, unsupported_chain_id,
    EnsFixture, FailingChain, RevertingContract, DEFAULT_RESOLVER_ADDRESS,
};
use proptest::prelude::*;

static TRACING: Once = Once::new();

fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn abcd() -> Address {
    "0xAbCd000000000000000000000000000000001234".parse().unwrap()
}

#[test]
fn test_alice_resolves_through_registry() {
    init_tracing();
    let fixture = EnsFixture::mainnet();
    let alice = abcd();

    let resolver_at = random_address();
    let resolver = fixture.deploy_resolver(resolver_at);
    fixture.set_reverse_resolver(alice, resolver_at);

    let node = namehash("abcd000000000000000000000000000000001234.addr.reverse").unwrap();
    resolver.set_name(node, "alice.eth");

    assert_eq!(
        reverse_resolve(&fixture.chain, alice, ChainId::MAINNET),
        Ok("alice.eth".to_string())
    );
    assert_eq!(format(&fixture.chain, alice, ChainId::MAINNET), "alice.eth");
}

#[test]
fn test_address_without_resolver() {
    init_tracing();
    let fixture = EnsFixture::mainnet();
    let alice = abcd();

    assert_eq!(
        reverse_resolve(&fixture.chain, alice, ChainId::MAINNET),
        Err(ResolveError::NotAResolver(Address::ZERO))
    );
    assert_eq!(
        format(&fixture.chain, alice, ChainId::MAINNET),
        "0xAbcd000000000000000000000000000000001234"
    );
}

#[test]
fn test_resolver_pointing_at_empty_account() {
    let fixture = EnsFixture::mainnet();
    let alice = random_address();
    let empty = random_address();
    fixture.set_reverse_resolver(alice, empty);

    assert_eq!(
        reverse_resolve(&fixture.chain, alice, ChainId::MAINNET),
        Err(ResolveError::NotAResolver(empty))
    );
}

#[test]
fn test_resolver_that_reverts() {
    let fixture = EnsFixture::mainnet();
    let alice = random_address();
    let broken = random_address();
    fixture
        .chain
        .deploy(broken, Arc::new(RevertingContract("out of gas".into())));
    fixture.set_reverse_resolver(alice, broken);

    assert_eq!(
        reverse_resolve(&fixture.chain, alice, ChainId::MAINNET),
        Err(ResolveError::ChainQuery(CallError::Reverted(
            "out of gas".into()
        )))
    );
    assert_eq!(
        format(&fixture.chain, alice, ChainId::MAINNET),
        alice.to_checksum(None)
    );
}

#[test]
fn test_every_supported_network() {
    for id in [
        ChainId::MAINNET,
        ChainId::GOERLI,
        ChainId::HOLESKY,
        ChainId::SEPOLIA,
    ] {
        let fixture = EnsFixture::new(id).unwrap();
        let alice = random_address();
        fixture.set_reverse_name(alice, "alice.eth");

        assert_eq!(reverse_resolve(&fixture.chain, alice, id).unwrap(), "alice.eth");
    }
}

#[test]
fn test_default_resolver_path_uses_queried_address() {
    let fixture = EnsFixture::mainnet();
    let alice = random_address();
    let bob = random_address();
    fixture.set_reverse_name(alice, "alice.eth");
    fixture.set_reverse_name(bob, "bob.eth");

    let resolver = ReverseResolver::new(&fixture.chain, ChainId::MAINNET).unwrap();
    assert_eq!(resolver.name(alice).unwrap(), "alice.eth");
    assert_eq!(resolver.name(bob).unwrap(), "bob.eth");

    let direct = ReverseResolver::at(&fixture.chain, DEFAULT_RESOLVER_ADDRESS, ChainId::MAINNET)
        .unwrap();
    let via_registry = ReverseResolver::for_address(&fixture.chain, alice, ChainId::MAINNET).unwrap();
    assert_eq!(direct.name(bob).unwrap(), via_registry.name(bob).unwrap());
}

#[test]
fn test_resolver_shared_across_threads() {
    let fixture = EnsFixture::mainnet();
    let names: Vec<(Address, String)> = (0..8)
        .map(|i| (random_address(), format!("user{i}.eth")))
        .collect();
    for (address, name) in &names {
        fixture.set_reverse_name(*address, name);
    }

    let resolver = ReverseResolver::new(&fixture.chain, ChainId::MAINNET).unwrap();
    std::thread::scope(|s| {
        for (address, name) in &names {
            let resolver = &resolver;
            s.spawn(move || assert_eq!(&resolver.name(*address).unwrap(), name));
        }
    });
}

#[test]
fn test_transport_failure_at_each_step() {
    let fixture = EnsFixture::mainnet();
    let alice = random_address();
    fixture.set_reverse_name(alice, "alice.eth");

    for successes in 0..3 {
        let failing = FailingChain::after(&fixture.chain, successes);
        assert!(
            matches!(
                reverse_resolve(&failing, alice, ChainId::MAINNET),
                Err(ResolveError::ChainQuery(CallError::Transport(_)))
            ),
            "failure after {successes} calls"
        );
        assert_eq!(format(&failing, alice, ChainId::MAINNET), alice.to_checksum(None));
    }
}

proptest! {
    #[test]
    fn test_resolves_registered_names(a in nonzero_address(), name in ens_name(), id in chain_id()) {
        let fixture = EnsFixture::new(id).unwrap();
        fixture.set_reverse_name(a, &name);

        prop_assert_eq!(reverse_resolve(&fixture.chain, a, id), Ok(name.clone()));
        prop_assert_eq!(format(&fixture.chain, a, id), name);
    }

    #[test]
    fn test_name_is_idempotent(a in address(), name in ens_name()) {
        let fixture = EnsFixture::mainnet();
        fixture.set_reverse_name(a, &name);

        let resolver = ReverseResolver::new(&fixture.chain, ChainId::MAINNET).unwrap();
        let first = resolver.name(a).unwrap();
        let second = resolver.name(a).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, name);
    }

    #[test]
    fn test_format_falls_back_on_unsupported_chain(a in address(), id in unsupported_chain_id()) {
        let fixture = EnsFixture::mainnet();
        fixture.set_reverse_name(a, "alice.eth");

        prop_assert_eq!(
            reverse_resolve(&fixture.chain, a, id),
            Err(ResolveError::UnsupportedChain(id))
        );
        prop_assert_eq!(format(&fixture.chain, a, id), a.to_checksum(None));
        prop_assert_eq!(fixture.chain.call_count(), 0);
    }

    #[test]
    fn test_format_falls_back_on_empty_name(a in address()) {
        let fixture = EnsFixture::mainnet();
        fixture.set_reverse_name(a, "");

        prop_assert_eq!(
            reverse_resolve(&fixture.chain, a, ChainId::MAINNET),
            Err(ResolveError::NoResolution(a))
        );
        prop_assert_eq!(format(&fixture.chain, a, ChainId::MAINNET), a.to_checksum(None));
    }

    #[test]
    fn test_format_falls_back_without_record(a in address()) {
        let fixture = EnsFixture::mainnet();
        prop_assert_eq!(format(&fixture.chain, a, ChainId::MAINNET), a.to_checksum(None));
    }
}
