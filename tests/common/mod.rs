//! Shared test utilities.

#![allow(dead_code)]

use opaque_facade::testing::hidden_count;
use opaque_facade::Facade;

/// Build a facade seeded with `init` and perform `actions` actions on it.
pub fn driven_facade(init: i32, actions: u64) -> Facade {
    let mut facade = Facade::new(init);
    for _ in 0..actions {
        facade.perform_action();
    }
    facade
}

/// Assert the hidden counter equals `init + actions`.
pub fn assert_count(facade: &Facade, actions: u64) {
    let expected = i64::from(facade.init_value()) + actions as i64;
    assert_eq!(
        hidden_count(facade),
        expected,
        "facade {} seeded with {} should be at {} after {} actions",
        facade.id(),
        facade.init_value(),
        expected,
        actions
    );
}
