//! Test-only windows into hidden state.
//!
//! These are the one deliberate exception to "callers observe effects,
//! never representation". The module only exists under `cfg(test)` or the
//! `testing` cargo feature, which this crate's own dev-dependency turns on
//! for its integration tests. Normal builds of dependents cannot reach it.

#![doc(hidden)]

use crate::facade::{self, Facade};

/// Current value of the facade's hidden counter.
pub fn hidden_count(facade: &Facade) -> i64 {
    facade.hidden_count()
}

/// Facade seeded with `init` whose hidden counter already stands at
/// `count`, for driving the counter to states no seed reaches.
pub fn facade_at_count(init: i32, count: i64) -> Facade {
    Facade::with_hidden_count(init, count)
}

/// Number of hidden states alive in this process right now.
///
/// Process-wide: tests that assert on it must not run alongside other
/// tests that construct facades.
pub fn live_hidden_states() -> usize {
    facade::live_count()
}
