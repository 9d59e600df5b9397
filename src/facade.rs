//! The public facade over hidden state.
//!
//! [`Facade`] is the only type callers see. All mutable state and the logic
//! that acts on it live in a private `imp` module, behind a single owned
//! `Box`. Changing what the hidden state holds never changes a public
//! signature, and the layout of `Facade` itself is one pointer plus the
//! caller-visible context regardless of what the hidden side grows into.
//!
//! # Concurrency
//!
//! [`Facade::perform_action`] takes `&mut self`, so two threads cannot drive
//! one instance without external synchronization. Callers that share a
//! facade must serialize access themselves (for example `Mutex<Facade>`);
//! the facade holds no lock of its own.

mod imp;

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

#[cfg(any(test, feature = "testing"))]
pub(crate) use imp::live_count;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a [`Facade`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct FacadeId(u64);

impl FacadeId {
    fn next() -> Self {
        FacadeId(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FacadeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The part of a facade its callers may see.
///
/// Handed to the hidden side on every forwarded call, so the hidden logic
/// can read it without the facade lending out `&self` as a whole.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FacadeContext {
    pub(crate) id: FacadeId,
    pub(crate) init: i32,
}

/// A stable public interface over private state.
///
/// ```
/// use opaque_facade::Facade;
///
/// let mut facade = Facade::new(10);
/// facade.perform_action();
/// facade.perform_action();
/// facade.perform_action();
/// drop(facade);
/// ```
pub struct Facade {
    context: FacadeContext,
    // INVARIANT: always present; created in `new`, dropped with `self`.
    inner: Box<imp::Hidden>,
}

impl Facade {
    /// Build a facade whose hidden state is seeded from `init`.
    pub fn new(init: i32) -> Self {
        Self::assemble(init, imp::Hidden::new(init))
    }

    /// Facade seeded with `init` whose counter already stands at `count`.
    #[cfg(any(test, feature = "testing"))]
    pub(crate) fn with_hidden_count(init: i32, count: i64) -> Self {
        Self::assemble(init, imp::Hidden::at_count(count))
    }

    fn assemble(init: i32, hidden: imp::Hidden) -> Self {
        let context = FacadeContext {
            id: FacadeId::next(),
            init,
        };
        let inner = Box::new(hidden);
        tracing::debug!(facade = %context.id, init, "facade constructed");
        Self { context, inner }
    }

    /// Forward one action to the hidden state.
    ///
    /// Every call has a cumulative effect; nothing is returned.
    pub fn perform_action(&mut self) {
        let Self { context, inner } = self;
        inner.perform_action(context);
    }

    /// Identity of this facade, unique within the process.
    ///
    /// ```
    /// use opaque_facade::Facade;
    ///
    /// let first = Facade::new(1);
    /// let second = Facade::new(1);
    /// assert_ne!(first.id(), second.id());
    /// ```
    pub fn id(&self) -> FacadeId {
        self.context.id
    }

    /// The value this facade was constructed with.
    pub fn init_value(&self) -> i32 {
        self.context.init
    }

    #[cfg(any(test, feature = "testing"))]
    pub(crate) fn hidden_count(&self) -> i64 {
        self.inner.count()
    }
}

impl fmt::Debug for Facade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Facade")
            .field("id", &self.context.id)
            .field("init", &self.context.init)
            .finish_non_exhaustive()
    }
}

impl Drop for Facade {
    fn drop(&mut self) {
        tracing::debug!(facade = %self.context.id, "facade dropped");
    }
}
