//! Hidden state behind [`super::Facade`]. Nothing here is reachable from
//! outside the crate.

use std::sync::atomic::{AtomicUsize, Ordering};

use super::FacadeContext;
use crate::{ensures, expects};

// Every i32 seed plus at least u32::MAX actions fits in the counter.
const _: () = assert!(i64::MAX - i32::MAX as i64 >= u32::MAX as i64);

/// Number of `Hidden` values currently alive in the process.
static LIVE: AtomicUsize = AtomicUsize::new(0);

#[cfg(any(test, feature = "testing"))]
pub(crate) fn live_count() -> usize {
    LIVE.load(Ordering::SeqCst)
}

pub(super) struct Hidden {
    count: i64,
}

impl Hidden {
    pub(super) fn new(init: i32) -> Self {
        let hidden = Self::at_count(i64::from(init));
        ensures!(hidden.count == i64::from(init));
        hidden
    }

    /// Hidden state with an arbitrary counter, including ones no seed reaches.
    pub(super) fn at_count(count: i64) -> Self {
        LIVE.fetch_add(1, Ordering::SeqCst);
        Hidden { count }
    }

    pub(super) fn perform_action(&mut self, owner: &FacadeContext) {
        // INVARIANT: count == init + actions performed, so it never wraps.
        expects!(
            self.count < i64::MAX,
            "facade {} (init {}) has no room for another action",
            owner.id,
            owner.init
        );
        self.count += 1;
        tracing::trace!(facade = %owner.id, count = self.count, "action performed");
    }

    #[cfg(any(test, feature = "testing"))]
    pub(super) fn count(&self) -> i64 {
        self.count
    }
}

impl Drop for Hidden {
    fn drop(&mut self) {
        LIVE.fetch_sub(1, Ordering::SeqCst);
    }
}
