//! Contract checks that terminate the process on violation.
//!
//! A contract is a condition the program's own structure guarantees. When
//! one fails, the program is already wrong, so there is nothing to recover:
//! the violation is logged, written to stderr and the process aborts. No
//! unwinding runs and no error value escapes.
//!
//! Recoverable failures (bad user input, I/O) never go through this module.
//!
//! # Usage
//!
//! ```ignore
//! use opaque_facade::{ensures, expects};
//!
//! fn halve(n: u32) -> u32 {
//!     expects!(n % 2 == 0, "halve({}) needs an even input", n);
//!     let half = n / 2;
//!     ensures!(half * 2 == n);
//!     half
//! }
//! ```
//!
//! # Branch hints
//!
//! [`likely`] and [`unlikely`] return their argument unchanged. The
//! unexpected side calls a `#[cold]` function, which steers the optimizer
//! to lay out the expected side as the fall-through path. Every macro here
//! evaluates its condition through [`likely`].

use std::fmt;

// ============================================================================
// BRANCH HINTS
// ============================================================================

#[cold]
#[inline]
fn cold_path() {}

/// Hint that `cond` is expected to be `true`.
#[inline(always)]
pub fn likely(cond: bool) -> bool {
    if !cond {
        cold_path();
    }
    cond
}

/// Hint that `cond` is expected to be `false`.
#[inline(always)]
pub fn unlikely(cond: bool) -> bool {
    if cond {
        cold_path();
    }
    cond
}

// ============================================================================
// VIOLATIONS
// ============================================================================

/// Which side of a contract failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractKind {
    /// Something the caller had to guarantee before the call.
    Precondition,
    /// Something the callee promised on return.
    Postcondition,
    /// A property that holds for the whole lifetime of a value.
    Invariant,
}

impl ContractKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Postcondition => "postcondition",
            ContractKind::Invariant => "invariant",
        }
    }
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Description of a failed contract check.
///
/// Only ever built on the cold path, right before [`terminate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractViolation {
    pub kind: ContractKind,
    /// Source text of the failed condition.
    pub condition: &'static str,
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
    /// Optional formatted context from the call site.
    pub message: Option<String>,
}

impl ContractViolation {
    pub fn new(
        kind: ContractKind,
        condition: &'static str,
        file: &'static str,
        line: u32,
        column: u32,
    ) -> Self {
        Self {
            kind,
            condition,
            file,
            line,
            column,
            message: None,
        }
    }

    pub fn with_message(mut self, message: String) -> Self {
        self.message = Some(message);
        self
    }

    /// `file:line:column` of the check that failed.
    pub fn location(&self) -> String {
        format!("{}:{}:{}", self.file, self.line, self.column)
    }
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contract violation: {} `{}` failed at {}",
            self.kind,
            self.condition,
            self.location()
        )?;
        if let Some(message) = &self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

/// Report `violation` and abort the process.
///
/// This is the only exit of every contract macro. It never unwinds, so
/// `Drop` impls do not run and `catch_unwind` cannot intercept it.
#[cold]
#[inline(never)]
pub fn terminate(violation: &ContractViolation) -> ! {
    tracing::error!(
        kind = %violation.kind,
        condition = violation.condition,
        location = %violation.location(),
        message = violation.message.as_deref().unwrap_or(""),
        "contract violation, aborting"
    );
    eprintln!("{}", violation);
    std::process::abort()
}

// ============================================================================
// MACROS
// ============================================================================

/// Abort the process unless `cond` holds.
///
/// `contract_check!(kind, cond)` or `contract_check!(kind, cond, fmt, args...)`.
/// The format arguments are only evaluated on failure.
#[macro_export]
macro_rules! contract_check {
    ($kind:expr, $cond:expr $(,)?) => {
        if !$crate::contracts::likely($cond) {
            $crate::contracts::terminate(&$crate::contracts::ContractViolation::new(
                $kind,
                ::core::stringify!($cond),
                ::core::file!(),
                ::core::line!(),
                ::core::column!(),
            ));
        }
    };
    ($kind:expr, $cond:expr, $($arg:tt)+) => {
        if !$crate::contracts::likely($cond) {
            $crate::contracts::terminate(
                &$crate::contracts::ContractViolation::new(
                    $kind,
                    ::core::stringify!($cond),
                    ::core::file!(),
                    ::core::line!(),
                    ::core::column!(),
                )
                .with_message(::std::format!($($arg)+)),
            );
        }
    };
}

/// Precondition check. Aborts unless `cond` holds.
#[macro_export]
macro_rules! expects {
    ($($arg:tt)+) => {
        $crate::contract_check!($crate::contracts::ContractKind::Precondition, $($arg)+)
    };
}

/// Postcondition check. Aborts unless `cond` holds.
#[macro_export]
macro_rules! ensures {
    ($($arg:tt)+) => {
        $crate::contract_check!($crate::contracts::ContractKind::Postcondition, $($arg)+)
    };
}
