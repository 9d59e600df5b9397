//! An opaque facade over hidden state, plus contract checks that abort.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  forwards  ┌──────────────────┐
//! │  Facade      │──────────▶│  imp::Hidden     │
//! │ (public API) │  &context  │ (private state)  │
//! └──────────────┘            └──────────────────┘
//!        │                             │
//!        ▼                             ▼
//! ┌─────────────────────────────────────────────┐
//! │                contracts.rs                  │
//! │  (expects!, ensures!, likely, terminate)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Callers only ever name [`Facade`]. Its hidden state lives in a private
//! module behind one owned `Box`, so the representation can change without
//! touching any public signature.
//!
//! A failed contract check is a bug, not a runtime condition: it logs,
//! prints and aborts the process. See [`contracts`].
//!
//! # Usage
//!
//! ```
//! use opaque_facade::{expects, Facade};
//!
//! let init = 10;
//! expects!(init > 0);
//!
//! let mut facade = Facade::new(init);
//! for _ in 0..3 {
//!     facade.perform_action();
//! }
//! ```

pub mod contracts;
mod facade;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use contracts::{likely, terminate, unlikely, ContractKind, ContractViolation};
pub use facade::{Facade, FacadeId};
