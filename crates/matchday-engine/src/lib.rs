//! The Matchday attendance state engine.
//!
//! [`GameService`] enforces the domain rules — one active future game per
//! chat, identity upsert by platform id, and the two-state attendance
//! machine — and orchestrates calls to a [`matchday_core::store::GameStore`]
//! backend. It is pure business logic: no knowledge of the transport that
//! invokes it, and no in-memory state between calls.

mod args;
mod service;

pub use args::GameArgs;
pub use service::{Caller, GameService};
