//! Error taxonomy shared across the Matchday crates.
//!
//! One enum covers the four failure classes the engine can surface:
//! invalid input, business-rule conflict, missing entity, and storage
//! failure. [`Error::kind`] gives transports the classification without
//! matching every variant.

use chrono::NaiveDateTime;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum Error {
  // ── Invalid input ─────────────────────────────────────────────────────

  #[error("invalid date or time {0:?}, expected YYYY-MM-DD HH:MM")]
  InvalidDate(String),

  #[error("invalid price {0:?}, expected a non-negative number")]
  InvalidPrice(String),

  #[error(
    "expected date, time, location, opponent and an optional price; got {0} field(s)"
  )]
  InvalidArguments(usize),

  // ── Conflict ──────────────────────────────────────────────────────────

  #[error(
    "a game against {opponent} is already scheduled for {}",
    .date.format("%Y-%m-%d %H:%M")
  )]
  AlreadyScheduled {
    date:     NaiveDateTime,
    opponent: String,
  },

  #[error("{name} is not registered for the current game")]
  NotRegistered { name: String },

  #[error("a user with external id {0} already exists")]
  DuplicateUser(i64),

  #[error("user {user_id} is already registered for game {game_id}")]
  DuplicateAssignment { game_id: Uuid, user_id: Uuid },

  // ── Not found ─────────────────────────────────────────────────────────

  #[error("no game scheduled for chat {0}")]
  NoGameScheduled(i64),

  #[error("unknown user: {0}")]
  UnknownUser(i64),

  // ── Storage ───────────────────────────────────────────────────────────

  /// An underlying persistence failure not otherwise classified. Always
  /// surfaced to the caller; never silently swallowed.
  #[error("storage error: {0}")]
  Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// The failure class of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  /// The caller supplied malformed arguments; correcting the input is the
  /// only remedy.
  InvalidInput,
  /// A business rule rejected the operation.
  Conflict,
  /// A required entity does not exist.
  NotFound,
  /// The persistence layer failed; the caller may retry.
  Storage,
}

impl Error {
  /// Wrap an arbitrary backend failure as [`Error::Storage`].
  pub fn storage(
    source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
  ) -> Self {
    Self::Storage(source.into())
  }

  pub fn kind(&self) -> ErrorKind {
    match self {
      Self::InvalidDate(_)
      | Self::InvalidPrice(_)
      | Self::InvalidArguments(_) => ErrorKind::InvalidInput,
      Self::AlreadyScheduled { .. }
      | Self::NotRegistered { .. }
      | Self::DuplicateUser(_)
      | Self::DuplicateAssignment { .. } => ErrorKind::Conflict,
      Self::NoGameScheduled(_) | Self::UnknownUser(_) => ErrorKind::NotFound,
      Self::Storage(_) => ErrorKind::Storage,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
