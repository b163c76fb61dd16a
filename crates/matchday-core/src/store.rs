//! The `GameStore` trait — the persistence gateway contract.
//!
//! The trait is implemented by storage backends (e.g.
//! `matchday-store-sqlite`). The engine and transports depend on this
//! abstraction, not on any concrete backend.
//!
//! Methods use the shared [`Error`] taxonomy so backends can surface
//! constraint violations as typed conflicts ([`Error::DuplicateUser`],
//! [`Error::DuplicateAssignment`]); any other backend failure is wrapped as
//! [`Error::Storage`]. Lookups never treat "not found" as an error — they
//! return `Option`.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use uuid::Uuid;

use crate::{
  Error,
  game::{Game, NewGame},
  roster::{Assignment, AttendanceStatus, RosterEntry},
  user::{NewUser, User},
};

/// Abstraction over a Matchday storage backend.
///
/// The store owns durability only; every business rule lives in the engine.
/// Writes touching more than one statement run inside a scoped transaction —
/// partial rows are never observable.
pub trait GameStore: Send + Sync {
  // ── Users ─────────────────────────────────────────────────────────────

  /// Look up a user by platform identifier. `None` if never seen.
  fn find_user_by_external_id(
    &self,
    external_id: i64,
  ) -> impl Future<Output = Result<Option<User>, Error>> + Send + '_;

  /// Persist a new user. Fails with [`Error::DuplicateUser`] if
  /// `external_id` is already taken.
  fn insert_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Error>> + Send + '_;

  // ── Games ─────────────────────────────────────────────────────────────

  /// The chat's most recent active game by `date` descending, if any.
  fn find_latest_active_game(
    &self,
    chat_id: i64,
  ) -> impl Future<Output = Result<Option<Game>, Error>> + Send + '_;

  /// Persist a new game atomically. The row is created active; a failure
  /// leaves no partial row behind.
  fn insert_game(
    &self,
    input: NewGame,
  ) -> impl Future<Output = Result<Game, Error>> + Send + '_;

  /// Clear a game's active flag so it no longer surfaces as the chat's
  /// current game. Idempotent; the row and its roster are kept.
  fn deactivate_game(
    &self,
    game_id: Uuid,
  ) -> impl Future<Output = Result<(), Error>> + Send + '_;

  // ── Assignments ───────────────────────────────────────────────────────

  /// The assignment for `(game_id, user_id)`, if the user is on the roster.
  fn find_assignment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
  ) -> impl Future<Output = Result<Option<Assignment>, Error>> + Send + '_;

  /// Create the `(game_id, user_id)` assignment with `has_paid = false` and
  /// a store-assigned `joined_at`. A concurrent duplicate insert fails with
  /// [`Error::DuplicateAssignment`] rather than creating a second row;
  /// callers retry as a status update.
  fn insert_assignment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
    status: AttendanceStatus,
  ) -> impl Future<Output = Result<Assignment, Error>> + Send + '_;

  /// Overwrite the status of an existing assignment. `has_paid` and
  /// `joined_at` are untouched.
  fn update_assignment_status(
    &self,
    game_id: Uuid,
    user_id: Uuid,
    status: AttendanceStatus,
  ) -> impl Future<Output = Result<(), Error>> + Send + '_;

  /// Set `has_paid = true` on an existing assignment. Idempotent; no store
  /// operation ever resets the flag.
  fn update_assignment_payment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
  ) -> impl Future<Output = Result<(), Error>> + Send + '_;

  /// All assignments for a game, joined with user identity and ordered by
  /// `joined_at`. The order is stable but otherwise unspecified; display
  /// ordering is a presentation concern.
  fn list_assignments(
    &self,
    game_id: Uuid,
  ) -> impl Future<Output = Result<Vec<RosterEntry>, Error>> + Send + '_;
}
