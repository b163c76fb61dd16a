//! User — the stable identity of a participant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A participant known to the store.
///
/// Created on first interaction with any command that supplies a user, and
/// never deleted. `external_id` is the natural key for lookups. Per-game
/// attendance state lives on the game's assignments, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  pub user_id:     Uuid,
  /// Chat-platform user identifier; unique across the store.
  pub external_id: i64,
  /// Display name as supplied on first contact.
  pub name:        String,
  pub created_at:  DateTime<Utc>,
}

/// Input to [`GameStore::insert_user`](crate::store::GameStore::insert_user).
/// `user_id` and `created_at` are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub external_id: i64,
  pub name:        String,
}
