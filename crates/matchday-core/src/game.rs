//! Game — one scheduled fixture, owned by a chat.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scheduled fixture.
///
/// At most one game per chat may be active with a date still in the future;
/// scheduling another before then is rejected. Games are never hard-deleted —
/// a past game is simply superseded once a later one is created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
  pub game_id:    Uuid,
  /// Owning chat; the natural partition key.
  pub chat_id:    i64,
  /// Kick-off in naive local time.
  pub date:       NaiveDateTime,
  pub location:   String,
  pub opponent:   String,
  /// Per-head price; non-negative, zero when not announced.
  pub price:      f64,
  /// The user who created the game.
  pub created_by: Uuid,
  pub created_at: DateTime<Utc>,
  pub is_active:  bool,
}

/// Input to [`GameStore::insert_game`](crate::store::GameStore::insert_game).
/// `game_id` and `created_at` are assigned by the store; the row is created
/// active.
#[derive(Debug, Clone)]
pub struct NewGame {
  pub chat_id:    i64,
  pub date:       NaiveDateTime,
  pub location:   String,
  pub opponent:   String,
  pub price:      f64,
  pub created_by: Uuid,
}
