//! Attendance assignments and the partitioned roster view.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{game::Game, user::User};

/// Attendance status for one user on one game.
///
/// Two states, freely transitionable in either direction by repeated
/// registration; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
  Attending,
  Out,
}

/// The per-game attendance record for one user.
///
/// At most one row exists per `(game_id, user_id)`; re-registration mutates
/// that row rather than inserting a duplicate. `has_paid` is a one-way flag —
/// no core operation ever resets it to false. Rows are never deleted, so the
/// historical record survives past the game date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
  pub game_id:   Uuid,
  pub user_id:   Uuid,
  pub status:    AttendanceStatus,
  pub has_paid:  bool,
  /// Set when the row is first created; fixed across later updates.
  pub joined_at: DateTime<Utc>,
}

/// One roster line: a user joined with their assignment state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterEntry {
  pub user:     User,
  pub status:   AttendanceStatus,
  pub has_paid: bool,
}

/// The full current state of a chat's game — a game plus its roster split
/// into attending and absent lists. Every mutating engine operation returns
/// this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDetails {
  pub game:      Game,
  /// Entries with [`AttendanceStatus::Attending`], in storage order.
  pub attending: Vec<RosterEntry>,
  /// Entries with [`AttendanceStatus::Out`], in storage order.
  pub absent:    Vec<RosterEntry>,
}

impl GameDetails {
  /// Split a flat roster into attending and absent lists, preserving the
  /// input order within each.
  pub fn partition(game: Game, entries: Vec<RosterEntry>) -> Self {
    let mut attending = Vec::new();
    let mut absent = Vec::new();
    for entry in entries {
      match entry.status {
        AttendanceStatus::Attending => attending.push(entry),
        AttendanceStatus::Out => absent.push(entry),
      }
    }
    Self { game, attending, absent }
  }
}
