//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! UUIDs are stored as hyphenated lowercase strings. UTC timestamps are
//! stored as RFC 3339 strings; game dates (naive local) as
//! `YYYY-MM-DD HH:MM:SS`, which sorts chronologically as text.

use chrono::{DateTime, NaiveDateTime, Utc};
use matchday_core::{
  Error, Result,
  game::Game,
  roster::{Assignment, AttendanceStatus, RosterEntry},
  user::User,
};
use uuid::Uuid;

/// Naive local game-date column format.
const GAME_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── Uuid ─────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> {
  Uuid::parse_str(s)
    .map_err(|e| Error::storage(format!("bad uuid {s:?}: {e}")))
}

// ─── DateTime<Utc> ────────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::storage(format!("bad timestamp {s:?}: {e}")))
}

// ─── Game date (naive local) ──────────────────────────────────────────────────

pub fn encode_game_date(dt: NaiveDateTime) -> String {
  dt.format(GAME_DATE_FORMAT).to_string()
}

pub fn decode_game_date(s: &str) -> Result<NaiveDateTime> {
  NaiveDateTime::parse_from_str(s, GAME_DATE_FORMAT)
    .map_err(|e| Error::storage(format!("bad game date {s:?}: {e}")))
}

// ─── AttendanceStatus ─────────────────────────────────────────────────────────

pub fn encode_status(status: AttendanceStatus) -> &'static str {
  match status {
    AttendanceStatus::Attending => "attending",
    AttendanceStatus::Out => "out",
  }
}

pub fn decode_status(s: &str) -> Result<AttendanceStatus> {
  match s {
    "attending" => Ok(AttendanceStatus::Attending),
    "out" => Ok(AttendanceStatus::Out),
    other => Err(Error::storage(format!("unknown status: {other:?}"))),
  }
}

// ─── Row types ────────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:     String,
  pub external_id: i64,
  pub name:        String,
  pub created_at:  String,
}

impl RawUser {
  pub fn into_user(self) -> Result<User> {
    Ok(User {
      user_id:     decode_uuid(&self.user_id)?,
      external_id: self.external_id,
      name:        self.name,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `games` row.
pub struct RawGame {
  pub game_id:    String,
  pub chat_id:    i64,
  pub opponent:   String,
  pub location:   String,
  pub price:      f64,
  pub date:       String,
  pub created_by: String,
  pub created_at: String,
  pub is_active:  bool,
}

impl RawGame {
  pub fn into_game(self) -> Result<Game> {
    Ok(Game {
      game_id:    decode_uuid(&self.game_id)?,
      chat_id:    self.chat_id,
      date:       decode_game_date(&self.date)?,
      location:   self.location,
      opponent:   self.opponent,
      price:      self.price,
      created_by: decode_uuid(&self.created_by)?,
      created_at: decode_dt(&self.created_at)?,
      is_active:  self.is_active,
    })
  }
}

/// Raw strings read directly from a `game_attendance` row.
pub struct RawAssignment {
  pub game_id:   String,
  pub user_id:   String,
  pub status:    String,
  pub has_paid:  bool,
  pub joined_at: String,
}

impl RawAssignment {
  pub fn into_assignment(self) -> Result<Assignment> {
    Ok(Assignment {
      game_id:   decode_uuid(&self.game_id)?,
      user_id:   decode_uuid(&self.user_id)?,
      status:    decode_status(&self.status)?,
      has_paid:  self.has_paid,
      joined_at: decode_dt(&self.joined_at)?,
    })
  }
}

/// Raw strings from a `game_attendance` row joined with its `users` row.
pub struct RawRosterEntry {
  pub user:     RawUser,
  pub status:   String,
  pub has_paid: bool,
}

impl RawRosterEntry {
  pub fn into_entry(self) -> Result<RosterEntry> {
    Ok(RosterEntry {
      user:     self.user.into_user()?,
      status:   decode_status(&self.status)?,
      has_paid: self.has_paid,
    })
  }
}
