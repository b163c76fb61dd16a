//! [`SqliteStore`] — the SQLite implementation of [`GameStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use matchday_core::{
  Error, Result,
  game::{Game, NewGame},
  roster::{Assignment, AttendanceStatus, RosterEntry},
  store::GameStore,
  user::{NewUser, User},
};

use crate::{
  encode::{
    RawAssignment, RawGame, RawRosterEntry, RawUser, encode_dt,
    encode_game_date, encode_status, encode_uuid,
  },
  schema::SCHEMA,
};

// ─── Error mapping ───────────────────────────────────────────────────────────

fn storage(e: tokio_rusqlite::Error) -> Error { Error::storage(e) }

/// True when the backend rejected a write for violating a UNIQUE or PRIMARY
/// KEY constraint. Used to turn duplicate inserts into typed conflicts.
fn is_constraint_violation(e: &tokio_rusqlite::Error) -> bool {
  matches!(
    e,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(f, _))
      if f.code == rusqlite::ErrorCode::ConstraintViolation
  )
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Matchday game store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path)
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory()
      .await
      .map_err(storage)?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await
      .map_err(storage)
  }
}

// ─── GameStore impl ──────────────────────────────────────────────────────────

impl GameStore for SqliteStore {
  // ── Users ─────────────────────────────────────────────────────────────

  async fn find_user_by_external_id(
    &self,
    external_id: i64,
  ) -> Result<Option<User>> {
    let raw: Option<RawUser> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT user_id, external_id, name, created_at
               FROM users WHERE external_id = ?1",
              rusqlite::params![external_id],
              |row| {
                Ok(RawUser {
                  user_id:     row.get(0)?,
                  external_id: row.get(1)?,
                  name:        row.get(2)?,
                  created_at:  row.get(3)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawUser::into_user).transpose()
  }

  async fn insert_user(&self, input: NewUser) -> Result<User> {
    let user = User {
      user_id:     Uuid::new_v4(),
      external_id: input.external_id,
      name:        input.name,
      created_at:  Utc::now(),
    };

    let id_str   = encode_uuid(user.user_id);
    let at_str   = encode_dt(user.created_at);
    let ext_id   = user.external_id;
    let name     = user.name.clone();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, external_id, name, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, ext_id, name, at_str],
        )?;
        Ok(())
      })
      .await
      .map_err(|e| {
        if is_constraint_violation(&e) {
          Error::DuplicateUser(input.external_id)
        } else {
          storage(e)
        }
      })?;

    Ok(user)
  }

  // ── Games ─────────────────────────────────────────────────────────────

  async fn find_latest_active_game(&self, chat_id: i64) -> Result<Option<Game>> {
    let raw: Option<RawGame> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT game_id, chat_id, opponent, location, price, date,
                      created_by, created_at, is_active
               FROM games
               WHERE chat_id = ?1 AND is_active = 1
               ORDER BY date DESC
               LIMIT 1",
              rusqlite::params![chat_id],
              |row| {
                Ok(RawGame {
                  game_id:    row.get(0)?,
                  chat_id:    row.get(1)?,
                  opponent:   row.get(2)?,
                  location:   row.get(3)?,
                  price:      row.get(4)?,
                  date:       row.get(5)?,
                  created_by: row.get(6)?,
                  created_at: row.get(7)?,
                  is_active:  row.get(8)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawGame::into_game).transpose()
  }

  async fn insert_game(&self, input: NewGame) -> Result<Game> {
    let game = Game {
      game_id:    Uuid::new_v4(),
      chat_id:    input.chat_id,
      date:       input.date,
      location:   input.location,
      opponent:   input.opponent,
      price:      input.price,
      created_by: input.created_by,
      created_at: Utc::now(),
      is_active:  true,
    };

    let id_str       = encode_uuid(game.game_id);
    let chat_id      = game.chat_id;
    let opponent     = game.opponent.clone();
    let location     = game.location.clone();
    let price        = game.price;
    let date_str     = encode_game_date(game.date);
    let creator_str  = encode_uuid(game.created_by);
    let created_str  = encode_dt(game.created_at);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO games (game_id, chat_id, opponent, location, price,
                              date, created_by, created_at, is_active)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, 1)",
          rusqlite::params![
            id_str,
            chat_id,
            opponent,
            location,
            price,
            date_str,
            creator_str,
            created_str,
          ],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(storage)?;

    Ok(game)
  }

  async fn deactivate_game(&self, game_id: Uuid) -> Result<()> {
    let id_str = encode_uuid(game_id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE games SET is_active = 0 WHERE game_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(())
      })
      .await
      .map_err(storage)
  }

  // ── Assignments ───────────────────────────────────────────────────────

  async fn find_assignment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
  ) -> Result<Option<Assignment>> {
    let game_id_str = encode_uuid(game_id);
    let user_id_str = encode_uuid(user_id);

    let raw: Option<RawAssignment> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT game_id, user_id, status, has_paid, joined_at
               FROM game_attendance
               WHERE game_id = ?1 AND user_id = ?2",
              rusqlite::params![game_id_str, user_id_str],
              |row| {
                Ok(RawAssignment {
                  game_id:   row.get(0)?,
                  user_id:   row.get(1)?,
                  status:    row.get(2)?,
                  has_paid:  row.get(3)?,
                  joined_at: row.get(4)?,
                })
              },
            )
            .optional()?,
        )
      })
      .await
      .map_err(storage)?;

    raw.map(RawAssignment::into_assignment).transpose()
  }

  async fn insert_assignment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
    status: AttendanceStatus,
  ) -> Result<Assignment> {
    let assignment = Assignment {
      game_id,
      user_id,
      status,
      has_paid: false,
      joined_at: Utc::now(),
    };

    let game_id_str = encode_uuid(game_id);
    let user_id_str = encode_uuid(user_id);
    let status_str  = encode_status(status).to_owned();
    let at_str      = encode_dt(assignment.joined_at);

    self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO game_attendance (game_id, user_id, status, has_paid, joined_at)
           VALUES (?1, ?2, ?3, 0, ?4)",
          rusqlite::params![game_id_str, user_id_str, status_str, at_str],
        )?;
        tx.commit()?;
        Ok(())
      })
      .await
      .map_err(|e| {
        if is_constraint_violation(&e) {
          Error::DuplicateAssignment { game_id, user_id }
        } else {
          storage(e)
        }
      })?;

    Ok(assignment)
  }

  async fn update_assignment_status(
    &self,
    game_id: Uuid,
    user_id: Uuid,
    status: AttendanceStatus,
  ) -> Result<()> {
    let game_id_str = encode_uuid(game_id);
    let user_id_str = encode_uuid(user_id);
    let status_str  = encode_status(status).to_owned();

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE game_attendance SET status = ?3
           WHERE game_id = ?1 AND user_id = ?2",
          rusqlite::params![game_id_str, user_id_str, status_str],
        )?;
        Ok(())
      })
      .await
      .map_err(storage)
  }

  async fn update_assignment_payment(
    &self,
    game_id: Uuid,
    user_id: Uuid,
  ) -> Result<()> {
    let game_id_str = encode_uuid(game_id);
    let user_id_str = encode_uuid(user_id);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "UPDATE game_attendance SET has_paid = 1
           WHERE game_id = ?1 AND user_id = ?2",
          rusqlite::params![game_id_str, user_id_str],
        )?;
        Ok(())
      })
      .await
      .map_err(storage)
  }

  async fn list_assignments(&self, game_id: Uuid) -> Result<Vec<RosterEntry>> {
    let game_id_str = encode_uuid(game_id);

    let raws: Vec<RawRosterEntry> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT u.user_id, u.external_id, u.name, u.created_at,
                  a.status, a.has_paid
           FROM game_attendance a
           JOIN users u ON u.user_id = a.user_id
           WHERE a.game_id = ?1
           ORDER BY a.joined_at",
        )?;

        let rows = stmt
          .query_map(rusqlite::params![game_id_str], |row| {
            Ok(RawRosterEntry {
              user:     RawUser {
                user_id:     row.get(0)?,
                external_id: row.get(1)?,
                name:        row.get(2)?,
                created_at:  row.get(3)?,
              },
              status:   row.get(4)?,
              has_paid: row.get(5)?,
            })
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await
      .map_err(storage)?;

    raws.into_iter().map(RawRosterEntry::into_entry).collect()
  }
}
