//! [`GameService`] — the four typed operations of the engine.

use chrono::Local;
use matchday_core::{
  Error, Result,
  game::{Game, NewGame},
  roster::{AttendanceStatus, GameDetails},
  store::GameStore,
  user::{NewUser, User},
};
use tracing::{debug, warn};

use crate::args::GameArgs;

/// The identity a transport supplies for the acting user.
#[derive(Debug, Clone)]
pub struct Caller {
  pub external_id: i64,
  pub name:        String,
}

/// The attendance state engine.
///
/// Stateless between calls — all state lives in the backing [`GameStore`],
/// and the single-active-game invariant is derived per call by querying the
/// chat's latest active game. Safe to share across concurrent handlers.
#[derive(Clone)]
pub struct GameService<S> {
  store: S,
}

impl<S: GameStore> GameService<S> {
  pub fn new(store: S) -> Self { Self { store } }

  /// Schedule a new game for `chat_id`.
  ///
  /// Rejected with [`Error::AlreadyScheduled`] while the chat's current
  /// game is still in the future. The caller is upserted before the
  /// conflict check so a retry after a partial failure finds the user in
  /// place rather than hitting an insert conflict.
  pub async fn create_game(
    &self,
    chat_id: i64,
    caller: &Caller,
    fields: &[String],
  ) -> Result<GameDetails> {
    let user = self.resolve_user(caller).await?;

    if let Some(prev) = self.store.find_latest_active_game(chat_id).await?
      && prev.date > Local::now().naive_local()
    {
      return Err(Error::AlreadyScheduled {
        date:     prev.date,
        opponent: prev.opponent,
      });
    }

    let args = GameArgs::parse(fields)?;
    let game = self
      .store
      .insert_game(NewGame {
        chat_id,
        date: args.date,
        location: args.location,
        opponent: args.opponent,
        price: args.price,
        created_by: user.user_id,
      })
      .await?;

    debug!(chat_id, game_id = %game.game_id, "game created");

    // A fresh game has no assignments; skip the roster read.
    Ok(GameDetails {
      game,
      attending: Vec::new(),
      absent: Vec::new(),
    })
  }

  /// Register or update the caller's attendance for the chat's current
  /// game.
  ///
  /// Repeated identical calls are no-ops. The status machine is freely
  /// reversible between `Attending` and `Out`, and a first registration
  /// with `Out` is a valid assignment, not an error.
  pub async fn set_attendance(
    &self,
    chat_id: i64,
    caller: &Caller,
    status: AttendanceStatus,
  ) -> Result<GameDetails> {
    let game = self.current_game(chat_id).await?;
    let user = self.resolve_user(caller).await?;

    match self.store.find_assignment(game.game_id, user.user_id).await? {
      Some(existing) => {
        if existing.status != status {
          self
            .store
            .update_assignment_status(game.game_id, user.user_id, status)
            .await?;
        }
      }
      None => {
        match self
          .store
          .insert_assignment(game.game_id, user.user_id, status)
          .await
        {
          Ok(_) => {}
          // A concurrent registration won the insert; fall back to the
          // update path instead of surfacing the constraint error.
          Err(Error::DuplicateAssignment { .. }) => {
            warn!(
              chat_id,
              user_id = %user.user_id,
              "lost registration race, retrying as update"
            );
            self
              .store
              .update_assignment_status(game.game_id, user.user_id, status)
              .await?;
          }
          Err(e) => return Err(e),
        }
      }
    }

    self.details_for(game).await
  }

  /// The chat's current game with partitioned rosters, or `None` when no
  /// game is scheduled — absence is not an error here.
  pub async fn details(&self, chat_id: i64) -> Result<Option<GameDetails>> {
    match self.store.find_latest_active_game(chat_id).await? {
      Some(game) => Ok(Some(self.details_for(game).await?)),
      None => Ok(None),
    }
  }

  /// Record that the user has paid for the chat's current game.
  ///
  /// Requires an existing assignment — paying without being on the roster
  /// is a conflict. Idempotent: the flag only ever moves false → true.
  pub async fn mark_paid(
    &self,
    chat_id: i64,
    external_id: i64,
  ) -> Result<GameDetails> {
    let game = self.current_game(chat_id).await?;
    let user = self
      .store
      .find_user_by_external_id(external_id)
      .await?
      .ok_or(Error::UnknownUser(external_id))?;

    if self
      .store
      .find_assignment(game.game_id, user.user_id)
      .await?
      .is_none()
    {
      return Err(Error::NotRegistered { name: user.name });
    }

    self
      .store
      .update_assignment_payment(game.game_id, user.user_id)
      .await?;

    self.details_for(game).await
  }

  // ── Helpers ───────────────────────────────────────────────────────────

  async fn current_game(&self, chat_id: i64) -> Result<Game> {
    self
      .store
      .find_latest_active_game(chat_id)
      .await?
      .ok_or(Error::NoGameScheduled(chat_id))
  }

  /// Resolve the caller to a stored user, creating one on first contact.
  /// Tolerates losing a concurrent creation race by re-reading.
  async fn resolve_user(&self, caller: &Caller) -> Result<User> {
    if let Some(user) = self
      .store
      .find_user_by_external_id(caller.external_id)
      .await?
    {
      return Ok(user);
    }

    let input = NewUser {
      external_id: caller.external_id,
      name:        caller.name.clone(),
    };
    match self.store.insert_user(input).await {
      Ok(user) => Ok(user),
      Err(Error::DuplicateUser(_)) => {
        // Another handler created the user between our read and write.
        self
          .store
          .find_user_by_external_id(caller.external_id)
          .await?
          .ok_or(Error::UnknownUser(caller.external_id))
      }
      Err(e) => Err(e),
    }
  }

  /// The combined post-mutation read: every mutating operation returns the
  /// full current state in one roster query.
  async fn details_for(&self, game: Game) -> Result<GameDetails> {
    let entries = self.store.list_assignments(game.game_id).await?;
    Ok(GameDetails::partition(game, entries))
  }
}
