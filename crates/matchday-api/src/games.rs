//! Handlers for `/chats/{chat_id}/game`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/chats/{chat_id}/game` | Body: [`CreateGameBody`]; 409 while a future game exists |
//! | `GET`  | `/chats/{chat_id}/game` | `null` when nothing is scheduled |
//! | `GET`  | `/chats/{chat_id}/game/text` | Chat-displayable rendering |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use matchday_core::{roster::GameDetails, store::GameStore};
use matchday_engine::{Caller, GameService};
use serde::Deserialize;

use crate::{error::ApiError, format};

/// JSON body accepted by `POST /chats/{chat_id}/game`.
#[derive(Debug, Deserialize)]
pub struct CreateGameBody {
  pub external_id:  i64,
  pub display_name: String,
  /// Comma-split creation fields: date, time, location, opponent, price?.
  pub fields:       Vec<String>,
}

/// `POST /chats/{chat_id}/game`
pub async fn create<S>(
  State(service): State<Arc<GameService<S>>>,
  Path(chat_id): Path<i64>,
  Json(body): Json<CreateGameBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: GameStore,
{
  let caller = Caller {
    external_id: body.external_id,
    name:        body.display_name,
  };
  let details = service.create_game(chat_id, &caller, &body.fields).await?;
  Ok((StatusCode::CREATED, Json(details)))
}

/// `GET /chats/{chat_id}/game` — the current game with partitioned rosters,
/// or JSON `null` when none is scheduled (absence is not an error).
pub async fn details<S>(
  State(service): State<Arc<GameService<S>>>,
  Path(chat_id): Path<i64>,
) -> Result<Json<Option<GameDetails>>, ApiError>
where
  S: GameStore,
{
  Ok(Json(service.details(chat_id).await?))
}

/// `GET /chats/{chat_id}/game/text`
pub async fn details_text<S>(
  State(service): State<Arc<GameService<S>>>,
  Path(chat_id): Path<i64>,
) -> Result<String, ApiError>
where
  S: GameStore,
{
  let details = service.details(chat_id).await?;
  Ok(format::game_message(details.as_ref()))
}
