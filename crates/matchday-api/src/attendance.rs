//! Handlers for attendance and payment.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/chats/{chat_id}/attendance` | Body: [`SetAttendanceBody`]; 404 with no game |
//! | `POST` | `/chats/{chat_id}/payment`    | Body: [`MarkPaidBody`]; 409 if not registered |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use matchday_core::{
  roster::{AttendanceStatus, GameDetails},
  store::GameStore,
};
use matchday_engine::{Caller, GameService};
use serde::Deserialize;

use crate::error::ApiError;

/// JSON body accepted by `POST /chats/{chat_id}/attendance`.
#[derive(Debug, Deserialize)]
pub struct SetAttendanceBody {
  pub external_id:  i64,
  pub display_name: String,
  pub status:       AttendanceStatus,
}

/// `POST /chats/{chat_id}/attendance`
pub async fn set<S>(
  State(service): State<Arc<GameService<S>>>,
  Path(chat_id): Path<i64>,
  Json(body): Json<SetAttendanceBody>,
) -> Result<Json<GameDetails>, ApiError>
where
  S: GameStore,
{
  let caller = Caller {
    external_id: body.external_id,
    name:        body.display_name,
  };
  let details = service
    .set_attendance(chat_id, &caller, body.status)
    .await?;
  Ok(Json(details))
}

/// JSON body accepted by `POST /chats/{chat_id}/payment`.
#[derive(Debug, Deserialize)]
pub struct MarkPaidBody {
  pub external_id: i64,
}

/// `POST /chats/{chat_id}/payment`
pub async fn paid<S>(
  State(service): State<Arc<GameService<S>>>,
  Path(chat_id): Path<i64>,
  Json(body): Json<MarkPaidBody>,
) -> Result<Json<GameDetails>, ApiError>
where
  S: GameStore,
{
  let details = service.mark_paid(chat_id, body.external_id).await?;
  Ok(Json(details))
}
