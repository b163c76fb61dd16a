//! JSON transport for the Matchday engine.
//!
//! Exposes an axum [`Router`] over a [`GameService`] backed by any
//! [`matchday_core::store::GameStore`]. The engine owns every decision;
//! handlers only translate identifiers and bodies in and
//! [`matchday_core::roster::GameDetails`] out.

pub mod attendance;
pub mod error;
pub mod format;
pub mod games;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use matchday_core::store::GameStore;
use matchday_engine::GameService;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Build a fully-materialised router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(service: Arc<GameService<S>>) -> Router<()>
where
  S: GameStore + 'static,
{
  Router::new()
    .route(
      "/chats/{chat_id}/game",
      post(games::create::<S>).get(games::details::<S>),
    )
    .route("/chats/{chat_id}/game/text", get(games::details_text::<S>))
    .route("/chats/{chat_id}/attendance", post(attendance::set::<S>))
    .route("/chats/{chat_id}/payment", post(attendance::paid::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(service)
}
