//! Integration tests for `SqliteStore` against an in-memory database.

use matchday_core::{
  Error,
  game::NewGame,
  roster::AttendanceStatus,
  store::GameStore,
  user::NewUser,
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn new_user(external_id: i64, name: &str) -> NewUser {
  NewUser { external_id, name: name.into() }
}

fn new_game(chat_id: i64, date: &str, opponent: &str, created_by: Uuid) -> NewGame {
  NewGame {
    chat_id,
    date: date.parse().expect("test date"),
    location: "Marina Bay".into(),
    opponent: opponent.into(),
    price: 0.0,
    created_by,
  }
}

// ─── Users ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_user() {
  let s = store().await;

  let user = s.insert_user(new_user(42, "Alice")).await.unwrap();
  assert_eq!(user.external_id, 42);
  assert_eq!(user.name, "Alice");

  let found = s.find_user_by_external_id(42).await.unwrap().unwrap();
  assert_eq!(found.user_id, user.user_id);
  assert_eq!(found.name, "Alice");
}

#[tokio::test]
async fn find_user_missing_returns_none() {
  let s = store().await;
  assert!(s.find_user_by_external_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn insert_duplicate_external_id_is_conflict() {
  let s = store().await;
  s.insert_user(new_user(42, "Alice")).await.unwrap();

  let err = s.insert_user(new_user(42, "Alice Again")).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateUser(42)));
}

// ─── Games ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_latest_game() {
  let s = store().await;
  let creator = s.insert_user(new_user(1, "Alice")).await.unwrap();

  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", creator.user_id))
    .await
    .unwrap();
  assert!(game.is_active);
  assert_eq!(game.chat_id, 7);

  let found = s.find_latest_active_game(7).await.unwrap().unwrap();
  assert_eq!(found.game_id, game.game_id);
  assert_eq!(found.opponent, "Célavi FC");
  assert_eq!(found.date, game.date);
}

#[tokio::test]
async fn latest_game_is_most_recent_by_date() {
  let s = store().await;
  let creator = s.insert_user(new_user(1, "Alice")).await.unwrap();

  s.insert_game(new_game(7, "2024-01-05T11:00:00", "Early FC", creator.user_id))
    .await
    .unwrap();
  let later = s
    .insert_game(new_game(7, "2024-06-05T11:00:00", "Late FC", creator.user_id))
    .await
    .unwrap();

  let found = s.find_latest_active_game(7).await.unwrap().unwrap();
  assert_eq!(found.game_id, later.game_id);
}

#[tokio::test]
async fn latest_game_is_scoped_to_chat() {
  let s = store().await;
  let creator = s.insert_user(new_user(1, "Alice")).await.unwrap();

  s.insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", creator.user_id))
    .await
    .unwrap();

  assert!(s.find_latest_active_game(8).await.unwrap().is_none());
}

#[tokio::test]
async fn game_price_roundtrip() {
  let s = store().await;
  let creator = s.insert_user(new_user(1, "Alice")).await.unwrap();

  let mut input = new_game(7, "2024-10-10T11:00:00", "Célavi FC", creator.user_id);
  input.price = 15.0;
  s.insert_game(input).await.unwrap();

  let found = s.find_latest_active_game(7).await.unwrap().unwrap();
  assert_eq!(found.price, 15.0);
}

#[tokio::test]
async fn deactivated_game_stops_being_latest() {
  let s = store().await;
  let creator = s.insert_user(new_user(1, "Alice")).await.unwrap();

  let old = s
    .insert_game(new_game(7, "2024-01-05T11:00:00", "Early FC", creator.user_id))
    .await
    .unwrap();
  let current = s
    .insert_game(new_game(7, "2024-06-05T11:00:00", "Late FC", creator.user_id))
    .await
    .unwrap();

  s.deactivate_game(current.game_id).await.unwrap();

  // The older active game surfaces again; a second deactivation is a no-op.
  let found = s.find_latest_active_game(7).await.unwrap().unwrap();
  assert_eq!(found.game_id, old.game_id);

  s.deactivate_game(current.game_id).await.unwrap();
  s.deactivate_game(old.game_id).await.unwrap();
  assert!(s.find_latest_active_game(7).await.unwrap().is_none());
}

// ─── Assignments ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn insert_and_find_assignment() {
  let s = store().await;
  let user = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", user.user_id))
    .await
    .unwrap();

  let a = s
    .insert_assignment(game.game_id, user.user_id, AttendanceStatus::Attending)
    .await
    .unwrap();
  assert!(!a.has_paid);

  let found = s
    .find_assignment(game.game_id, user.user_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(found.status, AttendanceStatus::Attending);
  assert!(!found.has_paid);
}

#[tokio::test]
async fn duplicate_assignment_is_conflict() {
  let s = store().await;
  let user = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", user.user_id))
    .await
    .unwrap();

  s.insert_assignment(game.game_id, user.user_id, AttendanceStatus::Attending)
    .await
    .unwrap();

  let err = s
    .insert_assignment(game.game_id, user.user_id, AttendanceStatus::Out)
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateAssignment { .. }));
}

#[tokio::test]
async fn status_update_keeps_joined_at_and_payment() {
  let s = store().await;
  let user = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", user.user_id))
    .await
    .unwrap();

  let original = s
    .insert_assignment(game.game_id, user.user_id, AttendanceStatus::Attending)
    .await
    .unwrap();
  s.update_assignment_payment(game.game_id, user.user_id)
    .await
    .unwrap();

  s.update_assignment_status(game.game_id, user.user_id, AttendanceStatus::Out)
    .await
    .unwrap();

  let found = s
    .find_assignment(game.game_id, user.user_id)
    .await
    .unwrap()
    .unwrap();
  assert_eq!(found.status, AttendanceStatus::Out);
  assert_eq!(found.joined_at, original.joined_at);
  assert!(found.has_paid);
}

#[tokio::test]
async fn payment_update_is_idempotent() {
  let s = store().await;
  let user = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", user.user_id))
    .await
    .unwrap();
  s.insert_assignment(game.game_id, user.user_id, AttendanceStatus::Attending)
    .await
    .unwrap();

  s.update_assignment_payment(game.game_id, user.user_id)
    .await
    .unwrap();
  s.update_assignment_payment(game.game_id, user.user_id)
    .await
    .unwrap();

  let found = s
    .find_assignment(game.game_id, user.user_id)
    .await
    .unwrap()
    .unwrap();
  assert!(found.has_paid);
}

// ─── Roster join ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_assignments_joins_users() {
  let s = store().await;
  let alice = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let bob = s.insert_user(new_user(2, "Bob")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", alice.user_id))
    .await
    .unwrap();

  s.insert_assignment(game.game_id, alice.user_id, AttendanceStatus::Attending)
    .await
    .unwrap();
  s.insert_assignment(game.game_id, bob.user_id, AttendanceStatus::Out)
    .await
    .unwrap();
  s.update_assignment_payment(game.game_id, alice.user_id)
    .await
    .unwrap();

  let roster = s.list_assignments(game.game_id).await.unwrap();
  assert_eq!(roster.len(), 2);

  let alice_entry = roster.iter().find(|e| e.user.name == "Alice").unwrap();
  assert_eq!(alice_entry.status, AttendanceStatus::Attending);
  assert!(alice_entry.has_paid);

  let bob_entry = roster.iter().find(|e| e.user.name == "Bob").unwrap();
  assert_eq!(bob_entry.status, AttendanceStatus::Out);
  assert!(!bob_entry.has_paid);
}

#[tokio::test]
async fn list_assignments_empty_for_fresh_game() {
  let s = store().await;
  let user = s.insert_user(new_user(1, "Alice")).await.unwrap();
  let game = s
    .insert_game(new_game(7, "2024-10-10T11:00:00", "Célavi FC", user.user_id))
    .await
    .unwrap();

  assert!(s.list_assignments(game.game_id).await.unwrap().is_empty());
}
