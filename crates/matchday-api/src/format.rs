//! Plain-text rendering of the game state for chat display.
//!
//! The presentation adapter: turns a [`GameDetails`] into the message a chat
//! client shows. Roster lines are numbered in storage order; a check mark
//! flags users who have paid.

use std::fmt::Write as _;

use matchday_core::roster::{GameDetails, RosterEntry};

/// Render the full details message, or the no-game fallback.
pub fn game_message(details: Option<&GameDetails>) -> String {
  let Some(d) = details else {
    return "No game scheduled.".to_string();
  };

  format!(
    "Game on {}\nLocation: {}\nOpponent: {}\nPrice: {:.2}\nPlayers:\n{}Absentees:\n{}",
    d.game.date.format("%Y-%m-%d %H:%M"),
    d.game.location,
    d.game.opponent,
    d.game.price,
    roster_lines(&d.attending),
    roster_lines(&d.absent),
  )
}

fn roster_lines(entries: &[RosterEntry]) -> String {
  let mut out = String::new();
  for (i, entry) in entries.iter().enumerate() {
    let _ = write!(out, "{}. {}", i + 1, entry.user.name);
    if entry.has_paid {
      out.push_str(" ✅");
    }
    out.push('\n');
  }
  out
}
