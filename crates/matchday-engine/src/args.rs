//! Parsing of game-creation argument fields.

use chrono::NaiveDateTime;
use matchday_core::{Error, Result};

/// Parsed game-creation arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct GameArgs {
  pub date:     NaiveDateTime,
  pub location: String,
  pub opponent: String,
  pub price:    f64,
}

impl GameArgs {
  /// Parse the comma-split fields of a creation command:
  /// `[date, time, location, opponent, price?]`.
  ///
  /// The date and time use the literal `YYYY-MM-DD` and `HH:MM` formats.
  /// The fifth field, when present, is the per-head price and must parse as
  /// a non-negative number; its absence means the game is free.
  pub fn parse(fields: &[String]) -> Result<Self> {
    if fields.len() < 4 || fields.len() > 5 {
      return Err(Error::InvalidArguments(fields.len()));
    }

    let date_str = format!("{} {}", fields[0], fields[1]);
    let date = NaiveDateTime::parse_from_str(&date_str, "%Y-%m-%d %H:%M")
      .map_err(|_| Error::InvalidDate(date_str.clone()))?;

    let price = match fields.get(4) {
      Some(raw) => parse_price(raw)?,
      None => 0.0,
    };

    Ok(Self {
      date,
      location: fields[2].clone(),
      opponent: fields[3].clone(),
      price,
    })
  }
}

fn parse_price(raw: &str) -> Result<f64> {
  let price: f64 = raw
    .parse()
    .map_err(|_| Error::InvalidPrice(raw.to_owned()))?;
  if !price.is_finite() || price < 0.0 {
    return Err(Error::InvalidPrice(raw.to_owned()));
  }
  Ok(price)
}
