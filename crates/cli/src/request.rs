// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parses the scenario cards from the command line notation.
use anyhow::{Context, Result, bail};

use poker_odds_eval::{Card, CardSet};

/// The cards for an equity request.
#[derive(Debug)]
pub struct Request {
    /// The players hole cards.
    pub hands: Vec<CardSet>,
    /// The known board cards.
    pub board: CardSet,
    /// Cards out of play.
    pub exposed: CardSet,
}

impl Request {
    /// Parses players `"9d 9c, Kd Kc"`, flop `"Ah 9h Jd"`, turn `"3d"`, and
    /// exposed cards `"2c 7d"`.
    pub fn parse(
        players: &str,
        flop: Option<&str>,
        turn: Option<&str>,
        exposed: &str,
    ) -> Result<Self> {
        let hands = players
            .split(',')
            .map(|h| {
                h.parse::<CardSet>()
                    .with_context(|| format!("Invalid hand '{}'", h.trim()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut board = match flop {
            Some(flop) => flop.parse::<CardSet>().context("Invalid flop")?,
            None => CardSet::new(),
        };

        if flop.is_some() && board.len() != 3 {
            bail!("The flop must have 3 cards, got {}", board.len());
        }

        if let Some(turn) = turn {
            if flop.is_none() {
                bail!("The turn requires a flop");
            }

            let card = turn.parse::<Card>().context("Invalid turn")?;
            if !board.push(card) {
                bail!("Card {card} is used more than once");
            }
        }

        let exposed = exposed
            .parse::<CardSet>()
            .context("Invalid exposed cards")?;

        Ok(Self {
            hands,
            board,
            exposed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_turn() {
        let req = Request::parse("9d 9c, Kd Kc", Some("Ah 9h Jd"), Some("3d"), "").unwrap();
        let hands = req.hands.iter().map(|h| h.to_string()).collect::<Vec<_>>();
        assert_eq!(hands, ["9d9c", "KdKc"]);
        assert_eq!(req.board.to_string(), "Ah9hJd3d");
        assert!(req.exposed.is_empty());
    }

    #[test]
    fn parse_preflop() {
        let req = Request::parse("9d9c,KdKc,2h 2s", None, None, "Ah Kd").unwrap();
        assert_eq!(req.hands.len(), 3);
        assert!(req.board.is_empty());
        assert_eq!(req.exposed.to_string(), "AhKd");
    }

    #[test]
    fn parse_errors() {
        assert!(Request::parse("9d 9x, Kd Kc", None, None, "").is_err());
        assert!(Request::parse("9d 9c, Kd Kc", Some("Ah 9h"), None, "").is_err());
        assert!(Request::parse("9d 9c, Kd Kc", None, Some("3d"), "").is_err());
        assert!(Request::parse("9d 9c, Kd Kc", Some("Ah 9h Jd"), Some("9h"), "").is_err());
        assert!(Request::parse("9d 9c, Kd Kc", None, None, "A").is_err());
    }
}
