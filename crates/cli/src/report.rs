// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Equities table output.
use std::fmt;

use poker_odds_eval::{CardSet, Equities};

/// Maximum number of outs printed for a hand.
const MAX_OUTS: usize = 16;

/// Formats equities as a table with a row per hand.
pub struct Report<'a> {
    equities: &'a Equities,
}

impl<'a> Report<'a> {
    pub fn new(equities: &'a Equities) -> Self {
        Self { equities }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<6} {:>8} {:>8} {:>8}  Outs",
            "Hand", "Win", "Lose", "Tie"
        )?;

        for result in self.equities {
            write!(
                f,
                "{:<6} {:>7.2}% {:>7.2}% {:>7.2}%",
                result.hand.to_string(),
                result.win_rate * 100.0,
                result.lose_rate * 100.0,
                result.tie_rate * 100.0
            )?;

            if !result.outs.is_empty() {
                write!(f, "  {}", format_outs(&result.outs))?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

/// Formats outs as single cards or as parenthesized tuples.
fn format_outs(outs: &[CardSet]) -> String {
    let mut s = outs
        .iter()
        .take(MAX_OUTS)
        .map(|out| {
            let cards = out.iter().map(|c| c.to_string()).collect::<Vec<_>>();
            if cards.len() == 1 {
                cards[0].clone()
            } else {
                format!("({})", cards.join(" "))
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if outs.len() > MAX_OUTS {
        s.push_str(&format!(" ... {} more", outs.len() - MAX_OUTS));
    }

    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use poker_odds_eval::EquityEngine;

    fn hands(s: &str) -> Vec<CardSet> {
        s.split(',').map(|h| h.parse().unwrap()).collect()
    }

    #[test]
    fn turn_report() {
        let equities = EquityEngine::default()
            .equities(
                &hands("9d 9c, Kd Kc"),
                &"Ah 9h Jd 3d".parse().unwrap(),
                &CardSet::new(),
            )
            .unwrap();

        let report = Report::new(&equities).to_string();
        let lines = report.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Hand"));
        assert!(lines[1].starts_with("9d9c"));
        assert!(!lines[1].contains("Kh"));
        assert!(lines[2].starts_with("KdKc"));
        assert!(lines[2].ends_with("Kh Ks"));
    }

    #[test]
    fn outs_tuples() {
        let outs = ["Tc Qd", "Ks As"].map(|o| o.parse::<CardSet>().unwrap());
        assert_eq!(format_outs(&outs), "(Tc Qd) (Ks As)");
    }

    #[test]
    fn outs_truncated() {
        let outs = CardSet::new_deck()
            .iter()
            .take(MAX_OUTS + 3)
            .map(|c| CardSet::try_from(vec![*c]).unwrap())
            .collect::<Vec<_>>();
        let s = format_outs(&outs);
        assert!(s.starts_with("2c 2d 2h 2s"));
        assert!(s.ends_with("... 3 more"));
    }
}
