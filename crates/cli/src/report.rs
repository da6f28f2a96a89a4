// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Deal results output.
use anyhow::Result;
use serde::Serialize;
use std::{fmt, io::Write};

use psychic_eval::{Card, Category, HandSet};

/// The result of evaluating a deal.
#[derive(Debug, Serialize)]
pub struct Report {
    /// The hand cards.
    pub hand: Vec<String>,
    /// The deck cards in drawing order.
    pub deck: Vec<String>,
    /// The best achievable hand category.
    pub best_hand: Category,
    /// The cards that make the best hand.
    pub witness: Vec<String>,
}

impl Report {
    /// Evaluates a deal.
    pub fn new(set: &HandSet) -> Self {
        let best = set.best_hand();
        Self {
            hand: codes(set.hand()),
            deck: codes(set.deck()),
            best_hand: best.category,
            witness: codes(&best.cards),
        }
    }

    /// Writes this report as a text line or as a JSON object.
    pub fn write<W: Write>(&self, w: &mut W, json: bool) -> Result<()> {
        if json {
            serde_json::to_writer(&mut *w, self)?;
            writeln!(w)?;
        } else {
            writeln!(w, "{self}")?;
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Hand: {} Deck: {} Best hand: {}",
            self.hand.join(" "),
            self.deck.join(" "),
            self.best_hand
        )
    }
}

fn codes(cards: &[Card]) -> Vec<String> {
    cards.iter().map(Card::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(codes: &str) -> Report {
        Report::new(&codes.parse().unwrap())
    }

    #[test]
    fn text_line() {
        let mut out = Vec::new();
        report("TH JH QC QD QS QH KH AH 2S 6S")
            .write(&mut out, false)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Hand: TH JH QC QD QS Deck: QH KH AH 2S 6S Best hand: Four Of A Kind\n"
        );
    }

    #[test]
    fn lower_case_codes_print_upper_case() {
        let r = report("2h 3d 5s 9c kd 2c 3h 4s 4d ks");
        assert_eq!(
            r.to_string(),
            "Hand: 2H 3D 5S 9C KD Deck: 2C 3H 4S 4D KS Best hand: Two Pair"
        );
    }

    #[test]
    fn json_witness() {
        let mut out = Vec::new();
        report("TH JH QC QD QS QH KH AH 2S 6S")
            .write(&mut out, true)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["best_hand"], "Four Of A Kind");
        assert_eq!(value["witness"], serde_json::json!(["QC", "QD", "QS", "QH"]));
    }

    #[test]
    fn json_object() {
        let mut out = Vec::new();
        report("3D 5S 2H QD TD 6S KH 9H AD QH")
            .write(&mut out, true)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["best_hand"], "Highest Card");
        assert_eq!(value["witness"], serde_json::json!([]));
        assert_eq!(value["hand"], serde_json::json!(["3D", "5S", "2H", "QD", "TD"]));
        assert_eq!(value["deck"], serde_json::json!(["6S", "KH", "9H", "AD", "QH"]));
        assert!(out.ends_with(b"\n"));
    }
}
