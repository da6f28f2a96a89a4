// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! The hand and deck cards of a deal.
use ahash::AHashSet;
use rand::prelude::*;
use std::{fmt, str::FromStr};

use crate::{Card, Deck, InvalidInput};

/// The ten cards of a deal: five cards in the player hand followed by the
/// five cards on top of the deck in drawing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSet {
    cards: [Card; HandSet::SIZE],
}

impl HandSet {
    /// The number of cards in the hand.
    pub const HAND_SIZE: usize = 5;

    /// The number of cards in a deal.
    pub const SIZE: usize = 10;

    /// Creates a deal from ten distinct cards, hand cards first.
    pub fn new(cards: &[Card]) -> Result<Self, InvalidInput> {
        let cards: [Card; Self::SIZE] =
            cards.try_into().map_err(|_| InvalidInput::CardCount {
                expected: Self::SIZE,
                found: cards.len(),
            })?;

        let mut seen = AHashSet::with_capacity(Self::SIZE);
        if let Some(card) = cards.iter().find(|&&card| !seen.insert(card)) {
            return Err(InvalidInput::Duplicate(*card));
        }

        Ok(Self { cards })
    }

    /// Deals ten cards from a shuffled deck.
    pub fn deal<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Deck::new_and_shuffled(rng);
        let cards = std::array::from_fn(|_| deck.deal());
        Self { cards }
    }

    /// All the cards, hand cards first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// The player hand cards.
    pub fn hand(&self) -> &[Card] {
        &self.cards[..Self::HAND_SIZE]
    }

    /// The deck cards in drawing order.
    pub fn deck(&self) -> &[Card] {
        &self.cards[Self::HAND_SIZE..]
    }

    /// Returns the 1-based drawing position of a deck card.
    ///
    /// Returns `None` if the card is not in the deck.
    pub fn deck_position(&self, card: Card) -> Option<usize> {
        self.deck().iter().position(|&c| c == card).map(|pos| pos + 1)
    }

    /// Computes what it takes to get the `required` cards in the final hand.
    ///
    /// Returns `None` if any of the cards is not part of this deal.
    pub fn draw_cost(&self, required: &[Card]) -> Option<DrawCost> {
        required
            .iter()
            .try_fold(DrawCost::default(), |mut cost, &card| {
                if self.hand().contains(&card) {
                    cost.from_hand += 1;
                } else {
                    let pos = self.deck_position(card)?;
                    cost.farthest = cost.farthest.max(pos);
                }

                Some(cost)
            })
    }

    /// Checks if the `required` cards can all end up in the final hand.
    ///
    /// To draw the deck card at position `k` the player must discard `k`
    /// hand cards, the hand cards that can be discarded are the ones that
    /// are not required.
    pub fn is_drawable(&self, required: &[Card]) -> bool {
        self.draw_cost(required)
            .is_some_and(|cost| cost.is_drawable())
    }
}

impl FromStr for HandSet {
    type Err = InvalidInput;

    /// Parses ten whitespace separated card codes.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = s
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Card>, _>>()?;
        Self::new(&cards)
    }
}

impl fmt::Display for HandSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand:")?;
        for card in self.hand() {
            write!(f, " {card}")?;
        }

        write!(f, " Deck:")?;
        for card in self.deck() {
            write!(f, " {card}")?;
        }

        Ok(())
    }
}

/// The cost of drawing a set of cards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawCost {
    /// Number of required cards already in the hand.
    pub from_hand: usize,
    /// The farthest deck position of the required deck cards, 0 for none.
    pub farthest: usize,
}

impl DrawCost {
    /// Number of hand cards that are not required and can be discarded.
    pub fn discard_budget(&self) -> usize {
        HandSet::HAND_SIZE.saturating_sub(self.from_hand)
    }

    /// Checks if the farthest deck card can be reached by discarding.
    pub fn is_drawable(&self) -> bool {
        self.farthest <= self.discard_budget()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &str) -> Vec<Card> {
        codes.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn deal() -> HandSet {
        "TH JH QC QD QS QH KH AH 2S 6S".parse().unwrap()
    }

    #[test]
    fn hand_and_deck() {
        let set = deal();
        assert_eq!(set.hand(), cards("TH JH QC QD QS"));
        assert_eq!(set.deck(), cards("QH KH AH 2S 6S"));
        assert_eq!(set.to_string(), "Hand: TH JH QC QD QS Deck: QH KH AH 2S 6S");

        assert_eq!(set.deck_position("QH".parse().unwrap()), Some(1));
        assert_eq!(set.deck_position("6S".parse().unwrap()), Some(5));
        assert_eq!(set.deck_position("TH".parse().unwrap()), None);
    }

    #[test]
    fn parse_errors() {
        let res = "XX JH QC QD QS QH KH AH 2S".parse::<HandSet>();
        assert_eq!(res, Err(InvalidInput::Face("XX".to_string())));

        let res = "TH JH QC QD QS QH KH AH 2S".parse::<HandSet>();
        assert_eq!(
            res,
            Err(InvalidInput::CardCount {
                expected: 10,
                found: 9
            })
        );

        let res = "TH JH QC QD QS QH KH AH 2S 6S 7S".parse::<HandSet>();
        assert!(matches!(res, Err(InvalidInput::CardCount { found: 11, .. })));

        let res = "TH JH QC QD QS QH KH AH 2S th".parse::<HandSet>();
        assert_eq!(res, Err(InvalidInput::Duplicate("TH".parse().unwrap())));
    }

    #[test]
    fn draw_cost() {
        let set = deal();

        let cost = set.draw_cost(&cards("QC QD QS QH")).unwrap();
        assert_eq!(cost, DrawCost { from_hand: 3, farthest: 1 });
        assert_eq!(cost.discard_budget(), 2);
        assert!(cost.is_drawable());

        let cost = set.draw_cost(&[]).unwrap();
        assert_eq!(cost.discard_budget(), 5);
        assert_eq!(cost.farthest, 0);

        // 9C is not in this deal.
        assert_eq!(set.draw_cost(&cards("QC 9C")), None);
        assert!(!set.is_drawable(&cards("QC 9C")));
    }

    #[test]
    fn hand_cards_are_drawable() {
        let set = deal();
        for k in 0..=HandSet::HAND_SIZE {
            assert!(set.is_drawable(&set.hand()[..k]));
        }
    }

    #[test]
    fn exact_budget_boundary() {
        let set = deal();

        // Three hand cards leave two discards, AH is the third deck card.
        assert!(set.is_drawable(&cards("TH JH QC KH")));
        assert!(!set.is_drawable(&cards("TH JH QC AH")));

        // No hand card kept, the whole deck can be drawn.
        assert!(set.is_drawable(&cards("QH KH AH 2S 6S")));
        assert!(!set.is_drawable(&cards("TH 6S")));
        assert!(set.is_drawable(&cards("TH 2S")));
    }

    #[test]
    fn drawable_is_monotonic() {
        let set = deal();
        let required = cards("TH QH KH AH");
        assert!(set.is_drawable(&required));

        // Any subset of a drawable set is drawable.
        for mask in 0u32..(1 << required.len()) {
            let subset = required
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, &c)| c)
                .collect::<Vec<_>>();
            assert!(set.is_drawable(&subset), "{subset:?}");
        }
    }

    #[test]
    fn random_deals() {
        let mut rng = rand::rng();
        for _ in 0..100 {
            let set = HandSet::deal(&mut rng);
            assert_eq!(HandSet::new(set.cards()), Ok(set));
            assert!(set.is_drawable(set.hand()));
            assert!(set.is_drawable(set.deck()));
        }
    }
}
