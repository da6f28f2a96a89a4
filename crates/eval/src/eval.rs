// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best achievable hand evaluator.
//!
//! Each category is checked from the strongest to the weakest by building the
//! candidate combinations for that category out of the ten cards and testing
//! if any of them can be drawn with [HandSet::is_drawable]. The first category
//! with a drawable combination is the best hand, the combination is kept as a
//! witness in [BestHand].
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{
    Card, HandSet, InvalidInput,
    group::{consecutive_runs, fillings, find_subset, group_by_face, group_by_suit},
};

/// Number of cards in a straight or a flush.
const FIVE: usize = 5;

/// A Poker hand category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No other category.
    #[serde(rename = "Highest Card")]
    HighestCard,
    /// Two cards with the same face.
    #[serde(rename = "One Pair")]
    OnePair,
    /// Two pairs with different faces.
    #[serde(rename = "Two Pair")]
    TwoPair,
    /// Three cards with the same face.
    #[serde(rename = "Three Of A Kind")]
    ThreeOfAKind,
    /// Five cards with consecutive ranks.
    Straight,
    /// Five cards with the same suit.
    Flush,
    /// Three of a kind and a pair.
    #[serde(rename = "Full House")]
    FullHouse,
    /// Four cards with the same face.
    #[serde(rename = "Four Of A Kind")]
    FourOfAKind,
    /// Five cards with the same suit and consecutive ranks.
    #[serde(rename = "Straight Flush")]
    StraightFlush,
}

impl Category {
    /// Returns all categories from the strongest to the weakest.
    pub fn categories() -> impl DoubleEndedIterator<Item = Category> {
        use Category::*;
        [
            StraightFlush,
            FourOfAKind,
            FullHouse,
            Flush,
            Straight,
            ThreeOfAKind,
            TwoPair,
            OnePair,
            HighestCard,
        ]
        .into_iter()
    }

    /// The category name.
    pub fn name(&self) -> &'static str {
        match self {
            Category::StraightFlush => "Straight Flush",
            Category::FourOfAKind => "Four Of A Kind",
            Category::FullHouse => "Full House",
            Category::Flush => "Flush",
            Category::Straight => "Straight",
            Category::ThreeOfAKind => "Three Of A Kind",
            Category::TwoPair => "Two Pair",
            Category::OnePair => "One Pair",
            Category::HighestCard => "Highest Card",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The best achievable hand for a deal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestHand {
    /// The hand category.
    pub category: Category,
    /// The cards that make the category, empty for [Category::HighestCard].
    pub cards: Vec<Card>,
}

/// Evaluates the best achievable hand category for ten cards, the first five
/// are the hand cards and the last five the deck cards in drawing order.
///
/// Returns an error if there are not ten distinct cards.
pub fn evaluate(cards: &[Card]) -> Result<Category, InvalidInput> {
    Ok(HandSet::new(cards)?.best_hand().category)
}

impl HandSet {
    /// Finds the best achievable hand.
    pub fn best_hand(&self) -> BestHand {
        let best = Category::categories()
            .find_map(|category| {
                self.witness(category)
                    .map(|cards| BestHand { category, cards })
            })
            .unwrap_or(BestHand {
                category: Category::HighestCard,
                cards: Vec::new(),
            });

        debug!("{self} best {} with {:?}", best.category, best.cards);
        best
    }

    /// Checks if a hand category can be achieved.
    pub fn is_achievable(&self, category: Category) -> bool {
        self.witness(category).is_some()
    }

    /// Returns a drawable combination of cards that makes the `category`.
    ///
    /// The combination may also make a stronger category, the highest card
    /// witness is always an empty combination.
    pub fn witness(&self, category: Category) -> Option<Vec<Card>> {
        let witness = match category {
            Category::StraightFlush => self.straight_flush(),
            Category::FourOfAKind => self.of_a_kind(4),
            Category::FullHouse => self.full_house(),
            Category::Flush => self.flush(),
            Category::Straight => self.straight(),
            Category::ThreeOfAKind => self.of_a_kind(3),
            Category::TwoPair => self.two_pair(),
            Category::OnePair => self.one_pair(),
            Category::HighestCard => Some(Vec::new()),
        };

        trace!("{category}: {witness:?}");
        witness
    }

    fn straight_flush(&self) -> Option<Vec<Card>> {
        group_by_suit(self.cards())
            .into_iter()
            .filter(|(_, suited)| suited.len() >= FIVE)
            .flat_map(|(_, suited)| consecutive_runs(&suited))
            .filter(|run| run.len() >= FIVE)
            .find_map(|run| {
                run.windows(FIVE)
                    .find(|window| self.is_drawable(window))
                    .map(<[Card]>::to_vec)
            })
    }

    fn of_a_kind(&self, n: usize) -> Option<Vec<Card>> {
        group_by_face(self.cards())
            .into_iter()
            .filter(|(_, same)| same.len() >= n)
            .find_map(|(_, same)| find_subset(&same, n, |kind| self.is_drawable(kind)))
    }

    fn full_house(&self) -> Option<Vec<Card>> {
        let groups = group_by_face(self.cards());

        for (face, trips) in groups.iter().filter(|(_, same)| same.len() >= 3) {
            let pairs = groups
                .iter()
                .filter(|(other, same)| other != face && same.len() >= 2);

            for (_, pair) in pairs {
                let mut full = None;
                find_subset(trips, 3, |three| {
                    full = find_subset(pair, 2, |two| {
                        self.is_drawable(&[three, two].concat())
                    })
                    .map(|two| [three, two.as_slice()].concat());
                    full.is_some()
                });

                if full.is_some() {
                    return full;
                }
            }
        }

        None
    }

    fn flush(&self) -> Option<Vec<Card>> {
        group_by_suit(self.cards())
            .into_iter()
            .filter(|(_, suited)| suited.len() >= FIVE)
            .find_map(|(_, mut suited)| {
                // Rank order visits the contiguous windows first.
                suited.sort_by_key(Card::rank);
                run_windows_first(&suited)
                    .into_iter()
                    .find(|flush| self.is_drawable(flush))
            })
    }

    fn straight(&self) -> Option<Vec<Card>> {
        consecutive_runs(self.cards())
            .into_iter()
            .filter(|run| run.len() >= FIVE)
            .find_map(|run| {
                run.windows(FIVE).find_map(|window| {
                    // Any card with the same face can fill a window slot.
                    let choices = window
                        .iter()
                        .map(|slot| {
                            self.cards()
                                .iter()
                                .copied()
                                .filter(|card| card.face() == slot.face())
                                .collect::<Vec<_>>()
                        })
                        .collect::<Vec<_>>();

                    fillings(&choices)
                        .into_iter()
                        .find(|straight| self.is_drawable(straight))
                })
            })
    }

    /// All pairs grouped by face in order of first appearance.
    fn pairs(&self) -> Vec<Vec<Card>> {
        group_by_face(self.cards())
            .into_iter()
            .filter(|(_, same)| same.len() >= 2)
            .flat_map(|(_, same)| {
                let mut pairs = Vec::new();
                find_subset(&same, 2, |pair| {
                    pairs.push(pair.to_vec());
                    false
                });
                pairs
            })
            .collect()
    }

    fn two_pair(&self) -> Option<Vec<Card>> {
        let pairs = self.pairs();

        pairs.iter().enumerate().find_map(|(idx, first)| {
            pairs[idx + 1..]
                .iter()
                .filter(|second| second[0].face() != first[0].face())
                .map(|second| [first.as_slice(), second.as_slice()].concat())
                .find(|two| self.is_drawable(two))
        })
    }

    fn one_pair(&self) -> Option<Vec<Card>> {
        self.pairs().into_iter().find(|pair| self.is_drawable(pair))
    }
}

/// Returns the 5 cards subsets of rank sorted `suited` cards, contiguous
/// windows first.
fn run_windows_first(suited: &[Card]) -> Vec<Vec<Card>> {
    let mut subsets = suited
        .windows(FIVE)
        .map(<[Card]>::to_vec)
        .collect::<Vec<_>>();

    find_subset(suited, FIVE, |subset| {
        if !subsets.iter().any(|s| s == subset) {
            subsets.push(subset.to_vec());
        }
        false
    });

    subsets
}
