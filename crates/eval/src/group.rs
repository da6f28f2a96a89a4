// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards grouping by suit, face and consecutive ranks.
use crate::{Card, Face, Suit};

/// Groups cards by suit.
///
/// Groups are listed in order of first appearance and keep the cards in
/// input order.
pub fn group_by_suit(cards: &[Card]) -> Vec<(Suit, Vec<Card>)> {
    group_by(cards, Card::suit)
}

/// Groups cards by face.
///
/// Groups are listed in order of first appearance and keep the cards in
/// input order.
pub fn group_by_face(cards: &[Card]) -> Vec<(Face, Vec<Card>)> {
    group_by(cards, Card::face)
}

fn group_by<K, F>(cards: &[Card], key: F) -> Vec<(K, Vec<Card>)>
where
    K: PartialEq,
    F: Fn(&Card) -> K,
{
    let mut groups: Vec<(K, Vec<Card>)> = Vec::new();
    for card in cards {
        let k = key(card);
        match groups.iter_mut().find(|(g, _)| *g == k) {
            Some((_, group)) => group.push(*card),
            None => groups.push((k, vec![*card])),
        }
    }

    groups
}

/// Partitions cards into runs of consecutive ranks.
///
/// Cards are sorted by rank, ties keep the input order, and each card is
/// appended to the first run whose highest rank is one less than the card
/// rank or starts a new run. A run never has two cards with the same rank,
/// a card with a rank already in a run goes to the next run.
pub fn consecutive_runs(cards: &[Card]) -> Vec<Vec<Card>> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(Card::rank);

    let mut runs: Vec<Vec<Card>> = Vec::new();
    for card in sorted {
        let adjacent = runs.iter().position(|run| match (run.first(), run.last()) {
            (Some(lo), Some(hi)) => hi.rank() + 1 == card.rank() || card.rank() + 1 == lo.rank(),
            _ => false,
        });

        match adjacent {
            Some(idx) if runs[idx].last().is_some_and(|hi| hi.rank() < card.rank()) => {
                runs[idx].push(card)
            }
            Some(idx) => runs[idx].insert(0, card),
            None => runs.push(vec![card]),
        }
    }

    runs
}

/// Calls `f` with each `k` cards subset of `cards` and stops at the first
/// subset for which `f` returns `true`, returning that subset.
///
/// Subsets are visited in lexicographic order of the cards positions.
pub fn find_subset<F>(cards: &[Card], k: usize, mut f: F) -> Option<Vec<Card>>
where
    F: FnMut(&[Card]) -> bool,
{
    fn visit<F>(cards: &[Card], k: usize, picked: &mut Vec<Card>, f: &mut F) -> bool
    where
        F: FnMut(&[Card]) -> bool,
    {
        let needed = k - picked.len();
        if needed == 0 {
            return f(picked);
        }

        for (idx, card) in cards.iter().enumerate() {
            if cards.len() - idx < needed {
                break;
            }

            picked.push(*card);
            if visit(&cards[idx + 1..], k, picked, f) {
                return true;
            }
            picked.pop();
        }

        false
    }

    let mut picked = Vec::with_capacity(k);
    visit(cards, k, &mut picked, &mut f).then_some(picked)
}

/// Returns all the ways to pick one card from each of the `choices`.
pub fn fillings(choices: &[Vec<Card>]) -> Vec<Vec<Card>> {
    choices.iter().fold(vec![Vec::new()], |prefixes, options| {
        prefixes
            .iter()
            .flat_map(|prefix| {
                options.iter().map(move |&card| {
                    let mut filled = prefix.clone();
                    filled.push(card);
                    filled
                })
            })
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(codes: &str) -> Vec<Card> {
        codes.split_whitespace().map(|c| c.parse().unwrap()).collect()
    }

    fn codes(cards: &[Card]) -> String {
        cards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn suit_groups() {
        let groups = group_by_suit(&cards("TH JH QC QD QS QH KH AH 2S 6S"));
        let groups = groups
            .iter()
            .map(|(suit, cards)| (*suit, codes(cards)))
            .collect::<Vec<_>>();

        assert_eq!(
            groups,
            vec![
                (Suit::Hearts, "TH JH QH KH AH".to_string()),
                (Suit::Clubs, "QC".to_string()),
                (Suit::Diamonds, "QD".to_string()),
                (Suit::Spades, "QS 2S 6S".to_string()),
            ]
        );
    }

    #[test]
    fn face_groups() {
        let groups = group_by_face(&cards("2H 3D 5S 9C KD 2C 3H 4S 4D KS"));
        let groups = groups
            .iter()
            .map(|(face, cards)| (*face, codes(cards)))
            .collect::<Vec<_>>();

        assert_eq!(
            groups,
            vec![
                (Face::Deuce, "2H 2C".to_string()),
                (Face::Trey, "3D 3H".to_string()),
                (Face::Five, "5S".to_string()),
                (Face::Nine, "9C".to_string()),
                (Face::King, "KD KS".to_string()),
                (Face::Four, "4S 4D".to_string()),
            ]
        );
    }

    #[test]
    fn runs_without_duplicates() {
        let runs = consecutive_runs(&cards("AH TH JH QH KH"));
        let runs = runs.iter().map(|r| codes(r)).collect::<Vec<_>>();
        assert_eq!(runs, vec!["AH", "TH JH QH KH"]);

        let runs = consecutive_runs(&cards("6C 9C 8C 7C TC 4C"));
        let runs = runs.iter().map(|r| codes(r)).collect::<Vec<_>>();
        assert_eq!(runs, vec!["4C", "6C 7C 8C 9C TC"]);
    }

    #[test]
    fn runs_with_duplicates() {
        let runs = consecutive_runs(&cards("2H 3D 5S 9C KD 2C 3H 4S 4D KS"));
        let runs = runs.iter().map(|r| codes(r)).collect::<Vec<_>>();
        assert_eq!(runs, vec!["2H 3D 4S 5S", "2C 3H 4D", "9C", "KD", "KS"]);

        for run in consecutive_runs(&cards("AC 2D 9C 3S KD 5S 4D KS AS 4C")) {
            for pair in run.windows(2) {
                assert_eq!(pair[0].rank() + 1, pair[1].rank());
            }
        }
    }

    #[test]
    fn runs_empty() {
        assert!(consecutive_runs(&[]).is_empty());
    }

    #[test]
    fn subsets() {
        let hand = cards("2H 3H 4H 5H");

        let mut seen = Vec::new();
        let found = find_subset(&hand, 2, |s| {
            seen.push(codes(s));
            false
        });
        assert_eq!(found, None);
        assert_eq!(
            seen,
            vec!["2H 3H", "2H 4H", "2H 5H", "3H 4H", "3H 5H", "4H 5H"]
        );

        let found = find_subset(&hand, 3, |s| s.contains(&hand[3]));
        assert_eq!(found, Some(cards("2H 3H 5H")));

        assert_eq!(find_subset(&hand, 5, |_| true), None);
        assert_eq!(find_subset(&hand, 0, |_| true), Some(vec![]));
    }

    #[test]
    fn all_fillings() {
        let choices = vec![cards("2H 2S"), cards("3C"), cards("4D 4C 4H")];
        let filled = fillings(&choices);
        assert_eq!(filled.len(), 6);
        assert_eq!(filled[0], cards("2H 3C 4D"));
        assert_eq!(filled[5], cards("2S 3C 4H"));

        assert_eq!(fillings(&[]), vec![Vec::<Card>::new()]);
    }
}
