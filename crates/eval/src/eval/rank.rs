// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands comparison and ranking.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Card, Error, HandValue};

/// Compares two hand values, a greater value is a stronger hand.
pub fn compare_hands(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

/// A hand ranked against a board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedHand {
    /// The hand position in the ranked hands list.
    pub index: usize,
    /// The hand hole cards.
    pub hole: [Card; 2],
    /// The best hand value with the board.
    pub value: HandValue,
    /// The hand rank, 1 for the strongest hands.
    pub rank: usize,
}

/// Ranks hands against a board, strongest first.
///
/// Hands with the same value share the same rank and the next hand rank is
/// its position in the list, so that three hands tied for first are followed
/// by a hand with rank 4. Tied hands keep their original order.
pub fn rank_hands(board: &[Card], hands: &[[Card; 2]]) -> Result<Vec<RankedHand>, Error> {
    let mut ranked = hands
        .iter()
        .enumerate()
        .map(|(index, hole)| {
            Ok(RankedHand {
                index,
                hole: *hole,
                value: HandValue::evaluate(board, hole)?,
                rank: 0,
            })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    ranked.sort_by(|a, b| b.value.cmp(&a.value));

    for pos in 0..ranked.len() {
        ranked[pos].rank = if pos > 0 && ranked[pos].value == ranked[pos - 1].value {
            ranked[pos - 1].rank
        } else {
            pos + 1
        };
    }

    Ok(ranked)
}

/// Returns the ranks in the original hands order.
pub fn ranks_by_index(ranked: &[RankedHand]) -> Vec<usize> {
    let mut ranks = vec![0; ranked.len()];
    for r in ranked {
        if let Some(rank) = ranks.get_mut(r.index) {
            *rank = r.rank;
        }
    }

    ranks
}

/// Checks a strongest first order of hand indices.
///
/// The order is valid if each hand is not stronger than the hand that precedes
/// it, tied hands can appear in any order.
pub fn is_valid_order(ranked: &[RankedHand], picks: &[usize]) -> bool {
    let ranks = ranks_by_index(ranked);
    let Some(picked) = picks
        .iter()
        .map(|&idx| ranks.get(idx).copied())
        .collect::<Option<Vec<_>>>()
    else {
        return false;
    };

    picked.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_cards;

    fn parse_hands(s: &[&str]) -> Vec<[Card; 2]> {
        s.iter()
            .map(|h| <[Card; 2]>::try_from(parse_cards(h).unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn competition_ranking() {
        let board = parse_cards("Kh Qd 7c 4s 2h").unwrap();
        let hands = parse_hands(&["9c 9d", "Ks Jc", "Kc Jd", "6c 5d"]);

        let ranked = rank_hands(&board, &hands).unwrap();
        assert_eq!(ranks_by_index(&ranked), [3, 1, 1, 4]);

        // Strongest first, ties in original order.
        let order = ranked.iter().map(|r| r.index).collect::<Vec<_>>();
        assert_eq!(order, [1, 2, 0, 3]);
        assert_eq!(ranked[0].hole, hands[1]);
    }

    #[test]
    fn three_way_tie_skips_ranks() {
        let board = parse_cards("Ah Ad Ac As Kh").unwrap();
        let hands = parse_hands(&["Qc Jd", "Th 9s", "8d 7c", "6h 5d"]);

        let ranked = rank_hands(&board, &hands).unwrap();
        assert!(ranked.iter().all(|r| r.rank == 1));

        let board = parse_cards("9h 8d 7c 6s 2h").unwrap();
        let hands = parse_hands(&["Tc Ac", "Th Kd", "Ts 5c", "5d 4h"]);

        let ranked = rank_hands(&board, &hands).unwrap();
        assert_eq!(ranks_by_index(&ranked), [1, 1, 1, 4]);
    }

    #[test]
    fn teaching_order() {
        let board = parse_cards("5h 4d 3c 2s Kh").unwrap();
        let hands = parse_hands(&["7c 6h", "6d Ah", "Ac Qd", "Kd Qs"]);

        let ranked = rank_hands(&board, &hands).unwrap();
        assert_eq!(ranks_by_index(&ranked), [1, 2, 3, 4]);
        assert!(is_valid_order(&ranked, &[0, 1, 2, 3]));
        assert!(!is_valid_order(&ranked, &[1, 0, 2, 3]));
        assert!(!is_valid_order(&ranked, &[0, 1, 2, 9]));
    }

    #[test]
    fn tied_hands_are_interchangeable() {
        let board = parse_cards("Kh Qd 7c 4s 2h").unwrap();
        let hands = parse_hands(&["9c 9d", "Ks Jc", "Kc Jd", "6c 5d"]);

        let ranked = rank_hands(&board, &hands).unwrap();
        assert!(is_valid_order(&ranked, &[1, 2, 0, 3]));
        assert!(is_valid_order(&ranked, &[2, 1, 0, 3]));
        assert!(!is_valid_order(&ranked, &[0, 1, 2, 3]));

        // Partial orders are checked too.
        assert!(is_valid_order(&ranked, &[2, 0]));
        assert!(is_valid_order(&ranked, &[]));
    }

    #[test]
    fn compare_is_antisymmetric() {
        let board = parse_cards("Jh 8h 4h 2h Kc").unwrap();
        let a = HandValue::evaluate(&board, &parse_cards("Ah 3c").unwrap()).unwrap();
        let b = HandValue::evaluate(&board, &parse_cards("Kh 5d").unwrap()).unwrap();
        let c = HandValue::evaluate(&board, &parse_cards("Kd Ks").unwrap()).unwrap();

        assert_eq!(compare_hands(&a, &b), Ordering::Greater);
        assert_eq!(compare_hands(&b, &a), Ordering::Less);
        assert_eq!(compare_hands(&a, &a), Ordering::Equal);
        assert_eq!(compare_hands(&b, &c), Ordering::Greater);
        assert_eq!(compare_hands(&a, &c), Ordering::Greater);
    }

    #[test]
    fn ranking_errors() {
        let board = parse_cards("Kh Qd 7c 4s 2h").unwrap();
        let hands = parse_hands(&["9c 9d", "Kh Jc"]);
        assert!(matches!(
            rank_hands(&board, &hands),
            Err(Error::DuplicateCard(c)) if c.to_string() == "Kh"
        ));

        assert!(matches!(
            rank_hands(&board[..2], &hands[..1]),
            Err(Error::InvalidPoolSize(4))
        ));

        assert!(rank_hands(&board, &[]).unwrap().is_empty());
    }
}
