// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand classification and best hand selection.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use handread_cards::for_each_subset;

use crate::{Card, Error, Rank};

/// The hand rank category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "Pair",
            HandRank::TwoPair => "Two Pair",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The value of a poker hand.
///
/// A value has a category and a list of tie-break ranks, the most significant
/// first, that depends on the category:
///
/// ```text
///   StraightFlush  [high card]
///   FourOfAKind    [quads, kicker]
///   FullHouse      [trips, pair]
///   Flush          [five ranks descending]
///   Straight       [high card]
///   ThreeOfAKind   [trips, kicker, kicker]
///   TwoPair        [high pair, low pair, kicker]
///   OnePair        [pair, kicker, kicker, kicker]
///   HighCard       [five ranks descending]
/// ```
///
/// The wheel A-2-3-4-5 is a Five high straight. Values compare by category
/// first and then by tie-break ranks, the five cards that make the hand are
/// not part of the comparison so two values are equal when the hands have the
/// same strength.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    rank: HandRank,
    kickers: Vec<Rank>,
    cards: [Card; 5],
}

impl HandValue {
    /// Classifies a 5 cards hand.
    ///
    /// The cards must be distinct.
    pub fn classify(cards: [Card; 5]) -> HandValue {
        // Count cards for each rank value.
        let mut counts = [0u8; 15];
        for c in &cards {
            counts[c.value() as usize] += 1;
        }

        // Rank groups by count and then by rank, highest first.
        let mut groups = Rank::ranks()
            .rev()
            .filter_map(|r| {
                let n = counts[r.value() as usize];
                (n > 0).then_some((n, r))
            })
            .collect::<Vec<_>>();
        groups.sort_by(|a, b| b.0.cmp(&a.0));

        let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
        let straight = straight_high(&counts);
        let ranks = groups.iter().map(|g| g.1).collect::<Vec<_>>();

        let first = groups.first().map_or(0, |g| g.0);
        let second = groups.get(1).map_or(0, |g| g.0);

        let (rank, kickers) = match (straight, is_flush) {
            (Some(high), true) => (HandRank::StraightFlush, vec![high]),
            (Some(high), false) => (HandRank::Straight, vec![high]),
            (None, true) => (HandRank::Flush, ranks),
            (None, false) => match (first, second) {
                (4, _) => (HandRank::FourOfAKind, ranks),
                (3, 2) => (HandRank::FullHouse, ranks),
                (3, _) => (HandRank::ThreeOfAKind, ranks),
                (2, 2) => (HandRank::TwoPair, ranks),
                (2, _) => (HandRank::OnePair, ranks),
                _ => (HandRank::HighCard, ranks),
            },
        };

        HandValue {
            rank,
            kickers,
            cards: display_order(cards, &counts, straight),
        }
    }

    /// Evaluates the best hand out of a pool of 5 to 7 cards.
    pub fn eval(cards: &[Card]) -> Result<HandValue, Error> {
        if !(5..=7).contains(&cards.len()) {
            return Err(Error::InvalidPoolSize(cards.len()));
        }

        for (pos, card) in cards.iter().enumerate() {
            if cards[..pos].contains(card) {
                return Err(Error::DuplicateCard(*card));
            }
        }

        let mut best: Option<HandValue> = None;
        for_each_subset(cards, 5, |hand| {
            let Ok(hand) = <[Card; 5]>::try_from(hand) else {
                return;
            };

            let value = HandValue::classify(hand);
            if best.as_ref().is_none_or(|b| value > *b) {
                best = Some(value);
            }
        });

        best.ok_or(Error::InvalidPoolSize(cards.len()))
    }

    /// Evaluates the best hand that can be made with the board and the hole cards.
    pub fn evaluate(board: &[Card], hole: &[Card]) -> Result<HandValue, Error> {
        let pool = board.iter().chain(hole).copied().collect::<Vec<_>>();
        Self::eval(&pool)
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-break ranks, most significant first.
    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// The five cards that make this hand.
    ///
    /// Cards are in display order: the largest group first, higher ranks
    /// first, and straights from the top card down.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank
            .cmp(&other.rank)
            .then_with(|| self.kickers.cmp(&other.kickers))
    }
}

/// Returns the high card of a straight if the counts make one.
fn straight_high(counts: &[u8; 15]) -> Option<Rank> {
    // Aces play low for the wheel.
    let present = |v: u8| {
        if v == 1 {
            counts[Rank::Ace.value() as usize] > 0
        } else {
            counts[v as usize] > 0
        }
    };

    (Rank::Five.value()..=Rank::Ace.value())
        .rev()
        .find(|&high| (high - 4..=high).all(present))
        .and_then(Rank::from_value)
}

fn display_order(mut cards: [Card; 5], counts: &[u8; 15], straight: Option<Rank>) -> [Card; 5] {
    cards.sort_by(|a, b| {
        let (na, nb) = (counts[a.value() as usize], counts[b.value() as usize]);
        nb.cmp(&na)
            .then_with(|| b.rank().cmp(&a.rank()))
            .then_with(|| a.suit().cmp(&b.suit()))
    });

    if straight == Some(Rank::Five) {
        cards.rotate_left(1);
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, parse_cards};
    use rand::{prelude::*, rngs::StdRng};

    fn hand(s: &str) -> [Card; 5] {
        <[Card; 5]>::try_from(parse_cards(s).unwrap()).unwrap()
    }

    fn classify(s: &str) -> HandValue {
        HandValue::classify(hand(s))
    }

    fn eval(s: &str) -> HandValue {
        HandValue::eval(&parse_cards(s).unwrap()).unwrap()
    }

    fn ranks(s: &str) -> Vec<Rank> {
        s.chars().filter_map(Rank::from_char).collect()
    }

    /// Calls `f` for each permutation of the cards.
    fn permutations(cards: &mut [Card; 5], k: usize, f: &mut impl FnMut(&[Card; 5])) {
        if k == cards.len() {
            f(cards);
            return;
        }

        for i in k..cards.len() {
            cards.swap(k, i);
            permutations(cards, k + 1, f);
            cards.swap(k, i);
        }
    }

    #[test]
    fn classify_categories() {
        let cases = [
            ("9h Th Jh Qh Kh", HandRank::StraightFlush, "K"),
            ("Ah 2h 3h 4h 5h", HandRank::StraightFlush, "5"),
            ("9h 9d 9c 9s 2h", HandRank::FourOfAKind, "92"),
            ("Kh Kd 8c 8s Kc", HandRank::FullHouse, "K8"),
            ("3c 3d 3h Ks Kd", HandRank::FullHouse, "3K"),
            ("Jh 8h 4h 2h Ah", HandRank::Flush, "AJ842"),
            ("Th 9d 8c 7s 6h", HandRank::Straight, "T"),
            ("Ac Kh Qd Js Th", HandRank::Straight, "A"),
            ("Ac 2d 3h 4s 5c", HandRank::Straight, "5"),
            ("Qh Qd Qc 7s 2h", HandRank::ThreeOfAKind, "Q72"),
            ("Jh Jd 9c 9s 7h", HandRank::TwoPair, "J97"),
            ("Kh Kd Ac 3s 2h", HandRank::OnePair, "KA32"),
            ("Kh Jd 8c 4s 2h", HandRank::HighCard, "KJ842"),
        ];

        for (cards, rank, kickers) in cases {
            let value = classify(cards);
            assert_eq!(value.rank(), rank, "{cards}");
            assert_eq!(value.kickers(), ranks(kickers), "{cards}");
        }
    }

    #[test]
    fn classify_permutation_invariant() {
        for s in [
            "Ac 2d 3h 4s 5c",
            "Kh Kd 8c 8s Kc",
            "Jh Jd 9c 9s 7h",
            "Jh 8h 4h 2h Ah",
            "Kh Jd 8c 4s 2h",
        ] {
            let expected = classify(s);
            let mut cards = hand(s);
            permutations(&mut cards, 0, &mut |cards| {
                let value = HandValue::classify(*cards);
                assert_eq!(value.rank(), expected.rank());
                assert_eq!(value.kickers(), expected.kickers());
                assert_eq!(value.cards(), expected.cards());
            });
        }
    }

    #[test]
    fn wheel_is_lowest_straight() {
        let wheel = classify("Ac 2d 3h 4s 5c");
        let six_high = classify("2c 3d 4h 5s 6c");
        assert_eq!(wheel.rank(), HandRank::Straight);
        assert_eq!(wheel.kickers(), [Rank::Five]);
        assert_eq!(six_high.kickers(), [Rank::Six]);
        assert!(wheel < six_high);

        // The ace is shown last.
        assert_eq!(wheel.cards(), &hand("5c 4s 3h 2d Ac"));

        // No wrap around straights.
        assert_eq!(classify("Qc Kd Ah 2s 3c").rank(), HandRank::HighCard);
    }

    #[test]
    fn display_order_groups_first() {
        assert_eq!(classify("8c Kh 8s Kd Kc").cards(), &hand("Kc Kd Kh 8c 8s"));
        assert_eq!(classify("2h Jd 9c Jh 9s").cards(), &hand("Jd Jh 9c 9s 2h"));
        assert_eq!(classify("6h 9d Th 7s 8c").cards(), &hand("Th 9d 8c 7s 6h"));
    }

    #[test]
    fn categories_are_strictly_ordered() {
        let hands = [
            "Ah Kd Jc 9s 7h",
            "2h 2d 3c 4s 6h",
            "2h 2d 3c 3s 4h",
            "2h 2d 2c 3s 4h",
            "Ac 2d 3h 4s 5c",
            "7h 5h 4h 3h 2h",
            "2h 2d 2c 3s 3h",
            "2h 2d 2c 2s 3h",
            "Ac 2c 3c 4c 5c",
        ];

        let values = hands.iter().map(|s| classify(s)).collect::<Vec<_>>();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1], "{:?} < {:?}", pair[0], pair[1]);
        }

        // A seven high flush beats an ace high straight.
        assert!(classify("7h 5h 4h 3h 2h") > classify("Ac Kh Qd Js Th"));
    }

    #[test]
    fn tie_breaks() {
        // Kickers decide.
        assert!(classify("Kh Kd Ac 7s 3h") > classify("Ks Kc Qc 7d 3c"));
        assert!(classify("Qh Qd 8c 8s Ah") > classify("Qs Qc 8d 8h Kd"));
        assert!(classify("9h 9d 9c 9s Ah") > classify("9h 9d 9c 9s Kh"));
        assert!(classify("Ah Kh 9h 5h 3h") > classify("Ad Kd 9d 5d 2d"));

        // Trips before pair in a full house.
        assert!(classify("7h 7d 7c Qs Qh") > classify("6h 6d 6c As Ah"));

        // Same ranks, different suits.
        assert_eq!(classify("Ah Kd 9c 5s 3h"), classify("As Kc 9d 5h 3c"));
    }

    #[test]
    fn best_hand_finds_trap_full_house() {
        // The first five cards only make a pair of nines.
        let value = eval("9c 4h Kd 2s 9d 9h Ks");
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(value.kickers(), ranks("9K"));
        assert_eq!(value.cards(), &hand("9c 9d 9h Kd Ks"));

        // Two sets make the higher trips full of the lower pair.
        let value = eval("9c 9d 9h Kd Ks Kc 2s");
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(value.kickers(), ranks("K9"));

        // Flush and straight in the same pool.
        let value = eval("8h 7h 6h Kc 2d 9c Td");
        assert_eq!(value.rank(), HandRank::Straight);
        let value = eval("8h 7h 6h Kc 2d 9h Th");
        assert_eq!(value.rank(), HandRank::StraightFlush);
        assert_eq!(value.kickers(), ranks("T"));

        // Six cards.
        let value = eval("Ah Ad Ac As Kh Qd");
        assert_eq!(value.rank(), HandRank::FourOfAKind);
        assert_eq!(value.kickers(), ranks("AK"));
    }

    #[test]
    fn best_hand_uses_best_kickers() {
        let value = eval("Ah Td 5c 3s 2h Ac Kd");
        assert_eq!(value.rank(), HandRank::OnePair);
        assert_eq!(value.kickers(), ranks("AKT5"));

        let value = eval("Kh Kd 8c 8s 3h Ac Qd");
        assert_eq!(value.rank(), HandRank::TwoPair);
        assert_eq!(value.kickers(), ranks("K8A"));

        // Three pairs play the two highest.
        let value = eval("Kh Kd 8c 8s 3h 3c 2d");
        assert_eq!(value.kickers(), ranks("K83"));
    }

    #[test]
    fn board_plays_broadway() {
        let board = parse_cards("Ah Kd Qc Js Th").unwrap();
        let mut deck = Deck::default();
        deck.remove_all(&board);

        let broadway = HandValue::eval(&board).unwrap();
        assert_eq!(broadway.rank(), HandRank::Straight);
        assert_eq!(broadway.kickers(), [Rank::Ace]);

        deck.for_each(2, |hole| {
            let value = HandValue::evaluate(&board, hole).unwrap();
            assert_eq!(value.rank(), HandRank::Straight);
            assert_eq!(value.cmp(&broadway), Ordering::Equal);
        });
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive() {
        let mut rng = StdRng::seed_from_u64(101);
        let values = (0..60)
            .map(|_| {
                let mut deck = Deck::new_and_shuffled(&mut rng);
                HandValue::eval(&deck.deal(7).unwrap()).unwrap()
            })
            .collect::<Vec<_>>();

        for a in &values {
            for b in &values {
                assert_eq!(a.cmp(b), b.cmp(a).reverse());

                for c in &values {
                    if a >= b && b >= c {
                        assert!(a >= c);
                    }
                }
            }
        }
    }

    #[test]
    fn pool_errors() {
        let cards = parse_cards("Ah Kd Qc Js Th 2c 3d 4h").unwrap();
        assert_eq!(HandValue::eval(&cards[..4]), Err(Error::InvalidPoolSize(4)));
        assert_eq!(HandValue::eval(&cards), Err(Error::InvalidPoolSize(8)));
        assert_eq!(HandValue::eval(&[]), Err(Error::InvalidPoolSize(0)));

        let board = parse_cards("Kh 7d 3c 2s 9h").unwrap();
        let hole = parse_cards("Kh Ac").unwrap();
        assert_eq!(
            HandValue::evaluate(&board, &hole),
            Err(Error::DuplicateCard(hole[0]))
        );

        // A four cards board with one card left is still a valid pool.
        let value = HandValue::evaluate(&board[..4], &hole[1..]).unwrap();
        assert_eq!(value.rank(), HandRank::HighCard);
        assert_eq!(value.kickers(), ranks("AK732"));
    }

    // This takes a while to run in debug mode as it goes through 2.6M hands.
    #[test]
    #[ignore]
    fn classify_all_five_cards_hands() {
        let mut counts = [0usize; 9];
        Deck::default().for_each(5, |cards| {
            let value = HandValue::eval(cards).unwrap();
            counts[value.rank() as usize] += 1;
        });

        assert_eq!(
            counts,
            [1_302_540, 1_098_240, 123_552, 54_912, 10_200, 5_108, 3_744, 624, 40]
        );
    }
}
