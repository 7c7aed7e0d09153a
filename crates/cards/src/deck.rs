// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::Error;

/// A Poker card.
///
/// Cards are ordered by rank first and then by suit, parsing and formatting
/// use the two characters notation with the rank followed by the suit:
///
/// ```
/// # use handread_cards::{Card, Rank, Suit};
/// let kh = "Kh".parse::<Card>().unwrap();
/// assert_eq!(kh, Card::new(Rank::King, Suit::Hearts));
/// assert_eq!(kh.to_string(), "Kh");
/// ```
#[derive(Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a suit and rank.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card rank.
    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card rank value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidCardNotation(token.to_string());

        let mut chars = token.chars();
        let (Some(r), Some(s), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };

        let rank = Rank::from_char(r).ok_or_else(invalid)?;
        let suit = Suit::from_char(s).ok_or_else(invalid)?;
        Ok(Card::new(rank, suit))
    }
}

/// Parses a whitespace separated list of cards like `"Ah Kd 7c"`.
pub fn parse_cards(s: &str) -> Result<Vec<Card>, Error> {
    s.split_whitespace().map(str::parse).collect()
}

/// Card rank.
///
/// The discriminant is the rank value used for comparisons, aces are high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank value from 2 to 14.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().find(|r| r.value() == value)
    }

    /// Parses a rank character, case insensitive.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }

    /// The rank name, i.e. "Ace".
    pub fn name(self) -> &'static str {
        match self {
            Rank::Deuce => "Two",
            Rank::Trey => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
            Rank::Ace => "Ace",
        }
    }

    /// The plural rank name, i.e. "Sixes".
    pub fn plural(self) -> &'static str {
        match self {
            Rank::Deuce => "Twos",
            Rank::Trey => "Threes",
            Rank::Four => "Fours",
            Rank::Five => "Fives",
            Rank::Six => "Sixes",
            Rank::Seven => "Sevens",
            Rank::Eight => "Eights",
            Rank::Nine => "Nines",
            Rank::Ten => "Tens",
            Rank::Jack => "Jacks",
            Rank::Queen => "Queens",
            Rank::King => "Kings",
            Rank::Ace => "Aces",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'c',
            Suit::Diamonds => 'd',
            Suit::Hearts => 'h',
            Suit::Spades => 's',
        };

        write!(f, "{suit}")
    }
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// Parses a suit character, case insensitive.
    pub fn from_char(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            'h' => Some(Suit::Hearts),
            's' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Shuffles cards in place using a uniform Fisher-Yates shuffle.
pub fn shuffle<R: Rng + ?Sized>(cards: &mut [Card], rng: &mut R) {
    cards.shuffle(rng);
}

/// Returns the cards in `source` that are not in `to_remove`.
pub fn remove_cards(source: &[Card], to_remove: &[Card]) -> Vec<Card> {
    source
        .iter()
        .filter(|c| !to_remove.contains(c))
        .copied()
        .collect()
}

/// Returns the cards sorted by ascending rank, cards with equal rank keep
/// their relative order.
pub fn sort_by_value(cards: &[Card]) -> Vec<Card> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| c.rank());
    sorted
}

/// Calls the `f` closure for each k-cards subset of `cards`.
///
/// Subsets are generated in lexicographic order of the cards positions.
pub fn for_each_subset<F>(cards: &[Card], k: usize, mut f: F)
where
    F: FnMut(&[Card]),
{
    let n = cards.len();
    if k == 0 || k > n {
        return;
    }

    let mut idx = (0..k).collect::<Vec<_>>();
    let mut hand = idx.iter().map(|&i| cards[i]).collect::<Vec<_>>();

    loop {
        f(&hand);

        // Find the rightmost position that can still move right.
        let Some(pos) = (0..k).rev().find(|&i| idx[i] != i + n - k) else {
            return;
        };

        idx[pos] += 1;
        for i in (pos + 1)..k {
            idx[i] = idx[i - 1] + 1;
        }

        for i in pos..k {
            hand[i] = cards[idx[i]];
        }
    }
}

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the cards left in the deck.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle(&mut self.cards, rng);
    }

    /// Deals `n` cards from the top of the deck.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.cards.len() {
            return Err(Error::InsufficientDeck {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Removes all the given cards from the deck.
    pub fn remove_all(&mut self, cards: &[Card]) {
        self.cards.retain(|c| !cards.contains(c));
    }

    /// Calls the `f` closure for each k-cards hand.
    pub fn for_each<F>(&self, k: usize, f: F)
    where
        F: FnMut(&[Card]),
    {
        for_each_subset(&self.cards, k, f);
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::StdRng;

    #[test]
    fn deck_uniqueness() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while !deck.is_empty() {
            let card = deck.deal(1).unwrap()[0];
            assert!((2..=14).contains(&card.value()));
            cards.insert(card);
        }

        // Check uniquness.
        assert_eq!(cards.len(), Deck::SIZE);
    }

    #[test]
    fn deck_canonical_order() {
        let deck = Deck::default();
        let cards = deck.cards();
        assert_eq!(cards.len(), Deck::SIZE);
        assert_eq!(cards[0], Card::new(Rank::Deuce, Suit::Clubs));
        assert_eq!(cards[12], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[13], Card::new(Rank::Deuce, Suit::Diamonds));
        assert_eq!(cards[51], Card::new(Rank::Ace, Suit::Spades));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "Kd");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5s");

        let c = Card::new(Rank::Jack, Suit::Clubs);
        assert_eq!(c.to_string(), "Jc");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "Th");

        let c = Card::new(Rank::Ace, Suit::Hearts);
        assert_eq!(c.to_string(), "Ah");
    }

    #[test]
    fn card_parse() {
        assert_eq!("Kh".parse::<Card>().unwrap(), Card::new(Rank::King, Suit::Hearts));
        assert_eq!("th".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("2C".parse::<Card>().unwrap(), Card::new(Rank::Deuce, Suit::Clubs));

        for token in ["", "K", "Khh", "1h", "Kx", "10h", "hK"] {
            assert!(
                matches!(token.parse::<Card>(), Err(Error::InvalidCardNotation(t)) if t == token),
                "{token}"
            );
        }

        // All cards format and parse back.
        for card in Deck::default() {
            assert_eq!(card.to_string().parse::<Card>().unwrap(), card);
        }
    }

    #[test]
    fn cards_list_parse() {
        let cards = parse_cards("Ah  Kd 7c").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Clubs),
            ]
        );

        assert!(parse_cards("Ah Zd").is_err());
        assert!(parse_cards("").unwrap().is_empty());
    }

    #[test]
    fn card_ordering() {
        let kh = Card::new(Rank::King, Suit::Hearts);
        let kc = Card::new(Rank::King, Suit::Clubs);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        assert!(kc < kh);
        assert!(kh < ac);
        assert_eq!(Rank::from_value(14), Some(Rank::Ace));
        assert_eq!(Rank::from_value(1), None);
    }

    #[test]
    fn deck_deal() {
        let mut deck = Deck::default();
        let first = deck.deal(5).unwrap();
        assert_eq!(first, Deck::default().cards()[..5]);
        assert_eq!(deck.count(), 47);
        assert!(first.iter().all(|c| !deck.cards().contains(c)));

        let rest = deck.deal(47).unwrap();
        assert_eq!(rest.len(), 47);
        assert!(deck.is_empty());
        assert_eq!(deck.deal(0).unwrap(), vec![]);

        let mut deck = Deck::default();
        deck.deal(50).unwrap();
        assert!(matches!(
            deck.deal(3),
            Err(Error::InsufficientDeck {
                requested: 3,
                remaining: 2
            })
        ));
        // A failed deal leaves the deck untouched.
        assert_eq!(deck.count(), 2);
    }

    #[test]
    fn seeded_shuffle() {
        let d1 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        let d2 = Deck::new_and_shuffled(&mut StdRng::seed_from_u64(42));
        assert_eq!(d1.cards(), d2.cards());
        assert_ne!(d1.cards(), Deck::default().cards());

        let mut cards = d1.cards().to_vec();
        cards.sort();
        let mut canonical = Deck::default().cards().to_vec();
        canonical.sort();
        assert_eq!(cards, canonical);
    }

    #[test]
    fn shuffle_position_bias() {
        // Each card should land on the first position about 1/4 of the times.
        let mut rng = StdRng::seed_from_u64(7);
        let cards = parse_cards("2c 3c 4c 5c").unwrap();
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let mut c = cards.clone();
            shuffle(&mut c, &mut rng);
            let pos = cards.iter().position(|x| *x == c[0]).unwrap();
            counts[pos] += 1;
        }

        for count in counts {
            assert!((800..1200).contains(&count), "{counts:?}");
        }
    }

    #[test]
    fn remove_and_sort() {
        let source = parse_cards("Ah 2c Kd 2s 9h").unwrap();
        let removed = remove_cards(&source, &parse_cards("Kd 9h Qs").unwrap());
        assert_eq!(removed, parse_cards("Ah 2c 2s").unwrap());
        assert_eq!(source.len(), 5);

        let sorted = sort_by_value(&source);
        assert_eq!(sorted, parse_cards("2c 2s 9h Kd Ah").unwrap());

        let mut deck = Deck::default();
        deck.remove(source[0]);
        deck.remove_all(&source);
        assert_eq!(deck.count(), Deck::SIZE - 5);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();
        assert_eq!(deck.count(), Deck::SIZE);

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);
    }

    #[test]
    fn subsets_of_pool() {
        let pool = parse_cards("Ah Kd Qc Js Th 2c 3d").unwrap();

        let mut subsets = HashSet::default();
        for_each_subset(&pool, 5, |cards| {
            assert_eq!(cards.len(), 5);
            subsets.insert(cards.to_owned());
        });
        assert_eq!(subsets.len(), 21);

        let mut count = 0;
        for_each_subset(&pool[..6], 5, |_| count += 1);
        assert_eq!(count, 6);

        count = 0;
        for_each_subset(&pool[..4], 5, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn deck_for_each_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));

        let mut count = 0;
        deck.for_each(4, |cards| {
            assert_eq!(cards.len(), 4);
            count += 1;
        });
        assert_eq!(count, 230_300);
    }
}
