// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scenario generators.
//!
//! Random deals give realistic spots, the duel generators build the tricky
//! spots where the board plays or a single card makes the difference.
use anyhow::Result;
use log::debug;
use rand::{
    Rng, RngCore,
    seq::{IndexedRandom, SliceRandom},
};

use handread_cards::{Card, Deck, Rank, Suit};

use crate::{Duel, OutsScenario, Scenario, Verdict, outs_scenarios, teaching_scenarios};

/// Deals a board and `num_hands` hands from a shuffled deck.
pub fn random_deal<R: Rng + ?Sized>(rng: &mut R, num_hands: usize) -> Result<Scenario> {
    let mut deck = Deck::new_and_shuffled(rng);
    let board = deck.deal(5)?;
    let hands = (0..num_hands)
        .map(|_| {
            let cards = deck.deal(2)?;
            Ok([cards[0], cards[1]])
        })
        .collect::<Result<Vec<_>>>()?;

    Scenario::new(board, hands)
}

/// Returns a teaching template with its hands in random order with
/// probability `template_ratio`, a random four hands deal otherwise.
pub fn ranking_scenario<R: Rng + ?Sized>(rng: &mut R, template_ratio: f64) -> Result<Scenario> {
    if rng.random_bool(template_ratio.clamp(0.0, 1.0)) {
        if let Some(template) = teaching_scenarios().choose(rng) {
            debug!("Teaching template {:?}", template.name);
            let mut scenario = template.clone();
            scenario.hands.shuffle(rng);
            return Ok(scenario);
        }
    }

    random_deal(rng, 4)
}

/// Picks a random outs quiz scenario.
pub fn random_outs<R: Rng + ?Sized>(rng: &mut R) -> Option<&'static OutsScenario> {
    outs_scenarios().choose(rng)
}

/// Generates a duel.
///
/// With probability `generator_ratio` the generators are tried in random
/// order until one succeeds, if none succeeds or with the remaining
/// probability the duel is a random deal. Hands are swapped half of the times
/// so that the generated winner is not always the first hand.
pub fn generate_duel<R: Rng>(rng: &mut R, generator_ratio: f64) -> Result<Duel> {
    let rng: &mut dyn RngCore = rng;

    let mut duel = None;
    if rng.random_bool(generator_ratio.clamp(0.0, 1.0)) {
        let mut generators = GENERATORS.iter().collect::<Vec<_>>();
        generators.shuffle(rng);
        duel = generators.into_iter().find_map(|g| g.generate(rng));
    }

    let duel = match duel {
        Some(duel) => duel,
        None => {
            let scenario = random_deal(rng, 2)?;
            Duel::new(scenario.board, scenario.hands[0], scenario.hands[1])
        }
    };

    Ok(if rng.random_bool(0.5) {
        duel.swap()
    } else {
        duel
    })
}

type Build = fn(&mut dyn RngCore) -> Option<Duel>;

/// A duel generator with the result it should produce.
struct Generator {
    name: &'static str,
    verdict: Verdict,
    build: Build,
}

impl Generator {
    fn generate(&self, rng: &mut dyn RngCore) -> Option<Duel> {
        let duel = (self.build)(rng)?;
        match duel.winner() {
            Ok(verdict) if verdict == self.verdict => Some(duel),
            Ok(verdict) => {
                debug!("Discarded {} duel with verdict {verdict}", self.name);
                None
            }
            Err(e) => {
                debug!("Discarded {} duel: {e}", self.name);
                None
            }
        }
    }
}

static GENERATORS: &[Generator] = &[
    Generator {
        name: "straight on board tie",
        verdict: Verdict::Tie,
        build: straight_on_board_tie,
    },
    Generator {
        name: "flush on board tie",
        verdict: Verdict::Tie,
        build: flush_on_board_tie,
    },
    Generator {
        name: "quads on board tie",
        verdict: Verdict::Tie,
        build: quads_on_board_tie,
    },
    Generator {
        name: "two pair on board tie",
        verdict: Verdict::Tie,
        build: two_pair_board_tie,
    },
    Generator {
        name: "flush on board one higher",
        verdict: Verdict::Hand1,
        build: flush_on_board_one_higher,
    },
    Generator {
        name: "straight on board one higher",
        verdict: Verdict::Hand1,
        build: straight_on_board_one_higher,
    },
    Generator {
        name: "quads kicker battle",
        verdict: Verdict::Hand1,
        build: quads_kicker_battle,
    },
    Generator {
        name: "same pair kicker battle",
        verdict: Verdict::Hand1,
        build: same_pair_kicker_battle,
    },
    Generator {
        name: "full house on board one quads",
        verdict: Verdict::Hand1,
        build: full_house_on_board_one_quads,
    },
    Generator {
        name: "both make flush",
        verdict: Verdict::Hand1,
        build: both_make_flush,
    },
    Generator {
        name: "two pair vs two pair",
        verdict: Verdict::Hand1,
        build: two_pair_vs_two_pair,
    },
];

/// The shuffled deck cards not in `used` that match `filter`.
fn unused(rng: &mut dyn RngCore, used: &[Card], filter: impl Fn(&Card) -> bool) -> Vec<Card> {
    let mut cards = Deck::default()
        .into_iter()
        .filter(|c| !used.contains(c) && filter(c))
        .collect::<Vec<_>>();
    cards.shuffle(rng);
    cards
}

fn shuffled_ranks(rng: &mut dyn RngCore) -> Vec<Rank> {
    let mut ranks = Rank::ranks().collect::<Vec<_>>();
    ranks.shuffle(rng);
    ranks
}

fn shuffled_suits(rng: &mut dyn RngCore) -> Vec<Suit> {
    let mut suits = Suit::suits().collect::<Vec<_>>();
    suits.shuffle(rng);
    suits
}

fn random_suit(rng: &mut dyn RngCore) -> Option<Suit> {
    shuffled_suits(rng).first().copied()
}

/// A straight with the given high card and at most two cards of a suit.
fn straight_board(rng: &mut dyn RngCore, high: u8) -> Option<Vec<Card>> {
    let suits = shuffled_suits(rng);
    (0..5u8)
        .map(|i| {
            let rank = Rank::from_value(high - i)?;
            Some(Card::new(rank, suits[usize::from(i) % suits.len()]))
        })
        .collect()
}

fn straight_on_board_tie(rng: &mut dyn RngCore) -> Option<Duel> {
    let high = rng.random_range(6..=10u8);
    let board = straight_board(rng, high)?;

    // No card that extends the straight.
    let rest = unused(rng, &board, |c| c.value() != high + 1);
    let &[a, b, c, d, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [a, b], [c, d]))
}

fn flush_on_board_tie(rng: &mut dyn RngCore) -> Option<Duel> {
    let suit = random_suit(rng)?;
    let mut board = unused(rng, &[], |c| c.suit() == suit);
    board.truncate(5);

    let rest = unused(rng, &board, |c| c.suit() != suit);
    let &[a, b, c, d, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [a, b], [c, d]))
}

fn quads_on_board_tie(rng: &mut dyn RngCore) -> Option<Duel> {
    let quads = *shuffled_ranks(rng).first()?;
    let kicker = if quads == Rank::Ace {
        Rank::King
    } else {
        Rank::Ace
    };

    let mut board = Suit::suits()
        .map(|s| Card::new(quads, s))
        .collect::<Vec<_>>();
    board.push(Card::new(kicker, random_suit(rng)?));

    let rest = unused(rng, &board, |_| true);
    let &[a, b, c, d, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [a, b], [c, d]))
}

fn two_pair_board_tie(rng: &mut dyn RngCore) -> Option<Duel> {
    let mut ranks = shuffled_ranks(rng);
    ranks.truncate(3);
    ranks.sort();
    let &[low, high, kicker] = ranks.as_slice() else {
        return None;
    };

    let &[s0, s1, s2, s3] = shuffled_suits(rng).as_slice() else {
        return None;
    };

    let board = vec![
        Card::new(high, s0),
        Card::new(high, s1),
        Card::new(low, s2),
        Card::new(low, s3),
        Card::new(kicker, random_suit(rng)?),
    ];

    // Hole cards below the kicker that don't pair.
    let mut seen = Vec::new();
    let rest = unused(rng, &board, |c| {
        c.rank() < kicker && c.rank() != low && c.rank() != high
    })
    .into_iter()
    .filter(|c| {
        let fresh = !seen.contains(&c.rank());
        seen.push(c.rank());
        fresh
    })
    .collect::<Vec<_>>();

    let &[a, b, c, d, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [a, b], [c, d]))
}

fn flush_on_board_one_higher(rng: &mut dyn RngCore) -> Option<Duel> {
    let suit = random_suit(rng)?;
    let mut suited = unused(rng, &[], |c| c.suit() == suit);
    suited.truncate(6);
    suited.sort();

    let top = suited.pop()?;
    let board = suited;

    let mut used = board.clone();
    used.push(top);
    let rest = unused(rng, &used, |c| c.suit() != suit);
    let &[a, b, c, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [top, a], [b, c]))
}

fn straight_on_board_one_higher(rng: &mut dyn RngCore) -> Option<Duel> {
    let high = rng.random_range(6..=12u8);
    let board = straight_board(rng, high)?;

    let top = *unused(rng, &board, |c| c.value() == high + 1).first()?;
    let rest = unused(rng, &board, |c| c.value() != high + 1);
    let &[a, b, c, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [top, a], [b, c]))
}

fn quads_kicker_battle(rng: &mut dyn RngCore) -> Option<Duel> {
    let quads = *shuffled_ranks(rng).first()?;
    let mut board = Suit::suits()
        .map(|s| Card::new(quads, s))
        .collect::<Vec<_>>();

    // A board kicker with higher and lower cards left.
    let others = unused(rng, &board, |_| true);
    let top = others.iter().map(|c| c.rank()).max()?;
    let bottom = others.iter().map(|c| c.rank()).min()?;
    let kicker = *others
        .iter()
        .find(|c| c.rank() != top && c.rank() != bottom)?;
    let higher = others
        .iter()
        .filter(|c| c.rank() > kicker.rank())
        .copied()
        .collect::<Vec<_>>();
    let lower = others
        .iter()
        .filter(|c| c.rank() < kicker.rank())
        .copied()
        .collect::<Vec<_>>();

    let (Some(&high), &[a, b, c, ..]) = (higher.first(), lower.as_slice()) else {
        return None;
    };

    board.push(kicker);
    Some(Duel::new(board, [high, a], [b, c]))
}

fn same_pair_kicker_battle(rng: &mut dyn RngCore) -> Option<Duel> {
    let pair = *shuffled_ranks(rng).first()?;
    let paired = unused(rng, &[], |c| c.rank() == pair);
    let &[p0, p1, p2, ..] = paired.as_slice() else {
        return None;
    };

    let others = unused(rng, &paired, |_| true);
    let (board, rest) = others.split_at_checked(4)?;
    let mut board = board.to_vec();
    board.push(p0);

    let high = *rest.iter().max()?;
    let low = *rest.iter().min()?;

    Some(Duel::new(board, [p1, high], [p2, low]))
}

fn full_house_on_board_one_quads(rng: &mut dyn RngCore) -> Option<Duel> {
    let &[trips, pair, ..] = shuffled_ranks(rng).as_slice() else {
        return None;
    };
    let &[s0, s1, s2, s3] = shuffled_suits(rng).as_slice() else {
        return None;
    };
    let &[q0, q1, ..] = shuffled_suits(rng).as_slice() else {
        return None;
    };

    let board = vec![
        Card::new(trips, s0),
        Card::new(trips, s1),
        Card::new(trips, s2),
        Card::new(pair, q0),
        Card::new(pair, q1),
    ];

    let rest = unused(rng, &board, |c| c.rank() != trips && c.rank() != pair);
    let &[a, b, c, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [Card::new(trips, s3), a], [b, c]))
}

fn both_make_flush(rng: &mut dyn RngCore) -> Option<Duel> {
    let suit = random_suit(rng)?;
    let mut suited = unused(rng, &[], |c| c.suit() == suit);
    suited.truncate(7);
    suited.sort_by(|a, b| b.cmp(a));

    let &[h0, h1, h2, h3, b0, b1, b2] = suited.as_slice() else {
        return None;
    };

    let rest = unused(rng, &[], |c| c.suit() != suit);
    let &[x, y, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(vec![b0, b1, b2, x, y], [h0, h1], [h2, h3]))
}

fn two_pair_vs_two_pair(rng: &mut dyn RngCore) -> Option<Duel> {
    let mut ranks = shuffled_ranks(rng);
    ranks.truncate(4);
    let &[paired, a, b, c] = ranks.as_slice() else {
        return None;
    };
    let mut singles = [a, b, c];
    singles.sort();
    let [low, mid, high] = singles;

    let mut of_rank = |rank: Rank| unused(rng, &[], |c| c.rank() == rank);
    let (pairs, highs, mids, lows) = (of_rank(paired), of_rank(high), of_rank(mid), of_rank(low));

    let (&[p0, p1, ..], &[h0, h1, ..], &[m0, ..], &[l0, l1, ..]) = (
        pairs.as_slice(),
        highs.as_slice(),
        mids.as_slice(),
        lows.as_slice(),
    ) else {
        return None;
    };

    let board = vec![p0, p1, h0, m0, l0];
    let rest = unused(rng, &[p0, p1, h0, m0, l0, h1, l1], |_| true);
    let &[x, y, ..] = rest.as_slice() else {
        return None;
    };

    Some(Duel::new(board, [h1, x], [l1, y]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::find_duplicate;
    use rand::{SeedableRng, rngs::StdRng};

    fn check_cards(duel: &Duel) {
        assert_eq!(duel.board.len(), 5);
        let cards = duel.board.iter().chain(&duel.hand1).chain(&duel.hand2);
        assert_eq!(find_duplicate(cards), None, "{duel:?}");
    }

    #[test]
    fn random_deals() {
        let mut rng = StdRng::seed_from_u64(7);
        let scenario = random_deal(&mut rng, 4).unwrap();
        assert_eq!(scenario.board.len(), 5);
        assert_eq!(scenario.hands.len(), 4);
        assert!(scenario.name.is_none());

        let cards = scenario.board.iter().chain(scenario.hands.iter().flatten());
        assert_eq!(find_duplicate(cards), None);

        // 5 + 2 * 23 cards fit in the deck, 24 hands don't.
        assert!(random_deal(&mut rng, 23).is_ok());
        assert!(random_deal(&mut rng, 24).is_err());
    }

    #[test]
    fn seeded_deals_repeat() {
        let a = random_deal(&mut StdRng::seed_from_u64(42), 4).unwrap();
        let b = random_deal(&mut StdRng::seed_from_u64(42), 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ranking_scenarios() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let scenario = ranking_scenario(&mut rng, 1.0).unwrap();
            assert!(scenario.name.is_some());
            assert_eq!(scenario.hands.len(), 4);

            let scenario = ranking_scenario(&mut rng, 0.0).unwrap();
            assert!(scenario.name.is_none());
            assert_eq!(scenario.hands.len(), 4);
        }
    }

    #[test]
    fn shuffled_templates() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut reordered = 0;
        for _ in 0..20 {
            let scenario = ranking_scenario(&mut rng, 1.0).unwrap();
            let template = teaching_scenarios()
                .iter()
                .find(|t| t.name == scenario.name)
                .unwrap();
            assert_eq!(scenario.board, template.board);

            let mut hands = scenario.hands.clone();
            let mut expected = template.hands.clone();
            hands.sort();
            expected.sort();
            assert_eq!(hands, expected);

            if scenario.hands != template.hands {
                reordered += 1;
            }
        }

        assert!(reordered > 0);
    }

    #[test]
    fn random_outs_scenarios() {
        let mut rng = StdRng::seed_from_u64(3);
        let scenario = random_outs(&mut rng).unwrap();
        assert_eq!(scenario.board.len(), 4);
    }

    #[test]
    fn generators_verdicts() {
        for generator in GENERATORS {
            let mut generated = 0;
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                if let Some(duel) = generator.generate(&mut rng) {
                    check_cards(&duel);
                    assert_eq!(duel.winner().unwrap(), generator.verdict, "{duel:?}");
                    generated += 1;
                }
            }

            assert!(generated > 0, "{} never succeeds", generator.name);
        }
    }

    #[test]
    fn exact_generators() {
        // These generators build the verdict by construction.
        let exact = [
            "straight on board tie",
            "flush on board tie",
            "quads on board tie",
            "straight on board one higher",
            "quads kicker battle",
            "full house on board one quads",
        ];

        for generator in GENERATORS.iter().filter(|g| exact.contains(&g.name)) {
            for seed in 0..50 {
                let mut rng = StdRng::seed_from_u64(seed);
                let duel = (generator.build)(&mut rng).unwrap();
                check_cards(&duel);
                assert_eq!(duel.winner().unwrap(), generator.verdict, "{duel:?}");
            }
        }
    }

    #[test]
    fn generated_duels() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut verdicts = Vec::new();
        for _ in 0..100 {
            let duel = generate_duel(&mut rng, 1.0).unwrap();
            check_cards(&duel);
            verdicts.push(duel.winner().unwrap());

            let duel = generate_duel(&mut rng, 0.0).unwrap();
            check_cards(&duel);
        }

        // Swapping produces both winners.
        assert!(verdicts.contains(&Verdict::Hand1));
        assert!(verdicts.contains(&Verdict::Hand2));
        assert!(verdicts.contains(&Verdict::Tie));
    }
}
