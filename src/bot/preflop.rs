use serde::{Deserialize, Serialize};

use crate::bot::Intent;
use crate::domain::{Card, Chips, Rank};
use crate::engine::{RandomSource, TableView};

/// Категория стартовой руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum PreflopTier {
    Weak,
    Medium,
    Good,
    Premium,
}

use Rank::*;

/// Пары рангов (старший, младший), масть не учитывается.
const PREMIUM: [(Rank, Rank); 4] = [(Ace, Ace), (King, King), (Queen, Queen), (Jack, Jack)];

const GOOD: [(Rank, Rank); 7] = [
    (Ten, Ten),
    (Nine, Nine),
    (Eight, Eight),
    (Ace, King),
    (Ace, Queen),
    (Ace, Jack),
    (King, Queen),
];

const MEDIUM: [(Rank, Rank); 6] = [
    (Seven, Seven),
    (Six, Six),
    (Five, Five),
    (Four, Four),
    (Three, Three),
    (Two, Two),
];

/// Отнести две карманные карты к категории.
pub fn classify_hole(hole: &[Card]) -> PreflopTier {
    let [a, b] = hole else {
        return PreflopTier::Weak;
    };
    let key = if a.rank >= b.rank {
        (a.rank, b.rank)
    } else {
        (b.rank, a.rank)
    };

    if PREMIUM.contains(&key) {
        PreflopTier::Premium
    } else if GOOD.contains(&key) {
        PreflopTier::Good
    } else if MEDIUM.contains(&key) {
        PreflopTier::Medium
    } else {
        PreflopTier::Weak
    }
}

/// Решение на префлопе.
pub fn preflop_intent<R: RandomSource>(view: &TableView<'_>, rng: &mut R) -> Intent {
    let tier = classify_hole(view.hole_cards);
    let bb = view.big_blind;
    let pot = view.pot;

    if view.call_amount.is_zero() {
        return match tier {
            PreflopTier::Premium => Intent::Bet((bb + bb).max(pot)),
            PreflopTier::Good if rng.next_unit() < 0.9 => Intent::Bet(bb.scale(1.5).max(pot.scale(0.5))),
            PreflopTier::Medium if rng.next_unit() < 0.6 => Intent::Bet(bb.max(pot.scale(1.0 / 3.0))),
            PreflopTier::Weak if rng.next_unit() < 0.3 => Intent::Bet(bb.max(pot.scale(0.25))),
            _ => Intent::Check,
        };
    }

    let call = view.call_amount;
    let pot_odds = view.pot_odds();

    match tier {
        PreflopTier::Premium => {
            if rng.next_unit() < 0.7 {
                Intent::RaiseBy(scale_int(call, 4))
            } else {
                Intent::Call
            }
        }
        PreflopTier::Good => {
            if pot_odds < 0.5 {
                if rng.next_unit() < 0.5 {
                    Intent::RaiseBy(scale_int(call, 3))
                } else {
                    Intent::Call
                }
            } else if rng.next_unit() < 0.5 {
                Intent::Call
            } else {
                Intent::Fold
            }
        }
        PreflopTier::Medium => {
            if pot_odds < 0.6 {
                if rng.next_unit() < 0.3 {
                    Intent::RaiseBy(scale_int(call, 2))
                } else {
                    Intent::Call
                }
            } else if rng.next_unit() < 0.4 {
                Intent::Call
            } else {
                Intent::Fold
            }
        }
        PreflopTier::Weak => {
            if pot_odds < 0.5 && rng.next_unit() < 0.2 {
                Intent::Call
            } else if rng.next_unit() < 0.15 {
                Intent::RaiseBy(scale_int(call, 2))
            } else {
                Intent::Fold
            }
        }
    }
}

fn scale_int(amount: Chips, k: u64) -> Chips {
    Chips(amount.0.saturating_mul(k))
}
