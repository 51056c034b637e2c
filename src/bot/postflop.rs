use crate::bot::Intent;
use crate::domain::Chips;
use crate::engine::{RandomSource, TableView};
use crate::eval::HandCategory;

/// Грубая оценка эквити по категории готовой руки.
pub fn equity_from_category(category: HandCategory) -> f64 {
    match category {
        HandCategory::RoyalFlush | HandCategory::StraightFlush | HandCategory::FourOfAKind => 0.99,
        HandCategory::FullHouse => 0.85,
        HandCategory::Flush => 0.75,
        HandCategory::Straight => 0.65,
        HandCategory::ThreeOfAKind => 0.55,
        HandCategory::TwoPair => 0.45,
        HandCategory::OnePair => 0.35,
        HandCategory::HighCard => 0.25,
    }
}

/// Решение на флопе, тёрне и ривере по оценке эквити.
pub fn postflop_intent<R: RandomSource>(view: &TableView<'_>, equity: f64, rng: &mut R) -> Intent {
    let bb = view.big_blind;
    let pot = view.pot;

    if view.call_amount.is_zero() {
        return if equity > 0.7 {
            Intent::Bet((bb + bb).max(pot.scale(0.8)))
        } else if equity > 0.5 {
            if rng.next_unit() < 0.7 {
                Intent::Bet(bb.scale(1.5).max(pot.scale(0.5)))
            } else {
                Intent::Check
            }
        } else if rng.next_unit() < 0.4 {
            Intent::Bet(bb.max(pot.scale(1.0 / 3.0)))
        } else {
            Intent::Check
        };
    }

    let call = view.call_amount;
    let small_raise = bb.scale(1.5).max(Chips(call.0.saturating_mul(2)));

    if equity > view.pot_odds() {
        let (raise_prob, size) = if equity > 0.8 {
            (0.6, (bb + bb).max(Chips(call.0.saturating_mul(3))))
        } else if equity > 0.5 {
            (0.4, small_raise)
        } else {
            (0.2, small_raise)
        };
        return if rng.next_unit() < raise_prob {
            Intent::RaiseBy(size)
        } else {
            Intent::Call
        };
    }

    // Шансы банка против нас: иногда доезжаем, иногда блефуем.
    if rng.next_unit() < 0.3 {
        Intent::Call
    } else if rng.next_unit() < 0.15 {
        Intent::RaiseBy(small_raise)
    } else {
        Intent::Fold
    }
}
