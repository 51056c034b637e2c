use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Chips, SeatIndex};

/// Банк раздачи: общий счётчик + вклад каждого места (для сайд-потов).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pot {
    pub total: Chips,
    pub contributions: HashMap<SeatIndex, Chips>,
}

impl Pot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, seat: SeatIndex, amount: Chips) {
        if amount.is_zero() {
            return;
        }
        self.total += amount;
        *self.contributions.entry(seat).or_insert(Chips::ZERO) += amount;
    }

    pub fn contribution(&self, seat: SeatIndex) -> Chips {
        self.contributions.get(&seat).copied().unwrap_or(Chips::ZERO)
    }

    pub fn reset(&mut self) {
        self.total = Chips::ZERO;
        self.contributions.clear();
    }
}

/// Поделить `amount` поровну между победителями.
///
/// `winners` должны идти в порядке мест за столом: остаток от деления
/// целиком достаётся первому из них.
pub fn split_pot(amount: Chips, winners: &[SeatIndex]) -> Vec<(SeatIndex, Chips)> {
    if winners.is_empty() {
        return Vec::new();
    }

    let n = winners.len() as u64;
    let share = Chips(amount.0 / n);
    let remainder = Chips(amount.0 % n);

    winners
        .iter()
        .enumerate()
        .map(|(i, &seat)| {
            let prize = if i == 0 { share + remainder } else { share };
            (seat, prize)
        })
        .collect()
}
