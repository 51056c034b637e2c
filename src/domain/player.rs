use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;

/// Место игрока за столом.
///
/// Между раздачами переживает только `stack`; карты, ставка улицы и
/// флаг фолда сбрасываются в `reset_for_new_hand`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seat {
    pub name: String,
    /// Фишки игрока (не включая уже поставленные в банк).
    pub stack: Chips,
    /// Карманные карты: 0 или ровно 2.
    pub hole_cards: Vec<Card>,
    /// Сколько фишек внесено на текущей улице.
    pub current_bet: Chips,
    pub has_folded: bool,
    /// Место без фишек к началу раздачи: не получает карт и пропускается в очереди.
    pub sitting_out: bool,
    pub is_human: bool,
}

impl Seat {
    pub fn new(name: impl Into<String>, stack: Chips, is_human: bool) -> Self {
        Self {
            name: name.into(),
            stack,
            hole_cards: Vec::new(),
            current_bet: Chips::ZERO,
            has_folded: false,
            sitting_out: false,
            is_human,
        }
    }

    pub fn bot(name: impl Into<String>, stack: Chips) -> Self {
        Self::new(name, stack, false)
    }

    pub fn human(name: impl Into<String>, stack: Chips) -> Self {
        Self::new(name, stack, true)
    }

    pub fn reset_for_new_hand(&mut self) {
        self.hole_cards.clear();
        self.current_bet = Chips::ZERO;
        self.has_folded = false;
        self.sitting_out = self.stack.is_zero();
    }

    /// Участвует в розыгрыше банка (не сфолдил и не сидит без фишек).
    pub fn is_contending(&self) -> bool {
        !self.has_folded && !self.sitting_out
    }

    /// Может делать добровольные действия: в раздаче и есть фишки.
    pub fn is_active(&self) -> bool {
        self.is_contending() && !self.stack.is_zero()
    }

    /// Оллын: в раздаче, но стек пуст.
    pub fn is_all_in(&self) -> bool {
        self.is_contending() && self.stack.is_zero()
    }

    /// Перенести из стека не более `amount` в ставку улицы.
    /// Возвращает реально внесённую сумму (стек может оказаться меньше).
    pub fn commit(&mut self, amount: Chips) -> Chips {
        let real = amount.min(self.stack);
        self.stack -= real;
        self.current_bet += real;
        real
    }

    pub fn fold(&mut self) {
        self.has_folded = true;
    }
}
