use crate::domain::{Card, Chips, SeatIndex, Street};
use crate::engine::actions::Action;
use crate::engine::errors::EngineError;

/// Что видит место, когда его спрашивают о ходе.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableView<'a> {
    pub seat: SeatIndex,
    pub street: Street,
    pub pot: Chips,
    /// Текущая ставка улицы, до которой нужно дотянуться.
    pub highest_bet: Chips,
    /// Сколько доставить для call (0 – можно чекать).
    pub call_amount: Chips,
    /// Уже внесено этим местом на улице.
    pub current_bet: Chips,
    pub stack: Chips,
    pub big_blind: Chips,
    pub hole_cards: &'a [Card],
    pub board: &'a [Card],
    /// Сколько соперников ещё претендует на банк.
    pub opponents: usize,
}

impl TableView<'_> {
    pub fn can_check(&self) -> bool {
        self.call_amount.is_zero()
    }

    /// Максимальная сумма улицы, до которой место может поднять (оллын).
    pub fn max_raise_to(&self) -> Chips {
        self.current_bet + self.stack
    }

    /// call_amount / (pot + call_amount); 0, если доставлять нечего.
    pub fn pot_odds(&self) -> f64 {
        let denom = self.pot.0 + self.call_amount.0;
        if denom == 0 {
            0.0
        } else {
            self.call_amount.0 as f64 / denom as f64
        }
    }
}

/// Источник решений для места: человек (консоль, UI, RPC) или бот.
///
/// Раунд ставок блокируется на `act`, пока провайдер не ответит.
pub trait ActionProvider {
    fn act(&mut self, view: &TableView<'_>) -> Action;

    /// Движок отклонил действие; сразу после этого `act` будет вызван снова.
    fn rejected(&mut self, _view: &TableView<'_>, _action: Action, _error: &EngineError) {}
}

impl<P: ActionProvider + ?Sized> ActionProvider for Box<P> {
    fn act(&mut self, view: &TableView<'_>) -> Action {
        (**self).act(view)
    }

    fn rejected(&mut self, view: &TableView<'_>, action: Action, error: &EngineError) {
        (**self).rejected(view, action, error)
    }
}

/// Простейший провайдер: чек, если можно, иначе call.
#[derive(Clone, Copy, Debug, Default)]
pub struct CheckCall;

impl ActionProvider for CheckCall {
    fn act(&mut self, view: &TableView<'_>) -> Action {
        if view.can_check() {
            Action::Check
        } else {
            Action::Call
        }
    }
}
