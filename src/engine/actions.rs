use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::Chips;

/// Действие игрока на его ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    /// Первая ставка на улице (когда текущей ставки ещё нет): сколько поставить.
    Bet(Chips),
    /// Повышение существующей ставки: до какой суммы за улицу.
    Raise(Chips),
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet(_) => "bet",
            Action::Raise(_) => "raise",
        }
    }

    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Bet(amount) => write!(f, "bet {amount}"),
            Action::Raise(to) => write!(f, "raise to {to}"),
            other => f.write_str(other.label()),
        }
    }
}
