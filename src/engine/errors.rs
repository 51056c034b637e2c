use thiserror::Error;

use crate::domain::{Chips, DeckExhausted, SeatIndex};
use crate::engine::actions::Action;

/// Почему действие нельзя применить в текущем состоянии раунда.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    #[error("сейчас не ход этого места (ходит {expected:?})")]
    NotSeatsTurn { expected: Option<SeatIndex> },

    #[error("место не может действовать (сфолдил, оллын или без фишек)")]
    SeatCannotAct,

    #[error("невозможно выполнить check – нужно доставить {owed}")]
    CannotCheck { owed: Chips },

    #[error("невозможно выполнить call – нет ставки для уравнивания")]
    NothingToCall,

    #[error("bet невозможен – на улице уже есть ставка {highest}, нужен raise")]
    BetAlreadyMade { highest: Chips },

    #[error("raise невозможен – ставки ещё нет, нужен bet")]
    NoBetToRaise,

    #[error("рейз до {to} не выше текущей ставки {highest}")]
    RaiseTooSmall { to: Chips, highest: Chips },

    #[error("размер ставки должен быть больше нуля")]
    ZeroAmount,
}

/// Ошибки движка покера.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Недопустимое действие {action} для места {seat}: {reason}")]
    InvalidAction {
        seat: SeatIndex,
        action: Action,
        reason: ActionError,
    },

    #[error(transparent)]
    DeckExhausted(#[from] DeckExhausted),

    #[error("Недостаточно игроков с фишками для раздачи: {funded}")]
    DegenerateTable { funded: usize },

    #[error("Место {0} не существует за столом")]
    InvalidSeat(SeatIndex),

    #[error("Число провайдеров действий ({providers}) не совпадает с числом мест ({seats})")]
    ProviderMismatch { seats: usize, providers: usize },

    #[error("Некорректная конфигурация стола: {0}")]
    InvalidConfig(String),

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}
