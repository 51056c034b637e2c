use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::table::SeatIndex;
use crate::eval::HandScore;

/// Улица раздачи.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Street {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Street {
    /// Сколько карт открывается на борд при переходе на эту улицу.
    pub fn board_cards(self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn | Street::River => 1,
            Street::Preflop | Street::Showdown => 0,
        }
    }

    pub fn next(self) -> Street {
        match self {
            Street::Preflop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River | Street::Showdown => Street::Showdown,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Street::Preflop => "Preflop",
            Street::Flop => "Flop",
            Street::Turn => "Turn",
            Street::River => "River",
            Street::Showdown => "Showdown",
        };
        f.write_str(s)
    }
}

/// Результат конкретного места в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayerHandResult {
    pub seat: SeatIndex,
    /// Итоговая сила руки (если дошёл до шоудауна).
    pub score: Option<HandScore>,
    /// Сколько фишек получил из банка.
    pub won: Chips,
    /// Стек после раздачи.
    pub stack_after: Chips,
    /// Является ли игрок победителем (включая сплит).
    pub is_winner: bool,
}

/// Краткое описание завершённой раздачи.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandSummary {
    pub hand_number: u64,
    pub dealer: SeatIndex,
    pub street_reached: Street,
    pub board: Vec<Card>,
    pub total_pot: Chips,
    /// Дошла ли раздача до вскрытия.
    pub showdown: bool,
    pub results: Vec<PlayerHandResult>,
    /// Места, оставшиеся без фишек после этой раздачи.
    pub busted: Vec<SeatIndex>,
}

impl HandSummary {
    pub fn winners(&self) -> Vec<SeatIndex> {
        self.results
            .iter()
            .filter(|r| r.is_winner)
            .map(|r| r.seat)
            .collect()
    }
}
