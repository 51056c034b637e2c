use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::chips::Chips;
use crate::domain::player::Seat;

/// Индекс места за столом (0..seat_count-1).
pub type SeatIndex = usize;

/// Конфиг стола: блайнды и режим дележа банка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    /// Делить ли банк на сайд-поты при неравных оллынах.
    /// По умолчанию выключено: весь банк разыгрывается одним потом.
    #[serde(default)]
    pub side_pots: bool,
}

impl TableConfig {
    pub fn new(small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            side_pots: false,
        }
    }

    pub fn with_side_pots(mut self, enabled: bool) -> Self {
        self.side_pots = enabled;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.small_blind.is_zero() {
            return Err("TableConfig: small_blind = 0".into());
        }
        if self.big_blind.is_zero() {
            return Err("TableConfig: big_blind = 0".into());
        }
        if self.big_blind < self.small_blind {
            return Err(format!(
                "TableConfig: big_blind ({}) < small_blind ({})",
                self.big_blind, self.small_blind
            ));
        }
        Ok(())
    }
}

/// Состояние стола: фиксированный набор мест, борд и кнопка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub config: TableConfig,

    /// Места за столом: индекс вектора = SeatIndex. Размер не меняется.
    pub seats: Vec<Seat>,

    /// Общие карты борда (0–5 карт).
    pub board: Vec<Card>,

    pub dealer_button: SeatIndex,
}

impl Table {
    pub fn new(config: TableConfig, seats: Vec<Seat>) -> Self {
        Self {
            config,
            seats,
            board: Vec::new(),
            dealer_button: 0,
        }
    }

    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    /// Места, у которых ещё есть фишки.
    pub fn funded_seats(&self) -> Vec<SeatIndex> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.stack.is_zero())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn stacks(&self) -> Vec<Chips> {
        self.seats.iter().map(|s| s.stack).collect()
    }

    pub fn contenders(&self) -> Vec<SeatIndex> {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_contending())
            .map(|(i, _)| i)
            .collect()
    }
}
