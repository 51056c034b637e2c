//! Конфигурация стола и игроков, загружаемая из JSON.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bot::{BotConfig, BotPolicy};
use crate::domain::{Chips, Seat, SeatIndex, TableConfig};
use crate::engine::{ActionProvider, EngineError, Game, RandomSource};
use crate::infra::DeterministicRng;

pub const MIN_SEATS: usize = 2;
pub const MAX_SEATS: usize = 9;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SeatKind {
    Human,
    #[default]
    Bot,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeatConfig {
    pub name: String,
    pub stack: Chips,
    #[serde(default)]
    pub kind: SeatKind,
}

impl SeatConfig {
    pub fn bot(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            kind: SeatKind::Bot,
        }
    }

    pub fn human(name: impl Into<String>, stack: Chips) -> Self {
        Self {
            name: name.into(),
            stack,
            kind: SeatKind::Human,
        }
    }
}

/// Полная конфигурация игры.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct GameConfig {
    pub small_blind: Chips,
    pub big_blind: Chips,
    #[serde(default)]
    pub side_pots: bool,
    #[serde(default)]
    pub dealer_button: SeatIndex,
    /// Seed для RNG ботов; без него берётся случайный.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub bot: BotConfig,
    pub seats: Vec<SeatConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось прочитать конфиг {0}: {1}")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Некорректный JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Число мест {0} вне диапазона {MIN_SEATS}..={MAX_SEATS}")]
    SeatCount(usize),

    #[error("У места {seat} ({name}) нулевой стек")]
    EmptyStack { seat: SeatIndex, name: String },

    #[error("Некорректные блайнды: {0}")]
    Blinds(String),

    #[error("Баттон {dealer} вне стола из {seats} мест")]
    DealerOutOfRange { dealer: SeatIndex, seats: usize },

    #[error(transparent)]
    Engine(#[from] EngineError),
}

impl GameConfig {
    /// Только боты с одинаковыми стеками.
    pub fn all_bots(count: usize, stack: Chips, small_blind: Chips, big_blind: Chips) -> Self {
        Self {
            small_blind,
            big_blind,
            side_pots: false,
            dealer_button: 0,
            seed: None,
            bot: BotConfig::default(),
            seats: (0..count)
                .map(|i| SeatConfig::bot(format!("Bot {}", i + 1), stack))
                .collect(),
        }
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let count = self.seats.len();
        if !(MIN_SEATS..=MAX_SEATS).contains(&count) {
            return Err(ConfigError::SeatCount(count));
        }
        if let Some((seat, s)) = self.seats.iter().enumerate().find(|(_, s)| s.stack.is_zero()) {
            return Err(ConfigError::EmptyStack {
                seat,
                name: s.name.clone(),
            });
        }
        self.table_config().validate().map_err(ConfigError::Blinds)?;
        if self.dealer_button >= count {
            return Err(ConfigError::DealerOutOfRange {
                dealer: self.dealer_button,
                seats: count,
            });
        }
        Ok(())
    }

    pub fn table_config(&self) -> TableConfig {
        TableConfig::new(self.small_blind, self.big_blind).with_side_pots(self.side_pots)
    }
}

impl<R: RandomSource> Game<R> {
    /// Собрать игру по конфигурации.
    ///
    /// Боты получают `BotPolicy` с собственным детерминированным RNG,
    /// выведенным из `seed`; провайдеры людей создаёт `make_human`.
    pub fn from_config<F>(config: &GameConfig, rng: R, mut make_human: F) -> Result<Self, ConfigError>
    where
        F: FnMut(SeatIndex, &SeatConfig) -> Box<dyn ActionProvider>,
    {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(DeterministicRng::random_seed);

        let mut seats = Vec::with_capacity(config.seats.len());
        let mut providers: Vec<Box<dyn ActionProvider>> = Vec::with_capacity(config.seats.len());

        for (index, seat) in config.seats.iter().enumerate() {
            match seat.kind {
                SeatKind::Human => {
                    seats.push(Seat::human(seat.name.clone(), seat.stack));
                    providers.push(make_human(index, seat));
                }
                SeatKind::Bot => {
                    seats.push(Seat::bot(seat.name.clone(), seat.stack));
                    let rng = DeterministicRng::derive(seed, index as u64);
                    providers.push(Box::new(BotPolicy::new(config.bot, rng)));
                }
            }
        }

        let game = Game::new(config.table_config(), seats, providers, rng)?
            .with_dealer(config.dealer_button)?;
        Ok(game)
    }
}
