//! Покерный движок: раунды ставок, переход улиц, банк, шоудаун.
//!
//! Высокоуровневый объект: `Game`
//! Основные операции:
//!   - `Game::play_hand` – сыграть одну раздачу целиком
//!   - `Game::play_until_over` – играть, пока фишки не останутся у одного места
//!   - `BettingRound::run` / `BettingRound::apply` – торговля на одной улице

pub mod actions;
pub mod betting;
pub mod errors;
pub mod events;
pub mod game_loop;
pub mod positions;
pub mod pot;
pub mod provider;
pub mod side_pots;
pub mod validation;

pub use actions::Action;
pub use betting::{Applied, BettingRound, RoundState};
pub use errors::{ActionError, EngineError};
pub use events::{EventSink, HandEvent, HandEventKind, HandHistory, LogSink, NullSink, Recorder, Reveal};
pub use game_loop::{Game, HandStatus};
pub use pot::{split_pot, Pot};
pub use provider::{ActionProvider, CheckCall, TableView};
pub use side_pots::SidePot;

/// Источник случайности для колоды и ботов.
/// Реализации – в infra (обёртки над `rand`); тесты подставляют свои.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное число из [0, 1).
    fn next_unit(&mut self) -> f64;
}
