//! Движок безлимитного Техасского холдема.
//!
//! Слои:
//!   - `domain` – карты, колода, фишки, места, стол;
//!   - `eval` – оценка 5..7-карточных рук;
//!   - `engine` – раунды ставок, банк, оркестратор раздачи (`Game`);
//!   - `bot` – политика бота как `ActionProvider`;
//!   - `infra` – источники случайности;
//!   - `config` – конфигурация игры из JSON;
//!   - `console` (feature `cli`) – игра в терминале.

pub mod bot;
pub mod config;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod infra;

#[cfg(feature = "cli")]
pub mod console;

pub use config::{ConfigError, GameConfig, SeatConfig, SeatKind};
pub use engine::{Game, HandStatus};
