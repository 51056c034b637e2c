//! Бот: решение о ходе по силе руки и шансам банка.
//!
//! Префлоп – таблица категорий карманных карт,
//! постфлоп – оценка эквити по категории руки (или Монте-Карло).
//! Вся случайность идёт через `RandomSource`, так что бот
//! детерминирован при фиксированном seed.

pub mod equity;
pub mod policy;
pub mod postflop;
pub mod preflop;

use crate::domain::Chips;
use crate::engine::{Action, TableView};

pub use equity::estimate_equity;
pub use policy::{decide, BotConfig, BotPolicy, EquityModel};
pub use postflop::equity_from_category;
pub use preflop::{classify_hole, PreflopTier};

/// Намерение бота до приведения к допустимому в текущем раунде действию.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Fold,
    Check,
    Call,
    /// Поставить столько (или повысить на столько, если ставка уже есть).
    Bet(Chips),
    /// Повысить текущую ставку на столько.
    RaiseBy(Chips),
}

impl Intent {
    /// Превратить намерение в действие, которое движок примет:
    /// размеры обрезаются по стеку, bet при существующей ставке
    /// становится raise, fold при бесплатном ходе – check.
    pub fn into_action(self, view: &TableView<'_>) -> Action {
        let passive = if view.can_check() {
            Action::Check
        } else {
            Action::Call
        };

        match self {
            Intent::Fold if view.can_check() => Action::Check,
            Intent::Fold => Action::Fold,
            Intent::Check | Intent::Call => passive,
            Intent::Bet(size) | Intent::RaiseBy(size) if size.is_zero() => passive,
            Intent::Bet(size) | Intent::RaiseBy(size) if view.highest_bet.is_zero() => {
                Action::Bet(size.min(view.stack))
            }
            Intent::Bet(size) | Intent::RaiseBy(size) => {
                let max_to = view.max_raise_to();
                if max_to <= view.highest_bet {
                    // Фишек хватает только на call.
                    passive
                } else {
                    Action::Raise((view.highest_bet + size).min(max_to))
                }
            }
        }
    }
}
