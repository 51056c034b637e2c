use serde::{Deserialize, Serialize};

use crate::bot::equity::estimate_equity;
use crate::bot::postflop::{equity_from_category, postflop_intent};
use crate::bot::preflop::preflop_intent;
use crate::engine::{Action, ActionProvider, EngineError, RandomSource, TableView};
use crate::eval::evaluate_best_hand;

/// Как бот оценивает силу руки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EquityModel {
    /// Префлоп – таблица стартовых рук, дальше – эквити по категории руки.
    #[default]
    HandCategory,
    /// Монте-Карло на всех улицах.
    MonteCarlo { simulations: u32 },
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BotConfig {
    #[serde(default)]
    pub equity_model: EquityModel,
}

impl BotConfig {
    pub fn monte_carlo(simulations: u32) -> Self {
        Self {
            equity_model: EquityModel::MonteCarlo { simulations },
        }
    }
}

/// Решение бота для текущей ситуации.
///
/// Чистая функция от `view` и источника случайности:
/// одинаковый seed даёт одинаковые решения.
pub fn decide<R: RandomSource>(view: &TableView<'_>, config: &BotConfig, rng: &mut R) -> Action {
    let intent = match config.equity_model {
        EquityModel::HandCategory => {
            if view.hole_cards.len() + view.board.len() < 5 {
                preflop_intent(view, rng)
            } else {
                let score = evaluate_best_hand(view.hole_cards, view.board);
                postflop_intent(view, equity_from_category(score.category()), rng)
            }
        }
        EquityModel::MonteCarlo { simulations } => {
            let equity = estimate_equity(
                view.hole_cards,
                view.board,
                view.opponents,
                simulations,
                rng,
            );
            postflop_intent(view, equity, rng)
        }
    };

    intent.into_action(view)
}

/// Бот за столом: `ActionProvider` со своим источником случайности.
#[derive(Clone, Debug)]
pub struct BotPolicy<R> {
    config: BotConfig,
    rng: R,
}

impl<R: RandomSource> BotPolicy<R> {
    pub fn new(config: BotConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }
}

impl<R: RandomSource> ActionProvider for BotPolicy<R> {
    fn act(&mut self, view: &TableView<'_>) -> Action {
        let action = decide(view, &self.config, &mut self.rng);
        log::debug!(
            "bot seat {} on {}: call {} pot {} -> {}",
            view.seat,
            view.street,
            view.call_amount,
            view.pot,
            action
        );
        action
    }

    fn rejected(&mut self, view: &TableView<'_>, action: Action, error: &EngineError) {
        log::warn!("bot seat {}: действие {} отклонено: {}", view.seat, action, error);
    }
}
