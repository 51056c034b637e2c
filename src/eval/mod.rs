//! Модуль оценки силы покерных рук (Texas Hold'em).
//!
//! Основные функции:
//!   `evaluate(cards) -> HandScore` для 5–7 карт,
//!   `evaluate_best_hand(hole, board) -> HandScore`.

pub mod evaluator;
pub mod hand_rank;
pub mod lookup_tables;

pub use evaluator::{evaluate, evaluate_best_hand, evaluate_five};
pub use hand_rank::{describe_hand, HandCategory, HandScore};
