use dialoguer::{Input, Select};

use crate::domain::{Card, Chips};
use crate::engine::{Action, ActionProvider, EngineError, TableView};

/// Человек за терминалом: выбор действия через `dialoguer`.
#[derive(Clone, Debug, Default)]
pub struct ConsolePlayer {
    name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Choice {
    Fold,
    Check,
    Call,
    Bet,
    Raise,
}

impl Choice {
    fn label(self, view: &TableView<'_>) -> String {
        match self {
            Choice::Fold => "Fold".to_string(),
            Choice::Check => "Check".to_string(),
            Choice::Call => format!("Call {}", view.call_amount.min(view.stack)),
            Choice::Bet => "Bet".to_string(),
            Choice::Raise => "Raise to".to_string(),
        }
    }
}

impl ConsolePlayer {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    fn choices(view: &TableView<'_>) -> Vec<Choice> {
        let mut choices = Vec::with_capacity(3);
        if view.can_check() {
            choices.push(Choice::Check);
        } else {
            choices.push(Choice::Fold);
            choices.push(Choice::Call);
        }
        if view.highest_bet.is_zero() {
            choices.push(Choice::Bet);
        } else if view.max_raise_to() > view.highest_bet {
            choices.push(Choice::Raise);
        }
        choices
    }

    fn ask_amount(prompt: &str, min: Chips, max: Chips) -> Option<Chips> {
        let answer = Input::<u64>::new()
            .with_prompt(format!("{prompt} ({min}..={max})"))
            .validate_with(move |value: &u64| -> Result<(), String> {
                if *value < min.0 {
                    Err(format!("Минимум {min}"))
                } else if *value > max.0 {
                    Err(format!("Максимум {max}"))
                } else {
                    Ok(())
                }
            })
            .interact_text();

        match answer {
            Ok(value) => Some(Chips(value)),
            Err(err) => {
                log::error!("ввод суммы не удался: {err}");
                None
            }
        }
    }

    fn safe_default(view: &TableView<'_>) -> Action {
        if view.can_check() {
            Action::Check
        } else {
            Action::Fold
        }
    }
}

fn show_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "-".to_string();
    }
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

impl ActionProvider for ConsolePlayer {
    fn act(&mut self, view: &TableView<'_>) -> Action {
        println!();
        println!(
            "{} | {} | борд: {} | банк: {} | стек: {} | к оплате: {}",
            self.name,
            view.street,
            show_cards(view.board),
            view.pot,
            view.stack,
            view.call_amount
        );

        let choices = Self::choices(view);
        let labels: Vec<String> = choices.iter().map(|c| c.label(view)).collect();

        let selection = Select::new()
            .with_prompt(format!("Ваши карты {}", show_cards(view.hole_cards)))
            .items(&labels)
            .default(0)
            .interact();

        let choice = match selection {
            Ok(index) => choices[index],
            Err(err) => {
                log::error!("выбор действия не удался: {err}");
                return Self::safe_default(view);
            }
        };

        match choice {
            Choice::Fold => Action::Fold,
            Choice::Check => Action::Check,
            Choice::Call => Action::Call,
            Choice::Bet => {
                let min = view.big_blind.min(view.stack);
                Self::ask_amount("Ставка", min, view.stack)
                    .map_or_else(|| Self::safe_default(view), Action::Bet)
            }
            Choice::Raise => {
                let min = view.highest_bet + Chips(1);
                Self::ask_amount("Повысить до", min, view.max_raise_to())
                    .map_or_else(|| Self::safe_default(view), Action::Raise)
            }
        }
    }

    fn rejected(&mut self, _view: &TableView<'_>, action: Action, error: &EngineError) {
        println!("Действие {action} не принято: {error}");
    }
}
