use crate::domain::{Chips, Seat};
use crate::engine::actions::Action;
use crate::engine::errors::ActionError;

/// Проверка, может ли место выполнить это действие при текущей ставке улицы.
///
/// Нехватка фишек ошибкой не считается: call/bet/raise потом
/// обрезаются до оллына.
pub fn validate_action(seat: &Seat, action: &Action, highest_bet: Chips) -> Result<(), ActionError> {
    if !seat.is_active() {
        return Err(ActionError::SeatCannotAct);
    }

    let to_call = diff_to_call(seat, highest_bet);

    match action {
        Action::Fold => Ok(()),

        Action::Check => {
            if to_call.is_zero() {
                Ok(())
            } else {
                Err(ActionError::CannotCheck { owed: to_call })
            }
        }

        Action::Call => {
            if to_call.is_zero() {
                Err(ActionError::NothingToCall)
            } else {
                Ok(())
            }
        }

        Action::Bet(amount) => {
            if !highest_bet.is_zero() {
                return Err(ActionError::BetAlreadyMade {
                    highest: highest_bet,
                });
            }
            if amount.is_zero() {
                return Err(ActionError::ZeroAmount);
            }
            Ok(())
        }

        Action::Raise(total_bet) => {
            if highest_bet.is_zero() {
                // Когда нет ставки – это bet, а не raise.
                return Err(ActionError::NoBetToRaise);
            }
            if *total_bet <= highest_bet {
                return Err(ActionError::RaiseTooSmall {
                    to: *total_bet,
                    highest: highest_bet,
                });
            }
            Ok(())
        }
    }
}

/// Сколько фишек нужно добавить месту, чтобы уравнять текущую ставку.
pub fn diff_to_call(seat: &Seat, highest_bet: Chips) -> Chips {
    highest_bet.saturating_sub(seat.current_bet)
}
