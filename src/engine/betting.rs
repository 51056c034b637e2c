use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, Seat, SeatIndex, Street};
use crate::engine::actions::Action;
use crate::engine::errors::{ActionError, EngineError};
use crate::engine::events::{HandEventKind, Recorder};
use crate::engine::positions::{collect_seats_from, next_active_seat};
use crate::engine::pot::Pot;
use crate::engine::provider::{ActionProvider, TableView};
use crate::engine::validation::{diff_to_call, validate_action};

/// Сколько раз подряд провайдер может прислать недопустимое действие,
/// прежде чем движок сам сделает check/fold за него.
pub const MAX_INVALID_ATTEMPTS: usize = 3;

/// Состояние раунда ставок.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundState {
    /// Торговля идёт: `pending` – кто ещё должен походить, в порядке очереди.
    Open {
        highest_bet: Chips,
        pending: Vec<SeatIndex>,
    },
    /// Все активные походили после последнего повышения и уравняли ставку.
    Closed,
    /// Остался один претендент на банк.
    Uncontested { winner: SeatIndex },
    /// Ставить больше некому: борд докладывается без торговли.
    AllIn,
}

impl RoundState {
    pub fn is_open(&self) -> bool {
        matches!(self, RoundState::Open { .. })
    }
}

/// Результат применения одного действия.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Applied {
    pub seat: SeatIndex,
    /// Действие после нормализации: обрезанный до оллына рейз,
    /// не превысивший ставку, записывается как call.
    pub action: Action,
    pub committed: Chips,
    pub new_stack: Chips,
    pub all_in: bool,
    /// Открыл ли ход заново для остальных (bet/raise).
    pub reopened: bool,
}

/// Раунд ставок на одной улице.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BettingRound {
    pub street: Street,
    /// Текущая целевая ставка, до которой должны дотянуться игроки.
    pub highest_bet: Chips,
    /// Кто походил после последнего bet/raise.
    pub acted: Vec<SeatIndex>,
    /// Чей сейчас ход.
    pub to_act: Option<SeatIndex>,
    /// Место последнего агрессора (bet/raise).
    pub last_aggressor: Option<SeatIndex>,
}

impl BettingRound {
    /// Новый раунд; первым ходит ближайшее активное место начиная с `first`.
    pub fn new(street: Street, highest_bet: Chips, seats: &[Seat], first: SeatIndex) -> Self {
        Self {
            street,
            highest_bet,
            acted: Vec::new(),
            to_act: next_active_seat(seats, first, true),
            last_aggressor: None,
        }
    }

    /// Префлоп: ставка стола = большой блайнд, первым ходит место после BB.
    pub fn preflop(seats: &[Seat], big_blind_seat: SeatIndex, big_blind: Chips) -> Self {
        let posted = seats.iter().map(|s| s.current_bet).max().unwrap_or(Chips::ZERO);
        let mut round = Self::new(
            Street::Preflop,
            big_blind.max(posted),
            seats,
            big_blind_seat + 1,
        );
        round.last_aggressor = Some(big_blind_seat);
        round
    }

    /// Постфлоп: ставок нет, первым ходит место после кнопки.
    pub fn postflop(street: Street, seats: &[Seat], dealer: SeatIndex) -> Self {
        Self::new(street, Chips::ZERO, seats, dealer + 1)
    }

    pub fn call_amount(&self, seat: &Seat) -> Chips {
        diff_to_call(seat, self.highest_bet).min(seat.stack)
    }

    /// Текущее состояние раунда по состоянию мест.
    pub fn state(&self, seats: &[Seat]) -> RoundState {
        let contenders: Vec<SeatIndex> = (0..seats.len())
            .filter(|&i| seats[i].is_contending())
            .collect();
        match contenders.as_slice() {
            [] => return RoundState::Closed,
            [winner] => return RoundState::Uncontested { winner: *winner },
            _ => {}
        }

        let active: Vec<&Seat> = seats.iter().filter(|s| s.is_active()).collect();
        let unmatched = active.iter().any(|s| s.current_bet < self.highest_bet);
        if active.len() <= 1 && !unmatched {
            return RoundState::AllIn;
        }

        let start = self.to_act.unwrap_or(0);
        let pending = collect_seats_from(seats, start, |s| s.is_active())
            .into_iter()
            .filter(|i| !self.acted.contains(i) || seats[*i].current_bet < self.highest_bet)
            .collect::<Vec<_>>();

        if pending.is_empty() {
            if active.len() <= 1 {
                RoundState::AllIn
            } else {
                RoundState::Closed
            }
        } else {
            RoundState::Open {
                highest_bet: self.highest_bet,
                pending,
            }
        }
    }

    /// Применить действие места `seat_idx`.
    ///
    /// Недопустимое действие возвращает `InvalidAction` и ничего не меняет.
    /// Call/bet/raise сверх стека обрезаются до оллына.
    pub fn apply(
        &mut self,
        seats: &mut [Seat],
        pot: &mut Pot,
        seat_idx: SeatIndex,
        action: Action,
    ) -> Result<Applied, EngineError> {
        if seat_idx >= seats.len() {
            return Err(EngineError::InvalidSeat(seat_idx));
        }
        let invalid = |reason| EngineError::InvalidAction {
            seat: seat_idx,
            action,
            reason,
        };

        if self.to_act != Some(seat_idx) {
            return Err(invalid(ActionError::NotSeatsTurn {
                expected: self.to_act,
            }));
        }

        let seat = &mut seats[seat_idx];
        validate_action(seat, &action, self.highest_bet).map_err(invalid)?;

        let owed = diff_to_call(seat, self.highest_bet);
        let committed = match action {
            Action::Fold => {
                seat.fold();
                Chips::ZERO
            }
            Action::Check => Chips::ZERO,
            Action::Call => seat.commit(owed),
            Action::Bet(amount) => seat.commit(amount),
            Action::Raise(total_bet) => seat.commit(total_bet - seat.current_bet),
        };
        pot.add(seat_idx, committed);

        let new_bet = seat.current_bet;
        let new_stack = seat.stack;
        let all_in = seat.is_all_in();

        let reopened = action.is_aggressive() && new_bet > self.highest_bet;
        let normalized = match action {
            Action::Bet(_) if reopened => Action::Bet(new_bet),
            Action::Raise(_) if reopened => Action::Raise(new_bet),
            // Оллын на сумму не выше текущей ставки – по сути call.
            Action::Bet(_) | Action::Raise(_) => Action::Call,
            other => other,
        };

        if reopened {
            self.highest_bet = new_bet;
            self.last_aggressor = Some(seat_idx);
            self.acted = vec![seat_idx];
        } else if !matches!(action, Action::Fold) && !self.acted.contains(&seat_idx) {
            self.acted.push(seat_idx);
        }

        self.to_act = next_active_seat(seats, seat_idx, false);

        Ok(Applied {
            seat: seat_idx,
            action: normalized,
            committed,
            new_stack,
            all_in,
            reopened,
        })
    }

    /// Что видит место `seat_idx` в текущий момент.
    pub fn view<'a>(
        &self,
        seats: &'a [Seat],
        pot: &Pot,
        board: &'a [Card],
        big_blind: Chips,
        seat_idx: SeatIndex,
    ) -> TableView<'a> {
        let seat = &seats[seat_idx];
        let contenders = seats.iter().filter(|s| s.is_contending()).count();
        TableView {
            seat: seat_idx,
            street: self.street,
            pot: pot.total,
            highest_bet: self.highest_bet,
            call_amount: self.call_amount(seat),
            current_bet: seat.current_bet,
            stack: seat.stack,
            big_blind,
            hole_cards: &seat.hole_cards,
            board,
            opponents: contenders.saturating_sub(1),
        }
    }

    /// Провести раунд до конца, опрашивая провайдеров мест по очереди.
    ///
    /// `providers[i]` отвечает за место `i`.
    pub fn run<P: ActionProvider>(
        &mut self,
        seats: &mut [Seat],
        pot: &mut Pot,
        board: &[Card],
        big_blind: Chips,
        providers: &mut [P],
        recorder: &mut Recorder<'_>,
    ) -> Result<RoundState, EngineError> {
        if providers.len() != seats.len() {
            return Err(EngineError::ProviderMismatch {
                seats: seats.len(),
                providers: providers.len(),
            });
        }

        loop {
            let seat_idx = match self.state(seats) {
                RoundState::Open { pending, .. } => pending[0],
                finished => return Ok(finished),
            };
            self.to_act = Some(seat_idx);

            let applied = self.query_until_valid(seats, pot, board, big_blind, &mut providers[seat_idx])?;

            log::debug!(
                "{}: место {} -> {} (в банк {}, стек {})",
                self.street,
                applied.seat,
                applied.action,
                applied.committed,
                applied.new_stack
            );
            recorder.emit(HandEventKind::PlayerActed {
                seat: applied.seat,
                action: applied.action,
                committed: applied.committed,
                new_stack: applied.new_stack,
                pot_after: pot.total,
                all_in: applied.all_in,
            });
        }
    }

    /// Спросить провайдера о ходе; недопустимые ответы отклоняются,
    /// после `MAX_INVALID_ATTEMPTS` попыток место чекает (если можно) или фолдит.
    fn query_until_valid<P: ActionProvider>(
        &mut self,
        seats: &mut [Seat],
        pot: &mut Pot,
        board: &[Card],
        big_blind: Chips,
        provider: &mut P,
    ) -> Result<Applied, EngineError> {
        let Some(seat_idx) = self.to_act else {
            return Err(EngineError::Internal("нет места для хода в открытом раунде"));
        };

        for _ in 0..MAX_INVALID_ATTEMPTS {
            let action = provider.act(&self.view(seats, pot, board, big_blind, seat_idx));
            match self.apply(seats, pot, seat_idx, action) {
                Ok(applied) => return Ok(applied),
                Err(err @ EngineError::InvalidAction { .. }) => {
                    log::warn!("{err}");
                    provider.rejected(&self.view(seats, pot, board, big_blind, seat_idx), action, &err);
                }
                Err(other) => return Err(other),
            }
        }

        let fallback = if self.call_amount(&seats[seat_idx]).is_zero() {
            Action::Check
        } else {
            Action::Fold
        };
        log::warn!("место {seat_idx}: лимит недопустимых действий, принудительно {fallback}");
        self.apply(seats, pot, seat_idx, fallback)
    }
}
