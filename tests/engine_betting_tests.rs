//! Тесты раунда ставок: допустимость действий, закрытие раунда,
//! обрезка до оллына, повторный запрос недопустимых действий.

use std::collections::VecDeque;

use holdem_engine::domain::{Chips, Seat, SeatIndex, Street};
use holdem_engine::engine::{
    betting::MAX_INVALID_ATTEMPTS, Action, ActionError, ActionProvider, BettingRound, EngineError,
    HandEventKind, NullSink, Pot, Recorder, RoundState, TableView,
};

/// Провайдер по сценарию; когда сценарий кончился – check/fold.
struct Scripted {
    actions: VecDeque<Action>,
}

impl Scripted {
    fn new(actions: &[Action]) -> Self {
        Self {
            actions: actions.iter().copied().collect(),
        }
    }
}

impl ActionProvider for Scripted {
    fn act(&mut self, view: &TableView<'_>) -> Action {
        self.actions.pop_front().unwrap_or(if view.can_check() {
            Action::Check
        } else {
            Action::Fold
        })
    }
}

/// Всегда пытается чекнуть и считает отказы.
#[derive(Default)]
struct StubbornChecker {
    rejections: usize,
}

impl ActionProvider for StubbornChecker {
    fn act(&mut self, _view: &TableView<'_>) -> Action {
        Action::Check
    }

    fn rejected(&mut self, _view: &TableView<'_>, _action: Action, _error: &EngineError) {
        self.rejections += 1;
    }
}

fn post(seats: &mut [Seat], pot: &mut Pot, seat: SeatIndex, amount: Chips) {
    let paid = seats[seat].commit(amount);
    pot.add(seat, paid);
}

/// Три места по 1000, кнопка 0, блайнды 5/10 уже поставлены (SB=1, BB=2).
fn three_handed(stacks: [u64; 3]) -> (Vec<Seat>, Pot, BettingRound) {
    let mut seats: Vec<Seat> = stacks
        .iter()
        .enumerate()
        .map(|(i, s)| Seat::bot(format!("P{i}"), Chips(*s)))
        .collect();
    let mut pot = Pot::new();
    post(&mut seats, &mut pot, 1, Chips(5));
    post(&mut seats, &mut pot, 2, Chips(10));
    let round = BettingRound::preflop(&seats, 2, Chips(10));
    (seats, pot, round)
}

fn total_chips(seats: &[Seat], pot: &Pot) -> Chips {
    seats.iter().map(|s| s.stack).sum::<Chips>() + pot.total
}

#[test]
fn preflop_starts_left_of_big_blind() {
    let (seats, _pot, round) = three_handed([1000, 1000, 1000]);
    assert_eq!(round.to_act, Some(0));
    assert_eq!(round.highest_bet, Chips(10));
    assert_eq!(
        round.state(&seats),
        RoundState::Open {
            highest_bet: Chips(10),
            pending: vec![0, 1, 2]
        }
    );
}

#[test]
fn big_blind_keeps_option_after_limps() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);

    round.apply(&mut seats, &mut pot, 0, Action::Call).unwrap();
    round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();

    // Все уравняли, но BB ещё не ходил.
    assert_eq!(
        round.state(&seats),
        RoundState::Open {
            highest_bet: Chips(10),
            pending: vec![2]
        }
    );

    round.apply(&mut seats, &mut pot, 2, Action::Check).unwrap();
    assert_eq!(round.state(&seats), RoundState::Closed);
    assert_eq!(pot.total, Chips(30));
    assert_eq!(total_chips(&seats, &pot), Chips(3000));
}

#[test]
fn raise_reopens_action_for_everyone_else() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);

    let raise = round.apply(&mut seats, &mut pot, 0, Action::Raise(Chips(30))).unwrap();
    assert!(raise.reopened);
    assert_eq!(raise.committed, Chips(30));

    round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();
    let reraise = round.apply(&mut seats, &mut pot, 2, Action::Raise(Chips(60))).unwrap();
    assert_eq!(reraise.committed, Chips(50));
    assert_eq!(round.last_aggressor, Some(2));

    assert_eq!(
        round.state(&seats),
        RoundState::Open {
            highest_bet: Chips(60),
            pending: vec![0, 1]
        }
    );

    round.apply(&mut seats, &mut pot, 0, Action::Call).unwrap();
    round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();

    assert_eq!(round.state(&seats), RoundState::Closed);
    assert_eq!(pot.total, Chips(180));
    for seat in &seats {
        assert_eq!(seat.stack, Chips(940));
        assert_eq!(seat.current_bet, Chips(60));
    }
}

#[test]
fn everyone_folding_leaves_uncontested_winner() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);

    round.apply(&mut seats, &mut pot, 0, Action::Fold).unwrap();
    round.apply(&mut seats, &mut pot, 1, Action::Fold).unwrap();

    assert_eq!(round.state(&seats), RoundState::Uncontested { winner: 2 });
    assert_eq!(pot.total, Chips(15));
}

#[test]
fn illegal_actions_are_rejected_without_side_effects() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);
    let before = seats.clone();

    let cases = [
        (
            1,
            Action::Call,
            ActionError::NotSeatsTurn { expected: Some(0) },
        ),
        (0, Action::Check, ActionError::CannotCheck { owed: Chips(10) }),
        (
            0,
            Action::Bet(Chips(20)),
            ActionError::BetAlreadyMade {
                highest: Chips(10),
            },
        ),
        (
            0,
            Action::Raise(Chips(10)),
            ActionError::RaiseTooSmall {
                to: Chips(10),
                highest: Chips(10),
            },
        ),
    ];

    for (seat, action, reason) in cases {
        let err = round.apply(&mut seats, &mut pot, seat, action).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidAction {
                seat,
                action,
                reason
            }
        );
    }

    assert_eq!(seats, before);
    assert_eq!(pot.total, Chips(15));
    assert_eq!(round.to_act, Some(0));
}

#[test]
fn postflop_rules_for_unopened_pot() {
    let mut seats = vec![
        Seat::bot("A", Chips(500)),
        Seat::bot("B", Chips(500)),
        Seat::bot("C", Chips(500)),
    ];
    let mut pot = Pot::new();
    let mut round = BettingRound::postflop(Street::Flop, &seats, 0);
    assert_eq!(round.to_act, Some(1));

    let call = round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap_err();
    assert!(matches!(
        call,
        EngineError::InvalidAction {
            reason: ActionError::NothingToCall,
            ..
        }
    ));

    let raise = round.apply(&mut seats, &mut pot, 1, Action::Raise(Chips(20))).unwrap_err();
    assert!(matches!(
        raise,
        EngineError::InvalidAction {
            reason: ActionError::NoBetToRaise,
            ..
        }
    ));

    let zero = round.apply(&mut seats, &mut pot, 1, Action::Bet(Chips::ZERO)).unwrap_err();
    assert!(matches!(
        zero,
        EngineError::InvalidAction {
            reason: ActionError::ZeroAmount,
            ..
        }
    ));

    // Все чекают – раунд закрыт.
    for seat in [1, 2, 0] {
        round.apply(&mut seats, &mut pot, seat, Action::Check).unwrap();
    }
    assert_eq!(round.state(&seats), RoundState::Closed);
}

#[test]
fn short_raise_is_capped_and_recorded_as_call() {
    let (mut seats, mut pot, mut round) = three_handed([8, 1000, 1000]);

    let applied = round.apply(&mut seats, &mut pot, 0, Action::Raise(Chips(50))).unwrap();
    assert_eq!(applied.action, Action::Call);
    assert_eq!(applied.committed, Chips(8));
    assert!(applied.all_in);
    assert!(!applied.reopened);
    assert_eq!(round.highest_bet, Chips(10));

    round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();
    round.apply(&mut seats, &mut pot, 2, Action::Check).unwrap();
    assert_eq!(round.state(&seats), RoundState::Closed);
    assert_eq!(total_chips(&seats, &pot), Chips(2008));
}

#[test]
fn all_in_raise_above_current_bet_reopens() {
    let (mut seats, mut pot, mut round) = three_handed([25, 1000, 1000]);

    let applied = round.apply(&mut seats, &mut pot, 0, Action::Raise(Chips(100))).unwrap();
    assert_eq!(applied.action, Action::Raise(Chips(25)));
    assert!(applied.reopened);
    assert!(applied.all_in);
    assert_eq!(round.highest_bet, Chips(25));
}

#[test]
fn call_larger_than_stack_goes_all_in() {
    let mut seats = vec![Seat::bot("A", Chips(1000)), Seat::bot("B", Chips(40))];
    let mut pot = Pot::new();
    let mut round = BettingRound::postflop(Street::Turn, &seats, 1);
    assert_eq!(round.to_act, Some(0));

    round.apply(&mut seats, &mut pot, 0, Action::Bet(Chips(100))).unwrap();
    let call = round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();

    assert_eq!(call.committed, Chips(40));
    assert!(call.all_in);
    assert_eq!(round.call_amount(&seats[1]), Chips::ZERO);
    assert_eq!(round.state(&seats), RoundState::AllIn);
}

#[test]
fn heads_up_shove_and_call_ends_betting() {
    let mut seats = vec![Seat::bot("Button", Chips(1000)), Seat::bot("BB", Chips(1000))];
    let mut pot = Pot::new();
    post(&mut seats, &mut pot, 0, Chips(5));
    post(&mut seats, &mut pot, 1, Chips(10));

    let mut round = BettingRound::preflop(&seats, 1, Chips(10));
    // Хедз-ап: на префлопе первым ходит кнопка (она же SB).
    assert_eq!(round.to_act, Some(0));

    round.apply(&mut seats, &mut pot, 0, Action::Raise(Chips(1000))).unwrap();
    round.apply(&mut seats, &mut pot, 1, Action::Call).unwrap();

    assert_eq!(round.state(&seats), RoundState::AllIn);
    assert_eq!(pot.total, Chips(2000));
}

#[test]
fn run_drives_providers_and_records_actions() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);
    let mut providers = vec![
        Scripted::new(&[Action::Raise(Chips(40))]),
        Scripted::new(&[Action::Fold]),
        Scripted::new(&[Action::Call]),
    ];
    let mut sink = NullSink;
    let mut recorder = Recorder::new(&mut sink);

    let state = round
        .run(&mut seats, &mut pot, &[], Chips(10), &mut providers[..], &mut recorder)
        .unwrap();

    assert_eq!(state, RoundState::Closed);
    assert_eq!(
        recorder.history().actions(),
        vec![
            (0, Action::Raise(Chips(40))),
            (1, Action::Fold),
            (2, Action::Call)
        ]
    );
    assert_eq!(pot.total, Chips(85));
    assert_eq!(total_chips(&seats, &pot), Chips(3000));

    let last = recorder.history().kinds().last().cloned();
    assert_eq!(
        last,
        Some(HandEventKind::PlayerActed {
            seat: 2,
            action: Action::Call,
            committed: Chips(30),
            new_stack: Chips(960),
            pot_after: Chips(85),
            all_in: false,
        })
    );
}

#[test]
fn invalid_actions_are_requeried_then_forced() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);
    let mut providers: Vec<StubbornChecker> = (0..3).map(|_| StubbornChecker::default()).collect();
    let mut sink = NullSink;
    let mut recorder = Recorder::new(&mut sink);

    let state = round
        .run(&mut seats, &mut pot, &[], Chips(10), &mut providers[..], &mut recorder)
        .unwrap();

    // Места 0 и 1 должны доставлять и чекнуть не могут: принудительный фолд.
    assert_eq!(state, RoundState::Uncontested { winner: 2 });
    assert_eq!(providers[0].rejections, MAX_INVALID_ATTEMPTS);
    assert_eq!(providers[1].rejections, MAX_INVALID_ATTEMPTS);
    assert_eq!(providers[2].rejections, 0);
    assert_eq!(
        recorder.history().actions(),
        vec![(0, Action::Fold), (1, Action::Fold)]
    );
}

#[test]
fn run_rejects_provider_count_mismatch() {
    let (mut seats, mut pot, mut round) = three_handed([1000, 1000, 1000]);
    let mut providers = vec![Scripted::new(&[]), Scripted::new(&[])];
    let mut sink = NullSink;
    let mut recorder = Recorder::new(&mut sink);

    let err = round
        .run(&mut seats, &mut pot, &[], Chips(10), &mut providers[..], &mut recorder)
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::ProviderMismatch {
            seats: 3,
            providers: 2
        }
    );
}
