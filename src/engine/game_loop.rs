use crate::domain::{
    Chips, Deck, HandSummary, PlayerHandResult, Seat, SeatIndex, Street, Table, TableConfig,
};
use crate::eval::{evaluate_best_hand, HandScore};
use crate::engine::betting::{BettingRound, RoundState};
use crate::engine::errors::EngineError;
use crate::engine::events::{EventSink, HandEventKind, HandHistory, Recorder, Reveal};
use crate::engine::positions::{blind_positions, collect_seats_from, next_funded_seat};
use crate::engine::pot::{split_pot, Pot};
use crate::engine::provider::ActionProvider;
use crate::engine::side_pots::compute_side_pots;
use crate::engine::RandomSource;

/// Статус раздачи для внешнего кода.
#[derive(Debug)]
pub enum HandStatus {
    Finished(HandSummary, HandHistory),
    /// Раздачу начать нельзя: фишки остались не больше чем у одного места.
    GameOver { winner: Option<SeatIndex> },
}

/// Состояние одной раздачи. Живёт от блайндов до выплаты банка.
struct HandEngine<'s> {
    hand_number: u64,
    deck: Deck,
    pot: Pot,
    recorder: Recorder<'s>,
}

/// Стол с игроками: владеет местами, колодой (через RNG) и провайдерами действий.
pub struct Game<R: RandomSource> {
    table: Table,
    providers: Vec<Box<dyn ActionProvider>>,
    rng: R,
    hands_played: u64,
}

impl<R: RandomSource> Game<R> {
    /// `providers[i]` принимает решения за `seats[i]`.
    pub fn new(
        config: TableConfig,
        seats: Vec<Seat>,
        providers: Vec<Box<dyn ActionProvider>>,
        rng: R,
    ) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::InvalidConfig)?;
        if seats.len() != providers.len() {
            return Err(EngineError::ProviderMismatch {
                seats: seats.len(),
                providers: providers.len(),
            });
        }
        if seats.len() < 2 {
            return Err(EngineError::DegenerateTable { funded: seats.len() });
        }

        Ok(Self {
            table: Table::new(config, seats),
            providers,
            rng,
            hands_played: 0,
        })
    }

    pub fn with_dealer(mut self, dealer: SeatIndex) -> Result<Self, EngineError> {
        if dealer >= self.table.seat_count() {
            return Err(EngineError::InvalidSeat(dealer));
        }
        self.table.dealer_button = dealer;
        Ok(self)
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    pub fn seats(&self) -> &[Seat] {
        &self.table.seats
    }

    pub fn dealer_button(&self) -> SeatIndex {
        self.table.dealer_button
    }

    pub fn hands_played(&self) -> u64 {
        self.hands_played
    }

    /// Игра окончена, когда фишки остались не больше чем у одного места.
    pub fn is_over(&self) -> bool {
        self.table.funded_seats().len() <= 1
    }

    /// Сыграть одну раздачу от блайндов до выплаты.
    pub fn play_hand(&mut self, sink: &mut dyn EventSink) -> Result<HandStatus, EngineError> {
        let funded = self.table.funded_seats();
        if funded.len() < 2 {
            log::info!("игра окончена: фишки у {} мест", funded.len());
            return Ok(HandStatus::GameOver {
                winner: funded.first().copied(),
            });
        }

        self.hands_played += 1;
        let mut hand = HandEngine {
            hand_number: self.hands_played,
            deck: Deck::shuffled(&mut self.rng),
            pot: Pot::new(),
            recorder: Recorder::new(sink),
        };

        let summary = run_hand(&mut self.table, &mut self.providers, &mut hand)?;
        rotate_dealer(&mut self.table);

        log::info!(
            "раздача #{} завершена: банк {}, победители {:?}",
            summary.hand_number,
            summary.total_pot,
            summary.winners()
        );
        Ok(HandStatus::Finished(summary, hand.recorder.into_history()))
    }

    /// Играть раздачи, пока фишки не останутся у одного места
    /// (или пока не будет сыграно `max_hands`). Возвращает сводки раздач.
    pub fn play_until_over(
        &mut self,
        max_hands: Option<u64>,
        sink: &mut dyn EventSink,
    ) -> Result<Vec<HandSummary>, EngineError> {
        let mut summaries = Vec::new();
        while max_hands.map_or(true, |max| (summaries.len() as u64) < max) {
            match self.play_hand(sink)? {
                HandStatus::Finished(summary, _) => summaries.push(summary),
                HandStatus::GameOver { .. } => break,
            }
        }
        Ok(summaries)
    }
}

/// Полный цикл раздачи: сброс, блайнды, карты, улицы, шоудаун.
fn run_hand(
    table: &mut Table,
    providers: &mut [Box<dyn ActionProvider>],
    hand: &mut HandEngine<'_>,
) -> Result<HandSummary, EngineError> {
    reset_for_new_hand(table);
    hand.recorder.emit(HandEventKind::HandStarted {
        hand_number: hand.hand_number,
        dealer: table.dealer_button,
    });

    let big_blind_seat = post_blinds(table, hand)?;
    deal_hole_cards(table, hand)?;

    let big_blind = table.config.big_blind;
    let mut running_out = false;
    let mut street = Street::Preflop;

    while street != Street::Showdown {
        if street != Street::Preflop {
            deal_board_cards(table, hand, street)?;
            for seat in table.seats.iter_mut() {
                seat.current_bet = Chips::ZERO;
            }
        }

        if !running_out {
            let mut round = if street == Street::Preflop {
                BettingRound::preflop(&table.seats, big_blind_seat, big_blind)
            } else {
                BettingRound::postflop(street, &table.seats, table.dealer_button)
            };

            let state = round.run(
                &mut table.seats,
                &mut hand.pot,
                &table.board,
                big_blind,
                providers,
                &mut hand.recorder,
            )?;
            hand.recorder.emit(HandEventKind::StreetClosed {
                street,
                pot: hand.pot.total,
            });

            match state {
                RoundState::Uncontested { winner } => {
                    return Ok(finish_hand_without_showdown(table, hand, winner, street));
                }
                RoundState::AllIn if street != Street::River => {
                    log::debug!("все в оллыне после {street}, докладываем борд");
                    hand.recorder.emit(HandEventKind::BoardRunOut { from: street });
                    running_out = true;
                }
                RoundState::Closed | RoundState::AllIn => {}
                RoundState::Open { .. } => {
                    return Err(EngineError::Internal("раунд ставок вернулся открытым"));
                }
            }
        }

        street = street.next();
    }

    Ok(finish_hand_with_showdown(table, hand))
}

/// Сброс состояния мест и борда перед раздачей.
fn reset_for_new_hand(table: &mut Table) {
    table.board.clear();
    for seat in table.seats.iter_mut() {
        seat.reset_for_new_hand();
    }
}

/// Постинг блайндов. Возвращает место большого блайнда.
fn post_blinds(table: &mut Table, hand: &mut HandEngine<'_>) -> Result<SeatIndex, EngineError> {
    let (sb_seat, bb_seat) = blind_positions(&table.seats, table.dealer_button).ok_or(
        EngineError::DegenerateTable {
            funded: table.funded_seats().len(),
        },
    )?;

    let sb_paid = table.seats[sb_seat].commit(table.config.small_blind);
    hand.pot.add(sb_seat, sb_paid);

    let bb_paid = table.seats[bb_seat].commit(table.config.big_blind);
    hand.pot.add(bb_seat, bb_paid);

    hand.recorder.emit(HandEventKind::BlindsPosted {
        small_blind: (sb_seat, sb_paid),
        big_blind: (bb_seat, bb_paid),
    });

    Ok(bb_seat)
}

/// Раздача карманных карт – по одной за круг, начиная слева от кнопки.
fn deal_hole_cards(table: &mut Table, hand: &mut HandEngine<'_>) -> Result<(), EngineError> {
    let start = table.dealer_button + 1;
    let order = collect_seats_from(&table.seats, start, Seat::is_contending);

    for _round in 0..2 {
        for &seat in &order {
            let card = hand.deck.deal_one()?;
            table.seats[seat].hole_cards.push(card);
        }
    }

    for &seat in &order {
        hand.recorder.emit(HandEventKind::HoleCardsDealt {
            seat,
            cards: table.seats[seat].hole_cards.clone(),
        });
    }
    Ok(())
}

/// Открыть карты борда для улицы.
fn deal_board_cards(
    table: &mut Table,
    hand: &mut HandEngine<'_>,
    street: Street,
) -> Result<(), EngineError> {
    let cards = hand.deck.deal(street.board_cards())?;
    table.board.extend_from_slice(&cards);
    hand.recorder.emit(HandEventKind::BoardDealt { street, cards });
    Ok(())
}

/// Завершение раздачи без шоудауна (все сфолдили, остался один).
fn finish_hand_without_showdown(
    table: &mut Table,
    hand: &mut HandEngine<'_>,
    winner: SeatIndex,
    street: Street,
) -> HandSummary {
    let total_pot = hand.pot.total;
    table.seats[winner].stack += total_pot;

    hand.recorder.emit(HandEventKind::UncontestedWin {
        seat: winner,
        amount: total_pot,
    });

    let awards = vec![(winner, total_pot)];
    build_summary(table, hand, street, false, &awards, &[])
}

/// Завершение раздачи со вскрытием.
fn finish_hand_with_showdown(table: &mut Table, hand: &mut HandEngine<'_>) -> HandSummary {
    let reveals: Vec<Reveal> = table
        .contenders()
        .into_iter()
        .map(|seat| {
            let s = &table.seats[seat];
            Reveal {
                seat,
                hole_cards: s.hole_cards.clone(),
                score: evaluate_best_hand(&s.hole_cards, &table.board),
            }
        })
        .collect();

    let awards = if table.config.side_pots {
        settle_side_pots(&hand.pot, &reveals)
    } else {
        split_pot(hand.pot.total, &best_hands(&reveals))
    };

    for &(seat, amount) in &awards {
        table.seats[seat].stack += amount;
    }

    hand.recorder.emit(HandEventKind::Showdown {
        reveals: reveals.clone(),
        awards: awards.clone(),
    });

    build_summary(table, hand, Street::Showdown, true, &awards, &reveals)
}

/// Места с максимальной силой руки, по возрастанию индекса.
fn best_hands(reveals: &[Reveal]) -> Vec<SeatIndex> {
    let Some(best) = reveals.iter().map(|r| r.score).max() else {
        return Vec::new();
    };
    reveals
        .iter()
        .filter(|r| r.score == best)
        .map(|r| r.seat)
        .collect()
}

/// Раздать каждый сайд-пот лучшей руке среди претендентов на него.
fn settle_side_pots(pot: &Pot, reveals: &[Reveal]) -> Vec<(SeatIndex, Chips)> {
    let mut awards: Vec<(SeatIndex, Chips)> = Vec::new();

    for side_pot in compute_side_pots(&pot.contributions) {
        let mut eligible: Vec<Reveal> = reveals
            .iter()
            .filter(|r| side_pot.eligible_seats.contains(&r.seat))
            .cloned()
            .collect();
        // Слой, в котором все претенденты сфолдили, достаётся всем дошедшим до вскрытия.
        if eligible.is_empty() {
            eligible = reveals.to_vec();
        }

        for (seat, amount) in split_pot(side_pot.amount, &best_hands(&eligible)) {
            match awards.iter_mut().find(|(s, _)| *s == seat) {
                Some((_, total)) => *total += amount,
                None => awards.push((seat, amount)),
            }
        }
    }

    awards.sort_by_key(|(seat, _)| *seat);
    awards
}

fn build_summary(
    table: &Table,
    hand: &mut HandEngine<'_>,
    street_reached: Street,
    showdown: bool,
    awards: &[(SeatIndex, Chips)],
    reveals: &[Reveal],
) -> HandSummary {
    let score_of = |seat: SeatIndex| -> Option<HandScore> {
        reveals.iter().find(|r| r.seat == seat).map(|r| r.score)
    };

    let results = table
        .seats
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.sitting_out)
        .map(|(seat, s)| {
            let won = awards
                .iter()
                .filter(|(w, _)| *w == seat)
                .map(|(_, amount)| *amount)
                .sum::<Chips>();
            PlayerHandResult {
                seat,
                score: score_of(seat),
                won,
                stack_after: s.stack,
                is_winner: !won.is_zero(),
            }
        })
        .collect();

    let busted: Vec<SeatIndex> = table
        .seats
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.sitting_out && s.stack.is_zero())
        .map(|(i, _)| i)
        .collect();

    hand.recorder.emit(HandEventKind::HandFinished {
        hand_number: hand.hand_number,
        stacks: table.stacks(),
    });

    HandSummary {
        hand_number: hand.hand_number,
        dealer: table.dealer_button,
        street_reached,
        board: table.board.clone(),
        total_pot: hand.pot.total,
        showdown,
        results,
        busted,
    }
}

/// Передвинуть кнопку на следующее место с фишками.
fn rotate_dealer(table: &mut Table) {
    if let Some(next) = next_funded_seat(&table.seats, table.dealer_button, false) {
        table.dealer_button = next;
    } else {
        table.dealer_button = (table.dealer_button + 1) % table.seat_count();
    }
}
