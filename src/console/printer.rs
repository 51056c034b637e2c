use crate::domain::{Card, Seat, SeatIndex};
use crate::engine::{EventSink, HandEvent, HandEventKind};
use crate::eval::describe_hand;

/// Печатает ход раздачи в терминал.
///
/// Карманные карты ботов видны только в режиме наблюдения
/// (или когда их открывают на шоудауне).
#[derive(Clone, Debug)]
pub struct ConsoleSink {
    names: Vec<String>,
    visible: Vec<bool>,
}

impl ConsoleSink {
    pub fn new(seats: &[Seat], watch: bool) -> Self {
        Self {
            names: seats.iter().map(|s| s.name.clone()).collect(),
            visible: seats.iter().map(|s| watch || s.is_human).collect(),
        }
    }

    fn name(&self, seat: SeatIndex) -> &str {
        self.names.get(seat).map_or("?", String::as_str)
    }
}

fn cards_line(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

impl EventSink for ConsoleSink {
    fn on_event(&mut self, event: &HandEvent) {
        match &event.kind {
            HandEventKind::HandStarted { hand_number, dealer } => {
                println!();
                println!("========== Раздача #{hand_number} | баттон: {} ==========", self.name(*dealer));
            }
            HandEventKind::BlindsPosted {
                small_blind,
                big_blind,
            } => {
                println!(
                    "Блайнды: {} {} / {} {}",
                    self.name(small_blind.0),
                    small_blind.1,
                    self.name(big_blind.0),
                    big_blind.1
                );
            }
            HandEventKind::HoleCardsDealt { seat, cards } => {
                if self.visible.get(*seat).copied().unwrap_or(false) {
                    println!("{}: {}", self.name(*seat), cards_line(cards));
                }
            }
            HandEventKind::BoardDealt { street, cards } => {
                println!("--- {street}: {} ---", cards_line(cards));
            }
            HandEventKind::PlayerActed {
                seat,
                action,
                committed,
                new_stack,
                pot_after,
                all_in,
            } => {
                let suffix = if *all_in { " (all-in)" } else { "" };
                if committed.is_zero() {
                    println!("{} {action}{suffix}", self.name(*seat));
                } else {
                    println!(
                        "{} {action} (+{committed}, стек {new_stack}, банк {pot_after}){suffix}",
                        self.name(*seat)
                    );
                }
            }
            HandEventKind::StreetClosed { .. } => {}
            HandEventKind::BoardRunOut { from } => {
                println!("Все в оллыне после {from}, докладываем борд");
            }
            HandEventKind::Showdown { reveals, awards } => {
                println!("--- Шоудаун ---");
                for reveal in reveals {
                    println!(
                        "{}: {} {}",
                        self.name(reveal.seat),
                        cards_line(&reveal.hole_cards),
                        describe_hand(&reveal.score)
                    );
                }
                for (seat, amount) in awards {
                    println!("{} выигрывает {amount}", self.name(*seat));
                }
            }
            HandEventKind::UncontestedWin { seat, amount } => {
                println!("{} забирает {amount} без вскрытия", self.name(*seat));
            }
            HandEventKind::HandFinished { stacks, .. } => {
                let line = stacks
                    .iter()
                    .enumerate()
                    .map(|(i, s)| format!("{} {s}", self.name(i)))
                    .collect::<Vec<_>>()
                    .join(" | ");
                println!("Стеки: {line}");
            }
        }
    }
}
