use serde::{Deserialize, Serialize};

use crate::domain::{Card, Chips, SeatIndex, Street};
use crate::engine::actions::Action;
use crate::eval::HandScore;

/// Открытая на шоудауне рука.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reveal {
    pub seat: SeatIndex,
    pub hole_cards: Vec<Card>,
    pub score: HandScore,
}

/// Тип события в раздаче.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandEventKind {
    /// Новая раздача началась.
    HandStarted { hand_number: u64, dealer: SeatIndex },

    /// Блайнды: (место, реально поставлено).
    BlindsPosted {
        small_blind: (SeatIndex, Chips),
        big_blind: (SeatIndex, Chips),
    },

    /// Место получило карманные карты.
    HoleCardsDealt { seat: SeatIndex, cards: Vec<Card> },

    /// Открыты общие карты; `cards` – только новые карты улицы.
    BoardDealt { street: Street, cards: Vec<Card> },

    /// Действие игрока (уже нормализованное движком).
    PlayerActed {
        seat: SeatIndex,
        action: Action,
        /// Сколько фишек ушло в банк этим действием.
        committed: Chips,
        new_stack: Chips,
        pot_after: Chips,
        all_in: bool,
    },

    /// Раунд ставок на улице завершён.
    StreetClosed { street: Street, pot: Chips },

    /// Все, кто может ставить, в оллыне – борд докладывается без торговли.
    BoardRunOut { from: Street },

    /// Шоудаун: открытые руки и выплаты.
    Showdown {
        reveals: Vec<Reveal>,
        awards: Vec<(SeatIndex, Chips)>,
    },

    /// Все, кроме одного, сфолдили.
    UncontestedWin { seat: SeatIndex, amount: Chips },

    /// Раздача завершена; стеки всех мест после неё.
    HandFinished { hand_number: u64, stacks: Vec<Chips> },
}

/// Событие в раздаче с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandEvent {
    pub index: u32,
    pub kind: HandEventKind,
}

/// Получатель событий раздачи (консоль, UI, лог, история).
pub trait EventSink {
    fn on_event(&mut self, event: &HandEvent);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn on_event(&mut self, event: &HandEvent) {
        (**self).on_event(event)
    }
}

/// Приёмник, который всё игнорирует.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn on_event(&mut self, _event: &HandEvent) {}
}

/// Пишет каждое событие в `log`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &HandEvent) {
        match &event.kind {
            HandEventKind::HandStarted { .. }
            | HandEventKind::Showdown { .. }
            | HandEventKind::UncontestedWin { .. }
            | HandEventKind::HandFinished { .. } => log::info!("#{} {:?}", event.index, event.kind),
            _ => log::debug!("#{} {:?}", event.index, event.kind),
        }
    }
}

/// Полная история раздачи.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct HandHistory {
    pub events: Vec<HandEvent>,
}

impl HandHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Добавить событие, присвоив ему следующий номер.
    pub fn push(&mut self, kind: HandEventKind) -> &HandEvent {
        let index = self.events.len() as u32;
        self.events.push(HandEvent { index, kind });
        &self.events[self.events.len() - 1]
    }

    pub fn kinds(&self) -> impl Iterator<Item = &HandEventKind> {
        self.events.iter().map(|e| &e.kind)
    }

    /// Действия игроков в порядке совершения.
    pub fn actions(&self) -> Vec<(SeatIndex, Action)> {
        self.kinds()
            .filter_map(|k| match k {
                HandEventKind::PlayerActed { seat, action, .. } => Some((*seat, *action)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for HandHistory {
    fn on_event(&mut self, event: &HandEvent) {
        self.events.push(event.clone());
    }
}

/// Пишет события в историю раздачи и одновременно отдаёт их внешнему приёмнику.
pub struct Recorder<'s> {
    history: HandHistory,
    sink: &'s mut dyn EventSink,
}

impl<'s> Recorder<'s> {
    pub fn new(sink: &'s mut dyn EventSink) -> Self {
        Self {
            history: HandHistory::new(),
            sink,
        }
    }

    pub fn emit(&mut self, kind: HandEventKind) {
        let event = self.history.push(kind);
        self.sink.on_event(event);
    }

    pub fn history(&self) -> &HandHistory {
        &self.history
    }

    pub fn into_history(self) -> HandHistory {
        self.history
    }
}
