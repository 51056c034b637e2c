use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Попытка взять из колоды больше карт, чем в ней осталось.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Колода исчерпана: запрошено {requested}, осталось {remaining}")]
pub struct DeckExhausted {
    pub requested: usize,
    pub remaining: usize,
}

/// Колода карт: упорядоченный список, сдача идёт с начала.
/// Каждая колода содержит каждую из 52 карт ровно один раз.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Стандартная 52-карточная колода в порядке:
    /// Clubs 2..A, Diamonds 2..A, Hearts 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades] {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Свежая колода, перемешанная переданным источником случайности.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Перемешанная колода из заданного набора карт (остаток колоды в симуляциях).
    pub fn shuffled_from<R: RandomSource>(cards: &[Card], rng: &mut R) -> Self {
        let mut cards = cards.to_vec();
        rng.shuffle(&mut cards);
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Снять и вернуть первые `n` карт.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, DeckExhausted> {
        if n > self.cards.len() {
            return Err(DeckExhausted {
                requested: n,
                remaining: self.cards.len(),
            });
        }
        Ok(self.cards.drain(..n).collect())
    }

    pub fn deal_one(&mut self) -> Result<Card, DeckExhausted> {
        if self.cards.is_empty() {
            return Err(DeckExhausted {
                requested: 1,
                remaining: 0,
            });
        }
        Ok(self.cards.remove(0))
    }

    /// Убрать из колоды уже известные карты (для симуляций эквити).
    pub fn remove_cards(&mut self, to_remove: &[Card]) {
        self.cards.retain(|c| !to_remove.contains(c));
    }
}
