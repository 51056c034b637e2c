use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High card",
            HandCategory::OnePair => "One pair",
            HandCategory::TwoPair => "Two pair",
            HandCategory::ThreeOfAKind => "Three of a kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full house",
            HandCategory::FourOfAKind => "Four of a kind",
            HandCategory::StraightFlush => "Straight flush",
            HandCategory::RoyalFlush => "Royal flush",
        }
    }
}

/// Сила руки: категория + тай-брейк (значения рангов 2..14, от важного к менее важному).
///
/// Порядок полей важен: derive(Ord) сравнивает сначала категорию,
/// затем тай-брейк лексикографически. Длина тай-брейка внутри одной
/// категории всегда одинакова, хвост массива заполнен нулями.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandScore {
    category: HandCategory,
    tiebreak: [u8; 5],
    len: u8,
}

impl HandScore {
    pub fn new(category: HandCategory, ranks: &[Rank]) -> Self {
        assert!(ranks.len() <= 5, "тай-брейк не длиннее 5 рангов");
        let mut tiebreak = [0u8; 5];
        for (slot, r) in tiebreak.iter_mut().zip(ranks) {
            *slot = r.value();
        }
        Self {
            category,
            tiebreak,
            len: ranks.len() as u8,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    /// Значения рангов тай-брейка.
    pub fn tiebreak(&self) -> &[u8] {
        &self.tiebreak[..self.len as usize]
    }

    pub fn tiebreak_ranks(&self) -> Vec<Rank> {
        self.tiebreak()
            .iter()
            .filter_map(|v| Rank::from_value(*v))
            .collect()
    }

    /// Упаковка в u32 для логов и компактного сравнения:
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Порядок упакованных значений совпадает с порядком HandScore.
    pub fn packed(&self) -> u32 {
        self.tiebreak
            .iter()
            .fold(self.category.value() as u32, |acc, r| (acc << 4) | (*r as u32 & 0x0F))
    }
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.category.name())?;
        let ranks = self.tiebreak_ranks();
        if !ranks.is_empty() {
            let parts: Vec<String> = ranks.iter().map(|r| r.to_string()).collect();
            write!(f, " ({})", parts.join(" "))?;
        }
        Ok(())
    }
}

/// Человеческое описание руки по категории.
pub fn describe_hand(score: &HandScore) -> String {
    score.to_string()
}
