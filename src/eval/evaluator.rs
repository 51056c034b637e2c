use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandScore};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Лучшая 5-карточная рука из hole + board.
///
/// Обычно `hole.len() == 2`, `board.len()` от 3 до 5,
/// но функция корректно работает для любых 5–7 карт суммарно.
pub fn evaluate_best_hand(hole: &[Card], board: &[Card]) -> HandScore {
    let mut all_cards = Vec::with_capacity(hole.len() + board.len());
    all_cards.extend_from_slice(hole);
    all_cards.extend_from_slice(board);
    evaluate(&all_cards)
}

/// Оценить набор из 5–7 различных карт.
///
/// Для 6–7 карт перебираются все 5-карточные подмножества
/// (C(7,5) = 21) и берётся максимум.
///
/// Паникует, если карт не 5..=7 или среди них есть повторы:
/// это ошибка вызывающего кода, а не игровая ситуация.
pub fn evaluate(cards: &[Card]) -> HandScore {
    assert!(
        (5..=7).contains(&cards.len()),
        "evaluate ожидает от 5 до 7 карт, получено {}",
        cards.len()
    );
    for (i, a) in cards.iter().enumerate() {
        assert!(
            !cards[i + 1..].contains(a),
            "evaluate: карта {a} встречается дважды"
        );
    }

    if cards.len() == 5 {
        return evaluate_five([cards[0], cards[1], cards[2], cards[3], cards[4]]);
    }
    best_of_all_5card_combinations(cards)
}

/// Перебираем все комбинации 5 карт из N (N=6–7) и выбираем лучшую.
fn best_of_all_5card_combinations(cards: &[Card]) -> HandScore {
    let n = cards.len();
    let mut best: Option<HandScore> = None;

    for a in 0..(n - 4) {
        for b in (a + 1)..(n - 3) {
            for c in (b + 1)..(n - 2) {
                for d in (c + 1)..(n - 1) {
                    for e in (d + 1)..n {
                        let r = evaluate_five([cards[a], cards[b], cards[c], cards[d], cards[e]]);
                        if best.map_or(true, |best_r| r > best_r) {
                            best = Some(r);
                        }
                    }
                }
            }
        }
    }

    // n >= 5 гарантирован assert'ом в evaluate, хотя бы одна комбинация есть.
    best.unwrap_or_else(|| evaluate_five([cards[0], cards[1], cards[2], cards[3], cards[4]]))
}

/// Оценка строго 5-карточной комбинации.
pub fn evaluate_five(cards: [Card; 5]) -> HandScore {
    let first_suit = cards[0].suit;
    let is_flush = cards.iter().all(|c| c.suit == first_suit);

    let mut rank_counts = [0u8; 15]; // индексы 2..14
    let mut rank_mask: RankMask = 0;
    for card in cards.iter() {
        rank_counts[card.rank.value() as usize] += 1;
        rank_mask |= rank_to_bit(card.rank);
    }

    // Стрит возможен только при 5 разных рангах.
    let straight_high = if rank_mask.count_ones() == 5 {
        detect_straight(rank_mask)
    } else {
        None
    };

    // (rank, count), отсортированные по количеству (desc), затем по рангу (desc).
    let mut groups: Vec<(Rank, u8)> = Rank::ALL
        .iter()
        .rev()
        .filter(|r| rank_counts[r.value() as usize] > 0)
        .map(|r| (*r, rank_counts[r.value() as usize]))
        .collect();
    groups.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| b.0.cmp(&a.0)));

    // pattern: [4,1], [3,2], [3,1,1], [2,2,1], [2,1,1,1], [1,1,1,1,1]
    let pattern: Vec<u8> = groups.iter().map(|g| g.1).collect();
    let ranks: Vec<Rank> = groups.iter().map(|g| g.0).collect();

    if is_flush {
        match straight_high {
            Some(Rank::Ace) => return HandScore::new(HandCategory::RoyalFlush, &[]),
            Some(high) => return HandScore::new(HandCategory::StraightFlush, &[high]),
            None => {}
        }
    }

    match pattern.as_slice() {
        [4, 1] => return HandScore::new(HandCategory::FourOfAKind, &ranks),
        [3, 2] => return HandScore::new(HandCategory::FullHouse, &ranks),
        _ => {}
    }

    if is_flush {
        // Все 5 рангов различны, groups уже по убыванию.
        return HandScore::new(HandCategory::Flush, &ranks);
    }

    if let Some(high) = straight_high {
        return HandScore::new(HandCategory::Straight, &[high]);
    }

    let category = match pattern.as_slice() {
        [3, 1, 1] => HandCategory::ThreeOfAKind,
        [2, 2, 1] => HandCategory::TwoPair,
        [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    HandScore::new(category, &ranks)
}
