use crate::domain::{Card, Deck};
use crate::engine::RandomSource;
use crate::eval::evaluate;

/// Оценка эквити методом Монте-Карло.
///
/// Каждая симуляция раздаёт `opponents` случайных рук из оставшейся колоды
/// и дополняет борд до пяти карт. Результат: `(победы + ничьи / 2) / симуляции`.
pub fn estimate_equity<R: RandomSource>(
    hole: &[Card],
    board: &[Card],
    opponents: usize,
    simulations: u32,
    rng: &mut R,
) -> f64 {
    if opponents == 0 {
        return 1.0;
    }
    if simulations == 0 || hole.len() != 2 || board.len() > 5 {
        return 0.0;
    }

    let known: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
    let mut remaining = Deck::standard_52();
    remaining.remove_cards(&known);

    let missing = 5 - board.len();
    let mut wins = 0u32;
    let mut ties = 0u32;
    let mut played = 0u32;

    for _ in 0..simulations {
        let mut deck = Deck::shuffled_from(remaining.cards(), rng);

        let Ok(opponent_cards) = deck.deal(opponents * 2) else {
            break;
        };
        let Ok(rest) = deck.deal(missing) else {
            break;
        };

        let mut full_board = board.to_vec();
        full_board.extend(rest);

        let mut mine = full_board.clone();
        mine.extend_from_slice(hole);
        let my_score = evaluate(&mine);

        let best_opponent = opponent_cards
            .chunks(2)
            .map(|pair| {
                let mut cards = full_board.clone();
                cards.extend_from_slice(pair);
                evaluate(&cards)
            })
            .max();

        match best_opponent {
            Some(best) if my_score > best => wins += 1,
            Some(best) if my_score == best => ties += 1,
            Some(_) => {}
            None => wins += 1,
        }
        played += 1;
    }

    if played == 0 {
        return 0.0;
    }
    (wins as f64 + ties as f64 / 2.0) / played as f64
}
