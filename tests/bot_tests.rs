//! Тесты бота: категории стартовых рук, эквити, решения при
//! фиксированной случайности, приведение к допустимым действиям.

use holdem_engine::bot::{
    classify_hole, decide, equity_from_category, estimate_equity, BotConfig, BotPolicy,
    EquityModel, Intent, PreflopTier,
};
use holdem_engine::domain::{parse_cards, Card, Chips, Street};
use holdem_engine::engine::{Action, ActionProvider, RandomSource, TableView};
use holdem_engine::eval::HandCategory;
use holdem_engine::infra::DeterministicRng;

/// Всегда возвращает одно и то же "случайное" число.
struct FixedRng(f64);

impl RandomSource for FixedRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {}

    fn next_unit(&mut self) -> f64 {
        self.0
    }
}

/// Всегда "выпадает" порог – бот выбирает агрессивную ветку.
fn lucky() -> FixedRng {
    FixedRng(0.0)
}

/// Никогда не проходит порог – бот выбирает пассивную ветку.
fn unlucky() -> FixedRng {
    FixedRng(0.99)
}

fn cards(s: &str) -> Vec<Card> {
    parse_cards(s).unwrap()
}

fn view<'a>(
    street: Street,
    hole: &'a [Card],
    board: &'a [Card],
    pot: u64,
    highest_bet: u64,
    current_bet: u64,
    stack: u64,
) -> TableView<'a> {
    let owed = highest_bet.saturating_sub(current_bet).min(stack);
    TableView {
        seat: 0,
        street,
        pot: Chips(pot),
        highest_bet: Chips(highest_bet),
        call_amount: Chips(owed),
        current_bet: Chips(current_bet),
        stack: Chips(stack),
        big_blind: Chips(10),
        hole_cards: hole,
        board,
        opponents: 2,
    }
}

#[test]
fn preflop_tiers() {
    assert_eq!(classify_hole(&cards("Ah As")), PreflopTier::Premium);
    assert_eq!(classify_hole(&cards("Jd Jc")), PreflopTier::Premium);
    assert_eq!(classify_hole(&cards("Kd Ah")), PreflopTier::Good);
    assert_eq!(classify_hole(&cards("Qs Ks")), PreflopTier::Good);
    assert_eq!(classify_hole(&cards("8h 8d")), PreflopTier::Good);
    assert_eq!(classify_hole(&cards("7h 7d")), PreflopTier::Medium);
    assert_eq!(classify_hole(&cards("2h 2d")), PreflopTier::Medium);
    assert_eq!(classify_hole(&cards("7h 2d")), PreflopTier::Weak);
    assert_eq!(classify_hole(&cards("Ah Td")), PreflopTier::Weak);
    assert_eq!(classify_hole(&[]), PreflopTier::Weak);
}

#[test]
fn category_equity_table() {
    assert_eq!(equity_from_category(HandCategory::RoyalFlush), 0.99);
    assert_eq!(equity_from_category(HandCategory::StraightFlush), 0.99);
    assert_eq!(equity_from_category(HandCategory::FourOfAKind), 0.99);
    assert_eq!(equity_from_category(HandCategory::FullHouse), 0.85);
    assert_eq!(equity_from_category(HandCategory::OnePair), 0.35);
    assert_eq!(equity_from_category(HandCategory::HighCard), 0.25);

    let ladder = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
    ];
    for pair in ladder.windows(2) {
        assert!(equity_from_category(pair[0]) < equity_from_category(pair[1]));
    }
}

#[test]
fn premium_hand_raises_four_times_the_call() {
    let hole = cards("Ah As");
    let v = view(Street::Preflop, &hole, &[], 15, 10, 0, 1000);

    assert_eq!(decide(&v, &BotConfig::default(), &mut lucky()), Action::Raise(Chips(50)));
    assert_eq!(decide(&v, &BotConfig::default(), &mut unlucky()), Action::Call);
}

#[test]
fn premium_hand_raises_when_checked_to_on_big_blind() {
    let hole = cards("Kh Kd");
    // BB уже поставил 10, все уравняли: bet превращается в raise.
    let v = view(Street::Preflop, &hole, &[], 30, 10, 10, 990);
    assert_eq!(decide(&v, &BotConfig::default(), &mut unlucky()), Action::Raise(Chips(40)));
}

#[test]
fn weak_hand_mostly_folds_to_a_bet() {
    let hole = cards("7h 2d");
    let v = view(Street::Preflop, &hole, &[], 15, 10, 0, 1000);

    // Шансы банка 10/25 = 0.4: с удачей – call, без неё – fold.
    assert_eq!(decide(&v, &BotConfig::default(), &mut lucky()), Action::Call);
    assert_eq!(decide(&v, &BotConfig::default(), &mut unlucky()), Action::Fold);
}

#[test]
fn postflop_air_bets_small_or_checks() {
    let hole = cards("7c 2d");
    let board = cards("Ah Kd 9s");
    let v = view(Street::Flop, &hole, &board, 30, 0, 0, 1000);

    assert_eq!(decide(&v, &BotConfig::default(), &mut lucky()), Action::Bet(Chips(10)));
    assert_eq!(decide(&v, &BotConfig::default(), &mut unlucky()), Action::Check);
}

#[test]
fn postflop_monster_bets_most_of_the_pot_capped_by_stack() {
    let hole = cards("Ah Ad");
    let board = cards("As Kd Kh");

    let deep = view(Street::Flop, &hole, &board, 100, 0, 0, 1000);
    assert_eq!(decide(&deep, &BotConfig::default(), &mut unlucky()), Action::Bet(Chips(80)));

    let short = view(Street::Flop, &hole, &board, 100, 0, 0, 50);
    assert_eq!(decide(&short, &BotConfig::default(), &mut unlucky()), Action::Bet(Chips(50)));
}

#[test]
fn postflop_weak_hand_against_bad_pot_odds() {
    let hole = cards("7c 2d");
    let board = cards("Ah Kd 9s");
    // Доставить 50 в банк 100: шансы 0.33 > эквити 0.25.
    let v = view(Street::Flop, &hole, &board, 100, 50, 0, 1000);

    assert_eq!(decide(&v, &BotConfig::default(), &mut lucky()), Action::Call);
    assert_eq!(decide(&v, &BotConfig::default(), &mut unlucky()), Action::Fold);
}

#[test]
fn raise_without_chips_to_exceed_bet_becomes_call() {
    let hole = cards("Ah As");
    // Стека хватает только на часть колла.
    let v = view(Street::Preflop, &hole, &[], 200, 100, 60, 30);
    assert_eq!(v.call_amount, Chips(30));
    assert_eq!(decide(&v, &BotConfig::default(), &mut lucky()), Action::Call);
}

#[test]
fn intents_are_converted_to_legal_actions() {
    let hole = cards("Ah As");
    let free = view(Street::Flop, &hole, &[], 40, 0, 0, 100);
    let facing = view(Street::Flop, &hole, &[], 40, 20, 0, 100);

    assert_eq!(Intent::Fold.into_action(&free), Action::Check);
    assert_eq!(Intent::Fold.into_action(&facing), Action::Fold);
    assert_eq!(Intent::Call.into_action(&free), Action::Check);
    assert_eq!(Intent::Check.into_action(&facing), Action::Call);
    assert_eq!(Intent::Bet(Chips(500)).into_action(&free), Action::Bet(Chips(100)));
    assert_eq!(Intent::RaiseBy(Chips(30)).into_action(&free), Action::Bet(Chips(30)));
    assert_eq!(Intent::Bet(Chips(30)).into_action(&facing), Action::Raise(Chips(50)));
    assert_eq!(Intent::RaiseBy(Chips(500)).into_action(&facing), Action::Raise(Chips(100)));
    assert_eq!(Intent::RaiseBy(Chips::ZERO).into_action(&facing), Action::Call);
}

#[test]
fn monte_carlo_equity_is_sane() {
    let mut rng = DeterministicRng::from_seed(5);

    let aces = estimate_equity(&cards("Ah As"), &[], 1, 2000, &mut rng);
    assert!(aces > 0.75 && aces < 0.95, "AA vs 1: {aces}");

    let trash = estimate_equity(&cards("7h 2d"), &[], 1, 2000, &mut rng);
    assert!(trash < aces);

    // Роял-флеш на руках не проигрывает и не делится.
    let royal = estimate_equity(&cards("Ah Kh"), &cards("Qh Jh Th"), 3, 200, &mut rng);
    assert_eq!(royal, 1.0);

    assert_eq!(estimate_equity(&cards("7h 2d"), &[], 0, 100, &mut rng), 1.0);
    assert_eq!(estimate_equity(&cards("7h 2d"), &[], 1, 0, &mut rng), 0.0);
}

#[test]
fn monte_carlo_model_drives_decisions() {
    let hole = cards("Ah Kh");
    let board = cards("Qh Jh Th");
    let v = view(Street::Flop, &hole, &board, 100, 0, 0, 1000);
    let config = BotConfig::monte_carlo(100);

    let mut rng = DeterministicRng::from_seed(1);
    assert_eq!(decide(&v, &config, &mut rng), Action::Bet(Chips(80)));
}

#[test]
fn bot_config_from_json() {
    let config: BotConfig =
        serde_json::from_str(r#"{"equity_model":{"monte_carlo":{"simulations":50}}}"#).unwrap();
    assert_eq!(config.equity_model, EquityModel::MonteCarlo { simulations: 50 });

    let default: BotConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(default.equity_model, EquityModel::HandCategory);
}

#[test]
fn same_seed_gives_same_decisions() {
    let hole = cards("9h 9d");
    let board = cards("9s 4c 2h");
    let spots = [
        view(Street::Preflop, &hole, &[], 15, 10, 0, 1000),
        view(Street::Preflop, &hole, &[], 60, 40, 10, 990),
        view(Street::Flop, &hole, &board, 60, 0, 0, 970),
        view(Street::Flop, &hole, &board, 120, 60, 0, 970),
    ];

    let mut a = BotPolicy::new(BotConfig::default(), DeterministicRng::from_seed(11));
    let mut b = BotPolicy::new(BotConfig::default(), DeterministicRng::from_seed(11));

    for _ in 0..20 {
        for spot in &spots {
            assert_eq!(a.act(spot), b.act(spot));
        }
    }
}
