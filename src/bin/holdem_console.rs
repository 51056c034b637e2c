// src/bin/holdem_console.rs
//
// Консольный холдем: человек против ботов или наблюдение за ботами.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

use holdem_engine::console::{ConsolePlayer, ConsoleSink};
use holdem_engine::domain::Chips;
use holdem_engine::engine::{ActionProvider, Game};
use holdem_engine::infra::DeterministicRng;
use holdem_engine::{GameConfig, SeatConfig};

#[derive(Parser)]
#[command(name = "holdem-console")]
#[command(about = "No-limit Texas Hold'em в терминале")]
struct Cli {
    /// JSON-конфиг стола; остальные параметры стола тогда игнорируются.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Сколько ботов посадить.
    #[arg(long, default_value_t = 3)]
    bots: usize,

    /// Стартовый стек каждого места.
    #[arg(long, default_value_t = 1000)]
    stack: u64,

    #[arg(long, default_value_t = 5)]
    small_blind: u64,

    #[arg(long, default_value_t = 10)]
    big_blind: u64,

    /// Seed для колоды и ботов.
    #[arg(long)]
    seed: Option<u64>,

    /// Ограничение по числу раздач.
    #[arg(long)]
    hands: Option<u64>,

    /// Только боты, карты всех открыты.
    #[arg(long)]
    watch: bool,
}

fn build_config(cli: &Cli) -> Result<GameConfig, Box<dyn Error>> {
    if let Some(path) = &cli.config {
        let mut config = GameConfig::load(path)?;
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }
        return Ok(config);
    }

    let mut config = GameConfig::all_bots(
        cli.bots,
        Chips::new(cli.stack),
        Chips::new(cli.small_blind),
        Chips::new(cli.big_blind),
    );
    if !cli.watch {
        config.seats.insert(0, SeatConfig::human("You", Chips::new(cli.stack)));
    }
    config.seed = cli.seed;
    config.validate()?;
    Ok(config)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;
    let seed = config.seed.unwrap_or_else(DeterministicRng::random_seed);
    log::info!("seed: {seed}");

    let config = GameConfig {
        seed: Some(seed),
        ..config
    };
    let mut game = Game::from_config(&config, DeterministicRng::from_seed(seed), |_, seat| {
        Box::new(ConsolePlayer::new(seat.name.clone())) as Box<dyn ActionProvider>
    })?;

    let mut sink = ConsoleSink::new(game.seats(), cli.watch);
    let summaries = game.play_until_over(cli.hands, &mut sink)?;

    println!();
    println!("Сыграно раздач: {}", summaries.len());
    for seat in game.seats() {
        println!("{:>12}: {}", seat.name, seat.stack);
    }
    Ok(())
}
