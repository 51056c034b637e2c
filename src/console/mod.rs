//! Терминальный фронтенд: человек за консолью и печать событий раздачи.

pub mod human;
pub mod printer;

pub use human::ConsolePlayer;
pub use printer::ConsoleSink;
