//! Инфраструктурный слой вокруг покерного движка:
//! RNG-реализации для колоды и ботов.

pub mod rng;

pub use rng::*;
