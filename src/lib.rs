//! Design pattern walkthroughs.
//!
//! The interesting parts are the bidirectional cursor behind the playlist
//! player ([`collection`], [`player`]) and the observable value with
//! synchronous subscriber notification ([`observer`]). The remaining
//! patterns ([`creational`], [`structural`]) are small and mostly exist to
//! round out the console tour in [`demos`].

pub mod cli;
pub mod collection;
pub mod config;
pub mod creational;
pub mod demos;
pub mod logging;
pub mod observer;
pub mod output;
pub mod player;
pub mod structural;

pub use config::Config;
