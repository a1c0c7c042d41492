/// Matchmaking module: FIFO queue of waiting players and pairing into matches.

pub mod server;

pub use server::{Matchmaker, Pairing};
