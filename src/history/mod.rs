//! History manager: state sequencing and time-travel navigation.

pub mod game;

pub use game::Game;
