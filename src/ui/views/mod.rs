pub mod match_card;

pub use match_card::*;
