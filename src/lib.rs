//! Deal contract bridge hands and find the opening bid
//!
//! A [`Game`] deals a 52-card [`Deck`] to four seats one card at a time.
//! Each [`Hand`] keeps its cards sorted by suit and rank and tracks a running
//! strength of honor and length points.  The auction then asks each player
//! from the dealer clockwise for a [`Call`] until someone opens.
//!
//! ```
//! use opener::{Call, Card, Hand};
//!
//! let mut hand = Hand::new();
//! for code in ["AS", "KS", "QS", "JS", "2S", "AH", "KH", "AD", "KD", "QD", "AC", "KC", "QC"] {
//!     hand.add_card(code.parse::<Card>().unwrap());
//! }
//! assert_eq!(hand.bid().to_string(), "2C");
//! assert!(matches!(hand.bid(), Call::Bid(_)));
//! ```
#![warn(missing_docs)]

/// Calls, bids and the opening auction
pub mod bidding;

/// Cards, suits and ranks
pub mod card;

/// The 52-card deck
pub mod deck;

/// Seats, deals and rounds of play
pub mod game;

/// Hands and the opening-bid heuristic
pub mod hand;

#[cfg(test)]
mod test;

pub use bidding::{Auction, Bid, Call, Opening, ParseCallError, Strain};
pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::{Deck, ExhaustedDeckError, ParseDeckError};
pub use game::{Deal, Game, Position};
pub use hand::{Hand, Holding, LongestSuits, SuitFlags};
