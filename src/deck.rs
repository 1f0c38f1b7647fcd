use crate::card::{Card, ParseCardError, Rank, Suit};
use core::fmt;
use core::str::FromStr;
use rand::Rng;
use std::collections::HashSet;
use thiserror::Error;

/// Number of cards in a deck
pub const DECK_SIZE: usize = 52;

/// Number of random transpositions in [`Deck::shuffle`]
pub const SHUFFLE_SWAPS: usize = 1000;

/// Label preceding the cards in the text form of a deck
const LABEL: &str = "Deck:";

/// The deck has no cards left to deal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all 52 cards have been dealt")]
pub struct ExhaustedDeckError;

/// Errors from parsing the text form of a deck
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDeckError {
    /// A token is not a valid card code
    #[error("card #{index}: {source}")]
    Card {
        /// 0-based position of the offending token
        index: usize,
        /// Why the token failed to parse
        #[source]
        source: ParseCardError,
    },

    /// The text does not list exactly 52 cards
    #[error("expected 52 cards, found {0}")]
    Count(usize),

    /// A card appears more than once
    #[error("duplicate card {0}")]
    Duplicate(Card),
}

/// A 52-card deck with a dealing cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    dealt: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::standard()
    }
}

impl Deck {
    /// Construct the deck in canonical order
    ///
    /// Clubs come first, then diamonds, hearts and spades.  Ranks ascend
    /// within each suit.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: core::array::from_fn(|i| Card::new(Suit::ASC[i / 13], Rank::ASC[i % 13])),
            dealt: 0,
        }
    }

    /// Cards in their current order, dealt or not
    #[must_use]
    pub const fn cards(&self) -> &[Card; DECK_SIZE] {
        &self.cards
    }

    /// The number of cards not dealt yet
    #[must_use]
    pub const fn remaining(&self) -> usize {
        DECK_SIZE - self.dealt
    }

    /// Shuffle by swapping two random positions [`SHUFFLE_SWAPS`] times
    ///
    /// Both positions are drawn independently, so a swap may be a no-op.
    /// The resulting permutation is close to but not exactly uniform.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for _ in 0..SHUFFLE_SWAPS {
            let i = rng.random_range(0..DECK_SIZE);
            let j = rng.random_range(0..DECK_SIZE);
            self.cards.swap(i, j);
        }
        log::debug!("shuffled deck with {SHUFFLE_SWAPS} swaps");
    }

    /// Deal the card under the cursor
    ///
    /// # Errors
    /// [`ExhaustedDeckError`] once all 52 cards are dealt.  The deck is left
    /// unchanged.
    pub fn deal_next(&mut self) -> Result<Card, ExhaustedDeckError> {
        let card = *self.cards.get(self.dealt).ok_or(ExhaustedDeckError)?;
        self.dealt += 1;
        Ok(card)
    }

    /// Rewind the cursor without touching the order
    pub fn reset(&mut self) {
        self.dealt = 0;
    }
}

impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(LABEL)?;
        self.cards.iter().try_for_each(|card| write!(f, " {card}"))
    }
}

/// Parse 52 whitespace-separated card codes, optionally led by `Deck:`
///
/// The order of the codes becomes the order of the deck.
impl FromStr for Deck {
    type Err = ParseDeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace().peekable();
        tokens.next_if_eq(&LABEL);
        let tokens: Vec<&str> = tokens.collect();

        if tokens.len() != DECK_SIZE {
            return Err(ParseDeckError::Count(tokens.len()));
        }

        let mut seen = HashSet::with_capacity(DECK_SIZE);
        let mut cards = [Card::new(Suit::Clubs, Rank::Two); DECK_SIZE];

        for (index, (slot, token)) in cards.iter_mut().zip(tokens).enumerate() {
            let card = token
                .parse::<Card>()
                .map_err(|source| ParseDeckError::Card { index, source })?;

            if !seen.insert(card) {
                return Err(ParseDeckError::Duplicate(card));
            }
            *slot = card;
        }

        Ok(Self { cards, dealt: 0 })
    }
}
