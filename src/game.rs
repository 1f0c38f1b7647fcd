use crate::bidding::Auction;
use crate::deck::{DECK_SIZE, Deck, ExhaustedDeckError};
use crate::hand::Hand;
use core::fmt;
use core::ops::{Add, Index, IndexMut};
use rand::Rng;

/// Cards each player holds after a deal
pub const HAND_SIZE: usize = DECK_SIZE / 4;

/// A seat at the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Position {
    #[default]
    North,
    East,
    South,
    West,
}

impl Position {
    /// Seats in clockwise order from North
    pub const ALL: [Self; 4] = [Self::North, Self::East, Self::South, Self::West];

    /// The next seat clockwise
    #[must_use]
    pub fn next(self) -> Self {
        self + 1
    }
}

/// Move `n` seats clockwise
impl Add<usize> for Position {
    type Output = Self;

    fn add(self, n: usize) -> Self {
        Self::ALL[(self as usize + n) % 4]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::North => "NORTH",
            Self::East => "EAST",
            Self::South => "SOUTH",
            Self::West => "WEST",
        })
    }
}

/// The four hands at the table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deal([Hand; 4]);

impl Index<Position> for Deal {
    type Output = Hand;

    fn index(&self, position: Position) -> &Hand {
        &self.0[position as usize]
    }
}

impl IndexMut<Position> for Deal {
    fn index_mut(&mut self, position: Position) -> &mut Hand {
        &mut self.0[position as usize]
    }
}

impl Deal {
    /// Iterate over seats and their hands from North
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Hand)> {
        Position::ALL.into_iter().zip(&self.0)
    }

    /// Throw in every hand
    pub fn clear(&mut self) {
        self.0.iter_mut().for_each(Hand::clear);
    }
}

/// A deck, four hands and a rotating dealer
#[derive(Debug, Clone, Default)]
pub struct Game {
    deck: Deck,
    deal: Deal,
    dealer: Position,
    auction: Option<Auction>,
}

impl Game {
    /// Start with the canonical deck and North dealing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a given deck and North dealing
    #[must_use]
    pub fn with_deck(deck: Deck) -> Self {
        Self {
            deck,
            ..Self::default()
        }
    }

    /// The deck in its current order
    #[must_use]
    pub const fn deck(&self) -> &Deck {
        &self.deck
    }

    /// All four hands
    #[must_use]
    pub const fn hands(&self) -> &Deal {
        &self.deal
    }

    /// The hand of one seat
    #[must_use]
    pub fn hand(&self, position: Position) -> &Hand {
        &self.deal[position]
    }

    /// The current dealer
    #[must_use]
    pub const fn dealer(&self) -> Position {
        self.dealer
    }

    /// The last auction, if one has run since [`Self::setup`]
    #[must_use]
    pub const fn last_auction(&self) -> Option<&Auction> {
        self.auction.as_ref()
    }

    /// Shuffle the deck
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.deck.shuffle(rng);
    }

    /// Prepare for a new deal: rewind the deck, throw in all hands and
    /// forget the last auction
    pub fn setup(&mut self) {
        self.deck.reset();
        self.deal.clear();
        self.auction = None;
    }

    /// Deal the whole deck one card at a time, starting left of the dealer
    ///
    /// Every hand receives 13 cards, since the deck holds 52 distinct cards
    /// and must be dealt from the top.
    ///
    /// # Errors
    /// [`ExhaustedDeckError`] if any card was dealt since the deck was last
    /// rewound.  The hands are left untouched.
    pub fn deal(&mut self) -> Result<(), ExhaustedDeckError> {
        if self.deck.remaining() != DECK_SIZE {
            return Err(ExhaustedDeckError);
        }
        let first = self.dealer.next();

        for i in 0..DECK_SIZE {
            let card = self.deck.deal_next()?;
            self.deal[first + i].add_card(card);
        }

        log::debug!("dealt {DECK_SIZE} cards, {} dealing", self.dealer);
        Ok(())
    }

    /// Ask each player for a bid from the dealer clockwise until one opens
    pub fn auction(&mut self) -> &Auction {
        let mut auction = Auction::new(self.dealer);

        while !auction.has_ended() {
            let call = self.deal[auction.next_caller()].bid();
            auction.push(call);
        }

        log::info!("{auction}");
        self.auction.insert(auction)
    }

    /// Pass the deal to the next seat clockwise
    pub fn next_dealer(&mut self) {
        self.dealer = self.dealer.next();
    }
}

/// Every hand under its seat, then the auction summary
impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, hand) in self.deal.iter() {
            writeln!(f, "{position}\n{hand}\n")?;
        }

        match &self.auction {
            Some(auction) => writeln!(f, "{auction}"),
            None => writeln!(f),
        }
    }
}
