use crate::bidding::{Bid, Call, Strain};
use crate::card::{Card, Suit};
use bitflags::bitflags;
use core::fmt;
use core::ops::{Deref, Index};

/// Cards of one suit in a hand, highest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Holding(Vec<Card>);

/// View the holding as a slice of cards, highest first
impl Deref for Holding {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.0
    }
}

impl Holding {
    /// Insert a card before the first card it outranks
    ///
    /// Returns `false` without inserting if an equal card is already held.
    fn insert(&mut self, card: Card) -> bool {
        if self.0.contains(&card) {
            return false;
        }
        let index = self
            .0
            .iter()
            .position(|&held| card.outranks(held))
            .unwrap_or(self.0.len());
        self.0.insert(index, card);
        true
    }

    fn clear(&mut self) {
        self.0.clear();
    }
}

impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|card| write!(f, " {card}"))
    }
}

bitflags! {
    /// A set of suits
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SuitFlags: u8 {
        /// ♣
        const CLUBS = 0x01;
        /// ♦
        const DIAMONDS = 0x02;
        /// ♥
        const HEARTS = 0x04;
        /// ♠
        const SPADES = 0x08;
    }
}

impl From<Suit> for SuitFlags {
    fn from(suit: Suit) -> Self {
        Self::from_bits_retain(1 << suit as u8)
    }
}

/// The longest suits of a hand
///
/// Built by [`Hand::longest_suits`], which always finds at least one suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongestSuits {
    length: usize,
    suits: SuitFlags,
}

impl LongestSuits {
    /// The length of the longest suits
    #[must_use]
    pub const fn length(self) -> usize {
        self.length
    }

    /// All suits of that length
    #[must_use]
    pub const fn suits(self) -> SuitFlags {
        self.suits
    }

    /// The number of suits tied for longest
    #[must_use]
    pub const fn count(self) -> u32 {
        self.suits.bits().count_ones()
    }

    /// The lowest of the tied suits
    #[must_use]
    pub const fn first(self) -> Suit {
        let index = self.suits.bits().trailing_zeros() as usize;
        Suit::ASC[if index < 4 { index } else { 3 }]
    }

    /// The highest of the tied suits
    #[must_use]
    pub const fn last(self) -> Suit {
        let index = (u8::BITS - self.suits.bits().leading_zeros()) as usize;
        Suit::ASC[if index > 0 { index - 1 } else { 0 }]
    }
}

/// A hand of cards split into four holdings, with a running strength
///
/// Strength counts honor points (A = 4, K = 3, Q = 2, J = 1) plus one length
/// point for every card that takes a suit past four cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    holdings: [Holding; 4],
    strength: u8,
}

impl Index<Suit> for Hand {
    type Output = Holding;

    fn index(&self, suit: Suit) -> &Holding {
        &self.holdings[suit as usize]
    }
}

impl Hand {
    /// Construct an empty hand
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of cards in the hand
    #[must_use]
    pub fn len(&self) -> usize {
        self.holdings.iter().map(|holding| holding.len()).sum()
    }

    /// Check if the hand holds no cards
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.holdings.iter().all(|holding| holding.is_empty())
    }

    /// Check if the hand holds a card
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self[card.suit].contains(&card)
    }

    /// Honor points plus length points of the cards added so far
    #[must_use]
    pub const fn strength(&self) -> u8 {
        self.strength
    }

    /// Throw in all cards
    pub fn clear(&mut self) {
        self.holdings.iter_mut().for_each(Holding::clear);
        self.strength = 0;
    }

    /// Add a card, keeping its holding ordered by rank
    ///
    /// Returns `false` and leaves the hand untouched if the card is already
    /// in the hand.
    pub fn add_card(&mut self, card: Card) -> bool {
        let holding = &mut self.holdings[card.suit as usize];

        if !holding.insert(card) {
            return false;
        }

        self.strength += card.rank.honor_points();

        if holding.len() > 4 {
            self.strength += 1;
        }
        true
    }

    /// Check for a balanced shape
    ///
    /// Every suit has 2 to 4 cards, and at most one suit is a doubleton.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let mut doubletons = 0;

        for suit in Suit::ASC {
            match self[suit].len() {
                2 => doubletons += 1,
                3 | 4 => (),
                _ => return false,
            }
        }
        doubletons <= 1
    }

    /// Find the length of the longest suits and which suits tie for it
    #[must_use]
    pub fn longest_suits(&self) -> LongestSuits {
        Suit::ASC.into_iter().fold(
            LongestSuits {
                length: 0,
                suits: SuitFlags::empty(),
            },
            |mut longest, suit| {
                let length = self[suit].len();

                if length > longest.length {
                    longest.length = length;
                    longest.suits = SuitFlags::from(suit);
                } else if length == longest.length {
                    longest.suits |= SuitFlags::from(suit);
                }
                longest
            },
        )
    }

    /// The opening bid this hand makes, or [`Call::Pass`]
    #[must_use]
    pub fn bid(&self) -> Call {
        if self.is_balanced() {
            self.bid_balanced()
        } else {
            self.bid_unbalanced()
        }
    }

    fn bid_balanced(&self) -> Call {
        match self.strength {
            0..=12 => Call::Pass,
            13..=14 | 18..=19 => self.bid_minor(),
            15..=17 => Call::Bid(Bid::new(1, Strain::Notrump)),
            20..=21 => Call::Bid(Bid::new(2, Strain::Notrump)),
            _ => Call::Bid(Bid::new(2, Strain::Clubs)),
        }
    }

    fn bid_unbalanced(&self) -> Call {
        let longest = self.longest_suits();

        match self.strength {
            0..=12 => match longest.length {
                6 if longest.count() == 2 => Call::Bid(Bid::new(2, longest.last().into())),
                6 if longest.first() == Suit::Clubs => Call::Pass,
                6 => Call::Bid(Bid::new(2, longest.first().into())),
                7 => Call::Bid(Bid::new(3, longest.first().into())),
                8 => Call::Bid(Bid::new(4, longest.first().into())),
                _ => Call::Pass,
            },
            13..=21 => {
                let suit = if longest.count() == 1 || longest.length == 4 {
                    longest.first()
                } else {
                    longest.last()
                };
                Call::Bid(Bid::new(1, suit.into()))
            }
            _ => Call::Bid(Bid::new(2, Strain::Clubs)),
        }
    }

    /// Bid the longer minor; with equal minors, 1♦ holding four of each and
    /// 1♣ otherwise
    fn bid_minor(&self) -> Call {
        let diamonds = self[Suit::Diamonds].len();
        let clubs = self[Suit::Clubs].len();

        let strain = if diamonds > clubs || (diamonds == clubs && diamonds == 4) {
            Strain::Diamonds
        } else {
            Strain::Clubs
        };
        Call::Bid(Bid::new(1, strain))
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Spades\t :{}", self[Suit::Spades])?;
        write!(f, "\nHearts\t :{}", self[Suit::Hearts])?;
        write!(f, "\nDiamonds :{}", self[Suit::Diamonds])?;
        write!(f, "\nClubs\t :{}", self[Suit::Clubs])
    }
}
