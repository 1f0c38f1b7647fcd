use crate::card::Suit;
use crate::game::Position;
use core::fmt;
use core::ops::Deref;
use core::str::FromStr;
use thiserror::Error;

/// Denomination of a bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Strain {
    /// ♣
    Clubs,
    /// ♦
    Diamonds,
    /// ♥
    Hearts,
    /// ♠
    Spades,
    /// No trump
    Notrump,
}

impl From<Suit> for Strain {
    fn from(suit: Suit) -> Self {
        match suit {
            Suit::Clubs => Self::Clubs,
            Suit::Diamonds => Self::Diamonds,
            Suit::Hearts => Self::Hearts,
            Suit::Spades => Self::Spades,
        }
    }
}

impl fmt::Display for Strain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Clubs => "C",
            Self::Diamonds => "D",
            Self::Hearts => "H",
            Self::Spades => "S",
            Self::Notrump => "NT",
        })
    }
}

/// A contract bid: level and strain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bid {
    /// The number of tricks over six, 1 to 7
    pub level: u8,
    /// The denomination
    pub strain: Strain,
}

impl Bid {
    /// Construct a bid
    #[must_use]
    pub const fn new(level: u8, strain: Strain) -> Self {
        Self { level, strain }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.level, self.strain)
    }
}

/// A call in an opening auction
///
/// Text forms are `PASS` and bids like `1C` or `2NT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum Call {
    /// Decline to open
    Pass,
    /// Open the bidding
    Bid(Bid),
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Bid(bid) => fmt::Display::fmt(bid, f),
        }
    }
}

/// The text is neither `PASS` nor a bid from `1C` to `7NT`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid call {0:?}")]
pub struct ParseCallError(String);

impl FromStr for Call {
    type Err = ParseCallError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "PASS" {
            return Ok(Self::Pass);
        }

        let error = || ParseCallError(s.to_owned());
        let mut chars = s.chars();
        let level = chars
            .next()
            .and_then(|c| c.to_digit(10))
            .filter(|level| (1..=7).contains(level))
            .ok_or_else(error)?;

        let strain = match chars.as_str() {
            "C" => Strain::Clubs,
            "D" => Strain::Diamonds,
            "H" => Strain::Hearts,
            "S" => Strain::Spades,
            "NT" => Strain::Notrump,
            _ => return Err(error()),
        };

        // SAFETY: `level` is in 1..=7
        #[allow(clippy::cast_possible_truncation)]
        let level = level as u8;

        Ok(Self::Bid(Bid::new(level, strain)))
    }
}

/// The first bid of an auction and who made it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Opening {
    /// The opening bid
    pub bid: Bid,
    /// The player making it
    pub by: Position,
}

impl fmt::Display for Opening {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Opening bid is {} made by {}", self.bid, self.by)
    }
}

/// Calls from the dealer clockwise until someone opens
///
/// The auction ends at the first bid or after four passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Auction {
    dealer: Position,
    calls: Vec<Call>,
}

/// View the auction as a slice of calls, the dealer's first
impl Deref for Auction {
    type Target = [Call];

    fn deref(&self) -> &[Call] {
        &self.calls
    }
}

impl Auction {
    /// Construct an empty auction
    #[must_use]
    pub const fn new(dealer: Position) -> Self {
        Self {
            dealer,
            calls: Vec::new(),
        }
    }

    /// The player who calls first
    #[must_use]
    pub const fn dealer(&self) -> Position {
        self.dealer
    }

    /// The player to call next
    #[must_use]
    pub fn next_caller(&self) -> Position {
        self.dealer + self.calls.len()
    }

    /// Check if the auction is over: someone opened or all four passed
    #[must_use]
    pub fn has_ended(&self) -> bool {
        self.calls.len() >= 4 || self.calls.last().is_some_and(|call| *call != Call::Pass)
    }

    /// Add a call by [`Self::next_caller`]
    ///
    /// Returns `false` without recording the call if the auction has ended.
    pub fn push(&mut self, call: Call) -> bool {
        if self.has_ended() {
            return false;
        }
        log::debug!("{} calls {call}", self.next_caller());
        self.calls.push(call);
        true
    }

    /// The opening bid, if any
    #[must_use]
    pub fn opening(&self) -> Option<Opening> {
        self.calls.iter().enumerate().find_map(|(index, call)| match call {
            Call::Pass => None,
            Call::Bid(bid) => Some(Opening {
                bid: *bid,
                by: self.dealer + index,
            }),
        })
    }
}

/// The one-line summary of the auction, empty until it ends
impl fmt::Display for Auction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.opening() {
            Some(opening) => fmt::Display::fmt(&opening, f),
            None if self.has_ended() => f.write_str("All hands passed"),
            None => Ok(()),
        }
    }
}
