use crate::bidding::*;
use crate::game::Position;

const ONE_HEART: Call = Call::Bid(Bid::new(1, Strain::Hearts));

#[test]
fn call_text() {
    assert_eq!(Call::Pass.to_string(), "PASS");
    assert_eq!(ONE_HEART.to_string(), "1H");
    assert_eq!(Call::Bid(Bid::new(2, Strain::Notrump)).to_string(), "2NT");

    for text in ["PASS", "1C", "2D", "3H", "4S", "1NT", "7NT"] {
        assert_eq!(text.parse::<Call>().map(|call| call.to_string()).as_deref(), Ok(text));
    }

    for text in ["", "pass", "0C", "8S", "1", "1N", "NT", "12C", "1SS"] {
        assert!(text.parse::<Call>().is_err(), "{text:?} should not parse");
    }
}

#[test]
fn auction_ends_at_first_bid() {
    let mut auction = Auction::new(Position::South);
    assert_eq!(auction.next_caller(), Position::South);
    assert!(!auction.has_ended());

    assert!(auction.push(Call::Pass));
    assert!(auction.push(Call::Pass));
    assert_eq!(auction.next_caller(), Position::North);
    assert!(auction.push(ONE_HEART));
    assert!(auction.has_ended());
    assert!(!auction.push(Call::Pass));

    assert_eq!(&*auction, [Call::Pass, Call::Pass, ONE_HEART]);
    assert_eq!(
        auction.opening(),
        Some(Opening {
            bid: Bid::new(1, Strain::Hearts),
            by: Position::North,
        })
    );
    assert_eq!(auction.to_string(), "Opening bid is 1H made by NORTH");
}

#[test]
fn auction_ends_after_four_passes() {
    let mut auction = Auction::new(Position::West);

    for _ in 0..4 {
        assert!(auction.push(Call::Pass));
    }

    assert!(auction.has_ended());
    assert!(!auction.push(ONE_HEART));
    assert_eq!(auction.len(), 4);
    assert_eq!(auction.opening(), None);
    assert_eq!(auction.to_string(), "All hands passed");
}

#[test]
fn summary_waits_for_the_end() {
    let mut auction = Auction::new(Position::North);
    assert_eq!(auction.to_string(), "");

    for _ in 0..3 {
        assert!(auction.push(Call::Pass));
        assert!(!auction.has_ended());
        assert_eq!(auction.to_string(), "");
    }

    assert!(auction.push(Call::Pass));
    assert_eq!(auction.to_string(), "All hands passed");
}

#[test]
fn dealer_may_open() {
    let mut auction = Auction::new(Position::East);
    assert!(auction.push(ONE_HEART));
    assert_eq!(auction.opening().map(|opening| opening.by), Some(Position::East));
    assert_eq!(auction.dealer(), Position::East);
}
