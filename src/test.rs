mod bidding;

use crate::{Card, Hand};

/// Build a hand from space-separated card codes
fn hand(codes: &str) -> Hand {
    let mut hand = Hand::new();
    for code in codes.split_whitespace() {
        assert!(hand.add_card(code.parse::<Card>().unwrap()));
    }
    hand
}
