#![cfg(feature = "serde")]
use opener::{Bid, Call, Card, Position, Rank, Strain, Suit};

#[test]
fn cards_serialize_as_codes() -> anyhow::Result<()> {
    let card = Card::new(Suit::Hearts, Rank::Ten);
    assert_eq!(serde_json::to_string(&card)?, r#""TH""#);
    assert_eq!(serde_json::from_str::<Card>(r#""TH""#)?, card);
    assert!(serde_json::from_str::<Card>(r#""1H""#).is_err());
    Ok(())
}

#[test]
fn calls_serialize_as_text() -> anyhow::Result<()> {
    let calls = [Call::Pass, Call::Bid(Bid::new(1, Strain::Notrump))];
    let json = serde_json::to_string(&calls)?;
    assert_eq!(json, r#"["PASS","1NT"]"#);
    assert_eq!(serde_json::from_str::<[Call; 2]>(&json)?, calls);
    Ok(())
}

#[test]
fn positions_serialize_by_name() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&Position::West)?, r#""West""#);
    Ok(())
}
