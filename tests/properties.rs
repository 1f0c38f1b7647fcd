use opener::{Card, Deck, Game, Hand, Position, Rank, Suit};
use proptest::prelude::*;
use rand::SeedableRng as _;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn all_cards() -> Vec<Card> {
    Deck::standard().cards().to_vec()
}

fn any_card() -> impl Strategy<Value = Card> {
    (0..4usize, 0..13usize).prop_map(|(suit, rank)| Card::new(Suit::ASC[suit], Rank::ASC[rank]))
}

/// 13 distinct cards in random order
fn any_hand() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(all_cards(), 13).prop_shuffle()
}

fn build(cards: &[Card]) -> Hand {
    let mut hand = Hand::new();
    for &card in cards {
        hand.add_card(card);
    }
    hand
}

proptest! {
    #[test]
    fn card_code_round_trip(card in any_card()) {
        prop_assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut StdRng::seed_from_u64(seed));

        let cards: HashSet<Card> = deck.cards().iter().copied().collect();
        prop_assert_eq!(cards, all_cards().into_iter().collect::<HashSet<_>>());
    }

    #[test]
    fn deck_text_round_trip(seed in any::<u64>()) {
        let mut deck = Deck::standard();
        deck.shuffle(&mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(deck.to_string().parse::<Deck>(), Ok(deck));
    }

    #[test]
    fn deal_partitions_the_deck(seed in any::<u64>(), rotations in 0..4usize) {
        let mut game = Game::new();
        (0..rotations).for_each(|_| game.next_dealer());
        game.shuffle(&mut StdRng::seed_from_u64(seed));
        game.setup();
        prop_assert!(game.deal().is_ok());

        let mut seen = HashSet::new();
        for position in Position::ALL {
            let hand = game.hand(position);
            prop_assert_eq!(hand.len(), 13);

            for suit in Suit::ASC {
                for card in hand[suit].iter() {
                    prop_assert_eq!(card.suit, suit);
                    prop_assert!(seen.insert(*card));
                }
            }
        }
        prop_assert_eq!(seen.len(), 52);
    }

    #[test]
    fn holdings_strictly_descend(cards in any_hand()) {
        let mut hand = Hand::new();

        for card in cards {
            hand.add_card(card);
            for suit in Suit::ASC {
                prop_assert!(hand[suit].windows(2).all(|pair| pair[0].outranks(pair[1])));
            }
        }
    }

    #[test]
    fn bid_ignores_insertion_order(cards in any_hand()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        let mut sorted = cards.clone();
        sorted.sort_by_key(|card| (card.suit, card.rank));

        let hand = build(&cards);
        prop_assert_eq!(hand.strength(), build(&reversed).strength());
        prop_assert_eq!(hand.bid(), build(&reversed).bid());
        prop_assert_eq!(hand.bid(), build(&sorted).bid());
        prop_assert_eq!(&hand, &build(&sorted));
    }

    #[test]
    fn strength_counts_honors_and_length(cards in any_hand()) {
        let hand = build(&cards);
        let honors: u32 = cards.iter().map(|card| u32::from(card.rank.honor_points())).sum();
        let length: usize = Suit::ASC.iter().map(|&suit| hand[suit].len().saturating_sub(4)).sum();

        prop_assert_eq!(u32::from(hand.strength()), honors + u32::try_from(length).unwrap());
    }
}
