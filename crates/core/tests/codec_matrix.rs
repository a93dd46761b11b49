use cards_core::{decode, Card, Deck, DeckError, DeckOptions, Rank, RngState, Suit};

macro_rules! decode_case {
    ($name:ident, $code:expr, $rank:expr, $suit:expr) => {
        #[test]
        fn $name() {
            assert_eq!(decode($code), Ok(($rank, $suit)));
        }
    };
}

macro_rules! invalid_case {
    ($name:ident, $code:expr) => {
        #[test]
        fn $name() {
            assert_eq!(
                decode($code),
                Err(DeckError::InvalidCardCode {
                    code: $code.to_string()
                })
            );
        }
    };
}

decode_case!(decode_ace_spades, "AS", Rank::Ace, Suit::Spades);
decode_case!(decode_three_clubs, "3C", Rank::Three, Suit::Clubs);
decode_case!(decode_eight_hearts, "8H", Rank::Eight, Suit::Hearts);
decode_case!(decode_queen_diamonds, "QD", Rank::Queen, Suit::Diamonds);
decode_case!(decode_two_hearts, "2H", Rank::Two, Suit::Hearts);
decode_case!(decode_nine_spades, "9S", Rank::Nine, Suit::Spades);
decode_case!(decode_jack_clubs, "JC", Rank::Jack, Suit::Clubs);
decode_case!(decode_king_hearts, "KH", Rank::King, Suit::Hearts);

invalid_case!(invalid_zero_m, "0M");
invalid_case!(invalid_suit, "AX");
invalid_case!(invalid_rank, "XS");
invalid_case!(invalid_zero_rank, "0S");
invalid_case!(invalid_one_rank, "1S");
invalid_case!(invalid_ten_three_chars, "10S");
invalid_case!(invalid_lowercase, "as");
invalid_case!(invalid_empty, "");
invalid_case!(invalid_single_char, "A");

#[test]
fn display_form_of_jack_of_hearts() {
    let view = Card::new(Rank::Jack, Suit::Hearts).view();
    assert_eq!(view.value, "JACK");
    assert_eq!(view.suit, "HEARTS");
    assert_eq!(view.code, "JH");
}

#[test]
fn new_custom_deck_in_requested_order() {
    let options = DeckOptions {
        shuffle: false,
        custom: true,
        cards: ["AS", "QS", "2H", "7D", "4C"]
            .iter()
            .map(|code| code.to_string())
            .collect(),
    };
    let deck = Deck::new(&options, &mut RngState::from_seed(123)).expect("deck");
    assert_eq!(
        deck.cards(),
        &[
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Queen, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Clubs),
        ]
    );
}

#[test]
fn new_shuffled_deck_matches_seeded_shuffle() {
    let options = DeckOptions {
        shuffle: true,
        custom: false,
        cards: Vec::new(),
    };
    let deck = Deck::new(&options, &mut RngState::from_seed(7)).expect("deck");
    let mut expected = Deck::standard52();
    expected.shuffle(&mut RngState::from_seed(7));
    assert_eq!(deck, expected);
}

#[test]
fn new_custom_deck_propagates_bad_code() {
    let options = DeckOptions {
        shuffle: true,
        custom: true,
        cards: vec!["AS".to_string(), "0M".to_string()],
    };
    let err = Deck::new(&options, &mut RngState::from_seed(1)).unwrap_err();
    assert_eq!(err.to_string(), "Card code 0M is invalid");
}

#[test]
fn draw_from_three_card_deck() {
    let deck = Deck::from_codes(&["AS", "3C", "9H"]).expect("deck");
    assert!(matches!(
        deck.draw(4),
        Err(DeckError::DrawSizeExceeded { .. })
    ));
    let (drawn, remaining) = deck.draw(3).expect("draw all");
    assert_eq!(drawn, deck);
    assert!(remaining.is_empty());
    let (drawn, remaining) = deck.draw(0).expect("draw none");
    assert!(drawn.is_empty());
    assert_eq!(remaining, deck);
}

#[test]
fn options_deserialize_with_defaults() {
    let options: DeckOptions = serde_json::from_str(r#"{"shuffle":true}"#).expect("parse");
    assert!(options.shuffle);
    assert!(!options.custom);
    assert!(options.cards.is_empty());
}

#[test]
fn deck_serializes_as_plain_list() {
    let deck = Deck::from_codes(&["AS"]).expect("deck");
    let body = serde_json::to_string(&deck).expect("serialize");
    assert_eq!(body, r#"[{"rank":"Ace","suit":"Spades"}]"#);
    let back: Deck = serde_json::from_str(&body).expect("parse");
    assert_eq!(back, deck);
}

#[test]
fn seeded_shuffle_has_fixed_order() {
    let mut deck = Deck::from_codes(&["AS", "2S", "3S", "4S", "5S"]).expect("deck");
    deck.shuffle(&mut RngState::from_seed(123));
    let codes: Vec<_> = deck.iter().map(Card::code).collect();
    assert_eq!(codes, ["4S", "2S", "5S", "AS", "3S"]);
}
