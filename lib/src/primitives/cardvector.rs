use crate::primitives::card::*;
use crate::util::*;
use combine::{char::*, *};

pub fn farbe_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = EFarbe>
    where I::Error: ParseError<I::Item, I::Range, I::Position>, // Necessary due to rust-lang/rust#24159
{
    choice!(
        choice!(char('e'), char('E')).map(|_chr| EFarbe::Eichel),
        choice!(char('g'), char('G')).map(|_chr| EFarbe::Gras),
        choice!(char('h'), char('H')).map(|_chr| EFarbe::Herz),
        choice!(char('s'), char('S')).map(|_chr| EFarbe::Schelln)
    )
}

pub fn schlag_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ESchlag>
    where I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    choice!(
        char('7').map(|_chr| ESchlag::S7),
        char('8').map(|_chr| ESchlag::S8),
        char('9').map(|_chr| ESchlag::S9),
        choice!(char('z'), char('Z'), char('x'), char('X')).map(|_chr| ESchlag::Zehn),
        choice!(char('u'), char('U')).map(|_chr| ESchlag::Unter),
        choice!(char('o'), char('O')).map(|_chr| ESchlag::Ober),
        choice!(char('k'), char('K')).map(|_chr| ESchlag::Koenig),
        choice!(char('a'), char('A')).map(|_chr| ESchlag::Ass)
    )
}

pub fn card_parser<I: Stream<Item=char>>() -> impl Parser<Input = I, Output = ECard>
    where I::Error: ParseError<I::Item, I::Range, I::Position>,
{
    (farbe_parser(), schlag_parser()).map(|(efarbe, eschlag)| ECard::new(efarbe, eschlag))
}

pub fn parse_card(str_card: &str) -> Result<ECard, Error> {
    (spaces(), card_parser(), spaces(), eof())
        .parse(str_card)
        .map(|tploutconsumed| tploutconsumed.0.1)
        .map_err(|_err| format_err!("Could not parse card from \"{}\".", str_card))
}

/// Parses whitespace-separated cards, e.g. `"ea hz s7"`.
pub fn parse_cards<C: std::iter::Extend<ECard>+Default>(str_cards: &str) -> Result<C, Error> {
    spaces()
        .with(sep_by::<C,_,_>(card_parser(), spaces()))
        .skip(spaces())
        .skip(eof())
        .parse(str_cards)
        .map(|pairoutconsumed| pairoutconsumed.0)
        .map_err(|_err| format_err!("Could not parse cards from \"{}\".", str_cards))
}

#[test]
fn test_cardvectorparser() {
    use crate::primitives::card::ECard::*;
    assert_eq!(
        unwrap!(parse_cards::<Vec<_>>("ek Gk hZ hu s7 gZ")),
        vec![EK, GK, HZ, HU, S7, GZ]
    );
    assert_eq!(unwrap!(parse_cards::<Vec<ECard>>("  ")), Vec::<ECard>::new());
    assert!(parse_cards::<Vec<_>>("ek q7").is_err());
    assert_eq!(unwrap!(parse_card(" sx ")), SZ);
    assert!(parse_card("ea eo").is_err());
}
