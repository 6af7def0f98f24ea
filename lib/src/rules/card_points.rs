use crate::primitives::*;
use std::borrow::Borrow;

pub const N_POINTS_TOTAL: isize = 120;

pub fn points_card(card: ECard) -> isize {
    match card.schlag() {
        ESchlag::S7 | ESchlag::S8 | ESchlag::S9 => 0,
        ESchlag::Unter => 2,
        ESchlag::Ober => 3,
        ESchlag::Koenig => 4,
        ESchlag::Zehn => 10,
        ESchlag::Ass => 11,
    }
}

pub fn points_stich<Stich: Borrow<SStich>>(stich: Stich) -> isize {
    stich.borrow().iter()
        .map(|(_, card)| points_card(*card))
        .sum()
}

#[test]
fn test_points() {
    use crate::primitives::ECard::*;
    use plain_enum::PlainEnum;
    assert_eq!(<ECard as PlainEnum>::values().map(points_card).sum::<isize>(), N_POINTS_TOTAL);
    assert_eq!(points_stich(SStich::new_full(EPlayerIndex::EPI1, [HA, S7, EO, GU])), 16);
}
