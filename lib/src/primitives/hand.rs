use crate::primitives::{card::*, eplayerindex::*};
use crate::util::*;
use itertools::Itertools;
use std::fmt;

pub const N_CARDS_PER_PLAYER: usize = ECard::SIZE / EPlayerIndex::SIZE;

/// Eight slots, addressed by index. Playing a card empties its slot; the other slots keep their position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SHand {
    aocard: [Option<ECard>; N_CARDS_PER_PLAYER],
}

impl SHand {
    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        let mut setcard = EnumSet::new_empty();
        for card in self.cards() {
            verify!(setcard.insert(card));
        }
    }

    pub fn new(acard: [ECard; N_CARDS_PER_PLAYER]) -> SHand {
        let hand = SHand {
            aocard: acard.map(Some),
        };
        #[cfg(debug_assertions)]hand.assert_invariant();
        hand
    }
    pub fn new_from_iter(itcard: impl IntoIterator<Item=ECard>) -> SHand {
        let mut itcard = itcard.into_iter();
        let hand = SHand {
            aocard: std::array::from_fn(|_i_slot| Some(unwrap!(itcard.next()))),
        };
        assert!(itcard.next().is_none());
        #[cfg(debug_assertions)]hand.assert_invariant();
        hand
    }

    pub fn slot(&self, i_slot: usize) -> Option<ECard> {
        assert!(i_slot < N_CARDS_PER_PLAYER, "slot {} out of range", i_slot);
        self.aocard[i_slot]
    }
    /// Empties slot `i_slot`; panics if it holds no card.
    pub fn take_card(&mut self, i_slot: usize) -> ECard {
        assert!(i_slot < N_CARDS_PER_PLAYER, "slot {} out of range", i_slot);
        match self.aocard[i_slot].take() {
            Some(card) => card,
            None => panic!("slot {} is empty", i_slot),
        }
    }
    pub fn contains(&self, card_check: ECard) -> bool {
        self.contains_pred(|card| card==card_check)
    }
    pub fn contains_pred(&self, pred: impl Fn(ECard)->bool) -> bool {
        self.cards().any(pred)
    }
    pub fn position(&self, card_check: ECard) -> Option<usize> {
        self.slots().find(|&(_i_slot, card)| card==card_check).map(|(i_slot, _card)| i_slot)
    }
    /// Occupied slots as `(i_slot, card)`.
    pub fn slots(&self) -> impl Iterator<Item=(usize, ECard)> + Clone + '_ {
        self.aocard.iter().enumerate()
            .filter_map(|(i_slot, ocard)| ocard.map(|card| (i_slot, card)))
    }
    pub fn cards(&self) -> impl Iterator<Item=ECard> + Clone + '_ {
        self.aocard.iter().flatten().copied()
    }
    pub fn count(&self) -> usize {
        self.cards().count()
    }
    pub fn is_empty(&self) -> bool {
        self.count()==0
    }
}

impl fmt::Display for SHand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.aocard.iter().format_with(" ", |ocard, formatter| {
            match ocard {
                Some(card) => formatter(card),
                None => formatter(&"__"),
            }
        }))
    }
}

#[test]
fn test_hand() {
    use crate::primitives::card::ECard::*;
    let mut hand = SHand::new([S7, S8, S9, SZ, SU, SO, SK, SA]);
    assert_eq!(hand.count(), 8);
    assert!(hand.contains(SZ));
    assert_eq!(hand.take_card(3), SZ);
    assert!(!hand.contains(SZ));
    assert_eq!(hand.slot(3), None);
    assert_eq!(hand.slot(4), Some(SU));
    assert_eq!(hand.position(SA), Some(7));
    assert_eq!(hand.count(), 7);
    assert!(hand.contains_pred(|card| card.schlag()==ESchlag::Ober));
    assert_eq!(format!("{}", hand), "S7 S8 S9 __ SU SO SK SA");
    for i_slot in [0, 1, 2, 4, 5, 6, 7] {
        hand.take_card(i_slot);
    }
    assert!(hand.is_empty());
}

#[test]
#[should_panic]
fn test_hand_take_empty_slot() {
    use crate::primitives::card::ECard::*;
    let mut hand = SHand::new([S7, S8, S9, SZ, SU, SO, SK, SA]);
    hand.take_card(0);
    hand.take_card(0);
}

#[test]
#[should_panic]
fn test_hand_slot_out_of_range() {
    use crate::primitives::card::ECard::*;
    SHand::new([S7, S8, S9, SZ, SU, SO, SK, SA]).slot(8);
}
