use crate::primitives::*;
use crate::rules::card_points::points_stich;

/// One seat: its hand, the tricks it has won and the points therein.
#[derive(Clone, Debug)]
pub struct SPlayer {
    epi: EPlayerIndex,
    hand: SHand,
    vecstich: Vec<SStich>,
    n_points: isize,
}

impl SPlayer {
    pub fn new(epi: EPlayerIndex, hand: SHand) -> Self {
        SPlayer {
            epi,
            hand,
            vecstich: Vec::new(),
            n_points: 0,
        }
    }

    pub(crate) fn deal(&mut self, hand: SHand) {
        self.hand = hand;
        self.vecstich.clear();
        self.n_points = 0;
    }

    pub(crate) fn take_card(&mut self, i_slot: usize) -> ECard {
        self.hand.take_card(i_slot)
    }

    pub(crate) fn add_stich(&mut self, stich: SStich) {
        assert!(stich.is_full());
        assert!(self.vecstich.len() < N_CARDS_PER_PLAYER);
        self.n_points += points_stich(&stich);
        self.vecstich.push(stich);
    }

    pub fn epi(&self) -> EPlayerIndex {
        self.epi
    }
    pub fn hand(&self) -> &SHand {
        &self.hand
    }
    pub fn has_card(&self, card: ECard) -> bool {
        self.hand.contains(card)
    }
    pub fn stichs(&self) -> &[SStich] {
        &self.vecstich
    }
    pub fn stich_count(&self) -> usize {
        self.vecstich.len()
    }
    pub fn points(&self) -> isize {
        self.n_points
    }
    /// Whether `card` is among the tricks this seat has won.
    pub fn card_in_stichs(&self, card: ECard) -> bool {
        self.vecstich.iter()
            .any(|stich| stich.iter().any(|(_epi, &card_stich)| card_stich==card))
    }
    /// Panics if this seat has not won any trick yet.
    pub fn last_stich(&self) -> &SStich {
        match self.vecstich.last() {
            Some(stich) => stich,
            None => panic!("Player {} has not won any stich yet", self.epi),
        }
    }
}

#[test]
fn test_player() {
    use crate::primitives::ECard::*;
    let mut player = SPlayer::new(EPlayerIndex::EPI1, SHand::new([EA, EZ, EK, EO, EU, E9, E8, E7]));
    assert_eq!(player.take_card(0), EA);
    assert!(!player.has_card(EA));
    player.add_stich(SStich::new_full(EPlayerIndex::EPI0, [GA, EA, HZ, S7]));
    assert_eq!(player.points(), 32);
    assert_eq!(player.stich_count(), 1);
    assert!(player.card_in_stichs(HZ));
    assert!(!player.card_in_stichs(HA));
    assert_eq!(player.last_stich()[EPlayerIndex::EPI1], EA);
    player.deal(SHand::new([GA, GZ, GK, GO, GU, G9, G8, G7]));
    assert_eq!(player.points(), 0);
    assert_eq!(player.stich_count(), 0);
    assert_eq!(player.epi(), EPlayerIndex::EPI1);
}

#[test]
#[should_panic]
fn test_player_last_stich_without_stich() {
    use crate::primitives::ECard::*;
    SPlayer::new(EPlayerIndex::EPI0, SHand::new([EA, EZ, EK, EO, EU, E9, E8, E7])).last_stich();
}
