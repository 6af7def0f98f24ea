use crate::primitives::*;
use crate::rules::VTrumpfOrFarbe;
use crate::util::*;
use std::cmp::Ordering;
use arrayvec::ArrayVec;

/// Decides trump membership and trump order from a set of "picture" schlags
/// (ranked across all suits) and an optional trump suit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct STrumpfDeciderSchlag {
    slcschlag: &'static [ESchlag],
    oefarbe: Option<EFarbe>,
    veccard_trumpf_in_descending_order: ArrayVec<ECard, {ECard::SIZE}>,
}

impl STrumpfDeciderSchlag {
    pub fn new(slcschlag: &'static [ESchlag], oefarbe: Option<EFarbe>) -> Self {
        let veccard_trumpf_in_descending_order = itertools::chain(
            slcschlag.iter().copied()
                .flat_map(move |eschlag|
                    EFarbe::values()
                        .map(move |efarbe| ECard::new(efarbe, eschlag))
                ),
            oefarbe.into_iter().flat_map(|efarbe|
                ESchlag::values()
                    .map(move |eschlag| ECard::new(efarbe, eschlag))
            )
                .filter(move |card| !slcschlag.contains(&card.schlag()))
        ).collect();
        Self {
            slcschlag,
            oefarbe,
            veccard_trumpf_in_descending_order,
        }
    }

    pub fn trumpforfarbe(&self, card: ECard) -> VTrumpfOrFarbe {
        if self.slcschlag.contains(&card.schlag()) || self.oefarbe==Some(card.farbe()) {
            VTrumpfOrFarbe::Trumpf
        } else {
            VTrumpfOrFarbe::Farbe(card.farbe())
        }
    }

    pub fn trumpfs_in_descending_order(&self) -> impl Iterator<Item=ECard> + Clone + '_ {
        self.veccard_trumpf_in_descending_order.iter().copied()
    }

    /// Strictly increasing with trump strength; `None` for non-trumps.
    pub fn trumpf_score(&self, card: ECard) -> Option<usize> {
        self.veccard_trumpf_in_descending_order.iter()
            .position(|&card_trumpf| card_trumpf==card)
            .map(|i_card| self.veccard_trumpf_in_descending_order.len() - i_card)
    }

    /// `Some(Greater)` iff `card_fst` is stronger than `card_snd`.
    /// `None` for two non-trumps of different suits.
    pub fn compare_cards(&self, card_fst: ECard, card_snd: ECard) -> Option<Ordering> {
        match (self.trumpf_score(card_fst), self.trumpf_score(card_snd)) {
            (Some(n_score_fst), Some(n_score_snd)) => Some(n_score_fst.cmp(&n_score_snd)),
            (Some(_n_score_fst), None) => Some(Ordering::Greater),
            (None, Some(_n_score_snd)) => Some(Ordering::Less),
            (None, None) => if_then_some!(
                card_fst.farbe()==card_snd.farbe(),
                compare_farbcards(card_fst, card_snd)
            ),
        }
    }

    /// All 32 cards grouped by trump/suit class, strongest first.
    pub fn cards_per_trumpforfarbe(&self) -> EnumMap<VTrumpfOrFarbe, Vec<ECard>> {
        let mut maptrumpforfarbeveccard = VTrumpfOrFarbe::map_from_fn(|_trumpforfarbe| Vec::new());
        for card in <ECard as PlainEnum>::values() {
            maptrumpforfarbeveccard[self.trumpforfarbe(card)].push(card);
        }
        for veccard in maptrumpforfarbeveccard.iter_mut() {
            veccard.sort_unstable_by(|card_lhs, card_rhs|
                unwrap!(self.compare_cards(*card_lhs, *card_rhs)).reverse()
            );
        }
        maptrumpforfarbeveccard
    }
}

fn compare_farbcards(card_fst: ECard, card_snd: ECard) -> Ordering {
    assert_eq!(card_fst.farbe(), card_snd.farbe());
    static_assert!(assert(ESchlag::Ass < ESchlag::Zehn, "Schlag-Sorting can't be used here"));
    static_assert!(assert(ESchlag::Koenig < ESchlag::Ober, "Schlag-Sorting can't be used here"));
    static_assert!(assert(ESchlag::Unter < ESchlag::S9, "Schlag-Sorting can't be used here"));
    card_snd.schlag().cmp(&card_fst.schlag())
}

#[test]
fn test_trumpfs_in_descending_order() {
    use crate::primitives::ECard::*;
    fn assert_trumpfs(slcschlag: &'static [ESchlag], oefarbe: Option<EFarbe>, slccard: &[ECard]) {
        let trumpfdecider = STrumpfDeciderSchlag::new(slcschlag, oefarbe);
        assert_eq!(trumpfdecider.trumpfs_in_descending_order().collect::<Vec<_>>(), slccard);
        for (card_stronger, card_weaker) in slccard.iter().zip(slccard.iter().skip(1)) {
            assert!(trumpfdecider.trumpf_score(*card_stronger) > trumpfdecider.trumpf_score(*card_weaker));
        }
    }
    assert_trumpfs(&[ESchlag::Unter], None, &[EU, GU, HU, SU]);
    assert_trumpfs(&[ESchlag::Ober], None, &[EO, GO, HO, SO]);
    assert_trumpfs(&[ESchlag::Unter], Some(EFarbe::Gras), &[EU, GU, HU, SU, GA, GZ, GK, GO, G9, G8, G7]);
    assert_trumpfs(&[ESchlag::Ober], Some(EFarbe::Schelln), &[EO, GO, HO, SO, SA, SZ, SK, SU, S9, S8, S7]);
}

#[test]
fn test_cards_per_trumpforfarbe() {
    let maptrumpforfarbeveccard = STrumpfDeciderSchlag::new(&[ESchlag::Ober, ESchlag::Unter], Some(EFarbe::Herz)).cards_per_trumpforfarbe();
    use crate::primitives::ECard::*;
    assert_eq!(maptrumpforfarbeveccard[VTrumpfOrFarbe::Trumpf], vec![EO, GO, HO, SO, EU, GU, HU, SU, HA, HZ, HK, H9, H8, H7]);
    assert_eq!(maptrumpforfarbeveccard[VTrumpfOrFarbe::Farbe(EFarbe::Eichel)], vec![EA, EZ, EK, E9, E8, E7]);
    assert_eq!(maptrumpforfarbeveccard[VTrumpfOrFarbe::Farbe(EFarbe::Gras)], vec![GA, GZ, GK, G9, G8, G7]);
    assert_eq!(maptrumpforfarbeveccard[VTrumpfOrFarbe::Farbe(EFarbe::Herz)], Vec::<ECard>::new());
    assert_eq!(maptrumpforfarbeveccard[VTrumpfOrFarbe::Farbe(EFarbe::Schelln)], vec![SA, SZ, SK, S9, S8, S7]);
}

#[test]
fn test_compare_cards() {
    use crate::primitives::ECard::*;
    let trumpfdecider = STrumpfDeciderSchlag::new(&[ESchlag::Unter], None);
    assert_eq!(trumpfdecider.compare_cards(EO, E9), Some(Ordering::Greater));
    assert_eq!(trumpfdecider.compare_cards(SU, EA), Some(Ordering::Greater));
    assert_eq!(trumpfdecider.compare_cards(GU, EU), Some(Ordering::Less));
    assert_eq!(trumpfdecider.compare_cards(GA, EA), None);
    assert_eq!(trumpfdecider.compare_cards(GK, GZ), Some(Ordering::Less));
}
