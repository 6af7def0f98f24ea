use crate::ai::TAi;
use crate::game::SGame;
use crate::primitives::*;
use crate::rules::VTrumpfOrFarbe;
use crate::util::*;
use std::fmt;

plain_enum_mod!(modeknowledge, EKnowledge {
    Unknown,
    Frei,
    NotFrei,
});

impl fmt::Display for EKnowledge {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            EKnowledge::Unknown => "unknown",
            EKnowledge::Frei => "yes",
            EKnowledge::NotFrei => "no",
        })
    }
}

/// Infers, from legal play only, which seats cannot hold trumpf or a farbe anymore.
///
/// For its own seat, the observer knows exactly (from the hand). For others, it only ever
/// learns `Frei`, and never forgets it within a deal:
/// * a seat not following the first card of a stich is frei in that card's class
/// * once all cards of a class outside its own hand have been seen, all others are frei in it
///
/// The observer never plays; combine it with an actor via `SAiObserving`.
#[derive(Clone, Debug)]
pub struct SAiObserver {
    epi: EPlayerIndex,
    mapepimapknowledge: EnumMap<EPlayerIndex, EnumMap<VTrumpfOrFarbe, EKnowledge>>,
    mapn_unseen: EnumMap<VTrumpfOrFarbe, usize>,
}

impl SAiObserver {
    pub fn new(epi: EPlayerIndex) -> Self {
        SAiObserver {
            epi,
            mapepimapknowledge: EPlayerIndex::map_from_fn(|_epi| VTrumpfOrFarbe::map_from_fn(|_trumpforfarbe| EKnowledge::Unknown)),
            mapn_unseen: VTrumpfOrFarbe::map_from_fn(|_trumpforfarbe| 0),
        }
    }

    pub fn epi(&self) -> EPlayerIndex {
        self.epi
    }
    pub fn knowledge(&self, epi: EPlayerIndex, trumpforfarbe: VTrumpfOrFarbe) -> EKnowledge {
        self.mapepimapknowledge[epi][trumpforfarbe]
    }
    pub fn is_frei(&self, epi: EPlayerIndex, trumpforfarbe: VTrumpfOrFarbe) -> bool {
        EKnowledge::Frei==self.knowledge(epi, trumpforfarbe)
    }
    /// Cards of `trumpforfarbe` neither on own hand nor seen on the table.
    pub fn unseen_count(&self, trumpforfarbe: VTrumpfOrFarbe) -> usize {
        self.mapn_unseen[trumpforfarbe]
    }

    fn set_frei(&mut self, epi: EPlayerIndex, trumpforfarbe: VTrumpfOrFarbe) {
        debug_assert_ne!(epi, self.epi);
        if assign_neq(&mut self.mapepimapknowledge[epi][trumpforfarbe], EKnowledge::Frei) {
            debug!("Observer {}: Player {} is frei in {}", self.epi, epi, trumpforfarbe);
        }
    }

    fn update_own_knowledge(&mut self, game: &SGame) {
        let rules = game.rules();
        let hand = game.player(self.epi).hand();
        for trumpforfarbe in VTrumpfOrFarbe::values() {
            self.mapepimapknowledge[self.epi][trumpforfarbe] = if hand.contains_pred(|card| trumpforfarbe==rules.trumpforfarbe(card)) {
                EKnowledge::NotFrei
            } else {
                EKnowledge::Frei
            };
        }
    }

    fn mark_exhausted_frei(&mut self) {
        let epi_self = self.epi;
        for trumpforfarbe in VTrumpfOrFarbe::values() {
            if 0==self.mapn_unseen[trumpforfarbe] {
                for epi in EPlayerIndex::values().filter(|&epi| epi!=epi_self) {
                    self.set_frei(epi, trumpforfarbe);
                }
            }
        }
    }
}

impl TAi for SAiObserver {
    fn reset_state(&mut self, game: &SGame) {
        let rules = game.rules();
        let hand = game.player(self.epi).hand();
        let setcard_discarded = game.discarded_cards();
        let stich = game.current_stich();
        self.mapepimapknowledge = EPlayerIndex::map_from_fn(|_epi| VTrumpfOrFarbe::map_from_fn(|_trumpforfarbe| EKnowledge::Unknown));
        let mapveccard = rules.cards_per_trumpforfarbe();
        self.mapn_unseen = VTrumpfOrFarbe::map_from_fn(|trumpforfarbe| {
            mapveccard[trumpforfarbe].iter()
                .filter(|&&card|
                    !hand.contains(card)
                    && !setcard_discarded.contains(card)
                    && !stich.iter().any(|(_epi, &card_stich)| card_stich==card)
                )
                .count()
        });
        self.update_own_knowledge(game);
        self.mark_exhausted_frei();
    }

    fn notify_played(&mut self, game: &SGame, epi: EPlayerIndex) {
        let rules = game.rules();
        let stich = game.current_stich();
        let card = stich[epi];
        if epi==self.epi {
            self.update_own_knowledge(game);
            return;
        }
        let trumpforfarbe_card = rules.trumpforfarbe(card);
        let n_unseen = &mut self.mapn_unseen[trumpforfarbe_card];
        assert!(0 < *n_unseen, "Observer {}: {} cannot be unseen", self.epi, card);
        *n_unseen -= 1;
        self.mark_exhausted_frei();
        if epi!=stich.first_playerindex() {
            let trumpforfarbe_first = rules.trumpforfarbe(*stich.first());
            if trumpforfarbe_first!=trumpforfarbe_card {
                self.set_frei(epi, trumpforfarbe_first);
            }
        }
    }

    fn choose_card(&mut self, _game: &SGame) -> usize {
        panic!("SAiObserver for player {} cannot choose cards", self.epi)
    }
}

#[test]
fn test_observer_basics() {
    use crate::primitives::ECard::*;
    use crate::rules::{EGameType, SRules};
    let mut game = SGame::new_with_hands(
        SRules::new(EGameType::Solo, EFarbe::Herz),
        EPlayerIndex::map_from_raw([
            [EO, EU, HA, HZ, HK, H9, H8, H7],
            [GO, GU, E7, G7, S7, EA, EZ, EK],
            [HO, HU, E8, G8, S8, GA, GZ, GK],
            [SO, SU, E9, G9, S9, SA, SZ, SK],
        ]).map_into(SHand::new),
        rand::SeedableRng::seed_from_u64(0),
    );
    let observer = std::rc::Rc::new(std::cell::RefCell::new(SAiObserver::new(EPlayerIndex::EPI1)));
    game.register_ai(EPlayerIndex::EPI1, observer.clone());
    {
        let observer = observer.borrow();
        // own seat known exactly
        assert_eq!(observer.knowledge(EPlayerIndex::EPI1, VTrumpfOrFarbe::Farbe(EFarbe::Herz)), EKnowledge::Frei);
        assert_eq!(observer.knowledge(EPlayerIndex::EPI1, VTrumpfOrFarbe::Trumpf), EKnowledge::NotFrei);
        assert_eq!(observer.knowledge(EPlayerIndex::EPI0, VTrumpfOrFarbe::Trumpf), EKnowledge::Unknown);
        // 14 trumpf, 2 on own hand
        assert_eq!(observer.unseen_count(VTrumpfOrFarbe::Trumpf), 12);
        assert_eq!(observer.unseen_count(VTrumpfOrFarbe::Farbe(EFarbe::Eichel)), 2);
        // no herz outside trumpf: everybody frei
        assert_eq!(observer.unseen_count(VTrumpfOrFarbe::Farbe(EFarbe::Herz)), 0);
        assert!(observer.is_frei(EPlayerIndex::EPI3, VTrumpfOrFarbe::Farbe(EFarbe::Herz)));
    }
    // EPI0 leads HA, EPI1 (observer) must play trumpf: GU
    game.play_card(EPlayerIndex::EPI0, 2);
    game.play_card(EPlayerIndex::EPI1, 1);
    game.play_card(EPlayerIndex::EPI2, 0);
    game.play_card(EPlayerIndex::EPI3, 0);
    assert_eq!(game.last_stich_winner(), Some(EPlayerIndex::EPI2));
    assert_eq!(observer.borrow().unseen_count(VTrumpfOrFarbe::Trumpf), 9);
    // EPI2 won with HO, leads GA; EPI3 plays G9, EPI0 has no gras: plays H7; EPI1 plays G7
    game.play_card(EPlayerIndex::EPI2, 5);
    game.play_card(EPlayerIndex::EPI3, 3);
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI0, VTrumpfOrFarbe::Farbe(EFarbe::Gras)));
    game.play_card(EPlayerIndex::EPI0, 7);
    assert!(observer.borrow().is_frei(EPlayerIndex::EPI0, VTrumpfOrFarbe::Farbe(EFarbe::Gras)));
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI2, VTrumpfOrFarbe::Farbe(EFarbe::Gras)));
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI3, VTrumpfOrFarbe::Farbe(EFarbe::Gras)));
    game.play_card(EPlayerIndex::EPI1, 3);
    assert_eq!(observer.borrow().knowledge(EPlayerIndex::EPI1, VTrumpfOrFarbe::Farbe(EFarbe::Gras)), EKnowledge::Frei);
}

#[test]
#[should_panic]
fn test_observer_cannot_choose() {
    use crate::rules::{EGameType, SRules};
    let game = SGame::new(SRules::new(EGameType::Wenz, EFarbe::Herz), Some(1));
    SAiObserver::new(EPlayerIndex::EPI0).choose_card(&game);
}
