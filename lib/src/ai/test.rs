use crate::ai::*;
use crate::game::*;
use crate::primitives::ECard::*;
use crate::rules::{EGameType, SRules, VTrumpfOrFarbe};
use crate::util::*;
use itertools::iproduct;
use rand::{rngs::StdRng, SeedableRng};
use std::{cell::RefCell, rc::Rc};

/// Checks `observer` against the true hands.
fn assert_observer_sound(game: &SGame, observer: &SAiObserver) {
    let rules = game.rules();
    for trumpforfarbe in VTrumpfOrFarbe::values() {
        let n_in_hand = |epi: EPlayerIndex| game.player(epi).hand().cards()
            .filter(|&card| trumpforfarbe==rules.trumpforfarbe(card))
            .count();
        assert_eq!(
            observer.unseen_count(trumpforfarbe),
            EPlayerIndex::values().filter(|&epi| epi!=observer.epi()).map(n_in_hand).sum::<usize>(),
            "Observer {}: unseen {}", observer.epi(), trumpforfarbe,
        );
        for epi in EPlayerIndex::values() {
            match observer.knowledge(epi, trumpforfarbe) {
                EKnowledge::Unknown => assert_ne!(epi, observer.epi()),
                EKnowledge::Frei => assert_eq!(n_in_hand(epi), 0, "{} wrongly frei in {}", epi, trumpforfarbe),
                EKnowledge::NotFrei => assert!(0 < n_in_hand(epi), "{} wrongly not frei in {}", epi, trumpforfarbe),
            }
            if 0==observer.unseen_count(trumpforfarbe) && epi!=observer.epi() {
                assert!(observer.is_frei(epi, trumpforfarbe));
            }
        }
    }
}

fn play(game: &mut SGame, card: ECard) {
    let epi = game.current_playerindex();
    let i_slot = unwrap!(game.player(epi).hand().position(card));
    game.play_card(epi, i_slot);
}

#[test]
fn test_observer_random_games() {
    for (egametype, efarbe, n_seed) in iproduct!(EGameType::values(), EFarbe::values(), 0..3) {
        let mut game = SGame::new(SRules::new(egametype, efarbe), Some(n_seed));
        let mapepiai = EPlayerIndex::map_from_fn(|epi| Rc::new(RefCell::new(
            SAiObserving::new(epi, SAiRandom::new(epi, n_seed))
        )));
        for epi in EPlayerIndex::values() {
            game.register_ai(epi, mapepiai[epi].clone());
        }
        let mut mapepiobserver_before = EPlayerIndex::map_from_fn(|epi| mapepiai[epi].borrow().observer().clone());
        while game.play_ai_card().is_some() {
            for epi in EPlayerIndex::values() {
                let ai = mapepiai[epi].borrow();
                let observer = ai.observer();
                assert_observer_sound(&game, observer);
                for (epi_other, trumpforfarbe) in iproduct!(EPlayerIndex::values(), VTrumpfOrFarbe::values()) {
                    if mapepiobserver_before[epi].is_frei(epi_other, trumpforfarbe) {
                        assert!(observer.is_frei(epi_other, trumpforfarbe));
                    }
                }
                mapepiobserver_before[epi] = observer.clone();
            }
        }
        assert!(game.game_finished());
        for ai in mapepiai.iter() {
            // nothing unseen left
            let ai = ai.borrow();
            assert!(VTrumpfOrFarbe::values().all(|trumpforfarbe| 0==ai.observer().unseen_count(trumpforfarbe)));
        }
    }
}

#[test]
fn test_observer_registered_mid_deal() {
    for (egametype, n_seed) in iproduct!(EGameType::values(), 20..24) {
        let mut game = SGame::new(SRules::new(egametype, EFarbe::Gras), Some(n_seed));
        for epi in EPlayerIndex::values() {
            game.register_ai(epi, Rc::new(RefCell::new(SAiFirstAllowed::new(epi))));
        }
        for _ in 0..10 {
            verify!(game.play_ai_card());
        }
        let epi_observer = EPlayerIndex::EPI2;
        let ai = Rc::new(RefCell::new(SAiObserving::new(epi_observer, SAiFirstAllowed::new(epi_observer))));
        game.register_ai(epi_observer, ai.clone());
        assert_observer_sound(&game, ai.borrow().observer());
        while game.play_ai_card().is_some() {
            assert_observer_sound(&game, ai.borrow().observer());
        }
    }
}

#[test]
fn test_observer_exhaustion_and_not_following() {
    let mut game = SGame::new_with_hands(
        SRules::new(EGameType::Wenz, EFarbe::Herz),
        EPlayerIndex::map_from_raw([
            [EU, GU, HU, EA, EZ, EK, EO, E9],
            [SU, GA, GZ, GK, GO, G9, G8, G7],
            [E8, E7, HA, HZ, HK, HO, H9, H8],
            [H7, SA, SZ, SK, SO, S9, S8, S7],
        ]).map_into(SHand::new),
        StdRng::seed_from_u64(0),
    );
    let observer = Rc::new(RefCell::new(SAiObserver::new(EPlayerIndex::EPI0)));
    game.register_ai(EPlayerIndex::EPI0, observer.clone());
    let trumpf = VTrumpfOrFarbe::Trumpf;
    let eichel = VTrumpfOrFarbe::Farbe(EFarbe::Eichel);
    assert_eq!(observer.borrow().unseen_count(trumpf), 1);
    assert_eq!(observer.borrow().unseen_count(eichel), 2);
    play(&mut game, EU);
    assert_eq!(observer.borrow().knowledge(EPlayerIndex::EPI1, trumpf), EKnowledge::Unknown);
    // last unseen trumpf: everybody else is frei, even before playing
    play(&mut game, SU);
    assert_eq!(observer.borrow().unseen_count(trumpf), 0);
    for epi in [EPlayerIndex::EPI1, EPlayerIndex::EPI2, EPlayerIndex::EPI3] {
        assert!(observer.borrow().is_frei(epi, trumpf));
    }
    assert_eq!(observer.borrow().knowledge(EPlayerIndex::EPI0, trumpf), EKnowledge::NotFrei);
    play(&mut game, E8);
    play(&mut game, H7);
    assert_eq!(game.last_stich_winner(), Some(EPlayerIndex::EPI0));
    assert_eq!(observer.borrow().unseen_count(eichel), 1);
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI3, eichel));
    play(&mut game, EA);
    play(&mut game, GA);
    assert!(observer.borrow().is_frei(EPlayerIndex::EPI1, eichel));
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI2, eichel));
    assert!(!observer.borrow().is_frei(EPlayerIndex::EPI3, eichel));
    play(&mut game, E7);
    assert_eq!(observer.borrow().unseen_count(eichel), 0);
    assert!(observer.borrow().is_frei(EPlayerIndex::EPI2, eichel));
    assert!(observer.borrow().is_frei(EPlayerIndex::EPI3, eichel));
    play(&mut game, SA);
    assert_observer_sound(&game, &observer.borrow());
    // new deal forgets everything
    game.reset();
    let observer = observer.borrow();
    assert_observer_sound(&game, &observer);
    assert!(EPlayerIndex::values()
        .filter(|&epi| epi!=EPlayerIndex::EPI0)
        .all(|epi| VTrumpfOrFarbe::values().all(|trumpforfarbe|
            EKnowledge::Unknown==observer.knowledge(epi, trumpforfarbe)
            || 0==observer.unseen_count(trumpforfarbe)
        ))
    );
}

#[test]
fn test_observer_follows_rule_changes() {
    let mut game = SGame::new(SRules::new(EGameType::Solo, EFarbe::Herz), Some(7));
    let observer = Rc::new(RefCell::new(SAiObserver::new(EPlayerIndex::EPI3)));
    game.register_ai(EPlayerIndex::EPI3, observer.clone());
    assert_eq!(
        VTrumpfOrFarbe::values().map(|trumpforfarbe| observer.borrow().unseen_count(trumpforfarbe)).sum::<usize>(),
        ECard::SIZE - N_CARDS_PER_PLAYER
    );
    unwrap!(game.set_rules(SRules::new(EGameType::Geier, EFarbe::Herz)));
    let n_trumpf_own = game.player(EPlayerIndex::EPI3).hand().cards()
        .filter(|card| ESchlag::Ober==card.schlag())
        .count();
    assert_eq!(observer.borrow().unseen_count(VTrumpfOrFarbe::Trumpf), 4 - n_trumpf_own);
    assert_observer_sound(&game, &observer.borrow());
}

#[test]
fn test_observing_delegates_choice() {
    let mut game = SGame::new(SRules::new(EGameType::FarbWenz, EFarbe::Eichel), Some(2));
    let mut ai = SAiObserving::new(EPlayerIndex::EPI0, SAiFirstAllowed::new(EPlayerIndex::EPI0));
    ai.reset_state(&game);
    assert_eq!(ai.observer().epi(), EPlayerIndex::EPI0);
    let i_slot = ai.choose_card(&game);
    assert_eq!(Some(i_slot), game.allowed_slots(EPlayerIndex::EPI0).next());
    game.play_card(EPlayerIndex::EPI0, i_slot);
    ai.notify_played(&game, EPlayerIndex::EPI0);
    assert_observer_sound(&game, ai.observer());
}
