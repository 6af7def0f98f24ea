use crate::primitives::*;
use crate::primitives::ECard::*;
use crate::rules::{card_points::*, *};
use crate::util::*;
use itertools::{iproduct, Itertools};

fn rules_solo_herz() -> SRules {
    SRules::new(EGameType::Solo, EFarbe::Herz)
}

fn assert_stich_winner(rules: &SRules, epi_first: EPlayerIndex, acard: [ECard; EPlayerIndex::SIZE], epi_winner: EPlayerIndex) {
    let stich = SStich::new_full(epi_first, acard);
    assert_eq!(rules.winner_index(&stich), epi_winner, "{}: {}", rules, stich);
}

#[test]
fn test_stich_winner_solo() {
    let rules = rules_solo_herz();
    assert_stich_winner(&rules, EPlayerIndex::EPI0, [SA, SZ, SU, S7], EPlayerIndex::EPI2);
    assert_stich_winner(&rules, EPlayerIndex::EPI0, [SZ, SA, S8, S7], EPlayerIndex::EPI1);
    assert_stich_winner(&rules, EPlayerIndex::EPI0, [SO, SU, EO, S7], EPlayerIndex::EPI2);
    assert_stich_winner(&rules, EPlayerIndex::EPI0, [S8, GA, EA, S7], EPlayerIndex::EPI0);
    assert_stich_winner(&rules, EPlayerIndex::EPI2, [GZ, SA, S8, S7], EPlayerIndex::EPI2);
    assert_stich_winner(&rules, EPlayerIndex::EPI3, [E7, H7, EA, HU], EPlayerIndex::EPI2);
}

#[test]
fn test_stich_winner_independent_of_order() {
    let rules = rules_solo_herz();
    for (epi_first, veccard) in iproduct!(EPlayerIndex::values(), [SO, SU, EO, S7].into_iter().permutations(4)) {
        let stich = SStich::new_full(epi_first, [veccard[0], veccard[1], veccard[2], veccard[3]]);
        let epi_winner = rules.winner_index(&stich);
        assert_eq!(stich[epi_winner], EO);
    }
}

#[test]
fn test_stich_winner_other_gametypes() {
    let epi = EPlayerIndex::EPI0;
    // Wenz: only Unter are trumpf, Ober is a plain card
    let rules = SRules::new(EGameType::Wenz, EFarbe::Herz);
    assert_stich_winner(&rules, epi, [EO, EA, SU, HA], EPlayerIndex::EPI2);
    assert_stich_winner(&rules, epi, [EO, EA, EK, HA], EPlayerIndex::EPI1);
    assert_stich_winner(&rules, epi, [GU, EU, SU, HU], EPlayerIndex::EPI1);
    // Geier: only Ober
    let rules = SRules::new(EGameType::Geier, EFarbe::Herz);
    assert_stich_winner(&rules, epi, [EU, EA, E7, HO], EPlayerIndex::EPI3);
    assert_stich_winner(&rules, epi, [EU, EK, E7, H9], EPlayerIndex::EPI1);
    // Farbwenz: Unter and trumpf farbe
    let rules = SRules::new(EGameType::FarbWenz, EFarbe::Gras);
    assert_stich_winner(&rules, epi, [EA, G7, EZ, HO], EPlayerIndex::EPI1);
    assert_stich_winner(&rules, epi, [GA, G7, SU, GO], EPlayerIndex::EPI2);
    assert_stich_winner(&rules, epi, [GO, GK, G7, G9], EPlayerIndex::EPI1);
    // Farbgeier: Ober and trumpf farbe
    let rules = SRules::new(EGameType::FarbGeier, EFarbe::Schelln);
    assert_stich_winner(&rules, epi, [SU, SK, SA, GO], EPlayerIndex::EPI3);
    assert_stich_winner(&rules, epi, [EU, EA, S7, EK], EPlayerIndex::EPI2);
    // Sauspiel
    let rules = SRules::new(EGameType::Sauspiel, EFarbe::Herz);
    assert_stich_winner(&rules, epi, [HA, SU, HZ, GU], EPlayerIndex::EPI3);
}

#[test]
fn test_trumpf_membership() {
    for (egametype, efarbe) in iproduct!(EGameType::values(), EFarbe::values()) {
        let rules = SRules::new(egametype, efarbe);
        for card in <ECard as PlainEnum>::values() {
            let b_trumpf_expected = match egametype {
                EGameType::Solo | EGameType::Sauspiel => card.schlag()==ESchlag::Ober || card.schlag()==ESchlag::Unter || card.farbe()==efarbe,
                EGameType::Wenz => card.schlag()==ESchlag::Unter,
                EGameType::Geier => card.schlag()==ESchlag::Ober,
                EGameType::FarbWenz => card.schlag()==ESchlag::Unter || card.farbe()==efarbe,
                EGameType::FarbGeier => card.schlag()==ESchlag::Ober || card.farbe()==efarbe,
            };
            assert_eq!(rules.is_trumpf(card), b_trumpf_expected, "{} in {}", card, rules);
            assert_eq!(rules.trumpf_score(card).is_some(), b_trumpf_expected);
        }
        let n_trumpf = <ECard as PlainEnum>::values().filter(|&card| rules.is_trumpf(card)).count();
        assert_eq!(n_trumpf, match egametype {
            EGameType::Solo | EGameType::Sauspiel => 14,
            EGameType::Wenz | EGameType::Geier => 4,
            EGameType::FarbWenz | EGameType::FarbGeier => 11,
        });
    }
}

#[test]
fn test_trumpf_score_strict() {
    for (egametype, efarbe) in iproduct!(EGameType::values(), EFarbe::values()) {
        let rules = SRules::new(egametype, efarbe);
        let vecn_score = rules.trumpfs_in_descending_order()
            .map(|card| unwrap!(rules.trumpf_score(card)))
            .collect::<Vec<_>>();
        assert!(vecn_score.iter().tuple_windows().all(|(n_lhs, n_rhs)| n_lhs > n_rhs));
        for (card_fst, card_snd) in iproduct!(rules.trumpfs_in_descending_order(), rules.trumpfs_in_descending_order()) {
            assert_eq!(rules.beats(card_fst, card_snd), rules.trumpf_score(card_snd) > rules.trumpf_score(card_fst));
        }
    }
    let rules = rules_solo_herz();
    assert_eq!(
        rules.trumpfs_in_descending_order().collect::<Vec<_>>(),
        vec![EO, GO, HO, SO, EU, GU, HU, SU, HA, HZ, HK, H9, H8, H7]
    );
    let rules = SRules::new(EGameType::FarbWenz, EFarbe::Eichel);
    assert_eq!(
        rules.trumpfs_in_descending_order().collect::<Vec<_>>(),
        vec![EU, GU, HU, SU, EA, EZ, EK, EO, E9, E8, E7]
    );
}

#[test]
fn test_beats() {
    for (egametype, efarbe) in iproduct!(EGameType::values(), EFarbe::values()) {
        let rules = SRules::new(egametype, efarbe);
        for (card_standing, card_new) in iproduct!(<ECard as PlainEnum>::values(), <ECard as PlainEnum>::values()) {
            let b_beats = rules.beats(card_standing, card_new);
            match (rules.trumpforfarbe(card_standing), rules.trumpforfarbe(card_new)) {
                (VTrumpfOrFarbe::Trumpf, VTrumpfOrFarbe::Farbe(_)) => assert!(!b_beats),
                (VTrumpfOrFarbe::Farbe(_), VTrumpfOrFarbe::Trumpf) => assert!(b_beats),
                (VTrumpfOrFarbe::Farbe(efarbe_standing), VTrumpfOrFarbe::Farbe(efarbe_new)) => assert_eq!(
                    b_beats,
                    efarbe_standing==efarbe_new && card_new.schlag() < card_standing.schlag()
                ),
                (VTrumpfOrFarbe::Trumpf, VTrumpfOrFarbe::Trumpf) => assert_eq!(
                    b_beats,
                    rules.trumpf_score(card_new) > rules.trumpf_score(card_standing)
                ),
            }
            if card_standing==card_new {
                assert!(!b_beats);
            }
        }
    }
}

#[test]
fn test_card_is_allowed() {
    fn assert_allowed(rules: &SRules, slccard_stich: &[ECard], acard_hand: [ECard; N_CARDS_PER_PLAYER], slccard_allowed: &[ECard]) {
        let mut stich = SStich::new(EPlayerIndex::EPI0);
        for card in slccard_stich {
            stich.push(*card);
        }
        let hand = SHand::new(acard_hand);
        assert_eq!(
            hand.cards().filter(|&card| rules.card_is_allowed(card, &stich, &hand)).collect::<Vec<_>>(),
            slccard_allowed,
            "{} {}", rules, stich,
        );
        assert_eq!(
            rules.allowed_slots(&stich, &hand).map(|i_slot| unwrap!(hand.slot(i_slot))).collect::<Vec<_>>(),
            slccard_allowed,
        );
    }
    let rules = rules_solo_herz();
    let acard_hand = [EO, HU, H7, E7, EA, G9, SK, S7];
    // leading: everything
    assert_allowed(&rules, &[], acard_hand, &acard_hand);
    // trumpf led: trumpf only
    assert_allowed(&rules, &[H9], acard_hand, &[EO, HU, H7]);
    assert_allowed(&rules, &[GU, SA], acard_hand, &[EO, HU, H7]);
    // farbe led: farbe only, trumpf is no substitute
    assert_allowed(&rules, &[EK], acard_hand, &[E7, EA]);
    assert_allowed(&rules, &[SA, S9, SZ], acard_hand, &[SK, S7]);
    // Ober and Unter of a farbe do not count as that farbe
    assert_allowed(&rules, &[GA], [EO, GO, GU, HZ, E7, E8, S8, S9], &[EO, GO, GU, HZ, E7, E8, S8, S9]);
    // no trumpf on hand: free choice
    assert_allowed(&rules, &[HA], [GA, GZ, GK, G9, E7, E8, S8, S9], &[GA, GZ, GK, G9, E7, E8, S8, S9]);
    // Wenz: Ober is a plain card and must be used to follow
    let rules = SRules::new(EGameType::Wenz, EFarbe::Herz);
    assert_allowed(&rules, &[EA], [EO, EU, HA, HZ, HK, GO, G8, S7], &[EO]);
    assert_allowed(&rules, &[SU], [EO, EU, HA, HZ, HK, GO, G8, S7], &[EU]);
    // Farbgeier: trumpf farbe cards follow trumpf
    let rules = SRules::new(EGameType::FarbGeier, EFarbe::Gras);
    assert_allowed(&rules, &[EO], [GU, EU, HA, HZ, HK, SK, E8, S7], &[GU]);
    // Sauspiel: called-ass restriction is not enforced
    let rules = SRules::new(EGameType::Sauspiel, EFarbe::Herz);
    assert_allowed(&rules, &[GK], [GA, GZ, HA, HZ, HK, SK, E8, S7], &[GA, GZ]);
}

#[test]
fn test_card_not_on_hand_is_not_allowed() {
    let rules = rules_solo_herz();
    let hand = SHand::new([EO, HU, H7, E7, EA, G9, SK, S7]);
    assert!(!rules.card_is_allowed(GO, &SStich::new(EPlayerIndex::EPI1), &hand));
}

#[test]
fn test_has_trumpf_farbe() {
    let rules = rules_solo_herz();
    let hand = SHand::new([EO, GU, E7, EA, G9, SK, S7, S8]);
    assert!(rules.has_trumpf(&hand));
    assert!(rules.has_farbe(&hand, EFarbe::Eichel));
    assert!(!rules.has_farbe(&hand, EFarbe::Herz));
    let rules = SRules::new(EGameType::Geier, EFarbe::Herz);
    let hand = SHand::new([EU, GU, E7, EA, G9, SK, S7, S8]);
    assert!(!rules.has_trumpf(&hand));
    assert!(rules.has_farbe(&hand, EFarbe::Eichel));
    assert!(!rules.has_farbe(&hand, EFarbe::Herz));
}

#[test]
fn test_points_per_class() {
    for (egametype, efarbe) in iproduct!(EGameType::values(), EFarbe::values()) {
        let rules = SRules::new(egametype, efarbe);
        assert_eq!(
            rules.cards_per_trumpforfarbe().iter()
                .flat_map(|veccard| veccard.iter())
                .map(|card| points_card(*card))
                .sum::<isize>(),
            N_POINTS_TOTAL,
        );
    }
}

#[test]
fn test_display() {
    assert_eq!(format!("{}", rules_solo_herz()), "Herz Solo");
    assert_eq!(format!("{}", SRules::new(EGameType::Wenz, EFarbe::Herz)), "Wenz");
    assert_eq!(format!("{}", SRules::new(EGameType::FarbGeier, EFarbe::Eichel)), "Eichel Farbgeier");
    assert_eq!(EGameType::from_str_name("farbwenz"), Some(EGameType::FarbWenz));
    assert_eq!(EGameType::from_str_name("ramsch"), None);
}

#[test]
fn test_trumpforfarbe_enum() {
    assert_eq!(
        VTrumpfOrFarbe::values().collect::<Vec<_>>(),
        vec![
            VTrumpfOrFarbe::Trumpf,
            VTrumpfOrFarbe::Farbe(EFarbe::Eichel),
            VTrumpfOrFarbe::Farbe(EFarbe::Gras),
            VTrumpfOrFarbe::Farbe(EFarbe::Herz),
            VTrumpfOrFarbe::Farbe(EFarbe::Schelln),
        ]
    );
    assert_eq!(VTrumpfOrFarbe::checked_from_usize(VTrumpfOrFarbe::SIZE), None);
}
