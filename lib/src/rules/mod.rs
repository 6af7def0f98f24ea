pub mod card_points;
pub mod ruleset;
pub mod trumpfdecider;

#[cfg(test)]
pub mod tests;

use crate::primitives::*;
use crate::rules::trumpfdecider::STrumpfDeciderSchlag;
use crate::util::*;
use std::{cmp::Ordering, fmt};

/// The class a card belongs to when following suit: trump, or a plain suit.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VTrumpfOrFarbe {
    Trumpf,
    Farbe (EFarbe),
}

unsafe impl PlainEnum for VTrumpfOrFarbe { // TODO(plain_enum) support enums with payload
    const SIZE : usize = EFarbe::SIZE + 1;
    type EnumMapArray<T> = [T; Self::SIZE];
    unsafe fn from_usize(n: usize) -> Self {
        debug_assert!(n < Self::SIZE);
        if n==0 {
            VTrumpfOrFarbe::Trumpf
        } else {
            VTrumpfOrFarbe::Farbe(EFarbe::from_usize(n-1))
        }
    }
    fn to_usize(self) -> usize {
        match self {
            VTrumpfOrFarbe::Trumpf => 0,
            VTrumpfOrFarbe::Farbe(efarbe) => 1 + efarbe.to_usize(),
        }
    }
}

impl VTrumpfOrFarbe {
    pub fn is_trumpf(self) -> bool {
        match self {
            VTrumpfOrFarbe::Trumpf => true,
            VTrumpfOrFarbe::Farbe(_efarbe) => false,
        }
    }
}

impl fmt::Display for VTrumpfOrFarbe {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VTrumpfOrFarbe::Trumpf => write!(f, "Trumpf"),
            VTrumpfOrFarbe::Farbe(efarbe) => write!(f, "{}", efarbe),
        }
    }
}

plain_enum_mod!(modegametype, EGameType {
    Sauspiel,
    FarbGeier,
    Geier,
    FarbWenz,
    Wenz,
    Solo,
});

impl EGameType {
    pub fn str_name(self) -> &'static str {
        match self {
            Self::Sauspiel => "Sauspiel",
            Self::FarbGeier => "Farbgeier",
            Self::Geier => "Geier",
            Self::FarbWenz => "Farbwenz",
            Self::Wenz => "Wenz",
            Self::Solo => "Solo",
        }
    }

    pub fn from_str_name(str_gametype: &str) -> Option<Self> {
        Self::values().find(|egametype| egametype.str_name().eq_ignore_ascii_case(str_gametype))
    }

    /// Whether a trump suit takes part in this game type.
    pub fn has_trumpf_farbe(self) -> bool {
        match self {
            Self::Sauspiel | Self::Solo | Self::FarbWenz | Self::FarbGeier => true,
            Self::Wenz | Self::Geier => false,
        }
    }

    fn trumpf_schlags(self) -> &'static [ESchlag] {
        match self {
            Self::Sauspiel | Self::Solo => &[ESchlag::Ober, ESchlag::Unter],
            Self::Wenz | Self::FarbWenz => &[ESchlag::Unter],
            Self::Geier | Self::FarbGeier => &[ESchlag::Ober],
        }
    }
}

impl fmt::Display for EGameType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.str_name())
    }
}

/// Game type plus trump suit. The suit is kept for all game types,
/// but only affects play if `egametype.has_trumpf_farbe()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SRules {
    egametype: EGameType,
    efarbe: EFarbe,
    trumpfdecider: STrumpfDeciderSchlag,
}

impl fmt::Display for SRules {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.egametype.has_trumpf_farbe() {
            write!(f, "{} ", self.efarbe)?;
        }
        write!(f, "{}", self.egametype)
    }
}

impl SRules {
    pub fn new(egametype: EGameType, efarbe: EFarbe) -> Self {
        SRules {
            egametype,
            efarbe,
            trumpfdecider: STrumpfDeciderSchlag::new(
                egametype.trumpf_schlags(),
                if_then_some!(egametype.has_trumpf_farbe(), efarbe),
            ),
        }
    }

    pub fn gametype(&self) -> EGameType {
        self.egametype
    }
    pub fn farbe(&self) -> EFarbe {
        self.efarbe
    }

    pub fn trumpforfarbe(&self, card: ECard) -> VTrumpfOrFarbe {
        self.trumpfdecider.trumpforfarbe(card)
    }
    pub fn is_trumpf(&self, card: ECard) -> bool {
        self.trumpforfarbe(card).is_trumpf()
    }
    pub fn trumpf_score(&self, card: ECard) -> Option<usize> {
        self.trumpfdecider.trumpf_score(card)
    }
    pub fn compare_cards(&self, card_fst: ECard, card_snd: ECard) -> Option<Ordering> {
        self.trumpfdecider.compare_cards(card_fst, card_snd)
    }
    pub fn trumpfs_in_descending_order(&self) -> impl Iterator<Item=ECard> + Clone + '_ {
        self.trumpfdecider.trumpfs_in_descending_order()
    }
    pub fn cards_per_trumpforfarbe(&self) -> EnumMap<VTrumpfOrFarbe, Vec<ECard>> {
        self.trumpfdecider.cards_per_trumpforfarbe()
    }

    /// Whether `card_new` takes the trick from the currently winning `card_standing`.
    pub fn beats(&self, card_standing: ECard, card_new: ECard) -> bool {
        Some(Ordering::Less)==self.compare_cards(card_standing, card_new)
    }

    pub fn has_trumpf(&self, hand: &SHand) -> bool {
        hand.contains_pred(|card| self.is_trumpf(card))
    }
    /// Whether `hand` holds a non-trump card of `efarbe`.
    pub fn has_farbe(&self, hand: &SHand, efarbe: EFarbe) -> bool {
        hand.contains_pred(|card| VTrumpfOrFarbe::Farbe(efarbe)==self.trumpforfarbe(card))
    }

    // TODO Sauspiel: a player holding the called Ass must not discard it, nor lead
    // another card of its suit unless running away.
    fn called_ass_allows(&self, _card: ECard, _stich: &SStich, _hand: &SHand) -> bool {
        true
    }

    /// Whether `card` (which must be on `hand`) may be played into `stich`.
    pub fn card_is_allowed(&self, card: ECard, stich: &SStich, hand: &SHand) -> bool {
        assert!(!stich.is_full());
        if !hand.contains(card) {
            return false;
        }
        let b_follows = if stich.is_empty() {
            true
        } else {
            let trumpforfarbe_first = self.trumpforfarbe(*stich.first());
            trumpforfarbe_first==self.trumpforfarbe(card)
                || !hand.contains_pred(|card_hand| trumpforfarbe_first==self.trumpforfarbe(card_hand))
        };
        b_follows && (EGameType::Sauspiel!=self.egametype || self.called_ass_allows(card, stich, hand))
    }

    /// Slots of `hand` whose cards may be played into `stich`.
    pub fn allowed_slots<'slf>(&'slf self, stich: &'slf SStich, hand: &'slf SHand) -> impl Iterator<Item=usize> + 'slf {
        hand.slots()
            .filter(move |&(_i_slot, card)| self.card_is_allowed(card, stich, hand))
            .map(|(i_slot, _card)| i_slot)
    }

    pub fn preliminary_winner_index(&self, stich: &SStich) -> EPlayerIndex {
        let mut epi_best = stich.first_playerindex();
        for (epi, card) in stich.iter().skip(1) {
            if self.beats(stich[epi_best], *card) {
                epi_best = epi;
            }
        }
        epi_best
    }

    pub fn winner_index(&self, stich: &SStich) -> EPlayerIndex {
        assert!(stich.is_full());
        self.preliminary_winner_index(stich)
    }
}
