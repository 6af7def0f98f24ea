pub mod player;


use crate::ai::TAi;
use crate::primitives::*;
use crate::rules::{card_points::*, SRules};
use crate::util::*;
use self::player::SPlayer;
use itertools::Itertools;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use std::{cell::RefCell, rc::Rc};

pub type SAiHandle = Rc<RefCell<dyn TAi>>;

pub fn shuffled_cards(rng: &mut StdRng) -> Vec<ECard> {
    let mut veccard = <ECard as PlainEnum>::values().collect::<Vec<_>>();
    veccard.shuffle(rng);
    veccard
}

/// Deals `veccard` (which must hold all cards) in consecutive chunks, one per seat.
pub fn deal_hands(veccard: &[ECard]) -> EnumMap<EPlayerIndex, SHand> {
    assert_eq!(veccard.len(), ECard::SIZE);
    EPlayerIndex::map_from_fn(|epi| {
        SHand::new_from_iter(
            veccard[epi.to_usize()*N_CARDS_PER_PLAYER..][..N_CARDS_PER_PLAYER].iter().copied()
        )
    })
}

/// One hand of play: 8 stichs of 4 cards each.
///
/// The game drives registered AIs synchronously: every card played is broadcast
/// to all of them (with the card already on the table), and every deal resets them.
pub struct SGame {
    rules: SRules,
    mapepiplayer: EnumMap<EPlayerIndex, SPlayer>,
    stich: SStich,
    epi_current: EPlayerIndex,
    oepi_last_stich_winner: Option<EPlayerIndex>,
    n_stich: usize,
    mapepioai: EnumMap<EPlayerIndex, Option<SAiHandle>>,
    rng: StdRng,
}

impl SGame {
    /// Creates the game and deals the first hand. Without seed, the generator is seeded from the OS.
    pub fn new(rules: SRules, on_seed: Option<u64>) -> Self {
        let mut rng = match on_seed {
            Some(n_seed) => StdRng::seed_from_u64(n_seed),
            None => StdRng::from_os_rng(),
        };
        let mapepihand = deal_hands(&shuffled_cards(&mut rng));
        Self::new_with_hands(rules, mapepihand, rng)
    }

    /// Creates the game with predetermined hands. Subsequent `reset`s shuffle using `rng`.
    pub fn new_with_hands(rules: SRules, mapepihand: EnumMap<EPlayerIndex, SHand>, rng: StdRng) -> Self {
        let mut game = SGame {
            rules,
            mapepiplayer: EPlayerIndex::map_from_fn(|epi| SPlayer::new(epi, mapepihand[epi].clone())),
            stich: SStich::new(EPlayerIndex::EPI0),
            epi_current: EPlayerIndex::EPI0,
            oepi_last_stich_winner: None,
            n_stich: 0,
            mapepioai: EPlayerIndex::map_from_fn(|_epi| None),
            rng,
        };
        game.reset_with_hands(mapepihand);
        game
    }

    /// Shuffles, deals and resets all registered AIs.
    pub fn reset(&mut self) {
        let mapepihand = deal_hands(&shuffled_cards(&mut self.rng));
        self.reset_with_hands(mapepihand);
    }

    /// Like `reset`, but with given hands instead of shuffling.
    pub fn reset_with_hands(&mut self, mapepihand: EnumMap<EPlayerIndex, SHand>) {
        for (epi, hand) in EPlayerIndex::values().zip_eq(mapepihand.into_raw()) {
            self.mapepiplayer[epi].deal(hand);
        }
        self.stich = SStich::new(EPlayerIndex::EPI0);
        self.epi_current = EPlayerIndex::EPI0;
        self.oepi_last_stich_winner = None;
        self.n_stich = 0;
        #[cfg(debug_assertions)]self.assert_invariant();
        info!("New deal ({}): {}", self.rules, EPlayerIndex::values()
            .map(|epi| self.mapepiplayer[epi].hand())
            .join(" | ")
        );
        self.reset_ais();
    }

    fn reset_ais(&self) {
        for ai in self.registered_ais() {
            ai.borrow_mut().reset_state(self);
        }
    }

    fn registered_ais(&self) -> Vec<SAiHandle> {
        self.mapepioai.iter().flatten().cloned().collect()
    }

    /// Registers `ai` for `epi`, replacing a previous one. `ai` is reset immediately.
    pub fn register_ai(&mut self, epi: EPlayerIndex, ai: SAiHandle) {
        ai.borrow_mut().reset_state(self);
        self.mapepioai[epi] = Some(ai);
    }

    pub fn ai(&self, epi: EPlayerIndex) -> Option<SAiHandle> {
        self.mapepioai[epi].clone()
    }

    pub fn rules(&self) -> &SRules {
        &self.rules
    }

    /// Changes rules between deals; not allowed once a card has been played.
    pub fn set_rules(&mut self, rules: SRules) -> Result<(), Error> {
        if !self.no_card_played() {
            bail!("Rules can only be changed before the first card is played.");
        }
        info!("Rules changed from {} to {}", self.rules, rules);
        self.rules = rules;
        self.reset_ais();
        Ok(())
    }

    pub fn no_card_played(&self) -> bool {
        0==self.n_stich && self.stich.is_empty()
    }

    pub fn player(&self, epi: EPlayerIndex) -> &SPlayer {
        &self.mapepiplayer[epi]
    }
    pub fn players(&self) -> impl Iterator<Item=&SPlayer> {
        self.mapepiplayer.iter()
    }
    pub fn current_stich(&self) -> &SStich {
        &self.stich
    }
    pub fn current_playerindex(&self) -> EPlayerIndex {
        self.epi_current
    }
    /// `None` once all stichs have been played.
    pub fn which_player_can_do_something(&self) -> Option<EPlayerIndex> {
        if_then_some!(!self.game_finished(), self.epi_current)
    }
    pub fn last_stich_winner(&self) -> Option<EPlayerIndex> {
        self.oepi_last_stich_winner
    }
    pub fn stich_count(&self) -> usize {
        self.n_stich
    }
    pub fn game_finished(&self) -> bool {
        N_CARDS_PER_PLAYER==self.n_stich
    }

    pub fn has_trumpf(&self, epi: EPlayerIndex) -> bool {
        self.rules.has_trumpf(self.mapepiplayer[epi].hand())
    }
    pub fn has_farbe(&self, epi: EPlayerIndex, efarbe: EFarbe) -> bool {
        self.rules.has_farbe(self.mapepiplayer[epi].hand(), efarbe)
    }

    /// Cards of all completed stichs.
    pub fn discarded_cards(&self) -> EnumSet<ECard> {
        let mut setcard = EnumSet::new_empty();
        for stich in self.mapepiplayer.iter().flat_map(|player| player.stichs().iter()) {
            for (_epi, card) in stich.iter() {
                debug_verify!(setcard.insert(*card));
            }
        }
        setcard
    }
    pub fn is_discarded(&self, card: ECard) -> bool {
        self.mapepiplayer.iter().any(|player| player.card_in_stichs(card))
    }

    pub fn card_is_allowed(&self, epi: EPlayerIndex, card: ECard) -> bool {
        self.rules.card_is_allowed(card, &self.stich, self.mapepiplayer[epi].hand())
    }
    pub fn allowed_slots(&self, epi: EPlayerIndex) -> impl Iterator<Item=usize> + '_ {
        self.rules.allowed_slots(&self.stich, self.mapepiplayer[epi].hand())
    }

    /// Plays the card in `i_slot` of `epi`'s hand.
    /// Panics unless it is `epi`'s turn and the slot holds an allowed card.
    pub fn play_card(&mut self, epi: EPlayerIndex, i_slot: usize) -> ECard {
        assert!(!self.game_finished(), "Game already finished");
        assert_eq!(epi, self.epi_current, "Player {} must not play now", epi);
        let card = match self.mapepiplayer[epi].hand().slot(i_slot) {
            Some(card) => card,
            None => panic!("Player {} has no card in slot {}", epi, i_slot),
        };
        assert!(self.card_is_allowed(epi, card), "{} not allowed in {}", card, self.stich);
        verify_eq!(self.mapepiplayer[epi].take_card(i_slot), card);
        self.stich.push(card);
        trace!("Player {} plays {}", epi, card);
        for ai in self.registered_ais() {
            ai.borrow_mut().notify_played(self, epi);
        }
        self.epi_current = self.epi_current.wrapping_add(1);
        if self.stich.is_full() {
            self.resolve_stich();
        }
        #[cfg(debug_assertions)]self.assert_invariant();
        card
    }

    /// Asks the AI of the current player for a card and plays it.
    /// Returns `None` if the game is finished or nobody is registered for the current player.
    pub fn play_ai_card(&mut self) -> Option<(EPlayerIndex, ECard)> {
        let epi = self.which_player_can_do_something()?;
        let ai = self.ai(epi)?;
        let i_slot = ai.borrow_mut().choose_card(self);
        Some((epi, self.play_card(epi, i_slot)))
    }

    fn resolve_stich(&mut self) {
        assert!(self.stich.is_full());
        let epi_winner = self.rules.winner_index(&self.stich);
        let stich = std::mem::replace(&mut self.stich, SStich::new(epi_winner));
        debug!("Stich {}: {} won by {} ({} points)", self.n_stich, stich, epi_winner, points_stich(&stich));
        self.mapepiplayer[epi_winner].add_stich(stich);
        self.oepi_last_stich_winner = Some(epi_winner);
        self.epi_current = epi_winner;
        self.n_stich += 1;
        if self.game_finished() {
            info!("Game finished: {}", self.mapepiplayer.iter()
                .map(|player| format!("{}: {}", player.epi(), player.points()))
                .join(", ")
            );
        }
    }

    #[cfg(debug_assertions)]
    fn assert_invariant(&self) {
        let mut setcard = EnumSet::new_empty();
        let mut mapepin_played = EPlayerIndex::map_from_fn(|_epi| 0);
        for player in self.mapepiplayer.iter() {
            for card in player.hand().cards() {
                verify!(setcard.insert(card));
            }
            for stich in player.stichs() {
                for (epi, card) in stich.iter() {
                    verify!(setcard.insert(*card));
                    mapepin_played[epi] += 1;
                }
            }
        }
        for (epi, card) in self.stich.iter() {
            verify!(setcard.insert(*card));
            mapepin_played[epi] += 1;
        }
        assert!(setcard.is_full());
        for epi in EPlayerIndex::values() {
            assert_eq!(self.mapepiplayer[epi].hand().count() + mapepin_played[epi], N_CARDS_PER_PLAYER);
        }
        assert_eq!(self.n_stich * EPlayerIndex::SIZE + self.stich.size(), mapepin_played.iter().sum::<usize>());
        if self.game_finished() {
            assert_eq!(self.mapepiplayer.iter().map(SPlayer::points).sum::<isize>(), N_POINTS_TOTAL);
        }
    }
}
