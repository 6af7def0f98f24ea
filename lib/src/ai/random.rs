use crate::ai::TAi;
use crate::game::SGame;
use crate::primitives::*;
use crate::util::*;
use rand::{rngs::StdRng, seq::IteratorRandom, SeedableRng};

/// Plays a uniformly chosen allowed card.
#[derive(Debug, Clone)]
pub struct SAiRandom {
    epi: EPlayerIndex,
    rng: StdRng,
}

impl SAiRandom {
    pub fn new(epi: EPlayerIndex, n_seed: u64) -> Self {
        SAiRandom {
            epi,
            rng: StdRng::seed_from_u64(n_seed),
        }
    }
}

impl TAi for SAiRandom {
    fn notify_played(&mut self, _game: &SGame, _epi: EPlayerIndex) {}

    fn choose_card(&mut self, game: &SGame) -> usize {
        assert_eq!(game.which_player_can_do_something(), Some(self.epi));
        unwrap!(game.allowed_slots(self.epi).choose(&mut self.rng))
    }

    fn reset_state(&mut self, _game: &SGame) {}
}
