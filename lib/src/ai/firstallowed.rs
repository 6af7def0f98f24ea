use crate::ai::TAi;
use crate::game::SGame;
use crate::primitives::*;
use crate::util::*;

/// Plays the allowed card in the lowest slot.
#[derive(new, Debug, Clone)]
pub struct SAiFirstAllowed {
    epi: EPlayerIndex,
}

impl TAi for SAiFirstAllowed {
    fn notify_played(&mut self, _game: &SGame, _epi: EPlayerIndex) {}

    fn choose_card(&mut self, game: &SGame) -> usize {
        assert_eq!(game.which_player_can_do_something(), Some(self.epi));
        unwrap!(game.allowed_slots(self.epi).next())
    }

    fn reset_state(&mut self, _game: &SGame) {}
}
