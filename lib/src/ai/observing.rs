use crate::ai::{observer::SAiObserver, TAi};
use crate::game::SGame;
use crate::primitives::*;

/// Pairs an actor with an observer for the same seat: both are informed, the actor chooses.
#[derive(Clone, Debug)]
pub struct SAiObserving<Ai> {
    observer: SAiObserver,
    ai: Ai,
}

impl<Ai: TAi> SAiObserving<Ai> {
    pub fn new(epi: EPlayerIndex, ai: Ai) -> Self {
        SAiObserving {
            observer: SAiObserver::new(epi),
            ai,
        }
    }
    pub fn observer(&self) -> &SAiObserver {
        &self.observer
    }
}

impl<Ai: TAi> TAi for SAiObserving<Ai> {
    fn notify_played(&mut self, game: &SGame, epi: EPlayerIndex) {
        self.observer.notify_played(game, epi);
        self.ai.notify_played(game, epi);
    }

    fn choose_card(&mut self, game: &SGame) -> usize {
        self.ai.choose_card(game)
    }

    fn reset_state(&mut self, game: &SGame) {
        self.observer.reset_state(game);
        self.ai.reset_state(game);
    }
}
