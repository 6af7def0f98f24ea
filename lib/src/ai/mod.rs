pub mod firstallowed;
pub mod observer;
pub mod observing;
pub mod random;
#[cfg(test)]
pub mod test;

pub use self::{firstallowed::*, observer::*, observing::*, random::*};
use crate::game::SGame;
use crate::primitives::*;

/// Capability the game uses to inform and query seats without knowing their behaviour.
///
/// All methods get read-only access to the game and must not call back into it.
pub trait TAi {
    /// Called after `epi` played a card; the card is the one of `epi` in `game.current_stich()`,
    /// the stich is not yet resolved.
    fn notify_played(&mut self, game: &SGame, epi: EPlayerIndex);
    /// Called only when it is this AI's turn. Must return a slot holding an allowed card.
    fn choose_card(&mut self, game: &SGame) -> usize;
    /// Called once per deal, after the cards have been dealt (and when the rules change before the first card).
    fn reset_state(&mut self, game: &SGame);
}
