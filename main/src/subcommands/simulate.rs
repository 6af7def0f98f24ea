use failure::{bail, Error};
use itertools::Itertools;
use plain_enum::PlainEnum;
use schafkopf_observer_lib::{
    ai::*,
    game::SGame,
    primitives::*,
    rules::VTrumpfOrFarbe,
};
use schafkopf_observer_util::*;
use std::{cell::RefCell, rc::Rc};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::clap_arg;
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Let computer players play and check their observations")
        .long_about("Let computer players play complete deals. After each card, every player's observations are checked against the actual hands.")
        .args(rules_args())
        .arg(ai_arg())
        .arg(clap_arg("games")
            .default_value("1")
            .help("Number of deals to play")
        )
}

/// Fails if `observer` believes something contradicting the actual hands.
fn check_observer(game: &SGame, observer: &SAiObserver) -> Result<(), Error> {
    let rules = game.rules();
    for (epi, trumpforfarbe) in itertools::iproduct!(EPlayerIndex::values(), VTrumpfOrFarbe::values()) {
        let b_holds = game.player(epi).hand().contains_pred(|card| trumpforfarbe==rules.trumpforfarbe(card));
        match (observer.knowledge(epi, trumpforfarbe), b_holds) {
            (EKnowledge::Frei, true) => bail!("Observer {}: Player {} wrongly considered frei in {}", observer.epi(), epi, trumpforfarbe),
            (EKnowledge::NotFrei, false) => bail!("Observer {}: Player {} wrongly considered not frei in {}", observer.epi(), epi, trumpforfarbe),
            (EKnowledge::Unknown, _) | (EKnowledge::Frei, false) | (EKnowledge::NotFrei, true) => {},
        }
    }
    Ok(())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let n_games = unwrap!(clapmatches.value_of("games")).parse::<usize>()?;
    let mut game = super::new_game(&ruleset);
    let mut vecai = Vec::new();
    for epi in EPlayerIndex::values() {
        let ai = Rc::new(RefCell::new(SAiObserving::new(epi, super::ai(clapmatches, epi, &ruleset)?)));
        game.register_ai(epi, ai.clone());
        vecai.push(ai);
    }
    let mut mapepin_points = EPlayerIndex::map_from_fn(|_epi| 0);
    for i_game in 0..n_games {
        if 0 < i_game {
            game.reset();
        }
        while game.play_ai_card().is_some() {
            for ai in vecai.iter() {
                check_observer(&game, ai.borrow().observer())?;
            }
        }
        for player in game.players() {
            mapepin_points[player.epi()] += player.points();
        }
        println!("Game {}: {}: {}",
            i_game + 1,
            game.rules(),
            game.players().map(|player| format!("Player {}: {}", player.epi(), player.points())).join(", "),
        );
    }
    println!("Total: {}", EPlayerIndex::values()
        .map(|epi| format!("Player {}: {}", epi, mapepin_points[epi]))
        .join(", ")
    );
    info!("Simulated {} games without contradicting observations", n_games);
    Ok(())
}
