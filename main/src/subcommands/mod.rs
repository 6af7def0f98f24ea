pub mod cli;
pub mod simulate;

use failure::{bail, format_err, Error};
use schafkopf_observer_lib::{
    ai::*,
    game::SGame,
    primitives::*,
    rules::{ruleset::SRuleSet, EGameType},
};
use plain_enum::PlainEnum;
use schafkopf_observer_util::*;
use std::path::Path;

pub fn clap_arg(str_long: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(str_long)
        .long(str_long)
        .takes_value(true)
}

pub mod shared_args {
    use super::clap_arg;

    pub fn rules_args() -> [clap::Arg<'static>; 4] {
        [
            clap_arg("ruleset")
                .help("TOML file with game, farbe and seed"),
            clap_arg("game")
                .help("Game type, overrides ruleset")
                .long_help("Game type, overrides ruleset. One of sauspiel, solo, wenz, geier, farbwenz, farbgeier."),
            clap_arg("farbe")
                .help("Trumpf farbe, overrides ruleset")
                .long_help("Trumpf farbe, overrides ruleset. One of eichel, gras, herz, schelln. Ignored for wenz and geier."),
            clap_arg("seed")
                .help("Seed for shuffling and random AIs, overrides ruleset"),
        ]
    }

    pub fn ai_arg() -> clap::Arg<'static> {
        clap_arg("ai")
            .default_value("first")
            .help("AI for the computer players: first (first allowed card) or random")
    }
}

/// Ruleset from `--ruleset` (or default), amended by `--game`, `--farbe` and `--seed`.
pub fn get_ruleset(clapmatches: &clap::ArgMatches) -> Result<SRuleSet, Error> {
    let mut ruleset = match clapmatches.value_of("ruleset") {
        Some(str_path) => SRuleSet::from_file(Path::new(str_path))?,
        None => SRuleSet::default(),
    };
    if let Some(str_game) = clapmatches.value_of("game") {
        ruleset.egametype = EGameType::from_str_name(str_game)
            .ok_or_else(|| format_err!("Unknown game {}.", str_game))?;
    }
    if let Some(str_farbe) = clapmatches.value_of("farbe") {
        ruleset.efarbe = EFarbe::from_str_name(str_farbe)
            .ok_or_else(|| format_err!("Unknown farbe {}.", str_farbe))?;
    }
    if let Some(str_seed) = clapmatches.value_of("seed") {
        ruleset.on_seed = Some(str_seed.parse()?);
    }
    info!("Rules: {} (seed {:?})", ruleset.rules(), ruleset.on_seed);
    Ok(ruleset)
}

pub fn new_game(ruleset: &SRuleSet) -> SGame {
    SGame::new(ruleset.rules(), ruleset.on_seed)
}

/// Actor for a computer player.
#[derive(Clone, Debug)]
pub enum VAi {
    FirstAllowed(SAiFirstAllowed),
    Random(SAiRandom),
}

impl TAi for VAi {
    fn notify_played(&mut self, game: &SGame, epi: EPlayerIndex) {
        match self {
            VAi::FirstAllowed(ai) => ai.notify_played(game, epi),
            VAi::Random(ai) => ai.notify_played(game, epi),
        }
    }
    fn choose_card(&mut self, game: &SGame) -> usize {
        match self {
            VAi::FirstAllowed(ai) => ai.choose_card(game),
            VAi::Random(ai) => ai.choose_card(game),
        }
    }
    fn reset_state(&mut self, game: &SGame) {
        match self {
            VAi::FirstAllowed(ai) => ai.reset_state(game),
            VAi::Random(ai) => ai.reset_state(game),
        }
    }
}

pub fn ai(clapmatches: &clap::ArgMatches, epi: EPlayerIndex, ruleset: &SRuleSet) -> Result<VAi, Error> {
    match unwrap!(clapmatches.value_of("ai")) {
        "first" => Ok(VAi::FirstAllowed(SAiFirstAllowed::new(epi))),
        "random" => Ok(VAi::Random(SAiRandom::new(
            epi,
            /*n_seed*/ruleset.on_seed.unwrap_or_else(rand::random::<u64>).wrapping_add(epi.to_usize() as u64),
        ))),
        str_ai => bail!("Unknown ai {}. Use first or random.", str_ai),
    }
}

#[test]
fn test_ai_defaults_to_first_allowed() {
    let clapmatches = clap::Command::new("test")
        .args(shared_args::rules_args())
        .arg(shared_args::ai_arg())
        .get_matches_from(["test", "--seed", "3"]);
    let ruleset = unwrap!(get_ruleset(&clapmatches));
    assert!(matches!(unwrap!(ai(&clapmatches, EPlayerIndex::EPI1, &ruleset)), VAi::FirstAllowed(_)));
    let clapmatches = clap::Command::new("test")
        .arg(shared_args::ai_arg())
        .get_matches_from(["test", "--ai", "random"]);
    assert!(matches!(unwrap!(ai(&clapmatches, EPlayerIndex::EPI1, &SRuleSet::default())), VAi::Random(_)));
    let clapmatches = clap::Command::new("test")
        .arg(shared_args::ai_arg())
        .get_matches_from(["test", "--ai", "clever"]);
    assert!(ai(&clapmatches, EPlayerIndex::EPI1, &SRuleSet::default()).is_err());
}
