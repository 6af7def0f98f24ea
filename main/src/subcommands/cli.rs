use failure::Error;
use plain_enum::PlainEnum;
use schafkopf_observer_lib::{
    ai::*,
    game::SGame,
    primitives::*,
    rules::{card_points::N_POINTS_TOTAL, EGameType, SRules, VTrumpfOrFarbe},
};
use schafkopf_observer_util::*;
use std::{
    cell::RefCell,
    io::{self, BufRead, Write},
    rc::Rc,
};

pub fn subcommand(str_subcommand: &'static str) -> clap::Command<'static> {
    use super::shared_args::*;
    clap::Command::new(str_subcommand)
        .about("Play in command line")
        .long_about("Play in command line. Player 1 is controlled by commands and observed, the others are computer players.")
        .args(rules_args())
        .arg(ai_arg())
}

pub fn run(clapmatches: &clap::ArgMatches) -> Result<(), Error> {
    let ruleset = super::get_ruleset(clapmatches)?;
    let mut game = super::new_game(&ruleset);
    let observer = Rc::new(RefCell::new(SAiObserver::new(EPI_HUMAN)));
    game.register_ai(EPI_HUMAN, observer.clone());
    for epi in EPlayerIndex::values().filter(|&epi| epi!=EPI_HUMAN) {
        game.register_ai(epi, Rc::new(RefCell::new(super::ai(clapmatches, epi, &ruleset)?)));
    }
    let mut cli = SCli{game, observer};
    println!("Schafkopf CLI. Enter '?' for help.");
    print_prompt()?;
    for str_line in io::stdin().lock().lines() {
        if !cli.handle_command(str_line?.trim())? {
            break;
        }
    }
    println!();
    println!("Bye.");
    Ok(())
}

const EPI_HUMAN: EPlayerIndex = EPlayerIndex::EPI0;

fn player_number(epi: EPlayerIndex) -> usize {
    epi.to_usize() + 1
}

fn print_prompt() -> Result<(), Error> {
    print!("Schaf> ");
    io::stdout().flush()?;
    Ok(())
}

struct SCli {
    game: SGame,
    observer: Rc<RefCell<SAiObserver>>,
}

impl SCli {
    fn handle_command(&mut self, str_cmd: &str) -> Result<bool, Error> {
        if "q"==str_cmd {
            return Ok(false);
        }
        if let Some(i_slot) = str_cmd.parse::<usize>().ok()
            .filter(|n_slot| (1..=N_CARDS_PER_PLAYER).contains(n_slot))
            .map(|n_slot| n_slot - 1)
        {
            self.try_play_slot(i_slot, str_cmd);
        } else if let Ok(card) = parse_card(str_cmd) {
            match self.game.player(self.game.current_playerindex()).hand().position(card) {
                Some(i_slot) => self.try_play_slot(i_slot, str_cmd),
                None => println!("No such card: {}", str_cmd),
            }
        } else if let Some(efarbe) = EFarbe::from_str_name(str_cmd) {
            let rules = SRules::new(self.game.rules().gametype(), efarbe);
            match self.game.set_rules(rules) {
                Ok(()) => println!("Game changed to {}", self.game.rules()),
                Err(err) => println!("Cannot change farbe: {}", err),
            }
        } else if let Some(egametype) = EGameType::from_str_name(str_cmd) {
            let rules = SRules::new(egametype, self.game.rules().farbe());
            match self.game.set_rules(rules) {
                Ok(()) => println!("Game changed to {}", self.game.rules()),
                Err(err) => println!("Cannot change game type: {}", err),
            }
        } else {
            match str_cmd {
                "p" => self.print_cards(),
                "pp" => self.print_current_stich(),
                "a" => {
                    self.ai_play();
                },
                "A" => {
                    while EPI_HUMAN!=self.game.current_playerindex() && self.ai_play() {}
                },
                "r" => {
                    println!("Reset game");
                    self.game.reset();
                    self.print_cards();
                },
                "o" => self.print_observations(),
                "?" => print_help(),
                "" => {},
                _ => println!("Unknown command: {}", str_cmd),
            }
        }
        print_prompt()?;
        Ok(true)
    }

    fn try_play_slot(&mut self, i_slot: usize, str_cmd: &str) {
        let epi = self.game.current_playerindex();
        match self.game.player(epi).hand().slot(i_slot) {
            None => println!("No such card: {}", str_cmd),
            Some(card) if !self.game.card_is_allowed(epi, card) => println!("Cannot play card {}", str_cmd),
            Some(_card) => {
                self.game.play_card(epi, i_slot);
                self.after_card();
            },
        }
    }

    /// Returns whether a computer player played.
    fn ai_play(&mut self) -> bool {
        let epi = self.game.current_playerindex();
        if EPI_HUMAN==epi {
            println!("No AI for Player {}", player_number(epi));
            return false;
        }
        match self.game.play_ai_card() {
            Some((epi, card)) => {
                println!("Player {} plays {}", player_number(epi), card.str_name());
                self.after_card();
                true
            },
            None => false,
        }
    }

    fn after_card(&mut self) {
        if self.game.current_stich().is_empty() {
            let epi_winner = unwrap!(self.game.last_stich_winner());
            println!("Stich:");
            for (epi, card) in self.game.player(epi_winner).last_stich().iter() {
                println!("    P{}: {}", player_number(epi), card.str_name());
            }
            println!("Stich went to player {}", player_number(epi_winner));
        } else {
            self.print_current_stich();
        }
        if self.game.game_finished() {
            println!("Game over");
            for player in self.game.players() {
                println!("    Player {}: {} points", player_number(player.epi()), player.points());
            }
            println!("Player {} {}!",
                player_number(EPI_HUMAN),
                if N_POINTS_TOTAL/2 < self.game.player(EPI_HUMAN).points() { "won" } else { "lost" },
            );
            self.game.reset();
        }
    }

    fn print_cards(&self) {
        println!("Game: {}", self.game.rules());
        for player in self.game.players() {
            print!("Player {} ({})", player_number(player.epi()), player.points());
            if player.epi()==self.game.current_playerindex() {
                print!(" *** Active ***");
            }
            println!();
            for (i_slot, card) in player.hand().slots() {
                println!("    {}: {}", i_slot + 1, card.str_name());
            }
        }
    }

    fn print_current_stich(&self) {
        println!("Active Pile");
        for (epi, card) in self.game.current_stich().iter() {
            println!("    Player {}: {}", player_number(epi), card.str_name());
        }
    }

    fn print_observations(&self) {
        let observer = self.observer.borrow();
        println!("Observer AI:");
        for epi in EPlayerIndex::values() {
            print!("    Player {}:", player_number(epi));
            for trumpforfarbe in VTrumpfOrFarbe::values() {
                match observer.knowledge(epi, trumpforfarbe) {
                    EKnowledge::Unknown => {},
                    eknowledge => print!(" {} free: {}", trumpforfarbe, eknowledge),
                }
            }
            println!();
        }
    }
}

fn print_help() {
    println!("Commands:");
    for efarbe in EFarbe::values() {
        println!("    '{}'", efarbe.str_name().to_lowercase());
    }
    println!("              : Farbe of the game");
    for egametype in EGameType::values() {
        println!("    '{}'", egametype.str_name().to_lowercase());
    }
    println!("              : Type of the game");
    println!("    '1' - '8' : Play the card with that number");
    println!("    'ha', 'sz': Play the card with that name");
    println!("    'p'       : Print current cards");
    println!("    'pp'      : Print current active pile");
    println!("    'a'       : Let AI play the next card");
    println!("    'A'       : Let AI play until player's turn");
    println!("    'r'       : Reset the game");
    println!("    'o'       : Print observations made so far");
    println!("    'q'       : Quit");
}
