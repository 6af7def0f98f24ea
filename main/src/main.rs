#![cfg_attr(feature = "cargo-clippy", allow(
    clippy::upper_case_acronyms,
))]
#![deny(bare_trait_objects)]

mod subcommands;

use failure::Error;

fn main() -> Result<(), Error> {
    schafkopf_observer_logging::init_logging("schafkopf_observer", /*olevelfilter*/None)?;
    macro_rules! subcommands{($(($mod:ident, $str_cmd:expr))*) => {
        let clapmatches = clap::Command::new("schafkopf_observer")
            .about("Single hand Schafkopf with an observer inferring which players are frei")
            .subcommand_required(true)
            .arg_required_else_help(true)
            $(.subcommand(subcommands::$mod::subcommand($str_cmd)))*
            .get_matches();
        $(
            if let Some(clapmatches_subcommand)=clapmatches.subcommand_matches($str_cmd) {
                return subcommands::$mod::run(clapmatches_subcommand);
            }
        )*
    }}
    subcommands!(
        (cli, "cli")
        (simulate, "simulate")
    );
    Ok(())
}
