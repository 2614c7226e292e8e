mod commands;
mod terminal;

use argtype_common::config::Config;
use commands::{CommandLine, Commands, check, info, is, kinds};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose);

    let cfg = Config {
        zero_allowed: !commands.strict_positive,
        quiet: commands.quiet,
    };
    print::initialize(&cfg);

    match commands.command {
        Commands::Check { kind, values } => check::check(kind, &values, &cfg),
        Commands::Is { kind, values } => is::is(kind, &values, &cfg),
        Commands::Kinds => {
            print::header("supported kinds");
            kinds::kinds();
            Ok(())
        }
        Commands::Info => {
            print::header("local network");
            info::info()
        }
    }
}
