use clap::Parser;

use nwb_inspect::cli::{Cli, Commands};
use nwb_inspect::commands::{run_checks, run_init, run_inspect};
use nwb_inspect::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Inspect(args) => run_inspect(args, &cli),
        Commands::Checks(args) => run_checks(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
