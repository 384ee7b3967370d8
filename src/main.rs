use anyhow::Result;
use clap::CommandFactory;
use clap_complete::env::CompleteEnv;

use nav::cli::Cli;
use nav::config::Config;
use nav::dispatch;
use nav::handoff::Handoff;
use nav::logging;

fn main() -> Result<()> {
    // Handle dynamic completion via COMPLETE environment variable
    CompleteEnv::with_factory(Cli::command).complete();

    logging::init();

    let config = Config::load_or_default();
    let navigation = dispatch::run(std::env::args_os(), &config, &mut std::io::stdout());

    Handoff::new(config.handoff_path()).emit(navigation.target())
}
