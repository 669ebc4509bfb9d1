use anyhow::Result;
use clap::Parser;
use log::{error, info};
use rename_with::cli::Cli;
use rename_with::component::{PairRenamer, Reporter};
use rename_with::config::Config;
use rename_with::init;
use rename_with::signal::setup_shutdown_signal;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init::init(cli.verbose);
    rust_i18n::set_locale(cli.lang.locale());

    match run(&cli) {
        Ok(()) => {
            info!("程式正常結束");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("程式錯誤: {e:#}");
            Reporter::print_fatal(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let shutdown_signal = setup_shutdown_signal()?;
    let config = Config::new()?;

    let renamer = PairRenamer::new(config, cli.run_config(), shutdown_signal);
    renamer.run()?;

    Ok(())
}
