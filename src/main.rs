use std::process::ExitCode;

use clap::Parser;
use env_logger::Env;
use log::error;

use newton_fractal::Arguments;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let arguments = Arguments::parse();

    match newton_fractal::run(&arguments) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
