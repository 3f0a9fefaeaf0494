use godex_label::{config::Config, dispatch, label, printer::UsbDriver};

use std::env;
use std::process::ExitCode;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = label::Arguments::parse(env::args().skip(1));
    let config = Config::from_env()?;

    let document = label::render(&config, &args)?;
    dispatch::print(&UsbDriver::new(), &document)?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
