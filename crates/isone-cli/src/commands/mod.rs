mod fuel_mix;

use isone_core::Table;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub fn run(cli: &Cli) -> Result<Table, CliError> {
    match &cli.command {
        Command::FuelMix(args) => fuel_mix::run(cli, args),
    }
}
