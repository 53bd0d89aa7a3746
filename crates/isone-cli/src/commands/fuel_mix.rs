use isone_core::{flatten, Client, Credentials, FuelMixRetriever, Retriever, Table};

use crate::cli::{Cli, FuelMixArgs};
use crate::error::CliError;

pub fn run(cli: &Cli, args: &FuelMixArgs) -> Result<Table, CliError> {
    let credentials = match &cli.env_file {
        Some(path) => Credentials::from_env_file(path)?,
        None => Credentials::from_env()?,
    };

    let client = Client::with_credentials(credentials)?;
    let retriever = FuelMixRetriever::new(&client);
    let document = retriever.retrieve(&args.day)?;
    Ok(flatten(&document, retriever.record_path())?)
}
