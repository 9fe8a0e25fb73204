use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Create the config file and the sheet with its header row.
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.sheet.clone(), cli.test)
}
