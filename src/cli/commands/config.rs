use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd
        && *print_config
    {
        let path = Config::config_file();
        if path.exists() {
            println!("{}", std::fs::read_to_string(&path)?);
        } else {
            warning(format!(
                "No config file at {:?}; using defaults (sheet: {})",
                path, cfg.sheet
            ));
        }
    }
    Ok(())
}
