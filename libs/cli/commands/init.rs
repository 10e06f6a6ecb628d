use actstore_config::Config;
use clap::Args;
use std::path::Path;

use crate::utils::{
    command_error,
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Overwrite an existing config file
    #[clap(long)]
    force: bool,
}

pub fn handle(command: Command, config_path: &str) -> command_error::Result<()> {
    if Path::new(config_path).exists() && !command.force {
        return Err(command_error::Error::config(eyre::eyre!(
            "config file '{config_path}' already exists, use --force to overwrite it"
        )));
    }

    actstore_config::save(config_path, &Config::with_default_profile())?;

    LogBuilder::new(LogType::Success, "Config file created")
        .with_branch("Path", config_path.to_owned())
        .print();
    Ok(())
}
