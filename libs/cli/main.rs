use clap::Parser;
use directories_next::ProjectDirs;
use std::path::PathBuf;

use utils::{command_error, exit_code::ExitCode};

mod commands;
mod tracing;

mod utils {
    pub mod command_error;
    pub mod display;
    pub mod exit_code;
}

// Note: for uniformity, we dont use clap `default_value` or `default_value_t` options
#[derive(Parser, Debug)]
#[command(
    name = "actstore",
    version,
    long_about = Some("Keep a list of activities on the local disk.")
)]
struct Args {
    /// Profile to use
    #[arg(long)]
    profile_name: Option<String>,

    /// Path of configuration file (default: "~/.config/actstore/config.toml")
    #[arg(short, long)]
    config: Option<String>,

    /// Exit with an error when a storage operation fails
    #[arg(long)]
    strict: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    command: commands::Command,
}

impl Args {
    fn get_config_path(&self) -> eyre::Result<String> {
        let config_path = match &self.config {
            Some(x) => Ok(x.clone()),
            None => {
                if let Some(proj_dirs) = ProjectDirs::from("", "", "actstore") {
                    let config_path: PathBuf = proj_dirs.config_dir().join("config.toml");

                    config_path
                        .to_str()
                        .map(|t| t.to_owned())
                        .ok_or_else(|| eyre::eyre!("couldn't convert os path to string"))
                } else {
                    Err(eyre::eyre!("Project directories could not be found."))
                }
            }
        }?;

        Ok(shellexpand::full(&config_path)?.into_owned())
    }
}

fn run(args: Args) -> command_error::Result<()> {
    color_eyre::install()?;
    tracing::setup()?;

    let config_path = args
        .get_config_path()
        .map_err(command_error::Error::config)?;

    args.command
        .execute(&config_path, args.profile_name.as_deref(), args.strict)
}

pub fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let code = e.code();
            let command_error::Error::ExitWithError(_, report) = e;
            eprintln!("Error: {report:?}");
            code
        }
    }
}
