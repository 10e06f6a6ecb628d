use actstore_core::ActivityStore;
use clap::Subcommand;

use crate::utils::command_error::{self, check, Error};

pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod set_status;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a default config file
    Init(init::Command),
    /// Show stored activities
    List(list::Command),
    /// Add a new activity
    Add(add::Command),
    /// Change the status of an activity
    SetStatus(set_status::Command),
    /// Remove an activity
    Delete(delete::Command),
}

pub struct Context {
    pub store: ActivityStore,
    /// Abort on storage failures instead of reporting them
    pub strict: bool,
}

impl Command {
    pub fn execute(
        self,
        config_path: &str,
        profile_name: Option<&str>,
        strict: bool,
    ) -> command_error::Result<()> {
        let open = || Context::open(config_path, profile_name, strict);

        match self {
            Self::Init(o) => init::handle(o, config_path)?,
            Self::List(o) => list::handle(o, &mut open()?)?,
            Self::Add(o) => add::handle(o, &mut open()?)?,
            Self::SetStatus(o) => set_status::handle(o, &mut open()?)?,
            Self::Delete(o) => delete::handle(o, &mut open()?)?,
        };

        Ok(())
    }
}

impl Context {
    /// Build the store of the selected profile and load what it persisted
    fn open(
        config_path: &str,
        profile_name: Option<&str>,
        strict: bool,
    ) -> command_error::Result<Self> {
        let loaded = actstore_core::load(config_path, profile_name).map_err(Error::config)?;
        if let Err(e) = &loaded.found_config_file {
            tracing::info!("no config file loaded ({e}), run `actstore init` to create one");
        }

        let mut ctx = Context {
            store: loaded.store,
            strict,
        };
        check(ctx.store.load(), ctx.strict)?;
        Ok(ctx)
    }
}

#[cfg(test)]
pub(crate) fn in_memory_context(strict: bool) -> eyre::Result<Context> {
    let profile = actstore_config::ProfileConfig {
        storage_type: Some("in-memory".to_owned()),
        ..Default::default()
    };

    Ok(Context {
        store: actstore_core::build_store(&profile)?,
        strict,
    })
}
