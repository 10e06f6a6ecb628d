use clap::Args;
use colored::Colorize;

use super::Context;
use crate::utils::{command_error, display};

#[derive(Args, Debug)]
pub struct Command {
    /// Only show activities with this status
    #[clap(short, long)]
    status: Option<String>,
}

pub fn handle(command: Command, ctx: &mut Context) -> command_error::Result<()> {
    let activities = ctx
        .store
        .activities()
        .iter()
        .filter(|a| match &command.status {
            Some(status) => a.status.as_ref() == Some(status),
            None => true,
        })
        .collect::<Vec<_>>();

    if activities.is_empty() {
        println!("{}", "No activities".dimmed());
        return Ok(());
    }

    for activity in activities {
        display::print_activity(activity);
    }
    Ok(())
}
