use actstore_core::{ActivityId, Outcome};
use clap::Args;

use super::Context;
use crate::utils::{
    command_error::{self, check},
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    activity_id: ActivityId,
}

pub fn handle(command: Command, ctx: &mut Context) -> command_error::Result<()> {
    let outcome = ctx.store.delete(command.activity_id);
    let (log_type, message) = match outcome {
        Outcome::Applied(()) => (LogType::Success, "Activity deleted"),
        Outcome::Unchanged => (LogType::Info, "No activity with this id"),
        failed @ Outcome::Failed(_) => return check(failed, ctx.strict).map(|_| ()),
    };

    LogBuilder::new(log_type, message)
        .with_branch("Id", command.activity_id)
        .print();
    Ok(())
}
