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
    status: String,
}

pub fn handle(command: Command, ctx: &mut Context) -> command_error::Result<()> {
    match ctx.store.update_status(command.activity_id, command.status.clone()) {
        Outcome::Unchanged => {
            LogBuilder::new(LogType::Info, "No activity with this id")
                .with_branch("Id", command.activity_id)
                .print();
        }
        outcome => {
            if check(outcome, ctx.strict)?.is_some() {
                LogBuilder::new(LogType::Success, "Status updated")
                    .with_branch("Id", command.activity_id)
                    .with_branch("Status", command.status)
                    .print();
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::in_memory_context;
    use actstore_core::ActivityDraft;

    fn command(activity_id: ActivityId) -> Command {
        Command {
            activity_id,
            status: "done".to_owned(),
        }
    }

    #[test]
    fn test_set_status_unknown_id_changes_nothing() -> eyre::Result<()> {
        let mut ctx = in_memory_context(true)?;
        let _ = ctx.store.create(ActivityDraft::new().field("title", "A"));

        assert!(matches!(handle(command(3), &mut ctx), Ok(())));
        assert_eq!(ctx.store.activities()[0].status, None);
        Ok(())
    }

    #[test]
    fn test_set_status() -> eyre::Result<()> {
        let mut ctx = in_memory_context(false)?;
        let _ = ctx.store.create(ActivityDraft::new().field("title", "A"));

        assert!(matches!(handle(command(0), &mut ctx), Ok(())));
        assert_eq!(ctx.store.activities()[0].status.as_deref(), Some("done"));
        Ok(())
    }
}
