use actstore_core::ActivityDraft;
use clap::Args;
use serde_json::Value;

use super::Context;
use crate::utils::{
    command_error::{self, check},
    display::{LogBuilder, LogType},
};

#[derive(Args, Debug)]
pub struct Command {
    /// Title of the activity
    title: String,

    /// Initial status (e.g. pending)
    #[clap(short, long)]
    status: Option<String>,

    /// Extra fields as key=value, values are read as json when they parse
    #[clap(short, long = "field", value_parser = parse_field)]
    fields: Vec<(String, Value)>,
}

fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid field '{raw}', expected key=value"))?;

    if key.is_empty() {
        return Err(format!("invalid field '{raw}', key is empty"));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_owned()));
    Ok((key.to_owned(), value))
}

pub fn handle(command: Command, ctx: &mut Context) -> command_error::Result<()> {
    let mut draft = command
        .fields
        .into_iter()
        .fold(ActivityDraft::new(), |draft, (key, value)| draft.field(key, value))
        .field("title", command.title);

    if let Some(status) = command.status {
        draft = draft.status(status);
    }

    if let Some(id) = check(ctx.store.create(draft), ctx.strict)? {
        LogBuilder::new(LogType::Success, "Activity added")
            .with_branch("Id", id)
            .print();
    }
    Ok(())
}
