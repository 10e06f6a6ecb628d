use actstore_core::Activity;
use colored::*;
use serde_json::Value;
use std::fmt::Display;

/// Defines the type of log message to determine the icon and color scheme.
pub enum LogType {
    Success,
    Info,
}

/// A builder for creating structured, tree-like log messages.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    pub fn with_optional_branch<T: Display + 'static>(
        self,
        label: &'a str,
        value: Option<T>,
    ) -> Self {
        if let Some(val) = value {
            self.with_branch(label, val)
        } else {
            self
        }
    }

    /// Consumes the builder and prints the formatted message to the console.
    pub fn print(self) {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "blue"),
        };

        println!(
            "\n{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            println!("{} {:<12} {}", prefix.dimmed(), padded_label.bold(), value);
        }
    }
}

fn value_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Title of an activity, falls back on its id
pub fn activity_title(activity: &Activity) -> String {
    activity
        .get_field("title")
        .map(value_to_display)
        .unwrap_or_else(|| format!("activity #{}", activity.id))
}

pub fn print_activity(activity: &Activity) {
    let mut log = LogBuilder::new(LogType::Info, activity_title(activity))
        .with_branch("Id", activity.id)
        .with_optional_branch("Status", activity.status.clone());

    for (key, value) in activity.fields.iter().filter(|(k, _)| k.as_str() != "title") {
        log = log.with_branch(key.as_str(), value_to_display(value));
    }

    log.print();
}
