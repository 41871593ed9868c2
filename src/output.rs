//! Rendering of the classified activity list. Pure formatting, no decisions.

use crate::error::Result;
use crate::events::Activity;

/// Supported output renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Rows,
    Json,
    Table,
}

pub fn render(activities: &[Activity], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Rows => Ok(render_rows(activities)),
        OutputFormat::Json => render_json(activities),
        OutputFormat::Table => Ok(render_table(activities)),
    }
}

fn render_rows(activities: &[Activity]) -> String {
    let mut out = String::new();
    for act in activities {
        out.push_str(&format!("- {}\n", act.message));
    }
    out
}

fn render_json(activities: &[Activity]) -> Result<String> {
    let mut json = serde_json::to_string_pretty(activities)?;
    json.push('\n');
    Ok(json)
}

fn render_table(activities: &[Activity]) -> String {
    let mut event_width = "Event".len();
    let mut message_width = "Message".len();
    for act in activities {
        event_width = event_width.max(act.event.len());
        message_width = message_width.max(act.message.len());
    }
    let index_width = activities.len().to_string().len().max(1);

    let mut out = String::new();
    out.push_str(&format!(
        "{:>index_width$} | {:<event_width$} | {:<message_width$}\n",
        "#", "Event", "Message"
    ));
    out.push_str(&format!(
        "{}-+-{}-+-{}\n",
        "-".repeat(index_width),
        "-".repeat(event_width),
        "-".repeat(message_width)
    ));
    for (i, act) in activities.iter().enumerate() {
        out.push_str(&format!(
            "{:>index_width$} | {:<event_width$} | {:<message_width$}\n",
            i + 1,
            act.event,
            act.message
        ));
    }
    out
}
