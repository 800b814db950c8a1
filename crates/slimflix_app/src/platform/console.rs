//! Line-oriented console that stands in for user interaction with the page.

use slimflix_core::{Msg, SettingsForm};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  search <query>               search the indexer (min 3 chars)
  toggle <target>              show/hide a collapsible section (e.g. season-1)
  jackett <url> <api_key>      save Jackett settings
  qbit <url> <user> <pass>     save qBittorrent settings
  dismiss                      close the settings notification
  show                         print the page
  help                         this text
  quit                         exit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("usage: {0}")]
    Usage(&'static str),
}

/// Parses one input line. Blank lines parse to an empty dispatch.
pub fn parse_line(line: &str) -> Result<ConsoleCommand, ConsoleError> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_ascii_lowercase().as_str() {
        "" => Ok(ConsoleCommand::Dispatch(Vec::new())),
        // The widget decides whether the query is long enough.
        "search" | "s" => Ok(ConsoleCommand::Dispatch(vec![
            Msg::QueryChanged(rest.to_string()),
            Msg::SearchSubmitted,
        ])),
        "toggle" | "t" => {
            if rest.is_empty() {
                return Err(ConsoleError::Usage("toggle <target>"));
            }
            Ok(ConsoleCommand::Dispatch(vec![Msg::ToggleClicked {
                target: rest.to_string(),
            }]))
        }
        "jackett" => submit_form(SettingsForm::Jackett, rest, "jackett <url> <api_key>"),
        "qbit" | "qbittorrent" => {
            submit_form(SettingsForm::QBittorrent, rest, "qbit <url> <user> <pass>")
        }
        "dismiss" => Ok(ConsoleCommand::Dispatch(vec![Msg::NotificationDismissed])),
        "show" => Ok(ConsoleCommand::Show),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        other => Err(ConsoleError::Unknown(other.to_string())),
    }
}

fn submit_form(
    form: SettingsForm,
    rest: &str,
    usage: &'static str,
) -> Result<ConsoleCommand, ConsoleError> {
    let values: Vec<&str> = rest.split_whitespace().collect();
    if values.len() != form.fields().len() {
        return Err(ConsoleError::Usage(usage));
    }

    let mut msgs: Vec<Msg> = form
        .fields()
        .iter()
        .zip(values)
        .map(|(field, value)| Msg::FieldChanged {
            form,
            field: field.to_string(),
            value: value.to_string(),
        })
        .collect();
    msgs.push(Msg::SettingsSubmitted { form });
    Ok(ConsoleCommand::Dispatch(msgs))
}
