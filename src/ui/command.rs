use crate::error::ClubHubError;
use crate::service::app_state::UiEvent;
use crate::types::DiscoverMode;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(UiEvent),
    Help,
    Quit,
    /// Blank line: re-render only.
    Refresh,
}

pub const HELP: &str = "\
commands:
  search [text]          filter by free text (no text clears)
  mode clubs|vendors|requests
  tag <tag>              toggle a tag chip (clubs)
  heart <id>             toggle a heart (clubs)
  register               open the club form
  post                   open the request form (requests)
  set <field> <value>    fill a form field
  submit | close         submit or dismiss the open form
  help | quit";

/// Split `line` into its first word and the untouched remainder.
fn split_head(line: &str) -> (&str, &str) {
    let line = line.trim_start();
    match line.find(char::is_whitespace) {
        Some(idx) => (&line[..idx], line[idx..].trim_start()),
        None => (line, ""),
    }
}

pub fn parse(line: &str) -> Result<Command, ClubHubError> {
    let (head, rest) = split_head(line);
    let event = match head.to_ascii_lowercase().as_str() {
        "" => return Ok(Command::Refresh),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" => return Ok(Command::Quit),
        "search" => UiEvent::SetQuery(rest.to_string()),
        "mode" => {
            let mode = rest
                .parse::<DiscoverMode>()
                .map_err(|reason| ClubHubError::InvalidArgument {
                    command: "mode",
                    reason,
                })?;
            UiEvent::SetMode(mode)
        }
        "tag" => {
            if rest.trim().is_empty() {
                return Err(ClubHubError::InvalidArgument {
                    command: "tag",
                    reason: "missing tag".to_string(),
                });
            }
            UiEvent::ToggleTag(rest.to_string())
        }
        "heart" => {
            let id = rest
                .trim()
                .parse::<i64>()
                .map_err(|e| ClubHubError::InvalidArgument {
                    command: "heart",
                    reason: e.to_string(),
                })?;
            UiEvent::ToggleHeart(id)
        }
        "register" => UiEvent::OpenClubForm,
        "post" => UiEvent::OpenRequestForm,
        "set" => {
            let (field, value) = split_head(rest);
            if field.is_empty() {
                return Err(ClubHubError::InvalidArgument {
                    command: "set",
                    reason: "missing field name".to_string(),
                });
            }
            UiEvent::SetField {
                field: field.to_ascii_lowercase(),
                value: value.to_string(),
            }
        }
        "submit" => UiEvent::Submit,
        "close" | "cancel" => UiEvent::CloseModal,
        other => return Err(ClubHubError::UnknownCommand(other.to_string())),
    };
    Ok(Command::Event(event))
}
