//! Line-oriented input parsing for the terminal host.

use menu_core::{Command, DraftField};
use shared::domain::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Session(Command),
    ShowList { json: bool },
    ShowDraft,
    Help,
    Quit,
    Blank,
    Invalid(String),
}

pub const HELP_TEXT: &str = "\
Commands:
  open                 show the add-item form
  name <text>          set the dish name
  description <text>   set the dish description
  price <text>         set the price, e.g. 12.99
  course <course>      Starters, Mains or Desserts
  submit               add the drafted item
  cancel               discard the draft and close the form
  draft                show the form
  list [--json]        show the menu
  help                 show this text
  quit                 leave";

/// Everything after the keyword and one separating space is kept verbatim so
/// field text reaches the draft exactly as typed.
pub fn parse_line(line: &str) -> InputEvent {
    let line = line.trim_end_matches(['\r', '\n']).trim_start();
    let (keyword, rest) = line.split_once(' ').unwrap_or((line, ""));

    match keyword.to_ascii_lowercase().as_str() {
        "" => InputEvent::Blank,
        "open" => InputEvent::Session(Command::Open),
        "cancel" => InputEvent::Session(Command::Cancel),
        "submit" | "add" => InputEvent::Session(Command::Submit),
        "name" => InputEvent::Session(Command::SetField(DraftField::Name(rest.to_string()))),
        "description" | "desc" => InputEvent::Session(Command::SetField(
            DraftField::Description(rest.to_string()),
        )),
        "price" => InputEvent::Session(Command::SetField(DraftField::Price(rest.to_string()))),
        "course" => match rest.parse::<Course>() {
            Ok(course) => InputEvent::Session(Command::SetField(DraftField::Course(course))),
            Err(err) => InputEvent::Invalid(err.to_string()),
        },
        "list" => match rest.trim() {
            "" => InputEvent::ShowList { json: false },
            "--json" => InputEvent::ShowList { json: true },
            other => InputEvent::Invalid(format!("unknown list option '{other}'")),
        },
        "draft" => InputEvent::ShowDraft,
        "help" | "?" => InputEvent::Help,
        "quit" | "exit" => InputEvent::Quit,
        other => InputEvent::Invalid(format!("unknown command '{other}'; type 'help'")),
    }
}

#[cfg(test)]
#[path = "tests/events_tests.rs"]
mod tests;
