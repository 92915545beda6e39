//! Input reader thread and the single-owner loop that applies events to the session.

use std::{
    borrow::Cow,
    io::{BufRead, Write},
    thread::{self, JoinHandle},
};

use anyhow::Context;
use crossbeam_channel::{Receiver, Sender};
use menu_core::{Command, MenuSession};

use crate::{
    config::Settings,
    controller::events::{parse_line, InputEvent, HELP_TEXT},
    render,
};

/// Reads lines until EOF or until the loop side hangs up. Dropping the sender
/// on return is what ends the session loop.
///
/// Bytes that are not UTF-8 are replaced with U+FFFD; only I/O failures stop
/// the reader.
pub fn spawn_input_reader<R>(
    mut reader: R,
    tx: Sender<InputEvent>,
) -> JoinHandle<anyhow::Result<()>>
where
    R: BufRead + Send + 'static,
{
    thread::spawn(move || {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .context("failed to read input line")?;
            if read == 0 {
                break;
            }
            let line = String::from_utf8_lossy(&buf);
            if let Cow::Owned(_) = line {
                tracing::warn!("input line was not valid UTF-8; replaced invalid bytes");
            }
            let event = parse_line(&line);
            let quit = event == InputEvent::Quit;
            if tx.send(event).is_err() {
                tracing::debug!("session loop gone; input reader stopping");
                break;
            }
            if quit {
                break;
            }
        }
        Ok(())
    })
}

/// Drains events in arrival order, one at a time, until `quit` or until every
/// sender is dropped.
pub fn run_session<W: Write>(
    events: Receiver<InputEvent>,
    session: &mut MenuSession,
    settings: &Settings,
    out: &mut W,
) -> anyhow::Result<()> {
    for event in events.iter() {
        let text = match event {
            InputEvent::Quit => break,
            InputEvent::Blank => continue,
            InputEvent::Help => format!("{HELP_TEXT}\n"),
            InputEvent::Invalid(message) => format!("Error: {message}\n"),
            InputEvent::ShowDraft => render::render_draft(session.draft().view()),
            InputEvent::ShowList { json: false } => render::render_catalog(
                session.catalog(),
                &settings.screen_title,
                &settings.currency_symbol,
            ),
            InputEvent::ShowList { json: true } => {
                let mut json = render::render_catalog_json(session.catalog())
                    .context("failed to serialize catalog")?;
                json.push('\n');
                json
            }
            InputEvent::Session(command) => apply_command(session, settings, command),
        };
        out.write_all(text.as_bytes())
            .context("failed to write output")?;
    }
    out.flush().context("failed to flush output")?;
    Ok(())
}

fn apply_command(session: &mut MenuSession, settings: &Settings, command: Command) -> String {
    let shows_form = command == Command::Open;
    let was_cancel = command == Command::Cancel;

    match session.handle(command) {
        Some(outcome) => {
            let mut text =
                render::render_outcome(outcome, session.catalog(), &settings.currency_symbol);
            if session.draft().is_open() {
                text.push_str(&render::render_draft(session.draft().view()));
            } else {
                text.push_str(&render::render_catalog(
                    session.catalog(),
                    &settings.screen_title,
                    &settings.currency_symbol,
                ));
            }
            text
        }
        None if shows_form => render::render_draft(session.draft().view()),
        None if was_cancel => "Draft discarded.\n".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "tests/orchestration_tests.rs"]
mod tests;
