use super::*;
use crossbeam_channel::bounded;
use std::io::Cursor;

fn run_script(script: &str) -> (MenuSession, String) {
    run_bytes(script.as_bytes().to_vec())
}

fn run_bytes(script: Vec<u8>) -> (MenuSession, String) {
    let (tx, rx) = bounded::<InputEvent>(8);
    let reader = spawn_input_reader(Cursor::new(script), tx);

    let mut session = MenuSession::new();
    let mut out = Vec::new();
    run_session(rx, &mut session, &Settings::default(), &mut out).expect("session loop");
    reader.join().expect("reader thread").expect("reader result");

    (session, String::from_utf8(out).expect("utf8"))
}

#[test]
fn scripted_add_reaches_catalog() {
    let (session, out) = run_script(
        "open\nname Soup\ndescription Hot soup\nprice 5.50\ncourse Starters\nsubmit\n",
    );

    assert_eq!(session.catalog().count(), 1);
    assert!(!session.draft().is_open());
    assert!(out.contains("Added Soup ($5.50)."));
    assert!(out.contains("Total Menu Items: 1"));
}

#[test]
fn rejected_submit_reports_and_keeps_form() {
    let (session, out) = run_script("open\nname\nsubmit\n");

    assert_eq!(session.catalog().count(), 0);
    assert!(session.draft().is_open());
    assert!(out.contains("Error: Please fill in all fields."));
    assert!(out.ends_with(&render::render_draft(session.draft().view())));
}

#[test]
fn quit_stops_before_later_lines() {
    let (session, _) = run_script("open\nquit\ncancel\n");
    assert!(session.draft().is_open());
}

#[test]
fn cancel_and_unknown_commands_produce_notices() {
    let (_, out) = run_script("open\ncancel\nremove Soup\n");
    assert!(out.contains("Draft discarded."));
    assert!(out.contains("Error: unknown command 'remove'"));
}

#[test]
fn json_listing_is_emitted() {
    let (_, out) = run_script("open\nname A\ndescription B\nprice 1\nsubmit\nlist --json\n");
    let json_start = out.find('[').expect("json array");
    let value: serde_json::Value =
        serde_json::from_str(out[json_start..].trim()).expect("json parse");
    assert_eq!(value.as_array().map(Vec::len), Some(1));
}

#[test]
fn non_utf8_line_does_not_end_the_session() {
    let script = b"open\nname Soup\ndescription caf\xe9\nlist\nquit\ncancel\n";
    let (session, out) = run_bytes(script.to_vec());

    let view = session.draft().view();
    assert!(view.is_open);
    assert_eq!(view.name, "Soup");
    assert_eq!(view.description, "caf\u{FFFD}");
    assert!(out.contains("Total Menu Items: 0"));
}

#[test]
fn crlf_and_missing_final_newline_are_handled() {
    let (session, _) =
        run_script("open\r\nname Soup\r\ndescription Hot soup\r\nprice 4\r\nsubmit");
    assert_eq!(session.catalog().count(), 1);
}
