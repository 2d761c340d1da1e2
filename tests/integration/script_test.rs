//! Script runner integration tests.
//!
//! Covers loading command scripts, running them against a session, and both
//! output formats.

use parkade::cli::OutputFormat;
use parkade::error::ParkadeError;
use parkade::repl::{ScriptOutput, ScriptRunner};
use parkade::session::Session;
use tempfile::tempdir;

#[test]
fn test_runner_executes_a_full_script() {
    let mut runner = ScriptRunner::new(Session::new());
    runner.load_commands(
        "create_parking_lot 3\n\
         park KA-01 White car\n\
         park KA-02 Black motorcycle\n\
         type_of_vehicles car\n\
         leave 1\n\
         status",
    );

    let result = runner.run();
    assert_eq!(result.commands_executed, 6);
    assert!(!result.exited);
    assert_eq!(
        result.lines,
        vec![
            "Created a parking lot with 3 slots.",
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Slots for Car vehicles:",
            "Slot No: 1",
            "Slot number 1 is free.",
            "Slot No.\tType\tRegistration No\tColour",
            "2\tMotorcycle\tKA-02\tBlack",
        ]
    );
}

#[test]
fn test_runner_with_prestocked_session() {
    let session = Session::with_capacity(2).unwrap();
    let mut runner = ScriptRunner::new(session);
    runner.load_commands("park KA-01 White car\npark KA-02 Black car\npark KA-03 Red car");

    let result = runner.run();
    assert_eq!(
        result.lines,
        vec![
            "Allocated slot number: 1",
            "Allocated slot number: 2",
            "Sorry, parking lot is full.",
        ]
    );
}

#[test]
fn test_load_script_reads_commands_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.txt");
    std::fs::write(&path, "create_parking_lot 1\npark KA-01 White car\n").unwrap();

    let mut runner = ScriptRunner::new(Session::new());
    runner.load_script(path.to_str().unwrap()).unwrap();
    let result = runner.run();

    assert_eq!(result.commands_executed, 2);
    assert_eq!(
        result.lines,
        vec![
            "Created a parking lot with 1 slots.",
            "Allocated slot number: 1",
        ]
    );
}

#[test]
fn test_load_script_handles_crlf_line_endings() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("commands.txt");
    std::fs::write(&path, "create_parking_lot 1\r\npark KA-01 White car\r\n").unwrap();

    let mut runner = ScriptRunner::new(Session::new());
    runner.load_script(path.to_str().unwrap()).unwrap();
    let result = runner.run();

    assert_eq!(result.lines[1], "Allocated slot number: 1");
}

#[test]
fn test_load_script_missing_file_is_an_error() {
    let mut runner = ScriptRunner::new(Session::new());
    let result = runner.load_script("/nonexistent/parkade_commands.txt");

    let error = result.unwrap_err();
    assert!(matches!(error, ParkadeError::Internal(_)));
    assert!(
        error.to_string().contains("Failed to read script file"),
        "Got: {}",
        error
    );
}

#[test]
fn test_exit_stops_remaining_commands() {
    let mut runner = ScriptRunner::new(Session::new());
    runner.load_commands("create_parking_lot 2\nexit\npark KA-01 White car\nstatus");

    let result = runner.run();
    assert!(result.exited);
    assert_eq!(result.commands_executed, 2);
    assert_eq!(result.lines, vec!["Created a parking lot with 2 slots."]);
}

#[test]
fn test_text_output_matches_the_transcript() {
    let mut runner = ScriptRunner::new(Session::new());
    runner.load_commands("create_parking_lot 2\nstatus");
    let result = runner.run();

    let text = ScriptOutput::new(OutputFormat::Text).format(&result);
    assert_eq!(
        text,
        "Created a parking lot with 2 slots.\n\
         Slot No.\tType\tRegistration No\tColour\n\
         No vehicles currently parked.\n"
    );
}

#[test]
fn test_json_output_contains_full_transcript() {
    let mut runner = ScriptRunner::new(Session::new());
    runner.load_commands("create_parking_lot 2\npark KA-01 White car\nexit");
    let result = runner.run();

    let json = ScriptOutput::new(OutputFormat::Json).format(&result);
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed["lines"][0], "Created a parking lot with 2 slots.");
    assert_eq!(parsed["lines"][1], "Allocated slot number: 1");
    assert_eq!(parsed["lines"].as_array().unwrap().len(), 2);
    assert_eq!(parsed["commands_executed"], 3);
    assert_eq!(parsed["exited"], true);
    assert!(parsed["duration_ms"].is_u64());
}
