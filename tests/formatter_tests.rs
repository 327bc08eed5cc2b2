use game_day_notifications::formatter::{DETAILS_UNAVAILABLE, GameSummary, format_game};
use game_day_notifications::model::GameRecord;
use serde_json::json;

fn load_sample() -> Vec<GameRecord> {
    let body = std::fs::read_to_string("tests/sample_games.json").expect("failed to read sample_games.json");
    serde_json::from_str(&body).expect("sample should decode")
}

fn record(value: serde_json::Value) -> GameRecord {
    serde_json::from_value(value).expect("record should decode")
}

#[test]
fn scheduled_game_has_four_lines_in_order() {
    let games = load_sample();
    let msg = format_game(&games[0]);

    assert_eq!(
        msg,
        "Game Status: Scheduled\nRed Sox vs Yankees\nStart Time: 19:05\nChannel: ESPN\n"
    );
    assert_eq!(msg.lines().count(), 4);
    assert!(!msg.contains("Inning"), "message was: {}", msg);
    assert!(!msg.contains("Score"), "message was: {}", msg);
}

#[test]
fn scheduled_game_never_shows_innings_even_when_present() {
    let game = record(json!({
        "Status": "Scheduled",
        "AwayTeam": { "TeamName": "Mets" },
        "HomeTeam": { "TeamName": "Phillies" },
        "FinalScore": "0-0",
        "Innings": [{ "Number": 1, "AwayScore": 0, "HomeScore": 0 }]
    }));
    let msg = format_game(&game);
    assert_eq!(msg.lines().count(), 4);
    assert!(!msg.contains("Inning"), "message was: {}", msg);
    assert!(!msg.contains("Score"), "message was: {}", msg);
}

#[test]
fn in_progress_game_shows_cumulative_innings() {
    let games = load_sample();
    let msg = format_game(&games[1]);

    assert_eq!(
        msg,
        "Game Status: InProgress\n\
         Dodgers vs Giants\n\
         Current Score: 3-2\n\
         Last Play: Betts doubles to left field\n\
         Channel: FS1\n\
         Inning Scores: Inning 1: 1-0,Inning 2: 1-2,Inning 3: 3-2\n"
    );
}

#[test]
fn in_progress_totals_never_decrease() {
    let game = record(json!({
        "Status": "InProgress",
        "Innings": [
            { "Number": 1, "AwayScore": 0, "HomeScore": 3 },
            { "Number": 2, "AwayScore": 4, "HomeScore": 0 },
            { "Number": 3 },
            { "Number": 4, "AwayScore": 1, "HomeScore": 1 }
        ]
    }));
    let msg = format_game(&game);
    let line = msg.lines().find(|l| l.starts_with("Inning Scores: ")).expect("inning line");
    let innings = line.trim_start_matches("Inning Scores: ");

    let mut last = (0, 0);
    for entry in innings.split(',') {
        let score = entry.split(": ").nth(1).expect("score part");
        let (away, home) = score.split_once('-').expect("away-home");
        let current: (i64, i64) = (away.parse().unwrap(), home.parse().unwrap());
        assert!(current.0 >= last.0 && current.1 >= last.1, "totals went backwards in {}", innings);
        last = current;
    }
    assert_eq!(last, (5, 4));
}

#[test]
fn in_progress_without_fields_uses_placeholders() {
    let msg = format_game(&record(json!({ "Status": "InProgress" })));
    assert_eq!(
        msg,
        "Game Status: InProgress\nN/A vs N/A\nCurrent Score: N/A\nLast Play: N/A\nChannel: N/A\nInning Scores: \n"
    );
}

#[test]
fn other_statuses_have_three_lines_ending_in_notice() {
    for status in ["Final", "Postponed", "F/OT", ""] {
        let game = record(json!({
            "Status": status,
            "AwayTeam": { "TeamName": "Cubs" },
            "HomeTeam": { "TeamName": "Cardinals" },
            "FinalScore": "5-4",
            "Channel": "MLB Network",
            "Innings": [{ "Number": 1, "AwayScore": 5, "HomeScore": 4 }]
        }));
        let msg = format_game(&game);
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(lines.len(), 3, "message was: {}", msg);
        assert_eq!(lines[0], format!("Game Status: {}", status));
        assert_eq!(lines[1], "Cubs vs Cardinals");
        assert_eq!(lines[2], DETAILS_UNAVAILABLE);
    }
}

#[test]
fn missing_status_renders_placeholder() {
    let msg = format_game(&record(json!({})));
    assert_eq!(msg, "Game Status: N/A\nN/A vs N/A\nDetails are unavailable at the moment.\n");
}

#[test]
fn bare_team_strings_and_missing_names() {
    let games = load_sample();
    let msg = format_game(&games[3]);
    assert!(msg.contains("SEA vs N/A\n"), "message was: {}", msg);
    assert!(msg.contains("Channel: N/A\n"), "message was: {}", msg);
}

#[test]
fn formatting_is_idempotent() {
    for game in load_sample() {
        assert_eq!(format_game(&game), format_game(&game));
    }
}

#[test]
fn summary_variant_follows_status() {
    let games = load_sample();
    assert!(matches!(GameSummary::from(&games[0]), GameSummary::Scheduled { .. }));
    assert!(matches!(GameSummary::from(&games[1]), GameSummary::InProgress { .. }));
    assert!(matches!(
        GameSummary::from(&games[2]),
        GameSummary::Unavailable { status: "Final", .. }
    ));
}
