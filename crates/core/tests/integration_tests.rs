//! Integration tests for rust-prompt-core
//!
//! These tests drive whole prompt sessions through a [`Console`] with scripted
//! input and check both the answers and what was printed.

use rust_prompt_core::config::{get_config_path, load_defaults, Defaults};
use rust_prompt_core::confirm::QuestionMode;
use rust_prompt_core::error::Error;
use rust_prompt_core::line_reader::LineReader;
use rust_prompt_core::matcher::MatchPolicy;
use rust_prompt_core::{Cancellation, Console};
use std::io::{Cursor, Write};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

fn clubs() -> Vec<String> {
    vec![
        "FC Barcelona".to_string(),
        "Spartak Moscow".to_string(),
        "Manchester United".to_string(),
        "Juventus".to_string(),
    ]
}

fn scripted(input: &str) -> Console<Vec<u8>> {
    Console::new(LineReader::new(Cursor::new(input.to_string())), Vec::new())
}

/// Paging through the football clubs and picking one
#[test]
fn test_football_clubs_walkthrough() {
    let mut select = Defaults::default().select("Which football club is your favorite?", clubs());
    select.paging = 2;

    let mut console = scripted("n\nn\n1\n");
    let picked = console.select_single(&select, &Cancellation::new()).unwrap();
    assert_eq!(picked, 1);
    assert_eq!(clubs()[picked], "Spartak Moscow");

    let out = String::from_utf8(console.into_output()).unwrap();
    let expected = "Which football club is your favorite?\n\
                    0) FC Barcelona\n\
                    1) Spartak Moscow\n\
                    Command (? for help): \
                    Which football club is your favorite?\n\
                    2) Manchester United\n\
                    3) Juventus\n\
                    Command (? for help): \
                    No options ahead\n\
                    Command (? for help): ";
    assert_eq!(out, expected);
}

/// Selecting every club that won the Champions League after filtering
#[test]
fn test_multiple_pick_with_wildcard_after_filter() {
    let select = Defaults::default().select("Which won Champions League?", clubs());
    let mut console = scripted("/n\n*\n");
    let picked = console
        .select_multiple(&select, &Cancellation::new())
        .unwrap();
    // Spartak Moscow has no `n`.
    assert_eq!(picked, vec![0, 2, 3]);

    let mut console = scripted("/u\n*\n");
    let picked = console
        .select_multiple(&select, &Cancellation::new())
        .unwrap();
    assert_eq!(picked, vec![2, 3]);
}

/// A whole session: name, confirmation, then a menu
#[test]
fn test_session_over_one_reader() {
    let defaults = Defaults::default();
    let cancel = Cancellation::new();
    let mut console = scripted("Ada\n\n3\n");

    let name = console.read_line(&defaults.prompt("What's your name? "), &cancel).unwrap();
    assert_eq!(name, "Ada");

    let go = console
        .confirm(&defaults.question(format!("{name}, do you want to continue?")), &cancel)
        .unwrap();
    assert!(go);

    let club = console
        .select_single(&defaults.select("Favorite?", clubs()), &cancel)
        .unwrap();
    assert_eq!(club, 3);

    assert!(matches!(
        console.read_line(&defaults.prompt("More? "), &cancel),
        Err(Error::EndOfInput)
    ));
}

/// A timed out prompt does not break the next one on the same reader
#[test]
fn test_read_after_expired_deadline() {
    let reader = LineReader::new(Cursor::new("later\n".to_string()));
    let mut console = Console::new(reader, Vec::new());
    let defaults = Defaults::default();

    let started = Instant::now();
    let expired = Cancellation::with_deadline(Instant::now());
    let result = console.read_line(&defaults.prompt("Quick: "), &expired);
    assert!(matches!(result, Err(Error::DeadlineExceeded)));
    assert!(started.elapsed() < Duration::from_secs(1));

    let line = console
        .read_line(&defaults.prompt("Again: "), &Cancellation::new())
        .unwrap();
    assert_eq!(line, "later");
}

/// Loading defaults from a YAML file and building prompts from them
#[test]
fn test_defaults_from_file() {
    let yaml_content = r#"
prompt:
  verbose: true
  prompt: "> "
question:
  strict: true
  mode: new-line
select:
  filter: false
  paging: 2
  matcher: exact-case
theme:
  result_color:
    name: green
  error_color:
    ansi: 160
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let defaults = load_defaults(&temp_path).unwrap();
    assert!(defaults.prompt.verbose);
    assert_eq!(defaults.prompt.prompt, "> ");
    assert!(defaults.question.strict);
    assert_eq!(defaults.question.mode, QuestionMode::NewLine);
    assert!(defaults.question.default);
    assert!(!defaults.select.filter);
    assert_eq!(defaults.select.paging, 2);
    assert_eq!(defaults.select.matcher, MatchPolicy::ExactCase);
    assert_eq!(
        defaults.theme.result_color.as_ref().unwrap().name,
        Some("green".to_string())
    );
    assert_eq!(defaults.theme.error_color.as_ref().unwrap().ansi, Some(160));

    let mut console = scripted("maybe\nn\n");
    let answer = console
        .confirm(&defaults.question("Proceed?"), &Cancellation::new())
        .unwrap();
    assert!(!answer);
    let out = String::from_utf8(console.into_output()).unwrap();
    assert_eq!(
        out,
        "Proceed?\nCommand [y/n]: Unexpected answer\nProceed?\nCommand [y/n]: "
    );
}

#[test]
fn test_missing_and_empty_defaults_files() {
    let defaults = load_defaults("/nonexistent/rust-prompt/config.yml").unwrap();
    assert_eq!(defaults, Defaults::default());

    let temp_file = NamedTempFile::new().unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();
    assert_eq!(load_defaults(&temp_path).unwrap(), Defaults::default());
}

#[test]
fn test_invalid_defaults_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "select:\n  matcher: telepathy\n").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    match load_defaults(&temp_path) {
        Err(Error::Yaml { path, .. }) => assert_eq!(path, temp_path),
        other => panic!("expected a YAML error, got {other:?}"),
    }
}

#[test]
fn test_custom_config_path_is_used() {
    assert_eq!(get_config_path(&Some("/etc/rp.yml".to_string())), "/etc/rp.yml");
}
