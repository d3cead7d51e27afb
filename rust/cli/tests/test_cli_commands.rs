use ratongato_cli::exit_code;
use ratongato_cli::run_with_input;
use std::io::Cursor;

fn run_args(args: &[&str]) -> (i32, String, String) {
    let mut input = Cursor::new(Vec::new());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut input, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn board_prints_cell_numbers() {
    let (code, out, _) = run_args(&["ratongato", "board"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains(" 7   57  59  61  63"));
    assert!(out.contains(" 7    .   M   .   ."));
}

#[test]
fn cfg_prints_json_with_sources() {
    let (code, out, _) = run_args(&["ratongato", "cfg"]);
    assert_eq!(code, exit_code::SUCCESS);
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    for key in ["cat_player", "mouse_player", "hints"] {
        assert!(v[key].get("value").is_some(), "missing value for {}", key);
        assert!(v[key]["source"].is_string(), "missing source for {}", key);
    }
}

#[test]
fn usage_errors_exit_with_error_code() {
    let (code, _, err) = run_args(&["ratongato"]);
    assert_eq!(code, exit_code::ERROR);
    assert!(err.contains("Commands:"));

    let (code, _, _) = run_args(&["ratongato", "play", "--cat"]);
    assert_eq!(code, exit_code::ERROR);
}

#[test]
fn version_is_not_an_error() {
    let (code, out, _) = run_args(&["ratongato", "--version"]);
    assert_eq!(code, exit_code::SUCCESS);
    assert!(out.contains("ratongato"));
}
