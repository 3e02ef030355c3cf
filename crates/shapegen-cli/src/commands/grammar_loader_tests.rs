use std::fs;
use std::path::Path;

use indoc::indoc;

use super::CliError;
use super::grammar_loader::{load_grammar, parse_json};
use super::pack::{PackArgs, pack};

const GRAMMAR: &str = indoc! {r#"
    {
      "name": "pairs",
      "rules": {
        "document": {
          "type": "REPEAT",
          "content": { "type": "SYMBOL", "name": "pair" }
        },
        "pair": {
          "type": "SEQ",
          "members": [
            { "type": "SYMBOL", "name": "key" },
            { "type": "STRING", "value": "=" },
            { "type": "SYMBOL", "name": "key" }
          ]
        },
        "key": { "type": "PATTERN", "value": "[a-z]+" }
      }
    }
"#};

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.json");
    fs::write(&path, GRAMMAR).unwrap();

    let grammar = load_grammar(&path).unwrap();
    assert_eq!(grammar.name, "pairs");
    let names: Vec<_> = grammar.rules.keys().map(String::as_str).collect();
    assert_eq!(names, ["document", "pair", "key"]);
}

#[test]
fn pack_then_load_binary() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("grammar.json");
    let bin_path = dir.path().join("grammar.bin");
    fs::write(&json_path, GRAMMAR).unwrap();

    pack(&PackArgs {
        grammar_path: json_path.clone(),
        output: bin_path.clone(),
    })
    .unwrap();

    let from_json = load_grammar(&json_path).unwrap();
    let from_bin = load_grammar(&bin_path).unwrap();
    assert_eq!(from_json, from_bin);
}

#[test]
fn missing_file_is_read_error() {
    let err = load_grammar(Path::new("/nonexistent/grammar.json")).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read '/nonexistent/grammar.json'"));
}

#[test]
fn malformed_json_names_source() {
    let err = parse_json("broken.json", "{ not json").unwrap_err();
    assert!(matches!(err, CliError::Grammar { .. }));
    assert!(err.to_string().starts_with("invalid grammar 'broken.json': JSON parse error"));
}

#[test]
fn corrupt_binary_is_grammar_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grammar.bin");
    fs::write(&path, [0xFF, 0xFF, 0xFF]).unwrap();

    let err = load_grammar(&path).unwrap_err();
    assert!(matches!(err, CliError::Grammar { .. }));
}
