//! Tests for line parsing within a single env file.

use super::loader;
use crate::env::{Environment, InMemoryEnv};
use crate::error::EnvError;
use crate::fs::MemFs;
use crate::load::FileError;

fn load_content(content: impl AsRef<[u8]>) -> (InMemoryEnv, Result<(), crate::load::LoadError>) {
    let env = InMemoryEnv::new();
    let fs = MemFs::new();
    fs.write("test.env", content);
    let result = loader(&env, &fs).load(["test.env"]);
    (env, result)
}

#[test]
fn test_comments_and_blank_lines_are_skipped() {
    let (env, result) = load_content(
        "# this is a comment\n\
         VAR1=value1\n\
         \n\
         \t   \n\
         \x20   # indented comment\n\
         VAR2=value2\n",
    );

    assert!(result.is_ok());
    assert_eq!(
        env.vars(),
        vec![
            ("VAR1".to_string(), "value1".to_string()),
            ("VAR2".to_string(), "value2".to_string())
        ]
    );
}

#[test]
fn test_names_and_values_are_trimmed() {
    let (env, result) = load_content("  NAME   =   some value  \r\nOTHER=\tx\t\n");

    assert!(result.is_ok());
    assert_eq!(env.get("NAME"), "some value");
    assert_eq!(env.get("OTHER"), "x");
}

#[test]
fn test_value_may_contain_separator() {
    let (env, result) = load_content("URL=postgres://u:p@host/db?sslmode=require\nEMPTY=\n");

    assert!(result.is_ok());
    assert_eq!(env.get("URL"), "postgres://u:p@host/db?sslmode=require");
    assert_eq!(env.lookup("EMPTY"), Some(String::new()));
}

#[test]
fn test_hash_inside_value_is_kept() {
    let (env, result) = load_content("COLOR=#ff0000 # not a comment\n");

    assert!(result.is_ok());
    assert_eq!(env.get("COLOR"), "#ff0000 # not a comment");
}

#[test]
fn test_later_lines_override_earlier_lines() {
    let (env, result) = load_content("VAR=first\nVAR=second\n");

    assert!(result.is_ok());
    assert_eq!(env.get("VAR"), "second");
}

#[test]
fn test_line_without_separator_is_reported_without_leaking_content() {
    let secret = "supersecret_token_12345";
    let (env, result) = load_content(format!("A=1\n{secret}\nB=2\n"));

    let err = result.unwrap_err();
    assert!(matches!(
        err.errors(),
        [FileError::MissingSeparator { line: 2, .. }]
    ));
    assert!(!err.to_string().contains(secret));
    assert_eq!(env.get("A"), "1");
    assert_eq!(env.get("B"), "2");
}

#[test]
fn test_rejected_variable_is_reported_with_line_number() {
    let secret = "hunter2";
    let (env, result) = load_content(format!("=no-name\nBAD\0NAME={secret}\nOK=1\n"));

    let err = result.unwrap_err();
    assert_eq!(err.len(), 2);
    assert!(err.contains(|e| matches!(
        e,
        FileError::Set { line: 1, source: EnvError::InvalidName { .. }, .. }
    )));
    assert!(err.contains(|e| matches!(e, FileError::Set { line: 2, .. })));
    assert!(!err.to_string().contains(secret));
    assert_eq!(env.get("OK"), "1");
}

#[test]
fn test_invalid_utf8_stops_reading_the_file() {
    let (env, result) = load_content(b"A=1\nB=\xff\xfe\nC=3\n");

    let err = result.unwrap_err();
    assert!(matches!(err.errors(), [FileError::Read { line: 2, .. }]));
    assert_eq!(env.get("A"), "1");
    assert!(env.lookup("C").is_none());
}

#[test]
fn test_empty_file_sets_nothing() {
    let (env, result) = load_content("");

    assert!(result.is_ok());
    assert!(env.is_empty());
}
