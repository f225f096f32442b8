//! Integration tests against the real process environment.
//!
//! These tests verify that the process-level entry points and the snapshot
//! guard behave like their in-memory counterparts.
//!
//! Invariants / Assumptions:
//! - Every test is `#[serial]` and restores the environment before returning.

use std::ffi::OsString;

use envkit::{ConversionError, Environment, ParseError, ProcessEnv, Snapshot, Vars, convert};
use serial_test::serial;

fn raw_process_vars() -> Vec<(OsString, OsString)> {
    let mut vars: Vec<_> = std::env::vars_os().collect();
    vars.sort();
    vars
}

#[test]
#[serial]
fn test_snapshot_restores_process_environment_exactly() {
    let before = raw_process_vars();
    let snapshot = Snapshot::capture();

    envkit::set("_ENVKIT_IT_ADDED", "added").unwrap();
    if let Some(name) = before.first().and_then(|(name, _)| name.to_str()) {
        envkit::unset([name]).unwrap();
    }
    envkit::clear().unwrap();
    envkit::set("_ENVKIT_IT_OTHER", "x").unwrap();

    snapshot.restore().unwrap();

    assert_eq!(raw_process_vars(), before);
    assert_eq!(envkit::lookup("_ENVKIT_IT_ADDED"), None);
}

#[cfg(unix)]
#[test]
#[serial]
fn test_snapshot_restores_entries_that_are_not_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _guard = Snapshot::capture().guard();
    let raw_value = OsStr::from_bytes(b"a\xFFb");
    let raw_name = OsStr::from_bytes(b"_ENVKIT_IT_RAW_\xFF");
    ProcessEnv
        .set_os(OsStr::new("_ENVKIT_IT_RAW_VALUE"), raw_value)
        .unwrap();
    ProcessEnv.set_os(raw_name, OsStr::new("1")).unwrap();

    let before = raw_process_vars();
    let snapshot = Snapshot::capture();

    envkit::clear().unwrap();
    envkit::set("_ENVKIT_IT_RAW_VALUE", "replaced").unwrap();
    snapshot.restore().unwrap();

    assert_eq!(raw_process_vars(), before);
    assert_eq!(
        std::env::var_os("_ENVKIT_IT_RAW_VALUE").as_deref(),
        Some(raw_value)
    );
    assert_eq!(std::env::var_os(raw_name).as_deref(), Some(OsStr::new("1")));
}

#[cfg(unix)]
#[test]
#[serial]
fn test_parse_reports_value_that_is_not_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let _guard = Snapshot::capture().guard();
    ProcessEnv
        .set_os(OsStr::new("_ENVKIT_IT_LOSSY"), OsStr::from_bytes(b"x\xFF"))
        .unwrap();

    let err = envkit::parse("_ENVKIT_IT_LOSSY", convert::string).unwrap_err();

    assert_eq!(err.conversion_error(), Some(&ConversionError::NotUnicode));
    assert_eq!(envkit::lookup("_ENVKIT_IT_LOSSY"), None);
    assert!(
        !envkit::get_vars(std::iter::empty::<&str>())
            .names()
            .contains(&"_ENVKIT_IT_LOSSY")
    );
}

#[test]
#[serial]
fn test_snapshot_guard_restores_on_drop() {
    temp_env::with_vars([("_ENVKIT_IT_GUARDED", Some("original"))], || {
        {
            let _guard = Snapshot::capture().guard();
            envkit::set("_ENVKIT_IT_GUARDED", "changed").unwrap();
            envkit::set("_ENVKIT_IT_TRANSIENT", "1").unwrap();
        }

        assert_eq!(envkit::get("_ENVKIT_IT_GUARDED"), "original");
        assert_eq!(envkit::lookup("_ENVKIT_IT_TRANSIENT"), None);
    });
}

#[test]
#[serial]
fn test_clear_removes_every_variable() {
    let _guard = Snapshot::capture().guard();
    envkit::set("_ENVKIT_IT_CLEARED", "1").unwrap();

    envkit::clear().unwrap();

    assert!(envkit::get_vars(std::iter::empty::<&str>()).is_empty());
}

#[test]
#[serial]
fn test_vars_set_and_get_vars() {
    let _guard = Snapshot::capture().guard();
    let vars = Vars::from([("_ENVKIT_IT_VAR1", "value1"), ("_ENVKIT_IT_VAR2", "value2")]);

    vars.set().unwrap();

    assert_eq!(
        envkit::get_vars(["_ENVKIT_IT_VAR1", "_ENVKIT_IT_VAR2", "_ENVKIT_IT_VAR3"]),
        vars
    );
    assert_eq!(
        vars.to_string(),
        r#"[_ENVKIT_IT_VAR1="value1",_ENVKIT_IT_VAR2="value2"]"#
    );
}

#[test]
#[serial]
fn test_parse_and_override_process_variables() {
    temp_env::with_vars(
        [
            ("_ENVKIT_IT_INT", Some("123")),
            ("_ENVKIT_IT_URL", Some("http://example.com")),
            ("_ENVKIT_IT_UNSET", None),
        ],
        || {
            assert_eq!(envkit::parse("_ENVKIT_IT_INT", convert::int), Ok(123));

            let url = envkit::parse("_ENVKIT_IT_URL", convert::absolute_url).unwrap();
            assert_eq!(url.scheme(), "http");
            assert_eq!(url.host_str(), Some("example.com"));

            let mut dest = 42;
            let err = envkit::override_var(&mut dest, "_ENVKIT_IT_UNSET", convert::int)
                .unwrap_err();
            assert!(err.matches(&ParseError::not_set("_ENVKIT_IT_UNSET")));
            assert_eq!(dest, 42);
        },
    );
}
