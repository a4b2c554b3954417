//! Unit tests for session configuration parsing.

use std::collections::HashMap;

use super::*;
use mockable::MockEnv;
use rstest::{fixture, rstest};
use tempfile::NamedTempFile;

fn key_file(len: usize) -> NamedTempFile {
    let file = NamedTempFile::new().expect("temp key file");
    std::fs::write(file.path(), vec![b'k'; len]).expect("write key");
    file
}

fn mock_env(vars: HashMap<&'static str, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

fn release_vars(key: &NamedTempFile) -> HashMap<&'static str, String> {
    HashMap::from([
        (KEY_FILE_ENV, key.path().to_string_lossy().into_owned()),
        (COOKIE_SECURE_ENV, "1".to_owned()),
        (SAMESITE_ENV, "Strict".to_owned()),
        (ALLOW_EPHEMERAL_ENV, "0".to_owned()),
    ])
}

#[fixture]
fn long_key() -> NamedTempFile {
    key_file(MIN_KEY_BYTES)
}

fn rejected(vars: HashMap<&'static str, String>, mode: BuildMode) -> SessionConfigError {
    match session_settings_from_env(&mock_env(vars), mode) {
        Ok(_) => panic!("expected session settings to be rejected"),
        Err(error) => error,
    }
}

#[rstest]
fn release_accepts_explicit_settings(long_key: NamedTempFile) {
    let settings = session_settings_from_env(&mock_env(release_vars(&long_key)), BuildMode::Release)
        .expect("valid settings");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Strict);
}

#[rstest]
#[case(COOKIE_SECURE_ENV)]
#[case(SAMESITE_ENV)]
#[case(ALLOW_EPHEMERAL_ENV)]
fn release_requires_every_toggle(long_key: NamedTempFile, #[case] missing: &'static str) {
    let mut vars = release_vars(&long_key);
    vars.remove(missing);
    let err = rejected(vars, BuildMode::Release);
    assert!(matches!(err, SessionConfigError::MissingEnv { name } if name == missing));
}

#[rstest]
#[case(COOKIE_SECURE_ENV, "maybe")]
#[case(COOKIE_SECURE_ENV, "")]
#[case(SAMESITE_ENV, "Sometimes")]
#[case(ALLOW_EPHEMERAL_ENV, "2")]
fn release_rejects_malformed_toggles(
    long_key: NamedTempFile,
    #[case] name: &'static str,
    #[case] value: &str,
) {
    let mut vars = release_vars(&long_key);
    vars.insert(name, value.to_owned());
    let err = rejected(vars, BuildMode::Release);
    assert!(matches!(err, SessionConfigError::InvalidEnv { name: got, .. } if got == name));
}

#[rstest]
fn release_rejects_insecure_same_site_none(long_key: NamedTempFile) {
    let mut vars = release_vars(&long_key);
    vars.insert(COOKIE_SECURE_ENV, "0".to_owned());
    vars.insert(SAMESITE_ENV, "None".to_owned());
    let err = rejected(vars, BuildMode::Release);
    assert!(matches!(err, SessionConfigError::InsecureSameSiteNone));
}

#[rstest]
fn release_rejects_ephemeral_keys(long_key: NamedTempFile) {
    let mut vars = release_vars(&long_key);
    vars.insert(ALLOW_EPHEMERAL_ENV, "yes".to_owned());
    let err = rejected(vars, BuildMode::Release);
    assert!(matches!(err, SessionConfigError::EphemeralNotAllowed));
}

#[rstest]
fn release_rejects_short_keys() {
    let short = key_file(MIN_KEY_BYTES - 1);
    let err = rejected(release_vars(&short), BuildMode::Release);
    assert!(matches!(
        err,
        SessionConfigError::KeyTooShort { length, min_len: MIN_KEY_BYTES, .. }
            if length == MIN_KEY_BYTES - 1
    ));
}

#[rstest]
fn release_rejects_missing_key_file(long_key: NamedTempFile) {
    let mut vars = release_vars(&long_key);
    vars.insert(KEY_FILE_ENV, "/nonexistent/insure/session_key".to_owned());
    let err = rejected(vars, BuildMode::Release);
    assert!(matches!(err, SessionConfigError::KeyRead { .. }));
}

#[rstest]
fn debug_falls_back_to_defaults() {
    let vars = HashMap::from([(KEY_FILE_ENV, "/nonexistent/insure/session_key".to_owned())]);
    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug defaults");
    assert!(settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::Lax);
}

#[rstest]
#[case(8)]
#[case(40)]
fn debug_tolerates_short_keys(#[case] len: usize) {
    let short = key_file(len);
    let mut vars = release_vars(&short);
    vars.remove(ALLOW_EPHEMERAL_ENV);
    session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug settings");
}

#[rstest]
fn debug_allows_same_site_none_over_http(long_key: NamedTempFile) {
    let mut vars = release_vars(&long_key);
    vars.insert(COOKIE_SECURE_ENV, "false".to_owned());
    vars.insert(SAMESITE_ENV, "none".to_owned());
    let settings =
        session_settings_from_env(&mock_env(vars), BuildMode::Debug).expect("debug settings");
    assert!(!settings.cookie_secure);
    assert_eq!(settings.same_site, SameSite::None);
}

#[rstest]
#[case("1", Some(true))]
#[case(" Yes ", Some(true))]
#[case("n", Some(false))]
#[case("FALSE", Some(false))]
#[case("on", None)]
fn booleans_accept_common_spellings(#[case] raw: &str, #[case] expected: Option<bool>) {
    assert_eq!(parse_bool(raw), expected);
}
