//! Behaviour tests for session configuration toggles.
//!
//! Release builds must be configured explicitly; debug builds warn and fall
//! back so a developer can start the server without any setup.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use actix_web::cookie::SameSite;
use insure_backend::inbound::http::session_config::{
    BuildMode, SessionConfigError, SessionSettings, session_settings_from_env,
};
use mockable::MockEnv;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tempfile::NamedTempFile;

struct SessionConfigWorld {
    vars: RefCell<HashMap<String, String>>,
    mode: RefCell<BuildMode>,
    outcome: RefCell<Option<Result<SessionSettings, SessionConfigError>>>,
    key_files: RefCell<Vec<NamedTempFile>>,
}

impl SessionConfigWorld {
    fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
            mode: RefCell::new(BuildMode::Release),
            outcome: RefCell::new(None),
            key_files: RefCell::new(Vec::new()),
        }
    }

    fn set_env_var(&self, name: &str, value: &str) {
        self.vars
            .borrow_mut()
            .insert(name.to_owned(), value.to_owned());
    }

    fn with_settings(&self, f: impl FnOnce(&SessionSettings)) {
        let outcome = self.outcome.borrow();
        let settings = outcome
            .as_ref()
            .expect("evaluation result")
            .as_ref()
            .expect("expected settings to succeed");
        f(settings);
    }

    fn with_error(&self, f: impl FnOnce(&SessionConfigError)) {
        let outcome = self.outcome.borrow();
        match outcome.as_ref().expect("evaluation result") {
            Ok(_) => panic!("expected settings to fail"),
            Err(error) => f(error),
        }
    }
}

fn mock_env(vars: HashMap<String, String>) -> MockEnv {
    let mut env = MockEnv::new();
    env.expect_string()
        .times(0..)
        .returning(move |key| vars.get(key).cloned());
    env
}

#[fixture]
fn world() -> SessionConfigWorld {
    SessionConfigWorld::new()
}

#[given("a release build")]
fn a_release_build(world: &SessionConfigWorld) {
    *world.mode.borrow_mut() = BuildMode::Release;
}

#[given("a debug build")]
fn a_debug_build(world: &SessionConfigWorld) {
    *world.mode.borrow_mut() = BuildMode::Debug;
    world.set_env_var("SESSION_KEY_FILE", "/nonexistent/session_key");
}

#[given("SESSION_COOKIE_SECURE is set to {value}")]
fn session_cookie_secure_is_set(world: &SessionConfigWorld, value: String) {
    world.set_env_var("SESSION_COOKIE_SECURE", &value);
}

#[given("SESSION_SAMESITE is set to {value}")]
fn session_same_site_is_set(world: &SessionConfigWorld, value: String) {
    world.set_env_var("SESSION_SAMESITE", &value);
}

#[given("SESSION_ALLOW_EPHEMERAL is set to {value}")]
fn session_allow_ephemeral_is_set(world: &SessionConfigWorld, value: String) {
    world.set_env_var("SESSION_ALLOW_EPHEMERAL", &value);
}

#[given("a session key file with {len} bytes")]
fn a_session_key_file_with_bytes(world: &SessionConfigWorld, len: usize) {
    let mut file = NamedTempFile::new().expect("key file");
    file.write_all(&vec![b'k'; len]).expect("write key");
    let path = file.path().to_string_lossy().into_owned();
    world.set_env_var("SESSION_KEY_FILE", &path);
    world.key_files.borrow_mut().push(file);
}

#[when("the session settings are read")]
fn the_session_settings_are_read(world: &SessionConfigWorld) {
    let env = mock_env(world.vars.borrow().clone());
    let mode = *world.mode.borrow();
    *world.outcome.borrow_mut() = Some(session_settings_from_env(&env, mode));
}

#[then("the session settings are accepted")]
fn the_session_settings_are_accepted(world: &SessionConfigWorld) {
    world.with_settings(|_| {});
}

#[then("the session cookie is secure")]
fn the_session_cookie_is_secure(world: &SessionConfigWorld) {
    world.with_settings(|settings| assert!(settings.cookie_secure));
}

#[then("the session cookie uses SameSite {policy}")]
fn the_session_cookie_uses_same_site(world: &SessionConfigWorld, policy: String) {
    let expected = match policy.as_str() {
        "Strict" => SameSite::Strict,
        "Lax" => SameSite::Lax,
        "None" => SameSite::None,
        other => panic!("unknown SameSite policy {other}"),
    };
    world.with_settings(|settings| assert_eq!(settings.same_site, expected));
}

#[then("the session settings are rejected for missing SESSION_COOKIE_SECURE")]
fn rejected_for_missing_cookie_secure(world: &SessionConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(
            error,
            SessionConfigError::MissingEnv {
                name: "SESSION_COOKIE_SECURE"
            }
        ));
    });
}

#[then("the session settings are rejected because ephemeral keys are not allowed")]
fn rejected_because_ephemeral_keys_are_not_allowed(world: &SessionConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(error, SessionConfigError::EphemeralNotAllowed));
    });
}

#[then("the session settings are rejected because SameSite None needs a secure cookie")]
fn rejected_because_same_site_none_needs_a_secure_cookie(world: &SessionConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(error, SessionConfigError::InsecureSameSiteNone));
    });
}

#[then("the session settings are rejected because the key is too short")]
fn rejected_because_the_key_is_too_short(world: &SessionConfigWorld) {
    world.with_error(|error| {
        assert!(matches!(
            error,
            SessionConfigError::KeyTooShort {
                length: 16,
                min_len: 64,
                ..
            }
        ));
    });
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "A complete release configuration is accepted"
)]
fn a_complete_release_configuration_is_accepted(world: SessionConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "Release builds require the secure toggle"
)]
fn release_builds_require_the_secure_toggle(world: SessionConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "Release builds refuse ephemeral keys"
)]
fn release_builds_refuse_ephemeral_keys(world: SessionConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "SameSite None needs a secure cookie"
)]
fn same_site_none_needs_a_secure_cookie(world: SessionConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "Short keys are refused in release builds"
)]
fn short_keys_are_refused_in_release_builds(world: SessionConfigWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/session_config.feature",
    name = "Debug builds fall back to development defaults"
)]
fn debug_builds_fall_back_to_development_defaults(world: SessionConfigWorld) {
    drop(world);
}
