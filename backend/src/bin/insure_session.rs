//! Drive the session lifecycle from a terminal.
//!
//! The signed-in identity is kept in a state directory, so successive
//! invocations behave like page reloads of the dashboard.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use insure_backend::InsureSettings;
use insure_backend::domain::ports::FixtureCredentialProvider;
use insure_backend::domain::{LoginCredentials, Registration, SessionStore, landing_path};
use insure_backend::outbound::{IdentityFileStore, TokioLatency};

/// `insure-session` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "insure-session",
    about = "Sign in, register, sign out or inspect the persisted dashboard session",
    version
)]
struct CliArgs {
    /// Directory holding the persisted identity. Overrides `INSURE_STATE_DIR`.
    #[arg(long = "state-dir", value_name = "path", global = true)]
    state_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in with one of the known accounts.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
    },
    /// Create a new account and sign it in.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        role: String,
    },
    /// Forget the signed-in identity.
    Logout,
    /// Print the signed-in identity.
    Whoami,
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let outcome = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))
        .and_then(|runtime| runtime.block_on(async_main()));
    match outcome {
        Ok(code) => code,
        Err(error) => {
            eprintln!("insure-session: {error}");
            ExitCode::FAILURE
        }
    }
}

async fn async_main() -> io::Result<ExitCode> {
    let args = CliArgs::try_parse().map_err(io::Error::other)?;
    let settings = InsureSettings::load_from_iter([OsString::from("insure-session")])
        .map_err(|error| io::Error::other(error.to_string()))?;
    let state_dir = args.state_dir.unwrap_or_else(|| settings.state_dir());

    let store = IdentityFileStore::open(state_dir).map_err(io::Error::other)?;
    let mut session = SessionStore::new(
        store,
        Arc::new(FixtureCredentialProvider),
        Arc::new(TokioLatency::new(settings.auth_latency())),
    );
    if let Err(error) = session.restore() {
        warn!(%error, "previous session discarded");
    }

    match args.command {
        Command::Login {
            email,
            password,
            role,
        } => {
            let credentials = LoginCredentials::try_from_parts(&email, &password, &role)
                .map_err(io::Error::other)?;
            if !session.login(&credentials).await.map_err(io::Error::other)? {
                eprintln!("Invalid email, password, or role");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Register {
            name,
            email,
            password,
            role,
        } => {
            let registration = Registration::try_from_parts(&name, &email, &password, &role)
                .map_err(io::Error::other)?;
            session
                .register(&registration)
                .await
                .map_err(io::Error::other)?;
        }
        Command::Logout => {
            session.logout().map_err(io::Error::other)?;
            println!("signed out");
            return Ok(ExitCode::SUCCESS);
        }
        Command::Whoami => {}
    }

    match session.identity() {
        Some(identity) => {
            println!("id={}", identity.id());
            println!("name={}", identity.display_name());
            println!("email={}", identity.email());
            println!("role={}", identity.role());
            println!("landing={}", landing_path(identity.role()));
            Ok(ExitCode::SUCCESS)
        }
        None => {
            println!("not signed in");
            Ok(ExitCode::FAILURE)
        }
    }
}
