//! Process settings loaded via OrthoConfig.
//!
//! Values layer defaults, an optional configuration file, `INSURE_*`
//! environment variables and command-line flags, in increasing precedence.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STATE_DIR: &str = ".insure";

/// Settings shared by the API server and the session CLI.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "INSURE")]
pub struct InsureSettings {
    /// Address the API server listens on.
    pub host: Option<IpAddr>,
    /// Port the API server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// Simulated sign-in and submission delay in milliseconds.
    #[ortho_config(default = 1000)]
    pub auth_latency_ms: u64,
    /// Directory holding the CLI's persisted identity.
    pub state_dir: Option<PathBuf>,
}

impl InsureSettings {
    /// Socket address for the API server.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(IpAddr::V4(Ipv4Addr::UNSPECIFIED)),
            self.port,
        )
    }

    /// Simulated network delay.
    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    /// Where the CLI keeps its identity file.
    pub fn state_dir(&self) -> PathBuf {
        self.state_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings loading.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_without_flags() -> InsureSettings {
        InsureSettings::load_from_iter([OsString::from("insure-backend")])
            .expect("settings should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env([
            ("INSURE_HOST", None::<String>),
            ("INSURE_PORT", None::<String>),
            ("INSURE_AUTH_LATENCY_MS", None::<String>),
            ("INSURE_STATE_DIR", None::<String>),
        ]);

        let settings = load_without_flags();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([0, 0, 0, 0], 8080)));
        assert_eq!(settings.auth_latency(), Duration::from_secs(1));
        assert_eq!(settings.state_dir(), PathBuf::from(".insure"));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("INSURE_HOST", Some("127.0.0.1".to_owned())),
            ("INSURE_PORT", Some("9090".to_owned())),
            ("INSURE_AUTH_LATENCY_MS", Some("0".to_owned())),
            ("INSURE_STATE_DIR", Some("/tmp/insure-state".to_owned())),
        ]);

        let settings = load_without_flags();
        assert_eq!(settings.bind_addr(), SocketAddr::from(([127, 0, 0, 1], 9090)));
        assert_eq!(settings.auth_latency(), Duration::ZERO);
        assert_eq!(settings.state_dir(), PathBuf::from("/tmp/insure-state"));
    }

    #[rstest]
    fn partial_environment_keeps_remaining_defaults() {
        let _guard = lock_env([
            ("INSURE_HOST", None::<String>),
            ("INSURE_PORT", None::<String>),
            ("INSURE_AUTH_LATENCY_MS", None::<String>),
            ("INSURE_STATE_DIR", Some("/tmp/insure-cli".to_owned())),
        ]);

        let settings = load_without_flags();
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.auth_latency_ms, 1000);
        assert_eq!(settings.state_dir(), PathBuf::from("/tmp/insure-cli"));
    }
}
